use maud::Markup;
use poem::http::StatusCode;
use poem::web::{Data, Form, Html};
use poem::{handler, IntoResponse, Response};

use crate::prediction::responses::PredictionResponse;
use crate::prelude::*;
use crate::web::form::AssessmentForm;
use crate::web::partials::{notification, page};
use crate::web::state::State;

/// Collects the submitted fields, validates them and forwards the payload
/// to the prediction service. The form is re-rendered with a notification
/// on every failure, with the result panel on success.
#[instrument(skip_all)]
#[handler]
pub async fn post(Form(form): Form<AssessmentForm>, Data(state): Data<&State>) -> Response {
    let _permit = match state.try_begin_submission() {
        Ok(permit) => permit,
        Err(_) => {
            info!("rejected a concurrent submission");
            let notice = notification("is-warning", "An analysis is already running, try again in a moment.");
            return render(&form, Some(notice), None, StatusCode::CONFLICT);
        }
    };

    let payload = match form.collect() {
        Ok(payload) => payload,
        Err(error) => {
            info!("invalid submission: {}", error);
            let notice = notification("is-danger", &error.to_string());
            return render(&form, Some(notice), None, StatusCode::BAD_REQUEST);
        }
    };

    let start_instant = Instant::now();
    match state.predictor.predict(&payload).await {
        Ok(response) => {
            info!(
                risk_score = response.risk_score,
                failure_in_30_days = response.failure_in_30_days,
                elapsed = ?start_instant.elapsed(),
                "assessed"
            );
            render(&form, None, Some(&response), StatusCode::OK)
        }
        Err(error) => {
            warn!("{}", error);
            let notice = notification("is-danger", &error.to_string());
            render(&form, Some(notice), None, StatusCode::BAD_GATEWAY)
        }
    }
}

fn render(
    form: &AssessmentForm,
    notice: Option<Markup>,
    result: Option<&PredictionResponse>,
    status: StatusCode,
) -> Response {
    (status, Html(page(form, notice, result).into_string())).into_response()
}
