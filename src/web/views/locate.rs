use poem::handler;
use poem::web::{Data, Form, Html};

use crate::prelude::*;
use crate::web::form::AssessmentForm;
use crate::web::partials::{notification, page};
use crate::web::state::State;

/// Fills the exact-location inputs from the geolocation service.
/// A denial only annotates the locate control, the form stays usable.
#[instrument(skip_all)]
#[handler]
pub async fn post(Form(mut form): Form<AssessmentForm>, Data(state): Data<&State>) -> Html<String> {
    let notice = match state.geolocator.current_position().await {
        Ok(position) => {
            form.latitude = position.display_latitude();
            form.longitude = position.display_longitude();
            None
        }
        Err(error) => {
            warn!("{}", error);
            Some(notification("is-warning", &error.to_string()))
        }
    };
    Html(page(&form, notice, None).into_string())
}
