use poem::handler;
use poem::web::Html;

use crate::prelude::*;
use crate::web::form::AssessmentForm;
use crate::web::partials::page;

/// Home page: an empty asset form next to the result placeholder.
#[instrument(skip_all)]
#[handler]
pub async fn get() -> Html<String> {
    Html(page(&AssessmentForm::default(), None, None).into_string())
}
