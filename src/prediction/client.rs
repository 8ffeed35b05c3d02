use clap::{crate_name, crate_version};
use reqwest::StatusCode;

use crate::prediction::requests::PredictionRequest;
use crate::prediction::responses::PredictionResponse;
use crate::prelude::*;

/// Client of the external prediction service.
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!(crate_name!(), "/", crate_version!()))
                .build()?,
            base_url: base_url.into(),
        })
    }

    /// Posts the payload and waits for the assessment.
    ///
    /// One request per submission, no retry, no timeout, no cancellation.
    /// A non-2xx answer is surfaced with its status code and body text.
    #[instrument(skip_all, fields(install_year = request.install_year))]
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> StdResult<PredictionResponse, PredictError> {
        debug!(base_url = self.base_url.as_str(), "submitting…");
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("failed to reach the prediction service: {0}")]
    Request(#[from] reqwest::Error),

    #[error("prediction failed: {status} - {body}")]
    Status { status: StatusCode, body: String },
}
