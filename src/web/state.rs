use tokio::sync::{OwnedSemaphorePermit, Semaphore, TryAcquireError};

use crate::geolocation::Geolocator;
use crate::prediction;
use crate::prelude::*;

/// Web application global state.
#[derive(Clone)]
pub struct State {
    pub predictor: prediction::Client,
    pub geolocator: Arc<dyn Geolocator>,

    /// One submission at a time, the busy indicator is authoritative.
    in_flight: Arc<Semaphore>,
}

impl State {
    pub fn new(predictor: prediction::Client, geolocator: Arc<dyn Geolocator>) -> Self {
        Self {
            predictor,
            geolocator,
            in_flight: Arc::new(Semaphore::new(1)),
        }
    }

    /// Claims the busy indicator for the duration of one submission.
    /// The permit is released on drop, on success and failure alike.
    pub fn try_begin_submission(&self) -> StdResult<OwnedSemaphorePermit, TryAcquireError> {
        Arc::clone(&self.in_flight).try_acquire_owned()
    }
}
