//! Per-view fetch status.

use std::future::Future;

use crate::error::AppError;

/// Outcome of the most recent fetch triggered by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    NotStarted,
    Loading,
    Succeeded(T),
    Failed(AppError),
}

impl<T> FetchStatus<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> Default for FetchStatus<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> From<Result<T, AppError>> for FetchStatus<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(payload) => Self::Succeeded(payload),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Status holder owned by a single view.
///
/// Every trigger moves the view to [`FetchStatus::Loading`] and then to a
/// terminal state, replacing whatever the previous trigger left behind.
#[derive(Debug)]
pub struct ViewLoader<T> {
    status: FetchStatus<T>,
}

impl<T> Default for ViewLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewLoader<T> {
    pub fn new() -> Self {
        Self {
            status: FetchStatus::NotStarted,
        }
    }

    pub fn status(&self) -> &FetchStatus<T> {
        &self.status
    }

    /// Marks a new trigger, discarding the previous outcome.
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Records the outcome of the current trigger.
    pub fn finish(&mut self, result: Result<T, AppError>) -> &FetchStatus<T> {
        self.status = result.into();
        &self.status
    }

    /// Runs `fetch` as a new trigger and records its outcome.
    pub async fn load<F>(&mut self, fetch: F) -> &FetchStatus<T>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        self.begin();
        let result = fetch.await;
        self.finish(result)
    }
}
