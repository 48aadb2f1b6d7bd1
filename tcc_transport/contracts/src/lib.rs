use std::future::Future;

use tcc_models::contact::FormFields;
use thiserror::Error;

/// Delivers a validated contact form to wherever messages are received.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionTransportService: Send + Sync + 'static {
    /// Sends `fields` and resolves once the receiving side has accepted or
    /// refused the message.
    fn submit(
        &self,
        fields: FormFields,
    ) -> impl Future<Output = Result<(), SubmissionTransportError>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmissionTransportError {
    #[error("The message was rejected by the receiving side.")]
    Rejected,
    #[error("The submission did not complete in time.")]
    Timeout,
    #[error("The receiving side could not be reached.")]
    Unreachable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockSubmissionTransportService {
    pub fn with_submit(
        mut self,
        fields: FormFields,
        result: Result<(), SubmissionTransportError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
