use std::time::Duration;

use tcc_models::contact::FormFields;
use tcc_transport_contracts::{SubmissionTransportError, SubmissionTransportService};
use tcc_utils::trace_instrument;
use tracing::warn;

/// Bounds the time a wrapped transport may take for one submission.
///
/// Without a timeout every call is forwarded unchanged.
#[derive(Debug, Clone)]
pub struct TimeoutSubmissionTransport<Inner> {
    inner: Inner,
    timeout: Option<Duration>,
}

impl<Inner> TimeoutSubmissionTransport<Inner> {
    pub fn new(inner: Inner, timeout: Option<Duration>) -> Self {
        Self { inner, timeout }
    }
}

impl<Inner> SubmissionTransportService for TimeoutSubmissionTransport<Inner>
where
    Inner: SubmissionTransportService,
{
    #[trace_instrument(skip(self, fields))]
    async fn submit(&self, fields: FormFields) -> Result<(), SubmissionTransportError> {
        let submission = self.inner.submit(fields);

        let Some(timeout) = self.timeout else {
            return submission.await;
        };

        tokio::time::timeout(timeout, submission)
            .await
            .unwrap_or_else(|_| {
                warn!(?timeout, "submission timed out");
                Err(SubmissionTransportError::Timeout)
            })
    }
}
