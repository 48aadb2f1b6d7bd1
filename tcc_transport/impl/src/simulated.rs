use std::{
    sync::{Mutex, PoisonError},
    time::Duration,
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tcc_models::{contact::FormFields, submission::SubmissionSuccessRate};
use tcc_transport_contracts::{SubmissionTransportError, SubmissionTransportService};
use tcc_utils::trace_instrument;
use tracing::debug;

/// Stand-in for a real transport: waits for a fixed delay and then accepts or
/// rejects the message at random.
#[derive(Debug)]
pub struct SimulatedSubmissionTransport {
    config: SimulatedSubmissionTransportConfig,
    rng: Mutex<StdRng>,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmissionTransportConfig {
    pub delay: Duration,
    pub success_rate: SubmissionSuccessRate,
}

impl SimulatedSubmissionTransport {
    pub fn new(config: SimulatedSubmissionTransportConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Uses `rng` to decide the outcome of each submission.
    pub fn with_rng(config: SimulatedSubmissionTransportConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }
}

impl SubmissionTransportService for SimulatedSubmissionTransport {
    #[trace_instrument(skip(self, fields))]
    async fn submit(&self, fields: FormFields) -> Result<(), SubmissionTransportError> {
        debug!(
            message_chars = fields.message.chars().count(),
            delay = ?self.config.delay,
            "simulating submission"
        );

        tokio::time::sleep(self.config.delay).await;

        let accepted = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_bool(*self.config.success_rate);
        accepted
            .then_some(())
            .ok_or(SubmissionTransportError::Rejected)
    }
}
