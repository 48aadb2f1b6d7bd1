use std::future::Future;

use tcc_models::{
    contact::{FieldErrors, FieldUpdate, FormState},
    submission::SubmissionOutcome,
};
use tokio::sync::watch;

pub mod validate;

/// Owns the state of the contact form and drives its submission.
///
/// Editing a field only clears the error of that field. All rules are
/// evaluated again on the next [`submit`](Self::submit), so errors of other
/// fields stay visible while the user is typing.
pub trait ContactFormFeatureService: Send + Sync + 'static {
    /// Returns a snapshot of the current form state.
    fn state(&self) -> FormState;

    /// Returns a receiver that is notified on every change of the form state.
    fn subscribe(&self) -> watch::Receiver<FormState>;

    /// Sets a single field and clears the error recorded for it, if any.
    fn update_field(&self, update: FieldUpdate);

    /// Runs a full validation pass over the current fields.
    ///
    /// The result replaces the recorded errors unless a submission is pending.
    fn validate(&self) -> FieldErrors;

    /// Validates the form and, if it is valid, sends it.
    ///
    /// Calling this while another submission is pending has no effect.
    fn submit(&self) -> impl Future<Output = SubmitAttempt> + Send;
}

/// What a call to [`ContactFormFeatureService::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed, nothing was sent.
    Invalid(FieldErrors),
    /// Another submission was still pending, nothing was sent.
    Busy,
    /// The form was sent and the transport has resolved.
    Completed(SubmissionOutcome),
}
