use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tcc_core_contact_contracts::{
    validate::ContactFormValidateService, ContactFormFeatureService, SubmitAttempt,
};
use tcc_models::{
    contact::{FieldErrors, FieldUpdate, FormFields, FormState},
    submission::{SubmissionOutcome, SubmissionStatus},
};
use tcc_transport_contracts::SubmissionTransportService;
use tcc_utils::trace_instrument;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

pub mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub struct ContactFormFeatureServiceImpl<Validate, Transport> {
    validate: Validate,
    transport: Transport,
    state: watch::Sender<FormState>,
}

impl<Validate, Transport> ContactFormFeatureServiceImpl<Validate, Transport> {
    pub fn new(validate: Validate, transport: Transport) -> Self {
        Self {
            validate,
            transport,
            state: watch::Sender::new(FormState::default()),
        }
    }
}

impl<Validate, Transport> ContactFormFeatureService
    for ContactFormFeatureServiceImpl<Validate, Transport>
where
    Validate: ContactFormValidateService,
    Transport: SubmissionTransportService,
{
    fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    #[trace_instrument(skip(self, update), fields(field = %update.field()))]
    fn update_field(&self, update: FieldUpdate) {
        self.state.send_modify(|state| {
            let field = update.field();
            state.fields.apply(update);
            state.errors.remove(field);
        });
    }

    #[trace_instrument(skip(self))]
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        self.state.send_if_modified(|state| {
            errors = self.validate.validate(&state.fields);
            if state.status.is_pending() || state.errors == errors {
                return false;
            }
            state.errors = errors.clone();
            true
        });
        errors
    }

    #[trace_instrument(skip(self))]
    async fn submit(&self) -> SubmitAttempt {
        let fields = match self.begin_submission() {
            Ok(fields) => fields,
            Err(attempt) => {
                match &attempt {
                    SubmitAttempt::Invalid(errors) => {
                        debug!(errors = errors.len(), "contact form is invalid")
                    }
                    _ => debug!("another submission is still pending"),
                }
                return attempt;
            }
        };

        info!("submitting contact form");
        let pending = PendingSubmission(Some(&self.state));

        let submission = async { self.transport.submit(fields).await };
        let outcome = match AssertUnwindSafe(submission).catch_unwind().await {
            Ok(Ok(())) => {
                info!("contact form submitted");
                SubmissionOutcome::Ok
            }
            Ok(Err(err)) => {
                warn!(%err, "failed to submit contact form");
                SubmissionOutcome::Error
            }
            Err(_) => {
                error!("submission transport panicked");
                SubmissionOutcome::Error
            }
        };

        pending.resolve(outcome);
        SubmitAttempt::Completed(outcome)
    }
}

impl<Validate, Transport> ContactFormFeatureServiceImpl<Validate, Transport>
where
    Validate: ContactFormValidateService,
{
    /// Moves the form into the pending state and returns the fields to send,
    /// or explains why no submission was started.
    fn begin_submission(&self) -> Result<FormFields, SubmitAttempt> {
        let mut result = Err(SubmitAttempt::Busy);
        self.state.send_if_modified(|state| {
            if state.status.is_pending() {
                return false;
            }

            let errors = self.validate.validate(&state.fields);
            if !errors.is_empty() {
                let modified = state.errors != errors;
                state.errors = errors.clone();
                result = Err(SubmitAttempt::Invalid(errors));
                return modified;
            }

            state.errors = errors;
            state.status = SubmissionStatus::Pending;
            result = Ok(state.fields.clone());
            true
        });
        result
    }
}

/// Leaves the pending state exactly once. If the submission future is dropped
/// before the transport resolved, the attempt counts as failed.
struct PendingSubmission<'a>(Option<&'a watch::Sender<FormState>>);

impl PendingSubmission<'_> {
    fn resolve(mut self, outcome: SubmissionOutcome) {
        if let Some(state) = self.0.take() {
            finish_submission(state, outcome);
        }
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.0.take() {
            warn!("contact form submission was dropped before it resolved");
            finish_submission(state, SubmissionOutcome::Error);
        }
    }
}

fn finish_submission(state: &watch::Sender<FormState>, outcome: SubmissionOutcome) {
    state.send_modify(|state| {
        state.status = outcome.into();
        if outcome == SubmissionOutcome::Ok {
            state.fields = FormFields::default();
            state.errors = FieldErrors::new();
        }
    });
}
