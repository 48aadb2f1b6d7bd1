use pretty_assertions::assert_eq;
use tcc_core_contact_contracts::ContactFormFeatureService;
use tcc_models::{
    contact::{Field, FieldError, FieldErrors, FieldUpdate, FormFields},
    submission::SubmissionStatus,
};
use tcc_transport_contracts::MockSubmissionTransportService;

use super::{ana, fill, sut};

#[test]
fn sets_value() {
    // Arrange
    let sut = sut(MockSubmissionTransportService::new());

    // Act
    fill(&sut, ana());

    // Assert
    let state = sut.state();
    assert_eq!(state.fields, ana());
    assert!(state.errors.is_empty());
    assert_eq!(state.status, SubmissionStatus::Idle);
}

#[test]
fn clears_only_own_error() {
    // Arrange
    let sut = sut(MockSubmissionTransportService::new());
    sut.validate();

    // Act
    sut.update_field(FieldUpdate::Name("x".into()));

    // Assert
    assert_eq!(
        sut.state().errors,
        [
            FieldError::EmailRequired,
            FieldError::SubjectRequired,
            FieldError::MessageRequired,
            FieldError::ConsentRequired,
        ]
        .into_iter()
        .collect::<FieldErrors>()
    );
}

#[test]
fn clears_error_without_revalidating() {
    // Arrange
    let sut = sut(MockSubmissionTransportService::new());
    sut.validate();

    // Act
    sut.update_field(FieldUpdate::Email("still not an email".into()));
    sut.update_field(FieldUpdate::Message("short".into()));

    // Assert
    let errors = sut.state().errors;
    assert!(!errors.contains(Field::Email));
    assert!(!errors.contains(Field::Message));
    assert_eq!(errors.len(), 3);
}

#[test]
fn without_error_leaves_errors_untouched() {
    // Arrange
    let sut = sut(MockSubmissionTransportService::new());
    fill(
        &sut,
        FormFields {
            consent: false,
            ..ana()
        },
    );
    sut.validate();

    // Act
    sut.update_field(FieldUpdate::Message("Outra mensagem qualquer".into()));

    // Assert
    let state = sut.state();
    assert_eq!(state.fields.message, "Outra mensagem qualquer");
    assert_eq!(
        state.errors,
        [FieldError::ConsentRequired]
            .into_iter()
            .collect::<FieldErrors>()
    );
}

#[test]
fn notifies_subscribers() {
    // Arrange
    let sut = sut(MockSubmissionTransportService::new());
    let mut updates = sut.subscribe();

    // Act
    sut.update_field(FieldUpdate::Consent(true));

    // Assert
    assert!(updates.has_changed().unwrap());
    assert!(updates.borrow_and_update().fields.consent);
}
