use tcc_core_contact_contracts::ContactFormFeatureService;
use tcc_models::contact::{FieldUpdate, FormFields};
use tcc_transport_contracts::MockSubmissionTransportService;

use crate::{validate::ContactFormValidateServiceImpl, ContactFormFeatureServiceImpl};

mod update_field;

type Sut =
    ContactFormFeatureServiceImpl<ContactFormValidateServiceImpl, MockSubmissionTransportService>;

fn sut(transport: MockSubmissionTransportService) -> Sut {
    ContactFormFeatureServiceImpl::new(ContactFormValidateServiceImpl, transport)
}

fn ana() -> FormFields {
    FormFields {
        name: "Ana".into(),
        email: "ana@x.com".into(),
        subject: "Dúvida".into(),
        message: "Gostaria de saber mais detalhes".into(),
        consent: true,
    }
}

fn invalid() -> FormFields {
    FormFields {
        name: "".into(),
        email: "bad".into(),
        subject: "".into(),
        message: "short".into(),
        consent: false,
    }
}

/// Enters `fields` into the form one field at a time.
fn fill(sut: &impl ContactFormFeatureService, fields: FormFields) {
    let FormFields {
        name,
        email,
        subject,
        message,
        consent,
    } = fields;
    for update in [
        FieldUpdate::Name(name),
        FieldUpdate::Email(email),
        FieldUpdate::Subject(subject),
        FieldUpdate::Message(message),
        FieldUpdate::Consent(consent),
    ] {
        sut.update_field(update);
    }
}
