use tcc_models::contact::{FieldErrors, FormFields};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormValidateService: Send + Sync + 'static {
    /// Evaluates every field rule against `fields`. The form is valid if the
    /// returned errors are empty.
    fn validate(&self, fields: &FormFields) -> FieldErrors;
}

#[cfg(feature = "mock")]
impl MockContactFormValidateService {
    pub fn with_validate(mut self, fields: FormFields, result: FieldErrors) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_const(result);
        self
    }
}
