use std::path::Path;

use tcc_config::Config;
use tcc_core_contact_impl::{
    validate::ContactFormValidateServiceImpl, ContactFormFeatureServiceImpl,
};
use tcc_transport_impl::{
    simulated::{SimulatedSubmissionTransport, SimulatedSubmissionTransportConfig},
    timeout::TimeoutSubmissionTransport,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub type ContactForm = ContactFormFeatureServiceImpl<ContactFormValidateServiceImpl, Transport>;

pub type Transport = TimeoutSubmissionTransport<SimulatedSubmissionTransport>;

/// Loads the configuration, with the given files layered over the defaults,
/// and builds the contact form.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<ContactForm> {
    let config = tcc_config::load(paths)?;
    Ok(contact_form(&config))
}

pub fn contact_form(config: &Config) -> ContactForm {
    let simulated = SimulatedSubmissionTransport::new(SimulatedSubmissionTransportConfig {
        delay: config.submission.simulated.delay.into(),
        success_rate: config.submission.simulated.success_rate,
    });
    let transport = TimeoutSubmissionTransport::new(
        simulated,
        config.submission.timeout.map(Into::into),
    );

    ContactFormFeatureServiceImpl::new(ContactFormValidateServiceImpl, transport)
}

/// Installs a global subscriber that writes to stderr, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
