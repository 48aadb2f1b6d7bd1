pub mod simulated;
pub mod timeout;
