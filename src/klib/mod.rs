//! Utilitários internos do kernel (logging e self-tests)

pub mod logging;
pub mod test_framework;
