#![doc(test(attr(deny(warnings))))]

//! Ledgerbot renders periodic income, expense, and cashflow reports for a
//! personal-finance chat bot, sourcing category insights from an external
//! finance API and handing the rendered text plus navigation controls back
//! to the hosting chat framework.

pub mod config;
pub mod domain;
pub mod errors;
pub mod handler;
pub mod insights;
pub mod locale;
pub mod nav;
pub mod period;
pub mod report;
pub mod time;

pub use config::BotConfig;
pub use errors::ReportError;
pub use handler::{ReportHandler, Trigger};
pub use period::{PeriodKind, ReportPeriod};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("ledgerbot=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Ledgerbot tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
