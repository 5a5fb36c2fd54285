//! Entry point wiring triggers from the chat framework to rendered reports.
//!
//! Each trigger is one independent unit of work; no mutable state survives an
//! invocation. Failures never escape `dispatch` — they are delegated to the
//! shared error reporter.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ReportError;
use crate::insights::{self, InsightSource};
use crate::locale::Translator;
use crate::nav::{self, Control, NavPayload};
use crate::period::{PeriodKind, ReportPeriod};
use crate::report::ReportFormatter;
use crate::time::{Clock, SystemClock};

/// An inbound event the chat framework routes to this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A fresh free-text invocation of the report command.
    Command,
    /// A clicked control carrying an encoded navigation token.
    Navigation(String),
}

/// Chat-surface operations the report module drives.
#[async_trait]
pub trait Presentation: Send + Sync {
    /// Posts a new report message with its controls.
    async fn send_report(&self, text: &str, controls: &[Control]) -> Result<(), ReportError>;

    /// Replaces the existing report message in place.
    async fn edit_report(&self, text: &str, controls: &[Control]) -> Result<(), ReportError>;

    /// Deletes the report message and any transient menu state.
    async fn retract_report(&self) -> Result<(), ReportError>;
}

/// Shared sink for failures; owns any user-facing error message.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &ReportError);
}

/// Handles report triggers end to end: resolve period, fetch both insight
/// feeds, format, and hand the result to the presentation surface.
pub struct ReportHandler {
    source: Arc<dyn InsightSource>,
    presentation: Arc<dyn Presentation>,
    translator: Arc<dyn Translator>,
    errors: Arc<dyn ErrorReporter>,
    clock: Arc<dyn Clock>,
    locale: String,
}

impl ReportHandler {
    pub fn new(
        source: Arc<dyn InsightSource>,
        presentation: Arc<dyn Presentation>,
        translator: Arc<dyn Translator>,
        errors: Arc<dyn ErrorReporter>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            source,
            presentation,
            translator,
            errors,
            clock: Arc::new(SystemClock),
            locale: locale.into(),
        }
    }

    /// Replaces the system clock, keeping period resolution deterministic in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns `true` when `text` is the report command word for the active locale.
    pub fn matches_command(&self, text: &str) -> bool {
        let command = self.translator.translate(&self.locale, "commands.report", &[]);
        text.trim().eq_ignore_ascii_case(&command)
    }

    /// Entry point registered with the chat framework's trigger dispatch.
    pub async fn dispatch(&self, trigger: Trigger) {
        if let Err(error) = self.handle(trigger).await {
            tracing::warn!(%error, "report invocation failed");
            self.errors.report(&error);
        }
    }

    async fn handle(&self, trigger: Trigger) -> Result<(), ReportError> {
        match trigger {
            Trigger::Command => {
                let period = ReportPeriod::current(self.clock.as_ref(), PeriodKind::Monthly);
                tracing::info!(period = %period.label(), "rendering fresh report");
                let (text, controls) = self.render(&period).await?;
                self.presentation.send_report(&text, &controls).await
            }
            Trigger::Navigation(token) => match token.parse::<NavPayload>()? {
                NavPayload::Show(period) => {
                    tracing::info!(period = %period.label(), "navigating report");
                    let (text, controls) = self.render(&period).await?;
                    self.presentation.edit_report(&text, &controls).await
                }
                NavPayload::Dismiss => self.presentation.retract_report().await,
            },
        }
    }

    async fn render(&self, period: &ReportPeriod) -> Result<(String, Vec<Control>), ReportError> {
        let (expenses, incomes) = insights::fetch_pair(self.source.as_ref(), period).await?;
        let formatter = ReportFormatter::new(self.translator.as_ref(), &self.locale);
        let text = formatter.compose(period, &expenses, &incomes);
        let controls = nav::controls_for(period, self.translator.as_ref(), &self.locale);
        Ok((text, controls))
    }
}
