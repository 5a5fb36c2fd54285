//! Navigation actions offered under a rendered report and their compact
//! token encoding.
//!
//! Tokens are the only contract shared with the presentation layer: a control
//! carries an opaque token, and a clicked token decodes back into the exact
//! `(anchor, kind)` pair it was built from.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::errors::ReportError;
use crate::locale::Translator;
use crate::period::{PeriodKind, ReportPeriod};

const SHOW_PREFIX: &str = "show";
const DISMISS_TOKEN: &str = "dismiss";
const ANCHOR_FORMAT: &str = "%Y-%m-%d";

// Decoded anchors must stay within four-digit years: labels render "%Y" and
// month arithmetic must never leave chrono's supported range.
const MIN_ANCHOR_YEAR: i32 = 1000;
const MAX_ANCHOR_YEAR: i32 = 9999;

/// Payload carried by a clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPayload {
    /// Render the report for the given period, editing the existing message.
    Show(ReportPeriod),
    /// Retract the report and any transient menu state.
    Dismiss,
}

impl fmt::Display for NavPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavPayload::Show(period) => write!(
                f,
                "{SHOW_PREFIX}:{}:{}",
                period.kind(),
                period.anchor().format(ANCHOR_FORMAT)
            ),
            NavPayload::Dismiss => f.write_str(DISMISS_TOKEN),
        }
    }
}

impl FromStr for NavPayload {
    type Err = ReportError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token == DISMISS_TOKEN {
            return Ok(NavPayload::Dismiss);
        }
        let invalid = || ReportError::InvalidToken(token.to_string());
        let mut parts = token.splitn(3, ':');
        if parts.next() != Some(SHOW_PREFIX) {
            return Err(invalid());
        }
        let kind: PeriodKind = parts.next().ok_or_else(invalid)?.parse()?;
        let anchor = parts
            .next()
            .and_then(|raw| NaiveDate::parse_from_str(raw, ANCHOR_FORMAT).ok())
            .filter(|date| (MIN_ANCHOR_YEAR..=MAX_ANCHOR_YEAR).contains(&date.year()))
            .ok_or_else(invalid)?;
        Ok(NavPayload::Show(ReportPeriod::from_anchor(anchor, kind)))
    }
}

/// A labelled clickable control handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub token: String,
}

impl Control {
    fn new(label: impl Into<String>, payload: NavPayload) -> Self {
        Self {
            label: label.into(),
            token: payload.to_string(),
        }
    }
}

/// Builds the fixed control set for a rendered report: previous, next,
/// granularity toggle, and dismiss.
pub fn controls_for(
    period: &ReportPeriod,
    translator: &dyn Translator,
    locale: &str,
) -> Vec<Control> {
    let toggle_key = match period.kind() {
        PeriodKind::Monthly => "buttons.showYearly",
        PeriodKind::Yearly => "buttons.showMonthly",
    };
    vec![
        Control::new("<", NavPayload::Show(period.previous())),
        Control::new(">", NavPayload::Show(period.next())),
        Control::new(
            translator.translate(locale, toggle_key, &[]),
            NavPayload::Show(period.toggled()),
        ),
        Control::new(
            translator.translate(locale, "buttons.done", &[]),
            NavPayload::Dismiss,
        ),
    ]
}
