use std::sync::Arc;

use chrono::{DateTime, Locale, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::localize::{Language, Localizer};
use crate::model::WeatherReport;
use crate::source::{FetchError, WeatherSource};

/// Snapshot of the view-state published by the controller.
///
/// `data` is not cleared when a refresh fails: the screen keeps showing
/// the last good reading behind the error banner. Consumers must check
/// `has_error` before trusting `data` as current.
#[derive(Debug, Clone, Default)]
pub struct WeatherState {
    pub is_loading: bool,
    pub has_error: bool,
    pub error_message: Option<String>,
    pub data: Option<WeatherReport>,
}

/// Asynchronous view-state machine behind the current-conditions screen.
///
/// Construction triggers one eager fetch; afterwards fetches happen only on
/// explicit load/refresh calls. State is published through a watch channel
/// so any number of views can observe it, and every mutation goes through
/// the single sender. There is no in-flight guard: overlapping loads race
/// and the last one to complete wins (see DESIGN.md).
pub struct WeatherController {
    source: Arc<dyn WeatherSource>,
    localizer: Localizer,
    tx: watch::Sender<WeatherState>,
}

impl WeatherController {
    /// Create the controller and start the initial fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(source: Arc<dyn WeatherSource>, localizer: Localizer) -> Self {
        let (tx, _) = watch::channel(WeatherState::default());
        let controller = Self {
            source,
            localizer,
            tx,
        };
        controller.load();
        controller
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<WeatherState> {
        self.tx.subscribe()
    }

    /// Current snapshot, for polling consumers.
    pub fn state(&self) -> WeatherState {
        self.tx.borrow().clone()
    }

    /// Unconditionally enter the loading state and start one fetch.
    ///
    /// A load requested while another is in flight starts a second fetch
    /// rather than joining the first.
    pub fn load(&self) {
        self.tx.send_modify(|state| {
            state.is_loading = true;
            state.has_error = false;
            state.error_message = None;
        });

        let source = Arc::clone(&self.source);
        let localizer = self.localizer;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let outcome = source.current().await;
            apply_outcome(&tx, &localizer, outcome);
        });
    }

    /// Alias for load, matching the pull-to-refresh action.
    pub fn refresh(&self) {
        self.load();
    }

    /// Drop the error banner without touching data and without fetching.
    pub fn clear_error(&self) {
        self.tx.send_modify(|state| {
            state.has_error = false;
            state.error_message = None;
        });
    }

    /// True when a decoded reading is held, current or stale.
    pub fn has_data(&self) -> bool {
        self.tx.borrow().data.is_some()
    }

    /// Long-form calendar date for the held reading.
    ///
    /// `dateTime` on the wire is either a Unix epoch in digits or text the
    /// server already formatted: digits become a localized date, anything
    /// else passes through untouched. Empty when no reading is held.
    pub fn formatted_date(&self) -> String {
        let state = self.tx.borrow();
        let Some(report) = state.data.as_ref() else {
            return String::new();
        };
        format_observation_date(&report.date_time, self.localizer.language())
    }
}

fn apply_outcome(
    tx: &watch::Sender<WeatherState>,
    localizer: &Localizer,
    outcome: Result<WeatherReport, FetchError>,
) {
    match outcome {
        Ok(report) => {
            debug!(city = %report.city, "weather fetch succeeded");
            tx.send_modify(|state| {
                state.data = Some(report);
                state.is_loading = false;
            });
        }
        Err(err) => {
            warn!(error = %err, "weather fetch failed");
            let message = failure_message(localizer, &err);
            tx.send_modify(|state| {
                state.is_loading = false;
                state.has_error = true;
                state.error_message = Some(message);
            });
        }
    }
}

/// Human-readable message for a failed fetch.
///
/// Server-supplied text (api rejections, transport descriptions) passes
/// through verbatim and untranslated; the fixed kinds go through the
/// string table.
fn failure_message(localizer: &Localizer, err: &FetchError) -> String {
    match err {
        FetchError::Api(message) => message.clone(),
        FetchError::Unknown(detail) => detail.clone(),
        FetchError::InvalidUrl => localizer.localized("error_invalid_url").to_string(),
        FetchError::InvalidResponse => localizer.localized("error_invalid_response").to_string(),
        FetchError::Decoding(_) => localizer.localized("error_decoding").to_string(),
    }
}

fn format_observation_date(raw: &str, lang: Language) -> String {
    let Ok(epoch) = raw.parse::<f64>() else {
        return raw.to_string();
    };

    match DateTime::<Utc>::from_timestamp(epoch as i64, 0) {
        Some(when) => {
            let (pattern, locale) = match lang {
                Language::English => ("%A, %B %-d, %Y", Locale::en_US),
                Language::Arabic => ("%A، %-d %B %Y", Locale::ar_SA),
            };
            when.format_localized(pattern, locale).to_string()
        }
        // Numeric but not a representable instant; show it untouched.
        None => raw.to_string(),
    }
}
