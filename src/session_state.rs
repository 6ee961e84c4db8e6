//! State of the interactive checker, modeled as explicit transitions.
//!
//! The screen owns a value, a strictness mode and the validated-name history.
//! Every transition re-evaluates the value, persists it and, when it rated
//! `ok`, records it in the history. Rendering is left to the caller.

use std::fmt::{self, Debug, Formatter};

use crate::domain::{EvaluationReport, Policy, Severity, StrictnessProfile, evaluate_with_policy};
use crate::repository::{self, History, KeyValueStore};
use crate::utils;

#[derive(thiserror::Error)]
pub enum SessionError {
    #[error("History entry {0} does not exist.")]
    UnknownHistoryEntry(usize),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Short feedback for the caller to display after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    const fn success(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message,
        }
    }

    const fn warning(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message,
        }
    }

    const fn error(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message,
        }
    }
}

const EMPTY_FIELD: Notice = Notice::error("The field is empty.");
const NO_SUGGESTION: Notice = Notice::error("No suggestion is available.");

pub struct CheckerSession<S> {
    store: S,
    policy: Policy,
    value: String,
    mode: StrictnessProfile,
    history: History,
    report: EvaluationReport,
}

impl<S: KeyValueStore> CheckerSession<S> {
    /// Restores the last entered name and the history from `store`.
    #[tracing::instrument(skip_all)]
    pub fn restore(mut store: S, policy: Policy) -> Result<Self, SessionError> {
        let value = repository::load_last_name(&store)?;
        let history = repository::load_history(&store)?;
        let mode = StrictnessProfile::default();
        let report = evaluate_with_policy(&value, mode, &policy);
        let history = record_and_persist(&mut store, &history, &value, report.worst)?;

        Ok(Self {
            store,
            policy,
            value,
            mode,
            history,
            report,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn mode(&self) -> StrictnessProfile {
        self.mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn report(&self) -> &EvaluationReport {
        &self.report
    }

    pub fn worst(&self) -> Severity {
        self.report.worst
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.commit(value.into(), self.mode)
    }

    pub fn set_mode(&mut self, mode: StrictnessProfile) -> Result<(), SessionError> {
        self.commit(self.value.clone(), mode)
    }

    pub fn apply_nfc(&mut self) -> Result<Notice, SessionError> {
        if self.value.is_empty() {
            return Ok(EMPTY_FIELD);
        }
        self.commit(self.report.nfc.clone(), self.mode)?;
        Ok(Notice::success("NFC applied."))
    }

    pub fn apply_nfkc(&mut self) -> Result<Notice, SessionError> {
        if self.value.is_empty() {
            return Ok(EMPTY_FIELD);
        }
        self.commit(self.report.nfkc.clone(), self.mode)?;
        Ok(Notice::success("NFKC applied."))
    }

    /// Replaces the value with the sanitized suggestion for the current mode.
    pub fn apply_suggestion(&mut self) -> Result<Notice, SessionError> {
        if self.report.sanitized.is_empty() {
            return Ok(NO_SUGGESTION);
        }
        self.commit(self.report.sanitized.clone(), self.mode)?;
        Ok(Notice::success("Name replaced with the conservative suggestion."))
    }

    /// Returns the value to hand to the clipboard.
    pub fn copy_value(&self) -> (Option<&str>, Notice) {
        if self.value.is_empty() {
            return (None, EMPTY_FIELD);
        }
        (
            Some(self.value.as_str()),
            Notice::success("Name copied to the clipboard."),
        )
    }

    pub fn copy_suggestion(&self) -> (Option<&str>, Notice) {
        if self.report.sanitized.is_empty() {
            return (None, NO_SUGGESTION);
        }
        (
            Some(self.report.sanitized.as_str()),
            Notice::success("Suggestion copied to the clipboard."),
        )
    }

    pub fn reset(&mut self) -> Result<Notice, SessionError> {
        if self.value.is_empty() {
            return Ok(EMPTY_FIELD);
        }
        self.commit(String::new(), self.mode)?;
        Ok(Notice::warning("Field reset."))
    }

    pub fn use_history_entry(&mut self, index: usize) -> Result<(), SessionError> {
        let name = self
            .history
            .get(index)
            .ok_or(SessionError::UnknownHistoryEntry(index))?
            .to_string();
        self.set_value(name)
    }

    pub fn clear_history(&mut self) -> Result<Notice, SessionError> {
        let cleared = History::default();
        repository::save_history(&mut self.store, &cleared).inspect_err(log_store_failure)?;
        self.history = cleared;
        tracing::info!("Cleared name history");
        Ok(Notice::warning("History cleared."))
    }

    /// Evaluates `value` under `mode` and persists it. The session is left
    /// untouched unless every write succeeded.
    fn commit(&mut self, value: String, mode: StrictnessProfile) -> Result<(), SessionError> {
        let report = evaluate_with_policy(&value, mode, &self.policy);
        repository::save_last_name(&mut self.store, &value).inspect_err(log_store_failure)?;
        let history = record_and_persist(&mut self.store, &self.history, &value, report.worst)?;

        self.value = value;
        self.mode = mode;
        self.report = report;
        self.history = history;
        Ok(())
    }
}

/// Returns `history` with `value` recorded, saving it first when it changed.
fn record_and_persist(
    store: &mut impl KeyValueStore,
    history: &History,
    value: &str,
    worst: Severity,
) -> Result<History, SessionError> {
    let mut staged = history.clone();
    if staged.record(value, worst) {
        repository::save_history(store, &staged).inspect_err(log_store_failure)?;
        tracing::info!(entries = staged.len(), "Recorded validated name");
    }
    Ok(staged)
}

fn log_store_failure(e: &anyhow::Error) {
    tracing::error!(
        error.cause_chain = ?e,
        error.message = %e,
        "Failed to persist checker state"
    );
}
