//! Classifiers: map free-form domain strings to display colors.
//!
//! Each classifier is a closed, enum-keyed lookup with a default branch, so
//! every input has an answer. The two fallbacks differ on purpose:
//!
//! - [`classify_label`] recolors unknown labels to `primary` and keeps no text.
//! - [`classify_status`] shows unknown statuses verbatim in `textMuted`, so a
//!   workflow state the UI does not know about stays visible.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::palette::ColorToken;

/// Issue labels with a dedicated color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLabel {
    Frontend,
    Backend,
    Qa,
    Bug,
    Feature,
}

impl IssueLabel {
    pub const ALL: [IssueLabel; 5] = [
        IssueLabel::Frontend,
        IssueLabel::Backend,
        IssueLabel::Qa,
        IssueLabel::Bug,
        IssueLabel::Feature,
    ];

    /// Case-insensitive exact match against the label keys.
    pub fn parse(text: &str) -> Option<Self> {
        let key = text.to_lowercase();
        Self::ALL.into_iter().find(|label| label.key() == key)
    }

    /// The lowercase key this label is matched by
    pub fn key(self) -> &'static str {
        match self {
            IssueLabel::Frontend => "frontend",
            IssueLabel::Backend => "backend",
            IssueLabel::Qa => "qa",
            IssueLabel::Bug => "bug",
            IssueLabel::Feature => "feature",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            IssueLabel::Frontend => ColorToken::Green,
            IssueLabel::Backend => ColorToken::Blue,
            IssueLabel::Qa => ColorToken::Amber,
            IssueLabel::Bug => ColorToken::Red,
            IssueLabel::Feature => ColorToken::Purple,
        }
    }
}

impl fmt::Display for IssueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Workflow states an issue moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    WaitingForClarification,
    ReadyForDev,
    InProgress,
    ReadyForQa,
    Done,
    Blocked,
}

impl WorkflowStatus {
    pub const ALL: [WorkflowStatus; 6] = [
        WorkflowStatus::WaitingForClarification,
        WorkflowStatus::ReadyForDev,
        WorkflowStatus::InProgress,
        WorkflowStatus::ReadyForQa,
        WorkflowStatus::Done,
        WorkflowStatus::Blocked,
    ];

    /// Case-insensitive exact match against the status keys.
    pub fn parse(text: &str) -> Option<Self> {
        let key = text.to_lowercase();
        Self::ALL.into_iter().find(|status| status.key() == key)
    }

    /// The snake_case key this status is matched by
    pub fn key(self) -> &'static str {
        match self {
            WorkflowStatus::WaitingForClarification => "waiting_for_clarification",
            WorkflowStatus::ReadyForDev => "ready_for_dev",
            WorkflowStatus::InProgress => "in_progress",
            WorkflowStatus::ReadyForQa => "ready_for_qa",
            WorkflowStatus::Done => "done",
            WorkflowStatus::Blocked => "blocked",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            WorkflowStatus::WaitingForClarification => "Needs Clarification",
            WorkflowStatus::ReadyForDev => "Ready for Dev",
            WorkflowStatus::InProgress => "In Progress",
            WorkflowStatus::ReadyForQa => "Ready for QA",
            WorkflowStatus::Done => "Done",
            WorkflowStatus::Blocked => "Blocked",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            WorkflowStatus::WaitingForClarification => ColorToken::Amber,
            WorkflowStatus::ReadyForDev => ColorToken::Green,
            WorkflowStatus::InProgress => ColorToken::Blue,
            WorkflowStatus::ReadyForQa => ColorToken::Amber,
            WorkflowStatus::Done => ColorToken::Teal,
            WorkflowStatus::Blocked => ColorToken::Red,
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A color and the text to show next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult<'a> {
    pub color: ColorToken,
    pub label: Cow<'a, str>,
}

impl ClassificationResult<'_> {
    pub fn into_owned(self) -> ClassificationResult<'static> {
        ClassificationResult {
            color: self.color,
            label: Cow::Owned(self.label.into_owned()),
        }
    }
}

/// Color for an issue label. Unknown labels get `primary`.
pub fn classify_label(text: &str) -> ColorToken {
    match IssueLabel::parse(text) {
        Some(label) => label.color(),
        None => {
            tracing::trace!(label = text, "unrecognized label, using primary");
            ColorToken::Primary
        }
    }
}

/// Color and display text for a workflow status.
///
/// Unknown statuses come back unchanged (original casing) in `textMuted`.
pub fn classify_status(text: &str) -> ClassificationResult<'_> {
    match WorkflowStatus::parse(text) {
        Some(status) => ClassificationResult {
            color: status.color(),
            label: Cow::Borrowed(status.display_label()),
        },
        None => {
            tracing::trace!(status = text, "unrecognized status, passing through");
            ClassificationResult {
                color: ColorToken::TextMuted,
                label: Cow::Borrowed(text),
            }
        }
    }
}

/// Color for a signed change such as `"+12%"`.
///
/// Only the leading character is inspected: `+` is a gain, anything else
/// (including the empty string and `"0%"`) is a loss.
pub fn classify_change(text: &str) -> ColorToken {
    if text.starts_with('+') {
        ColorToken::Success
    } else {
        ColorToken::Danger
    }
}
