use chrono::{DateTime, Utc};

//
// ─── NOTICES ──────────────────────────────────────────────────────────────────
//

/// Coarse feedback shown to the user after a submit intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Submit was rejected locally because some items are unanswered.
    Incomplete,
    /// The endpoint accepted the answers.
    Sent,
    /// The endpoint rejected the answers or could not be reached.
    Failed,
}

/// Texts used for each [`Notice`].
///
/// Defaults are Japanese, matching the default katakana item catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub incomplete: String,
    pub sent: String,
    pub failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            incomplete: "すべての項目に回答してください。".into(),
            sent: "送信に成功しました。".into(),
            failed: "送信に失敗しました。ネットワークまたはサーバーを確認してください。".into(),
        }
    }
}

impl Messages {
    #[must_use]
    pub fn text(&self, notice: Notice) -> &str {
        match notice {
            Notice::Incomplete => &self.incomplete,
            Notice::Sent => &self.sent,
            Notice::Failed => &self.failed,
        }
    }
}

//
// ─── OUTCOME ──────────────────────────────────────────────────────────────────
//

/// State of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    NotAttempted,
    InFlight {
        started_at: DateTime<Utc>,
    },
    Succeeded {
        at: DateTime<Utc>,
    },
    Failed {
        at: DateTime<Utc>,
        reason: String,
    },
}

impl SubmissionOutcome {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionOutcome::InFlight { .. })
    }

    /// Notice derived from a finished attempt.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmissionOutcome::Succeeded { .. } => Some(Notice::Sent),
            SubmissionOutcome::Failed { .. } => Some(Notice::Failed),
            SubmissionOutcome::NotAttempted | SubmissionOutcome::InFlight { .. } => None,
        }
    }

    /// When the last attempt finished, if it has.
    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        match self {
            SubmissionOutcome::Succeeded { at } | SubmissionOutcome::Failed { at, .. } => Some(*at),
            SubmissionOutcome::NotAttempted | SubmissionOutcome::InFlight { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn finished_outcomes_map_to_notices() {
        let now = fixed_now();
        assert_eq!(SubmissionOutcome::NotAttempted.notice(), None);
        assert_eq!(SubmissionOutcome::InFlight { started_at: now }.notice(), None);
        assert_eq!(
            SubmissionOutcome::Succeeded { at: now }.notice(),
            Some(Notice::Sent)
        );
        let failed = SubmissionOutcome::Failed {
            at: now,
            reason: "HTTP 503".into(),
        };
        assert_eq!(failed.notice(), Some(Notice::Failed));
        assert_eq!(failed.finished_at(), Some(now));
    }

    #[test]
    fn default_messages_cover_every_notice() {
        let messages = Messages::default();
        for notice in [Notice::Incomplete, Notice::Sent, Notice::Failed] {
            assert!(!messages.text(notice).is_empty());
        }
        assert_eq!(messages.text(Notice::Incomplete), "すべての項目に回答してください。");
        assert_eq!(messages.text(Notice::Sent), "送信に成功しました。");
        assert!(messages.text(Notice::Failed).starts_with("送信に失敗しました。"));
    }
}
