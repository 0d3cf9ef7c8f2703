use quiz_core::model::{SubmissionOutcome, Verdict};
use services::QuizSession;

const BAR_WIDTH: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRowVm {
    pub label: String,
    pub correct_checked: bool,
    pub incorrect_checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub answered_label: String,
    pub progress_percent: u8,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub rows: Vec<ItemRowVm>,
    pub message: Option<String>,
    pub last_attempt_label: Option<String>,
}

fn last_attempt_label(outcome: &SubmissionOutcome) -> Option<String> {
    let at = outcome.finished_at()?;
    let result = match outcome {
        SubmissionOutcome::Succeeded { .. } => "sent",
        _ => "failed",
    };
    Some(format!("Last attempt {result} at {}", at.format("%Y-%m-%d %H:%M:%S UTC")))
}

#[must_use]
pub fn map_quiz(quiz: &QuizSession) -> QuizVm {
    let answers = quiz.answers();
    let rows = answers
        .iter()
        .map(|(id, judgment)| ItemRowVm {
            label: id.as_str().to_string(),
            correct_checked: judgment.verdict() == Some(Verdict::Correct),
            incorrect_checked: judgment.verdict() == Some(Verdict::Incorrect),
        })
        .collect();

    let submitting = quiz.is_submitting();

    QuizVm {
        answered_label: format!("Answered {}/{}", answers.answered_count(), answers.len()),
        progress_percent: answers.progress_percent(),
        submit_label: if submitting { "Submitting..." } else { "Submit" },
        submit_enabled: !submitting,
        rows,
        message: quiz.current_message().map(str::to_string),
        last_attempt_label: last_attempt_label(quiz.outcome()),
    }
}

fn checkbox(checked: bool, verdict: Verdict) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {verdict}")
}

impl QuizVm {
    /// Plain-text rendering for the terminal.
    #[must_use]
    pub fn render(&self) -> String {
        let filled = usize::from(self.progress_percent) * BAR_WIDTH / 100;
        let mut out = format!(
            "{}  [{}{}] {:>3}%\n",
            self.answered_label,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.progress_percent
        );

        for row in &self.rows {
            out.push_str(&format!(
                "  {:<6} {}  {}\n",
                row.label,
                checkbox(row.correct_checked, Verdict::Correct),
                checkbox(row.incorrect_checked, Verdict::Incorrect)
            ));
        }

        if self.submit_enabled {
            out.push_str(&format!("<{}>\n", self.submit_label));
        } else {
            out.push_str(&format!("<{}> (busy)\n", self.submit_label));
        }

        if let Some(message) = &self.message {
            out.push_str(message);
            out.push('\n');
        }
        if let Some(label) = &self.last_attempt_label {
            out.push_str(label);
            out.push('\n');
        }
        out
    }
}
