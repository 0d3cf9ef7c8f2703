use quiz_core::model::{AnswerSet, Verdict};
use thiserror::Error;

/// A line typed at the prompt, turned into a user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select { item: String, verdict: Verdict },
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),
    #[error(transparent)]
    Quiz(#[from] quiz_core::Error),
}

impl Command {
    /// Parse one input line.
    ///
    /// `<item> <verdict>` selects a verdict. The verdict is the last word and
    /// everything before it is the item label, so labels may contain spaces.
    /// A line with a single word is read as a keyword.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Unknown` for unrecognized input and
    /// `CommandError::Quiz` for a bad verdict.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Show);
        }

        let command = match line.rsplit_once(char::is_whitespace) {
            None => match line {
                "submit" | "s" => Self::Submit,
                "show" | "ls" => Self::Show,
                "help" | "?" => Self::Help,
                "quit" | "q" | "exit" => Self::Quit,
                _ => return Err(CommandError::Unknown(line.to_string())),
            },
            Some((item, verdict)) => Self::Select {
                item: item.trim_end().to_string(),
                verdict: verdict
                    .parse::<Verdict>()
                    .map_err(quiz_core::Error::from)?,
            },
        };
        Ok(command)
    }
}

#[must_use]
pub fn help_text(answers: &AnswerSet) -> String {
    let items: Vec<&str> = answers.iter().map(|(item, _)| item.as_str()).collect();
    format!(
        "Commands:\n  \
         <item> correct|c|o     mark an item as correct\n  \
         <item> incorrect|x|i   mark an item as incorrect\n  \
         submit                 send all answers\n  \
         show                   redraw the quiz\n  \
         quit                   leave\n\
         Items: {}",
        items.join(", ")
    )
}
