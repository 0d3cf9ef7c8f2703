use std::io::Write;

use services::{BeginSubmit, QuizSession, SubmitError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::command::{Command, help_text};
use crate::vm::map_quiz;

type Completion = Result<(), SubmitError>;

/// Drive a quiz from line-based input until `quit` or end of input.
///
/// Requests run on their own task and report back through a channel, so
/// selections keep working while a submission is outstanding. On exit an
/// in-flight submission is awaited, never dropped.
///
/// # Errors
///
/// Returns `std::io::Error` when reading input or writing output fails.
pub async fn run<R, W>(mut quiz: QuizSession, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
    let mut lines = input.lines();

    writeln!(out, "{}", help_text(quiz.answers()))?;
    write!(out, "{}", map_quiz(&quiz).render())?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        writeln!(out, "{}", help_text(quiz.answers()))?;
                        continue;
                    }
                    Ok(Command::Show) => {}
                    Ok(Command::Select { item, verdict }) => {
                        if let Err(err) = quiz.select_judgment(&item, verdict) {
                            writeln!(out, "{}", quiz_core::Error::from(err))?;
                            continue;
                        }
                    }
                    Ok(Command::Submit) => {
                        if let BeginSubmit::Pending(pending) = quiz.begin_submit() {
                            let done_tx = done_tx.clone();
                            tokio::spawn(async move {
                                // Receiver only goes away when the loop has ended.
                                let _ = done_tx.send(pending.send().await);
                            });
                        }
                    }
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        continue;
                    }
                }
                write!(out, "{}", map_quiz(&quiz).render())?;
            }
            Some(result) = done_rx.recv() => {
                quiz.complete_submit(result);
                write!(out, "{}", map_quiz(&quiz).render())?;
            }
        }
    }

    if quiz.is_submitting() {
        writeln!(out, "waiting for the submission to finish...")?;
        if let Some(result) = done_rx.recv().await {
            quiz.complete_submit(result);
            write!(out, "{}", map_quiz(&quiz).render())?;
        }
    }

    out.flush()
}
