//! Interactive line source and the read-dispatch loop.

use std::collections::VecDeque;
use std::io::Write;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::dispatcher::{Dispatcher, Flow};
use crate::error::CliError;

/// The console prompts with an empty string.
pub const PROMPT: &str = "";

/// Printed once when the console starts.
pub const STARTUP_MESSAGE: &str = "The CLI is running";

/// Supplies input one line at a time.
pub trait LineSource {
    /// The next line, or `None` once the input stream has closed.
    fn next_line(&mut self) -> Result<Option<String>, CliError>;
}

/// Terminal line source backed by `rustyline`.
///
/// Lines are not added to history; nothing outlives the process.
pub struct TerminalSource {
    editor: DefaultEditor,
}

impl TerminalSource {
    pub fn new() -> Result<Self, CliError> {
        let editor = DefaultEditor::new().map_err(|e| CliError::Terminal(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalSource {
    fn next_line(&mut self) -> Result<Option<String>, CliError> {
        // Blocking read; keep the runtime's other workers free meanwhile.
        match tokio::task::block_in_place(|| self.editor.readline(PROMPT)) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(CliError::Terminal(e.to_string())),
        }
    }
}

/// Pre-recorded lines, for scripted sessions and tests.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> Result<Option<String>, CliError> {
        Ok(self.lines.pop_front())
    }
}

/// Announce the console, then read and dispatch lines until `exit` or end
/// of input.
pub async fn run<S, W>(source: &mut S, dispatcher: &mut Dispatcher<W>) -> Result<(), CliError>
where
    S: LineSource,
    W: Write,
{
    let renderer = &mut dispatcher.context_mut().renderer;
    renderer.notice(STARTUP_MESSAGE)?;
    renderer.flush()?;

    while let Some(line) = source.next_line()? {
        let flow = dispatcher.process(&line).await?;
        dispatcher.context_mut().renderer.flush()?;
        if flow == Flow::Exit {
            info!("Exit requested");
            return Ok(());
        }
    }

    debug!("Input stream closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{context, output};
    use opsdesk_db::MemoryRecordStore;

    #[tokio::test]
    async fn test_runs_until_end_of_input() {
        let mut source = ScriptedSource::new(["list orders", "", "nonsense"]);
        let mut dispatcher = Dispatcher::new(context(MemoryRecordStore::new()));

        run(&mut source, &mut dispatcher).await.unwrap();

        assert_eq!(
            output(dispatcher.context()),
            "The CLI is running\nYou asked for orders\nSorry, try again\n"
        );
        assert_eq!(source.remaining(), 0);
    }

    #[tokio::test]
    async fn test_exit_stops_reading() {
        let mut source = ScriptedSource::new(["exit", "list orders"]);
        let mut dispatcher = Dispatcher::new(context(MemoryRecordStore::new()));

        run(&mut source, &mut dispatcher).await.unwrap();

        assert_eq!(output(dispatcher.context()), "The CLI is running\n");
        assert_eq!(source.remaining(), 1);
    }
}
