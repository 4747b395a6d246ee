use std::io::{BufRead, Write};

use anyhow::{Context, anyhow};
use serde::Serialize;
use tapdo_model::{RowView, ScreenEvent, Task, TaskListScreen};
use tracing::{debug, info, warn};

use crate::render::Renderer;

pub const HELP: &str = "\
commands:
  type <text>   replace the draft with <text>
  add           add the draft as a task
  tap <n>       tap the row at position <n> (0-based)
  show          redraw the screen
  dump          print the screen state as JSON
  help          show this help
  quit          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(ScreenEvent),
    Show,
    Dump,
    Help,
    Quit,
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let head = line.trim_start();
    if head.is_empty() || head.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match head.split_once(|c: char| c.is_ascii_whitespace()) {
        Some((word, rest)) => (word, Some(rest)),
        None => (head, None),
    };

    let command = match word {
        "type" => Command::Event(ScreenEvent::Input(rest.unwrap_or_default().to_string())),
        "add" => Command::Event(ScreenEvent::AddPressed),
        "tap" => {
            let raw = rest
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| anyhow!("tap needs a row number"))?;
            let index = raw
                .parse::<usize>()
                .with_context(|| format!("invalid row number: {raw}"))?;
            Command::Event(ScreenEvent::Tap(index))
        }
        "show" => Command::Show,
        "dump" => Command::Dump,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(anyhow!("unknown command: {other}")),
    };

    Ok(Some(command))
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub draft: String,
    pub tasks: Vec<Task>,
    pub rows: Vec<RowView>,
}

#[derive(Debug)]
pub struct Session {
    screen: TaskListScreen,
    renderer: Renderer,
    render_on_change: bool,
    prompt: bool,
}

impl Session {
    pub fn new(screen: TaskListScreen, renderer: Renderer) -> Self {
        Self {
            screen,
            renderer,
            render_on_change: true,
            prompt: false,
        }
    }

    pub fn render_on_change(mut self, enabled: bool) -> Self {
        self.render_on_change = enabled;
        self
    }

    pub fn prompt(mut self, enabled: bool) -> Self {
        self.prompt = enabled;
        self
    }

    pub fn screen(&self) -> &TaskListScreen {
        &self.screen
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            draft: self.screen.draft().to_string(),
            tasks: self.screen.tasks().to_vec(),
            rows: self.screen.rows(self.renderer.style()),
        }
    }

    pub fn write_snapshot<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut out, &self.snapshot())
            .context("failed to encode snapshot")?;
        writeln!(out)?;
        Ok(())
    }

    /// Feeds every line of `input` to the screen until EOF or `quit`.
    #[tracing::instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> anyhow::Result<()> {
        self.renderer.render(&mut out, &self.screen)?;

        let mut handled = 0usize;
        let mut line_num = 0usize;
        let mut line = String::new();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line).context("failed to read input")? == 0 {
                break;
            }
            line_num += 1;

            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    warn!(line = line_num, error = %err, "rejected input line");
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            };
            handled += 1;

            match command {
                Command::Event(event) => {
                    debug!(?event, "dispatching event");
                    if self.screen.apply(event) && self.render_on_change {
                        self.renderer.render(&mut out, &self.screen)?;
                    }
                }
                Command::Show => self.renderer.render(&mut out, &self.screen)?,
                Command::Dump => self.write_snapshot(&mut out)?,
                Command::Help => writeln!(out, "{HELP}")?,
                Command::Quit => break,
            }
        }

        info!(handled, tasks = self.screen.len(), "session finished");
        Ok(())
    }
}
