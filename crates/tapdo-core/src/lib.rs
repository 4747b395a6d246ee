pub mod cli;
pub mod config;
pub mod render;
pub mod session;

use std::ffi::OsString;
use std::fs::File;
use std::io::{
  self,
  BufReader,
  IsTerminal,
  Write
};

use anyhow::Context;
use clap::Parser;
use tapdo_model::TaskListScreen;
use tracing::{
  debug,
  info
};

pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let stdout = io::stdout();
  let color = stdout.is_terminal();
  run_with_output(
    raw_args,
    stdout.lock(),
    color
  )
}

/// Runs a session writing every frame and
/// the optional dump to `out`. `color`
/// says whether `out` can show ANSI
/// styling.
#[tracing::instrument(skip_all)]
pub fn run_with_output<W: Write>(
  raw_args: Vec<OsString>,
  mut out: W,
  color: bool
) -> anyhow::Result<()> {
  let cli =
    cli::GlobalCli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting tapdo"
  );

  let mut cfg = config::Config::load(
    cli.config.as_deref()
  )?;
  cfg.apply_overrides(
    cli
      .rc_overrides
      .into_iter()
      .map(|kv| (kv.key, kv.value))
  )?;
  if !cli.seed.is_empty() {
    debug!(
      seeded = cli.seed.len(),
      "seed replaced from command line"
    );
    cfg.seed = cli.seed;
  }

  let renderer =
    render::Renderer::new(&cfg, color);
  let screen = TaskListScreen::new(
    cfg.seed.iter().cloned()
  );
  let interactive = cli.script.is_none()
    && io::stdin().is_terminal();
  let mut session =
    session::Session::new(
      screen, renderer
    )
    .render_on_change(!cli.quiet_render)
    .prompt(interactive);

  if interactive {
    writeln!(out, "{}", session::HELP)?;
  }

  match cli.script.as_deref() {
    | Some(path) => {
      let file = File::open(path)
        .with_context(|| {
          format!(
            "failed to open script {}",
            path.display()
          )
        })?;
      session.run(
        BufReader::new(file),
        &mut out
      )?;
    }
    | None => {
      session.run(
        io::stdin().lock(),
        &mut out
      )?;
    }
  }

  if cli.dump {
    session.write_snapshot(&mut out)?;
  }

  info!("done");
  Ok(())
}
