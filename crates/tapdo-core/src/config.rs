use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tapdo_model::ScreenStyle;
use tracing::{
  debug,
  info,
  warn
};

#[derive(
  Debug, Clone, Deserialize, PartialEq,
)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub title:       String,
  pub placeholder: String,
  pub add_label:   String,
  pub seed:        Vec<String>,
  pub style:       StyleConfig,
  #[serde(skip)]
  pub loaded_file: Option<PathBuf>
}

#[derive(
  Debug, Clone, Deserialize, PartialEq,
)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
  pub active_color:    String,
  pub completed_color: String,
  pub color:           bool
}

impl Default for Config {
  fn default() -> Self {
    let style = ScreenStyle::default();
    Self {
      title:       style.title,
      placeholder: style.placeholder,
      add_label:   style.add_label,
      seed:        vec![],
      style:       StyleConfig::default(),
      loaded_file: None
    }
  }
}

impl Default for StyleConfig {
  fn default() -> Self {
    let style = ScreenStyle::default();
    Self {
      active_color:    style.active_color,
      completed_color: style
        .completed_color,
      color:           true
    }
  }
}

impl Config {
  #[tracing::instrument(skip(
    config_override
  ))]
  pub fn load(
    config_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let Some(path) = resolve_config_path(
      config_override
    )?
    else {
      warn!(
        "no config file found; using \
         defaults"
      );
      return Ok(Self::default());
    };

    info!(config = %path.display(), "loading config");
    Self::load_file(&path)
  }

  #[tracing::instrument]
  pub fn load_file(
    path: &Path
  ) -> anyhow::Result<Self> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    let mut cfg: Config =
      toml::from_str(&text)
        .with_context(|| {
          format!(
            "invalid config {}",
            path.display()
          )
        })?;
    cfg.loaded_file = Some(path);

    debug!(
      seeded = cfg.seed.len(),
      "parsed config"
    );
    Ok(cfg)
  }

  /// Applies `KEY=VALUE` overrides from the
  /// command line. Only scalar keys can be
  /// overridden.
  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) -> anyhow::Result<()>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (key, value) in overrides {
      debug!(key = %key, value = %value, "applying override");
      match key.as_str() {
        | "title" => self.title = value,
        | "placeholder" => {
          self.placeholder = value
        }
        | "add_label" => {
          self.add_label = value
        }
        | "style.active_color" => {
          self.style.active_color = value
        }
        | "style.completed_color" => {
          self.style.completed_color =
            value
        }
        | "style.color" => {
          self.style.color =
            parse_bool(&value)
              .ok_or_else(|| {
                anyhow!(
                  "invalid boolean for \
                   style.color: {value}"
                )
              })?
        }
        | other => {
          return Err(anyhow!(
            "unknown config key: {other}"
          ));
        }
      }
    }
    Ok(())
  }

  pub fn screen_style(
    &self
  ) -> ScreenStyle {
    ScreenStyle {
      title:           self.title.clone(),
      placeholder:     self
        .placeholder
        .clone(),
      add_label:       self
        .add_label
        .clone(),
      active_color:    self
        .style
        .active_color
        .clone(),
      completed_color: self
        .style
        .completed_color
        .clone()
    }
  }
}

pub const CONFIG_ENV: &str =
  "TAPDO_CONFIG";

#[tracing::instrument(skip(
  override_path
))]
fn resolve_config_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  let home = dirs::home_dir();
  if home.is_none() {
    debug!(
      "cannot determine home \
       directory; skipping default \
       config"
    );
  }
  Ok(pick_config_path(
    override_path,
    std::env::var(CONFIG_ENV).ok(),
    home.as_deref()
  ))
}

/// `--config`, then `TAPDO_CONFIG`
/// (`/dev/null` disables), then an existing
/// `~/.tapdo.toml`.
fn pick_config_path(
  override_path: Option<&Path>,
  env_path: Option<String>,
  home: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = override_path {
    return Some(path.to_path_buf());
  }

  if let Some(env_path) = env_path {
    if env_path == "/dev/null" {
      return None;
    }
    return Some(PathBuf::from(env_path));
  }

  home
    .map(|home| home.join(".tapdo.toml"))
    .filter(|candidate| candidate.exists())
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

fn parse_bool(s: &str) -> Option<bool> {
  match s
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "1" | "y" | "yes" | "on"
    | "true" => Some(true),
    | "0" | "n" | "no" | "off"
    | "false" => Some(false),
    | _ => None
  }
}
