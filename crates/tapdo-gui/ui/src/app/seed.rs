use serde::Deserialize;
use tapdo_model::ScreenStyle;

const SCREEN_SEED_TOML: &str =
  include_str!("../../assets/screen.toml");

#[derive(
  Debug, Clone, Default, Deserialize,
)]
#[serde(default)]
pub struct ScreenSeed {
  pub seed:  Vec<String>,
  pub style: ScreenStyle
}

pub fn load_screen_seed() -> ScreenSeed
{
  parse_screen_seed(SCREEN_SEED_TOML)
}

fn parse_screen_seed(
  text: &str
) -> ScreenSeed {
  match toml::from_str::<ScreenSeed>(
    text
  ) {
    | Ok(seed) => {
      tracing::info!(
        seeded = seed.seed.len(),
        "loaded screen seed"
      );
      seed
    }
    | Err(error) => {
      tracing::error!(%error, "failed to parse screen seed; starting empty");
      ScreenSeed::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_seed_parses() {
    let seed = parse_screen_seed(
      SCREEN_SEED_TOML
    );
    assert_eq!(
      seed.seed.first().map(String::as_str),
      Some("Buy milk")
    );
    assert_eq!(seed.style.title, "Home");
  }

  #[test]
  fn broken_seed_falls_back_to_empty() {
    let seed =
      parse_screen_seed("seed = 3");
    assert!(seed.seed.is_empty());
    assert_eq!(
      seed.style,
      ScreenStyle::default()
    );
  }
}
