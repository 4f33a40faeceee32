use crate::card::{CardCatalog, CatalogError};
use crate::rng::GameRng;

/// Runtime settings for a single game, built from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the deal (random when absent)
    pub seed: Option<u64>,
    /// Alternative card catalog (JSON); the bundled one is used otherwise
    pub cards: Option<String>,
    pub clear_screen: bool,
    pub pause_between_rounds: bool,
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            cards: None,
            clear_screen: true,
            pause_between_rounds: true,
            verbose: false,
        }
    }
}

impl GameConfig {
    pub fn load_catalog(&self) -> Result<CardCatalog, CatalogError> {
        match &self.cards {
            Some(path) => CardCatalog::from_file(path),
            None => CardCatalog::bundled(),
        }
    }

    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "toptrumps=debug,warn"
        } else {
            "warn"
        }
    }
}
