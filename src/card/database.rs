use crate::card::types::{Card, ATTRIBUTES};
use crate::game::pool::Pool;
use thiserror::Error;

/// Catalog compiled into the binary so the game ships as a single file
const BUNDLED_CARDS: &str = include_str!("../../cards.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid card data: {0}")]
    InvalidCard(String),
}

/// Immutable, ordered list of every card available to a game
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    /// Load the catalog bundled with the game
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CARDS)
    }

    /// Load cards from a JSON file
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON array of cards
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(content)?;
        let catalog = CardCatalog { cards };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let catalog = CardCatalog { cards };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Fresh pool holding a copy of every catalog card
    pub fn pool(&self) -> Pool {
        Pool::new(self.cards.clone())
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.cards.is_empty() {
            return Err(CatalogError::InvalidCard("No cards loaded".to_string()));
        }
        for (idx, card) in self.cards.iter().enumerate() {
            if card.name.trim().is_empty() {
                return Err(CatalogError::InvalidCard(format!(
                    "card #{} has an empty name",
                    idx + 1
                )));
            }
            for attribute in ATTRIBUTES.iter() {
                let value = attribute.value(card);
                if value < 0 {
                    return Err(CatalogError::InvalidCard(format!(
                        "{} has a negative {} ({})",
                        card.name,
                        attribute.name.to_lowercase(),
                        value
                    )));
                }
            }
        }
        Ok(())
    }
}
