use crate::card::Card;
use crate::rng::GameRng;

/// Cards not yet dealt to any player
#[derive(Debug, Clone, Default)]
pub struct Pool {
    cards: Vec<Card>,
}

impl Pool {
    pub fn new(cards: Vec<Card>) -> Self {
        Pool { cards }
    }

    /// Remove and return a uniformly random card.
    /// The last card is swapped into the gap, so pool order is not preserved.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Card> {
        let idx = rng.pick_index(self.cards.len())?;
        Some(self.cards.swap_remove(idx))
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
