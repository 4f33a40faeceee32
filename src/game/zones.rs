use crate::card::Card;

/// A player's private, ordered collection of cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Deck { cards: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Deck {
            cards: Vec::with_capacity(cap),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Append a card to the bottom of the deck
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the card at `index`, keeping the order of the rest
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
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

    pub fn names(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.name.clone()).collect()
    }
}
