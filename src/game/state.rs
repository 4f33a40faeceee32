use crate::card::{Attribute, Card};
use crate::game::zones::Deck;

/// Steps of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingSelections,
    AttributeChosen,
    Resolved,
    RoundEnd,
    GameEnd,
}

impl RoundPhase {
    /// Phase that follows this one. `game_over` only matters once resolved.
    pub fn next(&self, game_over: bool) -> RoundPhase {
        match self {
            RoundPhase::AwaitingSelections => RoundPhase::AttributeChosen,
            RoundPhase::AttributeChosen => RoundPhase::Resolved,
            RoundPhase::Resolved if game_over => RoundPhase::GameEnd,
            RoundPhase::Resolved => RoundPhase::RoundEnd,
            RoundPhase::RoundEnd => RoundPhase::AwaitingSelections,
            RoundPhase::GameEnd => RoundPhase::GameEnd,
        }
    }
}

/// Decks plus the transient state of the round in progress
#[derive(Debug, Clone)]
pub struct GameState {
    pub decks: Vec<Deck>,
    /// Player who picks the attribute this round
    pub priority_player: usize,
    pub phase: RoundPhase,
    pub round: u32,

    // Per-round selections, cleared at the start of every round
    pub selected: Vec<usize>,
    pub attribute: Option<Attribute>,
    pub values: Vec<i64>,
}

impl GameState {
    pub fn new(decks: Vec<Deck>) -> Self {
        GameState {
            decks,
            priority_player: 0,
            phase: RoundPhase::AwaitingSelections,
            round: 0,
            selected: Vec::new(),
            attribute: None,
            values: Vec::new(),
        }
    }

    pub fn num_players(&self) -> usize {
        self.decks.len()
    }

    /// Reset the transient state before a new round
    pub fn begin_round(&mut self) {
        self.round += 1;
        self.phase = RoundPhase::AwaitingSelections;
        self.selected.clear();
        self.attribute = None;
        self.values.clear();
    }

    /// Card `player` selected this round
    pub fn selected_card(&self, player: usize) -> Option<&Card> {
        let index = *self.selected.get(player)?;
        self.decks.get(player)?.get(index)
    }

    /// Move priority to the next player, wrapping around
    pub fn advance_priority(&mut self) {
        self.priority_player = (self.priority_player + 1) % self.num_players();
    }

    /// First player whose deck has run out
    pub fn emptied_player(&self) -> Option<usize> {
        self.decks.iter().position(|d| d.is_empty())
    }

    pub fn deck_sizes(&self) -> Vec<usize> {
        self.decks.iter().map(|d| d.size()).collect()
    }

    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(|d| d.size()).sum()
    }
}
