pub mod deal;
pub mod engine;
pub mod pool;
pub mod round;
pub mod state;
pub mod zones;

#[cfg(test)]
pub(crate) mod test_support;

pub use deal::{deal, split_cards, DealError};
pub use engine::{Game, GameError, GameResult, RoundReport, NUM_PLAYERS};
pub use pool::Pool;
pub use round::{final_winner, resolve_round, transfer_cards, RoundOutcome, TransferError};
pub use state::{GameState, RoundPhase};
pub use zones::Deck;
