use crate::game::pool::Pool;
use crate::game::zones::Deck;
use crate::rng::GameRng;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DealError {
    #[error("there are not enough available cards (have: {have}) to create {decks} new deck(s)")]
    NotEnoughCards { have: usize, decks: usize },
    #[error("at least one deck must be requested")]
    NoDecks,
}

/// Draw `count` random cards out of the pool into a new deck
pub fn deal(pool: &mut Pool, count: usize, rng: &mut GameRng) -> Deck {
    let mut deck = Deck::with_capacity(count);
    for _ in 0..count {
        match pool.draw(rng) {
            Some(card) => deck.add_card(card),
            None => break,
        }
    }
    deck
}

/// Largest deal size that splits evenly across `decks`, None for zero decks
pub fn cards_per_deck(pool_size: usize, decks: usize) -> Option<usize> {
    let remainder = pool_size.checked_rem(decks)?;
    Some((pool_size - remainder) / decks)
}

/// Split the pool into `decks` equally sized decks.
/// Cards left over by the even split stay in the pool and never reach a player.
pub fn split_cards(
    pool: &mut Pool,
    decks: usize,
    rng: &mut GameRng,
) -> Result<Vec<Deck>, DealError> {
    let have = pool.size();
    let per_deck = cards_per_deck(have, decks).ok_or(DealError::NoDecks)?;
    if have < decks {
        return Err(DealError::NotEnoughCards { have, decks });
    }

    let dealt: Vec<Deck> = (0..decks).map(|_| deal(pool, per_deck, rng)).collect();

    debug!(
        decks,
        per_deck,
        undealt = pool.size(),
        "split pool into decks"
    );
    Ok(dealt)
}
