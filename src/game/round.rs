use crate::game::zones::Deck;
use thiserror::Error;

/// How a round was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Two or more players shared the highest value
    Draw,
    Winner(usize),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransferError {
    #[error("player {player} has no card at index {index}")]
    StaleSelection { player: usize, index: usize },
    #[error("round winner {0} is not a player")]
    UnknownWinner(usize),
}

/// Decide a round from each player's value for the chosen attribute
pub fn resolve_round(values: &[i64]) -> RoundOutcome {
    let Some(&best) = values.iter().max() else {
        return RoundOutcome::Draw;
    };
    let mut leaders = values.iter().enumerate().filter(|(_, v)| **v == best);
    match (leaders.next(), leaders.next()) {
        (Some((player, _)), None) => RoundOutcome::Winner(player),
        _ => RoundOutcome::Draw,
    }
}

/// Hand every loser's selected card to the winner.
///
/// Runs in two phases: every loser's selected index is checked first, then
/// the cards are moved. Nothing is mutated if any selection is stale. Each
/// loser gives up exactly one card from their own deck, so no removal shifts
/// another. The winner keeps their own selected card; captured cards are
/// appended in player order.
/// Returns the number of cards moved.
pub fn transfer_cards(
    decks: &mut [Deck],
    winner: usize,
    selected: &[usize],
) -> Result<usize, TransferError> {
    if winner >= decks.len() {
        return Err(TransferError::UnknownWinner(winner));
    }

    let mut removals: Vec<(usize, usize)> = Vec::with_capacity(decks.len());
    for (player, deck) in decks.iter().enumerate() {
        if player == winner {
            continue;
        }
        let index = selected.get(player).copied().unwrap_or(usize::MAX);
        if index >= deck.size() {
            return Err(TransferError::StaleSelection { player, index });
        }
        removals.push((player, index));
    }

    let mut moved = 0;
    for (player, index) in removals {
        if let Some(card) = decks[player].remove_card(index) {
            decks[winner].add_card(card);
            moved += 1;
        }
    }
    Ok(moved)
}

/// Player holding the most cards; ties go to the lowest player index.
/// None when there are no players.
pub fn final_winner(decks: &[Deck]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (player, deck) in decks.iter().enumerate() {
        match best {
            Some((_, size)) if deck.size() <= size => {}
            _ => best = Some((player, deck.size())),
        }
    }
    best.map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::card;

    fn deck(names: &[&str]) -> Deck {
        Deck::from_cards(names.iter().map(|n| card(n, 0)).collect())
    }

    #[test]
    fn test_strict_maximum_wins() {
        assert_eq!(resolve_round(&[500, 300]), RoundOutcome::Winner(0));
        assert_eq!(resolve_round(&[100, 300]), RoundOutcome::Winner(1));
        assert_eq!(resolve_round(&[1, 9, 4]), RoundOutcome::Winner(1));
    }

    #[test]
    fn test_shared_maximum_is_draw() {
        assert_eq!(resolve_round(&[300, 300]), RoundOutcome::Draw);
        assert_eq!(resolve_round(&[9, 2, 9]), RoundOutcome::Draw);
    }

    #[test]
    fn test_shared_lower_value_still_has_winner() {
        assert_eq!(resolve_round(&[2, 2, 9]), RoundOutcome::Winner(2));
    }

    #[test]
    fn test_transfer_two_players() {
        let mut decks = vec![deck(&["X", "Y"]), deck(&["Z"])];
        let moved = transfer_cards(&mut decks, 0, &[0, 0]).unwrap();

        assert_eq!(moved, 1);
        assert_eq!(decks[0].names(), vec!["X", "Y", "Z"]);
        assert!(decks[1].is_empty());
    }

    #[test]
    fn test_transfer_conserves_cards() {
        let mut decks = vec![deck(&["A", "B", "C"]), deck(&["D", "E"]), deck(&["F", "G"])];
        let before: usize = decks.iter().map(|d| d.size()).sum();

        let moved = transfer_cards(&mut decks, 1, &[2, 0, 1]).unwrap();

        let after: usize = decks.iter().map(|d| d.size()).sum();
        assert_eq!(before, after, "No card should be created or destroyed");
        assert_eq!(moved, 2);
        assert_eq!(decks[0].names(), vec!["A", "B"]);
        assert_eq!(decks[1].names(), vec!["D", "E", "C", "G"]);
        assert_eq!(decks[2].names(), vec!["F"]);
    }

    #[test]
    fn test_stale_selection_leaves_decks_untouched() {
        let mut decks = vec![deck(&["A"]), deck(&["B"]), deck(&["C"])];
        let original = decks.clone();

        let result = transfer_cards(&mut decks, 0, &[0, 0, 5]);
        assert_eq!(
            result,
            Err(TransferError::StaleSelection { player: 2, index: 5 })
        );
        assert_eq!(decks, original);
    }

    #[test]
    fn test_unknown_winner() {
        let mut decks = vec![deck(&["A"]), deck(&["B"])];
        assert_eq!(
            transfer_cards(&mut decks, 4, &[0, 0]),
            Err(TransferError::UnknownWinner(4))
        );
    }

    #[test]
    fn test_final_winner_largest_deck() {
        let decks = vec![deck(&[]), deck(&["A", "B"]), deck(&["C"])];
        assert_eq!(final_winner(&decks), Some(1));
    }

    #[test]
    fn test_final_winner_no_players() {
        assert_eq!(final_winner(&[]), None);
    }

    #[test]
    fn test_final_winner_tie_goes_to_lowest_index() {
        let decks = vec![deck(&["A"]), deck(&[]), deck(&["B", "C"]), deck(&["D", "E"])];
        assert_eq!(final_winner(&decks), Some(2));
    }
}
