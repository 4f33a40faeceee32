//! Integration tests for Top Trumps
//! Plays full games through a scripted console with known seeds

use crate::card::CardCatalog;
use crate::console::{ConsoleError, ScriptedConsole};
use crate::game::{Game, GameError, RoundOutcome, NUM_PLAYERS};
use crate::rng::GameRng;

const RANGE: usize = 2;

/// Both players always pick their first card, priority picks Range
fn always_first_card(rounds: usize) -> ScriptedConsole {
    ScriptedConsole::new(&[0, 0, RANGE].repeat(rounds))
}

fn new_game(seed: u64) -> Game {
    let catalog = CardCatalog::bundled().expect("Failed to load cards");
    Game::deal(&catalog, &mut GameRng::new(Some(seed)))
        .expect("Failed to deal")
        .with_interludes(false, false)
}

#[test]
fn test_full_game_with_seed_12345() {
    let mut game = new_game(12345);
    let total = game.state().total_cards();
    let mut console = always_first_card(10_000);

    let result = game.run(&mut console).expect("game should finish");

    assert!(result.deck_sizes.contains(&0), "Someone should have run out of cards");
    assert_eq!(result.deck_sizes.iter().sum::<usize>(), total, "Cards should be conserved");
    assert_eq!(result.deck_sizes[result.winner], total);
    assert!(result.rounds >= 1);
}

#[test]
fn test_same_seed_produces_same_result() {
    let result1 = new_game(54321).run(&mut always_first_card(10_000)).unwrap();
    let result2 = new_game(54321).run(&mut always_first_card(10_000)).unwrap();
    assert_eq!(result1, result2, "Same seed and input should replay the same game");
}

#[test]
fn test_round_invariants_across_seeds() {
    for seed in 1..=10 {
        let mut game = new_game(seed);
        let mut console = always_first_card(10_000);
        let total = game.state().total_cards();
        let mut expected_priority = 0;

        loop {
            let before = game.state().deck_sizes();
            let report = game.play_round(&mut console).expect("round should resolve");
            let after = game.state().deck_sizes();

            assert_eq!(report.priority_player, expected_priority);
            expected_priority = (expected_priority + 1) % NUM_PLAYERS;
            assert_eq!(after.iter().sum::<usize>(), total, "seed {}: cards not conserved", seed);

            match report.outcome {
                RoundOutcome::Draw => assert_eq!(before, after, "A draw should move no cards"),
                RoundOutcome::Winner(winner) => {
                    for player in 0..NUM_PLAYERS {
                        if player == winner {
                            assert_eq!(after[player], before[player] + NUM_PLAYERS - 1);
                        } else {
                            assert_eq!(after[player] + 1, before[player]);
                        }
                    }
                }
            }

            if let Some(result) = report.finished {
                let max = *after.iter().max().unwrap();
                assert_eq!(after[result.winner], max);
                assert!(game.is_over());
                break;
            }
            assert!(!after.contains(&0), "Game should end as soon as a deck is empty");
        }
    }
}

#[test]
fn test_transcript_shows_round() {
    let mut game = new_game(99);
    let mut console = always_first_card(1);
    let _ = game.play_round(&mut console).expect("round should resolve");

    let lines = console.lines();
    let shown = |text: &str| lines.iter().any(|l| l.contains(text));
    assert!(shown("Player 1 - pick a card!"));
    assert!(shown("Player 2 - pick a card!"));
    assert!(shown("Okay, player 1 - select a property to challenge your opponent with!"));
    assert!(shown("has a"));
    assert_eq!(console.remaining(), 0);
}

#[test]
fn test_input_running_out_aborts_game() {
    let mut game = new_game(7);
    let mut console = always_first_card(0);
    let result = game.run(&mut console);
    assert!(matches!(
        result,
        Err(GameError::Console(ConsoleError::InputClosed))
    ));
}
