use crate::card::{Card, CardCatalog, ATTRIBUTES};
use crate::console::{Console, ConsoleError};
use crate::game::deal::{split_cards, DealError};
use crate::game::round::{final_winner, resolve_round, transfer_cards, RoundOutcome, TransferError};
use crate::game::state::{GameState, RoundPhase};
use crate::game::zones::Deck;
use crate::rng::GameRng;
use colored::Colorize;
use thiserror::Error;
use tracing::{debug, info};

/// Players seated at every game
pub const NUM_PLAYERS: usize = 2;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("need {need} decks to start a game, got {have}")]
    NotEnoughDecks { have: usize, need: usize },
    #[error("dealing failed: {0}")]
    Deal(#[from] DealError),
    #[error("player {0} was dealt an empty deck")]
    EmptyDeck(usize),
    #[error("console returned choice {index} for a menu of {len} options")]
    InvalidChoice { index: usize, len: usize },
    #[error("card transfer failed: {0}")]
    Transfer(#[from] TransferError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: usize,
    /// First player found with an empty deck
    pub emptied_player: usize,
    pub rounds: u32,
    pub draws: u32,
    pub deck_sizes: Vec<usize>,
}

/// What happened in a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub priority_player: usize,
    pub attribute: &'static str,
    pub values: Vec<i64>,
    pub outcome: RoundOutcome,
    pub finished: Option<GameResult>,
}

pub struct Game {
    state: GameState,
    clear_between_rounds: bool,
    pause_between_rounds: bool,
    draws: u32,
}

impl Game {
    /// Seat `NUM_PLAYERS` players with the first decks given; extra decks are ignored
    pub fn new(decks: Vec<Deck>) -> Result<Self, GameError> {
        if decks.len() < NUM_PLAYERS {
            return Err(GameError::NotEnoughDecks {
                have: decks.len(),
                need: NUM_PLAYERS,
            });
        }
        let decks: Vec<Deck> = decks.into_iter().take(NUM_PLAYERS).collect();
        if let Some(player) = decks.iter().position(|d| d.is_empty()) {
            return Err(GameError::EmptyDeck(player));
        }

        Ok(Game {
            state: GameState::new(decks),
            clear_between_rounds: true,
            pause_between_rounds: true,
            draws: 0,
        })
    }

    /// Deal the whole catalog out to `NUM_PLAYERS` decks and seat them
    pub fn deal(catalog: &CardCatalog, rng: &mut GameRng) -> Result<Self, GameError> {
        let mut pool = catalog.pool();
        let decks = split_cards(&mut pool, NUM_PLAYERS, rng)?;
        info!(
            seed = rng.seed(),
            per_deck = decks[0].size(),
            discarded = pool.size(),
            "cards dealt"
        );
        Game::new(decks)
    }

    /// Toggle the "press enter" prompt and screen clear between rounds
    pub fn with_interludes(mut self, pause: bool, clear: bool) -> Self {
        self.pause_between_rounds = pause;
        self.clear_between_rounds = clear;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clear the display and show the opening banner
    pub fn introduce<C: Console>(
        &self,
        console: &mut C,
        card_count: usize,
        seed: u64,
    ) -> Result<(), GameError> {
        if self.clear_between_rounds {
            console.clear_display()?;
        }
        console.render_line(&format!(
            "Top trumps, but it's planes and only has {} cards",
            card_count
        ))?;
        console.render_line(&format!("Seed: {}", seed))?;
        console.render_line("")?;
        Ok(())
    }

    /// Play rounds until someone runs out of cards
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<GameResult, GameError> {
        loop {
            let report = self.play_round(console)?;
            if let Some(result) = report.finished {
                return Ok(result);
            }
        }
    }

    pub fn play_round<C: Console>(&mut self, console: &mut C) -> Result<RoundReport, GameError> {
        self.state.begin_round();
        let priority_player = self.state.priority_player;

        // Every player picks a card from their own deck
        for player in 0..self.state.num_players() {
            let names = self.state.decks[player].names();
            let (index, name) =
                console.prompt_choice(&format!("Player {} - pick a card!", player + 1), &names)?;
            if index >= names.len() {
                return Err(GameError::InvalidChoice {
                    index,
                    len: names.len(),
                });
            }
            debug!(player, index, card = %name, "card selected");
            self.state.selected.push(index);
            console.render_line("")?;
        }
        self.state.phase = self.state.phase.next(false);

        // Priority player picks the attribute
        let options: Vec<String> = Card::attribute_names()
            .into_iter()
            .map(String::from)
            .collect();
        let (choice, _) = console.prompt_choice(
            &format!(
                "Okay, player {} - select a property to challenge your opponent with!",
                priority_player + 1
            ),
            &options,
        )?;
        let attribute = *ATTRIBUTES.get(choice).ok_or(GameError::InvalidChoice {
            index: choice,
            len: ATTRIBUTES.len(),
        })?;
        self.state.attribute = Some(attribute);
        console.render_line("")?;
        self.state.phase = self.state.phase.next(false);

        for player in 0..self.state.num_players() {
            let Some(card) = self.state.selected_card(player) else {
                return Err(TransferError::StaleSelection {
                    player,
                    index: self.state.selected[player],
                }
                .into());
            };
            let value = attribute.value(card);
            console.render_line(&format!(
                "Player {}'s {} has a {} of {}",
                player + 1,
                card.name().cyan(),
                attribute.name.to_lowercase().magenta(),
                value.to_string().yellow()
            ))?;
            self.state.values.push(value);
        }
        console.render_line("")?;

        let outcome = resolve_round(&self.state.values);
        let mut finished = None;
        match outcome {
            RoundOutcome::Draw => {
                self.draws += 1;
                console.render_line("There was a draw!")?;
            }
            RoundOutcome::Winner(winner) => {
                console.render_line(&format!("Player {} wins!", winner + 1))?;
                let moved = transfer_cards(&mut self.state.decks, winner, &self.state.selected)?;
                debug!(winner, moved, sizes = ?self.state.deck_sizes(), "cards transferred");

                if let Some(emptied) = self.state.emptied_player() {
                    let overall =
                        final_winner(&self.state.decks).ok_or(GameError::NotEnoughDecks {
                            have: 0,
                            need: NUM_PLAYERS,
                        })?;
                    console.render_line(&format!(
                        "\n     -----\nPlayer {} has run out of cards! The winner is player {}, as they have the most cards.",
                        emptied + 1,
                        overall + 1
                    ))?;
                    finished = Some(GameResult {
                        winner: overall,
                        emptied_player: emptied,
                        rounds: self.state.round,
                        draws: self.draws,
                        deck_sizes: self.state.deck_sizes(),
                    });
                }
            }
        }
        info!(
            round = self.state.round,
            attribute = attribute.name,
            values = ?self.state.values,
            outcome = ?outcome,
            "round resolved"
        );

        self.state.phase = self.state.phase.next(finished.is_some());
        self.state.advance_priority();

        if let Some(result) = &finished {
            info!(
                winner = result.winner,
                rounds = result.rounds,
                draws = result.draws,
                "game over"
            );
        } else {
            if self.pause_between_rounds {
                console.pause("Press <ENTER> to continue")?;
            }
            if self.clear_between_rounds {
                console.clear_display()?;
            }
            self.state.phase = self.state.phase.next(false);
        }

        Ok(RoundReport {
            round: self.state.round,
            priority_player,
            attribute: attribute.name,
            values: self.state.values.clone(),
            outcome,
            finished,
        })
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == RoundPhase::GameEnd
    }
}
