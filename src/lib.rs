pub mod card;
pub mod config;
pub mod console;
pub mod game;
pub mod rng;

#[cfg(test)]
mod integration_tests;
