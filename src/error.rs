use thiserror::Error;

use crate::cards::Card;

#[derive(Error, Debug)]
pub enum HoldemError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Expected exactly {expected} cards, got {got}")]
    InvalidCardCount { expected: usize, got: usize },

    #[error("Board must have 0, 3, 4, or 5 cards, got {0}")]
    InvalidBoardSize(usize),

    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),

    #[error("Card {0} not in deck (already removed?)")]
    CardNotInDeck(Card),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type HoldemResult<T> = Result<T, HoldemError>;
