//! Flush and straight draw detection with deduplicated out counting.
//!
//! Draws are only reported on the flop and turn; any other board size
//! yields an empty result rather than an error. A draw must involve at
//! least one hero card: a four-flush or four-straight sitting entirely on
//! the board is the table's draw, not hero's.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::cards::{find_duplicate, Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::error::{HoldemError, HoldemResult};

/// The ten 5-consecutive-rank windows, wheel first (ace plays low there and
/// high in the T-A window).
const STRAIGHT_WINDOWS: [[u8; 5]; 10] = [
    [14, 2, 3, 4, 5],
    [2, 3, 4, 5, 6],
    [3, 4, 5, 6, 7],
    [4, 5, 6, 7, 8],
    [5, 6, 7, 8, 9],
    [6, 7, 8, 9, 10],
    [7, 8, 9, 10, 11],
    [8, 9, 10, 11, 12],
    [9, 10, 11, 12, 13],
    [10, 11, 12, 13, 14],
];

#[derive(Debug, Clone, Serialize)]
pub struct FlushDraw {
    pub suit: Suit,
    pub outs: usize,
    pub hero_cards_in_suit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StraightDrawKind {
    OpenEnded,
    Gutshot,
}

impl fmt::Display for StraightDrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StraightDrawKind::OpenEnded => write!(f, "open-ended"),
            StraightDrawKind::Gutshot => write!(f, "gutshot"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StraightDraw {
    pub kind: StraightDrawKind,
    /// The single rank that completes this draw.
    pub target_rank: Rank,
    pub outs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawResult {
    pub flush_draw: Option<FlushDraw>,
    pub straight_draws: Vec<StraightDraw>,
    /// Deduplicated count of cards improving hero's hand; a card that
    /// completes both a flush and a straight counts once.
    pub total_outs: usize,
    pub out_cards: Vec<Card>,
}

impl DrawResult {
    fn empty() -> DrawResult {
        DrawResult {
            flush_draw: None,
            straight_draws: Vec::new(),
            total_outs: 0,
            out_cards: Vec::new(),
        }
    }

    pub fn has_draws(&self) -> bool {
        self.flush_draw.is_some() || !self.straight_draws.is_empty()
    }
}

pub fn detect_draws(hero: &[Card], board: &[Card]) -> HoldemResult<DrawResult> {
    if hero.len() != 2 {
        return Err(HoldemError::InvalidCardCount {
            expected: 2,
            got: hero.len(),
        });
    }
    if board.len() > 5 {
        return Err(HoldemError::InvalidBoardSize(board.len()));
    }
    let all: Vec<Card> = hero.iter().chain(board.iter()).copied().collect();
    if let Some(card) = find_duplicate(&all) {
        return Err(HoldemError::DuplicateCard(card));
    }
    if board.len() != 3 && board.len() != 4 {
        return Ok(DrawResult::empty());
    }

    let mut outs: HashSet<Card> = HashSet::new();

    let flush_draw = detect_flush_draw(hero, &all);
    if let Some(fd) = &flush_draw {
        for &rank in &ALL_RANKS {
            let card = Card::new(rank, fd.suit);
            if !all.contains(&card) {
                outs.insert(card);
            }
        }
    }

    let straight_draws = detect_straight_draws(hero, &all)?;
    for draw in &straight_draws {
        for &suit in &ALL_SUITS {
            let card = Card::new(draw.target_rank, suit);
            if !all.contains(&card) {
                outs.insert(card);
            }
        }
    }

    let mut out_cards: Vec<Card> = outs.into_iter().collect();
    out_cards.sort_by(|a, b| {
        b.rank
            .cmp(&a.rank)
            .then(a.suit.to_char().cmp(&b.suit.to_char()))
    });

    Ok(DrawResult {
        flush_draw,
        straight_draws,
        total_outs: out_cards.len(),
        out_cards,
    })
}

/// Exactly four cards of one suit among hero+board, with hero holding at
/// least one of them. Outs are the suit's unseen cards.
fn detect_flush_draw(hero: &[Card], all: &[Card]) -> Option<FlushDraw> {
    for &suit in &ALL_SUITS {
        let count = all.iter().filter(|c| c.suit == suit).count();
        if count != 4 {
            continue;
        }
        let hero_cards_in_suit = hero.iter().filter(|c| c.suit == suit).count();
        if hero_cards_in_suit == 0 {
            continue;
        }
        return Some(FlushDraw {
            suit,
            outs: 13 - count,
            hero_cards_in_suit,
        });
    }
    None
}

/// A window qualifies when exactly 4 of its 5 ranks are held and a hero
/// rank is among them. Each missing rank is reported once; it is open-ended
/// when any 4-held window puts it at either end, gutshot otherwise.
fn detect_straight_draws(hero: &[Card], all: &[Card]) -> HoldemResult<Vec<StraightDraw>> {
    let all_ranks: HashSet<u8> = all.iter().map(|c| c.value()).collect();
    let hero_ranks: HashSet<u8> = hero.iter().map(|c| c.value()).collect();

    let mut draws = Vec::new();
    let mut seen_targets: HashSet<u8> = HashSet::new();

    for window in &STRAIGHT_WINDOWS {
        let held = window.iter().filter(|r| all_ranks.contains(*r)).count();
        if held != 4 {
            continue;
        }
        if !window.iter().any(|r| hero_ranks.contains(r)) {
            continue;
        }
        let Some(target) = window.iter().copied().find(|r| !all_ranks.contains(r)) else {
            continue;
        };
        if !seen_targets.insert(target) {
            continue;
        }

        let known_of_rank = all.iter().filter(|c| c.value() == target).count();
        draws.push(StraightDraw {
            kind: classify_target(target, &all_ranks),
            target_rank: Rank::from_value(target)?,
            outs: 4 - known_of_rank,
        });
    }

    Ok(draws)
}

fn classify_target(target: u8, all_ranks: &HashSet<u8>) -> StraightDrawKind {
    for window in &STRAIGHT_WINDOWS {
        let Some(idx) = window.iter().position(|&r| r == target) else {
            continue;
        };
        let held = window.iter().filter(|r| all_ranks.contains(*r)).count();
        if held != 4 {
            continue;
        }
        if idx == 0 || idx == 4 {
            return StraightDrawKind::OpenEnded;
        }
    }
    StraightDrawKind::Gutshot
}

/// Total deduplicated out count, when the per-draw detail is not needed.
pub fn count_outs(hero: &[Card], board: &[Card]) -> HoldemResult<usize> {
    Ok(detect_draws(hero, board)?.total_outs)
}
