//! Hero equity against one random opponent hand.
//!
//! Street dispatch: river and turn are exact enumerations over the
//! remaining deck; flop and preflop are Monte Carlo sampled. A sampled
//! iteration draws `cards_to_come + 2` cards without replacement in a
//! single pass, board-completion cards in the leading slots and the
//! opponent's two cards after them. Seeded runs reproduce bit for bit:
//! iteration `i` uses its own `StdRng` stream derived from the base seed,
//! and win/tie/lose counters are integers, so the rayon reduction order
//! cannot change the result.

use std::fmt;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::cards::{find_duplicate, Card, Deck, Street};
use crate::error::{HoldemError, HoldemResult};
use crate::hand_evaluator::{best7, eval_cards};

pub const FLOP_ITERATIONS: usize = 30_000;
pub const PREFLOP_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, Serialize)]
pub struct EquityResult {
    pub win: f64,
    pub tie: f64,
    pub lose: f64,
    /// Enumerated combinations or sampling iterations behind the numbers.
    pub evaluations: usize,
}

impl EquityResult {
    fn from_counts(wins: u64, ties: u64, losses: u64) -> EquityResult {
        let total = wins + ties + losses;
        let denom = total as f64;
        EquityResult {
            win: wins as f64 / denom,
            tie: ties as f64 / denom,
            lose: losses as f64 / denom,
            evaluations: total as usize,
        }
    }

    /// Ties count as half a win.
    pub fn equity(&self) -> f64 {
        self.win + self.tie / 2.0
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win {:.1}% | Tie {:.1}% | Lose {:.1}% (equity: {:.1}%)",
            self.win * 100.0,
            self.tie * 100.0,
            self.lose * 100.0,
            self.equity() * 100.0,
        )
    }
}

/// Shared request validation for the calculators: exactly two hero cards, a
/// legal board size, and no card appearing twice across hero+board.
pub(crate) fn validate_hero_board(hero: &[Card], board: &[Card]) -> HoldemResult<Street> {
    if hero.len() != 2 {
        return Err(HoldemError::InvalidCardCount {
            expected: 2,
            got: hero.len(),
        });
    }
    let street = Street::from_board_len(board.len())?;
    let known: Vec<Card> = hero.iter().chain(board.iter()).copied().collect();
    if let Some(card) = find_duplicate(&known) {
        return Err(HoldemError::DuplicateCard(card));
    }
    Ok(street)
}

pub(crate) fn remaining_deck(hero: &[Card], board: &[Card]) -> HoldemResult<Vec<Card>> {
    let known: Vec<Card> = hero.iter().chain(board.iter()).copied().collect();
    Deck::new().remove(&known)
}

/// Win/tie/lose probability of `hero` against one uniformly random opponent
/// hand. Exact on river and turn; sampled on flop (default 30k iterations)
/// and preflop (default 10k). `seed` makes the sampled paths reproducible.
pub fn equity_vs_random(
    hero: &[Card],
    board: &[Card],
    iterations: Option<usize>,
    seed: Option<u64>,
) -> HoldemResult<EquityResult> {
    match validate_hero_board(hero, board)? {
        Street::River => equity_river_exact(hero, board),
        Street::Turn => equity_turn_exact(hero, board),
        Street::Flop => {
            equity_monte_carlo(hero, board, iterations.unwrap_or(FLOP_ITERATIONS), seed)
        }
        Street::Preflop => {
            equity_monte_carlo(hero, board, iterations.unwrap_or(PREFLOP_ITERATIONS), seed)
        }
    }
}

/// River: hero's score is fixed; enumerate all C(45,2) = 990 opponent hands.
fn equity_river_exact(hero: &[Card], board: &[Card]) -> HoldemResult<EquityResult> {
    let rem = eval_cards(&remaining_deck(hero, board)?);
    let h = eval_cards(hero);
    let b = eval_cards(board);

    let hero_score = best7(&[h[0], h[1], b[0], b[1], b[2], b[3], b[4]]);

    let mut wins = 0u64;
    let mut ties = 0u64;
    let mut losses = 0u64;
    for (v1, v2) in rem.iter().copied().tuple_combinations() {
        let villain_score = best7(&[v1, v2, b[0], b[1], b[2], b[3], b[4]]);
        if hero_score > villain_score {
            wins += 1;
        } else if hero_score == villain_score {
            ties += 1;
        } else {
            losses += 1;
        }
    }
    Ok(EquityResult::from_counts(wins, ties, losses))
}

/// Turn: for each of the 46 river cards, enumerate all C(45,2) opponent
/// hands drawn from the 45 cards left after that river.
fn equity_turn_exact(hero: &[Card], board: &[Card]) -> HoldemResult<EquityResult> {
    let rem = eval_cards(&remaining_deck(hero, board)?);
    let h = eval_cards(hero);
    let b = eval_cards(board);

    let mut wins = 0u64;
    let mut ties = 0u64;
    let mut losses = 0u64;
    for i in 0..rem.len() {
        let river = rem[i];
        let hero_score = best7(&[h[0], h[1], b[0], b[1], b[2], b[3], river]);

        for j in 0..rem.len() {
            if j == i {
                continue;
            }
            for k in (j + 1)..rem.len() {
                if k == i {
                    continue;
                }
                let villain_score = best7(&[rem[j], rem[k], b[0], b[1], b[2], b[3], river]);
                if hero_score > villain_score {
                    wins += 1;
                } else if hero_score == villain_score {
                    ties += 1;
                } else {
                    losses += 1;
                }
            }
        }
    }
    Ok(EquityResult::from_counts(wins, ties, losses))
}

fn equity_monte_carlo(
    hero: &[Card],
    board: &[Card],
    iterations: usize,
    seed: Option<u64>,
) -> HoldemResult<EquityResult> {
    let rem = eval_cards(&remaining_deck(hero, board)?);
    let h = eval_cards(hero);
    let b = eval_cards(board);
    let cards_to_come = 5 - board.len();
    let sample_size = cards_to_come + 2;
    let base_seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

    let (wins, ties, losses) = (0..iterations as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i));
            let mut pool = rem.clone();
            let (sample, _) = pool.partial_shuffle(&mut rng, sample_size);

            let mut full_board = [h[0]; 5];
            full_board[..b.len()].copy_from_slice(&b);
            full_board[b.len()..].copy_from_slice(&sample[..cards_to_come]);
            let (v1, v2) = (sample[cards_to_come], sample[cards_to_come + 1]);

            let hero_score = best7(&[
                h[0],
                h[1],
                full_board[0],
                full_board[1],
                full_board[2],
                full_board[3],
                full_board[4],
            ]);
            let villain_score = best7(&[
                v1,
                v2,
                full_board[0],
                full_board[1],
                full_board[2],
                full_board[3],
                full_board[4],
            ]);

            match hero_score.cmp(&villain_score) {
                std::cmp::Ordering::Greater => (1u64, 0u64, 0u64),
                std::cmp::Ordering::Equal => (0, 1, 0),
                std::cmp::Ordering::Less => (0, 0, 1),
            }
        })
        .reduce(
            || (0, 0, 0),
            |a, c| (a.0 + c.0, a.1 + c.1, a.2 + c.2),
        );

    Ok(EquityResult::from_counts(wins, ties, losses))
}
