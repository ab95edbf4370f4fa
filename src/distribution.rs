//! Probability of hero's final hand landing in each category.
//!
//! Same street dispatch as the equity calculator, but the tracked quantity
//! is hero's own hand category instead of a showdown comparison: river is a
//! single evaluation, turn enumerates the 46 river completions, flop and
//! preflop sample board completions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::cards::{Card, Street};
use crate::equity::{remaining_deck, validate_hero_board};
use crate::error::HoldemResult;
use crate::hand_evaluator::{best7, eval_cards, HandCategory, ALL_CATEGORIES};

pub const DISTRIBUTION_ITERATIONS: usize = 10_000;

/// Non-zero hand categories with their probabilities, most likely first.
/// Equal probabilities order stronger category first so output is stable.
pub fn hand_distribution(
    hero: &[Card],
    board: &[Card],
    iterations: Option<usize>,
    seed: Option<u64>,
) -> HoldemResult<Vec<(HandCategory, f64)>> {
    match validate_hero_board(hero, board)? {
        Street::River => distribution_river(hero, board),
        Street::Turn => distribution_turn(hero, board),
        Street::Flop | Street::Preflop => distribution_monte_carlo(
            hero,
            board,
            iterations.unwrap_or(DISTRIBUTION_ITERATIONS),
            seed,
        ),
    }
}

fn sorted_entries(counts: [u64; 10], total: u64) -> Vec<(HandCategory, f64)> {
    let mut entries: Vec<(HandCategory, u64)> = ALL_CATEGORIES
        .iter()
        .map(|&cat| (cat, counts[cat as usize]))
        .filter(|&(_, n)| n > 0)
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    entries
        .into_iter()
        .map(|(cat, n)| (cat, n as f64 / total as f64))
        .collect()
}

/// On the river hero's category is already settled.
fn distribution_river(hero: &[Card], board: &[Card]) -> HoldemResult<Vec<(HandCategory, f64)>> {
    let h = eval_cards(hero);
    let b = eval_cards(board);
    let score = best7(&[h[0], h[1], b[0], b[1], b[2], b[3], b[4]]);
    Ok(vec![(HandCategory::from_score(score), 1.0)])
}

fn distribution_turn(hero: &[Card], board: &[Card]) -> HoldemResult<Vec<(HandCategory, f64)>> {
    let rem = eval_cards(&remaining_deck(hero, board)?);
    let h = eval_cards(hero);
    let b = eval_cards(board);

    let mut counts = [0u64; 10];
    for &river in &rem {
        let score = best7(&[h[0], h[1], b[0], b[1], b[2], b[3], river]);
        counts[(score / 1_000_000) as usize] += 1;
    }
    Ok(sorted_entries(counts, rem.len() as u64))
}

fn distribution_monte_carlo(
    hero: &[Card],
    board: &[Card],
    iterations: usize,
    seed: Option<u64>,
) -> HoldemResult<Vec<(HandCategory, f64)>> {
    let rem = eval_cards(&remaining_deck(hero, board)?);
    let h = eval_cards(hero);
    let b = eval_cards(board);
    let cards_to_come = 5 - board.len();
    let base_seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

    let counts = (0..iterations as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i));
            let mut pool = rem.clone();
            let (sample, _) = pool.partial_shuffle(&mut rng, cards_to_come);

            let mut full_board = [h[0]; 5];
            full_board[..b.len()].copy_from_slice(&b);
            full_board[b.len()..].copy_from_slice(&sample[..cards_to_come]);

            let score = best7(&[
                h[0],
                h[1],
                full_board[0],
                full_board[1],
                full_board[2],
                full_board[3],
                full_board[4],
            ]);
            let mut bucket = [0u64; 10];
            bucket[(score / 1_000_000) as usize] = 1;
            bucket
        })
        .reduce(
            || [0u64; 10],
            |mut a, c| {
                for (slot, n) in a.iter_mut().zip(c.iter()) {
                    *slot += n;
                }
                a
            },
        );

    Ok(sorted_entries(counts, iterations as u64))
}
