//! Five- and seven-card hand scoring.
//!
//! A hand scores as an opaque `u32`: `category * 1_000_000 + tiebreaker`,
//! so any hand in a higher category outranks every hand in a lower one and
//! two scores are equal exactly when the hands tie under standard rules.
//! Straights are recognized by a single lookup of the 5-card prime product,
//! and `best_hand_7` orders each C(7,5) subset with a fixed 9-compare-swap
//! sorting network instead of a library sort; the calculators call it once
//! per enumerated or sampled outcome, so this is the hot path.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::cards::Card;
use crate::error::{HoldemError, HoldemResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

pub const ALL_CATEGORIES: [HandCategory; 9] = [
    HandCategory::HighCard,
    HandCategory::OnePair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
];

impl HandCategory {
    /// Category encoded in a score's millions digit.
    pub fn from_score(score: u32) -> HandCategory {
        match score / 1_000_000 {
            9 => HandCategory::StraightFlush,
            8 => HandCategory::FourOfAKind,
            7 => HandCategory::FullHouse,
            6 => HandCategory::Flush,
            5 => HandCategory::Straight,
            4 => HandCategory::ThreeOfAKind,
            3 => HandCategory::TwoPair,
            2 => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high_card",
            HandCategory::OnePair => "one_pair",
            HandCategory::TwoPair => "two_pair",
            HandCategory::ThreeOfAKind => "three_of_a_kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full_house",
            HandCategory::FourOfAKind => "four_of_a_kind",
            HandCategory::StraightFlush => "straight_flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

impl Serialize for HandCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

/// Prime per rank, indexed by rank value 2..=14. A product of five primes
/// uniquely identifies the rank multiset.
const RANK_PRIMES: [u32; 15] = [0, 0, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// All C(7,5) = 21 index combinations.
const COMBOS_7_5: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 5],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// Prime product of each straight's five ranks, mapped to the straight's
/// high card. The wheel (A-2-3-4-5) maps to 5.
static STRAIGHTS: Lazy<HashMap<u32, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for high in 5..=14u32 {
        let ranks: [u32; 5] = if high == 5 {
            [14, 5, 4, 3, 2]
        } else {
            [high, high - 1, high - 2, high - 3, high - 4]
        };
        let product: u32 = ranks.iter().map(|&r| RANK_PRIMES[r as usize]).product();
        map.insert(product, high);
    }
    map
});

/// Hot-path card representation: rank value, suit tag, and rank prime.
#[derive(Debug, Clone, Copy)]
pub struct EvalCard {
    pub rank: u8,
    pub suit: u8,
    pub prime: u32,
}

pub fn eval_card(card: Card) -> EvalCard {
    let rank = card.value();
    EvalCard {
        rank,
        suit: card.suit as u8,
        prime: RANK_PRIMES[rank as usize],
    }
}

pub fn eval_cards(cards: &[Card]) -> Vec<EvalCard> {
    cards.iter().map(|&c| eval_card(c)).collect()
}

/// Fixed 9-comparator network ordering 5 ranks descending.
fn sort5_desc(r: &mut [u8; 5]) {
    if r[0] < r[1] {
        r.swap(0, 1);
    }
    if r[3] < r[4] {
        r.swap(3, 4);
    }
    if r[0] < r[2] {
        r.swap(0, 2);
    }
    if r[1] < r[2] {
        r.swap(1, 2);
    }
    if r[0] < r[3] {
        r.swap(0, 3);
    }
    if r[2] < r[3] {
        r.swap(2, 3);
    }
    if r[1] < r[4] {
        r.swap(1, 4);
    }
    if r[1] < r[2] {
        r.swap(1, 2);
    }
    if r[3] < r[4] {
        r.swap(3, 4);
    }
}

/// Score five ranks already sorted descending. Kicker weights are radix-15
/// positional (ranks span 2-14), so higher decisive ranks always dominate.
fn eval5(r: [u8; 5], suits_same: bool, prime_product: u32) -> u32 {
    let (r0, r1, r2, r3, r4) = (
        r[0] as u32,
        r[1] as u32,
        r[2] as u32,
        r[3] as u32,
        r[4] as u32,
    );

    if r0 != r1 && r1 != r2 && r2 != r3 && r3 != r4 {
        // Five distinct ranks: straight flush, flush, straight, or high card.
        let straight_high = STRAIGHTS.get(&prime_product).copied();
        if suits_same {
            return match straight_high {
                Some(high) => 9_000_000 + high,
                None => 6_000_000 + r0 * 50_625 + r1 * 3_375 + r2 * 225 + r3 * 15 + r4,
            };
        }
        if let Some(high) = straight_high {
            return 5_000_000 + high;
        }
        return 1_000_000 + r0 * 50_625 + r1 * 3_375 + r2 * 225 + r3 * 15 + r4;
    }

    // A duplicated rank rules out flush and straight; the paired pattern
    // falls out of the sorted layout alone.
    if r0 == r1 {
        if r1 == r2 {
            if r2 == r3 {
                // AAAA x
                return 8_000_000 + r0 * 100 + r4;
            }
            if r3 == r4 {
                // AAA BB
                return 7_000_000 + r0 * 100 + r3;
            }
            // AAA x y
            return 4_000_000 + r0 * 10_000 + r3 * 15 + r4;
        }
        if r2 == r3 {
            if r3 == r4 {
                // AA BBB
                return 7_000_000 + r2 * 100 + r0;
            }
            // AA BB x
            return 3_000_000 + r0 * 10_000 + r2 * 100 + r4;
        }
        if r3 == r4 {
            // AA x BB
            return 3_000_000 + r0 * 10_000 + r3 * 100 + r2;
        }
        // AA x y z
        return 2_000_000 + r0 * 10_000 + r2 * 225 + r3 * 15 + r4;
    }
    if r1 == r2 {
        if r2 == r3 {
            if r3 == r4 {
                // x BBBB
                return 8_000_000 + r1 * 100 + r0;
            }
            // x BBB y
            return 4_000_000 + r1 * 10_000 + r0 * 15 + r4;
        }
        if r3 == r4 {
            // x BB CC
            return 3_000_000 + r1 * 10_000 + r3 * 100 + r0;
        }
        // x BB y z
        return 2_000_000 + r1 * 10_000 + r0 * 225 + r3 * 15 + r4;
    }
    if r2 == r3 {
        if r3 == r4 {
            // x y CCC
            return 4_000_000 + r2 * 10_000 + r0 * 15 + r1;
        }
        // x y CC z
        return 2_000_000 + r2 * 10_000 + r0 * 225 + r1 * 15 + r4;
    }
    // x y z DD
    2_000_000 + r3 * 10_000 + r0 * 225 + r1 * 15 + r2
}

/// Best score over all 21 five-card subsets of seven cards. No allocation;
/// suits-equal and the prime product are order-independent, so only the
/// ranks go through the sorting network.
pub fn best7(cards: &[EvalCard; 7]) -> u32 {
    let mut best = 0u32;
    for combo in &COMBOS_7_5 {
        let c0 = cards[combo[0]];
        let c1 = cards[combo[1]];
        let c2 = cards[combo[2]];
        let c3 = cards[combo[3]];
        let c4 = cards[combo[4]];

        let mut ranks = [c0.rank, c1.rank, c2.rank, c3.rank, c4.rank];
        sort5_desc(&mut ranks);

        let suits_same =
            c0.suit == c1.suit && c1.suit == c2.suit && c2.suit == c3.suit && c3.suit == c4.suit;
        let prime_product = c0.prime * c1.prime * c2.prime * c3.prime * c4.prime;

        let score = eval5(ranks, suits_same, prime_product);
        if score > best {
            best = score;
        }
    }
    best
}

/// Score an exact 5-card hand.
pub fn evaluate_5(cards: &[Card]) -> HoldemResult<u32> {
    if cards.len() != 5 {
        return Err(HoldemError::InvalidCardCount {
            expected: 5,
            got: cards.len(),
        });
    }
    let e = eval_cards(cards);
    let mut ranks = [e[0].rank, e[1].rank, e[2].rank, e[3].rank, e[4].rank];
    sort5_desc(&mut ranks);
    let suits_same =
        e[0].suit == e[1].suit && e[1].suit == e[2].suit && e[2].suit == e[3].suit && e[3].suit == e[4].suit;
    let prime_product = e[0].prime * e[1].prime * e[2].prime * e[3].prime * e[4].prime;
    Ok(eval5(ranks, suits_same, prime_product))
}

/// Score the best 5-card hand hidden in exactly 7 cards.
pub fn best_hand_7(cards: &[Card]) -> HoldemResult<u32> {
    if cards.len() != 7 {
        return Err(HoldemError::InvalidCardCount {
            expected: 7,
            got: cards.len(),
        });
    }
    let e = eval_cards(cards);
    let seven: [EvalCard; 7] = [e[0], e[1], e[2], e[3], e[4], e[5], e[6]];
    Ok(best7(&seven))
}
