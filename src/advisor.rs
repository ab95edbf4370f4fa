//! Rule-based action advice layered on the equity, outs, and odds engines.
//!
//! The thresholds: equity >= 0.70 raises strong; 0.55-0.70 raises moderate;
//! 0.35-0.55 calls when at least 4 outs back the hand (pot odds permitting);
//! below 0.35 a strong draw (>= 8 outs) can still justify a call; everything
//! else folds.

use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::equity::equity_vs_random;
use crate::error::HoldemResult;
use crate::math_engine::{ev_call, pot_odds};
use crate::outs::{detect_draws, StraightDrawKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Call => "call",
            Action::Raise => "raise",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Strong,
    Moderate,
    Marginal,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Strong => "strong",
            Confidence::Moderate => "moderate",
            Confidence::Marginal => "marginal",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub action: Action,
    pub confidence: Confidence,
    pub rationale: Vec<String>,
    /// Suggested raise size as a fraction of pot; absent for call/fold.
    pub bet_sizing: Option<f64>,
}

/// Suggested raise size as a fraction of pot, scaled by equity.
pub fn raise_sizing(equity: f64) -> f64 {
    if equity >= 0.80 {
        1.0
    } else if equity >= 0.70 {
        0.75
    } else if equity >= 0.60 {
        0.66
    } else {
        0.50
    }
}

pub fn get_advice(
    hero: &[Card],
    board: &[Card],
    pot: Option<f64>,
    call: Option<f64>,
    iterations: Option<usize>,
    seed: Option<u64>,
) -> HoldemResult<Advice> {
    let equity_result = equity_vs_random(hero, board, iterations, seed)?;
    let equity = equity_result.equity();
    let draws = detect_draws(hero, board)?;

    let pot_info = match (pot, call) {
        (Some(p), Some(c)) if c > 0.0 => Some((pot_odds(p, c)?, ev_call(p, c, equity)?)),
        _ => None,
    };

    let mut rationale = Vec::new();
    rationale.push(format!("Equity vs random: {:.1}%", equity * 100.0));
    if let Some(fd) = &draws.flush_draw {
        rationale.push(format!("Flush draw ({} outs)", fd.outs));
    }
    for sd in &draws.straight_draws {
        let label = match sd.kind {
            StraightDrawKind::OpenEnded => "Open-ended",
            StraightDrawKind::Gutshot => "Gutshot",
        };
        rationale.push(format!("{} straight draw ({} outs)", label, sd.outs));
    }
    if let Some((po, ev)) = pot_info {
        rationale.push(format!(
            "Pot odds: need {:.1}%, have {:.1}% -> EV {:+.1}",
            po * 100.0,
            equity * 100.0,
            ev,
        ));
    }

    let (action, confidence, bet_sizing) =
        decide(equity, draws.total_outs, pot_info, &mut rationale);

    Ok(Advice {
        action,
        confidence,
        rationale,
        bet_sizing,
    })
}

fn decide(
    equity: f64,
    total_outs: usize,
    pot_info: Option<(f64, f64)>,
    rationale: &mut Vec<String>,
) -> (Action, Confidence, Option<f64>) {
    // Strong hand.
    if equity >= 0.70 {
        rationale.push("Strong hand - raise for value".to_string());
        return (Action::Raise, Confidence::Strong, Some(raise_sizing(equity)));
    }

    // Good hand.
    if equity >= 0.55 {
        match pot_info {
            Some((_, ev)) if ev > 0.0 => {
                rationale.push("Good equity + positive EV - raise".to_string());
            }
            _ => rationale.push("Good equity - raise or call".to_string()),
        }
        return (
            Action::Raise,
            Confidence::Moderate,
            Some(raise_sizing(equity)),
        );
    }

    // Drawing hand with enough outs to continue.
    if equity >= 0.35 && total_outs >= 4 {
        return match pot_info {
            Some((_, ev)) if ev > 0.0 => {
                rationale.push("Drawing hand with good pot odds - call".to_string());
                (Action::Call, Confidence::Moderate, None)
            }
            Some(_) => {
                rationale.push("Drawing hand but pot odds unfavorable - fold".to_string());
                (Action::Fold, Confidence::Marginal, None)
            }
            None => {
                rationale.push("Drawing hand with outs - call to see next card".to_string());
                (Action::Call, Confidence::Moderate, None)
            }
        };
    }

    // Decent equity, no real draws.
    if equity >= 0.35 {
        return match pot_info {
            Some((_, ev)) if ev > 0.0 => {
                rationale.push("Decent equity + positive EV - call".to_string());
                (Action::Call, Confidence::Marginal, None)
            }
            Some(_) => {
                rationale.push("Decent equity but negative EV - fold".to_string());
                (Action::Fold, Confidence::Marginal, None)
            }
            None => {
                rationale.push("Marginal hand - proceed with caution".to_string());
                (Action::Call, Confidence::Marginal, None)
            }
        };
    }

    // Weak equity can still continue behind a big draw.
    if total_outs >= 8 {
        match pot_info {
            Some((_, ev)) if ev > 0.0 => {
                rationale.push("Weak equity but strong draw with good odds - call".to_string());
                return (Action::Call, Confidence::Marginal, None);
            }
            Some(_) => {}
            None => {
                rationale.push("Weak equity but strong draw - consider calling".to_string());
                return (Action::Call, Confidence::Marginal, None);
            }
        }
    }

    rationale.push("Weak hand - fold".to_string());
    (Action::Fold, Confidence::Strong, None)
}
