use std::fmt;

use serde::Serialize;

use crate::error::{HoldemError, HoldemResult};

/// Minimum equity needed to break even on a call: `call / (pot + call)`.
pub fn pot_odds(pot: f64, call: f64) -> HoldemResult<f64> {
    if pot < 0.0 {
        return Err(HoldemError::InvalidValue(format!(
            "Pot cannot be negative, got {}",
            pot
        )));
    }
    if call <= 0.0 {
        return Err(HoldemError::InvalidValue(format!(
            "Call amount must be positive, got {}",
            call
        )));
    }
    Ok(call / (pot + call))
}

/// Expected value of calling: `equity * (pot + call) - call`. Equity here
/// should already fold ties in (win + tie/2).
pub fn ev_call(pot: f64, call: f64, equity: f64) -> HoldemResult<f64> {
    if pot < 0.0 {
        return Err(HoldemError::InvalidValue(format!(
            "Pot cannot be negative, got {}",
            pot
        )));
    }
    if call <= 0.0 {
        return Err(HoldemError::InvalidValue(format!(
            "Call amount must be positive, got {}",
            call
        )));
    }
    if !(0.0..=1.0).contains(&equity) {
        return Err(HoldemError::InvalidValue(format!(
            "Equity must be between 0 and 1, got {}",
            equity
        )));
    }
    Ok(equity * (pot + call) - call)
}

#[derive(Debug, Clone, Serialize)]
pub struct CallAnalysis {
    pub pot_odds: f64,
    pub equity: f64,
    pub ev: f64,
    pub profitable: bool,
    /// Equity minus pot odds; positive means the call has an edge.
    pub edge: f64,
}

impl fmt::Display for CallAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Need {:.1}% | have {:.1}% | EV {:+.2}",
            self.pot_odds * 100.0,
            self.equity * 100.0,
            self.ev,
        )
    }
}

pub fn should_call(pot: f64, call: f64, equity: f64) -> HoldemResult<CallAnalysis> {
    let po = pot_odds(pot, call)?;
    let ev = ev_call(pot, call, equity)?;
    Ok(CallAnalysis {
        pot_odds: po,
        equity,
        ev,
        profitable: ev > 0.0,
        edge: equity - po,
    })
}
