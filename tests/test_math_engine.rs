use approx::assert_abs_diff_eq;
use holdem_cli::math_engine::*;

#[test]
fn test_pot_odds_basic() {
    let result = pot_odds(100.0, 50.0).unwrap();
    assert_abs_diff_eq!(result, 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_pot_odds_pot_sized_call() {
    let result = pot_odds(100.0, 100.0).unwrap();
    assert_abs_diff_eq!(result, 0.5, epsilon = 1e-12);
}

#[test]
fn test_pot_odds_empty_pot_is_valid() {
    // A zero pot is legal; only a negative pot is rejected.
    let result = pot_odds(0.0, 50.0).unwrap();
    assert_abs_diff_eq!(result, 1.0, epsilon = 1e-12);
}

#[test]
fn test_pot_odds_invalid_inputs() {
    assert!(pot_odds(-1.0, 50.0).is_err());
    assert!(pot_odds(100.0, 0.0).is_err());
    assert!(pot_odds(100.0, -5.0).is_err());
}

#[test]
fn test_ev_call_break_even() {
    let ev = ev_call(100.0, 50.0, 1.0 / 3.0).unwrap();
    assert_abs_diff_eq!(ev, 0.0, epsilon = 1e-9);
}

#[test]
fn test_ev_call_certain_win() {
    let ev = ev_call(100.0, 50.0, 1.0).unwrap();
    assert_abs_diff_eq!(ev, 100.0, epsilon = 1e-12);
}

#[test]
fn test_ev_call_certain_loss() {
    let ev = ev_call(100.0, 50.0, 0.0).unwrap();
    assert_abs_diff_eq!(ev, -50.0, epsilon = 1e-12);
}

#[test]
fn test_ev_call_invalid_inputs() {
    assert!(ev_call(-1.0, 50.0, 0.5).is_err());
    assert!(ev_call(100.0, 0.0, 0.5).is_err());
    assert!(ev_call(100.0, 50.0, 1.5).is_err());
    assert!(ev_call(100.0, 50.0, -0.1).is_err());
}

#[test]
fn test_should_call_profitable() {
    let analysis = should_call(100.0, 50.0, 0.5).unwrap();
    assert!(analysis.profitable);
    assert_abs_diff_eq!(analysis.pot_odds, 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(analysis.ev, 25.0, epsilon = 1e-12);
    assert_abs_diff_eq!(analysis.edge, 0.5 - 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_should_call_unprofitable() {
    let analysis = should_call(100.0, 50.0, 0.2).unwrap();
    assert!(!analysis.profitable);
    assert!(analysis.ev < 0.0);
    assert!(analysis.edge < 0.0);
}

#[test]
fn test_call_analysis_display() {
    let analysis = should_call(100.0, 50.0, 0.5).unwrap();
    let s = format!("{}", analysis);
    assert!(s.contains("33.3%"));
    assert!(s.contains("50.0%"));
}
