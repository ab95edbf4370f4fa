use holdem_cli::cards::{parse_board, parse_card, Card};
use holdem_cli::error::HoldemError;
use holdem_cli::hand_evaluator::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

fn score(notation: &str) -> u32 {
    evaluate_5(&parse_board(notation).unwrap()).unwrap()
}

#[test]
fn test_category_ladder() {
    // One hand per category, weakest first; scores must strictly ascend.
    let ladder = [
        "AhKd9c5s2h", // high card
        "AhAdKc5s2h", // one pair
        "AhAdKcKs2h", // two pair
        "AhAdAc5s2h", // trips
        "9s8h7d6c5s", // straight
        "AhQh9h5h2h", // flush
        "AhAdAcKsKh", // full house
        "AhAdAcAsKh", // quads
        "9h8h7h6h5h", // straight flush
    ];
    let scores: Vec<u32> = ladder.iter().map(|h| score(h)).collect();
    for w in scores.windows(2) {
        assert!(w[0] < w[1], "expected {} < {}", w[0], w[1]);
    }
    for (i, &s) in scores.iter().enumerate() {
        assert_eq!(HandCategory::from_score(s) as u32, i as u32 + 1);
    }
}

#[test]
fn test_wheel_is_lowest_straight() {
    assert_eq!(score("Ah2d3c4s5h"), 5_000_005);
    assert_eq!(score("6h5d4c3s2d"), 5_000_006);
    assert!(score("Ah2d3c4s5h") < score("6h5d4c3s2d"));
}

#[test]
fn test_wheel_straight_flush() {
    assert_eq!(score("Ah2h3h4h5h"), 9_000_005);
    assert!(score("Ah2h3h4h5h") < score("9h8h7h6h5h"));
}

#[test]
fn test_ace_high_straight_flush_is_top() {
    let royal = score("AsKsQsJsTs");
    assert_eq!(royal, 9_000_014);
    assert_eq!(HandCategory::from_score(royal), HandCategory::StraightFlush);
}

#[test]
fn test_flush_kickers_decide() {
    assert!(score("AhQh9h5h2h") > score("AhQh9h4h3h"));
    assert!(score("KhQh9h5h3h") < score("Ah7h6h4h2h"));
}

#[test]
fn test_pair_kickers_decide() {
    // AA with K kicker beats AA with Q kicker
    assert!(score("AhAdKc5s2h") > score("AhAdQc5s2h"));
    // higher pair dominates any kickers
    assert!(score("AhAd3c4s2h") > score("KhKdAcQsJh"));
}

#[test]
fn test_two_pair_ordering() {
    // Aces-up beats kings-up
    assert!(score("AhAd3c3s2h") > score("KhKdQcQs2h"));
    // same two pair, kicker decides
    assert!(score("AhAd5c5sKh") > score("AcAs5h5dQh"));
}

#[test]
fn test_full_house_trips_dominate() {
    // KKK22 beats QQQAA
    assert!(score("KhKdKc2s2h") > score("QhQdQcAsAh"));
}

#[test]
fn test_quads_kicker() {
    assert!(score("7h7d7c7sAh") > score("7h7d7c7sKh"));
    assert!(score("8h8d8c8s2h") > score("7h7d7c7sAh"));
}

#[test]
fn test_exact_tie_across_suits() {
    assert_eq!(score("9s8h7d6c5s"), score("9d8c7s6h5c"));
    assert_eq!(score("AhKd9c5s2h"), score("AsKc9d5h2d"));
}

#[test]
fn test_flush_beats_straight() {
    assert!(score("AhQh9h5h2h") > score("AsKdQcJhTs"));
}

#[test]
fn test_evaluate_5_size_validation() {
    let four = parse_board("AhKdQc5s").unwrap();
    assert!(matches!(
        evaluate_5(&four),
        Err(HoldemError::InvalidCardCount { expected: 5, got: 4 })
    ));
    let six = parse_board("AhKdQc5s2h3d").unwrap();
    assert!(matches!(
        evaluate_5(&six),
        Err(HoldemError::InvalidCardCount { expected: 5, got: 6 })
    ));
}

#[test]
fn test_best_hand_7_size_validation() {
    let six = parse_board("AhKdQc5s2h3d").unwrap();
    assert!(matches!(
        best_hand_7(&six),
        Err(HoldemError::InvalidCardCount { expected: 7, got: 6 })
    ));
    let eight = parse_board("AhKdQc5s2h3d4c6s").unwrap();
    assert!(matches!(
        best_hand_7(&eight),
        Err(HoldemError::InvalidCardCount { expected: 7, got: 8 })
    ));
}

#[test]
fn test_best_hand_7_finds_buried_full_house() {
    // Kings full of fives buried among unrelated cards.
    let seven = parse_board("KhKd5c5sKs2d9h").unwrap();
    let best = best_hand_7(&seven).unwrap();
    let direct = evaluate_5(&[c("Kh"), c("Kd"), c("Ks"), c("5c"), c("5s")]).unwrap();
    assert_eq!(best, direct);
    assert_eq!(best, 7_001_305);
}

#[test]
fn test_best_hand_7_prefers_flush_over_straight() {
    let seven = parse_board("As2s7s6s5s8h9d").unwrap();
    let best = best_hand_7(&seven).unwrap();
    assert_eq!(HandCategory::from_score(best), HandCategory::Flush);
}

#[test]
fn test_best_hand_7_wheel() {
    let seven = parse_board("As2h3d4c5sKhQd").unwrap();
    let best = best_hand_7(&seven).unwrap();
    assert_eq!(best, 5_000_005);
}

#[test]
fn test_best_hand_7_board_plays() {
    // Board is a broadway straight; hero's low cards never improve it.
    let seven = parse_board("2h3dAsKdQhJsTs").unwrap();
    assert_eq!(best_hand_7(&seven).unwrap(), 5_000_014);
}

#[test]
fn test_category_wire_names() {
    assert_eq!(HandCategory::Flush.wire_name(), "flush");
    assert_eq!(HandCategory::ThreeOfAKind.wire_name(), "three_of_a_kind");
    assert_eq!(format!("{}", HandCategory::StraightFlush), "Straight Flush");
}
