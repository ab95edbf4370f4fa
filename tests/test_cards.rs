use holdem_cli::cards::*;
use holdem_cli::error::HoldemError;

#[test]
fn test_card_creation() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert_eq!(c.value(), 14);
}

#[test]
fn test_invalid_rank() {
    assert!(Rank::from_char('X').is_err());
    assert!(Rank::from_char('1').is_err());
}

#[test]
fn test_invalid_suit() {
    assert!(Suit::from_char('x').is_err());
}

#[test]
fn test_rank_from_value() {
    assert_eq!(Rank::from_value(14).unwrap(), Rank::Ace);
    assert_eq!(Rank::from_value(2).unwrap(), Rank::Two);
    assert!(Rank::from_value(1).is_err());
    assert!(Rank::from_value(15).is_err());
}

#[test]
fn test_card_str() {
    let c = Card::new(Rank::King, Suit::Diamonds);
    assert_eq!(format!("{}", c), "Kd");
}

#[test]
fn test_card_pretty() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.pretty(), "A\u{2660}");
}

#[test]
fn test_card_ordering() {
    let two = Card::new(Rank::Two, Suit::Spades);
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert!(two < ace);
}

#[test]
fn test_card_equality() {
    let a1 = Card::new(Rank::Ace, Suit::Spades);
    let a2 = Card::new(Rank::Ace, Suit::Spades);
    let a3 = Card::new(Rank::Ace, Suit::Hearts);
    assert_eq!(a1, a2);
    assert_ne!(a1, a3);
}

#[test]
fn test_card_hashable() {
    use std::collections::HashSet;
    let mut s = HashSet::new();
    s.insert(Card::new(Rank::Ace, Suit::Spades));
    s.insert(Card::new(Rank::Ace, Suit::Spades));
    s.insert(Card::new(Rank::King, Suit::Hearts));
    assert_eq!(s.len(), 2);
}

#[test]
fn test_parse_card() {
    let c = parse_card("Ah").unwrap();
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Hearts);
    // rank char is case-insensitive
    let c = parse_card("th").unwrap();
    assert_eq!(c.rank, Rank::Ten);
}

#[test]
fn test_parse_card_bad_length() {
    assert!(matches!(
        parse_card("A"),
        Err(HoldemError::InvalidCardNotation(_))
    ));
    assert!(matches!(
        parse_card("AhK"),
        Err(HoldemError::InvalidCardNotation(_))
    ));
    assert!(matches!(
        parse_card("10h"),
        Err(HoldemError::InvalidCardNotation(_))
    ));
}

#[test]
fn test_parse_card_bad_chars() {
    assert!(matches!(parse_card("Xh"), Err(HoldemError::InvalidRank(_))));
    assert!(matches!(parse_card("Ax"), Err(HoldemError::InvalidSuit(_))));
}

#[test]
fn test_parse_board() {
    let board = parse_board("Qs7h2d").unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0], Card::new(Rank::Queen, Suit::Spades));
    assert_eq!(board[2], Card::new(Rank::Two, Suit::Diamonds));
}

#[test]
fn test_parse_board_with_separators() {
    let board = parse_board("Qs 7h, 2d").unwrap();
    assert_eq!(board.len(), 3);
}

#[test]
fn test_parse_board_odd_length() {
    assert!(matches!(
        parse_board("Qs7h2"),
        Err(HoldemError::InvalidBoardNotation(_))
    ));
}

#[test]
fn test_deck_has_52_cards() {
    let deck = Deck::new();
    assert_eq!(deck.len(), 52);
    let unique: std::collections::HashSet<_> = deck.cards.iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn test_deck_remove() {
    let deck = Deck::new();
    let known = parse_board("AhKs").unwrap();
    let remaining = deck.remove(&known).unwrap();
    assert_eq!(remaining.len(), 50);
    assert!(!remaining.contains(&parse_card("Ah").unwrap()));
    assert!(!remaining.contains(&parse_card("Ks").unwrap()));
}

#[test]
fn test_deck_remove_missing_card_fails() {
    let deck = Deck::new();
    let twice = parse_board("AhAh").unwrap();
    assert!(matches!(
        deck.remove(&twice),
        Err(HoldemError::CardNotInDeck(_))
    ));
}

#[test]
fn test_deck_remove_does_not_mutate() {
    let deck = Deck::new();
    let known = parse_board("AhKs").unwrap();
    deck.remove(&known).unwrap();
    assert_eq!(deck.len(), 52);
}

#[test]
fn test_street_from_board_len() {
    assert_eq!(Street::from_board_len(0).unwrap(), Street::Preflop);
    assert_eq!(Street::from_board_len(3).unwrap(), Street::Flop);
    assert_eq!(Street::from_board_len(4).unwrap(), Street::Turn);
    assert_eq!(Street::from_board_len(5).unwrap(), Street::River);
    for n in [1, 2, 6, 7] {
        assert!(matches!(
            Street::from_board_len(n),
            Err(HoldemError::InvalidBoardSize(_))
        ));
    }
}

#[test]
fn test_find_duplicate() {
    let cards = parse_board("AhKsAh").unwrap();
    assert_eq!(find_duplicate(&cards), Some(parse_card("Ah").unwrap()));
    let clean = parse_board("AhKsQd").unwrap();
    assert_eq!(find_duplicate(&clean), None);
}
