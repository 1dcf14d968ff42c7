//! Card, deck and participant tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{BetError, Card, DECK_SIZE, Deck, DeckError, Outcome, Participant, Rank, Suit};

#[test]
fn rank_scores() {
    for rank in Rank::ALL {
        let expected = match rank {
            Rank::Ace => 11,
            Rank::Eight => 8,
            Rank::Nine => 9,
            _ => 10,
        };
        assert_eq!(rank.score(), expected, "{rank}");
    }
    assert_eq!(Rank::Two.score(), 10);
    assert_eq!(Rank::Seven.score(), 10);
    assert_eq!(Card::new(Suit::Clubs, Rank::Queen).score(), 10);
    assert_eq!(Card::new(Suit::Clubs, Rank::Five).to_string(), "Five of Clubs (10)");
}

#[test]
fn every_card_in_a_deck_scores_by_rank() {
    let deck = Deck::shuffled(1, &mut ChaCha8Rng::seed_from_u64(11));
    let total: u32 = deck.cards().iter().map(Card::score).sum();
    // Per suit: Ace 11, Eight 8, Nine 9, ten other ranks at 10.
    assert_eq!(total, 4 * (11 + 8 + 9 + 10 * 10));
}

#[test]
fn card_equality_is_suit_and_rank() {
    let a = Card::new(Suit::Hearts, Rank::Ace);
    assert_eq!(a, Card::new(Suit::Hearts, Rank::Ace));
    assert_ne!(a, Card::new(Suit::Spades, Rank::Ace));
    assert_ne!(a, Card::new(Suit::Hearts, Rank::King));
    assert_eq!(a.to_string(), "Ace of Hearts (11)");
}

#[test]
fn shuffled_deck_is_one_full_set() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let deck = Deck::shuffled(1, &mut rng);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 52);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&Card::new(suit, rank)));
        }
    }
}

#[test]
fn shuffle_is_seeded() {
    let a = Deck::shuffled(1, &mut ChaCha8Rng::seed_from_u64(3));
    let b = Deck::shuffled(1, &mut ChaCha8Rng::seed_from_u64(3));
    let c = Deck::shuffled(1, &mut ChaCha8Rng::seed_from_u64(4));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn multi_set_and_zero_set_decks() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(Deck::shuffled(2, &mut rng).len(), 2 * DECK_SIZE);
    assert_eq!(Deck::shuffled(0, &mut rng).len(), DECK_SIZE);
}

#[test]
fn draw_until_exhausted() {
    let first = Card::new(Suit::Diamonds, Rank::Seven);
    let mut deck = Deck::stacked(&[first]);
    assert_eq!(deck.draw(), Ok(first));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Exhausted));
    assert_eq!(deck.draw(), Err(DeckError::Exhausted));
}

#[test]
fn bet_must_be_below_points() {
    let mut p = Participant::new("p1", "Ada", 100);

    assert_eq!(
        p.set_bet(100),
        Err(BetError::InsufficientPoints {
            bet: 100,
            points: 100
        })
    );
    assert!(p.set_bet(150).is_err());
    assert_eq!(p.bet(), 0);

    assert!(p.set_bet(1).is_ok());
    assert!(p.set_bet(99).is_ok());
    assert_eq!(p.bet(), 99);

    assert!(p.set_bet(200).is_err());
    assert_eq!(p.bet(), 99);

    assert!(p.set_bet(0).is_ok());
    assert_eq!(p.bet(), 0);
}

#[test]
fn zero_bet_always_allowed() {
    let mut broke = Participant::new("p2", "Bo", 0);
    assert!(broke.set_bet(0).is_ok());
    assert!(broke.set_bet(1).is_err());
}

#[test]
fn win_loss_moves_exactly_the_bet() {
    let mut p = Participant::new("p1", "Ada", 100);
    p.set_bet(10).unwrap();

    p.set_result(20);
    assert_eq!(p.apply_win_loss(19), Outcome::Win);
    assert_eq!(p.points(), 110);

    assert_eq!(p.apply_win_loss(21), Outcome::Lose);
    assert_eq!(p.points(), 100);

    assert_eq!(p.apply_win_loss(20), Outcome::Push);
    assert_eq!(p.points(), 100);

    // Settling twice applies twice.
    p.apply_win_loss(0);
    p.apply_win_loss(0);
    assert_eq!(p.points(), 120);
}

#[test]
fn loss_debits_full_bet_even_below_zero() {
    let mut p = Participant::new("p1", "Ada", 100);
    p.set_bet(50).unwrap();
    p.set_points(10);
    p.set_result(5);

    assert_eq!(p.apply_win_loss(20), Outcome::Lose);
    assert_eq!(p.points(), -40);

    // A negative balance cannot cover any bet.
    assert_eq!(
        p.set_bet(1),
        Err(BetError::InsufficientPoints {
            bet: 1,
            points: -40
        })
    );
    assert!(p.set_bet(0).is_ok());
}

#[test]
fn participant_identity_is_the_id() {
    let mut a = Participant::new("a", "Ada", 100);
    let other_a = Participant::new("a", "Someone Else", 5);
    let b = Participant::new("b", "Bo", 100);
    assert_eq!(a, other_a);
    assert_ne!(a, b);

    let mut sorted = vec![b.clone(), a.clone()];
    sorted.sort();
    assert_eq!(sorted[0].id(), "a");
    assert!(a < b);

    a.set_name("Ada L.");
    a.set_points(42);
    assert_eq!(a.name(), "Ada L.");
    assert_eq!(
        a.to_string(),
        "Player: id=a, name=Ada L., bet=0, points=42, result=0"
    );
}
