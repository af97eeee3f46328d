// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error mapping a token to a [Card].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not a two characters rank and suit pair.
    #[error("malformed card token {0:?}")]
    MalformedToken(String),
    /// The rank character is not a recognized rank symbol.
    #[error("unknown rank symbol {0:?}")]
    UnknownRank(char),
    /// The suit character is not a recognized suit symbol.
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(char),
}

/// Error parsing a space separated sequence of card tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardsError {
    /// A token failed to parse.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// The sequence has the wrong number of cards.
    #[error(transparent)]
    Arity(#[from] ArityError),
}

/// Error building a [Hand] or [Deck] from the wrong number of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} cards, got {found}")]
pub struct ArityError {
    /// The required number of cards.
    pub expected: usize,
    /// The number of cards given.
    pub found: usize,
}

/// A Poker card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
            }
            _ => Err(ParseCardError::MalformedToken(s.to_string())),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
///
/// Discriminants are the rank values used for straight detection, deuce is
/// lowest at 2, ace is highest at 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns the rank value in the 2 to 14 range.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseCardError::UnknownRank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let suit = match c {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(ParseCardError::UnknownSuit(c)),
        };

        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// The five cards a player holds.
///
/// Positions matter only for replacement indexing, classification is order
/// independent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from its five cards.
    pub const fn new(cards: [Card; Hand::SIZE]) -> Self {
        Self(cards)
    }

    /// Returns a copy of the hand cards.
    pub fn cards(&self) -> [Card; Hand::SIZE] {
        self.0
    }

    /// Iterates the hand cards in position order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = ArityError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; Hand::SIZE] = cards.try_into().map_err(|_| ArityError {
            expected: Hand::SIZE,
            found: cards.len(),
        })?;
        Ok(Self(cards))
    }
}

impl FromStr for Hand {
    type Err = ParseCardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::try_from(parse_cards(s)?.as_slice())?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_cards(&self.0, f)
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}

/// The replacement cards, drawn strictly in order.
///
/// The i-th card drawn is always the deck card at position i, whatever hand
/// position it lands on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck([Card; Deck::SIZE]);

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 5;

    /// Creates a deck from its five cards in draw order.
    pub const fn new(cards: [Card; Deck::SIZE]) -> Self {
        Self(cards)
    }

    /// Returns the i-th card in draw order.
    ///
    /// Panics if i is out of the deck range.
    pub fn draw(&self, i: usize) -> Card {
        self.0[i]
    }
}

impl TryFrom<&[Card]> for Deck {
    type Error = ArityError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; Deck::SIZE] = cards.try_into().map_err(|_| ArityError {
            expected: Deck::SIZE,
            found: cards.len(),
        })?;
        Ok(Self(cards))
    }
}

impl FromStr for Deck {
    type Err = ParseCardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::try_from(parse_cards(s)?.as_slice())?)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_cards(&self.0, f)
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({self})")
    }
}

fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}

fn fmt_cards(cards: &[Card], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{card}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_parse_roundtrip() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            }
        }
    }

    #[test]
    fn card_parse_errors() {
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::UnknownRank('1'))
        );
        assert_eq!(
            "tD".parse::<Card>(),
            Err(ParseCardError::UnknownRank('t'))
        );
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::UnknownSuit('X'))
        );
        assert_eq!(
            "A".parse::<Card>(),
            Err(ParseCardError::MalformedToken("A".to_string()))
        );
        assert_eq!(
            "AHH".parse::<Card>(),
            Err(ParseCardError::MalformedToken("AHH".to_string()))
        );
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::MalformedToken(String::new()))
        );
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Trey > Rank::Deuce);
    }

    #[test]
    fn hand_arity() {
        let cards = Rank::ranks()
            .map(|r| Card::new(r, Suit::Hearts))
            .collect::<Vec<_>>();

        assert!(Hand::try_from(&cards[..5]).is_ok());
        assert_eq!(
            Hand::try_from(&cards[..4]),
            Err(ArityError {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            Deck::try_from(&cards[..6]),
            Err(ArityError {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn hand_to_string() {
        let cards = ["3D", "5S", "2H", "QD", "TD"]
            .iter()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        let hand = Hand::try_from(cards.as_slice()).unwrap();
        assert_eq!(hand.to_string(), "3D 5S 2H QD TD");
    }

    #[test]
    fn hand_parse() {
        let hand = "3D 5S 2H QD TD".parse::<Hand>().unwrap();
        assert_eq!(hand.to_string(), "3D 5S 2H QD TD");

        assert_eq!(
            "3D 5S 2H QD".parse::<Hand>(),
            Err(ParseCardsError::Arity(ArityError {
                expected: 5,
                found: 4
            }))
        );
        assert_eq!(
            "3D 5S 2X QD TD".parse::<Hand>(),
            Err(ParseCardsError::Card(ParseCardError::UnknownSuit('X')))
        );
        assert!("3D 5S 2H QD TD 6S".parse::<Deck>().is_err());
    }

    #[test]
    fn deck_draw_order() {
        let cards = ["6S", "KH", "9H", "AD", "QH"]
            .iter()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        let deck = Deck::try_from(cards.as_slice()).unwrap();

        for (i, card) in cards.iter().enumerate() {
            assert_eq!(deck.draw(i), *card);
        }
    }
}
