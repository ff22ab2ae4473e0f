use std::fmt;
use strum_macros::EnumIter;

use super::normalize::to_face;

/// Lowest numeric rank a card can carry
pub const MIN_RANK: u8 = 2;
/// Highest numeric rank a card can carry (Ace)
pub const MAX_RANK: u8 = 14;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("Empty card token")]
    Empty,
    #[error("Invalid suit in card token: {0}")]
    InvalidSuit(String),
    #[error("Invalid rank in card token: {0}")]
    InvalidRank(String),
}

/// Suits in their sorting order: diamonds, spades, clubs, hearts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Diamonds = 0,
    Spades = 1,
    Clubs = 2,
    Hearts = 3,
}

impl Suit {
    /// Position of the suit in the output order, usable as a bucket index
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
        }
    }

    /// Suit named by the trailing character of a token
    pub fn of_token(token: &str) -> Option<Self> {
        token.chars().last().and_then(|c| Suit::try_from(c).ok())
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'd' => Ok(Suit::Diamonds),
            's' => Ok(Suit::Spades),
            'c' => Ok(Suit::Clubs),
            'h' => Ok(Suit::Hearts),
            _ => Err(c),
        }
    }
}

/// A card record built from a normalized token such as `"11s"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Parses a normalized token: numeric rank followed by one suit character.
    ///
    /// The rank must be plain decimal digits without sign or leading zero, so
    /// the token text always matches the card's `Display` form.
    pub fn from_normalized(token: &str) -> Result<Self, CardError> {
        let (split, last) = token.char_indices().last().ok_or(CardError::Empty)?;
        let suit = Suit::try_from(last).map_err(|_| CardError::InvalidSuit(token.to_string()))?;
        let digits = &token[..split];
        let rank = Some(digits)
            .filter(|d| !d.is_empty() && !d.starts_with('0'))
            .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|d| d.parse::<u8>().ok())
            .filter(|rank| (MIN_RANK..=MAX_RANK).contains(rank))
            .ok_or_else(|| CardError::InvalidRank(token.to_string()))?;

        Ok(Self::new(rank, suit))
    }

    /// The card in its display form, face cards as letters (`"Js"`)
    pub fn token(&self) -> String {
        to_face(&self.to_string())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
