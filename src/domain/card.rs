use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,   // ♠
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
}

impl Suit {
    /// Порядок мастей при сборке колоды.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
}

/// Ранг карты. Туз идёт первым — так колода и собирается.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Очки ранга: A = 11, J/Q/K = 10, остальные — номинал.
    pub const fn points(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }
}

/// Джокеров в колоде два, цвет только различает их между собой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerColor {
    Black,
    Red,
}

/// Карта 54-карточной колоды. У джокера масти нет по построению.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker(JokerColor),
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    pub const fn joker(color: JokerColor) -> Self {
        Card::Joker(color)
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(*rank),
            Card::Joker(_) => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Joker(_) => None,
        }
    }

    /// Числовое значение карты. Для джокера это 0 — не очки, а маркер
    /// «в сумму не входит»: джокер обрабатывается отдельным правилом выплаты.
    pub fn value(&self) -> u32 {
        match self {
            Card::Standard { rank, .. } => rank.points(),
            Card::Joker(_) => 0,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            r => write!(f, "{}", r.points()),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `A♠`, `10♥`, `JOKER`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Card::Joker(_) => write!(f, "JOKER"),
        }
    }
}

/// Парсинг строк вида "As", "10h", "Td", "7c", а также "BJ"/"RJ" для джокеров.
/// Голое "JOKER" считается чёрным джокером.
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_uppercase().as_str() {
            "BJ" | "JOKER" => return Ok(Card::Joker(JokerColor::Black)),
            "RJ" => return Ok(Card::Joker(JokerColor::Red)),
            _ => {}
        }

        let mut chars: Vec<char> = s.chars().collect();
        let s_ch = chars.pop().ok_or_else(|| "Card string must not be empty".to_string())?;
        let r_str: String = chars.into_iter().collect();

        let rank = match r_str.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(format!("Invalid rank: {r_str}")),
        };

        let suit = match s_ch {
            's' | 'S' | '♠' => Suit::Spades,
            'h' | 'H' | '♥' => Suit::Hearts,
            'd' | 'D' | '♦' => Suit::Diamonds,
            'c' | 'C' | '♣' => Suit::Clubs,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card::new(rank, suit))
    }
}
