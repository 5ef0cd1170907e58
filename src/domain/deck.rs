use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, JokerColor, Rank, Suit};
use crate::domain::errors::DomainError;
use crate::engine::RandomSource;

/// Колода карт: упорядоченный список, верх колоды — начало вектора.
/// Живёт один раунд: собирается, тасуется, раздаётся и выбрасывается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Размер полной колоды: 4 масти × 13 рангов + 2 джокера.
    pub const FULL_SIZE: usize = 54;

    /// Полная 54-карточная колода в фиксированном порядке:
    /// ♠ A..K, ♥ A..K, ♦ A..K, ♣ A..K, затем чёрный и красный джокеры.
    ///
    /// Порядок важен: от него (и seed'а) зависит результат тасовки.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(Self::FULL_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.push(Card::joker(JokerColor::Black));
        cards.push(Card::joker(JokerColor::Red));
        Deck { cards }
    }

    /// Колода из заранее подготовленных карт (сценарии, тесты).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешать колоду целиком источником случайности.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Снять `count` карт сверху. Колода остаётся с остатком.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DomainError> {
        if count > self.cards.len() {
            return Err(DomainError::DeckExhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
