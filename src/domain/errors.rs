use thiserror::Error;

use crate::domain::money::Money;

/// Ошибки доменной модели. Обе — нарушение контракта вызывающим кодом,
/// в нормальной игре не возникают.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{player} cannot cover {amount} (bankroll {available})")]
    InsufficientFunds {
        player: String,
        amount: Money,
        available: Money,
    },

    #[error("Not enough cards to draw: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
}
