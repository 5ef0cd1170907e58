use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::DomainError;
use crate::domain::money::Money;

/// Чем закончился раунд для игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    /// Раунд для игрока ещё не сыгран (или не начинался).
    NotPlayed,
    /// Не хватило банкролла на анте — ход пропущен.
    SkippedCannotCoverAnte,
    /// Игрок поставил 0 — анте сгорело, раунд для него окончен.
    NoBet,
    /// В руке джокер: выплата 3x ставки.
    JokerWin { payout: Money },
    /// Очков не меньше порога: выплата 2x ставки.
    ScoreWin { score: u32, payout: Money },
    /// Очков меньше порога.
    Lose { score: u32, threshold: u32 },
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::JokerWin { .. } | Outcome::ScoreWin { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NotPlayed => write!(f, "Skipped"),
            Outcome::SkippedCannotCoverAnte => write!(f, "Cannot cover ante; skipped."),
            Outcome::NoBet => write!(f, "No bet placed; round ended."),
            Outcome::JokerWin { payout } => write!(f, "Joker! Wins {payout} (3x bet)."),
            Outcome::ScoreWin { score, payout } => {
                write!(f, "Win! Score {score} pays {payout} (2x bet).")
            }
            Outcome::Lose { score, threshold } => {
                write!(f, "Lose. Score {score} below {threshold}.")
            }
        }
    }
}

/// Игрок и его «бухгалтерия» на текущий раунд.
///
/// `bankroll` переживает раунды, остальные поля — временные
/// и обнуляются через `reset_round`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub bankroll: Money,
    /// Четыре закрытые карты после раздачи.
    pub hand: Vec<Card>,
    pub ante_paid: Money,
    pub bet: Money,
    pub payout: Money,
    pub outcome: Outcome,
}

impl Player {
    pub fn new(name: impl Into<String>, bankroll: Money) -> Self {
        Self {
            name: name.into(),
            bankroll,
            hand: Vec::new(),
            ante_paid: Money::ZERO,
            bet: Money::ZERO,
            payout: Money::ZERO,
            outcome: Outcome::NotPlayed,
        }
    }

    /// Может ли игрок заплатить `amount` прямо сейчас.
    pub fn can_cover(&self, amount: Money) -> bool {
        amount <= self.bankroll
    }

    /// Списать `amount` с банкролла. В минус не уходим никогда.
    pub fn pay(&mut self, amount: Money) -> Result<(), DomainError> {
        match self.bankroll.checked_sub(amount) {
            Some(rest) => {
                self.bankroll = rest;
                Ok(())
            }
            None => Err(DomainError::InsufficientFunds {
                player: self.name.clone(),
                amount,
                available: self.bankroll,
            }),
        }
    }

    /// Зачислить выигрыш. Выплаты не ограничены сверху.
    pub fn credit(&mut self, amount: Money) {
        self.bankroll += amount;
    }

    /// Сбросить всё, что относится к раунду. Идемпотентно.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.ante_paid = Money::ZERO;
        self.bet = Money::ZERO;
        self.payout = Money::ZERO;
        self.outcome = Outcome::NotPlayed;
    }
}
