use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::money::Money;
use crate::domain::player::Outcome;
use crate::eval::scoring::{hand_has_joker, score_hand, WINNING_SCORE};

/// Выплата за руку с джокером.
pub const JOKER_MULTIPLIER: u64 = 3;
/// Выплата за руку с очками не ниже `WINNING_SCORE`.
pub const SCORE_MULTIPLIER: u64 = 2;

/// Итог вскрытия руки при заданной ставке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    /// Очки без учёта джокеров (считаются всегда, даже при джокере).
    pub score: u32,
    pub has_joker: bool,
    pub payout: Money,
    pub outcome: Outcome,
}

/// Решение о выплате. Джокер проверяется раньше очков:
/// рука с джокером платит 3x независимо от суммы остальных карт.
pub fn settle(hand: &[Card], bet: Money) -> Settlement {
    let score = score_hand(hand);
    let has_joker = hand_has_joker(hand);

    let (payout, outcome) = if has_joker {
        let payout = bet.times(JOKER_MULTIPLIER);
        (payout, Outcome::JokerWin { payout })
    } else if score >= WINNING_SCORE {
        let payout = bet.times(SCORE_MULTIPLIER);
        (payout, Outcome::ScoreWin { score, payout })
    } else {
        (
            Money::ZERO,
            Outcome::Lose {
                score,
                threshold: WINNING_SCORE,
            },
        )
    };

    Settlement {
        score,
        has_joker,
        payout,
        outcome,
    }
}
