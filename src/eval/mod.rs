//! Подсчёт очков руки и решение о выплате.

pub mod payout;
pub mod scoring;

pub use payout::{settle, Settlement, JOKER_MULTIPLIER, SCORE_MULTIPLIER};
pub use scoring::{hand_has_joker, score_hand, WINNING_SCORE};
