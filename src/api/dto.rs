use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::money::Money;
use crate::domain::player::Player;

/// Итог одного игрока в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummaryDto {
    pub name: String,
    /// Текстовое описание итога ("Win! Score 39 pays $20.00 (2x bet)." и т.п.).
    pub outcome: String,
    pub won: bool,
    pub hand: Vec<Card>,
    pub bet: Money,
    pub ante: Money,
    pub payout: Money,
    pub bankroll: Money,
}

/// Итоги раунда по всем игрокам, в порядке хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummaryDto {
    pub seed: Option<u64>,
    pub players: Vec<PlayerSummaryDto>,
}

pub fn build_player_summary(player: &Player) -> PlayerSummaryDto {
    PlayerSummaryDto {
        name: player.name.clone(),
        outcome: player.outcome.to_string(),
        won: player.outcome.is_win(),
        hand: player.hand.clone(),
        bet: player.bet,
        ante: player.ante_paid,
        payout: player.payout,
        bankroll: player.bankroll,
    }
}

pub fn build_round_summary(players: &[Player], seed: Option<u64>) -> RoundSummaryDto {
    RoundSummaryDto {
        seed,
        players: players.iter().map(build_player_summary).collect(),
    }
}

impl fmt::Display for PlayerSummaryDto {
    /// `- Alice: Lose. Score 20 below 32. | Bet $10.00 | Ante $5.00 | Payout $0.00 | ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: {} | Bet {} | Ante {} | Payout {} | Bankroll {}",
            self.name, self.outcome, self.bet, self.ante, self.payout, self.bankroll
        )
    }
}

impl fmt::Display for RoundSummaryDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round summary:")?;
        for p in &self.players {
            writeln!(f, "{p}")?;
        }
        Ok(())
    }
}
