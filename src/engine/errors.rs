use thiserror::Error;

use crate::domain::{DomainError, Money};

/// Ошибки движка раунда. Все фатальны для текущего запуска:
/// ядро не восстанавливается, а отдаёт ошибку наружу.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Bet {bet} for {player} exceeds the max bet {max_bet}")]
    BetAboveMax {
        player: String,
        bet: Money,
        max_bet: Money,
    },

    #[error("Failed to read bet for {player}: {reason}")]
    BetInput { player: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(&'static str),
}
