//! Конфигурация раунда: игроки, лимит ставки, банкролл, анте, seed.
//!
//! Источники по возрастанию приоритета: значения по умолчанию,
//! JSON-файл (`ConfigFile`), флаги командной строки.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Money, Player};
use crate::engine::RoundRules;

pub const DEFAULT_MAX_BET: Money = Money::from_dollars(50);
pub const DEFAULT_BANKROLL: Money = Money::from_dollars(200);
/// Анте по умолчанию – процент от лимита ставки.
pub const DEFAULT_ANTE_PERCENT: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("At least one player is required")]
    NoPlayers,

    #[error("Player names must not be blank")]
    BlankPlayerName,

    #[error("Max bet must be positive")]
    NonPositiveMaxBet,

    #[error("Scripted bet {bet} exceeds the max bet {max_bet}")]
    ScriptedBetAboveMax { bet: Money, max_bet: Money },

    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Частичная конфигурация из JSON-файла. Все поля необязательны.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub players: Option<Vec<String>>,
    pub max_bet: Option<Money>,
    pub bankroll: Option<Money>,
    pub ante: Option<Money>,
    pub seed: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Наложить `other` поверх `self`: заданные в `other` поля побеждают.
    pub fn overridden_by(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            players: other.players.or(self.players),
            max_bet: other.max_bet.or(self.max_bet),
            bankroll: other.bankroll.or(self.bankroll),
            ante: other.ante.or(self.ante),
            seed: other.seed.or(self.seed),
        }
    }
}

/// Проверенная конфигурация раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub max_bet: Money,
    pub bankroll: Money,
    pub ante: Money,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Собрать конфиг с умолчаниями. Анте по умолчанию – 10% от `max_bet`.
    pub fn new(
        players: Vec<String>,
        max_bet: Option<Money>,
        bankroll: Option<Money>,
        ante: Option<Money>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if players.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::BlankPlayerName);
        }

        let max_bet = max_bet.unwrap_or(DEFAULT_MAX_BET);
        if max_bet.is_zero() {
            return Err(ConfigError::NonPositiveMaxBet);
        }

        Ok(Self {
            players,
            max_bet,
            bankroll: bankroll.unwrap_or(DEFAULT_BANKROLL),
            ante: ante.unwrap_or_else(|| max_bet.percent(DEFAULT_ANTE_PERCENT)),
            seed,
        })
    }

    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        Self::new(
            file.players.unwrap_or_default(),
            file.max_bet,
            file.bankroll,
            file.ante,
            file.seed,
        )
    }

    pub fn rules(&self) -> RoundRules {
        RoundRules::new(self.max_bet, self.ante)
    }

    /// Игроки в заданном порядке, каждый со стартовым банкроллом.
    pub fn seat_players(&self) -> Vec<Player> {
        self.players
            .iter()
            .map(|name| Player::new(name.clone(), self.bankroll))
            .collect()
    }
}
