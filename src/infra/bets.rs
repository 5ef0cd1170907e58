use std::collections::VecDeque;

use crate::domain::{Money, Player};
use crate::engine::{BetSource, EngineError};

/// Ставки по заранее заданному списку, по одной на запрос.
/// Когда список кончился – ставка 0.
///
/// Значения не проверяются: сломанный скрипт всплывёт ошибкой движка.
#[derive(Clone, Debug, Default)]
pub struct ScriptedBets {
    queue: VecDeque<Money>,
}

impl ScriptedBets {
    pub fn new(bets: impl IntoIterator<Item = Money>) -> Self {
        Self {
            queue: bets.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl BetSource for ScriptedBets {
    fn get_bet(&mut self, player: &Player, _max_bet: Money) -> Result<Money, EngineError> {
        let bet = self.queue.pop_front().unwrap_or(Money::ZERO);
        log::debug!("scripted bet {} for {}", bet, player.name);
        Ok(bet)
    }
}

/// Одна и та же ставка для всех, урезанная до лимита и банкролла.
#[derive(Clone, Copy, Debug)]
pub struct FixedBet(pub Money);

impl BetSource for FixedBet {
    fn get_bet(&mut self, player: &Player, max_bet: Money) -> Result<Money, EngineError> {
        Ok(self.0.min(max_bet).min(player.bankroll))
    }
}
