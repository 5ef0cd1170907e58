//! Движок раунда: раздача, анте, ставка, вскрытие, выплата.
//!
//! Высокоуровневая операция: `play_round`.
//! Всё, что движку нужно от внешнего мира, приходит через трейты:
//!   - `RandomSource` – тасовка колоды;
//!   - `BetSource` – ставка игрока (консоль, скрипт, тест);
//!   - `RoundObserver` – события раунда по мере их наступления.

pub mod errors;
pub mod round;
pub mod round_history;

pub use errors::EngineError;
pub use round::{play_round, play_round_with_deck, RoundRules, CARDS_PER_HAND};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};

use crate::domain::{Money, Player};

/// RNG интерфейс для движка. Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Источник ставок.
///
/// Контракт: вернуть `v`, где `0 <= v <= max_bet` и `v <= player.bankroll`.
/// Повторный запрос при неверном вводе – забота реализации, движок его не видит.
pub trait BetSource {
    fn get_bet(&mut self, player: &Player, max_bet: Money) -> Result<Money, EngineError>;
}

/// Подписчик на события раунда (например, консольный рассказчик).
pub trait RoundObserver {
    fn on_event(&mut self, event: &RoundEvent);
}

/// Наблюдатель, который ничего не делает.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    fn on_event(&mut self, _event: &RoundEvent) {}
}
