//! Инфраструктура вокруг движка:
//! - RNG-реализации;
//! - источники ставок (скрипт, фиксированная, консоль);
//! - инициализация логгера.

pub mod bets;
pub mod console;
pub mod logging;
pub mod rng;

pub use bets::*;
pub use console::*;
pub use logging::*;
pub use rng::*;
