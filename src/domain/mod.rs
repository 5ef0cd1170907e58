//! Доменная модель: карты, колода, деньги, игроки.

pub mod card;
pub mod deck;
pub mod errors;
pub mod money;
pub mod player;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use errors::*;
pub use money::*;
pub use player::*;
