//! Движок однораундовой карточной игры на 54 карты с анте и джокерами.
//!
//! Колода (52 + 2 джокера) тасуется, каждый игрок получает 4 закрытые карты,
//! платит анте, видит первую карту, делает ставку, затем карты вскрываются:
//! джокер платит 3x ставки, сумма очков от 32 – 2x, иначе ставка проиграна.
//!
//! - `domain` – карты, колода, деньги, игроки;
//! - `eval` – подсчёт очков и решение о выплате;
//! - `engine` – оркестрация раунда и трейты-«швы» (RNG, ставки, наблюдатель);
//! - `infra` – реализации RNG, источники ставок, логгер;
//! - `config` – конфигурация раунда;
//! - `api` – DTO итогов для вывода;
//! - `cli` – оболочка командной строки.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
