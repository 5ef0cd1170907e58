//! Внешнее представление результатов раунда.
//!
//! DTO (dto.rs) – то, что CLI печатает пользователю (текстом или JSON).

pub mod dto;

pub use dto::*;
