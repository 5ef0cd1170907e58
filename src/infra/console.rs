use dialoguer::Input;

use crate::domain::{Money, Player};
use crate::engine::{BetSource, EngineError};

/// Интерактивная ставка из терминала.
///
/// Пустой ввод – ставка 0. Неверный ввод отклоняется и запрашивается заново,
/// поэтому движок получает только допустимые значения.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleBetSource;

impl BetSource for ConsoleBetSource {
    fn get_bet(&mut self, player: &Player, max_bet: Money) -> Result<Money, EngineError> {
        let bankroll = player.bankroll;
        let raw = Input::<String>::new()
            .with_prompt(format!(
                "Bet for {} (0 to skip, max {})",
                player.name, max_bet
            ))
            .allow_empty(true)
            .report(false)
            .validate_with(move |input: &String| -> Result<(), String> {
                validate_bet(input, max_bet, bankroll).map(|_| ())
            })
            .interact_text()
            .map_err(|err| EngineError::BetInput {
                player: player.name.clone(),
                reason: err.to_string(),
            })?;

        // Ввод уже прошёл валидацию выше.
        validate_bet(&raw, max_bet, bankroll).map_err(|reason| EngineError::BetInput {
            player: player.name.clone(),
            reason,
        })
    }
}

/// Разбор и проверка введённой ставки. Пустая строка – 0.
pub fn validate_bet(input: &str, max_bet: Money, bankroll: Money) -> Result<Money, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Money::ZERO);
    }
    if input.starts_with('-') {
        return Err("Bet cannot be negative.".into());
    }
    let bet: Money = input
        .parse()
        .map_err(|_| "Please enter a number.".to_string())?;
    if bet > max_bet {
        return Err(format!("Bet cannot exceed {max_bet}."));
    }
    if bet > bankroll {
        return Err(format!("Insufficient funds. Available: {bankroll}"));
    }
    Ok(bet)
}
