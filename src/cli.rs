//! Оболочка командной строки: аргументы, выбор источника ставок,
//! текстовый рассказ о ходе раунда.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ConfigError, ConfigFile, GameConfig};
use crate::domain::{Money, Outcome};
use crate::engine::{BetSource, RoundEvent, RoundEventKind, RoundObserver};
use crate::infra::{ConsoleBetSource, FixedBet, ScriptedBets};

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Play one round of the 54-card joker ante game.",
    long_about = None
)]
pub struct Args {
    /// Names of players, e.g. --players Alice Bob
    #[arg(long, num_args = 1.., required_unless_present = "config")]
    pub players: Vec<String>,

    /// Maximum bet amount [default: 50]
    #[arg(long)]
    pub max_bet: Option<Money>,

    /// Starting bankroll per player [default: 200]
    #[arg(long)]
    pub bankroll: Option<Money>,

    /// Ante amount; defaults to 10% of max bet
    #[arg(long)]
    pub ante: Option<Money>,

    /// RNG seed for deterministic shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with any of: players, max_bet, bankroll, ante, seed
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Non-interactive bets in player order, e.g. --bets 10,0,25 (missing ones are 0)
    #[arg(long, value_delimiter = ',', conflicts_with = "auto_bet")]
    pub bets: Option<Vec<Money>>,

    /// Non-interactive: every player bets this amount (capped by max bet and bankroll)
    #[arg(long)]
    pub auto_bet: Option<Money>,

    /// Print the round summary as JSON; narration goes to stderr
    #[arg(long)]
    pub json: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Флаги поверх файла поверх умолчаний.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        let flags = ConfigFile {
            players: (!self.players.is_empty()).then(|| self.players.clone()),
            max_bet: self.max_bet,
            bankroll: self.bankroll,
            ante: self.ante,
            seed: self.seed,
        };
        GameConfig::from_file(file.overridden_by(flags))
    }

    /// Источник ставок по флагам. Скриптовые ставки проверяются против
    /// `max_bet` заранее, чтобы раунд не обрывался посередине.
    pub fn bet_source(&self, max_bet: Money) -> Result<Box<dyn BetSource>, ConfigError> {
        match (&self.bets, self.auto_bet) {
            (Some(bets), _) => {
                if let Some(&bet) = bets.iter().find(|&&bet| bet > max_bet) {
                    return Err(ConfigError::ScriptedBetAboveMax { bet, max_bet });
                }
                Ok(Box::new(ScriptedBets::new(bets.iter().copied())))
            }
            (None, Some(amount)) => Ok(Box::new(FixedBet(amount))),
            (None, None) => Ok(Box::new(ConsoleBetSource)),
        }
    }
}

/// Рассказывает о раунде по мере событий, в духе настольного дилера.
pub struct ConsoleNarrator<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        // Рассказ – не критичный вывод: сломанный pipe не должен валить раунд.
        if let Err(err) = writeln!(self.out, "{text}") {
            log::warn!("narration write failed: {err}");
        }
    }
}

impl<W: Write> RoundObserver for ConsoleNarrator<W> {
    fn on_event(&mut self, event: &RoundEvent) {
        match &event.kind {
            RoundEventKind::AntePaid {
                player,
                amount,
                bankroll,
            } => self.line(format_args!(
                "\n{player} pays ante {amount}. Bankroll now {bankroll}."
            )),
            RoundEventKind::AnteSkipped {
                player,
                ante,
                bankroll,
            } => self.line(format_args!(
                "\n{player} cannot cover ante {ante} (bankroll {bankroll}); skipped."
            )),
            RoundEventKind::FirstCardRevealed { player, card } => {
                self.line(format_args!("First card for {player}: {card}"))
            }
            RoundEventKind::BetPlaced {
                player,
                amount,
                bankroll,
            } => self.line(format_args!(
                "{player} bets {amount}. Bankroll now {bankroll}."
            )),
            RoundEventKind::RemainingRevealed { cards, .. } => {
                let shown = cards
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.line(format_args!("Remaining cards: {shown}"));
            }
            RoundEventKind::HandScored {
                score, has_joker, ..
            } if !has_joker => self.line(format_args!("Total score: {score}")),
            RoundEventKind::PlayerSettled {
                player,
                outcome,
                bankroll,
                ..
            } => match outcome {
                Outcome::JokerWin { .. } | Outcome::ScoreWin { .. } | Outcome::Lose { .. } => {
                    self.line(format_args!("{outcome}"));
                    self.line(format_args!("{player} bankroll: {bankroll}"));
                }
                Outcome::NoBet => self.line(format_args!("{outcome}")),
                Outcome::NotPlayed | Outcome::SkippedCannotCoverAnte => {}
            },
            _ => {}
        }
    }
}
