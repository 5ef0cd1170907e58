use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::money::Money;
use crate::domain::player::Outcome;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Раунд начался, колода перемешана.
    RoundStarted {
        players: usize,
        max_bet: Money,
        ante: Money,
    },

    /// Игрок получил четыре закрытые карты.
    HandDealt {
        player: String,
        cards: Vec<Card>,
    },

    /// Банкролла не хватает на анте — ход пропущен.
    AnteSkipped {
        player: String,
        ante: Money,
        bankroll: Money,
    },

    AntePaid {
        player: String,
        amount: Money,
        bankroll: Money,
    },

    /// Первая карта открыта только этому игроку, до ставки.
    FirstCardRevealed {
        player: String,
        card: Card,
    },

    /// Ставка 0: анте сгорает, дальше игрок не участвует.
    BetDeclined { player: String },

    BetPlaced {
        player: String,
        amount: Money,
        bankroll: Money,
    },

    /// Открыты оставшиеся карты руки.
    RemainingRevealed {
        player: String,
        cards: Vec<Card>,
    },

    HandScored {
        player: String,
        score: u32,
        has_joker: bool,
    },

    /// Итог игрока в раунде.
    PlayerSettled {
        player: String,
        outcome: Outcome,
        payout: Money,
        bankroll: Money,
    },

    RoundFinished,
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) -> &RoundEvent {
        let index = self.events.len() as u32;
        self.events.push(RoundEvent { index, kind });
        &self.events[index as usize]
    }

    /// События, относящиеся к конкретному игроку.
    pub fn for_player<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RoundEvent> + 'a {
        self.events
            .iter()
            .filter(move |e| e.kind.player() == Some(name))
    }
}

impl RoundEventKind {
    /// Имя игрока, к которому относится событие (если относится).
    pub fn player(&self) -> Option<&str> {
        match self {
            RoundEventKind::HandDealt { player, .. }
            | RoundEventKind::AnteSkipped { player, .. }
            | RoundEventKind::AntePaid { player, .. }
            | RoundEventKind::FirstCardRevealed { player, .. }
            | RoundEventKind::BetDeclined { player }
            | RoundEventKind::BetPlaced { player, .. }
            | RoundEventKind::RemainingRevealed { player, .. }
            | RoundEventKind::HandScored { player, .. }
            | RoundEventKind::PlayerSettled { player, .. } => Some(player),
            RoundEventKind::RoundStarted { .. } | RoundEventKind::RoundFinished => None,
        }
    }
}
