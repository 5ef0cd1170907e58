use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::money::Money;
use crate::domain::player::{Outcome, Player};
use crate::engine::errors::EngineError;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::{BetSource, RandomSource, RoundObserver};
use crate::eval::settle;

/// Сколько закрытых карт получает каждый игрок.
pub const CARDS_PER_HAND: usize = 4;

/// Денежные правила раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRules {
    pub max_bet: Money,
    pub ante: Money,
}

impl RoundRules {
    pub fn new(max_bet: Money, ante: Money) -> Self {
        Self { max_bet, ante }
    }
}

/// История + подписчик: каждое событие пишется в лог и сразу уходит наружу.
struct EventSink<'a, O: ?Sized> {
    history: RoundHistory,
    observer: &'a mut O,
}

impl<'a, O: RoundObserver + ?Sized> EventSink<'a, O> {
    fn emit(&mut self, kind: RoundEventKind) {
        let event = self.history.push(kind);
        self.observer.on_event(event);
    }
}

/// Сыграть один раунд на свежей перемешанной колоде.
///
/// Игроки обрабатываются строго по порядку. Пропуск (нет денег на анте)
/// или отказ от ставки завершают ход только этого игрока.
/// Ошибки (`EngineError`) – нарушение контракта, раунд прерывается.
pub fn play_round<R, B, O>(
    players: &mut [Player],
    rules: &RoundRules,
    rng: &mut R,
    bets: &mut B,
    observer: &mut O,
) -> Result<RoundHistory, EngineError>
where
    R: RandomSource,
    B: BetSource + ?Sized,
    O: RoundObserver + ?Sized,
{
    let mut deck = Deck::new();
    deck.shuffle(rng);
    play_round_with_deck(players, rules, deck, bets, observer)
}

/// То же, что `play_round`, но на уже подготовленной колоде
/// (раздача идёт сверху, без тасовки).
pub fn play_round_with_deck<B, O>(
    players: &mut [Player],
    rules: &RoundRules,
    deck: Deck,
    bets: &mut B,
    observer: &mut O,
) -> Result<RoundHistory, EngineError>
where
    B: BetSource + ?Sized,
    O: RoundObserver + ?Sized,
{
    let mut sink = EventSink {
        history: RoundHistory::new(),
        observer,
    };

    info!(
        "round started: {} player(s), max bet {}, ante {}",
        players.len(),
        rules.max_bet,
        rules.ante
    );
    sink.emit(RoundEventKind::RoundStarted {
        players: players.len(),
        max_bet: rules.max_bet,
        ante: rules.ante,
    });

    // Раздаём всем до начала торговли. Колода после этого не нужна.
    deal_hands(players, deck, &mut sink)?;

    for player in players.iter_mut() {
        play_turn(player, rules, bets, &mut sink)?;
    }

    info!("round finished");
    sink.emit(RoundEventKind::RoundFinished);
    Ok(sink.history)
}

/// Сброс раундовых полей и раздача по 4 карты каждому игроку.
fn deal_hands<O: RoundObserver + ?Sized>(
    players: &mut [Player],
    mut deck: Deck,
    sink: &mut EventSink<'_, O>,
) -> Result<(), EngineError> {
    for player in players.iter_mut() {
        player.reset_round();
        player.hand = deck.draw(CARDS_PER_HAND)?;
        debug!("dealt {} cards to {}", player.hand.len(), player.name);
        sink.emit(RoundEventKind::HandDealt {
            player: player.name.clone(),
            cards: player.hand.clone(),
        });
    }
    debug!("{} cards left undealt", deck.len());
    Ok(())
}

/// Ход одного игрока: анте → первая карта → ставка → вскрытие → выплата.
fn play_turn<B, O>(
    player: &mut Player,
    rules: &RoundRules,
    bets: &mut B,
    sink: &mut EventSink<'_, O>,
) -> Result<(), EngineError>
where
    B: BetSource + ?Sized,
    O: RoundObserver + ?Sized,
{
    if !player.can_cover(rules.ante) {
        warn!(
            "{} cannot cover ante {} with bankroll {}; skipped",
            player.name, rules.ante, player.bankroll
        );
        player.outcome = Outcome::SkippedCannotCoverAnte;
        sink.emit(RoundEventKind::AnteSkipped {
            player: player.name.clone(),
            ante: rules.ante,
            bankroll: player.bankroll,
        });
        settled(player, sink);
        return Ok(());
    }

    player.pay(rules.ante)?;
    player.ante_paid = rules.ante;
    debug!(
        "{} paid ante {}, bankroll {}",
        player.name, rules.ante, player.bankroll
    );
    sink.emit(RoundEventKind::AntePaid {
        player: player.name.clone(),
        amount: rules.ante,
        bankroll: player.bankroll,
    });

    let first_card = *player
        .hand
        .first()
        .ok_or(EngineError::Internal("player has no cards after the deal"))?;
    sink.emit(RoundEventKind::FirstCardRevealed {
        player: player.name.clone(),
        card: first_card,
    });

    let bet = bets.get_bet(player, rules.max_bet)?;
    if bet > rules.max_bet {
        return Err(EngineError::BetAboveMax {
            player: player.name.clone(),
            bet,
            max_bet: rules.max_bet,
        });
    }

    if bet.is_zero() {
        debug!("{} declined to bet; ante forfeited", player.name);
        player.outcome = Outcome::NoBet;
        sink.emit(RoundEventKind::BetDeclined {
            player: player.name.clone(),
        });
        settled(player, sink);
        return Ok(());
    }

    player.pay(bet)?;
    player.bet = bet;
    debug!("{} bet {}, bankroll {}", player.name, bet, player.bankroll);
    sink.emit(RoundEventKind::BetPlaced {
        player: player.name.clone(),
        amount: bet,
        bankroll: player.bankroll,
    });

    sink.emit(RoundEventKind::RemainingRevealed {
        player: player.name.clone(),
        cards: player.hand.iter().skip(1).copied().collect(),
    });

    let settlement = settle(&player.hand, bet);
    sink.emit(RoundEventKind::HandScored {
        player: player.name.clone(),
        score: settlement.score,
        has_joker: settlement.has_joker,
    });

    player.credit(settlement.payout);
    player.payout = settlement.payout;
    player.outcome = settlement.outcome;
    debug!(
        "{} settled: {} (payout {}, bankroll {})",
        player.name, player.outcome, player.payout, player.bankroll
    );
    settled(player, sink);
    Ok(())
}

fn settled<O: RoundObserver + ?Sized>(player: &Player, sink: &mut EventSink<'_, O>) {
    sink.emit(RoundEventKind::PlayerSettled {
        player: player.name.clone(),
        outcome: player.outcome.clone(),
        payout: player.payout,
        bankroll: player.bankroll,
    });
}
