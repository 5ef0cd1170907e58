//! Конфигурация раунда и разбор аргументов командной строки.

use clap::Parser;

use joker_ante_engine::cli::{Args, ConsoleNarrator};
use joker_ante_engine::config::*;
use joker_ante_engine::domain::{Money, Player};
use joker_ante_engine::engine::{play_round_with_deck, RoundRules};
use joker_ante_engine::infra::{level_for_verbosity, validate_bet, ScriptedBets};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_match_the_house_rules() {
    let cfg = GameConfig::new(names(&["Alice", "Bob"]), None, None, None, None).unwrap();
    assert_eq!(cfg.max_bet, Money::from_dollars(50));
    assert_eq!(cfg.bankroll, Money::from_dollars(200));
    assert_eq!(cfg.ante, Money::from_dollars(5));
    assert_eq!(cfg.seed, None);
    assert_eq!(
        cfg.rules(),
        RoundRules::new(Money::from_dollars(50), Money::from_dollars(5))
    );

    let seated = cfg.seat_players();
    assert_eq!(seated.len(), 2);
    assert_eq!(seated[0], Player::new("Alice", Money::from_dollars(200)));
    assert_eq!(seated[1].name, "Bob");
}

#[test]
fn default_ante_follows_max_bet() {
    let max_bet = Some(Money::from_dollars(120));
    let cfg = GameConfig::new(names(&["A"]), max_bet, None, None, None).unwrap();
    assert_eq!(cfg.ante, Money::from_dollars(12));

    let cfg = GameConfig::new(
        names(&["A"]),
        Some(Money::from_dollars(120)),
        None,
        Some(Money::ZERO),
        Some(9),
    )
    .unwrap();
    assert_eq!(cfg.ante, Money::ZERO);
    assert_eq!(cfg.seed, Some(9));
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        GameConfig::new(vec![], None, None, None, None),
        Err(ConfigError::NoPlayers)
    ));
    assert!(matches!(
        GameConfig::new(names(&["A", "  "]), None, None, None, None),
        Err(ConfigError::BlankPlayerName)
    ));
    assert!(matches!(
        GameConfig::new(names(&["A"]), Some(Money::ZERO), None, None, None),
        Err(ConfigError::NonPositiveMaxBet)
    ));
}

#[test]
fn config_file_parses_and_flags_override_it() {
    let file = ConfigFile::from_json(
        r#"{ "players": ["Ann", "Ben"], "max_bet": 100, "bankroll": "350.50", "seed": 7 }"#,
    )
    .unwrap();
    let flags = ConfigFile {
        bankroll: Some(Money::from_dollars(10)),
        ..ConfigFile::default()
    };

    let cfg = GameConfig::from_file(file.overridden_by(flags)).unwrap();
    assert_eq!(cfg.players, names(&["Ann", "Ben"]));
    assert_eq!(cfg.max_bet, Money::from_dollars(100));
    assert_eq!(cfg.ante, Money::from_dollars(10));
    assert_eq!(cfg.bankroll, Money::from_dollars(10));
    assert_eq!(cfg.seed, Some(7));
}

#[test]
fn config_file_rejects_unknown_fields() {
    let text = r#"{ "players": ["A"], "rounds": 3 }"#;
    assert!(ConfigFile::from_json(text).is_err());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = ConfigFile::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

// -----------------------------
// CLI
// -----------------------------

#[test]
fn cli_parses_flags_into_config() {
    let args = Args::try_parse_from([
        "joker_round_cli",
        "--players",
        "Alice",
        "Bob",
        "--max-bet",
        "40",
        "--bankroll",
        "75.5",
        "--seed",
        "1234",
        "--bets",
        "10,0",
        "-vv",
    ])
    .unwrap();

    assert_eq!(args.verbose, 2);
    assert_eq!(
        args.bets,
        Some(vec![Money::from_dollars(10), Money::ZERO])
    );

    let cfg = args.game_config().unwrap();
    assert_eq!(cfg.players, names(&["Alice", "Bob"]));
    assert_eq!(cfg.max_bet, Money::from_dollars(40));
    assert_eq!(cfg.ante, Money::from_dollars(4));
    assert_eq!(cfg.bankroll, Money::from_cents(7_550));
    assert_eq!(cfg.seed, Some(1234));
}

#[test]
fn cli_requires_players_without_config() {
    assert!(Args::try_parse_from(["joker_round_cli"]).is_err());
    let negative = ["joker_round_cli", "--players", "A", "--max-bet", "-3"];
    assert!(Args::try_parse_from(negative).is_err());
    assert!(Args::try_parse_from([
        "joker_round_cli",
        "--players",
        "A",
        "--bets",
        "5",
        "--auto-bet",
        "5"
    ])
    .is_err());
}

#[test]
fn scripted_bets_above_max_are_rejected_before_the_round() {
    let args = Args::try_parse_from([
        "joker_round_cli",
        "--players",
        "Alice",
        "Bob",
        "--seed",
        "1234",
        "--bets",
        "10,60",
    ])
    .unwrap();
    let cfg = args.game_config().unwrap();

    match args.bet_source(cfg.max_bet) {
        Err(ConfigError::ScriptedBetAboveMax { bet, max_bet }) => {
            assert_eq!(bet, Money::from_dollars(60));
            assert_eq!(max_bet, Money::from_dollars(50));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("bet above max bet must be rejected"),
    }

    // Ровно лимит – допустимо.
    let args = Args::try_parse_from([
        "joker_round_cli",
        "--players",
        "Alice",
        "--bets",
        "50,0",
    ])
    .unwrap();
    assert!(args.bet_source(Money::from_dollars(50)).is_ok());
}

#[test]
fn verbosity_levels() {
    assert_eq!(level_for_verbosity(0), log::LevelFilter::Warn);
    assert_eq!(level_for_verbosity(1), log::LevelFilter::Info);
    assert_eq!(level_for_verbosity(5), log::LevelFilter::Debug);
}

// -----------------------------
// Консольный ввод ставки
// -----------------------------

#[test]
fn bet_input_validation() {
    let max = Money::from_dollars(50);
    let bankroll = Money::from_dollars(30);

    assert_eq!(validate_bet("", max, bankroll), Ok(Money::ZERO));
    assert_eq!(validate_bet("  ", max, bankroll), Ok(Money::ZERO));
    assert_eq!(
        validate_bet("12.5", max, bankroll),
        Ok(Money::from_cents(1_250))
    );
    assert_eq!(validate_bet("30", max, bankroll), Ok(bankroll));

    assert_eq!(
        validate_bet("abc", max, bankroll),
        Err("Please enter a number.".to_string())
    );
    assert_eq!(
        validate_bet("-1", max, bankroll),
        Err("Bet cannot be negative.".to_string())
    );
    assert_eq!(
        validate_bet("51", max, bankroll),
        Err("Bet cannot exceed $50.00.".to_string())
    );
    assert_eq!(
        validate_bet("31", max, bankroll),
        Err("Insufficient funds. Available: $30.00".to_string())
    );
}

// -----------------------------
// Рассказчик
// -----------------------------

#[test]
fn narrator_tells_the_round() {
    let mut ps = vec![Player::new("Alice", Money::from_dollars(200))];
    let deck = joker_ante_engine::domain::Deck::from_cards(
        ["As", "Ah", "Ad", "Ac"].iter().map(|c| c.parse().unwrap()).collect(),
    );
    let mut narrator = ConsoleNarrator::new(Vec::new());
    play_round_with_deck(
        &mut ps,
        &RoundRules::new(Money::from_dollars(50), Money::from_dollars(5)),
        deck,
        &mut ScriptedBets::new([Money::from_dollars(10)]),
        &mut narrator,
    )
    .unwrap();

    let text = String::from_utf8(narrator.into_inner()).unwrap();
    assert!(text.contains("Alice pays ante $5.00. Bankroll now $195.00"));
    assert!(text.contains("First card for Alice: A♠"));
    assert!(text.contains("Alice bets $10.00. Bankroll now $185.00."));
    assert!(text.contains("Remaining cards: A♥, A♦, A♣"));
    assert!(text.contains("Total score: 44"));
    assert!(text.contains("Win! Score 44 pays $20.00 (2x bet)."));
    assert!(text.contains("Alice bankroll: $205.00"));
}
