use crate::domain::card::Card;

/// Порог очков, начиная с которого рука выигрывает.
pub const WINNING_SCORE: u32 = 32;

/// Сумма `value()` по всем не-джокерам руки.
/// Джокеры в сумму не входят — у них своё правило выплаты.
pub fn score_hand(hand: &[Card]) -> u32 {
    hand.iter()
        .filter(|c| !c.is_joker())
        .map(Card::value)
        .sum()
}

pub fn hand_has_joker(hand: &[Card]) -> bool {
    hand.iter().any(Card::is_joker)
}
