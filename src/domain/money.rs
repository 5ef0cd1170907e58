use core::fmt;
use core::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Денежная сумма в центах. Обёртка над u64: отрицательный банкролл
/// просто невозможно выразить, а копейки не «плывут», как у f64.
///
/// В JSON пишется строкой `"12.50"`; читается из строки или числа долларов.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Money(dollars * 100)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Вычитание без ухода в минус: `None`, если не хватает.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Умножение на коэффициент выплаты (2x, 3x). Не паникует на переполнении.
    pub fn times(self, factor: u64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    /// `pct` процентов от суммы, с округлением вниз до цента.
    pub fn percent(self, pct: u64) -> Money {
        Money(self.0.saturating_mul(pct) / 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl fmt::Display for Money {
    /// Формат вида `$12.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Парсинг строк вида "50", "12.5", "$7.25".
impl FromStr for Money {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);
        if raw.is_empty() {
            return Err("Amount must not be empty".into());
        }
        if raw.starts_with('-') {
            return Err(format!("Amount cannot be negative: {s}"));
        }

        let (whole, frac) = match raw.split_once('.') {
            Some((w, f)) => (w, f),
            None => (raw, ""),
        };
        if frac.len() > 2 {
            return Err(format!("At most two decimal places allowed: {s}"));
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) || (whole.is_empty() && frac.is_empty()) {
            return Err(format!("Not a number: {s}"));
        }

        let dollars: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| format!("Amount too large: {s}"))?
        };
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => {
                frac.parse::<u64>()
                    .map_err(|_| format!("Not a number: {s}"))?
                    * 10
            }
            _ => frac.parse().map_err(|_| format!("Not a number: {s}"))?,
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(|| format!("Amount too large: {s}"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Dollars(u64),
    Decimal(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match MoneyRepr::deserialize(deserializer)? {
            MoneyRepr::Dollars(d) => d
                .checked_mul(100)
                .map(Money)
                .ok_or_else(|| D::Error::custom(format!("Amount too large: {d}"))),
            MoneyRepr::Decimal(v) => v.to_string().parse().map_err(D::Error::custom),
            MoneyRepr::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}
