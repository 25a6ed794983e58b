//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

use crate::Money;

/// Floating-point percentage in the `[0, 100]` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "Decimal", into = "Decimal")
)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Whole hundred [`Percent`].
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Creates a new whole [`Percent`] in `const` context.
    ///
    /// # Panics
    ///
    /// If the provided `val` is greater than `100`.
    #[expect(clippy::cast_lossless, reason = "`From` is not `const`")]
    #[must_use]
    pub const fn whole(val: u8) -> Self {
        assert!(val <= 100, "`Percent` cannot exceed 100");
        Self(Decimal::from_parts(val as u32, 0, 0, false, 0))
    }

    /// Returns the value of this [`Percent`] in the `[0, 100]` range.
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Returns the [`Percent`] completing this one to [`Percent::HUNDRED`].
    #[must_use]
    pub fn complement(self) -> Self {
        Self(Decimal::ONE_HUNDRED - self.0)
    }

    /// Calculates this [`Percent`] of the provided [`Money`].
    ///
    /// The result never exceeds the provided [`Money`].
    #[must_use]
    pub fn of(self, money: Money) -> Money {
        let amount = money.amount();
        let part = amount
            .checked_mul(self.0)
            .map(|a| a / Decimal::ONE_HUNDRED)
            .or_else(|| (amount / Decimal::ONE_HUNDRED).checked_mul(self.0))
            .unwrap_or(amount);
        Money::new(part.min(amount)).unwrap_or(Money::ZERO)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("invalid percent value")
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Floating-point percentage.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Percent = super::Percent;

    impl Percent {
        fn to_output<S: ScalarValue>(m: &Percent) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Percent` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Percent` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::Money;

    use super::Percent;

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("12").unwrap(), Percent::whole(12));
        assert_eq!(Percent::from_str("100").unwrap(), Percent::HUNDRED);
        assert!(Percent::from_str("12.5").is_ok());

        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("100.01").is_err());
        assert!(Percent::from_str("ten").is_err());
    }

    #[test]
    fn of() {
        assert_eq!(Percent::whole(10).of(Money::whole(1200)), Money::whole(120));
        assert_eq!(Percent::whole(12).of(Money::whole(4150)), Money::whole(498));
        assert_eq!(Percent::ZERO.of(Money::whole(4150)), Money::ZERO);
        assert_eq!(
            Percent::whole(30).of(Money::from_str("0.10").unwrap()),
            Money::from_str("0.03").unwrap(),
        );
    }

    #[test]
    fn of_largest_amount() {
        let max = Money::new(Decimal::MAX).unwrap();

        assert_eq!(Percent::HUNDRED.of(max), max);
        assert_eq!(Percent::ZERO.of(max), Money::ZERO);

        let deposit = Percent::whole(30).of(max);
        assert!(deposit < max);
        assert!(deposit > Percent::whole(29).of(max));
    }

    #[test]
    fn complement() {
        assert_eq!(Percent::whole(30).complement(), Percent::whole(70));
        assert_eq!(Percent::ZERO.complement(), Percent::HUNDRED);
    }
}
