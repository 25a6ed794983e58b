//! Itemized cost calculation.

pub mod package;
pub mod stay;

use common::{Money, Percent};

use super::violation::AmountOverflow;

pub use self::{
    package::{compute_package_costs, PackageCostBreakdown},
    stay::{
        compute_stay_costs, room_line_cost, LineCost, LineItem, RoomSelection,
        StayCostBreakdown,
    },
};

/// Service fee charged on top of a subtotal.
pub const SERVICE_FEE_RATE: Percent = Percent::whole(10);

/// Tax charged on a subtotal of a stay-based booking.
pub const STAY_TAX_RATE: Percent = Percent::whole(15);

/// Tax charged on a subtotal of a package-based booking.
///
/// Differs from the [`STAY_TAX_RATE`] intentionally.
pub const PACKAGE_TAX_RATE: Percent = Percent::whole(12);

/// Rates applied to subtotals of quotes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pricing {
    /// Service fee charged on top of any subtotal.
    pub service_fee: Percent,

    /// Tax charged on a subtotal of a stay-based booking.
    pub stay_tax: Percent,

    /// Tax charged on a subtotal of a package-based booking.
    pub package_tax: Percent,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            service_fee: SERVICE_FEE_RATE,
            stay_tax: STAY_TAX_RATE,
            package_tax: PACKAGE_TAX_RATE,
        }
    }
}

/// Charges derived from a subtotal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Charges {
    /// Amount the charges are calculated on.
    pub subtotal: Money,

    /// Service fee.
    pub service_fee: Money,

    /// Taxes.
    pub taxes: Money,

    /// Grand total: the subtotal with the service fee and taxes.
    pub total: Money,
}

impl Charges {
    /// Applies the provided service fee and tax rates to the `subtotal`.
    ///
    /// # Errors
    ///
    /// If the grand total is not representable as [`Money`].
    pub fn apply(
        subtotal: Money,
        service_fee: Percent,
        tax: Percent,
    ) -> Result<Self, AmountOverflow> {
        let service_fee = service_fee.of(subtotal);
        let taxes = tax.of(subtotal);
        let total = Money::checked_sum([subtotal, service_fee, taxes])
            .ok_or(AmountOverflow)?;
        Ok(Self {
            subtotal,
            service_fee,
            taxes,
            total,
        })
    }

    /// Passes the `subtotal` through without any service fee or taxes.
    #[must_use]
    pub fn exempt(subtotal: Money) -> Self {
        Self {
            subtotal,
            service_fee: Money::ZERO,
            taxes: Money::ZERO,
            total: subtotal,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Money, Percent};

    use crate::domain::quote::violation::AmountOverflow;

    use super::{Charges, Pricing};

    #[test]
    fn applies_rates_to_subtotal() {
        let charges = Charges::apply(
            Money::whole(1200),
            Percent::whole(10),
            Percent::whole(15),
        )
        .unwrap();

        assert_eq!(charges.subtotal, Money::whole(1200));
        assert_eq!(charges.service_fee, Money::whole(120));
        assert_eq!(charges.taxes, Money::whole(180));
        assert_eq!(charges.total, Money::whole(1500));
    }

    #[test]
    fn reports_unrepresentable_total() {
        let max = Money::from_str("79228162514264337593543950335").unwrap();

        assert_eq!(
            Charges::apply(max, Percent::whole(10), Percent::whole(15)),
            Err(AmountOverflow),
        );
        assert_eq!(
            Charges::apply(max, Percent::ZERO, Percent::ZERO).map(|c| c.total),
            Ok(max),
        );
    }

    #[test]
    fn exempts_subtotal() {
        let charges = Charges::exempt(Money::whole(150));

        assert_eq!(charges.service_fee, Money::ZERO);
        assert_eq!(charges.taxes, Money::ZERO);
        assert_eq!(charges.total, Money::whole(150));
    }

    #[test]
    fn defaults_to_fixed_rates() {
        let pricing = Pricing::default();

        assert_eq!(pricing.service_fee, Percent::whole(10));
        assert_eq!(pricing.stay_tax, Percent::whole(15));
        assert_eq!(pricing.package_tax, Percent::whole(12));
    }
}
