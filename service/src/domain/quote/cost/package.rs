//! Cost calculation of package-based bookings.

use common::Money;

use crate::domain::{quote::violation::AmountOverflow, Package};

use super::{Charges, Pricing};

/// Itemized cost of a package-based booking.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PackageCostBreakdown {
    /// Price of the [`Package`] for all the guests.
    pub base_price: Money,

    /// Total of the selected add-ons.
    pub amenities_total: Money,

    /// Base price with the add-ons.
    pub subtotal: Money,

    /// Service fee charged on the subtotal.
    pub service_fee: Money,

    /// Taxes charged on the subtotal.
    pub taxes: Money,

    /// Grand total.
    pub total: Money,
}

/// Calculates the [`PackageCostBreakdown`] of the provided [`Package`] booked
/// for the provided number of `guests`.
///
/// # Errors
///
/// If any of the computed amounts is not representable as [`Money`].
pub fn compute_package_costs(
    package: &Package,
    guests: u32,
    amenities_total: Money,
    pricing: &Pricing,
) -> Result<PackageCostBreakdown, AmountOverflow> {
    let base_price = package.price.checked_mul(guests).ok_or(AmountOverflow)?;
    let Charges {
        subtotal,
        service_fee,
        taxes,
        total,
    } = Charges::apply(
        base_price
            .checked_add(amenities_total)
            .ok_or(AmountOverflow)?,
        pricing.service_fee,
        pricing.package_tax,
    )?;

    Ok(PackageCostBreakdown {
        base_price,
        amenities_total,
        subtotal,
        service_fee,
        taxes,
        total,
    })
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Money, Percent};

    use crate::domain::{
        package,
        quote::{cost::Pricing, violation::AmountOverflow},
        Package,
    };

    use super::compute_package_costs;

    fn package(price: u32) -> Package {
        priced_package(Money::whole(price))
    }

    fn priced_package(price: Money) -> Package {
        Package {
            id: package::Id::new(),
            name: package::Name::new("Great Migration").unwrap(),
            price,
            duration: "5 Days / 4 Nights".into(),
        }
    }

    #[test]
    fn computes_scenario_with_amenities() {
        let breakdown = compute_package_costs(
            &package(2000),
            2,
            Money::whole(150),
            &Pricing::default(),
        )
        .unwrap();

        assert_eq!(breakdown.base_price, Money::whole(4000));
        assert_eq!(breakdown.amenities_total, Money::whole(150));
        assert_eq!(breakdown.subtotal, Money::whole(4150));
        assert_eq!(breakdown.service_fee, Money::whole(415));
        assert_eq!(breakdown.taxes, Money::whole(498));
        assert_eq!(breakdown.total, Money::whole(5063));
    }

    #[test]
    fn taxes_packages_differently_from_stays() {
        let pricing = Pricing::default();

        let breakdown =
            compute_package_costs(&package(999), 3, Money::whole(1), &pricing)
                .unwrap();

        assert_eq!(breakdown.taxes, Percent::whole(12).of(breakdown.subtotal));
        assert_ne!(breakdown.taxes, Percent::whole(15).of(breakdown.subtotal));
        assert_eq!(
            breakdown.service_fee,
            Percent::whole(10).of(breakdown.subtotal),
        );
    }

    #[test]
    fn prices_zero_guests_as_amenities_only() {
        let breakdown = compute_package_costs(
            &package(2000),
            0,
            Money::whole(100),
            &Pricing::default(),
        )
        .unwrap();

        assert_eq!(breakdown.base_price, Money::ZERO);
        assert_eq!(breakdown.subtotal, Money::whole(100));
        assert_eq!(breakdown.total, Money::whole(122));
    }

    #[test]
    fn reports_unrepresentable_costs() {
        let lavish = priced_package(
            Money::from_str("79228162514264337593543950335").unwrap(),
        );
        let pricing = Pricing::default();

        assert_eq!(
            compute_package_costs(&lavish, 2, Money::ZERO, &pricing),
            Err(AmountOverflow),
        );
        assert_eq!(
            compute_package_costs(&lavish, 1, Money::ZERO, &pricing),
            Err(AmountOverflow),
        );
        assert_eq!(
            compute_package_costs(&lavish, 0, Money::whole(1), &pricing)
                .map(|b| b.total),
            Ok(Money::from_str("1.22").unwrap()),
        );
    }
}
