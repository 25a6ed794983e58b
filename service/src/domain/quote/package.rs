//! Quoting of package-based bookings.

use common::{Date, Money};
use tracing as log;

use crate::domain::{amenity, Package};

use super::{
    amenities,
    cost::compute_package_costs,
    duration::{
        package_end_date, package_nights, parse_duration_days,
        DEFAULT_DURATION_DAYS,
    },
    payment::{amount_due_now, compute_schedule},
    violation::{EmptySelection, InvalidDateRange},
    EndDate, PackageCostBreakdown, PaymentSchedule, PaymentTerm, Policy,
    Pricing, StartDate, Violation, Violations, Warning,
};

/// Selection of a package-based booking to be quoted.
#[derive(Clone, Debug)]
pub struct PackageSelection {
    /// Chosen [`Package`].
    pub package: Option<Package>,

    /// First day of the [`Package`].
    pub start_date: Option<StartDate>,

    /// Number of guests the [`Package`] is booked for.
    pub guests: u32,

    /// Selected add-ons.
    pub amenities: Vec<amenity::Selection>,

    /// Selected [`PaymentTerm`].
    pub term: PaymentTerm,
}

/// Quote of a [`PackageSelection`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageQuote {
    /// Itemized cost.
    pub breakdown: PackageCostBreakdown,

    /// First day of the [`Package`].
    pub start_date: StartDate,

    /// Last day of the [`Package`], inclusive.
    pub end_date: EndDate,

    /// Number of days the [`Package`] spans.
    pub days: u32,

    /// Duration label issue, if the number of days had to be assumed.
    pub warning: Option<Warning>,

    /// Installments of the total, if there is anything to pay.
    pub schedule: Option<PaymentSchedule>,

    /// Selected [`PaymentTerm`].
    pub term: PaymentTerm,

    /// Amount to be paid now under the selected [`PaymentTerm`].
    pub amount_due_now: Money,
}

impl PackageSelection {
    /// Checks this [`PackageSelection`] for completeness.
    ///
    /// # Errors
    ///
    /// With all the [`Violations`] found, if any.
    pub fn validate(&self) -> Result<(), Violations> {
        self.checked().map(|_| ())
    }

    /// Quotes this [`PackageSelection`] as of `today`.
    ///
    /// # Errors
    ///
    /// With all the [`Violations`] found, if this [`PackageSelection`] is
    /// not valid, or with a [`Violation::AmountOverflow`] if its total is not
    /// representable.
    pub fn quote(
        &self,
        today: Date,
        pricing: &Pricing,
        policy: &Policy,
    ) -> Result<PackageQuote, Violations> {
        let (package, start_date) = self.checked()?;

        let label = package.duration.as_ref();
        let (duration_days, warning) = match parse_duration_days(label) {
            Some(days) => (days, None),
            None => {
                log::debug!(label, "cannot parse package duration");
                (
                    DEFAULT_DURATION_DAYS,
                    Some(Warning::UnparseableDuration {
                        label: label.to_owned(),
                        assumed: DEFAULT_DURATION_DAYS,
                    }),
                )
            }
        };
        let end_date = package_end_date(start_date, duration_days);
        let days = package_nights(Some(start_date), Some(end_date), label);

        let breakdown = compute_package_costs(
            package,
            self.guests,
            amenities::total_for(&self.amenities)?,
            pricing,
        )?;
        let schedule =
            compute_schedule(breakdown.total, Some(start_date), today, policy);
        let amount_due_now = schedule.as_ref().map_or(breakdown.total, |s| {
            amount_due_now(s, self.term, breakdown.total)
        });

        log::debug!(
            package = %package.id,
            days,
            total = %breakdown.total,
            due_now = %amount_due_now,
            "package quoted"
        );

        Ok(PackageQuote {
            breakdown,
            start_date,
            end_date,
            days,
            warning,
            schedule,
            term: self.term,
            amount_due_now,
        })
    }

    /// Returns the chosen [`Package`] along with its start date, if both are
    /// provided.
    fn checked(&self) -> Result<(&Package, StartDate), Violations> {
        match (&self.package, self.start_date) {
            (Some(package), Some(start)) => Ok((package, start)),
            (None, Some(_)) => {
                Err(Violation::from(EmptySelection::NoPackage).into())
            }
            (Some(_), None) => {
                Err(Violation::from(InvalidDateRange::MissingStartDate).into())
            }
            (None, None) => {
                let mut violations =
                    Violations::from(Violation::from(EmptySelection::NoPackage));
                violations.extend([InvalidDateRange::MissingStartDate.into()]);
                Err(violations)
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Date, Money};

    use crate::domain::{
        amenity, package,
        quote::{
            violation::{AmountOverflow, EmptySelection, InvalidDateRange},
            PaymentTerm, Policy, Pricing, Violation, Warning,
        },
        Package,
    };

    use super::PackageSelection;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn package(price: u32, duration: &str) -> Package {
        Package {
            id: package::Id::new(),
            name: package::Name::new("Serengeti Explorer").unwrap(),
            price: Money::whole(price),
            duration: duration.into(),
        }
    }

    fn selection(today: Date, package: Package) -> PackageSelection {
        PackageSelection {
            package: Some(package),
            start_date: Some(today.add_days(60).coerce()),
            guests: 2,
            amenities: vec![amenity::Selection {
                id: amenity::Id::new(),
                unit_price: Money::whole(75),
                quantity: 2,
            }],
            term: PaymentTerm::Deposit,
        }
    }

    #[test]
    fn quotes_package_end_to_end() {
        let today = date("2026-10-16");
        let tour = selection(today, package(2000, "5 Days / 4 Nights"));

        let quote = tour
            .quote(today, &Pricing::default(), &Policy::default())
            .unwrap();

        assert_eq!(quote.breakdown.base_price, Money::whole(4000));
        assert_eq!(quote.breakdown.amenities_total, Money::whole(150));
        assert_eq!(quote.breakdown.subtotal, Money::whole(4150));
        assert_eq!(quote.breakdown.service_fee, Money::whole(415));
        assert_eq!(quote.breakdown.taxes, Money::whole(498));
        assert_eq!(quote.breakdown.total, Money::whole(5063));

        assert_eq!(quote.days, 5);
        assert_eq!(quote.end_date.coerce::<()>(), today.add_days(64));
        assert_eq!(quote.warning, None);

        let schedule = quote.schedule.unwrap();
        assert_eq!(
            schedule.deposit_amount.checked_add(schedule.balance_amount),
            Some(Money::whole(5063)),
        );
        assert_eq!(schedule.balance_due_date.coerce::<()>(), today.add_days(30));
        assert_eq!(quote.amount_due_now, schedule.deposit_amount);
    }

    #[test]
    fn assumes_single_day_for_unparseable_duration() {
        let today = date("2026-10-16");
        let tour = selection(today, package(500, "Full Day Tour"));

        let quote = tour
            .quote(today, &Pricing::default(), &Policy::default())
            .unwrap();

        assert_eq!(quote.days, 1);
        assert_eq!(quote.end_date.coerce::<()>(), today.add_days(60));
        assert_eq!(
            quote.warning,
            Some(Warning::UnparseableDuration {
                label: "Full Day Tour".into(),
                assumed: 1,
            }),
        );
    }

    #[test]
    fn charges_total_now_under_full_term() {
        let today = date("2026-10-16");
        let tour = PackageSelection {
            term: PaymentTerm::Full,
            ..selection(today, package(2000, "7 Days / 6 Nights"))
        };

        let quote = tour
            .quote(today, &Pricing::default(), &Policy::default())
            .unwrap();

        assert_eq!(quote.days, 7);
        assert_eq!(quote.amount_due_now, Money::whole(5063));
    }

    #[test]
    fn collapses_balance_for_imminent_start() {
        let today = date("2026-10-16");
        let tour = PackageSelection {
            start_date: Some(today.add_days(5).coerce()),
            ..selection(today, package(2000, "3 Days"))
        };

        let schedule = tour
            .quote(today, &Pricing::default(), &Policy::default())
            .unwrap()
            .schedule
            .unwrap();

        assert!(schedule.balance_due_now);
        assert_eq!(schedule.balance_due_date.coerce::<()>(), today);
    }

    #[test]
    fn rejects_unrepresentable_total() {
        let today = date("2026-10-16");
        let tour = PackageSelection {
            amenities: vec![amenity::Selection {
                id: amenity::Id::new(),
                unit_price: Money::from_str("79228162514264337593543950335")
                    .unwrap(),
                quantity: 1,
            }],
            ..selection(today, package(2000, "5 Days"))
        };

        let violations = tour
            .quote(today, &Pricing::default(), &Policy::default())
            .unwrap_err();

        assert_eq!(violations.as_slice(), [Violation::from(AmountOverflow)]);
    }

    #[test]
    fn reports_all_violations_at_once() {
        let tour = PackageSelection {
            package: None,
            start_date: None,
            guests: 2,
            amenities: vec![],
            term: PaymentTerm::Deposit,
        };

        let violations = tour.validate().unwrap_err();

        assert_eq!(
            violations.as_slice(),
            [
                Violation::from(EmptySelection::NoPackage),
                Violation::from(InvalidDateRange::MissingStartDate),
            ],
        );
    }

    #[test]
    fn requires_start_date() {
        let today = date("2026-10-16");
        let tour = PackageSelection {
            start_date: None,
            ..selection(today, package(2000, "5 Days"))
        };

        let violations = tour
            .quote(today, &Pricing::default(), &Policy::default())
            .unwrap_err();

        assert_eq!(
            violations.as_slice(),
            [Violation::from(InvalidDateRange::MissingStartDate)],
        );
    }
}
