//! Validation outcomes of a quote computation.
//!
//! Violations are returned as values and collected in a single pass, so a
//! caller is able to report all of them at once (missing dates alongside an
//! empty room selection, for example).

use std::{fmt, slice, vec};

use derive_more::{Display, Error, From};

use crate::domain::room;

/// Requested quantity of a room [`Type`] exceeds its available units.
///
/// [`Type`]: room::Type
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display(
    "requested {requested} unit(s) of `{room}`, but only {available} \
     available"
)]
pub struct OverbookingError {
    /// [`room::Name`] of the requested room [`Type`].
    ///
    /// [`Type`]: room::Type
    pub room: room::Name,

    /// Requested number of units.
    pub requested: u32,

    /// Number of units available at the moment of validation.
    pub available: u32,
}

/// Provided dates don't form a valid stay or package window.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum InvalidDateRange {
    /// Check-in or check-out date is not provided.
    #[display("check-in and check-out dates are required")]
    MissingDates,

    /// Check-out date is not after the check-in date.
    #[display("check-out date must be after the check-in date")]
    CheckOutNotAfterCheckIn,

    /// Start date of a package is not provided.
    #[display("package start date is required")]
    MissingStartDate,
}

/// Nothing is selected to be booked.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum EmptySelection {
    /// No rooms are selected for a stay.
    #[display("at least one room must be selected")]
    NoRooms,

    /// No package is chosen.
    #[display("a package must be chosen")]
    NoPackage,
}

/// Computed amount exceeds the range [`Money`] is able to represent.
///
/// [`Money`]: common::Money
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("quote total exceeds the maximum supported amount")]
pub struct AmountOverflow;

/// Single reason a selection cannot be quoted.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum Violation {
    /// Requested room quantity exceeds the available inventory.
    Overbooking(OverbookingError),

    /// Dates are missing or out of order.
    InvalidDateRange(InvalidDateRange),

    /// Nothing is selected.
    EmptySelection(EmptySelection),

    /// Prices and quantities add up to an unrepresentable amount.
    AmountOverflow(AmountOverflow),
}

impl Violation {
    /// Returns a stable machine-readable code of this [`Violation`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Overbooking(_) => "OVERBOOKING",
            Self::InvalidDateRange(_) => "INVALID_DATE_RANGE",
            Self::EmptySelection(_) => "EMPTY_SELECTION",
            Self::AmountOverflow(_) => "AMOUNT_OVERFLOW",
        }
    }
}

/// Non-empty collection of [`Violation`]s found in a single validation pass.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub struct Violations(#[error(not(source))] Vec<Violation>);

impl Violations {
    /// Collects the provided [`Violation`]s, returning [`None`] if there are
    /// none.
    #[must_use]
    pub fn collect(violations: Vec<Violation>) -> Option<Self> {
        (!violations.is_empty()).then_some(Self(violations))
    }

    /// Returns the collected [`Violation`]s.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Iterates over the collected [`Violation`]s.
    pub fn iter(&self) -> slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Indicates whether the provided [`Violation`] has been collected.
    #[must_use]
    pub fn contains(&self, violation: &Violation) -> bool {
        self.0.contains(violation)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, v) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

impl From<AmountOverflow> for Violations {
    fn from(e: AmountOverflow) -> Self {
        Violation::from(e).into()
    }
}

impl Extend<Violation> for Violations {
    fn extend<T: IntoIterator<Item = Violation>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Soft condition surfaced alongside a successful quote.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Warning {
    /// Duration label of a package doesn't contain a number of days, so the
    /// default duration is assumed.
    #[display(
        "cannot extract a number of days from `{label}`, assuming {assumed} \
         day(s)"
    )]
    UnparseableDuration {
        /// Label that failed to be parsed.
        label: String,

        /// Number of days assumed instead.
        assumed: u32,
    },
}
