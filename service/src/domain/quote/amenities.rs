//! Aggregation of optional add-on selections.

use common::Money;

use crate::domain::{amenity, quote::violation::AmountOverflow};

/// Sums line totals of the provided add-on [`Selection`]s.
///
/// # Errors
///
/// If any line total or their sum is not representable as [`Money`].
///
/// [`Selection`]: amenity::Selection
pub fn total_for(
    selections: &[amenity::Selection],
) -> Result<Money, AmountOverflow> {
    selections
        .iter()
        .map(amenity::Selection::line_total)
        .try_fold(Money::ZERO, |sum, line| sum.checked_add(line?))
        .ok_or(AmountOverflow)
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use crate::domain::{amenity, quote::violation::AmountOverflow};

    use super::total_for;

    fn selection(unit_price: &str, quantity: u32) -> amenity::Selection {
        amenity::Selection {
            id: amenity::Id::new(),
            unit_price: Money::from_str(unit_price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn sums_line_totals() {
        let selections = [
            selection("25", 2),
            selection("49.99", 1),
            selection("0.01", 1),
            selection("500", 0),
        ];

        assert_eq!(total_for(&selections), Ok(Money::whole(100)));
    }

    #[test]
    fn totals_nothing_for_empty_selection() {
        assert_eq!(total_for(&[]), Ok(Money::ZERO));
    }

    #[test]
    fn reports_unrepresentable_total() {
        let huge = "79228162514264337593543950335";

        assert_eq!(total_for(&[selection(huge, 2)]), Err(AmountOverflow));
        assert_eq!(
            total_for(&[selection(huge, 1), selection("0.5", 2)]),
            Err(AmountOverflow),
        );
        assert!(total_for(&[selection(huge, 1)]).is_ok());
    }
}
