//! Cost calculation of stay-based bookings.
//!
//! Rooms are priced per guest per night: every guest pays the full nightly
//! rate of the room they stay in, so there is no separate surcharge for
//! guests exceeding a room capacity.

use common::Money;

use crate::domain::{quote::violation::AmountOverflow, room};

use super::{Charges, Pricing};

/// Requested units of a room [`Type`] with the number of guests staying in
/// them.
///
/// [`Type`]: room::Type
#[derive(Clone, Copy, Debug)]
pub struct RoomSelection<'t> {
    /// Room [`Type`] the units are requested of.
    ///
    /// [`Type`]: room::Type
    pub room_type: &'t room::Type,

    /// Number of requested units.
    pub quantity: u32,

    /// Number of guests staying in the requested units.
    pub guests: u32,
}

impl RoomSelection<'_> {
    /// Indicates whether this [`RoomSelection`] contributes to the cost, i.e.
    /// requests at least one unit.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.quantity > 0
    }
}

/// Cost of a single [`RoomSelection`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LineCost {
    /// Cost of the guests staying in the selected units.
    pub base_rate: Money,

    /// Surcharge for guests exceeding capacity.
    ///
    /// Always zero under per-guest pricing, kept for line-item display.
    pub extra_guest_fee: Money,

    /// Total cost of the [`RoomSelection`].
    pub total: Money,
}

/// Line item of a [`StayCostBreakdown`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineItem {
    /// Name of the selected room [`Type`].
    ///
    /// [`Type`]: room::Type
    pub room: room::Name,

    /// Number of selected units.
    pub quantity: u32,

    /// Number of guests staying in the selected units.
    pub guests: u32,

    /// Cost of the selected units.
    pub cost: LineCost,

    /// Indicator whether guests exceed the advertised capacity of the
    /// selected units (and so are accommodated at the full rate).
    pub over_capacity: bool,
}

/// Itemized cost of a stay-based booking.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StayCostBreakdown {
    /// Sum of all room line totals.
    pub base_rate: Money,

    /// Sum of all extra-guest surcharges.
    pub extra_guest_fee: Money,

    /// Total of the selected add-ons.
    pub amenities_total: Money,

    /// Room cost with the add-ons.
    pub subtotal: Money,

    /// Service fee charged on the subtotal.
    pub service_fee: Money,

    /// Taxes charged on the subtotal.
    pub taxes: Money,

    /// Grand total.
    pub total: Money,

    /// Number of nights the rooms are priced for.
    pub nights: u32,

    /// [`LineItem`]s of every active [`RoomSelection`].
    pub line_items: Vec<LineItem>,
}

/// Calculates the cost of the provided [`RoomSelection`] for the provided
/// number of `nights`.
///
/// # Errors
///
/// If the cost is not representable as [`Money`].
pub fn room_line_cost(
    selection: &RoomSelection<'_>,
    nights: u32,
) -> Result<LineCost, AmountOverflow> {
    if !selection.is_active() {
        return Ok(LineCost::default());
    }

    let base_rate = selection
        .room_type
        .price_per_night
        .checked_mul(selection.guests)
        .and_then(|per_night| per_night.checked_mul(nights))
        .ok_or(AmountOverflow)?;
    Ok(LineCost {
        base_rate,
        extra_guest_fee: Money::ZERO,
        total: base_rate,
    })
}

/// Calculates the [`StayCostBreakdown`] of the provided [`RoomSelection`]s
/// for the provided number of `nights`.
///
/// If there are no `nights` or no active [`RoomSelection`]s, only the
/// `amenities_total` is charged, without any service fee or taxes.
///
/// # Errors
///
/// If any of the computed amounts is not representable as [`Money`].
pub fn compute_stay_costs(
    selections: &[RoomSelection<'_>],
    nights: u32,
    amenities_total: Money,
    pricing: &Pricing,
) -> Result<StayCostBreakdown, AmountOverflow> {
    let line_items = selections
        .iter()
        .filter(|s| s.is_active())
        .map(|s| {
            Ok(LineItem {
                room: s.room_type.name.clone(),
                quantity: s.quantity,
                guests: s.guests,
                cost: room_line_cost(s, nights)?,
                over_capacity: s
                    .room_type
                    .is_over_capacity(s.quantity, s.guests),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if nights == 0 || line_items.is_empty() {
        let charges = Charges::exempt(amenities_total);
        return Ok(StayCostBreakdown {
            amenities_total,
            subtotal: charges.subtotal,
            total: charges.total,
            nights,
            line_items,
            ..StayCostBreakdown::default()
        });
    }

    let base_rate = Money::checked_sum(line_items.iter().map(|i| i.cost.total))
        .ok_or(AmountOverflow)?;
    let extra_guest_fee =
        Money::checked_sum(line_items.iter().map(|i| i.cost.extra_guest_fee))
            .ok_or(AmountOverflow)?;
    let Charges {
        subtotal,
        service_fee,
        taxes,
        total,
    } = Charges::apply(
        base_rate
            .checked_add(amenities_total)
            .ok_or(AmountOverflow)?,
        pricing.service_fee,
        pricing.stay_tax,
    )?;

    Ok(StayCostBreakdown {
        base_rate,
        extra_guest_fee,
        amenities_total,
        subtotal,
        service_fee,
        taxes,
        total,
        nights,
        line_items,
    })
}
