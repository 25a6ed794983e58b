//! Quoting of stay-based bookings.

use common::{Date, Money};
use tracing as log;

use crate::domain::{amenity, room};

use super::{
    amenities,
    cost::{compute_stay_costs, RoomSelection},
    duration::nights_for_stay,
    payment::{amount_due_now, compute_schedule},
    violation::{EmptySelection, InvalidDateRange},
    CheckInDate, CheckOutDate, Inventory, PaymentSchedule, PaymentTerm,
    Policy, Pricing, StayCostBreakdown, Violation, Violations,
};

/// Requested units of a room type, identified by its [`room::Name`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomRequest {
    /// [`room::Name`] of the requested room type.
    pub room: room::Name,

    /// Number of requested units.
    pub quantity: u32,

    /// Number of guests staying in the requested units.
    pub guests: u32,
}

/// Selection of a stay-based booking to be quoted.
#[derive(Clone, Debug)]
pub struct StaySelection {
    /// Date of arrival.
    pub check_in: Option<CheckInDate>,

    /// Date of departure.
    pub check_out: Option<CheckOutDate>,

    /// Requested rooms.
    ///
    /// Requests of zero units are ignored.
    pub rooms: Vec<RoomRequest>,

    /// Selected add-ons.
    pub amenities: Vec<amenity::Selection>,

    /// Selected [`PaymentTerm`].
    pub term: PaymentTerm,
}

/// Quote of a [`StaySelection`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StayQuote {
    /// Itemized cost.
    pub breakdown: StayCostBreakdown,

    /// Installments of the total, if there is anything to pay.
    pub schedule: Option<PaymentSchedule>,

    /// Selected [`PaymentTerm`].
    pub term: PaymentTerm,

    /// Amount to be paid now under the selected [`PaymentTerm`].
    pub amount_due_now: Money,
}

impl StaySelection {
    /// Checks this [`StaySelection`] against the provided [`Inventory`].
    ///
    /// # Errors
    ///
    /// With all the [`Violations`] found, if any.
    pub fn validate(&self, inventory: &Inventory) -> Result<(), Violations> {
        let mut violations = vec![];

        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                if nights_for_stay(check_in, check_out) == 0 {
                    violations
                        .push(InvalidDateRange::CheckOutNotAfterCheckIn.into());
                }
            }
            _ => violations.push(InvalidDateRange::MissingDates.into()),
        }

        let requested = self.requested_quantities();
        if requested.is_empty() {
            violations.push(EmptySelection::NoRooms.into());
        }
        violations.extend(requested.into_iter().filter_map(|(name, qty)| {
            inventory
                .validate_quantity(name, qty)
                .err()
                .map(Violation::from)
        }));

        Violations::collect(violations).map_or(Ok(()), Err)
    }

    /// Quotes this [`StaySelection`] against the provided [`Inventory`] as
    /// of `today`.
    ///
    /// # Errors
    ///
    /// With all the [`Violations`] found, if this [`StaySelection`] is not
    /// valid, or with a [`Violation::AmountOverflow`] if its total is not
    /// representable.
    pub fn quote(
        &self,
        inventory: &Inventory,
        today: Date,
        pricing: &Pricing,
        policy: &Policy,
    ) -> Result<StayQuote, Violations> {
        self.validate(inventory)?;

        let nights = match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                nights_for_stay(check_in, check_out)
            }
            _ => 0,
        };
        let selections = self
            .rooms
            .iter()
            .filter(|r| r.quantity > 0)
            .filter_map(|r| {
                inventory.get(&r.room).map(|room_type| RoomSelection {
                    room_type,
                    quantity: r.quantity,
                    guests: r.guests,
                })
            })
            .collect::<Vec<_>>();

        let breakdown = compute_stay_costs(
            &selections,
            nights,
            amenities::total_for(&self.amenities)?,
            pricing,
        )?;
        let schedule =
            compute_schedule(breakdown.total, self.check_in, today, policy);
        let amount_due_now = schedule.as_ref().map_or(breakdown.total, |s| {
            amount_due_now(s, self.term, breakdown.total)
        });

        log::debug!(
            nights,
            total = %breakdown.total,
            due_now = %amount_due_now,
            "stay quoted"
        );

        Ok(StayQuote {
            breakdown,
            schedule,
            term: self.term,
            amount_due_now,
        })
    }

    /// Sums requested quantities per room type, in the order of their first
    /// request, skipping requests of zero units.
    fn requested_quantities(&self) -> Vec<(&room::Name, u32)> {
        let mut requested: Vec<(&room::Name, u32)> = vec![];
        for r in self.rooms.iter().filter(|r| r.quantity > 0) {
            if let Some((_, qty)) =
                requested.iter_mut().find(|(name, _)| *name == &r.room)
            {
                *qty = qty.saturating_add(r.quantity);
            } else {
                requested.push((&r.room, r.quantity));
            }
        }
        requested
    }
}
