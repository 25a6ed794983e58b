//! Pricing engine turning a booking selection into an itemized quote with a
//! payment schedule.
//!
//! Everything here is pure and synchronous: it operates on a catalog
//! snapshot resolved by the caller and never performs any I/O.

pub mod amenities;
pub mod cost;
pub mod duration;
pub mod inventory;
pub mod package;
pub mod payment;
pub mod stay;
pub mod violation;

use common::{unit, DateOf};

pub use self::{
    cost::{PackageCostBreakdown, Pricing, StayCostBreakdown},
    inventory::Inventory,
    package::{PackageQuote, PackageSelection},
    payment::{PaymentSchedule, PaymentTerm, Policy},
    stay::{RoomRequest, StayQuote, StaySelection},
    violation::{Violation, Violations, Warning},
};

/// Date of arriving for a stay.
pub type CheckInDate = DateOf<unit::CheckIn>;

/// Date of leaving after a stay.
pub type CheckOutDate = DateOf<unit::CheckOut>;

/// First day of a package.
pub type StartDate = DateOf<unit::Start>;

/// Last day of a package.
pub type EndDate = DateOf<unit::End>;

/// Date an installment is due at.
pub type DueDate = DateOf<unit::Due>;
