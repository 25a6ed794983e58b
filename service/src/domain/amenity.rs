//! Optional add-on ([`Selection`]) definitions.

use common::Money;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional add-on chosen for a booking, like an airport transfer or a
/// guided tour.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// ID of the selected add-on.
    pub id: Id,

    /// Price of a single unit of the add-on.
    pub unit_price: Money,

    /// Number of units selected.
    pub quantity: u32,
}

impl Selection {
    /// Returns the total price of this [`Selection`].
    ///
    /// [`None`] if the total is not representable as [`Money`].
    #[must_use]
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// ID of an add-on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}
