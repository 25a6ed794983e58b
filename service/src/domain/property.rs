//! [`Property`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::room;

/// Lodging property offering rooms for stay-based bookings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// Display name of this [`Property`].
    pub name: String,

    /// Individual rooms of this [`Property`].
    #[serde(default)]
    pub rooms: Vec<room::Instance>,
}

/// ID of a [`Property`].
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
