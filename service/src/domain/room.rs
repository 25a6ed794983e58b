//! Room definitions.

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Individual bookable room of a [`Property`], as delivered by a catalog.
///
/// Several [`Instance`]s sharing the same [`Name`] are interchangeable units
/// of the same room [`Type`].
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// ID of this [`Instance`].
    pub id: Id,

    /// Display [`Name`] of this [`Instance`].
    pub name: Name,

    /// Maximum number of guests this [`Instance`] is meant for.
    pub max_guests: u32,

    /// Price charged per guest per night.
    pub price_per_night: Money,

    /// Indicator whether this [`Instance`] can currently be booked.
    #[serde(default = "available")]
    pub is_available: bool,

    /// URLs of images of this [`Instance`].
    #[serde(default)]
    pub images: Vec<String>,

    /// Amenities this [`Instance`] is equipped with.
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Default of [`Instance::is_available`].
const fn available() -> bool {
    true
}

/// Room type: a group of interchangeable [`Instance`]s sharing the same
/// [`Name`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Type {
    /// Display [`Name`] shared by all units of this [`Type`].
    pub name: Name,

    /// Maximum number of guests a single unit is meant for.
    pub max_guests: u32,

    /// Price charged per guest per night.
    pub price_per_night: Money,

    /// Total number of units of this [`Type`].
    pub total_units: u32,

    /// Number of units of this [`Type`] currently available.
    ///
    /// Never exceeds the [`Type::total_units`].
    pub available_units: u32,

    /// URLs of images of this [`Type`].
    pub images: Vec<String>,

    /// Amenities units of this [`Type`] are equipped with.
    pub amenities: Vec<String>,

    /// IDs of the [`Instance`]s grouped into this [`Type`].
    pub room_ids: Vec<Id>,
}

impl Type {
    /// Indicates whether the provided number of `guests` exceeds the
    /// advertised capacity of the provided `quantity` of units.
    ///
    /// This is an advisory display flag only: every guest is charged the
    /// full per-night rate, so exceeding capacity never changes the price.
    #[must_use]
    pub fn is_over_capacity(&self, quantity: u32, guests: u32) -> bool {
        guests > self.max_guests.saturating_mul(quantity)
    }
}

/// ID of a room [`Instance`].
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

/// Display name of a room, identifying its [`Type`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 256
    }
}

impl std::str::FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid room `Name`")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid room `Name`")
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
