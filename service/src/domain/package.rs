//! [`Package`] definitions.

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed-itinerary travel product booked with a start date and an implied
/// duration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Package {
    /// ID of this [`Package`].
    pub id: Id,

    /// [`Name`] of this [`Package`].
    pub name: Name,

    /// Price of this [`Package`] per guest.
    pub price: Money,

    /// Free-text description of this [`Package`] duration.
    pub duration: DurationLabel,
}

/// ID of a [`Package`].
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

/// Name of a [`Package`].
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
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl std::str::FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Package` name")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Package` name")
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// Free-text label describing a [`Package`] duration, like
/// `5 Days / 4 Nights`.
///
/// No format is enforced: the number of days is extracted on a best-effort
/// basis when quoting.
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[from(&str, String)]
#[serde(transparent)]
pub struct DurationLabel(String);

#[cfg(test)]
mod spec {
    use super::{Id, Name};

    #[test]
    fn parses_name_and_id() {
        assert_eq!(
            "Serengeti Explorer".parse::<Name>(),
            Ok(Name::new("Serengeti Explorer").unwrap()),
        );
        assert!("".parse::<Name>().is_err());
        assert!("Serengeti Explorer ".parse::<Name>().is_err());

        let id = Id::new();
        assert_eq!(id.to_string().parse::<Id>().ok(), Some(id));
    }
}
