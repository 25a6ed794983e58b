//! [`Property`]-related definitions.

use derive_more::{Display, From, Into};
use juniper::{GraphQLObject, GraphQLScalar};
use service::domain;
use uuid::Uuid;

/// Lodging property offering rooms to stay in.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Property {
    /// Unique identifier of this `Property`.
    pub id: Id,

    /// Display name of this `Property`.
    pub name: String,

    /// Total number of rooms of this `Property`.
    pub room_count: i32,
}

impl From<domain::Property> for Property {
    fn from(property: domain::Property) -> Self {
        Self {
            id: property.id.into(),
            name: property.name,
            room_count: i32::try_from(property.rooms.len())
                .unwrap_or(i32::MAX),
        }
    }
}

/// Unique identifier of a `Property`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::property::Id)]
#[into(domain::property::Id)]
#[graphql(name = "PropertyId", transparent)]
pub struct Id(Uuid);
