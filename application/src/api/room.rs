//! Room-related definitions.

use common::Money;
use derive_more::{AsRef, Display, From, Into};
use juniper::{GraphQLObject, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::api::{self, scalar};

/// Group of interchangeable rooms of a property sharing the same name.
#[derive(Clone, Debug, GraphQLObject)]
pub struct RoomGroup {
    /// Name shared by all rooms of this `RoomGroup`.
    pub name: Name,

    /// Maximum number of guests a single room is meant for.
    ///
    /// Advisory only: guests beyond it are charged at the full rate.
    pub max_guests: i32,

    /// Price charged per guest per night.
    pub price_per_night: Money,

    /// Total number of rooms in this `RoomGroup`.
    pub total_units: i32,

    /// Number of rooms in this `RoomGroup` currently available.
    pub available_units: i32,

    /// URLs of images of this `RoomGroup`.
    pub images: Vec<String>,

    /// Amenities rooms of this `RoomGroup` are equipped with.
    pub amenities: Vec<String>,

    /// IDs of the rooms in this `RoomGroup`.
    pub room_ids: Vec<Id>,
}

impl From<domain::room::Type> for RoomGroup {
    fn from(group: domain::room::Type) -> Self {
        let domain::room::Type {
            name,
            max_guests,
            price_per_night,
            total_units,
            available_units,
            images,
            amenities,
            room_ids,
        } = group;
        Self {
            name: name.into(),
            max_guests: api::int(max_guests),
            price_per_night,
            total_units: api::int(total_units),
            available_units: api::int(available_units),
            images,
            amenities,
            room_ids: room_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Unique identifier of a room.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::room::Id)]
#[into(domain::room::Id)]
#[graphql(name = "RoomId", transparent)]
pub struct Id(Uuid);

/// Name of a `RoomGroup`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "RoomName", with = scalar::Via::<domain::room::Name>)]
pub struct Name(domain::room::Name);
