//! Room inventory grouping and advisory overbooking checks.
//!
//! Checks performed here are only consistent with the snapshot of rooms they
//! were given: availability must be re-validated when a booking is committed.

use std::collections::{hash_map::Entry, HashMap};

use crate::domain::room;

use super::violation::OverbookingError;

/// Merges room [`Instance`]s sharing the same [`room::Name`] into room
/// [`Type`]s.
///
/// [`Type`]s are returned in the order their names are first seen. Price and
/// capacity of a [`Type`] are taken from its first-seen [`Instance`], while
/// images and amenities are adopted from the last [`Instance`] providing
/// non-empty ones.
///
/// [`Instance`]: room::Instance
/// [`Type`]: room::Type
#[must_use]
pub fn group_by_name(rooms: &[room::Instance]) -> Vec<room::Type> {
    let mut index = HashMap::<&room::Name, usize>::with_capacity(rooms.len());
    let mut groups = Vec::<room::Type>::new();

    for room in rooms {
        let group = match index.entry(&room.name) {
            Entry::Occupied(e) => &mut groups[*e.get()],
            Entry::Vacant(e) => {
                _ = e.insert(groups.len());
                groups.push(room::Type {
                    name: room.name.clone(),
                    max_guests: room.max_guests,
                    price_per_night: room.price_per_night,
                    total_units: 0,
                    available_units: 0,
                    images: vec![],
                    amenities: vec![],
                    room_ids: vec![],
                });
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };

        group.total_units += 1;
        if room.is_available {
            group.available_units += 1;
        }
        if !room.images.is_empty() {
            group.images.clone_from(&room.images);
        }
        if !room.amenities.is_empty() {
            group.amenities.clone_from(&room.amenities);
        }
        group.room_ids.push(room.id);
    }

    groups
}

/// Checks whether the `requested` quantity of units can be taken from the
/// provided room [`Type`].
///
/// # Errors
///
/// With an [`OverbookingError`] if more units are requested than available.
///
/// [`Type`]: room::Type
pub fn validate_quantity(
    group: &room::Type,
    requested: u32,
) -> Result<(), OverbookingError> {
    if requested > group.available_units {
        return Err(OverbookingError {
            room: group.name.clone(),
            requested,
            available: group.available_units,
        });
    }
    Ok(())
}

/// Snapshot of room [`Type`]s of a single property, looked up by
/// [`room::Name`].
///
/// [`Type`]: room::Type
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    /// Room [`Type`]s in the order of their first appearance.
    ///
    /// [`Type`]: room::Type
    groups: Vec<room::Type>,

    /// Positions of room [`Type`]s in the `groups` by their names.
    ///
    /// [`Type`]: room::Type
    index: HashMap<room::Name, usize>,
}

impl Inventory {
    /// Groups the provided room [`Instance`]s into a new [`Inventory`].
    ///
    /// [`Instance`]: room::Instance
    #[must_use]
    pub fn new(rooms: &[room::Instance]) -> Self {
        Self::from(group_by_name(rooms))
    }

    /// Returns room [`Type`]s of this [`Inventory`].
    ///
    /// [`Type`]: room::Type
    #[must_use]
    pub fn groups(&self) -> &[room::Type] {
        &self.groups
    }

    /// Looks up a room [`Type`] by its [`room::Name`].
    ///
    /// [`Type`]: room::Type
    #[must_use]
    pub fn get(&self, name: &room::Name) -> Option<&room::Type> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    /// Returns the number of available units of the room [`Type`] with the
    /// provided [`room::Name`], or `0` if there is no such [`Type`].
    ///
    /// [`Type`]: room::Type
    #[must_use]
    pub fn available_count_for(&self, name: &room::Name) -> u32 {
        self.get(name).map_or(0, |g| g.available_units)
    }

    /// Checks whether the `requested` quantity of the room [`Type`] with the
    /// provided [`room::Name`] can be booked.
    ///
    /// # Errors
    ///
    /// With an [`OverbookingError`] if more units are requested than
    /// available, treating an unknown [`room::Name`] as having no units.
    ///
    /// [`Type`]: room::Type
    pub fn validate_quantity(
        &self,
        name: &room::Name,
        requested: u32,
    ) -> Result<(), OverbookingError> {
        match self.get(name) {
            Some(group) => validate_quantity(group, requested),
            None if requested == 0 => Ok(()),
            None => Err(OverbookingError {
                room: name.clone(),
                requested,
                available: 0,
            }),
        }
    }
}

impl From<Vec<room::Type>> for Inventory {
    fn from(groups: Vec<room::Type>) -> Self {
        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.name.clone(), i))
            .collect();
        Self { groups, index }
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::room;

    use super::{group_by_name, validate_quantity, Inventory};

    fn name(s: &str) -> room::Name {
        room::Name::new(s).unwrap()
    }

    fn instance(n: &str, price: u32, is_available: bool) -> room::Instance {
        room::Instance {
            id: room::Id::new(),
            name: name(n),
            max_guests: 2,
            price_per_night: Money::whole(price),
            is_available,
            images: vec![],
            amenities: vec![],
        }
    }

    #[test]
    fn groups_instances_by_name() {
        let rooms = [
            instance("Safari Tent", 100, true),
            instance("Lodge Suite", 300, true),
            instance("Safari Tent", 100, false),
            instance("Safari Tent", 100, true),
        ];

        let groups = group_by_name(&rooms);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, name("Safari Tent"));
        assert_eq!(groups[0].total_units, 3);
        assert_eq!(groups[0].available_units, 2);
        assert_eq!(
            groups[0].room_ids,
            vec![rooms[0].id, rooms[2].id, rooms[3].id],
        );
        assert_eq!(groups[1].name, name("Lodge Suite"));
        assert_eq!(groups[1].total_units, 1);
        assert_eq!(groups[1].available_units, 1);
        assert!(groups.iter().all(|g| g.available_units <= g.total_units));
    }

    #[test]
    fn keeps_first_seen_pricing_and_last_non_empty_metadata() {
        let mut first = instance("Safari Tent", 100, true);
        first.images = vec!["first.jpg".into()];
        first.amenities = vec!["fan".into()];
        let mut second = instance("Safari Tent", 150, true);
        second.max_guests = 4;
        second.images = vec!["second.jpg".into()];
        let third = instance("Safari Tent", 200, true);

        let groups = group_by_name(&[first, second, third]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].price_per_night, Money::whole(100));
        assert_eq!(groups[0].max_guests, 2);
        assert_eq!(groups[0].images, vec!["second.jpg".to_owned()]);
        assert_eq!(groups[0].amenities, vec!["fan".to_owned()]);
    }

    #[test]
    fn groups_nothing_from_nothing() {
        assert!(group_by_name(&[]).is_empty());
        assert!(Inventory::new(&[]).groups().is_empty());
    }

    #[test]
    fn validates_quantity_against_available_units() {
        let groups = group_by_name(&[
            instance("Safari Tent", 100, true),
            instance("Safari Tent", 100, true),
            instance("Safari Tent", 100, false),
        ]);
        let tent = &groups[0];

        for requested in 0..=2 {
            assert!(validate_quantity(tent, requested).is_ok());
        }

        let err = validate_quantity(tent, 3).unwrap_err();
        assert_eq!(err.room, name("Safari Tent"));
        assert_eq!(err.requested, 3);
        assert_eq!(err.available, 2);
    }

    #[test]
    fn looks_up_available_counts() {
        let inventory = Inventory::new(&[
            instance("Safari Tent", 100, true),
            instance("Lodge Suite", 300, false),
        ]);

        assert_eq!(inventory.available_count_for(&name("Safari Tent")), 1);
        assert_eq!(inventory.available_count_for(&name("Lodge Suite")), 0);
        assert_eq!(inventory.available_count_for(&name("Treehouse")), 0);
    }

    #[test]
    fn rejects_unknown_rooms_unless_nothing_requested() {
        let inventory = Inventory::new(&[instance("Safari Tent", 100, true)]);

        assert!(inventory.validate_quantity(&name("Treehouse"), 0).is_ok());

        let err = inventory
            .validate_quantity(&name("Treehouse"), 1)
            .unwrap_err();
        assert_eq!(err.available, 0);
    }
}
