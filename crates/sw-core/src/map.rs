//! The navigation graph.
//!
//! A [`Map`] owns every location and the player's current position. Movement
//! follows direction tokens along [`Connection`]s; locked destinations are
//! checked against an [`UnlockConditions`] implementation supplied by the
//! caller, so the map itself never needs to know about inventories or stories.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::{Connection, ConnectionKind, Location, LocationId, Lock};

/// What the map needs to know to decide whether a lock opens.
pub trait UnlockConditions {
    /// Whether the player carries an item with this name.
    fn has_item(&self, name: &str) -> bool;
    /// Whether the story step with this ID is complete.
    fn has_completed_step(&self, step_id: &str) -> bool;
    /// The display title of a story step, used when a step lock blocks movement.
    fn step_title(&self, _step_id: &str) -> Option<String> {
        None
    }
}

/// Nothing carried, nothing completed.
impl UnlockConditions for () {
    fn has_item(&self, _name: &str) -> bool {
        false
    }

    fn has_completed_step(&self, _step_id: &str) -> bool {
        false
    }
}

/// The result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// The new current location.
    pub location: LocationId,
    /// Its position in narrative order.
    pub index: usize,
    /// Its display name.
    pub name: String,
    /// True on the first arrival.
    pub first_visit: bool,
    /// First-visit or revisit description.
    pub description: String,
    /// Narration of the connection taken.
    pub transition: String,
    /// The lock that was opened on the way in, if any.
    pub unlocked: Option<Lock>,
}

/// The world's locations and the player's position among them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    locations: Vec<Location>,
    current: usize,
}

impl Map {
    /// Build a map. The first location is the start and counts as visited.
    pub fn new(locations: Vec<Location>) -> CoreResult<Self> {
        if locations.is_empty() {
            return Err(CoreError::EmptyMap);
        }
        for (i, loc) in locations.iter().enumerate() {
            if locations[..i].iter().any(|other| other.id == loc.id) {
                return Err(CoreError::DuplicateLocation(loc.id.clone()));
            }
        }

        let mut map = Self {
            locations,
            current: 0,
        };
        map.locations[0].visited = true;
        Ok(map)
    }

    /// Add a directed connection out of `from`.
    ///
    /// Both ends must exist; an existing edge with the same direction is replaced.
    pub fn connect(&mut self, from: &LocationId, connection: Connection) -> CoreResult<()> {
        self.index_of(&connection.destination)?;
        let idx = self.index_of(from)?;
        self.locations[idx]
            .connections
            .insert(connection.direction.clone(), connection);
        Ok(())
    }

    /// Connect two locations both ways, deriving the return direction.
    ///
    /// A [`ConnectionKind::OneWay`] kind adds the forward edge only.
    pub fn connect_both(
        &mut self,
        from: &LocationId,
        to: &LocationId,
        direction: &str,
        kind: ConnectionKind,
    ) -> CoreResult<()> {
        let to_name = self.location(to)?.name.clone();
        let from_name = self.location(from)?.name.clone();

        self.connect(
            from,
            Connection::new(direction, to.clone(), kind.narrate(direction, &to_name))
                .with_kind(kind),
        )?;
        if kind == ConnectionKind::OneWay {
            return Ok(());
        }

        let back = opposite_direction(direction);
        let back_kind = match kind {
            ConnectionKind::Enter => ConnectionKind::Exit,
            ConnectionKind::Exit => ConnectionKind::Enter,
            other => other,
        };
        self.connect(
            to,
            Connection::new(back, from.clone(), back_kind.narrate(back, &from_name))
                .with_kind(back_kind),
        )
    }

    /// Check that every connection points at an existing location.
    pub fn validate(&self) -> CoreResult<()> {
        for loc in &self.locations {
            for conn in loc.connections.values() {
                self.index_of(&conn.destination)?;
            }
        }
        Ok(())
    }

    /// Move along the connection named by `direction`.
    pub fn travel(
        &mut self,
        direction: &str,
        conditions: &impl UnlockConditions,
    ) -> CoreResult<Arrival> {
        let direction = direction.trim().to_lowercase();
        let connection = self
            .current()
            .connections
            .get(&direction)
            .cloned()
            .ok_or_else(|| CoreError::NoExit(direction.clone()))?;

        let dest_idx = self.index_of(&connection.destination)?;
        let destination = &mut self.locations[dest_idx];

        let unlocked = match destination.lock.take() {
            Some(lock) if lock_opens(&lock, conditions) => Some(lock),
            Some(lock) => {
                let reason = lock_reason(&lock, conditions);
                destination.lock = Some(lock);
                return Err(CoreError::Locked {
                    destination: destination.id.clone(),
                    reason,
                });
            }
            None => None,
        };

        let first_visit = !destination.visited;
        destination.visited = true;
        let description = if first_visit {
            destination.descriptions.first_visit.clone()
        } else {
            destination.descriptions.revisit.clone()
        };
        self.current = dest_idx;
        let name = self.locations[dest_idx].name.clone();
        let transition = if connection.transition.is_empty() {
            connection.kind.narrate(&direction, &name)
        } else {
            connection.transition
        };

        tracing::debug!(
            to = %connection.destination,
            first_visit,
            "moved {direction}"
        );

        Ok(Arrival {
            location: connection.destination,
            index: dest_idx,
            name,
            first_visit,
            description,
            transition,
            unlocked,
        })
    }

    /// Direction tokens out of the current location whose destinations are
    /// unlocked, or whose lock `conditions` would open.
    pub fn available_exits(&self, conditions: &impl UnlockConditions) -> Vec<&str> {
        self.current()
            .connections
            .values()
            .filter(|conn| {
                self.location(&conn.destination).is_ok_and(|dest| {
                    dest.lock
                        .as_ref()
                        .is_none_or(|lock| lock_opens(lock, conditions))
                })
            })
            .map(|conn| conn.direction.as_str())
            .collect()
    }

    /// The current location.
    pub fn current(&self) -> &Location {
        &self.locations[self.current]
    }

    /// The current location, mutably.
    pub fn current_mut(&mut self) -> &mut Location {
        &mut self.locations[self.current]
    }

    /// Position of the current location in narrative order.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Look up a location by ID.
    pub fn location(&self, id: &LocationId) -> CoreResult<&Location> {
        self.index_of(id).map(|idx| &self.locations[idx])
    }

    /// Look up a location by ID for mutation.
    pub fn location_mut(&mut self, id: &LocationId) -> CoreResult<&mut Location> {
        let idx = self.index_of(id)?;
        Ok(&mut self.locations[idx])
    }

    /// All locations in narrative order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All locations, mutably.
    pub fn locations_mut(&mut self) -> &mut [Location] {
        &mut self.locations
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false: a map has at least one location.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn index_of(&self, id: &LocationId) -> CoreResult<usize> {
        self.locations
            .iter()
            .position(|loc| &loc.id == id)
            .ok_or_else(|| CoreError::LocationNotFound(id.clone()))
    }
}

fn lock_opens(lock: &Lock, conditions: &impl UnlockConditions) -> bool {
    match lock {
        Lock::RequiresItem(item) => conditions.has_item(item),
        Lock::RequiresStep(step) => conditions.has_completed_step(step),
    }
}

fn lock_reason(lock: &Lock, conditions: &impl UnlockConditions) -> String {
    match lock {
        Lock::RequiresStep(step) => match conditions.step_title(step) {
            Some(title) => format!("You must first complete: {title}."),
            None => lock.reason(),
        },
        Lock::RequiresItem(_) => lock.reason(),
    }
}

/// The direction token leading back along a two-way connection.
pub fn opposite_direction(direction: &str) -> &'static str {
    match direction.trim().to_lowercase().as_str() {
        "north" => "south",
        "south" => "north",
        "east" => "west",
        "west" => "east",
        "up" => "down",
        "down" => "up",
        "enter" => "exit",
        "exit" => "enter",
        _ => "back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Carrying(&'static str);

    impl UnlockConditions for Carrying {
        fn has_item(&self, name: &str) -> bool {
            self.0.eq_ignore_ascii_case(name)
        }

        fn has_completed_step(&self, step_id: &str) -> bool {
            step_id == "step_1"
        }

        fn step_title(&self, step_id: &str) -> Option<String> {
            (step_id == "step_3").then(|| "Investigate Cursed Village".to_string())
        }
    }

    fn ring(count: usize) -> Map {
        let locations = (0..count)
            .map(|i| Location::new(LocationId::indexed(i), format!("Place {i}")))
            .collect();
        let mut map = Map::new(locations).unwrap();
        for i in 0..count {
            let next = LocationId::indexed((i + 1) % count);
            map.connect(
                &LocationId::indexed(i),
                Connection::new("north", next, "You travel north."),
            )
            .unwrap();
        }
        map
    }

    #[test]
    fn start_is_visited() {
        let map = ring(3);
        assert_eq!(map.current().id, LocationId::indexed(0));
        assert!(map.current().visited);
        assert!(!map.locations()[1].visited);
    }

    #[test]
    fn empty_and_duplicate_maps_rejected() {
        assert!(matches!(Map::new(Vec::new()), Err(CoreError::EmptyMap)));
        let dup = vec![
            Location::new(LocationId::indexed(0), "A"),
            Location::new(LocationId::indexed(0), "B"),
        ];
        assert!(matches!(
            Map::new(dup),
            Err(CoreError::DuplicateLocation(_))
        ));
    }

    #[test]
    fn travel_first_visit_then_revisit() {
        let mut map = ring(2);
        let arrival = map.travel("north", &()).unwrap();
        assert!(arrival.first_visit);
        assert_eq!(arrival.description, "You arrive at Place 1.");
        assert_eq!(arrival.index, 1);

        let arrival = map.travel("North", &()).unwrap();
        assert!(!arrival.first_visit);
        assert_eq!(arrival.description, "You're back at Place 0.");
    }

    #[test]
    fn full_ring_returns_to_start() {
        let mut map = ring(5);
        let mut last = None;
        for _ in 0..5 {
            last = Some(map.travel("north", &()).unwrap());
        }
        let last = last.unwrap();
        assert_eq!(last.location, LocationId::indexed(0));
        assert_eq!(last.description, "You're back at Place 0.");
    }

    #[test]
    fn missing_exit_is_reported() {
        let mut map = ring(2);
        let err = map.travel("west", &()).unwrap_err();
        assert!(matches!(err, CoreError::NoExit(ref d) if d == "west"));
        assert!(err.is_recoverable());
        assert_eq!(map.current_index(), 0);
    }

    #[test]
    fn connecting_to_unknown_location_fails() {
        let mut map = ring(2);
        let err = map
            .connect(
                &LocationId::indexed(0),
                Connection::new("east", LocationId::new("nowhere"), ""),
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::LocationNotFound(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn item_lock_blocks_until_carried() {
        let mut map = ring(2);
        map.location_mut(&LocationId::indexed(1)).unwrap().lock =
            Some(Lock::RequiresItem("Brass Key".to_string()));

        assert!(map.available_exits(&()).is_empty());
        assert_eq!(map.available_exits(&Carrying("brass key")), vec!["north"]);
        let err = map.travel("north", &()).unwrap_err();
        match err {
            CoreError::Locked { reason, .. } => assert!(reason.contains("Brass Key")),
            other => panic!("expected lock, got {other:?}"),
        }
        assert_eq!(map.current_index(), 0);

        let arrival = map.travel("north", &Carrying("brass key")).unwrap();
        assert_eq!(
            arrival.unlocked,
            Some(Lock::RequiresItem("Brass Key".to_string()))
        );
        assert!(!map.current().is_locked());
    }

    #[test]
    fn step_lock_opens_after_step() {
        let mut map = ring(3);
        map.location_mut(&LocationId::indexed(1)).unwrap().lock =
            Some(Lock::RequiresStep("step_1".to_string()));
        assert!(map.travel("north", &Carrying("nothing")).is_ok());
    }

    #[test]
    fn step_lock_names_the_missing_step() {
        let mut map = ring(3);
        map.location_mut(&LocationId::indexed(1)).unwrap().lock =
            Some(Lock::RequiresStep("step_3".to_string()));

        match map.travel("north", &Carrying("nothing")).unwrap_err() {
            CoreError::Locked { reason, .. } => {
                assert_eq!(reason, "You must first complete: Investigate Cursed Village.");
            }
            other => panic!("expected lock, got {other:?}"),
        }
        match map.travel("north", &()).unwrap_err() {
            CoreError::Locked { reason, .. } => {
                assert_eq!(reason, "You are not ready to go there yet.");
            }
            other => panic!("expected lock, got {other:?}"),
        }
    }

    #[test]
    fn arrival_carries_transition() {
        let mut map = ring(2);
        assert_eq!(map.travel("north", &()).unwrap().transition, "You travel north.");

        map.connect(
            &LocationId::indexed(1),
            Connection::new("portal", LocationId::indexed(0), "")
                .with_kind(ConnectionKind::Teleport),
        )
        .unwrap();
        let arrival = map.travel("portal", &()).unwrap();
        assert_eq!(arrival.transition, "You are transported to Place 0.");
    }

    #[test]
    fn one_way_connections_have_no_way_back() {
        let locations = vec![
            Location::new(LocationId::new("ledge"), "Narrow Ledge"),
            Location::new(LocationId::new("pit"), "Collapsed Pit"),
        ];
        let mut map = Map::new(locations).unwrap();
        map.connect_both(
            &LocationId::new("ledge"),
            &LocationId::new("pit"),
            "down",
            ConnectionKind::OneWay,
        )
        .unwrap();

        let arrival = map.travel("down", &()).unwrap();
        assert_eq!(
            arrival.transition,
            "You go down to Collapsed Pit. There is no way back."
        );
        assert!(map.available_exits(&()).is_empty());
        assert!(matches!(map.travel("up", &()), Err(CoreError::NoExit(_))));
    }

    #[test]
    fn two_way_connections() {
        let locations = vec![
            Location::new(LocationId::new("street"), "Market Street"),
            Location::new(LocationId::new("tavern"), "The Rusty Tankard"),
        ];
        let mut map = Map::new(locations).unwrap();
        map.connect_both(
            &LocationId::new("street"),
            &LocationId::new("tavern"),
            "enter",
            ConnectionKind::Enter,
        )
        .unwrap();

        assert_eq!(map.available_exits(&()), vec!["enter"]);
        let inside = map.travel("enter", &()).unwrap();
        assert_eq!(inside.transition, "You enter The Rusty Tankard.");
        assert_eq!(map.available_exits(&()), vec!["exit"]);
        let back = map.travel("exit", &()).unwrap();
        assert_eq!(back.name, "Market Street");
        assert_eq!(back.transition, "You step out to Market Street.");
        assert_eq!(map.current().connections["enter"].kind, ConnectionKind::Enter);
        map.validate().unwrap();
    }

    #[test]
    fn opposite_directions() {
        assert_eq!(opposite_direction("north"), "south");
        assert_eq!(opposite_direction("Up"), "down");
        assert_eq!(opposite_direction("enter tavern"), "back");
    }
}
