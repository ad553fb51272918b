//! `RoadMap`: towns joined by two-way roads.
//!
//! [`Town`] is the example of a domain state that is not a primitive: it
//! carries its own identity in the `id` field. Road cost is the straight
//! line distance between the towns, so the straight-line heuristic is both
//! admissible and consistent.

use std::collections::BTreeMap;

use waypoint_graph::{Identified, VertexId};

use crate::contract::SearchWorld;
use crate::error::WorldError;

#[derive(Debug, Clone, PartialEq)]
pub struct Town {
    pub id: u32,
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
}

impl Town {
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Identified for Town {
    fn identity(&self) -> VertexId {
        VertexId::new(i64::from(self.id))
    }
}

/// Towns and roads under construction. [`RoadMapBuilder::build`] picks the
/// route and checks that both ends are on the map.
#[derive(Debug, Clone)]
pub struct RoadMapBuilder {
    id: String,
    towns: BTreeMap<u32, Town>,
    roads: BTreeMap<u32, Vec<u32>>,
}

impl RoadMapBuilder {
    /// Add or replace a town.
    pub fn add_town(&mut self, id: u32, name: &'static str, x: f64, y: f64) {
        self.towns.insert(id, Town { id, name, x, y });
    }

    /// Join two towns with a two-way road. Adding an existing road is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownTown`] if either town is missing, or
    /// [`WorldError::InvalidParameter`] for a road from a town to itself.
    pub fn add_road(&mut self, a: u32, b: u32) -> Result<(), WorldError> {
        for id in [a, b] {
            if !self.towns.contains_key(&id) {
                return Err(WorldError::UnknownTown { id });
            }
        }
        if a == b {
            return Err(WorldError::InvalidParameter {
                name: "road",
                detail: format!("town {a} cannot be joined to itself"),
            });
        }
        for (from, to) in [(a, b), (b, a)] {
            let list = self.roads.entry(from).or_default();
            if !list.contains(&to) {
                list.push(to);
            }
        }
        Ok(())
    }

    /// Finish the map, routing from town `start` to town `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownTown`] if either town was never added.
    pub fn build(self, start: u32, goal: u32) -> Result<RoadMap, WorldError> {
        let start = lookup(&self.towns, start)?;
        let goal = lookup(&self.towns, goal)?;
        Ok(RoadMap {
            id: self.id,
            towns: self.towns,
            roads: self.roads,
            start,
            goal,
        })
    }
}

fn lookup(towns: &BTreeMap<u32, Town>, id: u32) -> Result<Town, WorldError> {
    towns.get(&id).cloned().ok_or(WorldError::UnknownTown { id })
}

#[derive(Debug, Clone)]
pub struct RoadMap {
    id: String,
    towns: BTreeMap<u32, Town>,
    roads: BTreeMap<u32, Vec<u32>>,
    start: Town,
    goal: Town,
}

impl RoadMap {
    #[must_use]
    pub fn builder(id: impl Into<String>) -> RoadMapBuilder {
        RoadMapBuilder {
            id: id.into(),
            towns: BTreeMap::new(),
            roads: BTreeMap::new(),
        }
    }

    /// Route the same map between different towns.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownTown`] if either town is not on the map.
    pub fn with_route(mut self, start: u32, goal: u32) -> Result<Self, WorldError> {
        self.start = lookup(&self.towns, start)?;
        self.goal = lookup(&self.towns, goal)?;
        Ok(self)
    }

    #[must_use]
    pub fn town(&self, id: u32) -> Option<&Town> {
        self.towns.get(&id)
    }
}

impl SearchWorld for RoadMap {
    type State = Town;
    type Cost = f64;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> Town {
        self.start.clone()
    }

    fn goal(&self) -> Town {
        self.goal.clone()
    }

    fn neighbours(&self, state: &Town) -> Vec<(Town, f64)> {
        self.roads
            .get(&state.id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.towns.get(id))
            .map(|town| (town.clone(), state.distance(town)))
            .collect()
    }

    fn heuristic(&self, state: &Town, goal: &Town) -> f64 {
        state.distance(goal)
    }
}

/// Town ids on the built-in map.
pub mod towns {
    pub const ASHFORD: u32 = 1;
    pub const BROOKVALE: u32 = 2;
    pub const CARROW: u32 = 3;
    pub const DUNMORE: u32 = 4;
    pub const ELMSTEAD: u32 = 5;
    pub const FENWICK: u32 = 6;
    pub const GORSEY: u32 = 7;
    /// Has no roads.
    pub const HOLLIN: u32 = 8;
}

/// Built-in map routing Ashford to Fenwick. The optimal route is
/// Ashford, Carrow, Dunmore, Fenwick with cost 17.
///
/// # Errors
///
/// Never in practice; every road and both route ends are listed towns.
pub fn shire() -> Result<RoadMap, WorldError> {
    use towns::{ASHFORD, BROOKVALE, CARROW, DUNMORE, ELMSTEAD, FENWICK, GORSEY, HOLLIN};

    let mut map = RoadMap::builder("road_shire");
    map.add_town(ASHFORD, "Ashford", 0.0, 0.0);
    map.add_town(BROOKVALE, "Brookvale", 3.0, 4.0);
    map.add_town(CARROW, "Carrow", 6.0, 0.0);
    map.add_town(DUNMORE, "Dunmore", 9.0, 4.0);
    map.add_town(ELMSTEAD, "Elmstead", 12.0, -1.0);
    map.add_town(FENWICK, "Fenwick", 15.0, 4.0);
    map.add_town(GORSEY, "Gorsey", 6.0, 8.0);
    map.add_town(HOLLIN, "Hollin", 20.0, 20.0);

    let roads = [
        (ASHFORD, BROOKVALE),
        (ASHFORD, CARROW),
        (BROOKVALE, CARROW),
        (BROOKVALE, GORSEY),
        (CARROW, DUNMORE),
        (CARROW, ELMSTEAD),
        (DUNMORE, ELMSTEAD),
        (DUNMORE, FENWICK),
        (ELMSTEAD, FENWICK),
        (GORSEY, DUNMORE),
        (GORSEY, FENWICK),
    ];
    for (a, b) in roads {
        map.add_road(a, b)?;
    }
    map.build(ASHFORD, FENWICK)
}
