//! Built-in search worlds.

pub mod grid;
pub mod random_graph;
pub mod road_map;
