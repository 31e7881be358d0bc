//! Spatial data structures for road generation
//!
//! This module contains spatial-related functionality including:
//! - Directions, connector sets and axis modes
//! - Tile shapes and catalogs
//! - The sparse grid of placed tiles

/// Direction tables and connector sets
pub mod direction;
/// Sparse grid store of placed tiles
pub mod grid;
/// Tile shape descriptors and catalogs
pub mod tiles;

pub use grid::GridStore;
