//! Crafting Grid
//!
//! Immutable dual-view ingredient storage for the recipe system: a
//! rectangular 2-D layout and a flat row-major list over the same stacks.

pub mod crafting_grid;

pub use crafting_grid::{CraftingGrid, SparseLayout};
