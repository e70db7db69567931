//! Crafting grid ingredient tracking.
//!
//! A [`CraftingGrid`] holds the ingredients of a crafting attempt in two
//! equivalent views: a rectangular 2-D layout and a flat row-major list.
//! Grids are immutable values; consuming ingredients via
//! [`CraftingGrid::remove_stacks`] yields the requests that were fully
//! available together with a new remainder grid, leaving the original
//! untouched. A recipe matcher decides whether a craft succeeds by checking
//! which of its ingredient requests came back in the removed set.
//!
//! Grids can also be rebuilt from declarative TOML data through the
//! [`persist`] module.

pub mod grid;
pub mod item;
pub mod persist;

pub use grid::{CraftingGrid, SparseLayout};
pub use item::ItemStack;
pub use persist::{CraftingGridBuilder, DataBuilder, DataView, InvalidDataError};
