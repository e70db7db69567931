//! Grid Builders
//!
//! The generic build-from-data contract, plus the concrete builder that
//! rebuilds a [`CraftingGrid`] from TOML data. Raw structures mirror the
//! on-disk shape; resolution into domain values applies defaults.

use serde::Deserialize;
use tracing::warn;

use crate::grid::{CraftingGrid, SparseLayout};
use crate::item::ItemStack;
use crate::persist::error::InvalidDataError;
use crate::persist::view::DataView;

/// Builds one instance of a domain value from an opaque [`DataView`].
///
/// Implementations are stateless singletons: building is one-shot and
/// side-effect-free, and a view that fails to build once will always fail.
pub trait DataBuilder {
    type Output;

    /// Attempts to build the value. Fails with [`InvalidDataError`] when the
    /// view is missing required fields or holds ill-typed ones.
    fn build(&self, view: &DataView) -> Result<Self::Output, InvalidDataError>;
}

// ============================================================================
// Raw TOML Structures
// ============================================================================

fn default_count() -> i32 {
    1
}

/// Raw grid cell from TOML. A missing `item` (an empty table) marks an
/// empty cell.
#[derive(Debug, Clone, Deserialize)]
struct RawStack {
    item: Option<String>,
    #[serde(default = "default_count")]
    count: i32,
}

impl RawStack {
    fn resolve(&self) -> Option<ItemStack> {
        self.item
            .as_ref()
            .map(|id| ItemStack::new(id.clone(), self.count))
    }
}

/// Raw grid definition from TOML. `rows` is required; `list` defaults to
/// the non-empty cells of `rows` in row-major order.
#[derive(Debug, Clone, Deserialize)]
struct RawGrid {
    rows: Vec<Vec<RawStack>>,
    list: Option<Vec<RawStack>>,
}

// ============================================================================
// Crafting Grid Builder
// ============================================================================

/// [`DataBuilder`] producing a [`CraftingGrid`] from a view shaped like:
///
/// ```toml
/// rows = [
///     [{ item = "plank", count = 2 }, {}],
///     [{}, { item = "stone" }],
/// ]
/// ```
#[derive(Debug, Default)]
pub struct CraftingGridBuilder;

impl DataBuilder for CraftingGridBuilder {
    type Output = CraftingGrid;

    fn build(&self, view: &DataView) -> Result<CraftingGrid, InvalidDataError> {
        let raw: RawGrid = view.value().clone().try_into().map_err(|e| {
            warn!("rejected grid data: {}", e);
            InvalidDataError::new(e.to_string())
        })?;

        let layout: SparseLayout = raw
            .rows
            .iter()
            .map(|cells| Some(cells.iter().map(RawStack::resolve).collect()))
            .collect();

        Ok(match raw.list {
            Some(list) => {
                CraftingGrid::new(layout, list.iter().filter_map(RawStack::resolve).collect())
            }
            None => CraftingGrid::from_layout(layout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_grid_from_toml() {
        let view = DataView::from_toml_str(
            r#"
            rows = [
                [{ item = "plank", count = 2 }, {}],
                [{}, { item = "stone" }],
            ]
            "#,
        )
        .unwrap();

        let grid = CraftingGridBuilder.build(&view).unwrap();
        let layout = grid.as_layout();
        assert_eq!(layout[0][0], ItemStack::new("plank", 2));
        assert!(layout[0][1].is_empty());
        // count defaults to 1
        assert_eq!(layout[1][1], ItemStack::new("stone", 1));
        assert_eq!(
            grid.as_list(),
            &[ItemStack::new("plank", 2), ItemStack::new("stone", 1)]
        );
    }

    #[test]
    fn test_explicit_list_overrides_derived() {
        let view = DataView::from_toml_str(
            r#"
            rows = [[{ item = "plank" }]]
            list = [{ item = "plank", count = 3 }]
            "#,
        )
        .unwrap();

        let grid = CraftingGridBuilder.build(&view).unwrap();
        assert_eq!(grid.as_list(), &[ItemStack::new("plank", 3)]);
    }

    #[test]
    fn test_missing_rows_rejected() {
        let view = DataView::from_toml_str("list = []").unwrap();
        let err = CraftingGridBuilder.build(&view).unwrap_err();
        assert!(err.reason().contains("rows"));
    }

    #[test]
    fn test_ill_typed_rows_rejected() {
        let view = DataView::from_toml_str(r#"rows = "not an array""#).unwrap();
        assert!(CraftingGridBuilder.build(&view).is_err());
    }

    #[test]
    fn test_unparseable_toml_rejected() {
        assert!(DataView::from_toml_str("rows = [").is_err());
    }
}
