//! Crafting Grid Core
//!
//! Holds ingredient data in both layout and list form and supports
//! consumption/transformation without mutating shared state. Every derived
//! grid is built through full construction, so normalization and copy
//! guarantees hold for all instances alike.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use tracing::debug;

use crate::item::ItemStack;

/// A possibly ragged layout as supplied by callers. `None` marks an absent
/// row or an empty cell; both are materialized as explicit empty stacks
/// during normalization.
pub type SparseLayout = Vec<Option<Vec<Option<ItemStack>>>>;

// ============================================================================
// Crafting Grid
// ============================================================================

/// A fixed-shape 2-D arrangement of item stacks that can also be read as a
/// flat ordered list.
///
/// Immutable once constructed: the "mutating" operations ([`with_layout`],
/// [`with_list`], [`remove_stacks`]) return a brand-new grid and never touch
/// the receiver. The layout is rectangular after construction, with empty
/// cells held as explicit [`ItemStack::none`] placeholders, never absent.
///
/// [`with_layout`]: CraftingGrid::with_layout
/// [`with_list`]: CraftingGrid::with_list
/// [`remove_stacks`]: CraftingGrid::remove_stacks
#[derive(Debug, Clone)]
pub struct CraftingGrid {
    layout: Vec<Vec<ItemStack>>,
    list: Vec<ItemStack>,
    /// Lazily computed deep copy served by `as_layout`. Pure function of the
    /// immutable layout, so a racing first write is harmless.
    cached_layout: OnceLock<Vec<Vec<ItemStack>>>,
}

impl CraftingGrid {
    /// Builds a grid from a possibly ragged layout and an independent list.
    ///
    /// The layout is normalized (see [`SparseLayout`]) and the list is stored
    /// as given. Absent or empty inputs produce an empty grid; no input is
    /// rejected.
    pub fn new(layout: SparseLayout, list: Vec<ItemStack>) -> Self {
        Self {
            layout: normalize(layout),
            list,
            cached_layout: OnceLock::new(),
        }
    }

    /// Builds a grid from a layout alone, deriving the list by flattening
    /// non-empty cells in row-major order.
    pub fn from_layout(layout: SparseLayout) -> Self {
        let layout = normalize(layout);
        let list = flatten_non_empty(&layout);
        Self {
            layout,
            list,
            cached_layout: OnceLock::new(),
        }
    }

    /// Deep copy of the layout, served from a per-instance cache populated on
    /// first call. The caller may freely mutate the returned rows without
    /// affecting this grid or future calls.
    pub fn as_layout(&self) -> Vec<Vec<ItemStack>> {
        self.cached_layout
            .get_or_init(|| self.layout.clone())
            .clone()
    }

    /// Deep copy of the layout, computed fresh on every call.
    pub fn as_layout_uncached(&self) -> Vec<Vec<ItemStack>> {
        self.layout.clone()
    }

    /// The flat list view, borrowed. Elements are the stacks held since
    /// construction; they are not re-copied per call.
    pub fn as_list(&self) -> &[ItemStack] {
        &self.list
    }

    /// Consumes the requested stacks from a private working copy of the
    /// layout and returns the fully satisfied requests together with the
    /// remainder grid.
    ///
    /// Requests are processed in input order against one shared working
    /// layout, so later requests see what earlier ones consumed. For each
    /// request the layout is scanned row-major, first-match-first-served;
    /// matching is by kind, ignoring quantity. A request that could be fully
    /// drained appears in the removed set at its original requested quantity;
    /// a partially satisfied request is omitted entirely, though the units it
    /// did consume stay consumed in the remainder. The receiver is never
    /// altered.
    pub fn remove_stacks(&self, stacks: &[ItemStack]) -> (Vec<ItemStack>, CraftingGrid) {
        let mut working = self.as_layout_uncached();
        let mut removed = Vec::new();

        for requested in stacks {
            // Consume from a copy so the caller's input is never mutated.
            let mut wanted = requested.clone();
            for row in working.iter_mut() {
                for cell in row.iter_mut() {
                    if cell.is_empty() || wanted.is_empty() || !cell.same_kind(&wanted) {
                        continue;
                    }
                    let take = cell.quantity().min(wanted.quantity());
                    cell.set_quantity(cell.quantity() - take);
                    wanted.set_quantity(wanted.quantity() - take);
                    if cell.is_empty() {
                        *cell = ItemStack::none();
                    }
                }
            }
            if wanted.is_empty() {
                removed.push(requested.clone());
            }
        }

        debug!(
            "remove_stacks: {} requested, {} fully removed",
            stacks.len(),
            removed.len()
        );

        (removed, self.with_layout(working))
    }

    /// Rebuilds from a new layout, deriving the list by flattening non-empty
    /// cells in row-major order. The layout passes through normalization
    /// again, so ragged input is tolerated here too.
    pub fn with_layout(&self, layout: Vec<Vec<ItemStack>>) -> Self {
        Self::from_layout(sparse_from(layout))
    }

    /// Rebuilds by overlaying the list onto a copy of the current layout:
    /// successive elements are assigned into cells row-major until either the
    /// list or the grid capacity runs out. Excess list elements are ignored
    /// in the layout; trailing cells keep their prior content. The new grid
    /// pairs the overlaid layout with the list exactly as given.
    pub fn with_list(&self, list: Vec<ItemStack>) -> Self {
        let mut layout = self.as_layout_uncached();
        let mut incoming = list.iter().cloned();
        'overlay: for row in layout.iter_mut() {
            for cell in row.iter_mut() {
                match incoming.next() {
                    Some(stack) => *cell = stack,
                    None => break 'overlay,
                }
            }
        }
        Self::new(sparse_from(layout), list)
    }
}

// Equality and hashing are structural over layout and list; the lazy cache
// is a pure function of the layout and stays out of both.
impl PartialEq for CraftingGrid {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout && self.list == other.list
    }
}

impl Eq for CraftingGrid {}

impl Hash for CraftingGrid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.layout.hash(state);
        self.list.hash(state);
    }
}

// ============================================================================
// Layout helpers
// ============================================================================

/// Normalizes a ragged layout into a rectangle: width is taken from the
/// first present, non-empty row (0 if none); absent rows become rows of
/// empties; short rows are padded with empties and long rows truncated;
/// absent cells become explicit empty stacks.
fn normalize(layout: SparseLayout) -> Vec<Vec<ItemStack>> {
    let width = layout
        .iter()
        .flatten()
        .map(|row| row.len())
        .find(|len| *len > 0)
        .unwrap_or(0);

    layout
        .into_iter()
        .map(|row| {
            let mut cells: Vec<ItemStack> = row
                .unwrap_or_default()
                .into_iter()
                .take(width)
                .map(|cell| cell.unwrap_or_else(ItemStack::none))
                .collect();
            cells.resize(width, ItemStack::none());
            cells
        })
        .collect()
}

fn flatten_non_empty(layout: &[Vec<ItemStack>]) -> Vec<ItemStack> {
    layout
        .iter()
        .flatten()
        .filter(|stack| !stack.is_empty())
        .cloned()
        .collect()
}

fn sparse_from(layout: Vec<Vec<ItemStack>>) -> SparseLayout {
    layout
        .into_iter()
        .map(|row| Some(row.into_iter().map(Some).collect()))
        .collect()
}
