// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-fit tile placement.
//!
//! Tiles are placed in input order into a grid with a fixed number of
//! columns. A per-column tracker records how many more rows each column stays
//! occupied; placement scans the current row left to right for the first run
//! of free columns wide enough for the tile, and advances to the next row
//! (freeing one row of every column) when the current row has no such run.
//!
//! The result is greedy, not optimal: a tile never moves back to an earlier
//! row, even if a later row leaves a hole that it could have filled.

use alloc::vec::Vec;
use core::fmt;

use crate::trace::PlacementTrace;

/// Row and column span of a tile.
///
/// Implemented by [`Tile`] and by references to any implementor, so host
/// tile types can be laid out without copying them.
pub trait TileSpan {
    /// Number of grid rows the tile occupies (at least 1).
    fn rowspan(&self) -> usize;

    /// Number of grid columns the tile occupies (at least 1).
    fn colspan(&self) -> usize;
}

impl<T: TileSpan + ?Sized> TileSpan for &T {
    fn rowspan(&self) -> usize {
        (**self).rowspan()
    }

    fn colspan(&self) -> usize {
        (**self).colspan()
    }
}

impl<T: TileSpan + ?Sized> TileSpan for &mut T {
    fn rowspan(&self) -> usize {
        (**self).rowspan()
    }

    fn colspan(&self) -> usize {
        (**self).colspan()
    }
}

/// A plain tile with a row and column span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Number of rows occupied.
    pub rowspan: usize,
    /// Number of columns occupied.
    pub colspan: usize,
}

impl Tile {
    /// Creates a tile spanning `rowspan` rows and `colspan` columns.
    #[must_use]
    pub const fn new(rowspan: usize, colspan: usize) -> Self {
        Self { rowspan, colspan }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl TileSpan for Tile {
    fn rowspan(&self) -> usize {
        self.rowspan
    }

    fn colspan(&self) -> usize {
        self.colspan
    }
}

/// Zero-indexed grid cell of a tile's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TilePosition {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl TilePosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Error returned when tiles cannot be placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The grid has zero columns.
    NoColumns,
    /// The tile at `index` has a zero row or column span.
    EmptySpan {
        /// Index of the offending tile in the input sequence.
        index: usize,
    },
    /// A tile is wider than the grid.
    TileTooWide {
        /// Column span of the offending tile.
        colspan: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => f.write_str("grid must have at least one column"),
            Self::EmptySpan { index } => {
                write!(f, "tile {index} has an empty row or column span")
            }
            Self::TileTooWide { colspan, cols } => write!(
                f,
                "tile with colspan {colspan} is wider than grid with cols={cols}"
            ),
        }
    }
}

impl core::error::Error for LayoutError {}

/// Placement of a tile sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileLayout {
    positions: Vec<TilePosition>,
    cols: usize,
    row_count: usize,
    rowspan: usize,
}

impl TileLayout {
    /// Positions, index-aligned with the input tiles.
    #[must_use]
    pub fn positions(&self) -> &[TilePosition] {
        &self.positions
    }

    /// Position of the tile at `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<TilePosition> {
        self.positions.get(index).copied()
    }

    /// Number of columns the layout was computed for.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows in which a tile starts, counting from the first row.
    ///
    /// This is one past the last row the scan reached. It is `1` for an
    /// empty tile sequence.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Total number of rows covered, including rows that tiles from the last
    /// row overhang into.
    #[must_use]
    pub fn rowspan(&self) -> usize {
        self.rowspan
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no tiles were placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Computes the placement of `tiles` in a grid with `cols` columns.
///
/// ```rust
/// use understory_tile_grid::{Tile, TilePosition, compute_layout};
///
/// let layout = compute_layout(3, [Tile::new(1, 2), Tile::new(1, 1)]).unwrap();
/// assert_eq!(layout.positions(), &[TilePosition::new(0, 0), TilePosition::new(0, 2)]);
/// assert_eq!(layout.row_count(), 1);
/// ```
pub fn compute_layout<T: TileSpan>(
    cols: usize,
    tiles: impl IntoIterator<Item = T>,
) -> Result<TileLayout, LayoutError> {
    compute_layout_with_trace(cols, tiles, &mut ())
}

/// Like [`compute_layout`], reporting each row advance and placement to
/// `trace`.
pub fn compute_layout_with_trace<T: TileSpan>(
    cols: usize,
    tiles: impl IntoIterator<Item = T>,
    trace: &mut impl PlacementTrace,
) -> Result<TileLayout, LayoutError> {
    let mut tracker = Vec::new();
    Placer::new(&mut tracker, cols, trace).run(tiles)
}

/// Reusable tile placer.
///
/// The coordinator keeps its tracker allocation between runs and remembers
/// the most recent successful layout. Every [`update`](Self::update) starts
/// from an empty grid; nothing but the allocation carries over.
#[derive(Clone, Debug, Default)]
pub struct TileCoordinator {
    tracker: Vec<usize>,
    layout: Option<TileLayout>,
}

impl TileCoordinator {
    /// Creates a coordinator with no layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `tiles` in a grid with `cols` columns.
    ///
    /// On error the previous layout is discarded and every tracker column is
    /// reset to free, so no partial placement can be observed.
    pub fn update<T: TileSpan>(
        &mut self,
        cols: usize,
        tiles: impl IntoIterator<Item = T>,
    ) -> Result<&TileLayout, LayoutError> {
        self.update_with_trace(cols, tiles, &mut ())
    }

    /// Like [`update`](Self::update), reporting events to `trace`.
    pub fn update_with_trace<T: TileSpan>(
        &mut self,
        cols: usize,
        tiles: impl IntoIterator<Item = T>,
        trace: &mut impl PlacementTrace,
    ) -> Result<&TileLayout, LayoutError> {
        self.layout = None;
        match Placer::new(&mut self.tracker, cols, trace).run(tiles) {
            Ok(layout) => Ok(self.layout.insert(layout)),
            Err(err) => {
                self.tracker.clear();
                self.tracker.resize(cols, 0);
                Err(err)
            }
        }
    }

    /// The most recent successful layout.
    #[must_use]
    pub fn layout(&self) -> Option<&TileLayout> {
        self.layout.as_ref()
    }

    /// Positions from the most recent successful layout.
    #[must_use]
    pub fn positions(&self) -> &[TilePosition] {
        self.layout
            .as_ref()
            .map(TileLayout::positions)
            .unwrap_or_default()
    }

    /// Row count of the most recent successful layout, or `0` if there is none.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.layout.as_ref().map_or(0, TileLayout::row_count)
    }

    /// Total rowspan of the most recent successful layout, or `0` if there is
    /// none.
    #[must_use]
    pub fn rowspan(&self) -> usize {
        self.layout.as_ref().map_or(0, TileLayout::rowspan)
    }

    /// Remaining occupied rows per column after the last placement.
    #[must_use]
    pub fn tracker(&self) -> &[usize] {
        &self.tracker
    }
}

struct Placer<'t, R> {
    tracker: &'t mut Vec<usize>,
    column_index: usize,
    row_index: usize,
    trace: &'t mut R,
}

impl<'t, R: PlacementTrace> Placer<'t, R> {
    fn new(tracker: &'t mut Vec<usize>, cols: usize, trace: &'t mut R) -> Self {
        tracker.clear();
        tracker.resize(cols, 0);
        Self {
            tracker,
            column_index: 0,
            row_index: 0,
            trace,
        }
    }

    fn run<T: TileSpan>(
        mut self,
        tiles: impl IntoIterator<Item = T>,
    ) -> Result<TileLayout, LayoutError> {
        if self.tracker.is_empty() {
            return Err(LayoutError::NoColumns);
        }
        let positions = tiles
            .into_iter()
            .enumerate()
            .map(|(index, tile)| self.place(index, &tile))
            .collect::<Result<Vec<_>, _>>()?;

        let row_count = self.row_index + 1;
        let overhang = self.tracker.iter().copied().max().unwrap_or(0);
        let rowspan = if overhang > 1 {
            row_count + overhang - 1
        } else {
            row_count
        };
        Ok(TileLayout {
            positions,
            cols: self.tracker.len(),
            row_count,
            rowspan,
        })
    }

    fn place(&mut self, index: usize, tile: &impl TileSpan) -> Result<TilePosition, LayoutError> {
        let (rowspan, colspan) = (tile.rowspan(), tile.colspan());
        if rowspan == 0 || colspan == 0 {
            return Err(LayoutError::EmptySpan { index });
        }
        if colspan > self.tracker.len() {
            return Err(LayoutError::TileTooWide {
                colspan,
                cols: self.tracker.len(),
            });
        }

        let start = self.find_gap(colspan);
        self.tracker[start..start + colspan].fill(rowspan);
        self.column_index = start + colspan;

        let position = TilePosition::new(self.row_index, start);
        self.trace.tile_placed(index, position);
        Ok(position)
    }

    /// Returns the first column, at or after the cursor, that starts a free
    /// run of at least `colspan` columns, advancing rows as needed.
    ///
    /// Terminates because `colspan <= cols` and every row advance frees one
    /// row of every column.
    fn find_gap(&mut self, colspan: usize) -> usize {
        loop {
            if self.column_index + colspan > self.tracker.len() {
                self.next_row();
                continue;
            }
            let Some(start) = self.tracker[self.column_index..]
                .iter()
                .position(|&rows| rows == 0)
                .map(|offset| self.column_index + offset)
            else {
                self.next_row();
                continue;
            };
            if self.gap_end(start) - start >= colspan {
                return start;
            }
            self.column_index = start + 1;
        }
    }

    /// Exclusive end of the free run starting at `start`.
    fn gap_end(&self, start: usize) -> usize {
        debug_assert_eq!(self.tracker[start], 0, "gap must start on a free column");
        self.tracker[start + 1..]
            .iter()
            .position(|&rows| rows != 0)
            .map_or(self.tracker.len(), |offset| start + 1 + offset)
    }

    fn next_row(&mut self) {
        self.column_index = 0;
        self.row_index += 1;
        for rows in self.tracker.iter_mut() {
            *rows = rows.saturating_sub(1);
        }
        self.trace.row_advanced(self.row_index);
    }
}
