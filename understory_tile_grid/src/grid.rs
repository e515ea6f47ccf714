// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid controller tying placement and styling together.

use alloc::string::String;
use core::fmt;

use kurbo::Size;

use crate::layout::{LayoutError, TileCoordinator, TileSpan};
use crate::resolve::{ResolvedGrid, resolve_grid};
use crate::styler::{Direction, RowHeightMode, StyleError, StyleTarget, TileStyler};

/// Error returned by [`TileGrid`] layout passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Tiles could not be placed.
    Layout(LayoutError),
    /// Tile geometry could not be computed.
    Style(StyleError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "tile placement failed: {err}"),
            Self::Style(err) => write!(f, "tile styling failed: {err}"),
        }
    }
}

impl core::error::Error for GridError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Style(err) => Some(err),
        }
    }
}

impl From<LayoutError> for GridError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<StyleError> for GridError {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

/// A grid list: configuration plus the placement and styling state needed to
/// lay out its tiles.
///
/// The grid owns one active [`TileStyler`], chosen from the row-height
/// setting. Changing the row height swaps the styler; the outgoing styler is
/// kept until the next [`layout_tiles`](Self::layout_tiles), which first lets
/// it clear the styles it wrote.
///
/// ```rust
/// use understory_tile_grid::{CssValue, StyleProperty, StyleTarget, Tile, TileGrid, TileSpan};
///
/// #[derive(Default)]
/// struct Node {
///     tile: Tile,
///     top: Option<String>,
/// }
///
/// impl TileSpan for Node {
///     fn rowspan(&self) -> usize { self.tile.rowspan }
///     fn colspan(&self) -> usize { self.tile.colspan }
/// }
///
/// impl StyleTarget for Node {
///     fn set_style(&mut self, property: StyleProperty, value: Option<&CssValue>) {
///         if property == StyleProperty::Top {
///             self.top = value.map(ToString::to_string);
///         }
///     }
/// }
///
/// let mut grid = TileGrid::new(2);
/// grid.set_row_height("40px").unwrap();
///
/// let mut list = Node::default();
/// let mut tiles: Vec<Node> = (0..3).map(|_| Node::default()).collect();
/// grid.layout_tiles(&mut list, &mut tiles).unwrap();
///
/// assert_eq!(tiles[0].top.as_deref(), Some("0"));
/// assert_eq!(tiles[2].top.as_deref(), Some("calc((40px + 1px) * 1)"));
/// ```
#[derive(Clone, Debug)]
pub struct TileGrid {
    cols: usize,
    gutter: String,
    row_height: String,
    direction: Direction,
    coordinator: TileCoordinator,
    styler: TileStyler,
    outgoing: Option<TileStyler>,
}

impl TileGrid {
    /// Row height used until [`set_row_height`](Self::set_row_height) is
    /// called: square tiles.
    pub const DEFAULT_ROW_HEIGHT: &str = "1:1";

    /// Gutter used until [`set_gutter_size`](Self::set_gutter_size) is called.
    pub const DEFAULT_GUTTER: &str = "1px";

    /// Creates a grid with `cols` columns and default settings.
    #[must_use]
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            gutter: Self::DEFAULT_GUTTER.into(),
            row_height: Self::DEFAULT_ROW_HEIGHT.into(),
            direction: Direction::default(),
            coordinator: TileCoordinator::new(),
            styler: TileStyler::new(RowHeightMode::Ratio(1.0)),
            outgoing: None,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sets the number of columns.
    pub fn set_cols(&mut self, cols: usize) {
        self.cols = cols;
    }

    /// Gutter size as configured (before unit normalization).
    #[must_use]
    pub fn gutter_size(&self) -> &str {
        &self.gutter
    }

    /// Sets the gutter size; bare numbers are pixels.
    pub fn set_gutter_size(&mut self, gutter: impl Into<String>) {
        self.gutter = gutter.into();
    }

    /// Layout direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the layout direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Row height setting as configured.
    #[must_use]
    pub fn row_height(&self) -> &str {
        &self.row_height
    }

    /// Sets the row height: `"fit"`, a `"width:height"` ratio, or a fixed
    /// CSS length.
    ///
    /// Setting the current value again does nothing. An invalid ratio is
    /// rejected and leaves the grid unchanged; an invalid fixed height is
    /// only reported by the next layout pass.
    pub fn set_row_height(&mut self, value: &str) -> Result<(), StyleError> {
        if value == self.row_height {
            return Ok(());
        }
        let styler = TileStyler::new(RowHeightMode::parse(value)?);
        let previous = core::mem::replace(&mut self.styler, styler);
        // Only the first outgoing styler since the last layout wrote anything.
        self.outgoing.get_or_insert(previous);
        self.row_height = value.into();
        Ok(())
    }

    /// The active styler.
    #[must_use]
    pub fn styler(&self) -> &TileStyler {
        &self.styler
    }

    /// The coordinator holding the most recent placement.
    #[must_use]
    pub fn coordinator(&self) -> &TileCoordinator {
        &self.coordinator
    }

    /// Places and styles every tile, then sizes the container.
    ///
    /// Styles left behind by a previous row-height mode are cleared first.
    pub fn layout_tiles<L, T>(&mut self, list: &mut L, tiles: &mut [T]) -> Result<(), GridError>
    where
        L: StyleTarget + ?Sized,
        T: TileSpan + StyleTarget,
    {
        if let Some(outgoing) = self.outgoing.take() {
            outgoing.reset(list, tiles.iter_mut());
        }

        let layout = self.coordinator.update(self.cols, tiles.iter())?;
        self.styler.init(&self.gutter, layout, self.direction)?;
        for (tile, position) in tiles.iter_mut().zip(layout.positions()) {
            self.styler.set_style(tile, position.row, position.col)?;
        }

        if let Some(height) = self.styler.computed_height()? {
            list.set_style(height.property, Some(&height.value));
        }
        Ok(())
    }

    /// Places every tile and resolves the frames for a container of
    /// `available` size, without writing any styles.
    ///
    /// See [`resolve_grid`] for how `available` is used.
    pub fn resolve<T: TileSpan>(
        &mut self,
        tiles: &[T],
        available: Size,
    ) -> Result<Option<ResolvedGrid>, GridError> {
        let layout = self.coordinator.update(self.cols, tiles)?;
        self.styler.init(&self.gutter, layout, self.direction)?;
        Ok(resolve_grid(&self.styler, layout, tiles, available)?)
    }
}
