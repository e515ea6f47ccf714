// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_grid --heading-base-level=0

//! Understory Tile Grid: headless grid-list layout.
//!
//! A grid list lays out tiles in a fixed number of columns, where each tile
//! may span several rows and columns. This crate splits the problem in two:
//!
//! - **Placement.** [`compute_layout`] (or the reusable [`TileCoordinator`])
//!   assigns every tile a [`TilePosition`] with a greedy first-fit scan: tiles
//!   are taken in order and each one goes into the first run of free columns,
//!   left to right and top to bottom, that is wide enough for it. Tiles never
//!   overlap and are never reordered.
//! - **Geometry.** A [`TileStyler`] turns positions into offsets and sizes for
//!   one of three [`RowHeightMode`]s: fixed-height rows, rows with a
//!   width-to-height ratio, or rows that fit the container height. Values are
//!   CSS `calc()` expressions ([`CssValue`]) so that a browser can finish the
//!   arithmetic; [`resolve_grid`] evaluates them to [`kurbo::Rect`] frames for
//!   hosts that lay out in pixels.
//!
//! [`TileGrid`] combines both behind grid-list style settings (columns,
//! gutter, row height, direction) and takes care of clearing stale styles
//! when the row-height mode changes.
//!
//! This crate deliberately does **not** know about widgets, DOM nodes, or any
//! particular UI framework. Hosts implement [`TileSpan`] for their tiles and
//! [`StyleTarget`] for whatever receives the styles.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_tile_grid::{Direction, Tile, TilePosition, TileStyler, compute_layout};
//!
//! // A 2x2 feature tile followed by four small ones in a 4-column grid.
//! let tiles = [
//!     Tile::new(2, 2),
//!     Tile::new(1, 1),
//!     Tile::new(1, 1),
//!     Tile::new(1, 1),
//!     Tile::new(1, 1),
//! ];
//! let layout = compute_layout(4, &tiles).unwrap();
//! assert_eq!(layout.position(2), Some(TilePosition::new(0, 3)));
//! assert_eq!(layout.position(4), Some(TilePosition::new(1, 3)));
//! assert_eq!(layout.rowspan(), 2);
//!
//! let mut styler = TileStyler::fixed("80px");
//! styler.init("4px", &layout, Direction::Ltr).unwrap();
//! let height = styler.computed_height().unwrap().unwrap();
//! assert_eq!(
//!     height.value.to_string(),
//!     "calc(2 * (80px * 1) + (0 * 4px) + 4px * (2 - 1))"
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod calc;
mod grid;
mod layout;
mod resolve;
mod styler;
mod trace;

pub use calc::{CalcExpr, CssLength, CssValue};
pub use grid::{GridError, TileGrid};
pub use layout::{
    LayoutError, Tile, TileCoordinator, TileLayout, TilePosition, TileSpan, compute_layout,
    compute_layout_with_trace,
};
pub use resolve::{ResolvedGrid, resolve_declaration, resolve_grid, resolve_tile};
pub use styler::{
    Direction, RowHeightMode, StyleDeclaration, StyleError, StyleProperty, StyleTarget, TileStyle,
    TileStyler,
};
pub use trace::{PlacementEvent, PlacementRecorder, PlacementTrace};
