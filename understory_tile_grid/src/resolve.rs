// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel geometry for hosts without a CSS engine.
//!
//! The styler emits `calc()` values so that a browser can finish the
//! arithmetic. Canvas, GPU and terminal renderers have no such engine; the
//! helpers here evaluate the same values for a known container size and
//! return [`Rect`] frames in the container's coordinate space.
//!
//! Percentages follow the CSS box model: `left`, `right`, `width`,
//! `marginTop`, `paddingTop` and `paddingBottom` resolve against the
//! container width, while `top` and `height` resolve against its height.
//! Only `px` and `%` operands are supported; anything else resolves to
//! `None`.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::layout::{TileLayout, TileSpan};
use crate::styler::{StyleDeclaration, StyleError, StyleProperty, TileStyle, TileStyler};

/// Resolves a declaration against `container`.
#[must_use]
pub fn resolve_declaration(decl: &StyleDeclaration, container: Size) -> Option<f64> {
    let basis = match decl.property {
        StyleProperty::Top | StyleProperty::Height => container.height,
        StyleProperty::Left
        | StyleProperty::Right
        | StyleProperty::Width
        | StyleProperty::MarginTop
        | StyleProperty::PaddingTop
        | StyleProperty::PaddingBottom => container.width,
    };
    decl.value.resolve(basis)
}

/// Resolves a tile style to its frame inside `container`.
///
/// Right-anchored (RTL) tiles are mirrored so the frame is always expressed
/// from the left edge.
#[must_use]
pub fn resolve_tile(style: &TileStyle, container: Size) -> Option<Rect> {
    let inline = resolve_declaration(&style.inline_offset, container)?;
    let width = resolve_declaration(&style.inline_size, container)?;
    let y = resolve_declaration(&style.block_offset, container)?;
    let height = resolve_declaration(&style.block_size, container)?;
    let x = match style.inline_offset.property {
        StyleProperty::Right => container.width - inline - width,
        _ => inline,
    };
    Some(Rect::new(x, y, x + width, y + height))
}

/// Resolved geometry of a whole grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGrid {
    /// Container size; the height is the one the styler computed, or the
    /// available height in fit mode.
    pub size: Size,
    /// Tile frames, index-aligned with the input tiles.
    pub frames: Vec<Rect>,
}

/// Resolves every tile of `layout` for a container of `available` size.
///
/// `available.height` is only consulted in fit mode, and for percentage
/// gutters in a fixed-height `height`. Returns `Ok(None)` when a value uses
/// a unit that cannot be resolved to pixels.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_tile_grid::{Direction, Tile, TileStyler, compute_layout, resolve_grid};
///
/// let tiles = [Tile::new(1, 1), Tile::new(1, 1), Tile::new(1, 2)];
/// let layout = compute_layout(2, &tiles).unwrap();
/// let mut styler = TileStyler::fixed("50px");
/// styler.init("10px", &layout, Direction::Ltr).unwrap();
///
/// let grid = resolve_grid(&styler, &layout, &tiles, Size::new(210.0, 0.0))
///     .unwrap()
///     .unwrap();
/// assert_eq!(grid.size, Size::new(210.0, 110.0));
/// assert_eq!(grid.frames[1], Rect::new(110.0, 0.0, 210.0, 50.0));
/// assert_eq!(grid.frames[2], Rect::new(0.0, 60.0, 210.0, 110.0));
/// ```
pub fn resolve_grid<T: TileSpan>(
    styler: &TileStyler,
    layout: &TileLayout,
    tiles: impl IntoIterator<Item = T>,
    available: Size,
) -> Result<Option<ResolvedGrid>, StyleError> {
    let height = match styler.computed_height()? {
        Some(decl) => match resolve_declaration(&decl, available) {
            Some(height) => height,
            None => return Ok(None),
        },
        None => available.height,
    };
    let size = Size::new(available.width, height);

    let mut frames = Vec::with_capacity(layout.len());
    for (tile, position) in tiles.into_iter().zip(layout.positions()) {
        let style = styler.tile_style(&tile, position.row, position.col)?;
        let Some(frame) = resolve_tile(&style, size) else {
            return Ok(None);
        };
        frames.push(frame);
    }
    Ok(Some(ResolvedGrid { size, frames }))
}
