// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile geometry as CSS style declarations.
//!
//! A [`TileStyler`] turns a tile's grid position into offsets and sizes. The
//! column axis is the same for every [`RowHeightMode`]: each column gets an
//! even share of the container width minus an even share of the total gutter
//! width. The row axis depends on the mode:
//!
//! - [`RowHeightMode::Fixed`]: every row has the same explicit height.
//! - [`RowHeightMode::Ratio`]: rows are sized relative to the column width,
//!   through `margin-top`/`padding-top` whose percentages resolve against the
//!   container width.
//! - [`RowHeightMode::Fit`]: rows share the container height evenly.
//!
//! Gutters only exist between tiles. With `n` columns there are `n - 1`
//! gutters, so each column gives up `(n - 1) / n` of a gutter; the same
//! "gutter fraction" is used for rows.

use alloc::string::String;
use core::fmt;

use crate::calc::{CalcExpr, CssLength, CssValue};
use crate::layout::{TileLayout, TileSpan};

/// Horizontal layout direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Columns run from the left edge.
    #[default]
    Ltr,
    /// Columns run from the right edge.
    Rtl,
}

/// Style properties written by the styler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// `left`
    Left,
    /// `right`
    Right,
    /// `width`
    Width,
    /// `top`
    Top,
    /// `height`
    Height,
    /// `marginTop`
    MarginTop,
    /// `paddingTop`
    PaddingTop,
    /// `paddingBottom`
    PaddingBottom,
}

impl StyleProperty {
    /// The property name as used on a DOM style object.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Width => "width",
            Self::Top => "top",
            Self::Height => "height",
            Self::MarginTop => "marginTop",
            Self::PaddingTop => "paddingTop",
            Self::PaddingBottom => "paddingBottom",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives style declarations for a tile or for the grid container.
///
/// `None` clears a property that was set earlier.
pub trait StyleTarget {
    /// Sets or clears `property`.
    fn set_style(&mut self, property: StyleProperty, value: Option<&CssValue>);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_style(&mut self, property: StyleProperty, value: Option<&CssValue>) {
        (**self).set_style(property, value);
    }
}

/// A single `property: value` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleDeclaration {
    /// The property.
    pub property: StyleProperty,
    /// Its value.
    pub value: CssValue,
}

impl StyleDeclaration {
    /// Creates a declaration.
    #[must_use]
    pub fn new(property: StyleProperty, value: CssValue) -> Self {
        Self { property, value }
    }
}

/// Complete geometry of one tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TileStyle {
    /// `left` (or `right` in RTL).
    pub inline_offset: StyleDeclaration,
    /// `width`.
    pub inline_size: StyleDeclaration,
    /// `top` or `marginTop`, depending on the mode.
    pub block_offset: StyleDeclaration,
    /// `height` or `paddingTop`, depending on the mode.
    pub block_size: StyleDeclaration,
}

impl TileStyle {
    /// Declarations in application order: column axis, then row axis.
    #[must_use]
    pub fn declarations(&self) -> [&StyleDeclaration; 4] {
        [
            &self.inline_offset,
            &self.inline_size,
            &self.block_offset,
            &self.block_size,
        ]
    }

    /// Value assigned to `property`, if this style sets it.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&CssValue> {
        self.declarations()
            .into_iter()
            .find(|decl| decl.property == property)
            .map(|decl| &decl.value)
    }

    /// Writes every declaration to `target`.
    pub fn apply(&self, target: &mut (impl StyleTarget + ?Sized)) {
        for decl in self.declarations() {
            target.set_style(decl.property, Some(&decl.value));
        }
    }
}

/// Error returned for invalid styler configuration or use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleError {
    /// A fixed row height that cannot be used inside `calc()`.
    InvalidRowHeight(String),
    /// A ratio that is not two positive numbers separated by `:`.
    InvalidRatio(String),
    /// The styler was asked for geometry before [`TileStyler::init`].
    NotInitialized,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRowHeight(value) => {
                write!(f, "invalid value \"{value}\" set as row height")
            }
            Self::InvalidRatio(value) => {
                write!(f, "invalid ratio given for row height: \"{value}\"")
            }
            Self::NotInitialized => f.write_str("tile styler used before init"),
        }
    }
}

impl core::error::Error for StyleError {}

/// How row heights are determined.
#[derive(Clone, Debug, PartialEq)]
pub enum RowHeightMode {
    /// Every row is this tall.
    Fixed(CssLength),
    /// Rows are `column width / ratio` tall.
    Ratio(f64),
    /// Rows split the container height evenly.
    Fit,
}

impl RowHeightMode {
    /// Parses a row-height setting.
    ///
    /// `"fit"` selects [`Fit`](Self::Fit), anything containing `:` is parsed
    /// as a ratio, and everything else is a fixed height. Fixed heights are
    /// only validated by [`TileStyler::init`].
    pub fn parse(value: &str) -> Result<Self, StyleError> {
        if value == "fit" {
            Ok(Self::Fit)
        } else if value.contains(':') {
            Self::ratio(value)
        } else {
            Ok(Self::fixed(value))
        }
    }

    /// A fixed row height; bare numbers are taken as pixels.
    #[must_use]
    pub fn fixed(height: &str) -> Self {
        Self::Fixed(CssLength::normalize(height))
    }

    /// Parses a `"width:height"` ratio.
    pub fn ratio(value: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidRatio(value.into());
        let mut parts = value.split(':');
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n > 0.0)
        };
        match (parse(width), parse(height)) {
            (Some(width), Some(height)) => Ok(Self::Ratio(width / height)),
            _ => Err(invalid()),
        }
    }
}

/// Per-layout inputs captured by [`TileStyler::init`].
#[derive(Clone, Debug, PartialEq)]
struct GridMetrics {
    gutter: CssLength,
    rows: usize,
    rowspan: usize,
    cols: usize,
    direction: Direction,
}

impl GridMetrics {
    fn gutter(&self) -> CalcExpr {
        self.gutter.clone().into()
    }

    /// `(percent% - (gutter * fraction))`
    fn base_tile_size(&self, percent: f64, fraction: f64) -> CalcExpr {
        CalcExpr::Length(CssLength::percent(percent))
            .minus(self.gutter().times(CalcExpr::Number(fraction)).grouped())
            .grouped()
    }

    /// `0` for the first track, else `calc((base + gutter) * offset)`.
    fn tile_position(&self, base: &CalcExpr, offset: usize) -> CssValue {
        if offset == 0 {
            return CssValue::Zero;
        }
        CssValue::Calc(
            base.clone()
                .plus(self.gutter())
                .grouped()
                .times(CalcExpr::Number(offset as f64)),
        )
    }

    /// `(base * span) + (span - 1 * gutter)`
    fn tile_size(&self, base: &CalcExpr, span: usize) -> CalcExpr {
        base.clone()
            .times(CalcExpr::Number(span as f64))
            .grouped()
            .plus(
                CalcExpr::Number(span.saturating_sub(1) as f64)
                    .times(self.gutter())
                    .grouped(),
            )
    }

    /// `rowspan * (height * 1) + (0 * gutter)`
    fn tile_span(&self, tile_height: &CalcExpr) -> CalcExpr {
        CalcExpr::Number(self.rowspan as f64)
            .times(
                tile_height
                    .clone()
                    .times(CalcExpr::Number(1.0))
                    .grouped(),
            )
            .plus(CalcExpr::Number(0.0).times(self.gutter()).grouped())
    }

    /// `gutter * (rowspan - 1)`
    fn gutter_span(&self) -> CalcExpr {
        self.gutter().times(
            CalcExpr::Number(self.rowspan as f64)
                .minus(CalcExpr::Number(1.0))
                .grouped(),
        )
    }

    fn percent_width_per_tile(&self) -> f64 {
        100.0 / self.cols as f64
    }

    fn gutter_width_fraction(&self) -> f64 {
        (self.cols as f64 - 1.0) / self.cols as f64
    }
}

/// Computes tile geometry for one [`RowHeightMode`].
///
/// Call [`init`](Self::init) after every layout change (columns, gutter,
/// direction or tiles) and before asking for tile styles.
///
/// ```rust
/// use understory_tile_grid::{Direction, StyleProperty, Tile, TileStyler, compute_layout};
///
/// let tiles = [Tile::new(1, 1), Tile::new(1, 1)];
/// let layout = compute_layout(2, &tiles).unwrap();
///
/// let mut styler = TileStyler::fixed("100px");
/// styler.init("1px", &layout, Direction::Ltr).unwrap();
///
/// let style = styler.tile_style(&tiles[1], 0, 1).unwrap();
/// assert_eq!(style.get(StyleProperty::Top).unwrap().to_string(), "0");
/// assert_eq!(
///     style.get(StyleProperty::Left).unwrap().to_string(),
///     "calc(((50% - (1px * 0.5)) + 1px) * 1)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TileStyler {
    mode: RowHeightMode,
    metrics: Option<GridMetrics>,
}

impl TileStyler {
    /// Creates a styler for `mode`.
    #[must_use]
    pub fn new(mode: RowHeightMode) -> Self {
        Self {
            mode,
            metrics: None,
        }
    }

    /// Fixed-height rows. The height is validated by [`init`](Self::init).
    #[must_use]
    pub fn fixed(height: &str) -> Self {
        Self::new(RowHeightMode::fixed(height))
    }

    /// Rows with a `"width:height"` aspect ratio.
    pub fn ratio(value: &str) -> Result<Self, StyleError> {
        RowHeightMode::ratio(value).map(Self::new)
    }

    /// Rows that split the container height.
    #[must_use]
    pub fn fit() -> Self {
        Self::new(RowHeightMode::Fit)
    }

    /// The row-height mode.
    #[must_use]
    pub fn mode(&self) -> &RowHeightMode {
        &self.mode
    }

    /// Row height ratio, for ratio mode.
    #[must_use]
    pub fn row_height_ratio(&self) -> Option<f64> {
        match self.mode {
            RowHeightMode::Ratio(ratio) => Some(ratio),
            _ => None,
        }
    }

    /// Returns `true` once [`init`](Self::init) has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.metrics.is_some()
    }

    /// Captures the gutter, grid shape and direction for the next styles.
    ///
    /// `gutter` is normalized like a fixed row height (bare numbers are
    /// pixels). Fails if a fixed row height is not a valid `calc()` operand,
    /// in which case the styler is left uninitialized.
    pub fn init(
        &mut self,
        gutter: &str,
        layout: &TileLayout,
        direction: Direction,
    ) -> Result<(), StyleError> {
        self.metrics = None;
        if let RowHeightMode::Fixed(height) = &self.mode
            && !height.is_calc_operand()
        {
            return Err(StyleError::InvalidRowHeight(height.as_str().into()));
        }
        self.metrics = Some(GridMetrics {
            gutter: CssLength::normalize(gutter),
            rows: layout.row_count(),
            rowspan: layout.rowspan(),
            cols: layout.cols(),
            direction,
        });
        Ok(())
    }

    fn metrics(&self) -> Result<&GridMetrics, StyleError> {
        self.metrics.as_ref().ok_or(StyleError::NotInitialized)
    }

    /// Geometry of a tile placed at (`row`, `col`).
    pub fn tile_style(
        &self,
        tile: &(impl TileSpan + ?Sized),
        row: usize,
        col: usize,
    ) -> Result<TileStyle, StyleError> {
        let [inline_offset, inline_size] = self.col_styles(tile, col)?;
        let [block_offset, block_size] = self.row_styles(tile, row)?;
        Ok(TileStyle {
            inline_offset,
            inline_size,
            block_offset,
            block_size,
        })
    }

    /// Computes and applies the geometry of `tile` at (`row`, `col`).
    pub fn set_style<T>(&self, tile: &mut T, row: usize, col: usize) -> Result<(), StyleError>
    where
        T: TileSpan + StyleTarget + ?Sized,
    {
        let style = self.tile_style(&*tile, row, col)?;
        style.apply(tile);
        Ok(())
    }

    /// Column-axis declarations: `left`/`right` and `width`.
    pub fn col_styles(
        &self,
        tile: &(impl TileSpan + ?Sized),
        col: usize,
    ) -> Result<[StyleDeclaration; 2], StyleError> {
        let m = self.metrics()?;
        let base = m.base_tile_size(m.percent_width_per_tile(), m.gutter_width_fraction());
        let side = match m.direction {
            Direction::Ltr => StyleProperty::Left,
            Direction::Rtl => StyleProperty::Right,
        };
        Ok([
            StyleDeclaration::new(side, m.tile_position(&base, col)),
            StyleDeclaration::new(
                StyleProperty::Width,
                CssValue::Calc(m.tile_size(&base, tile.colspan())),
            ),
        ])
    }

    /// Row-axis declarations for the current mode.
    pub fn row_styles(
        &self,
        tile: &(impl TileSpan + ?Sized),
        row: usize,
    ) -> Result<[StyleDeclaration; 2], StyleError> {
        let m = self.metrics()?;
        let base = self.base_tile_height(m);
        let [offset, size] = self.row_properties();
        Ok([
            StyleDeclaration::new(offset, m.tile_position(&base, row)),
            StyleDeclaration::new(size, CssValue::Calc(m.tile_size(&base, tile.rowspan()))),
        ])
    }

    /// Computes and applies the row-axis declarations of `tile`.
    pub fn set_row_styles<T>(&self, tile: &mut T, row: usize) -> Result<(), StyleError>
    where
        T: TileSpan + StyleTarget + ?Sized,
    {
        for decl in self.row_styles(&*tile, row)? {
            tile.set_style(decl.property, Some(&decl.value));
        }
        Ok(())
    }

    /// The size the grid container must reserve, if the mode needs one.
    ///
    /// Fixed mode sets `height`, ratio mode sets `paddingBottom`, and fit
    /// mode leaves the container height to the host.
    pub fn computed_height(&self) -> Result<Option<StyleDeclaration>, StyleError> {
        let m = self.metrics()?;
        let Some(property) = self.list_property() else {
            return Ok(None);
        };
        let base = self.base_tile_height(m);
        let total = m.tile_span(&base).plus(m.gutter_span());
        Ok(Some(StyleDeclaration::new(property, CssValue::Calc(total))))
    }

    /// Clears everything this styler's mode writes, on the container and on
    /// every tile.
    ///
    /// Use this on the outgoing styler when switching modes, so that stale
    /// row geometry from the old mode does not linger. Column-axis styles
    /// are shared by all modes and are left alone.
    pub fn reset<'t, T>(
        &self,
        list: &mut (impl StyleTarget + ?Sized),
        tiles: impl IntoIterator<Item = &'t mut T>,
    ) where
        T: StyleTarget + ?Sized + 't,
    {
        if let Some(property) = self.list_property() {
            list.set_style(property, None);
        }
        let [offset, size] = self.row_properties();
        for tile in tiles {
            tile.set_style(offset, None);
            tile.set_style(size, None);
        }
    }

    fn row_properties(&self) -> [StyleProperty; 2] {
        match self.mode {
            RowHeightMode::Fixed(_) | RowHeightMode::Fit => {
                [StyleProperty::Top, StyleProperty::Height]
            }
            RowHeightMode::Ratio(_) => [StyleProperty::MarginTop, StyleProperty::PaddingTop],
        }
    }

    fn list_property(&self) -> Option<StyleProperty> {
        match self.mode {
            RowHeightMode::Fixed(_) => Some(StyleProperty::Height),
            RowHeightMode::Ratio(_) => Some(StyleProperty::PaddingBottom),
            RowHeightMode::Fit => None,
        }
    }

    /// Height of a single-row tile before gutters are added back.
    fn base_tile_height(&self, m: &GridMetrics) -> CalcExpr {
        match &self.mode {
            RowHeightMode::Fixed(height) => height.clone().into(),
            RowHeightMode::Ratio(ratio) => m.base_tile_size(
                m.percent_width_per_tile() / ratio,
                m.gutter_width_fraction(),
            ),
            RowHeightMode::Fit => {
                let rows = m.rows as f64;
                m.base_tile_size(100.0 / m.rowspan as f64, (rows - 1.0) / rows)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::*;
    use crate::{Tile, compute_layout};

    #[derive(Default)]
    struct Recorded {
        tile: Tile,
        styles: Vec<(StyleProperty, Option<String>)>,
    }

    impl Recorded {
        fn new(rowspan: usize, colspan: usize) -> Self {
            Self {
                tile: Tile::new(rowspan, colspan),
                styles: Vec::new(),
            }
        }

        fn get(&self, property: StyleProperty) -> Option<&str> {
            self.styles
                .iter()
                .rev()
                .find(|(p, _)| *p == property)
                .and_then(|(_, v)| v.as_deref())
        }
    }

    impl TileSpan for Recorded {
        fn rowspan(&self) -> usize {
            self.tile.rowspan
        }

        fn colspan(&self) -> usize {
            self.tile.colspan
        }
    }

    impl StyleTarget for Recorded {
        fn set_style(&mut self, property: StyleProperty, value: Option<&CssValue>) {
            self.styles.push((property, value.map(ToString::to_string)));
        }
    }

    fn init(styler: &mut TileStyler, cols: usize, tiles: &[Tile]) {
        let layout = compute_layout(cols, tiles).unwrap();
        styler.init("1px", &layout, Direction::Ltr).unwrap();
    }

    #[test]
    fn fixed_first_row() {
        let mut styler = TileStyler::fixed("100px");
        init(&mut styler, 1, &[Tile::default()]);
        let [top, height] = styler.row_styles(&Tile::default(), 0).unwrap();
        assert_eq!(top, StyleDeclaration::new(StyleProperty::Top, CssValue::Zero));
        assert_eq!(height.property, StyleProperty::Height);
        assert_eq!(height.value.to_string(), "calc((100px * 1) + (0 * 1px))");
    }

    #[test]
    fn fixed_later_row_and_container() {
        let mut styler = TileStyler::fixed("50");
        init(&mut styler, 1, &[Tile::default(), Tile::new(2, 1)]);
        let [top, height] = styler.row_styles(&Tile::new(2, 1), 1).unwrap();
        assert_eq!(top.value.to_string(), "calc((50px + 1px) * 1)");
        assert_eq!(height.value.to_string(), "calc((50px * 2) + (1 * 1px))");

        let container = styler.computed_height().unwrap().unwrap();
        assert_eq!(container.property, StyleProperty::Height);
        assert_eq!(
            container.value.to_string(),
            "calc(3 * (50px * 1) + (0 * 1px) + 1px * (3 - 1))"
        );
    }

    #[test]
    fn fixed_rejects_non_calc_height() {
        let layout = compute_layout(1, [Tile::default()]).unwrap();
        let mut styler = TileStyler::fixed("auto");
        assert_eq!(
            styler.init("1px", &layout, Direction::Ltr),
            Err(StyleError::InvalidRowHeight("auto".into()))
        );
        assert!(!styler.is_initialized());
        assert_eq!(
            styler.tile_style(&Tile::default(), 0, 0),
            Err(StyleError::NotInitialized)
        );
    }

    #[test]
    fn column_axis_uses_gutter_fraction() {
        let mut styler = TileStyler::fit();
        init(&mut styler, 3, &[Tile::new(1, 2), Tile::default()]);
        let [left, width] = styler.col_styles(&Tile::new(1, 2), 0).unwrap();
        assert_eq!(left.value, CssValue::Zero);
        assert_eq!(
            width.value.to_string(),
            "calc(((33.333333333333336% - (1px * 0.6666666666666666)) * 2) + (1 * 1px))"
        );
        let [left, _] = styler.col_styles(&Tile::default(), 2).unwrap();
        assert_eq!(
            left.value.to_string(),
            "calc(((33.333333333333336% - (1px * 0.6666666666666666)) + 1px) * 2)"
        );
    }

    #[test]
    fn rtl_anchors_from_the_right() {
        let layout = compute_layout(2, [Tile::default()]).unwrap();
        let mut styler = TileStyler::fit();
        styler.init("4", &layout, Direction::Rtl).unwrap();
        let style = styler.tile_style(&Tile::default(), 0, 1).unwrap();
        assert_eq!(style.inline_offset.property, StyleProperty::Right);
        assert!(style.get(StyleProperty::Left).is_none());
        assert_eq!(
            style.inline_offset.value.to_string(),
            "calc(((50% - (4px * 0.5)) + 4px) * 1)"
        );
    }

    #[test]
    fn ratio_parsing() {
        assert_eq!(
            TileStyler::ratio("bad"),
            Err(StyleError::InvalidRatio("bad".into()))
        );
        assert!(TileStyler::ratio("1:2:3").is_err());
        assert!(TileStyler::ratio("a:b").is_err());
        assert!(TileStyler::ratio("1:0").is_err());
        let styler = TileStyler::ratio("4:3").unwrap();
        assert_eq!(styler.row_height_ratio(), Some(4.0 / 3.0));
        assert_eq!(TileStyler::ratio(" 2 : 1 ").unwrap().row_height_ratio(), Some(2.0));
    }

    #[test]
    fn ratio_rows_use_margin_and_padding() {
        let mut styler = TileStyler::ratio("2:1").unwrap();
        init(&mut styler, 2, &[Tile::default(), Tile::default(), Tile::default()]);
        let [offset, size] = styler.row_styles(&Tile::default(), 1).unwrap();
        assert_eq!(offset.property, StyleProperty::MarginTop);
        assert_eq!(offset.value.to_string(), "calc(((25% - (1px * 0.5)) + 1px) * 1)");
        assert_eq!(size.property, StyleProperty::PaddingTop);
        assert_eq!(size.value.to_string(), "calc(((25% - (1px * 0.5)) * 1) + (0 * 1px))");

        let container = styler.computed_height().unwrap().unwrap();
        assert_eq!(container.property, StyleProperty::PaddingBottom);
        assert_eq!(
            container.value.to_string(),
            "calc(2 * ((25% - (1px * 0.5)) * 1) + (0 * 1px) + 1px * (2 - 1))"
        );
    }

    #[test]
    fn fit_rows_share_height() {
        let tiles = [Tile::new(2, 1), Tile::default(), Tile::default()];
        let mut styler = TileStyler::fit();
        init(&mut styler, 2, &tiles);
        // Two rows start tiles, the first tile spans both.
        let [top, height] = styler.row_styles(&tiles[2], 1).unwrap();
        assert_eq!(top.value.to_string(), "calc(((50% - (1px * 0.5)) + 1px) * 1)");
        assert_eq!(height.value.to_string(), "calc(((50% - (1px * 0.5)) * 1) + (0 * 1px))");
        assert_eq!(styler.computed_height(), Ok(None));
    }

    #[test]
    fn set_style_applies_column_then_row() {
        let mut styler = TileStyler::fixed("10px");
        init(&mut styler, 1, &[Tile::default()]);
        let mut tile = Recorded::new(1, 1);
        styler.set_style(&mut tile, 0, 0).unwrap();
        let order: Vec<_> = tile.styles.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            order,
            [
                StyleProperty::Left,
                StyleProperty::Width,
                StyleProperty::Top,
                StyleProperty::Height
            ]
        );
        assert_eq!(tile.get(StyleProperty::Top), Some("0"));

        let mut tile = Recorded::new(1, 1);
        styler.set_row_styles(&mut tile, 0).unwrap();
        assert_eq!(tile.styles.len(), 2);
    }

    #[test]
    fn reset_clears_mode_properties() {
        let mut list = Recorded::default();
        let mut tiles = [Recorded::new(1, 1), Recorded::new(1, 1)];

        let mut fixed = TileStyler::fixed("10px");
        init(&mut fixed, 2, &[Tile::default(), Tile::default()]);
        for (col, tile) in tiles.iter_mut().enumerate() {
            fixed.set_style(tile, 0, col).unwrap();
        }
        let height = fixed.computed_height().unwrap().unwrap();
        list.set_style(height.property, Some(&height.value));

        fixed.reset(&mut list, tiles.iter_mut());
        assert_eq!(list.get(StyleProperty::Height), None);
        for tile in &tiles {
            assert_eq!(tile.get(StyleProperty::Top), None);
            assert_eq!(tile.get(StyleProperty::Height), None);
            assert!(tile.get(StyleProperty::Width).is_some());
        }

        let ratio = TileStyler::ratio("1:1").unwrap();
        ratio.reset(&mut list, tiles.iter_mut());
        assert_eq!(
            list.styles.last(),
            Some(&(StyleProperty::PaddingBottom, None))
        );
        assert_eq!(
            tiles[0].styles[tiles[0].styles.len() - 2..],
            [(StyleProperty::MarginTop, None), (StyleProperty::PaddingTop, None)]
        );

        let before = list.styles.len();
        TileStyler::fit().reset(&mut list, tiles.iter_mut());
        assert_eq!(list.styles.len(), before);
    }

    #[test]
    fn parse_selects_mode() {
        assert_eq!(RowHeightMode::parse("fit"), Ok(RowHeightMode::Fit));
        assert_eq!(RowHeightMode::parse("3:1"), Ok(RowHeightMode::Ratio(3.0)));
        assert_eq!(
            RowHeightMode::parse("48"),
            Ok(RowHeightMode::Fixed(CssLength::normalize("48px")))
        );
        assert!(RowHeightMode::parse("x:").is_err());
    }
}
