// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS lengths and `calc()` expressions.
//!
//! Tile geometry mixes percentages (a share of the container) with absolute
//! gutter lengths, so it cannot be reduced to a single number without knowing
//! the container size. The styler therefore builds [`CalcExpr`] trees and
//! renders them as `calc(...)` text for a CSS engine to evaluate.
//!
//! Hosts that are not CSS engines can evaluate the same trees with
//! [`CalcExpr::resolve`], which understands `px` and `%` operands. A
//! percentage resolves against the basis the caller passes in; any other unit
//! makes resolution return `None`.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

/// A CSS length operand such as `1px`, `2.5em` or `50%`.
///
/// Lengths are stored as text so that they render exactly as written. Bare
/// numbers are normalized to pixels on construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CssLength(String);

impl CssLength {
    /// Normalizes `value` into a length, appending `px` when it has no unit.
    ///
    /// A value "has a unit" when it ends in an ASCII letter or `%`.
    ///
    /// ```rust
    /// use understory_tile_grid::CssLength;
    ///
    /// assert_eq!(CssLength::normalize("4").as_str(), "4px");
    /// assert_eq!(CssLength::normalize("1.5em").as_str(), "1.5em");
    /// assert_eq!(CssLength::normalize("10%").as_str(), "10%");
    /// ```
    #[must_use]
    pub fn normalize(value: &str) -> Self {
        if value.ends_with(|c: char| c.is_ascii_alphabetic() || c == '%') {
            Self(value.into())
        } else {
            Self(format!("{value}px"))
        }
    }

    /// Creates a percentage length.
    #[must_use]
    pub fn percent(value: f64) -> Self {
        Self(format!("{value}%"))
    }

    /// Returns the length as CSS text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the length can be spliced into a `calc()` expression.
    ///
    /// Accepted values are an optionally negative integer part followed by
    /// any sequence of `.digits` fractions and single unit characters
    /// (letters, `%` or `$`), i.e. `^-?\d+((\.\d+)?[A-Za-z%$]?)+$`.
    #[must_use]
    pub fn is_calc_operand(&self) -> bool {
        let rest = self.0.strip_prefix('-').unwrap_or(&self.0);
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return false;
        }
        let mut bytes = rest.as_bytes()[digits..].iter().peekable();
        while let Some(&byte) = bytes.next() {
            match byte {
                b'.' => {
                    let mut fraction = 0_usize;
                    while bytes.next_if(|next| next.is_ascii_digit()).is_some() {
                        fraction += 1;
                    }
                    if fraction == 0 {
                        return false;
                    }
                }
                b'%' | b'$' => {}
                other if other.is_ascii_alphabetic() => {}
                _ => return false,
            }
        }
        true
    }

    /// Splits the length into its numeric value and unit suffix.
    #[must_use]
    pub fn split_unit(&self) -> Option<(f64, &str)> {
        let text = self.0.as_str();
        let split = text
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .unwrap_or(text.len());
        let (number, unit) = text.split_at(split);
        Some((number.parse().ok()?, unit))
    }

    /// Resolves the length to pixels.
    ///
    /// Percentages are taken of `percent_basis`. Units other than `px` and
    /// `%` cannot be resolved without font or viewport metrics and yield
    /// `None`.
    #[must_use]
    pub fn resolve(&self, percent_basis: f64) -> Option<f64> {
        let (value, unit) = self.split_unit()?;
        match unit {
            "px" => Some(value),
            "%" => Some(value * percent_basis / 100.0),
            _ => None,
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An arithmetic expression inside `calc()`.
///
/// The tree mirrors how a CSS engine parses the rendered text: `*` binds
/// tighter than `+` and `-`, and explicit parentheses are [`CalcExpr::Group`]
/// nodes. Rendering never inserts parentheses on its own, so builders must
/// group operands whose precedence would otherwise change.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcExpr {
    /// A unitless number.
    Number(f64),
    /// A length operand.
    Length(CssLength),
    /// A parenthesized sub-expression.
    Group(Box<Self>),
    /// `lhs + rhs`.
    Add(Box<Self>, Box<Self>),
    /// `lhs - rhs`.
    Sub(Box<Self>, Box<Self>),
    /// `lhs * rhs`.
    Mul(Box<Self>, Box<Self>),
}

impl CalcExpr {
    /// Wraps `self` in parentheses.
    #[must_use]
    pub fn grouped(self) -> Self {
        Self::Group(Box::new(self))
    }

    /// Builds `self + rhs`.
    #[must_use]
    pub fn plus(self, rhs: Self) -> Self {
        Self::Add(Box::new(self), Box::new(rhs))
    }

    /// Builds `self - rhs`.
    #[must_use]
    pub fn minus(self, rhs: Self) -> Self {
        Self::Sub(Box::new(self), Box::new(rhs))
    }

    /// Builds `self * rhs`.
    #[must_use]
    pub fn times(self, rhs: Self) -> Self {
        Self::Mul(Box::new(self), Box::new(rhs))
    }

    /// Evaluates the expression to a pixel length.
    ///
    /// Returns `None` if an operand uses an unsupported unit, if the
    /// expression mixes numbers and lengths in a sum, multiplies two
    /// lengths, or evaluates to a plain number.
    #[must_use]
    pub fn resolve(&self, percent_basis: f64) -> Option<f64> {
        match self.eval(percent_basis)? {
            Quantity::Length(px) => Some(px),
            Quantity::Number(_) => None,
        }
    }

    fn eval(&self, basis: f64) -> Option<Quantity> {
        Some(match self {
            Self::Number(value) => Quantity::Number(*value),
            Self::Length(length) => Quantity::Length(length.resolve(basis)?),
            Self::Group(inner) => inner.eval(basis)?,
            Self::Add(lhs, rhs) => lhs.eval(basis)?.sum(rhs.eval(basis)?, 1.0)?,
            Self::Sub(lhs, rhs) => lhs.eval(basis)?.sum(rhs.eval(basis)?, -1.0)?,
            Self::Mul(lhs, rhs) => match (lhs.eval(basis)?, rhs.eval(basis)?) {
                (Quantity::Number(a), Quantity::Number(b)) => Quantity::Number(a * b),
                (Quantity::Number(n), Quantity::Length(l))
                | (Quantity::Length(l), Quantity::Number(n)) => Quantity::Length(n * l),
                (Quantity::Length(_), Quantity::Length(_)) => return None,
            },
        })
    }
}

impl From<CssLength> for CalcExpr {
    fn from(length: CssLength) -> Self {
        Self::Length(length)
    }
}

impl fmt::Display for CalcExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Group(inner) => write!(f, "({inner})"),
            Self::Add(lhs, rhs) => write!(f, "{lhs} + {rhs}"),
            Self::Sub(lhs, rhs) => write!(f, "{lhs} - {rhs}"),
            Self::Mul(lhs, rhs) => write!(f, "{lhs} * {rhs}"),
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Quantity {
    Number(f64),
    Length(f64),
}

impl Quantity {
    fn sum(self, rhs: Self, sign: f64) -> Option<Self> {
        match (self, rhs) {
            (Self::Number(a), Self::Number(b)) => Some(Self::Number(a + sign * b)),
            (Self::Length(a), Self::Length(b)) => Some(Self::Length(a + sign * b)),
            _ => None,
        }
    }
}

/// A value assigned to a style property.
///
/// Offsets of the first row or column are the literal `0`; everything else
/// is a `calc()` expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    /// The literal `0`.
    Zero,
    /// `calc(expr)`.
    Calc(CalcExpr),
}

impl CssValue {
    /// Evaluates the value to pixels; see [`CalcExpr::resolve`].
    #[must_use]
    pub fn resolve(&self, percent_basis: f64) -> Option<f64> {
        match self {
            Self::Zero => Some(0.0),
            Self::Calc(expr) => expr.resolve(percent_basis),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::Calc(expr) => write!(f, "calc({expr})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{CalcExpr, CssLength, CssValue};

    fn px(value: &str) -> CalcExpr {
        CssLength::normalize(value).into()
    }

    #[test]
    fn normalize_appends_px_only_without_unit() {
        assert_eq!(CssLength::normalize("0").as_str(), "0px");
        assert_eq!(CssLength::normalize("1.25").as_str(), "1.25px");
        assert_eq!(CssLength::normalize("3vw").as_str(), "3vw");
        assert_eq!(CssLength::normalize("").as_str(), "px");
    }

    #[test]
    fn calc_operand_pattern() {
        for ok in ["100px", "-4px", "1.5em", "50%", "12", "7$", "1.5.25px"] {
            assert!(CssLength(ok.into()).is_calc_operand(), "{ok}");
        }
        for bad in ["px", "auto", "1.px", "100 px", "calc(1px)", "1px2", "--1px", ".5px"] {
            assert!(!CssLength(bad.into()).is_calc_operand(), "{bad}");
        }
    }

    #[test]
    fn resolve_px_and_percent() {
        assert_eq!(CssLength::normalize("12").resolve(500.0), Some(12.0));
        assert_eq!(CssLength::percent(25.0).resolve(200.0), Some(50.0));
        assert_eq!(CssLength::normalize("2em").resolve(200.0), None);
    }

    #[test]
    fn rendering_keeps_explicit_groups_only() {
        let expr = px("10px")
            .plus(px("2px"))
            .grouped()
            .times(CalcExpr::Number(3.0));
        assert_eq!(expr.to_string(), "(10px + 2px) * 3");
        assert_eq!(CssValue::Calc(expr.clone()).to_string(), "calc((10px + 2px) * 3)");
        assert_eq!(CssValue::Zero.to_string(), "0");
        assert_eq!(expr.resolve(0.0), Some(36.0));
    }

    #[test]
    fn resolve_rejects_ill_typed_expressions() {
        assert_eq!(px("1px").times(px("2px")).resolve(0.0), None);
        assert_eq!(px("1px").plus(CalcExpr::Number(2.0)).resolve(0.0), None);
        assert_eq!(CalcExpr::Number(2.0).resolve(0.0), None);
        assert_eq!(
            CalcExpr::Length(CssLength::percent(50.0))
                .minus(px("5px"))
                .resolve(100.0),
            Some(45.0)
        );
    }
}
