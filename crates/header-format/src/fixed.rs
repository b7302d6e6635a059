//! Literal formatting for the deferred fixed-point convention.
//!
//! Values are never multiplied by the resolution here. Each literal is
//! wrapped as `(long)(<value>*PRES)` and the consumer defines `PRES`.
//!
//! With [`LiteralStyle::Plain`] an integral value is written without a
//! decimal point, so `40*PRES` is evaluated in `int`. On targets with a
//! 16-bit `int` that product overflows before the `(long)` cast once
//! `PRES` is large; [`LiteralStyle::Float`] writes `40.0*PRES` instead.

use serde::{Deserialize, Serialize};

/// Decimal places kept in every emitted literal.
pub const DECIMAL_PLACES: i32 = 5;

/// Significant digits kept when rendering a literal.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Name of the resolution macro the consumer must define.
pub const RESOLUTION_MACRO: &str = "PRES";

/// How numeric literals are spelled in the tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralStyle {
    /// Shortest decimal: `0`, `1`, `2.46912`.
    #[default]
    Plain,
    /// Always carries a decimal point: `0.0`, `1.0`, `2.46912`.
    Float,
}

impl LiteralStyle {
    /// Render `value` in this style. Never uses exponent notation.
    pub fn render(self, value: f64) -> String {
        let plain = positive_zero(trim_noise(value)).to_string();
        match self {
            LiteralStyle::Float if !plain.contains('.') => plain + ".0",
            _ => plain,
        }
    }
}

/// Round to [`DECIMAL_PLACES`], halves away from zero.
pub fn round_places(value: f64) -> f64 {
    let factor = 10f64.powi(DECIMAL_PLACES);
    positive_zero((value * factor).round() / factor)
}

/// Round a vertex coordinate, then apply the scale factor.
///
/// Overflow yields an infinite value; the emitter rejects those.
pub fn scaled(value: f64, scale: f64) -> f64 {
    positive_zero(round_places(value) * scale)
}

/// Shortest plain-decimal rendering: `0`, `1`, `2.46912`, `0.00001`.
///
/// `f64`'s `Display` never switches to exponent notation, which keeps the
/// literal valid in every C dialect the header targets.
pub fn format_literal(value: f64) -> String {
    LiteralStyle::Plain.render(value)
}

/// `(long)(<value>*PRES)`
pub fn pres_term(value: f64, style: LiteralStyle) -> String {
    format!("(long)({}*{})", style.render(value), RESOLUTION_MACRO)
}

/// One `{a, b, c}` table row of `PRES` terms.
pub fn pres_row(values: [f64; 3], style: LiteralStyle) -> String {
    format!(
        "{{{}, {}, {}}}",
        pres_term(values[0], style),
        pres_term(values[1], style),
        pres_term(values[2], style)
    )
}

/// Drop binary noise left by scaling, e.g. `0.1 * 3` renders as `0.3`.
fn trim_noise(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
