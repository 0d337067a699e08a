//! Degree/radian adaptation for the evaluator's trig functions.
//!
//! Forward functions scale their input on the way in; inverse functions
//! scale their output on the way out. Radians mode is a pass-through.

use std::fmt;

/// Angle unit used when evaluating trig functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Raw radians (the evaluator's native unit).
    #[default]
    Radians,
    /// Degrees, converted at the adapter boundary.
    Degrees,
}

impl AngleUnit {
    /// The other unit.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Radians => AngleUnit::Degrees,
            AngleUnit::Degrees => AngleUnit::Radians,
        }
    }

    /// Short selector label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Radians => "rad",
            AngleUnit::Degrees => "deg",
        }
    }

    /// Parse a unit name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rad" | "radians" => Some(AngleUnit::Radians),
            "deg" | "degrees" => Some(AngleUnit::Degrees),
            _ => None,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trig functions subject to angle-unit adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl TrigFn {
    /// All adapted functions.
    pub const ALL: [TrigFn; 6] = [
        TrigFn::Sin,
        TrigFn::Cos,
        TrigFn::Tan,
        TrigFn::Asin,
        TrigFn::Acos,
        TrigFn::Atan,
    ];

    /// The evaluator-facing function name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
            TrigFn::Asin => "asin",
            TrigFn::Acos => "acos",
            TrigFn::Atan => "atan",
        }
    }

    /// Look up a function by its evaluator-facing name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TrigFn::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Inverse functions scale their output rather than their input.
    #[must_use]
    pub fn is_inverse(self) -> bool {
        matches!(self, TrigFn::Asin | TrigFn::Acos | TrigFn::Atan)
    }

    fn base(self, x: f64) -> f64 {
        match self {
            TrigFn::Sin => x.sin(),
            TrigFn::Cos => x.cos(),
            TrigFn::Tan => x.tan(),
            TrigFn::Asin => x.asin(),
            TrigFn::Acos => x.acos(),
            TrigFn::Atan => x.atan(),
        }
    }
}

/// Apply `func` to `x` under the given angle unit.
///
/// Domain errors are not caught here; out-of-range inputs to the inverse
/// functions produce NaN, which the evaluation bridge surfaces as a failure.
#[must_use]
pub fn apply(unit: AngleUnit, func: TrigFn, x: f64) -> f64 {
    let input = if unit == AngleUnit::Degrees && !func.is_inverse() {
        x.to_radians()
    } else {
        x
    };
    let output = func.base(input);
    if unit == AngleUnit::Degrees && func.is_inverse() {
        output.to_degrees()
    } else {
        output
    }
}

/// Apply `func` element-wise over a sequence, preserving its shape.
#[must_use]
pub fn apply_all(unit: AngleUnit, func: TrigFn, values: &[f64]) -> Vec<f64> {
    values.iter().map(|&x| apply(unit, func, x)).collect()
}
