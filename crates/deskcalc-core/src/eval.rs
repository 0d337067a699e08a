//! Bridge to the external expression evaluator.
//!
//! The buffer text is handed to [`meval`] unmodified; the only extension is
//! that the six trig functions are installed into the evaluation context
//! wrapped by the angle adapter, so the configured unit applies.

use tracing::debug;

use crate::angle::{self, AngleUnit, TrigFn};

/// Error from evaluating a buffer. Callers surface a single user-visible
/// `Error` marker regardless of the variant.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The expression could not be parsed or evaluated.
    #[error("invalid expression: {0}")]
    Invalid(#[from] meval::Error),

    /// The result is undefined (domain error such as `asin(2)`).
    #[error("undefined result")]
    Undefined,
}

/// Evaluator with the angle-aware trig functions installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    unit: AngleUnit,
}

impl Evaluator {
    /// Create an evaluator using the given angle unit.
    #[must_use]
    pub fn new(unit: AngleUnit) -> Self {
        Self { unit }
    }

    /// The current angle unit.
    #[must_use]
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Change the angle unit. Affects subsequent evaluations only.
    pub fn set_unit(&mut self, unit: AngleUnit) {
        self.unit = unit;
    }

    /// Evaluate an expression to a number.
    ///
    /// Results with magnitude below the smallest representable difference
    /// from zero are normalized to exactly zero.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let expr: meval::Expr = expression.parse()?;
        let mut value = expr.eval_with_context(self.context())?;
        if value.is_nan() {
            return Err(EvalError::Undefined);
        }
        if value.abs() < f64::EPSILON {
            value = 0.0;
        }
        debug!(expression, value, "evaluated");
        Ok(value)
    }

    fn context(&self) -> meval::Context<'static> {
        let mut ctx = meval::Context::new();
        let unit = self.unit;
        for func in TrigFn::ALL {
            ctx.func(func.name(), move |x| angle::apply(unit, func, x));
        }
        ctx
    }
}

/// Format an evaluation result the way the display shows it.
///
/// Finite values use the shortest round-trip form; non-finite values use
/// the spelled-out markers the original environment produced.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value}")
    }
}
