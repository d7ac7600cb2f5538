//! Timed Accumulation Loops
//!
//! One accumulator per numeric representation, all updated by the same
//! per-iteration rule: the fractional kinds add `1 * 0.3` in their own type,
//! the integer kinds add the literal `1 * 2` and demonstrate plain wrap-around
//! overflow instead. The contrast in drift, stagnation, and cost between the
//! kinds is the whole point, so none of the silent behaviors are checked or
//! corrected here.
//!
//! Accumulators persist across calls: each run continues from the value the
//! previous run left behind.

use std::hint::black_box;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::measure::{Timer, TimingSample};

/// Additive step for the integer kinds (`1 * 2` per update).
pub const INT_STEP: u32 = 2;
/// Fractional step for the f32 kind.
pub const STEP_F32: f32 = 0.3;
/// Fractional step for the f64 kind.
pub const STEP_F64: f64 = 0.3;
/// Exact base-10 step for the decimal kind.
pub const STEP_DECIMAL: Decimal = dec!(0.3);

/// The five numeric representations under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    /// Unsigned 32-bit integer; wraps modulo 2^32.
    U32,
    /// Unsigned 64-bit integer; wraps modulo 2^64.
    U64,
    /// IEEE-754 single precision.
    F32,
    /// IEEE-754 double precision.
    F64,
    /// 96-bit base-10 decimal, 28 significant digits.
    Decimal,
}

impl NumericKind {
    /// Execution and display order for one sweep step.
    pub const ALL: [NumericKind; 5] = [
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::F32,
        NumericKind::F64,
        NumericKind::Decimal,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
            NumericKind::Decimal => "decimal",
        }
    }

    /// Whether this kind takes part in the delta-vs-baseline comparison.
    /// The integer kinds benchmark wrap-around addition, not the fractional
    /// multiplier, so a decimal delta is meaningless for them.
    pub fn is_fractional(&self) -> bool {
        matches!(
            self,
            NumericKind::F32 | NumericKind::F64 | NumericKind::Decimal
        )
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A snapshot of one accumulator, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KindValue {
    /// Integer kinds (the u32 value widened).
    Unsigned(u64),
    /// Float kinds (the f32 value widened).
    Float(f64),
    /// The decimal kind.
    Decimal(Decimal),
}

/// One persisted accumulator per numeric kind.
///
/// All accumulators start at zero and are never reset between sweep steps:
/// the value observed after a step at iteration count N includes the drift
/// from every smaller step already run.
#[derive(Debug, Clone, Default)]
pub struct BenchState {
    /// Unsigned 32-bit accumulator.
    pub narrow: u32,
    /// Unsigned 64-bit accumulator.
    pub wide: u64,
    /// Single-precision accumulator.
    pub single: f32,
    /// Double-precision accumulator.
    pub double: f64,
    /// High-precision decimal accumulator.
    pub decimal: Decimal,
}

impl BenchState {
    /// Fresh state with every accumulator at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply exactly `iterations` updates to the accumulator for `kind`,
    /// continuing from its current value, and return the elapsed time of
    /// the update loop alone (setup excluded).
    ///
    /// Only the decimal kind can fail, with
    /// [`SweepError::PrecisionOverflow`]; the other kinds wrap or lose
    /// precision silently.
    pub fn run(&mut self, kind: NumericKind, iterations: u64) -> Result<TimingSample, SweepError> {
        match kind {
            NumericKind::U32 => Ok(self.run_u32(iterations)),
            NumericKind::U64 => Ok(self.run_u64(iterations)),
            NumericKind::F32 => Ok(self.run_f32(iterations)),
            NumericKind::F64 => Ok(self.run_f64(iterations)),
            NumericKind::Decimal => self.run_decimal(iterations),
        }
    }

    /// Current value of the accumulator for `kind`.
    pub fn value(&self, kind: NumericKind) -> KindValue {
        match kind {
            NumericKind::U32 => KindValue::Unsigned(u64::from(self.narrow)),
            NumericKind::U64 => KindValue::Unsigned(self.wide),
            NumericKind::F32 => KindValue::Float(f64::from(self.single)),
            NumericKind::F64 => KindValue::Float(self.double),
            NumericKind::Decimal => KindValue::Decimal(self.decimal),
        }
    }

    /// Current value of the accumulator for `kind` as an exact decimal.
    /// `None` for values a decimal cannot represent (float infinities and
    /// NaN after saturation).
    pub fn value_as_decimal(&self, kind: NumericKind) -> Option<Decimal> {
        match kind {
            NumericKind::U32 => Some(Decimal::from(self.narrow)),
            NumericKind::U64 => Some(Decimal::from(self.wide)),
            NumericKind::F32 => Decimal::from_f32(self.single),
            NumericKind::F64 => Decimal::from_f64(self.double),
            NumericKind::Decimal => Some(self.decimal),
        }
    }

    // The loops below keep the step constant behind `black_box` so release
    // builds perform the additions one by one instead of folding the whole
    // loop into `value + n * step`.

    fn run_u32(&mut self, iterations: u64) -> TimingSample {
        let mut x = self.narrow;
        let timer = Timer::start();
        for _ in 0..iterations {
            x = x.wrapping_add(black_box(INT_STEP));
        }
        let sample = timer.stop();
        self.narrow = black_box(x);
        sample
    }

    fn run_u64(&mut self, iterations: u64) -> TimingSample {
        let mut x = self.wide;
        let timer = Timer::start();
        for _ in 0..iterations {
            x = x.wrapping_add(black_box(u64::from(INT_STEP)));
        }
        let sample = timer.stop();
        self.wide = black_box(x);
        sample
    }

    fn run_f32(&mut self, iterations: u64) -> TimingSample {
        let mut x = self.single;
        let timer = Timer::start();
        for _ in 0..iterations {
            x += black_box(STEP_F32);
        }
        let sample = timer.stop();
        self.single = black_box(x);
        sample
    }

    fn run_f64(&mut self, iterations: u64) -> TimingSample {
        let mut x = self.double;
        let timer = Timer::start();
        for _ in 0..iterations {
            x += black_box(STEP_F64);
        }
        let sample = timer.stop();
        self.double = black_box(x);
        sample
    }

    fn run_decimal(&mut self, iterations: u64) -> Result<TimingSample, SweepError> {
        let mut x = self.decimal;
        let timer = Timer::start();
        for _ in 0..iterations {
            x = x
                .checked_add(black_box(STEP_DECIMAL))
                .ok_or(SweepError::PrecisionOverflow)?;
        }
        let sample = timer.stop();
        self.decimal = black_box(x);
        Ok(sample)
    }
}
