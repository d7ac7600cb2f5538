//! Human Output
//!
//! Terminal tables for the sweep report: one table per step with the
//! accumulated value, the delta against the decimal baseline, the loop time,
//! and the relative speed versus the decimal kind, followed by the final
//! time-in-math / overhead split.

use numbench_core::KindValue;
use rust_decimal::Decimal;

use crate::report::SweepReport;

/// Format a nanosecond count with an auto-selected unit.
pub fn format_duration(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.0} ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

/// Insert thousands separators into a plain digit run.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// A whole number with thousands separators.
fn format_integer(value: u64) -> String {
    group_digits(&value.to_string())
}

/// A fixed-point rendering (10 fractional digits) with a grouped integer
/// part, for anything already formatted as `[-]int.frac` or `[-]int`.
fn group_fixed(rendered: &str) -> String {
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rest, ""),
    };
    let mut out = String::new();
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Decimal at 10 fractional digits with thousands separators.
fn format_decimal(value: &Decimal) -> String {
    group_fixed(&format!("{:.10}", value))
}

/// Accumulated value at 10 fractional digits, grouped.
fn format_value(value: &KindValue) -> String {
    match value {
        KindValue::Unsigned(u) => format!("{}.0000000000", format_integer(*u)),
        KindValue::Float(f) => {
            if f.is_finite() {
                group_fixed(&format!("{:.10}", f))
            } else {
                f.to_string()
            }
        }
        KindValue::Decimal(d) => format_decimal(d),
    }
}

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &SweepReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("numbench Results\n");
    output.push_str(&"=".repeat(98));
    output.push_str("\n\n");

    if let Some(warmup) = &report.warmup {
        output.push_str(&format!(
            "Warm-up: {} digits of pi in {}\n\n",
            format_integer(warmup.digit_count as u64),
            format_duration(warmup.elapsed_ns as f64)
        ));
    }

    for step in &report.steps {
        output.push_str(&format!("Iterations: {}\n", format_integer(step.iterations)));
        output.push_str(&format!(
            "  {:<10}{:>30}{:>30}{:>14}{:>14}\n",
            "Kind", "Value", "Delta", "Time", "vs decimal"
        ));
        output.push_str(&format!("  {}\n", "-".repeat(96)));
        output.push_str(&format!(
            "  {:<10}{:>30}\n",
            "baseline",
            format_decimal(&step.baseline)
        ));

        for entry in &step.entries {
            let delta = entry
                .delta
                .as_ref()
                .map(format_decimal)
                .unwrap_or_default();
            output.push_str(&format!(
                "  {:<10}{:>30}{:>30}{:>14}{:>13.2}x\n",
                entry.kind.label(),
                format_value(&entry.value),
                delta,
                format_duration(entry.elapsed_ns as f64),
                entry.speed_ratio
            ));
        }
        output.push('\n');
    }

    output.push_str("Summary\n");
    output.push_str(&"-".repeat(98));
    output.push('\n');
    output.push_str(&format!(
        "  {:<15}{:>16}\n",
        "Time in math",
        format_duration(report.totals.time_in_math_ns as f64)
    ));
    output.push_str(&format!(
        "  {:<15}{:>16}\n",
        "Time overall",
        format_duration(report.totals.time_overall_ns as f64)
    ));
    output.push_str(&format!(
        "  {:<15}{:>16}  ({:.4}%)\n",
        "Overhead",
        format_duration(report.totals.overhead_ns as f64),
        report.totals.overhead_ratio * 100.0
    ));

    output
}
