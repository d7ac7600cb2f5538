//! π Digit Generation
//!
//! A Rabinowitz–Wagon spigot producing decimal digits of π with nothing but
//! `u32` arithmetic. It runs once at startup purely to spin the CPU out of
//! its low-power state before the timed sweep; the digits themselves are
//! only ever displayed.

use crate::measure::{Timer, TimingSample};

/// First `count` decimal digits of π, most significant first, no decimal
/// point. `count == 0` yields the empty string.
///
/// The spigot simulates long division across a base-mixed radix array: the
/// divisor at position `j` (counting from the end) is `2*(L-j-1)+1` and each
/// quotient carries into the next position scaled by `L-j-1`. One extra
/// digit is computed and dropped so the final carry-propagation pass can
/// resolve partial digits that are off by one.
pub fn digits_of_pi(count: usize) -> String {
    if count == 0 {
        return String::new();
    }

    let digits = count + 1;
    let len = digits * 10 / 3 + 2;

    let mut x = vec![20u32; len];
    let mut r = vec![0u32; len];
    let mut pi = vec![0u32; digits];

    for slot in pi.iter_mut() {
        let mut carry = 0u32;
        for j in 0..len {
            let num = (len - j - 1) as u32;
            let dem = num * 2 + 1;

            x[j] += carry;
            let q = x[j] / dem;
            r[j] = x[j] % dem;
            carry = q * num;
        }

        *slot = x[len - 1] / 10;
        r[len - 1] = x[len - 1] % 10;

        for j in 0..len {
            x[j] = r[j] * 10;
        }
    }

    // Instantaneous digits can be one short of a carry that only resolves
    // later; propagate from the least significant end before rendering.
    let mut out = vec![0u8; digits];
    let mut carry = 0u32;
    for (slot, byte) in pi.iter().zip(out.iter_mut()).rev() {
        let d = slot + carry;
        carry = d / 10;
        *byte = b'0' + (d % 10) as u8;
    }

    out.truncate(count);
    // Bytes are all ASCII digits by construction.
    String::from_utf8(out).unwrap_or_default()
}

/// Result of the warm-up run: the digits plus the time they took.
#[derive(Debug, Clone)]
pub struct WarmupResult {
    /// The generated digits.
    pub digits: String,
    /// Time spent inside the spigot.
    pub sample: TimingSample,
}

/// Run the spigot under a timer. Used once before the sweep to defeat CPU
/// frequency scaling; the elapsed time is informational only.
pub fn warm_up(count: usize) -> WarmupResult {
    let timer = Timer::start();
    let digits = digits_of_pi(count);
    let sample = timer.stop();
    WarmupResult { digits, sample }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_digits_is_empty() {
        assert_eq!(digits_of_pi(0), "");
    }

    #[test]
    fn first_digit() {
        assert_eq!(digits_of_pi(1), "3");
    }

    #[test]
    fn first_five_digits() {
        assert_eq!(digits_of_pi(5), "31415");
    }

    #[test]
    fn thirty_digit_prefix() {
        assert_eq!(digits_of_pi(30), "314159265358979323846264338327");
    }

    #[test]
    fn exact_length_and_charset() {
        for count in [1, 2, 7, 50, 100] {
            let digits = digits_of_pi(count);
            assert_eq!(digits.len(), count);
            assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn longer_runs_extend_shorter_ones() {
        let short = digits_of_pi(40);
        let long = digits_of_pi(80);
        assert!(long.starts_with(&short));
    }

    #[test]
    fn warm_up_reports_digits_and_time() {
        let result = warm_up(200);
        assert_eq!(result.digits.len(), 200);
        assert!(result.sample.elapsed > std::time::Duration::ZERO);
    }
}
