//! Bounded-denominator rational approximation.
//!
//! Rate and clock-divider registers take a ratio whose denominator is
//! capped by the hardware field width. [`Fraction::approximate`] finds
//! the closest representable ratio by walking the continued-fraction
//! expansion of the target value.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// Ratio of a signed numerator over a non-zero unsigned denominator.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Fraction {
    /// Signed numerator; carries the sign of the approximated value.
    pub num: i32,
    /// Denominator, always at least 1.
    pub denom: u32,
}

impl Fraction {
    /// Best rational approximation of `value` with `denom <= max_denom`.
    ///
    /// Expands `|value|` as a continued fraction, stops once the next
    /// convergent's denominator would exceed the bound, then picks
    /// between the last in-bound convergent and the semiconvergent
    /// obtained by reducing the final partial quotient, whichever lands
    /// closer to `value`. When both candidates are equally close the
    /// smaller denominator wins.
    ///
    /// A `max_denom` of zero is treated as 1, keeping the result's
    /// denominator invariant intact.
    ///
    /// The caller must keep `|num| * max_denom` within `i32` range and
    /// pass a finite `value`. Outside those bounds the result is
    /// unspecified, though never unsound: the arithmetic saturates
    /// instead of wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use capwire::fraction::Fraction;
    ///
    /// let thirds = Fraction::approximate(0.333_333_333, 100);
    /// assert_eq!(thirds, Fraction { num: 1, denom: 3 });
    ///
    /// let pi = Fraction::approximate(std::f64::consts::PI, 100);
    /// assert_eq!(pi, Fraction { num: 311, denom: 99 });
    /// ```
    #[must_use]
    pub fn approximate(value: f64, max_denom: u32) -> Self {
        debug_assert!(value.is_finite(), "cannot approximate {value}");
        if value == 0.0 {
            return Self { num: 0, denom: 1 };
        }
        let bound = u64::from(max_denom.max(1));
        let target = value.abs();

        // Convergent recurrence state, one and two steps back.
        let (mut p_prev, mut q_prev) = (1_u64, 0_u64);
        let (mut p_prev2, mut q_prev2) = (0_u64, 1_u64);
        let mut x = target;
        let (p, q) = loop {
            let a = integer_part(x);
            let q = a.saturating_mul(q_prev).saturating_add(q_prev2);
            if q > bound {
                // Largest reduced quotient whose denominator stays in
                // bound. `q_prev` is non-zero here: the first convergent
                // has denominator 1, which never exceeds `bound`.
                let t = (bound - q_prev2) / q_prev;
                let semi = (
                    t.saturating_mul(p_prev).saturating_add(p_prev2),
                    t * q_prev + q_prev2,
                );
                break closer_to(target, (p_prev, q_prev), semi);
            }
            let p = a.saturating_mul(p_prev).saturating_add(p_prev2);
            let fractional = x - x.floor();
            if fractional == 0.0 {
                break (p, q);
            }
            (p_prev2, q_prev2) = (p_prev, q_prev);
            (p_prev, q_prev) = (p, q);
            x = fractional.recip();
        };

        #[expect(
            clippy::cast_possible_truncation,
            reason = "The numerator bound is the caller's documented obligation."
        )]
        let magnitude = p as i32;
        let num = if value < 0.0 { -magnitude } else { magnitude };
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The denominator never exceeds the u32 bound."
        )]
        let denom = q as u32;
        Self { num, denom }
    }

    /// The ratio as a floating value.
    ///
    /// # Examples
    ///
    /// ```
    /// use capwire::fraction::Fraction;
    ///
    /// let half = Fraction { num: -1, denom: 2 };
    /// assert_eq!(half.value(), -0.5);
    /// ```
    #[must_use]
    pub fn value(self) -> f64 { f64::from(self.num) / f64::from(self.denom) }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// Integer part of a non-negative finite value, saturating on overflow
/// so that downstream comparisons stay defined for misuse-range inputs.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The input is non-negative and `as` saturates out-of-range floats."
)]
fn integer_part(x: f64) -> u64 { x.floor() as u64 }

/// Whichever candidate ratio lies closer to `target`; ties favour the
/// smaller denominator.
fn closer_to(target: f64, first: (u64, u64), second: (u64, u64)) -> (u64, u64) {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Candidates stay within the i32 numerator obligation."
    )]
    let error = |(p, q): (u64, u64)| ((p as f64) / (q as f64) - target).abs();
    match error(first).partial_cmp(&error(second)) {
        Some(Ordering::Less) => first,
        Some(Ordering::Greater) => second,
        _ => {
            if first.1 <= second.1 {
                first
            } else {
                second
            }
        }
    }
}
