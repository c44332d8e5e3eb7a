//! Conversion arithmetic between GST-inclusive and GST-exclusive prices.
//!
//! GST on intra-state supplies is split into two equal halves (CGST and SGST),
//! so every breakdown carries `cgst == sgst == gst / 2` exactly.
//!
//! When a rounding increment is active, the two derived amounts of each
//! conversion are rounded *independently*. This means `total` may drift from
//! `base + gst` by up to one increment. That is the intended behavior: the
//! rounded figures are what gets printed on a price tag, not re-derived from
//! each other.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GstError {
    #[error("GST rate must be greater than zero to derive the base price")]
    InvalidRate,
}

/// Rounding applied to derived amounts.
///
/// `Nearest(r)` snaps to the closest multiple of `r` using round-half-to-even
/// midpoints (`Decimal::round`). A zero or negative increment is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rounding {
    #[default]
    None,
    Nearest(Decimal),
}

impl Rounding {
    /// Round to the nearest whole rupee
    pub fn rupee() -> Self {
        Rounding::Nearest(dec!(1))
    }

    /// Round to the nearest 50 paise
    pub fn half_rupee() -> Self {
        Rounding::Nearest(dec!(0.5))
    }

    pub fn apply(&self, amount: Decimal) -> Decimal {
        match self {
            Rounding::None => amount,
            Rounding::Nearest(increment) => {
                if increment.is_sign_positive() && !increment.is_zero() {
                    (amount / increment).round() * increment
                } else {
                    amount
                }
            }
        }
    }
}

/// A priced item broken down into base, tax and total amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GstBreakdown {
    /// Price excluding tax
    pub base: Decimal,
    /// Total tax amount
    pub gst: Decimal,
    /// Central half of the tax
    pub cgst: Decimal,
    /// State half of the tax
    pub sgst: Decimal,
    /// Price including tax
    pub total: Decimal,
    /// The percentage rate that was applied
    pub rate_pct: Decimal,
}

impl GstBreakdown {
    /// Compute the breakdown from a base price excluding GST.
    ///
    /// `rate` is a fraction (0.18 for 18%). `gst` and `total` are rounded
    /// independently; `base` is returned as supplied. The CGST/SGST split is
    /// taken from the rounded `gst`.
    pub fn from_excluded(base: Decimal, rate: Decimal, rounding: Rounding) -> GstBreakdown {
        let gst = rounding.apply(base * rate);
        let total = rounding.apply(base + base * rate);
        let half = gst / dec!(2);
        GstBreakdown {
            base,
            gst,
            cgst: half,
            sgst: half,
            total,
            rate_pct: pct(rate),
        }
    }

    /// Compute the breakdown from a total price including GST.
    ///
    /// A negative `rate` is clamped to zero. `base` and `gst` are rounded
    /// independently; `total` is returned as supplied, so `base + gst` may
    /// drift from it once rounding is active.
    pub fn from_included(total: Decimal, rate: Decimal, rounding: Rounding) -> GstBreakdown {
        let rate = if rate.is_sign_negative() {
            log::warn!("negative GST rate {} clamped to zero", rate);
            Decimal::ZERO
        } else {
            rate
        };
        let raw_base = total / (Decimal::ONE + rate);
        let base = rounding.apply(raw_base);
        let gst = rounding.apply(total - raw_base);
        let half = gst / dec!(2);
        GstBreakdown {
            base,
            gst,
            cgst: half,
            sgst: half,
            total,
            rate_pct: pct(rate),
        }
    }

    /// Derive base and total prices from a known GST amount.
    ///
    /// Fails with [`GstError::InvalidRate`] when `rate` is not positive, since
    /// `base = gst_amount / rate` is undefined at zero. The CGST/SGST halves
    /// split the supplied amount, untouched by rounding.
    pub fn from_gst_amount(
        gst_amount: Decimal,
        rate: Decimal,
        rounding: Rounding,
    ) -> Result<GstBreakdown, GstError> {
        if rate.is_zero() || rate.is_sign_negative() {
            return Err(GstError::InvalidRate);
        }
        let raw_base = gst_amount / rate;
        let base = rounding.apply(raw_base);
        let total = rounding.apply(raw_base + gst_amount);
        let half = gst_amount / dec!(2);
        Ok(GstBreakdown {
            base,
            gst: gst_amount,
            cgst: half,
            sgst: half,
            total,
            rate_pct: pct(rate),
        })
    }
}

fn pct(rate: Decimal) -> Decimal {
    (rate * dec!(100)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_no_rounding() {
        let b = GstBreakdown::from_excluded(dec!(100), dec!(0.18), Rounding::None);
        assert_eq!(b.base, dec!(100));
        assert_eq!(b.gst, dec!(18));
        assert_eq!(b.total, dec!(118));
        assert_eq!(b.rate_pct, dec!(18));
    }

    #[test]
    fn excluded_gst_is_base_times_rate() {
        for (base, rate) in [
            (dec!(0), dec!(0.05)),
            (dec!(49.99), dec!(0.12)),
            (dec!(1250), dec!(0.28)),
        ] {
            let b = GstBreakdown::from_excluded(base, rate, Rounding::None);
            assert_eq!(b.gst, base * rate);
            assert_eq!(b.total, base + b.gst);
        }
    }

    #[test]
    fn included_no_rounding() {
        let b = GstBreakdown::from_included(dec!(118), dec!(0.18), Rounding::None);
        assert_eq!(b.base, dec!(100));
        assert_eq!(b.gst, dec!(18));
        assert_eq!(b.total, dec!(118));
    }

    #[test]
    fn round_trip_excluded_then_included() {
        let tolerance = dec!(0.0000001);
        for base in [dec!(100), dec!(99.99), dec!(0.01), dec!(123456.78)] {
            let total = GstBreakdown::from_excluded(base, dec!(0.18), Rounding::None).total;
            let back = GstBreakdown::from_included(total, dec!(0.18), Rounding::None).base;
            assert!((back - base).abs() < tolerance, "{} != {}", back, base);
        }
    }

    #[test]
    fn halves_sum_to_gst_in_all_directions() {
        let excl = GstBreakdown::from_excluded(dec!(77.35), dec!(0.12), Rounding::None);
        assert_eq!(excl.cgst + excl.sgst, excl.gst);

        let incl = GstBreakdown::from_included(dec!(77.35), dec!(0.12), Rounding::half_rupee());
        assert_eq!(incl.cgst + incl.sgst, incl.gst);

        let rev = GstBreakdown::from_gst_amount(dec!(7.7), dec!(0.12), Rounding::None).unwrap();
        assert_eq!(rev.cgst + rev.sgst, rev.gst);
    }

    #[test]
    fn gst_amount_basic() {
        let b = GstBreakdown::from_gst_amount(dec!(18), dec!(0.18), Rounding::None).unwrap();
        assert_eq!(b.base, dec!(100));
        assert_eq!(b.total, dec!(118));
        assert_eq!(b.cgst, dec!(9));
        assert_eq!(b.sgst, dec!(9));
    }

    #[test]
    fn gst_amount_zero_rate_is_invalid() {
        let err = GstBreakdown::from_gst_amount(dec!(18), Decimal::ZERO, Rounding::None);
        assert_eq!(err.unwrap_err(), GstError::InvalidRate);

        let err = GstBreakdown::from_gst_amount(dec!(18), dec!(-0.05), Rounding::None);
        assert_eq!(err.unwrap_err(), GstError::InvalidRate);
    }

    #[test]
    fn included_clamps_negative_rate() {
        let b = GstBreakdown::from_included(dec!(118), dec!(-0.18), Rounding::None);
        assert_eq!(b.base, dec!(118));
        assert_eq!(b.gst, dec!(0));
        assert_eq!(b.rate_pct, dec!(0));
    }

    #[test]
    fn rounding_to_half_rupee() {
        let b = GstBreakdown::from_excluded(dec!(100), dec!(0.18), Rounding::half_rupee());
        assert_eq!(b.gst, dec!(18));
        assert_eq!(b.total, dec!(118));
    }

    #[test]
    fn rounding_to_rupee_on_included() {
        let b = GstBreakdown::from_included(dec!(118), dec!(0.18), Rounding::rupee());
        assert_eq!(b.base, dec!(100));
        assert_eq!(b.gst, dec!(18));
    }

    #[test]
    fn midpoints_round_half_to_even() {
        let r = Rounding::rupee();
        assert_eq!(r.apply(dec!(2.5)), dec!(2));
        assert_eq!(r.apply(dec!(3.5)), dec!(4));
        let half = Rounding::half_rupee();
        assert_eq!(half.apply(dec!(1.25)), dec!(1));
        assert_eq!(half.apply(dec!(1.75)), dec!(2));
    }

    #[test]
    fn zero_or_negative_increment_is_a_no_op() {
        assert_eq!(Rounding::Nearest(Decimal::ZERO).apply(dec!(1.23)), dec!(1.23));
        assert_eq!(Rounding::Nearest(dec!(-1)).apply(dec!(1.23)), dec!(1.23));
    }

    // Rounding gst and total separately can break total == base + gst.
    // Accepted drift, mirrored from the original behavior.
    #[test]
    fn independent_rounding_may_break_additivity() {
        let b = GstBreakdown::from_excluded(dec!(100.30), dec!(0.18), Rounding::rupee());
        assert_eq!(b.gst, dec!(18));
        assert_eq!(b.total, dec!(118));
        assert_ne!(b.total, b.base + b.gst);
    }

    #[test]
    fn gst_amount_rounding_leaves_halves_unrounded() {
        let b = GstBreakdown::from_gst_amount(dec!(18.3), dec!(0.18), Rounding::rupee()).unwrap();
        // base = 101.66.. -> 102, total = 119.96.. -> 120
        assert_eq!(b.base, dec!(102));
        assert_eq!(b.total, dec!(120));
        assert_eq!(b.gst, dec!(18.3));
        assert_eq!(b.cgst, dec!(9.15));
        assert_eq!(b.sgst, dec!(9.15));
    }
}
