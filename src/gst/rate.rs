use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One of the four fixed GST slabs applied to intra-state supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GstRate {
    Five,
    Twelve,
    Eighteen,
    TwentyEight,
}

impl GstRate {
    pub const ALL: [GstRate; 4] = [
        GstRate::Five,
        GstRate::Twelve,
        GstRate::Eighteen,
        GstRate::TwentyEight,
    ];

    /// Look up a slab from its whole percentage (5, 12, 18 or 28)
    pub fn from_pct(pct: u32) -> Option<GstRate> {
        match pct {
            5 => Some(GstRate::Five),
            12 => Some(GstRate::Twelve),
            18 => Some(GstRate::Eighteen),
            28 => Some(GstRate::TwentyEight),
            _ => None,
        }
    }

    pub fn pct(&self) -> u32 {
        match self {
            GstRate::Five => 5,
            GstRate::Twelve => 12,
            GstRate::Eighteen => 18,
            GstRate::TwentyEight => 28,
        }
    }

    /// The rate as a fraction, e.g. 0.18 for the 18% slab
    pub fn fraction(&self) -> Decimal {
        match self {
            GstRate::Five => dec!(0.05),
            GstRate::Twelve => dec!(0.12),
            GstRate::Eighteen => dec!(0.18),
            GstRate::TwentyEight => dec!(0.28),
        }
    }

    /// Percentage of each CGST/SGST half (e.g. 2.5 for the 5% slab)
    pub fn half_pct(&self) -> Decimal {
        (self.fraction() * dec!(50)).normalize()
    }

    /// Typical goods and services in this slab
    pub fn description(&self) -> &'static str {
        match self {
            GstRate::Five => "Essential items (some packaged foods, edible oils, etc.)",
            GstRate::Twelve => {
                "Processed foods & household items (some processed foods, computer accessories, etc.)"
            }
            GstRate::Eighteen => {
                "Electronics & most services (mobiles, many services, branded goods)"
            }
            GstRate::TwentyEight => {
                "Luxury goods (cars, cigarettes, high-end electronics, luxury items)"
            }
        }
    }
}

impl std::fmt::Display for GstRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.pct())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pct_known_slabs() {
        assert_eq!(GstRate::from_pct(5), Some(GstRate::Five));
        assert_eq!(GstRate::from_pct(12), Some(GstRate::Twelve));
        assert_eq!(GstRate::from_pct(18), Some(GstRate::Eighteen));
        assert_eq!(GstRate::from_pct(28), Some(GstRate::TwentyEight));
    }

    #[test]
    fn from_pct_rejects_other_values() {
        assert_eq!(GstRate::from_pct(0), None);
        assert_eq!(GstRate::from_pct(10), None);
        assert_eq!(GstRate::from_pct(100), None);
    }

    #[test]
    fn fractions() {
        assert_eq!(GstRate::Five.fraction(), dec!(0.05));
        assert_eq!(GstRate::Twelve.fraction(), dec!(0.12));
        assert_eq!(GstRate::Eighteen.fraction(), dec!(0.18));
        assert_eq!(GstRate::TwentyEight.fraction(), dec!(0.28));
    }

    #[test]
    fn half_pct_splits_evenly() {
        assert_eq!(GstRate::Five.half_pct(), dec!(2.5));
        assert_eq!(GstRate::Eighteen.half_pct(), dec!(9));
    }

    #[test]
    fn display() {
        assert_eq!(GstRate::Eighteen.to_string(), "18%");
        assert_eq!(GstRate::TwentyEight.to_string(), "28%");
    }
}
