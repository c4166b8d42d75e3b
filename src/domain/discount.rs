use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::catalog::MaterialTier;

/// A named discount staff can apply to a single cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountBand {
    pub id: u32,
    pub title: String,
    pub tier: MaterialTier,
    pub percentage: BigDecimal,
}

/// A counter coupon applied to the whole order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub title: String,
    pub percentage: BigDecimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl Coupon {
    /// Coupon value in currency, taken on the line-discounted total.
    pub fn amount_on(&self, discounted_total: &BigDecimal) -> BigDecimal {
        discounted_total * &self.percentage / BigDecimal::from(100)
    }
}

/// The counter's standard bands: 5 % to 100 % in steps of 5 for each tier.
/// Gold/diamond bands take IDs 1–20, silver bands 21–40.
pub fn standard_bands() -> Vec<DiscountBand> {
    let mut bands = Vec::with_capacity(40);
    for (offset, tier) in [(0u32, MaterialTier::GoldDiamond), (20, MaterialTier::Silver)] {
        for step in 1..=20u32 {
            bands.push(DiscountBand {
                id: offset + step,
                title: tier.band_title().to_string(),
                tier,
                percentage: BigDecimal::from(step * 5),
            });
        }
    }
    bands
}
