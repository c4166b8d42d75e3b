use std::collections::HashMap;
use std::path::Path;

use crate::domain::catalog::MaterialTier;
use crate::domain::discount::{standard_bands, Coupon, DiscountBand};
use crate::domain::errors::DomainError;
use crate::domain::ports::DiscountCatalog;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::InvalidInput(e.to_string())
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Discount catalog held in memory; read-only once built.
pub struct InMemoryDiscountCatalog {
    bands: Vec<DiscountBand>,
    coupons: HashMap<String, Coupon>,
}

fn coupon_key(code: &str) -> String {
    code.trim().to_uppercase()
}

impl InMemoryDiscountCatalog {
    pub fn new(bands: Vec<DiscountBand>, coupons: Vec<Coupon>) -> Self {
        let coupons = coupons
            .into_iter()
            .map(|c| (coupon_key(&c.code), c))
            .collect();
        Self { bands, coupons }
    }

    /// Standard bands and no coupons.
    pub fn standard() -> Self {
        Self::new(standard_bands(), Vec::new())
    }

    /// Standard bands plus the coupons listed in a JSON array file.
    pub fn with_coupons_file(path: &Path) -> Result<Self, DomainError> {
        let text = std::fs::read_to_string(path)?;
        let coupons: Vec<Coupon> = serde_json::from_str(&text)?;
        log::info!("Loaded {} coupons from {}", coupons.len(), path.display());
        Ok(Self::new(standard_bands(), coupons))
    }
}

impl DiscountCatalog for InMemoryDiscountCatalog {
    fn band(&self, id: u32) -> Option<DiscountBand> {
        self.bands.iter().find(|b| b.id == id).cloned()
    }

    fn bands_for_tier(&self, tier: MaterialTier) -> Vec<DiscountBand> {
        self.bands.iter().filter(|b| b.tier == tier).cloned().collect()
    }

    fn coupon(&self, code: &str) -> Option<Coupon> {
        self.coupons.get(&coupon_key(code)).cloned()
    }
}
