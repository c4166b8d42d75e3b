use super::catalog::MaterialTier;
use super::discount::{Coupon, DiscountBand};

/// Read access to the discount bands and counter coupons staff can apply.
pub trait DiscountCatalog: Send + Sync + 'static {
    fn band(&self, id: u32) -> Option<DiscountBand>;
    fn bands_for_tier(&self, tier: MaterialTier) -> Vec<DiscountBand>;
    /// Looks a coupon up by code, ignoring case and surrounding whitespace.
    fn coupon(&self, code: &str) -> Option<Coupon>;
}
