use bigdecimal::BigDecimal;

use crate::domain::adjustments::{parse_amount, validate_discount_percent, AdjustmentsInput};
use crate::domain::calculator::{compute_discounted_total, compute_invoice_totals};
use crate::domain::catalog::MaterialTier;
use crate::domain::discount::{Coupon, DiscountBand};
use crate::domain::errors::{DomainError, ValidationError};
use crate::domain::invoice::{InvoiceTotals, LineItem, OrderAdjustments};
use crate::domain::kitty::{summarize, KittyEnrollment, KittySummary};
use crate::domain::ports::DiscountCatalog;

/// A cart line as it arrives from the cart service, amounts still unparsed.
#[derive(Debug, Clone)]
pub struct CartLineInput {
    pub unit_price: String,
    pub quantity: i64,
    pub is_precious_material: bool,
    pub discount_band_id: Option<u32>,
    pub discount_percent: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CartInput {
    pub lines: Vec<CartLineInput>,
    pub adjustments: AdjustmentsInput,
    pub coupon_code: Option<String>,
}

/// Totals plus every input that was rejected on the way in.
#[derive(Debug, Clone)]
pub struct Quote {
    pub totals: InvoiceTotals,
    pub rejections: Vec<ValidationError>,
}

pub struct BillingService<C> {
    catalog: C,
    gst_rate: BigDecimal,
}

impl<C: DiscountCatalog> BillingService<C> {
    pub fn new(catalog: C, gst_rate: BigDecimal) -> Self {
        Self { catalog, gst_rate }
    }

    /// Prices a cart. Never fails: rejected inputs fall back to zero (or to
    /// full price for a line discount) and are listed in the quote.
    pub fn quote(&self, cart: &CartInput) -> Quote {
        let mut rejections = Vec::new();

        let items: Vec<LineItem> = cart
            .lines
            .iter()
            .map(|line| self.price_line(line, &mut rejections))
            .collect();

        let (mut adjustments, adjustment_rejections) =
            OrderAdjustments::from_input(&cart.adjustments);
        rejections.extend(adjustment_rejections);
        adjustments.set_gst_rate(self.gst_rate.clone());

        if let Some(code) = cart.coupon_code.as_deref().filter(|c| !c.trim().is_empty()) {
            self.apply_coupon(code, &items, &mut adjustments, &mut rejections);
        }

        let totals = compute_invoice_totals(&items, &adjustments);

        for rejection in &rejections {
            log::warn!("Rejected checkout input: {}", rejection);
        }
        log::debug!(
            "Quoted {} lines: subtotal={} final_total={}",
            totals.lines.len(),
            totals.subtotal,
            totals.final_total
        );

        Quote { totals, rejections }
    }

    fn price_line(&self, line: &CartLineInput, rejections: &mut Vec<ValidationError>) -> LineItem {
        let unit_price = parse_amount("unit_price", &line.unit_price).unwrap_or_else(|e| {
            rejections.push(e);
            BigDecimal::from(0)
        });

        let quantity = match u32::try_from(line.quantity) {
            Ok(q) if q >= 1 => q,
            _ => {
                rejections.push(ValidationError::QuantityOutOfRange(line.quantity));
                1
            }
        };

        let mut item = LineItem::new(unit_price, quantity, line.is_precious_material);
        let tier = MaterialTier::from_precious(line.is_precious_material);

        if let Some(band_id) = line.discount_band_id {
            match self.resolve_band(band_id, tier) {
                Ok(band) => item = item.with_discount(band.percentage),
                Err(e) => rejections.push(e),
            }
        } else if let Some(text) = line.discount_percent.as_deref().filter(|t| !t.trim().is_empty())
        {
            let percent = parse_amount("discount_percent", text)
                .and_then(|p| validate_discount_percent(&p).map(|_| p));
            match percent {
                Ok(p) => item = item.with_discount(p),
                Err(e) => rejections.push(e),
            }
        }

        item
    }

    fn resolve_band(&self, id: u32, tier: MaterialTier) -> Result<DiscountBand, ValidationError> {
        let band = self
            .catalog
            .band(id)
            .ok_or(ValidationError::UnknownDiscountBand(id))?;
        if band.tier != tier {
            return Err(ValidationError::DiscountBandTierMismatch(id));
        }
        Ok(band)
    }

    /// A known coupon replaces any hand-entered coupon amount; an unknown
    /// one clears it.
    fn apply_coupon(
        &self,
        code: &str,
        items: &[LineItem],
        adjustments: &mut OrderAdjustments,
        rejections: &mut Vec<ValidationError>,
    ) {
        let amount = match self.catalog.coupon(code) {
            Some(coupon) => coupon.amount_on(&compute_discounted_total(items)),
            None => {
                rejections.push(ValidationError::UnknownCoupon(code.trim().to_string()));
                BigDecimal::from(0)
            }
        };
        if let Err(e) = adjustments.set_coupon_discount(amount) {
            rejections.push(e);
        }
    }

    pub fn discount_bands(&self, tier: MaterialTier) -> Vec<DiscountBand> {
        self.catalog.bands_for_tier(tier)
    }

    pub fn find_coupon(&self, code: &str) -> Result<Coupon, DomainError> {
        self.catalog.coupon(code).ok_or(DomainError::NotFound)
    }

    pub fn kitty_summary(
        &self,
        enrollment: &KittyEnrollment,
        payments: &[chrono::NaiveDate],
    ) -> KittySummary {
        let summary = summarize(enrollment, payments);
        for rejection in &summary.rejections {
            log::warn!("Rejected kitty payment: {}", rejection);
        }
        summary
    }
}
