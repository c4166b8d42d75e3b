use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// GST applied to jewelry sales.
pub fn default_gst_rate() -> BigDecimal {
    BigDecimal::from(3) / BigDecimal::from(100)
}

/// One priced cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub unit_price: BigDecimal,
    pub quantity: u32,
    /// Gold/diamond tier as opposed to silver; selects which discount band applies.
    pub is_precious_material: bool,
    pub per_item_discount_percent: Option<BigDecimal>,
}

impl LineItem {
    pub fn new(unit_price: BigDecimal, quantity: u32, is_precious_material: bool) -> Self {
        Self {
            unit_price,
            quantity,
            is_precious_material,
            per_item_discount_percent: None,
        }
    }

    pub fn with_discount(mut self, percent: BigDecimal) -> Self {
        self.per_item_discount_percent = Some(percent);
        self
    }

    /// `unit_price × quantity`, before any discount.
    pub fn gross(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FranchiseDiscountType {
    #[default]
    Fixed,
    Percent,
}

/// Order-level adjustments entered by staff at checkout.
///
/// Fields are private so that every value goes through the validating
/// setters in [`crate::domain::adjustments`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAdjustments {
    pub(crate) franchise_discount_value: BigDecimal,
    pub(crate) franchise_discount_type: FranchiseDiscountType,
    pub(crate) coupon_discount_value: BigDecimal,
    pub(crate) round_off: BigDecimal,
    pub(crate) apply_gst: bool,
    pub(crate) gst_rate: BigDecimal,
}

impl Default for OrderAdjustments {
    fn default() -> Self {
        Self {
            franchise_discount_value: BigDecimal::from(0),
            franchise_discount_type: FranchiseDiscountType::Fixed,
            coupon_discount_value: BigDecimal::from(0),
            round_off: BigDecimal::from(0),
            apply_gst: false,
            gst_rate: default_gst_rate(),
        }
    }
}

impl OrderAdjustments {
    pub fn franchise_discount_value(&self) -> &BigDecimal {
        &self.franchise_discount_value
    }

    pub fn franchise_discount_type(&self) -> FranchiseDiscountType {
        self.franchise_discount_type
    }

    pub fn coupon_discount_value(&self) -> &BigDecimal {
        &self.coupon_discount_value
    }

    pub fn round_off(&self) -> &BigDecimal {
        &self.round_off
    }

    pub fn apply_gst(&self) -> bool {
        self.apply_gst
    }

    pub fn gst_rate(&self) -> &BigDecimal {
        &self.gst_rate
    }

    pub fn set_apply_gst(&mut self, apply_gst: bool) {
        self.apply_gst = apply_gst;
    }

    pub fn set_gst_rate(&mut self, gst_rate: BigDecimal) {
        self.gst_rate = gst_rate;
    }
}

/// An itemized invoice row as printed on the PDF and on-screen summary.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    pub unit_price: BigDecimal,
    pub quantity: u32,
    pub gross: BigDecimal,
    pub discount_percent: Option<BigDecimal>,
    pub discount_amount: BigDecimal,
    pub net: BigDecimal,
}

/// Derived totals; recomputed from line items and adjustments, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTotals {
    pub lines: Vec<InvoiceLine>,
    pub subtotal: BigDecimal,
    pub discounted_total: BigDecimal,
    pub total_discount: BigDecimal,
    pub franchise_discount_amount: BigDecimal,
    pub coupon_discount: BigDecimal,
    pub round_off: BigDecimal,
    pub gst_amount: BigDecimal,
    pub final_total: BigDecimal,
}

impl InvoiceTotals {
    /// Net amount of each line after its own discount.
    pub fn per_line_discounted_total(&self) -> Vec<BigDecimal> {
        self.lines.iter().map(|l| l.net.clone()).collect()
    }
}
