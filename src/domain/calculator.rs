//! Invoice total calculation.
//!
//! Every consumer (cart preview, billing summary, PDF export, printed
//! invoice) goes through [`compute_invoice_totals`], so the figures shown
//! before confirmation are the figures printed afterwards.

use bigdecimal::BigDecimal;

use super::errors::ValidationError;
use super::invoice::{FranchiseDiscountType, InvoiceLine, InvoiceTotals, LineItem, OrderAdjustments};

/// Hard business cap on a percentage franchise discount.
pub const FRANCHISE_PERCENT_CAP: i64 = 15;

/// Largest round-off staff may knock off an invoice.
pub const MAX_ROUND_OFF: i64 = 500;

fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

fn hundred() -> BigDecimal {
    BigDecimal::from(100)
}

pub fn compute_subtotal(items: &[LineItem]) -> BigDecimal {
    items.iter().map(LineItem::gross).fold(zero(), |acc, g| acc + g)
}

/// Discount for a single line; zero when the line carries no discount band.
pub fn compute_line_discount(item: &LineItem) -> BigDecimal {
    match &item.per_item_discount_percent {
        Some(percent) => item.gross() * percent / hundred(),
        None => zero(),
    }
}

pub fn compute_discounted_total(items: &[LineItem]) -> BigDecimal {
    items
        .iter()
        .map(|item| item.gross() - compute_line_discount(item))
        .fold(zero(), |acc, net| acc + net)
}

/// Franchise discount in currency.
///
/// A percentage above [`FRANCHISE_PERCENT_CAP`] is a rejected entry and
/// contributes nothing; it is not reduced to the cap.
pub fn compute_franchise_discount_amount(
    subtotal: &BigDecimal,
    adjustments: &OrderAdjustments,
) -> BigDecimal {
    let value = adjustments.franchise_discount_value();
    if *value < zero() {
        return zero();
    }
    match adjustments.franchise_discount_type() {
        FranchiseDiscountType::Fixed => value.min(subtotal).clone(),
        FranchiseDiscountType::Percent => {
            if *value > BigDecimal::from(FRANCHISE_PERCENT_CAP) {
                return zero();
            }
            subtotal * value / hundred()
        }
    }
}

/// Accepts a round-off in `(0, 500]`; anything else, zero included, is
/// rejected and the caller falls back to no round-off.
pub fn compute_round_off(round_off: &BigDecimal) -> Result<BigDecimal, ValidationError> {
    if *round_off <= zero() || *round_off > BigDecimal::from(MAX_ROUND_OFF) {
        return Err(ValidationError::RoundOffOutOfRange(round_off.to_string()));
    }
    Ok(round_off.clone())
}

/// GST on `base`, or zero when GST is off or there is nothing to tax.
pub fn compute_gst_amount(base: &BigDecimal, apply_gst: bool, gst_rate: &BigDecimal) -> BigDecimal {
    if !apply_gst || *base <= zero() {
        return zero();
    }
    base * gst_rate
}

pub fn compute_final_total(
    discounted_total: &BigDecimal,
    franchise_amount: &BigDecimal,
    coupon_amount: &BigDecimal,
    round_off: &BigDecimal,
    apply_gst: bool,
    gst_rate: &BigDecimal,
) -> BigDecimal {
    let base = discounted_total - franchise_amount - coupon_amount - round_off;
    let gst = compute_gst_amount(&base, apply_gst, gst_rate);
    (base + gst).max(zero())
}

/// Runs the full calculation. Stacking order: per-line discounts, then the
/// franchise discount (taken on the subtotal), then coupon, then round-off,
/// then GST on whatever remains.
pub fn compute_invoice_totals(items: &[LineItem], adjustments: &OrderAdjustments) -> InvoiceTotals {
    let lines: Vec<InvoiceLine> = items
        .iter()
        .map(|item| {
            let gross = item.gross();
            let discount_amount = compute_line_discount(item);
            InvoiceLine {
                unit_price: item.unit_price.clone(),
                quantity: item.quantity,
                net: &gross - &discount_amount,
                gross,
                discount_percent: item.per_item_discount_percent.clone(),
                discount_amount,
            }
        })
        .collect();

    let subtotal = compute_subtotal(items);
    let discounted_total = compute_discounted_total(items);
    let franchise_discount_amount = compute_franchise_discount_amount(&subtotal, adjustments);
    let coupon_discount = adjustments.coupon_discount_value().max(&zero()).clone();
    let round_off = compute_round_off(adjustments.round_off()).unwrap_or_else(|_| zero());

    let base = &discounted_total - &franchise_discount_amount - &coupon_discount - &round_off;
    let gst_amount = compute_gst_amount(&base, adjustments.apply_gst(), adjustments.gst_rate());
    let final_total = compute_final_total(
        &discounted_total,
        &franchise_discount_amount,
        &coupon_discount,
        &round_off,
        adjustments.apply_gst(),
        adjustments.gst_rate(),
    );

    InvoiceTotals {
        total_discount: &subtotal - &discounted_total,
        lines,
        subtotal,
        discounted_total,
        franchise_discount_amount,
        coupon_discount,
        round_off,
        gst_amount,
        final_total,
    }
}
