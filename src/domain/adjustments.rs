//! Point-of-entry validation for checkout inputs.
//!
//! A rejected value is reset to zero and the rejection is returned to the
//! caller; nothing here prevents a total from being produced.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::calculator::{compute_round_off, FRANCHISE_PERCENT_CAP};
use super::errors::ValidationError;
use super::invoice::{FranchiseDiscountType, OrderAdjustments};

/// Widest integer part accepted from a form field.
const MAX_INTEGER_DIGITS: usize = 12;
/// Widest fractional part accepted from a form field.
const MAX_FRACTION_DIGITS: usize = 6;

fn is_digits(part: &str, max: usize) -> bool {
    !part.is_empty() && part.len() <= max && part.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a plain decimal such as `"-12.50"`. Exponent forms and values wider
/// than the digit limits are malformed.
pub fn parse_decimal(field: &str, text: &str) -> Result<BigDecimal, ValidationError> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let well_formed = match unsigned.split_once('.') {
        Some((int, frac)) => {
            is_digits(int, MAX_INTEGER_DIGITS) && is_digits(frac, MAX_FRACTION_DIGITS)
        }
        None => is_digits(unsigned, MAX_INTEGER_DIGITS),
    };
    if !well_formed {
        return Err(ValidationError::malformed(field, text));
    }
    BigDecimal::from_str(trimmed).map_err(|_| ValidationError::malformed(field, text))
}

/// Parses a non-negative decimal, tolerating surrounding whitespace.
pub fn parse_amount(field: &str, text: &str) -> Result<BigDecimal, ValidationError> {
    let value = parse_decimal(field, text)?;
    if value < BigDecimal::from(0) {
        return Err(ValidationError::malformed(field, text));
    }
    Ok(value)
}

/// Parses the franchise discount as staff type it: `"10%"` is a percentage,
/// `"500"` a fixed amount. An empty entry means no discount.
pub fn parse_franchise_discount(
    text: &str,
) -> Result<(BigDecimal, FranchiseDiscountType), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok((BigDecimal::from(0), FranchiseDiscountType::Fixed));
    }
    match trimmed.strip_suffix('%') {
        Some(percent) => Ok((
            parse_amount("franchise_discount", percent)?,
            FranchiseDiscountType::Percent,
        )),
        None => Ok((
            parse_amount("franchise_discount", trimmed)?,
            FranchiseDiscountType::Fixed,
        )),
    }
}

/// Checks a per-line discount percentage.
pub fn validate_discount_percent(percent: &BigDecimal) -> Result<(), ValidationError> {
    if *percent < BigDecimal::from(0) || *percent > BigDecimal::from(100) {
        return Err(ValidationError::DiscountPercentOutOfRange(percent.to_string()));
    }
    Ok(())
}

/// Raw adjustment fields as submitted from the checkout form.
#[derive(Debug, Clone, Default)]
pub struct AdjustmentsInput {
    pub franchise_discount: Option<String>,
    pub coupon_discount: Option<String>,
    pub round_off: Option<String>,
    pub apply_gst: bool,
}

impl OrderAdjustments {
    /// Sets the franchise discount. Percentages above the cap, and negative
    /// values of either kind, reset the discount to zero.
    pub fn set_franchise_discount(
        &mut self,
        value: BigDecimal,
        kind: FranchiseDiscountType,
    ) -> Result<(), ValidationError> {
        self.franchise_discount_type = kind;
        if value < BigDecimal::from(0) {
            self.franchise_discount_value = BigDecimal::from(0);
            return Err(ValidationError::malformed(
                "franchise_discount",
                &value.to_string(),
            ));
        }
        if kind == FranchiseDiscountType::Percent && value > BigDecimal::from(FRANCHISE_PERCENT_CAP)
        {
            self.franchise_discount_value = BigDecimal::from(0);
            return Err(ValidationError::FranchisePercentAboveCap(value.to_string()));
        }
        self.franchise_discount_value = value;
        Ok(())
    }

    pub fn set_coupon_discount(&mut self, value: BigDecimal) -> Result<(), ValidationError> {
        if value < BigDecimal::from(0) {
            self.coupon_discount_value = BigDecimal::from(0);
            return Err(ValidationError::malformed("coupon_discount", &value.to_string()));
        }
        self.coupon_discount_value = value;
        Ok(())
    }

    pub fn set_round_off(&mut self, value: BigDecimal) -> Result<(), ValidationError> {
        match compute_round_off(&value) {
            Ok(accepted) => {
                self.round_off = accepted;
                Ok(())
            }
            Err(e) => {
                self.round_off = BigDecimal::from(0);
                Err(e)
            }
        }
    }

    /// Builds adjustments from raw form input. Never fails; each rejected
    /// field is left at zero and reported.
    pub fn from_input(input: &AdjustmentsInput) -> (OrderAdjustments, Vec<ValidationError>) {
        let mut adjustments = OrderAdjustments::default();
        let mut rejections = Vec::new();

        if let Some(text) = &input.franchise_discount {
            let result = parse_franchise_discount(text)
                .and_then(|(value, kind)| adjustments.set_franchise_discount(value, kind));
            if let Err(e) = result {
                rejections.push(e);
            }
        }

        if let Some(text) = input.coupon_discount.as_deref().filter(|t| !t.trim().is_empty()) {
            let result = parse_amount("coupon_discount", text)
                .and_then(|value| adjustments.set_coupon_discount(value));
            if let Err(e) = result {
                rejections.push(e);
            }
        }

        if let Some(text) = input.round_off.as_deref().filter(|t| !t.trim().is_empty()) {
            // Negative round-offs are out of range rather than malformed.
            let result = parse_decimal("round_off", text)
                .and_then(|value| adjustments.set_round_off(value));
            if let Err(e) = result {
                rejections.push(e);
            }
        }

        adjustments.set_apply_gst(input.apply_gst);
        (adjustments, rejections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    // ── parsing ──────────────────────────────────────────────────────────────

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("price", "  1499.00 "), Ok(dec("1499")));
    }

    #[test]
    fn parse_amount_rejects_garbage_and_negatives() {
        assert!(matches!(
            parse_amount("price", "12abc"),
            Err(ValidationError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse_amount("price", "-5"),
            Err(ValidationError::MalformedNumber { .. })
        ));
        assert!(parse_amount("price", "").is_err());
    }

    #[test]
    fn parse_amount_rejects_exponent_forms() {
        for text in ["1e400", "1E5", "2.5e-3", "1e4000000"] {
            assert!(
                matches!(
                    parse_amount("price", text),
                    Err(ValidationError::MalformedNumber { .. })
                ),
                "{text} should be malformed"
            );
        }
    }

    #[test]
    fn parse_decimal_bounds_digit_counts() {
        assert_eq!(
            parse_decimal("price", "999999999999.999999"),
            Ok(dec("999999999999.999999"))
        );
        assert!(parse_decimal("price", &"9".repeat(13)).is_err());
        assert!(parse_decimal("price", "1.1234567").is_err());
        assert!(parse_decimal("price", "1.").is_err());
        assert!(parse_decimal("price", "-").is_err());
        assert_eq!(parse_decimal("round_off", " -3 "), Ok(dec("-3")));
    }

    #[test]
    fn parse_franchise_discount_percent_and_fixed() {
        assert_eq!(
            parse_franchise_discount("10%"),
            Ok((dec("10"), FranchiseDiscountType::Percent))
        );
        assert_eq!(
            parse_franchise_discount(" 500 "),
            Ok((dec("500"), FranchiseDiscountType::Fixed))
        );
        assert_eq!(
            parse_franchise_discount(""),
            Ok((dec("0"), FranchiseDiscountType::Fixed))
        );
    }

    #[test]
    fn parse_franchise_discount_rejects_malformed() {
        assert!(parse_franchise_discount("ten%").is_err());
        assert!(parse_franchise_discount("%").is_err());
    }

    #[test]
    fn discount_percent_range() {
        assert!(validate_discount_percent(&dec("0")).is_ok());
        assert!(validate_discount_percent(&dec("100")).is_ok());
        assert!(validate_discount_percent(&dec("100.5")).is_err());
        assert!(validate_discount_percent(&dec("-1")).is_err());
    }

    // ── setters ──────────────────────────────────────────────────────────────

    #[test]
    fn franchise_percent_above_cap_is_zeroed_not_capped() {
        let mut adj = OrderAdjustments::default();
        let result = adj.set_franchise_discount(dec("20"), FranchiseDiscountType::Percent);

        assert_eq!(
            result,
            Err(ValidationError::FranchisePercentAboveCap("20".to_string()))
        );
        assert_eq!(adj.franchise_discount_value(), &dec("0"));
        assert_eq!(adj.franchise_discount_type(), FranchiseDiscountType::Percent);
    }

    #[test]
    fn franchise_fixed_amount_above_fifteen_is_fine() {
        let mut adj = OrderAdjustments::default();
        adj.set_franchise_discount(dec("2000"), FranchiseDiscountType::Fixed)
            .expect("fixed amounts are not capped");
        assert_eq!(adj.franchise_discount_value(), &dec("2000"));
    }

    #[test]
    fn rejected_round_off_resets_previous_value() {
        let mut adj = OrderAdjustments::default();
        adj.set_round_off(dec("20")).expect("in range");
        assert_eq!(adj.round_off(), &dec("20"));

        assert!(adj.set_round_off(dec("501")).is_err());
        assert_eq!(adj.round_off(), &dec("0"));
    }

    #[test]
    fn zero_round_off_is_rejected_by_setter() {
        let mut adj = OrderAdjustments::default();
        adj.set_round_off(dec("50")).expect("in range");

        assert_eq!(
            adj.set_round_off(dec("0")),
            Err(ValidationError::RoundOffOutOfRange("0".to_string()))
        );
        assert_eq!(adj.round_off(), &dec("0"));
    }

    #[test]
    fn negative_coupon_is_rejected() {
        let mut adj = OrderAdjustments::default();
        assert!(adj.set_coupon_discount(dec("-10")).is_err());
        assert_eq!(adj.coupon_discount_value(), &dec("0"));
    }

    // ── from_input ───────────────────────────────────────────────────────────

    #[test]
    fn from_input_accepts_valid_fields() {
        let input = AdjustmentsInput {
            franchise_discount: Some("12%".to_string()),
            coupon_discount: Some("250".to_string()),
            round_off: Some("49".to_string()),
            apply_gst: true,
        };

        let (adj, rejections) = OrderAdjustments::from_input(&input);

        assert!(rejections.is_empty());
        assert_eq!(adj.franchise_discount_value(), &dec("12"));
        assert_eq!(adj.franchise_discount_type(), FranchiseDiscountType::Percent);
        assert_eq!(adj.coupon_discount_value(), &dec("250"));
        assert_eq!(adj.round_off(), &dec("49"));
        assert!(adj.apply_gst());
    }

    #[test]
    fn from_input_reports_each_rejection_and_zeroes_fields() {
        let input = AdjustmentsInput {
            franchise_discount: Some("18%".to_string()),
            coupon_discount: Some("abc".to_string()),
            round_off: Some("-3".to_string()),
            apply_gst: false,
        };

        let (adj, rejections) = OrderAdjustments::from_input(&input);

        assert_eq!(rejections.len(), 3);
        assert!(matches!(
            rejections[0],
            ValidationError::FranchisePercentAboveCap(_)
        ));
        assert!(matches!(rejections[1], ValidationError::MalformedNumber { .. }));
        assert!(matches!(rejections[2], ValidationError::RoundOffOutOfRange(_)));
        assert_eq!(adj.franchise_discount_value(), &dec("0"));
        assert_eq!(adj.coupon_discount_value(), &dec("0"));
        assert_eq!(adj.round_off(), &dec("0"));
    }

    #[test]
    fn from_input_reports_zero_round_off() {
        let input = AdjustmentsInput {
            round_off: Some("0".to_string()),
            ..AdjustmentsInput::default()
        };
        let (adj, rejections) = OrderAdjustments::from_input(&input);
        assert_eq!(rejections.len(), 1);
        assert!(matches!(rejections[0], ValidationError::RoundOffOutOfRange(_)));
        assert_eq!(adj.round_off(), &dec("0"));
    }

    #[test]
    fn from_input_with_blank_fields_is_clean() {
        let input = AdjustmentsInput {
            franchise_discount: Some("   ".to_string()),
            coupon_discount: Some("".to_string()),
            round_off: None,
            apply_gst: false,
        };
        let (adj, rejections) = OrderAdjustments::from_input(&input);
        assert!(rejections.is_empty());
        assert_eq!(adj, OrderAdjustments::default());
    }
}
