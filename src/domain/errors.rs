use thiserror::Error;

/// A value rejected at the point of entry. The offending field is reset to
/// zero and the rejection is reported back; it never aborts a computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Franchise discount of {0}% exceeds the 15% cap")]
    FranchisePercentAboveCap(String),
    #[error("Round-off {0} must be greater than 0 and at most 500")]
    RoundOffOutOfRange(String),
    #[error("Discount percent {0} must be between 0 and 100")]
    DiscountPercentOutOfRange(String),
    #[error("Quantity {0} must be at least 1")]
    QuantityOutOfRange(i64),
    #[error("Invalid {field} '{value}': not a non-negative number")]
    MalformedNumber { field: String, value: String },
    #[error("Discount band {0} does not exist")]
    UnknownDiscountBand(u32),
    #[error("Discount band {0} does not apply to this material")]
    DiscountBandTierMismatch(u32),
    #[error("Coupon '{0}' not found")]
    UnknownCoupon(String),
    #[error("Payment on {0} precedes the scheme start")]
    PaymentBeforeStart(String),
}

impl ValidationError {
    pub fn malformed(field: &str, value: &str) -> Self {
        ValidationError::MalformedNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for DomainError {
    fn from(e: ValidationError) -> Self {
        DomainError::InvalidInput(e.to_string())
    }
}
