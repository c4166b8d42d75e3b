//! Kitty: a monthly installment savings scheme.
//!
//! Members pay the same amount for ten months and receive the eleventh
//! month free, provided every installment arrived between the 1st and the
//! 10th of its month.

use bigdecimal::BigDecimal;
use chrono::{Datelike, Months, NaiveDate};

use super::errors::{DomainError, ValidationError};

pub const PAID_MONTHS: u32 = 10;
pub const BONUS_MONTHS: u32 = 1;
/// Last day of the month on which an installment still counts as on time.
pub const LAST_ON_TIME_DAY: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct KittyEnrollment {
    pub monthly_amount: BigDecimal,
    start_month: NaiveDate,
}

impl KittyEnrollment {
    /// `start` may be any day; the scheme begins with that day's month.
    pub fn new(monthly_amount: BigDecimal, start: NaiveDate) -> Result<Self, DomainError> {
        if monthly_amount <= BigDecimal::from(0) {
            return Err(DomainError::InvalidInput(format!(
                "monthly amount must be positive, got {}",
                monthly_amount
            )));
        }
        let start_month = start.with_day(1).ok_or_else(|| {
            DomainError::Internal(format!("cannot take first day of month of {}", start))
        })?;
        Ok(Self {
            monthly_amount,
            start_month,
        })
    }

    pub fn start_month(&self) -> NaiveDate {
        self.start_month
    }

    /// Month in which the bonus installment is granted.
    pub fn end_month(&self) -> Option<NaiveDate> {
        self.start_month
            .checked_add_months(Months::new(PAID_MONTHS + BONUS_MONTHS - 1))
    }

    /// Total the member commits to pay.
    pub fn commitment(&self) -> BigDecimal {
        &self.monthly_amount * BigDecimal::from(PAID_MONTHS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KittySummary {
    pub paid_installments: u32,
    pub late_installments: u32,
    pub total_paid: BigDecimal,
    pub remaining_amount: BigDecimal,
    pub bonus_eligible: bool,
    pub bonus_amount: BigDecimal,
    pub maturity_value: BigDecimal,
    pub end_month: Option<NaiveDate>,
    pub completed: bool,
    pub rejections: Vec<ValidationError>,
}

fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// Summarizes payment dates against an enrollment. The n-th accepted
/// payment settles the n-th installment; extra payments past the tenth are
/// ignored.
pub fn summarize(enrollment: &KittyEnrollment, payments: &[NaiveDate]) -> KittySummary {
    let mut dates: Vec<NaiveDate> = payments.to_vec();
    dates.sort();

    let mut rejections = Vec::new();
    let mut paid_installments = 0u32;
    let mut late_installments = 0u32;

    for date in dates {
        if date < enrollment.start_month() {
            rejections.push(ValidationError::PaymentBeforeStart(date.to_string()));
            continue;
        }
        if paid_installments == PAID_MONTHS {
            break;
        }
        let due_offset = paid_installments as i32;
        let paid_offset = months_between(enrollment.start_month(), date);
        let late = paid_offset > due_offset
            || (paid_offset == due_offset && date.day() > LAST_ON_TIME_DAY);
        if late {
            late_installments += 1;
        }
        paid_installments += 1;
    }

    let total_paid = &enrollment.monthly_amount * BigDecimal::from(paid_installments);
    let remaining_amount = enrollment.commitment() - &total_paid;
    let completed = paid_installments == PAID_MONTHS;
    let bonus_eligible = late_installments == 0;
    let bonus_amount = if completed && bonus_eligible {
        &enrollment.monthly_amount * BigDecimal::from(BONUS_MONTHS)
    } else {
        BigDecimal::from(0)
    };

    KittySummary {
        paid_installments,
        late_installments,
        maturity_value: &total_paid + &bonus_amount,
        total_paid,
        remaining_amount,
        bonus_eligible,
        bonus_amount,
        end_month: enrollment.end_month(),
        completed,
        rejections,
    }
}
