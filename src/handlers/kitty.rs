use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::adjustments::parse_amount;
use crate::domain::kitty::{KittyEnrollment, KittySummary};
use crate::errors::AppError;
use crate::handlers::invoices::{money, RejectionResponse};
use crate::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct KittyRequest {
    /// Installment amount as a decimal string, e.g. "5000".
    pub monthly_amount: String,
    /// Any day in the first month of the scheme.
    pub start_date: NaiveDate,
    /// Dates on which installments were received.
    #[serde(default)]
    pub payments: Vec<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KittySummaryResponse {
    pub start_month: NaiveDate,
    pub end_month: Option<NaiveDate>,
    pub paid_installments: u32,
    pub late_installments: u32,
    pub total_paid: String,
    pub remaining_amount: String,
    pub bonus_eligible: bool,
    pub bonus_amount: String,
    pub maturity_value: String,
    pub completed: bool,
    pub rejections: Vec<RejectionResponse>,
}

impl KittySummaryResponse {
    fn new(enrollment: &KittyEnrollment, summary: KittySummary) -> Self {
        KittySummaryResponse {
            start_month: enrollment.start_month(),
            end_month: summary.end_month,
            paid_installments: summary.paid_installments,
            late_installments: summary.late_installments,
            total_paid: money(&summary.total_paid),
            remaining_amount: money(&summary.remaining_amount),
            bonus_eligible: summary.bonus_eligible,
            bonus_amount: money(&summary.bonus_amount),
            maturity_value: money(&summary.maturity_value),
            completed: summary.completed,
            rejections: summary.rejections.iter().map(RejectionResponse::from).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /kitty/summary
///
/// Summarizes a member's installments: amount paid, amount remaining and
/// whether the free eleventh month has been earned.
#[utoipa::path(
    post,
    path = "/kitty/summary",
    request_body = KittyRequest,
    responses(
        (status = 200, description = "Scheme summary", body = KittySummaryResponse),
        (status = 400, description = "Invalid enrollment"),
    ),
    tag = "kitty"
)]
pub async fn kitty_summary(
    state: web::Data<AppState>,
    body: web::Json<KittyRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let monthly_amount = parse_amount("monthly_amount", &req.monthly_amount)?;
    let enrollment = KittyEnrollment::new(monthly_amount, req.start_date)?;
    let summary = state.billing.kitty_summary(&enrollment, &req.payments);
    Ok(HttpResponse::Ok().json(KittySummaryResponse::new(&enrollment, summary)))
}
