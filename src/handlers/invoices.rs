use actix_web::{web, HttpResponse};
use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::billing_service::{CartInput, CartLineInput, Quote};
use crate::domain::adjustments::AdjustmentsInput;
use crate::domain::catalog::MaterialTier;
use crate::domain::errors::ValidationError;
use crate::domain::invoice::InvoiceLine;
use crate::errors::AppError;
use crate::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartLineRequest {
    /// Decimal price as a string to avoid floating-point issues, e.g. "1499.00"
    pub unit_price: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    /// Gold/diamond line rather than silver.
    #[serde(default)]
    pub is_precious_material: bool,
    /// Gold purity in karats; when present it decides the material tier
    /// (14 kt is gold/diamond) and `is_precious_material` is ignored.
    pub karat: Option<u32>,
    /// ID of a named discount band; takes precedence over `discount_percent`.
    pub discount_band_id: Option<u32>,
    pub discount_percent: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AdjustmentsRequest {
    /// "10%" for a percentage (at most 15%), "500" for a fixed amount.
    pub franchise_discount: Option<String>,
    pub coupon_discount: Option<String>,
    /// Amount knocked off the invoice, greater than 0 and at most 500.
    pub round_off: Option<String>,
    #[serde(default)]
    pub apply_gst: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartRequest {
    pub lines: Vec<CartLineRequest>,
    #[serde(default)]
    pub adjustments: AdjustmentsRequest,
    pub coupon_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceLineResponse {
    pub unit_price: String,
    pub quantity: u32,
    pub gross: String,
    pub discount_percent: Option<String>,
    pub discount_amount: String,
    pub net: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RejectionResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceTotalsResponse {
    pub lines: Vec<InvoiceLineResponse>,
    pub subtotal: String,
    pub discounted_total: String,
    pub total_discount: String,
    pub franchise_discount_amount: String,
    pub coupon_discount: String,
    pub round_off: String,
    pub gst_amount: String,
    pub final_total: String,
    pub rejections: Vec<RejectionResponse>,
}

/// Renders an amount with two decimal places, half-up.
pub fn money(amount: &BigDecimal) -> String {
    amount.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

impl From<CartRequest> for CartInput {
    fn from(req: CartRequest) -> Self {
        CartInput {
            lines: req
                .lines
                .into_iter()
                .map(|l| CartLineInput {
                    unit_price: l.unit_price,
                    quantity: l.quantity,
                    is_precious_material: l
                        .karat
                        .map(|kt| MaterialTier::from_karat(kt).is_precious())
                        .unwrap_or(l.is_precious_material),
                    discount_band_id: l.discount_band_id,
                    discount_percent: l.discount_percent,
                })
                .collect(),
            adjustments: AdjustmentsInput {
                franchise_discount: req.adjustments.franchise_discount,
                coupon_discount: req.adjustments.coupon_discount,
                round_off: req.adjustments.round_off,
                apply_gst: req.adjustments.apply_gst,
            },
            coupon_code: req.coupon_code,
        }
    }
}

impl From<&InvoiceLine> for InvoiceLineResponse {
    fn from(line: &InvoiceLine) -> Self {
        InvoiceLineResponse {
            unit_price: money(&line.unit_price),
            quantity: line.quantity,
            gross: money(&line.gross),
            discount_percent: line.discount_percent.as_ref().map(|p| p.to_string()),
            discount_amount: money(&line.discount_amount),
            net: money(&line.net),
        }
    }
}

impl From<&ValidationError> for RejectionResponse {
    fn from(e: &ValidationError) -> Self {
        RejectionResponse {
            message: e.to_string(),
        }
    }
}

impl From<Quote> for InvoiceTotalsResponse {
    fn from(quote: Quote) -> Self {
        let totals = quote.totals;
        InvoiceTotalsResponse {
            lines: totals.lines.iter().map(InvoiceLineResponse::from).collect(),
            subtotal: money(&totals.subtotal),
            discounted_total: money(&totals.discounted_total),
            total_discount: money(&totals.total_discount),
            franchise_discount_amount: money(&totals.franchise_discount_amount),
            coupon_discount: money(&totals.coupon_discount),
            round_off: money(&totals.round_off),
            gst_amount: money(&totals.gst_amount),
            final_total: money(&totals.final_total),
            rejections: quote.rejections.iter().map(RejectionResponse::from).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /invoices/totals
///
/// Prices a cart with its checkout adjustments. Rejected inputs do not fail
/// the request; they are zeroed and listed under `rejections`.
#[utoipa::path(
    post,
    path = "/invoices/totals",
    request_body = CartRequest,
    responses(
        (status = 200, description = "Invoice totals", body = InvoiceTotalsResponse),
        (status = 400, description = "Malformed JSON body"),
    ),
    tag = "invoices"
)]
pub async fn compute_totals(
    state: web::Data<AppState>,
    body: web::Json<CartRequest>,
) -> Result<HttpResponse, AppError> {
    let cart: CartInput = body.into_inner().into();
    let quote = state.billing.quote(&cart);
    Ok(HttpResponse::Ok().json(InvoiceTotalsResponse::from(quote)))
}
