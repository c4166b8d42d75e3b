use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::{resolve_category_id, resolve_collection_id, MaterialTier};
use crate::domain::discount::{Coupon, DiscountBand};
use crate::errors::AppError;
use crate::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogIdResponse {
    pub name: String,
    /// 0 when the name is not in the table.
    pub id: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DiscountBandParams {
    pub tier: MaterialTier,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiscountBandResponse {
    pub id: u32,
    pub title: String,
    pub tier: MaterialTier,
    pub percentage: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CouponResponse {
    pub code: String,
    pub title: String,
    pub percentage: String,
    pub description: Option<String>,
}

impl From<DiscountBand> for DiscountBandResponse {
    fn from(band: DiscountBand) -> Self {
        DiscountBandResponse {
            id: band.id,
            title: band.title,
            tier: band.tier,
            percentage: band.percentage.to_string(),
        }
    }
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        CouponResponse {
            code: coupon.code,
            title: coupon.title,
            percentage: coupon.percentage.to_string(),
            description: coupon.description,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /catalog/categories/{name}
#[utoipa::path(
    get,
    path = "/catalog/categories/{name}",
    params(("name" = String, Path, description = "Category name, any case")),
    responses((status = 200, description = "Category ID", body = CatalogIdResponse)),
    tag = "catalog"
)]
pub async fn category_id(path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    let id = resolve_category_id(&name);
    HttpResponse::Ok().json(CatalogIdResponse { name, id })
}

/// GET /catalog/collections/{name}
#[utoipa::path(
    get,
    path = "/catalog/collections/{name}",
    params(("name" = String, Path, description = "Collection name, any case")),
    responses((status = 200, description = "Collection ID", body = CatalogIdResponse)),
    tag = "catalog"
)]
pub async fn collection_id(path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    let id = resolve_collection_id(&name);
    HttpResponse::Ok().json(CatalogIdResponse { name, id })
}

/// GET /discount-bands?tier=gold_diamond|silver
#[utoipa::path(
    get,
    path = "/discount-bands",
    params(("tier" = MaterialTier, Query, description = "Material tier")),
    responses(
        (status = 200, description = "Bands for the tier", body = Vec<DiscountBandResponse>),
        (status = 400, description = "Unknown tier"),
    ),
    tag = "catalog"
)]
pub async fn list_discount_bands(
    state: web::Data<AppState>,
    query: web::Query<DiscountBandParams>,
) -> HttpResponse {
    let bands: Vec<DiscountBandResponse> = state
        .billing
        .discount_bands(query.tier)
        .into_iter()
        .map(DiscountBandResponse::from)
        .collect();
    HttpResponse::Ok().json(bands)
}

/// GET /coupons/{code}
#[utoipa::path(
    get,
    path = "/coupons/{code}",
    params(("code" = String, Path, description = "Coupon code, any case")),
    responses(
        (status = 200, description = "Coupon found", body = CouponResponse),
        (status = 404, description = "Coupon not found"),
    ),
    tag = "catalog"
)]
pub async fn get_coupon(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let coupon = state.billing.find_coupon(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(CouponResponse::from(coupon)))
}
