pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::billing_service::BillingService;
use config::AppConfig;
use domain::errors::DomainError;
use infrastructure::discount_catalog::InMemoryDiscountCatalog;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub billing: BillingService<InMemoryDiscountCatalog>,
}

impl AppState {
    pub fn new(billing: BillingService<InMemoryDiscountCatalog>) -> Self {
        Self { billing }
    }

    /// Wires the billing service from configuration, loading coupons if a
    /// coupons file is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let catalog = match &config.coupons_file {
            Some(path) => InMemoryDiscountCatalog::with_coupons_file(path)?,
            None => InMemoryDiscountCatalog::standard(),
        };
        Ok(Self::new(BillingService::new(catalog, config.gst_rate.clone())))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::invoices::compute_totals,
        handlers::catalog::category_id,
        handlers::catalog::collection_id,
        handlers::catalog::list_discount_bands,
        handlers::catalog::get_coupon,
        handlers::kitty::kitty_summary,
    ),
    tags(
        (name = "invoices", description = "Invoice total calculation"),
        (name = "catalog", description = "Catalog reference data and discounts"),
        (name = "kitty", description = "Installment savings scheme"),
    )
)]
pub struct ApiDoc;

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let state = web::Data::new(state);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .route("/health", web::get().to(health))
            .route(
                "/invoices/totals",
                web::post().to(handlers::invoices::compute_totals),
            )
            .service(
                web::scope("/catalog")
                    .route(
                        "/categories/{name}",
                        web::get().to(handlers::catalog::category_id),
                    )
                    .route(
                        "/collections/{name}",
                        web::get().to(handlers::catalog::collection_id),
                    ),
            )
            .route(
                "/discount-bands",
                web::get().to(handlers::catalog::list_discount_bands),
            )
            .route("/coupons/{code}", web::get().to(handlers::catalog::get_coupon))
            .route("/kitty/summary", web::post().to(handlers::kitty::kitty_summary))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
