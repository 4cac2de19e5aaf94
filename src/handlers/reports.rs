use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;

use crate::error::AppError;
use crate::models::BrandSales;
use crate::service::DealershipService;

pub fn router() -> Router<DealershipService> {
    Router::new()
        .route("/vendas_por_marca", get(sales_by_brand))
        .route("/total_vendido", get(total_sold))
        .route("/marca_mais_vendida", get(best_selling_brand))
}

async fn sales_by_brand(
    State(service): State<DealershipService>,
) -> Result<Json<Vec<BrandSales>>, AppError> {
    Ok(Json(service.sales_by_brand().await?))
}

async fn total_sold(
    State(service): State<DealershipService>,
) -> Result<Json<serde_json::Value>, AppError> {
    let total = service.total_sold().await?;
    Ok(Json(json!({
        "total_vendido": total
    })))
}

async fn best_selling_brand(
    State(service): State<DealershipService>,
) -> Result<Json<serde_json::Value>, AppError> {
    let brand = service.best_selling_brand().await?;
    Ok(Json(json!({
        "marca_mais_vendida": brand
    })))
}
