use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::json;

use crate::error::AppError;
use crate::models::{Car, SalePayload};
use crate::service::DealershipService;

pub fn router() -> Router<DealershipService> {
    Router::new()
        .route("/cars/sell/{car_id}", put(sell_car))
        .route("/sold_cars", get(list_sold_cars))
}

async fn sell_car(
    State(service): State<DealershipService>,
    Path(car_id): Path<i32>,
    Json(payload): Json<SalePayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    service.sell_car(car_id, payload).await?;
    Ok(Json(json!({
        "message": "Carro vendido com sucesso"
    })))
}

async fn list_sold_cars(
    State(service): State<DealershipService>,
) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(service.list_sold_cars().await?))
}
