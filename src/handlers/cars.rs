use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::json;

use crate::error::AppError;
use crate::models::{Car, CarPayload};
use crate::service::DealershipService;

pub fn router() -> Router<DealershipService> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/{car_id}", put(update_car).delete(delete_car))
}

async fn list_cars(
    State(service): State<DealershipService>,
) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(service.list_cars().await?))
}

async fn create_car(
    State(service): State<DealershipService>,
    Json(payload): Json<CarPayload>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let car = service.create_car(payload).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(service): State<DealershipService>,
    Path(car_id): Path<i32>,
    Json(payload): Json<CarPayload>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(service.update_car(car_id, payload).await?))
}

async fn delete_car(
    State(service): State<DealershipService>,
    Path(car_id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    service.delete_car(car_id).await?;
    Ok(Json(json!({
        "message": "Carro excluído com sucesso"
    })))
}
