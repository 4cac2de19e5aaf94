use axum::{extract::State, response::Json, routing::get, Router};

use crate::error::AppError;
use crate::models::Customer;
use crate::service::DealershipService;

pub fn router() -> Router<DealershipService> {
    Router::new().route("/clientes", get(list_customers))
}

async fn list_customers(
    State(service): State<DealershipService>,
) -> Result<Json<Vec<Customer>>, AppError> {
    Ok(Json(service.list_customers().await?))
}
