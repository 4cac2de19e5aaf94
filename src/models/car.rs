use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `carros` table. The `carrosvendidos` view projects the same
/// columns, so sold-car listings decode as `Car` too.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub carro_id: i32,
    pub modelo: String,
    pub marca: String,
    pub ano: i32,
    pub preco: f64,
}

/// Request body for creating or updating a car; the id comes from the path
/// (update) or the database sequence (create).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarPayload {
    pub modelo: String,
    pub marca: String,
    pub ano: i32,
    pub preco: f64,
}
