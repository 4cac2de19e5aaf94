use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub cliente_id: i32,
    pub nome: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
}
