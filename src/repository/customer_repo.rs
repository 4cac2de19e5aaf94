use crate::models::Customer;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "SELECT cliente_id, nome, telefone, email FROM clientes"
        )
        .fetch_all(&self.pool)
        .await
    }
}
