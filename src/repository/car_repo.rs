use crate::models::{Car, CarPayload};
use sqlx::PgPool;

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT carro_id, modelo, marca, ano, preco FROM carros"
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, payload: &CarPayload) -> Result<Car, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "INSERT INTO carros (modelo, marca, ano, preco) VALUES ($1, $2, $3, $4) \
             RETURNING carro_id, modelo, marca, ano, preco"
        )
        .bind(&payload.modelo)
        .bind(&payload.marca)
        .bind(payload.ano)
        .bind(payload.preco)
        .fetch_one(&self.pool)
        .await
    }

    /// Returns `None` when no row matches the id.
    pub async fn update(&self, carro_id: i32, payload: &CarPayload) -> Result<Option<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "UPDATE carros SET modelo = $1, marca = $2, ano = $3, preco = $4 WHERE carro_id = $5 \
             RETURNING carro_id, modelo, marca, ano, preco"
        )
        .bind(&payload.modelo)
        .bind(&payload.marca)
        .bind(payload.ano)
        .bind(payload.preco)
        .bind(carro_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns the number of rows deleted (0 or 1, carro_id is the key).
    pub async fn delete(&self, carro_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carros WHERE carro_id = $1")
            .bind(carro_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
