use crate::models::{Car, SalePayload};
use sqlx::PgPool;

#[derive(Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts one sale record. The car row itself is left untouched; the
    /// `carrosvendidos` view is what surfaces cars with a recorded sale.
    pub async fn create(&self, carro_id: i32, payload: &SalePayload) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO vendas (carro_id, cliente_id, data_venda, valor) VALUES ($1, $2, $3, $4)"
        )
        .bind(carro_id)
        .bind(payload.cliente_id)
        .bind(payload.data_venda)
        .bind(payload.preco)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_sold(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT carro_id, modelo, marca, ano, preco FROM carrosvendidos"
        )
        .fetch_all(&self.pool)
        .await
    }
}
