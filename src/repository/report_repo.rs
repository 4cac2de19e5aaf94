use crate::models::BrandSales;
use sqlx::PgPool;

/// Aggregates are computed inside the database (views and scalar functions);
/// this repository only fetches and unwraps them.
#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn sales_by_brand(&self) -> Result<Vec<BrandSales>, sqlx::Error> {
        sqlx::query_as::<_, BrandSales>(
            "SELECT marca, total_vendido FROM vendaspormarca"
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn total_sold(&self) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>("SELECT calcular_total_vendas()")
            .fetch_one(&self.pool)
            .await
    }

    /// NULL (no sales yet) comes back as `None`.
    pub async fn best_selling_brand(&self) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>("SELECT marca_mais_vendida()")
            .fetch_one(&self.pool)
            .await
    }
}
