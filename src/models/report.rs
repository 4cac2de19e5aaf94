use serde::Serialize;
use sqlx::FromRow;

/// A row of the `vendaspormarca` view: aggregate sales value per brand.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BrandSales {
    pub marca: String,
    pub total_vendido: f64,
}
