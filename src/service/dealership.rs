use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{BrandSales, Car, CarPayload, Customer, SalePayload};
use crate::repository::{CarRepository, CustomerRepository, ReportRepository, SaleRepository};
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Maps each API operation to its single SQL statement and turns row-count
/// results into the NotFound/success distinction. Holds no state between
/// requests beyond the shared pool and a sales counter used for logging.
#[derive(Clone)]
pub struct DealershipService {
    cars: CarRepository,
    sales: SaleRepository,
    customers: CustomerRepository,
    reports: ReportRepository,
    recorded_sales_count: Arc<AtomicU64>,
}

impl DealershipService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            sales: SaleRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            reports: ReportRepository::new(pool),
            recorded_sales_count: Arc::new(AtomicU64::new(0)),
        }
    }

    fn log_recorded_sales_count(&self) {
        let count = self.recorded_sales_count.fetch_add(1, Ordering::Relaxed) + 1;
        if count % 10 == 0 {
            tracing::info!("{} *** Recorded sales count: {} ***", API_NAME, count);
        }
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.cars.list().await?)
    }

    pub async fn create_car(&self, payload: CarPayload) -> Result<Car, AppError> {
        let car = self.cars.create(&payload).await?;
        tracing::info!("{} Created car {} ({} {})", API_NAME, car.carro_id, car.marca, car.modelo);
        Ok(car)
    }

    pub async fn update_car(&self, carro_id: i32, payload: CarPayload) -> Result<Car, AppError> {
        match self.cars.update(carro_id, &payload).await? {
            Some(car) => {
                tracing::info!("{} Updated car {}", API_NAME, carro_id);
                Ok(car)
            }
            None => Err(AppError::NotFound("Carro não encontrado".to_string())),
        }
    }

    pub async fn delete_car(&self, carro_id: i32) -> Result<(), AppError> {
        let rows_affected = self.cars.delete(carro_id).await?;
        if rows_affected == 0 {
            return Err(AppError::NotFound("Carro não encontrado".to_string()));
        }
        tracing::info!("{} Deleted car {}", API_NAME, carro_id);
        Ok(())
    }

    /// Records the sale only; the car row stays in the inventory table and
    /// keeps appearing in the general listing. Sold cars are surfaced
    /// through the sold-cars view.
    pub async fn sell_car(&self, carro_id: i32, payload: SalePayload) -> Result<(), AppError> {
        self.sales.create(carro_id, &payload).await?;
        tracing::info!(
            "{} Recorded sale of car {} to customer {}",
            API_NAME,
            carro_id,
            payload.cliente_id
        );
        self.log_recorded_sales_count();
        Ok(())
    }

    pub async fn list_sold_cars(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.sales.list_sold().await?)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.list().await?)
    }

    pub async fn sales_by_brand(&self) -> Result<Vec<BrandSales>, AppError> {
        Ok(self.reports.sales_by_brand().await?)
    }

    pub async fn total_sold(&self) -> Result<f64, AppError> {
        Ok(self.reports.total_sold().await?)
    }

    pub async fn best_selling_brand(&self) -> Result<Option<String>, AppError> {
        Ok(self.reports.best_selling_brand().await?)
    }
}
