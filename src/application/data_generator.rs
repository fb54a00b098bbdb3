// Data generator - Random-walk daily series plus fixed reference tables
use crate::domain::error::{DashboardError, DashboardResult};
use crate::domain::reference::{self, ProductRow, RegionRow};
use crate::domain::series::{daily_range, DailyIncrements, DailySeries};
use crate::infrastructure::config::GeneratorSettings;
use chrono::NaiveDate;
use rand::prelude::*;
use rand_distr::{Normal, Poisson};

/// One render's worth of generated tables.
#[derive(Debug, Clone)]
pub struct GeneratedData {
    pub series: DailySeries,
    pub products: [ProductRow; 5],
    pub regions: [RegionRow; 5],
}

#[derive(Debug, Clone)]
pub struct DataGenerator {
    dates: Vec<NaiveDate>,
    sales: Normal<f64>,
    revenue: Normal<f64>,
    orders: Poisson<f64>,
}

impl DataGenerator {
    /// Validates the distribution parameters once so that `generate` cannot fail.
    pub fn new(settings: &GeneratorSettings) -> DashboardResult<Self> {
        if settings.end_date < settings.start_date {
            return Err(DashboardError::InvalidConfig(format!(
                "end_date {} is before start_date {}",
                settings.end_date, settings.start_date
            )));
        }

        let sales = normal("sales", settings.sales_mean, settings.sales_std_dev)?;
        let revenue = normal("revenue", settings.revenue_mean, settings.revenue_std_dev)?;

        if !settings.orders_lambda.is_finite() {
            return Err(DashboardError::InvalidConfig(format!(
                "orders_lambda must be finite, got {}",
                settings.orders_lambda
            )));
        }
        let orders = Poisson::new(settings.orders_lambda).map_err(|e| {
            DashboardError::InvalidConfig(format!("orders_lambda {}: {}", settings.orders_lambda, e))
        })?;

        Ok(Self {
            dates: daily_range(settings.start_date, settings.end_date),
            sales,
            revenue,
            orders,
        })
    }

    pub fn days(&self) -> usize {
        self.dates.len()
    }

    /// Draws every sales increment, then every revenue increment, then every order count.
    pub fn sample_increments<R: Rng + ?Sized>(&self, rng: &mut R) -> DailyIncrements {
        let days = self.days();
        let sales = (0..days).map(|_| self.sales.sample(rng)).collect();
        let revenue = (0..days).map(|_| self.revenue.sample(rng)).collect();
        let orders = (0..days)
            .map(|_| {
                let count: f64 = self.orders.sample(rng);
                count as u64
            })
            .collect();

        DailyIncrements {
            sales,
            revenue,
            orders,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedData {
        let increments = self.sample_increments(rng);

        GeneratedData {
            series: DailySeries::accumulate(&self.dates, &increments),
            products: reference::products(),
            regions: reference::regions(),
        }
    }
}

fn normal(name: &str, mean: f64, std_dev: f64) -> DashboardResult<Normal<f64>> {
    if !mean.is_finite() || !std_dev.is_finite() {
        return Err(DashboardError::InvalidConfig(format!(
            "{} distribution needs finite parameters, got mean={} std_dev={}",
            name, mean, std_dev
        )));
    }
    // rand_distr only rejects a non-finite std_dev
    if std_dev < 0.0 {
        return Err(DashboardError::InvalidConfig(format!(
            "{} std_dev must not be negative, got {}",
            name, std_dev
        )));
    }

    Normal::new(mean, std_dev).map_err(|e| {
        DashboardError::InvalidConfig(format!("{} std_dev {}: {}", name, std_dev, e))
    })
}

/// Fixed seed when configured, fresh entropy otherwise.
pub fn render_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    StdRng::seed_from_u64(seed)
}
