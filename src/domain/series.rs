// Daily sales series domain model
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub sales: f64,
    pub revenue: f64,
    pub orders: u64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, sales: f64, revenue: f64, orders: u64) -> Self {
        Self {
            date,
            sales,
            revenue,
            orders,
        }
    }
}

/// Per-day draws before they are accumulated into a [`DailySeries`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyIncrements {
    pub sales: Vec<f64>,
    pub revenue: Vec<f64>,
    pub orders: Vec<u64>,
}

/// One record per calendar day, dates strictly increasing with no gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailySeries {
    records: Vec<DailyRecord>,
}

impl DailySeries {
    /// Accumulate increments into running totals, one row per date.
    ///
    /// Rows stop at the shorter of `dates` and `increments`.
    pub fn accumulate(dates: &[NaiveDate], increments: &DailyIncrements) -> Self {
        let mut sales = 0.0;
        let mut revenue = 0.0;
        let mut orders = 0u64;

        let records = dates
            .iter()
            .zip(&increments.sales)
            .zip(&increments.revenue)
            .zip(&increments.orders)
            .map(|(((date, s), r), o)| {
                sales += s;
                revenue += r;
                orders += o;
                DailyRecord::new(*date, sales, revenue, orders)
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    pub fn sales(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sales).collect()
    }

    pub fn revenue(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.revenue).collect()
    }

    pub fn orders(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.orders).collect()
    }
}

/// Every calendar day from `start` to `end`, inclusive. Empty when `end < start`.
pub fn daily_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
