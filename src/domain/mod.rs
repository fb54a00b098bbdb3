// Domain layer - Dashboard data model and descriptors
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod reference;
pub mod refresh;
pub mod series;
pub mod table;
