// Application layer - Generation, building and refresh use cases
pub mod chart_builder;
pub mod dashboard_service;
pub mod data_generator;
pub mod refresh_cycle;
pub mod streaming_service;
pub mod table_builder;
