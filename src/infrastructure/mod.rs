// Infrastructure layer - Configuration and HTTP encoding adapters
pub mod chunked_json;
pub mod config;
pub mod http_response;
