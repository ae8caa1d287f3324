// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_backend;
pub mod shared_status;
pub mod status_refresh;
pub mod widgets;
