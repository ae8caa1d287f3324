// Application layer - Page use cases and seams to the backend and widgets
pub mod backend;
pub mod home_page;
pub mod pipeline;
pub mod query;
pub mod status_page;
pub mod status_store;
pub mod widgets;
