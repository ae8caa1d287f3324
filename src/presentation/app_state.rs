// Application state for HTTP handlers
use crate::application::home_page::HomePageController;
use crate::application::status_page::StatusPageController;

pub struct AppState {
    pub status_page: StatusPageController,
    pub home_page: HomePageController,
}
