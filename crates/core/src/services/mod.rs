pub mod format;
pub mod presentation_service;
pub mod reload_service;
pub mod stats_service;
