pub mod history_service;
pub mod step_parser;

pub use history_service::{HistoryService, HISTORY_CAPACITY, HISTORY_KEY};
pub use step_parser::parse_step;
