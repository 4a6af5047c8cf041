mod dataset;
mod health;
mod irrigation;
mod recommend;

pub use dataset::{get_catalog, get_dataset_summary};
pub use health::health_check;
pub use irrigation::handle_irrigation;
pub use recommend::{clear_last_recommendation, get_last_recommendation, handle_recommend};
