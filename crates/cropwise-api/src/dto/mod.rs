mod request;
mod response;

pub use request::IrrigationRequest;
pub use response::{ClearResponse, ErrorResponse, HealthResponse};
