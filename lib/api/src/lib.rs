pub mod error;
pub mod rest;
pub mod validate;

pub use error::ApiError;
pub use rest::{configure, wrong_route, ApiConfig, AppState, RestApi, DEFAULT_DISPLAY_LIMIT};
