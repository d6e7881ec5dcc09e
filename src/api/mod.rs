pub mod health;
pub mod stipple;

pub use health::{__path_handle_health, __path_handle_root};
pub use health::{handle_health, handle_root, EndpointList, HealthResponse, RootResponse};
pub use stipple::{handle_stipple, StippleForm, __path_handle_stipple};
