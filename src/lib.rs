pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{build_handler, GeoHandler};
pub use config::ServiceConfig;
pub use core::handler::RequestHandler;
pub use domain::model::{GeocodeQuery, HandlerResponse, ResponseBody};
pub use utils::error::{GeoError, Result};
