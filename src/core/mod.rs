pub mod handler;

pub use crate::domain::model::{
    GeocodeQuery, GeocodeResult, HandlerResponse, LatencyToken, Outcome, RequestState,
    ResponseBody,
};
pub use crate::domain::ports::{ConfigProvider, GeocodingService, LatencyService};
pub use crate::utils::error::Result;
