pub mod engine;
pub mod http_fetcher;

pub use crate::domain::model::{Endpoint, FetchOutcome, Payload};
pub use crate::domain::ports::{ConfigProvider, Fetcher, Storage};
pub use crate::utils::error::Result;
