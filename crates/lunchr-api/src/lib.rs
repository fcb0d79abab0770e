pub mod client;
pub mod error;
pub mod types;

pub use client::RouletteClient;
pub use error::RouletteError;
pub use types::{
    DistanceInfo, LocationMode, OptionEntry, Restaurant, SearchCriteria, SearchEnvelope, SearchHit,
};
