pub mod aggregate;
pub mod config;
pub mod error;
pub mod journey;
pub mod pipeline;
pub mod session;
pub mod stations;

pub use aggregate::{compute_differences, summarize, JourneySummary};
pub use config::RailstatConfig;
pub use error::{PipelineError, Result};
pub use journey::{build_journey, build_journeys, Journey};
pub use pipeline::{JourneyPipeline, PipelineOutput};
pub use session::{Session, WorkingSet};
pub use stations::{distinct_stations, filter_by_stations};
