pub mod etl;
pub mod restructure;

pub use crate::domain::model::{Record, RecordOutcome, RestructureSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
