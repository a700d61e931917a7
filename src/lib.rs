pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::pipelines::comment_pipeline::CommentPipeline;
pub use app::runner::{exit_code, process_comments, process_comments_with, RunOutcome};
pub use config::{local::LocalStorage, RunConfig};
pub use crate::core::etl::{EtlEngine, EtlReport};
pub use crate::core::restructure::{restructure_record, restructure_tag_details};
pub use domain::model::{Record, RestructureSummary, TagObject, ThemeGroup};
pub use utils::error::{RestructureError, Result};
