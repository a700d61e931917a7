use crate::app::pipelines::comment_pipeline::CommentPipeline;
use crate::config::{local::LocalStorage, RunBehaviour, RunConfig};
use crate::core::etl::EtlEngine;
use crate::core::RestructureSummary;
use crate::utils::error::RestructureError;

/// Result of one run. Failures are carried as values so the caller decides
/// how to report them and which exit status to use.
#[derive(Debug)]
pub enum RunOutcome {
    Completed {
        output_path: String,
        summary: RestructureSummary,
    },
    Failed(RestructureError),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Reads, restructures and writes the comments file described by `config`,
/// resolving relative paths against `storage`.
pub async fn process_comments_with(storage: LocalStorage, config: &RunConfig) -> RunOutcome {
    let pipeline = CommentPipeline::new(storage, config.clone());
    let engine = EtlEngine::new_with_monitoring(pipeline, config.monitoring.enabled);

    match engine.run().await {
        Ok(report) => RunOutcome::Completed {
            output_path: report.output_path,
            summary: report.summary,
        },
        Err(e) => {
            tracing::error!("❌ Restructure failed: {} (Category: {:?})", e, e.category());
            RunOutcome::Failed(e)
        }
    }
}

pub async fn process_comments(config: &RunConfig) -> RunOutcome {
    process_comments_with(LocalStorage::default(), config).await
}

/// 失敗時預設仍回傳 0，`fail_on_error` 開啟後回傳 1
pub fn exit_code(outcome: &RunOutcome, behaviour: &RunBehaviour) -> i32 {
    match outcome {
        RunOutcome::Completed { .. } => 0,
        RunOutcome::Failed(_) if behaviour.fail_on_error => 1,
        RunOutcome::Failed(_) => 0,
    }
}
