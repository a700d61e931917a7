use crate::core::Pipeline;
use crate::domain::model::RestructureSummary;
use crate::utils::error::Result;
use crate::utils::monitor::{Phase, SystemMonitor};

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

#[derive(Debug, Clone)]
pub struct EtlReport {
    pub output_path: String,
    pub summary: RestructureSummary,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<EtlReport> {
        tracing::info!("Starting tag_details restructure");

        // Extract
        tracing::debug!("Reading comment records...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Read {} records", raw_data.len());
        self.monitor.log_phase(Phase::Read, raw_data.len());

        // Transform
        tracing::debug!("Restructuring tag_details...");
        let transformed = self.pipeline.transform(raw_data).await?;
        let summary = transformed.summary.clone();
        tracing::info!(
            "Restructured {} of {} records ({} themes, {} tags), {} passed through",
            summary.restructured_records,
            summary.total_records,
            summary.themes,
            summary.tags,
            summary.passthrough_records
        );
        self.monitor.log_phase(Phase::Restructure, summary.total_records);

        // Load
        tracing::debug!("Writing restructured records...");
        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_phase(Phase::Write, summary.total_records);
        self.monitor.log_summary(summary.total_records);

        Ok(EtlReport {
            output_path,
            summary,
        })
    }
}
