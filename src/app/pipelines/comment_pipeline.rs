use crate::core::restructure::restructure_record;
use crate::core::{
    ConfigProvider, Pipeline, Record, RestructureSummary, Storage, TransformResult,
};
use crate::utils::error::{RestructureError, Result};
use serde_json::Value;

/// Reads the comments array, restructures every record's `tag_details` and
/// writes the result as pretty JSON.
pub struct CommentPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> CommentPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CommentPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let input_path = self.config.input_path();

        // 先確認檔案存在，再嘗試讀取
        if !self.storage.exists(input_path).await {
            return Err(RestructureError::InputNotFound {
                path: input_path.to_string(),
            });
        }

        tracing::debug!("Reading {}", input_path);
        let bytes = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes", bytes.len());

        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Array(items) => Ok(items.into_iter().map(Record::new).collect()),
            _ => Err(RestructureError::schema(
                input_path,
                "expected a top-level array of comment records",
            )),
        }
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let mut summary = RestructureSummary::default();
        let mut processed_records = Vec::with_capacity(data.len());

        for (index, record) in data.into_iter().enumerate() {
            let (processed, outcome) = restructure_record(record).map_err(|e| {
                tracing::error!("Record #{} could not be restructured: {}", index, e);
                e
            })?;
            summary.record(outcome);
            processed_records.push(processed);
        }

        Ok(TransformResult {
            processed_records,
            summary,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();

        // 先完整序列化再一次寫入，序列化失敗時不會留下半個檔案
        let json_data = serde_json::to_vec_pretty(&result.processed_records)?;

        tracing::debug!("Writing {} bytes to {}", json_data.len(), output_path);
        self.storage.write_file(output_path, &json_data).await?;

        Ok(output_path.to_string())
    }
}
