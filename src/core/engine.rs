use crate::core::Pipeline;
use crate::domain::model::ProcessingReport;
use crate::utils::error::Result;

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ProcessingReport> {
        tracing::info!("Starting record processing...");

        tracing::info!("📥 Loading records...");
        let records = self.pipeline.extract().await?;
        let loaded_records = records.len();
        tracing::info!("Loaded {} records", loaded_records);

        tracing::info!("🔄 Processing records...");
        let result = self.pipeline.transform(records).await?;
        let filtered_records = result.filtered.len();
        let group_count = result.grouped.len();
        let statistics = result.statistics.clone();

        tracing::info!("📤 Exporting results...");
        let output_paths = self.pipeline.load(result).await?;
        for path in &output_paths {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(ProcessingReport {
            loaded_records,
            filtered_records,
            group_count,
            statistics,
            output_paths,
        })
    }
}
