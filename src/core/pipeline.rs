use crate::core::document::{DocumentExporter, DocumentLoader};
use crate::core::store::RecordStore;
use crate::core::{ConfigProvider, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

/// 載入 → 篩選 → 排序 → 分組 → 統計 → 匯出
pub struct RecordPipeline<S: Storage + Clone, C: ConfigProvider> {
    loader: DocumentLoader<S>,
    exporter: DocumentExporter<S>,
    config: C,
}

impl<S: Storage + Clone, C: ConfigProvider> RecordPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            loader: DocumentLoader::new(storage.clone()),
            exporter: DocumentExporter::new(storage, config.pretty()),
            config,
        }
    }

    fn output_file(&self, file_name: &str) -> String {
        Path::new(self.config.output_dir())
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage + Clone, C: ConfigProvider> Pipeline for RecordPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let mut store = RecordStore::new();
        let count = self
            .loader
            .load_into(&mut store, self.config.input_path())
            .await?;

        if count == 0 {
            tracing::warn!("⚠️ Input '{}' contains no records", self.config.input_path());
        }

        Ok(store.into_records())
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let mut store = RecordStore::from_records(data);
        let min_value = self.config.min_value();

        // 篩選要在排序前做，結果維持載入順序
        let filtered = store.filter_by_value(min_value);
        tracing::info!(
            "Filtered {} of {} records with value >= {}",
            filtered.len(),
            store.len(),
            min_value
        );

        let sorted = store.sort_by_name().to_vec();
        tracing::debug!("Sorted records: {:?}", sorted);

        let grouped = store.group_by_name();
        tracing::info!("Grouped records into {} names", grouped.len());

        let statistics = store.statistics();
        tracing::info!("Average value: {}", statistics.average);
        match (statistics.min, statistics.max) {
            (Some(min), Some(max)) => {
                tracing::info!("Min value: {}", min);
                tracing::info!("Max value: {}", max);
            }
            _ => tracing::warn!("⚠️ No records loaded, min/max are not available"),
        }

        Ok(TransformResult {
            filtered,
            sorted,
            grouped,
            statistics,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Vec<String>> {
        let filtered_path = self.output_file(self.config.filtered_file());
        let sorted_path = self.output_file(self.config.sorted_file());
        let grouped_path = self.output_file(self.config.grouped_file());

        self.exporter
            .export(&filtered_path, result.filtered.as_slice())
            .await?;
        self.exporter
            .export(&sorted_path, result.sorted.as_slice())
            .await?;
        self.exporter.export(&grouped_path, &result.grouped).await?;

        tracing::debug!("Exported results to {}", self.config.output_dir());
        Ok(vec![filtered_path, sorted_path, grouped_path])
    }
}
