use crate::core::store::RecordStore;
use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::{RecordError, Result};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct InputDocument {
    data: Vec<Record>,
}

#[derive(Serialize)]
struct OutputDocument<'a, T: Serialize + ?Sized> {
    data: &'a T,
}

/// 解析 `{"data": [...]}` 文件
pub fn parse_document(bytes: &[u8], source_path: &str) -> Result<Vec<Record>> {
    let document: InputDocument = serde_json::from_slice(bytes)
        .map_err(|e| RecordError::malformed(source_path, e))?;
    Ok(document.data)
}

pub fn render_document<T: Serialize + ?Sized>(data: &T, pretty: bool) -> Result<Vec<u8>> {
    let document = OutputDocument { data };
    let bytes = if pretty {
        serde_json::to_vec_pretty(&document)?
    } else {
        serde_json::to_vec(&document)?
    };
    Ok(bytes)
}

pub struct DocumentLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> DocumentLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn load(&self, path: &str) -> Result<Vec<Record>> {
        tracing::debug!("Reading records from: {}", path);
        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| RecordError::malformed(path, e))?;

        let records = parse_document(&bytes, path)?;
        tracing::debug!("Parsed {} records from {} bytes", records.len(), bytes.len());
        Ok(records)
    }

    /// 讀取成功後才取代 store 內容；失敗時 store 保持不變
    pub async fn load_into(&self, store: &mut RecordStore, path: &str) -> Result<usize> {
        let records = self.load(path).await?;
        let count = records.len();
        store.replace(records);
        Ok(count)
    }
}

pub struct DocumentExporter<S: Storage> {
    storage: S,
    pretty: bool,
}

impl<S: Storage> DocumentExporter<S> {
    pub fn new(storage: S, pretty: bool) -> Self {
        Self { storage, pretty }
    }

    pub async fn export<T: Serialize + ?Sized + Sync>(&self, path: &str, data: &T) -> Result<()> {
        let bytes = render_document(data, self.pretty)?;
        tracing::debug!("Writing {} bytes to: {}", bytes.len(), path);
        self.storage.write_file(path, &bytes).await
    }
}
