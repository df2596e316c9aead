pub mod document;
pub mod engine;
pub mod pipeline;
pub mod store;

pub use crate::domain::model::{Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
