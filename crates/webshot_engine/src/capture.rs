use std::path::PathBuf;
use std::sync::Arc;

use shot_logging::shot_info;
use webshot_core::{BatchOperation, OperationError, WorkItem};

use crate::filename::artifact_filename;
use crate::persist::AtomicFileWriter;
use crate::render::Renderer;

/// The render-and-save operation: one URL in, one JPEG artifact on disk out.
///
/// Any failure along the way (render, encode, persist) surfaces as a single
/// per-item `OperationError`; the batch core records it and keeps going.
pub struct CaptureOperation {
    renderer: Arc<dyn Renderer>,
    writer: AtomicFileWriter,
}

impl CaptureOperation {
    pub fn new(renderer: Arc<dyn Renderer>, output_dir: PathBuf) -> Self {
        Self {
            renderer,
            writer: AtomicFileWriter::new(output_dir),
        }
    }
}

#[async_trait::async_trait]
impl BatchOperation for CaptureOperation {
    async fn execute(&self, item: &WorkItem) -> Result<(), OperationError> {
        shot_info!("Processing: {item}");

        let filename = artifact_filename(item);
        let jpeg = self
            .renderer
            .render(item)
            .await
            .map_err(|err| OperationError::new(err.to_string()))?;
        let path = self
            .writer
            .write(&filename, &jpeg)
            .map_err(|err| OperationError::new(err.to_string()))?;

        shot_info!("Screenshot saved: {}", path.display());
        Ok(())
    }
}
