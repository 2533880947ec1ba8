use std::path::{Path, PathBuf};

use tokio::{fs::File, io::AsyncWriteExt};

use crate::{DashiResult, StreamingSegment};

/// One growing `<trackId>.mp4` shared by every segment of the track. The
/// stream is opened on first use and stays open between segments; byte
/// order is whatever order the segments are written in.
pub struct ConcatSink {
    path: PathBuf,
    file: Option<File>,
}

impl ConcatSink {
    pub fn new(output_dir: PathBuf, track_id: &str) -> Self {
        Self {
            path: output_dir.join(format!("{track_id}.mp4")),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn open_writer(
        &mut self,
        _segment: &impl StreamingSegment,
    ) -> DashiResult<&mut File> {
        let file = match self.file.take() {
            Some(file) => file,
            None => File::create(&self.path).await?,
        };
        Ok(self.file.insert(file))
    }

    pub async fn update(&mut self, segment: &impl StreamingSegment) -> DashiResult<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush().await?;
        }
        log::debug!("concatenated {}", segment.file_name());
        Ok(())
    }

    pub async fn fail(&mut self, _segment: &impl StreamingSegment) -> DashiResult<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().await?;
        }
        log::warn!(
            "{} is truncated after a failed segment",
            self.path.display()
        );
        Ok(())
    }

    pub async fn finish(&mut self) -> DashiResult<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().await?;
            file.shutdown().await?;
        }
        log::debug!("concatenated segments into {}", self.path.display());
        Ok(())
    }
}
