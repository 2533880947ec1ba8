use std::path::PathBuf;

use tokio::{fs::File, io::AsyncWriteExt};

use crate::{DashiResult, StreamingSegment};

/// One file per segment, named from the track id and segment URL.
pub struct DiscreteSink {
    output_dir: PathBuf,
    current: Option<(PathBuf, File)>,
}

impl DiscreteSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            current: None,
        }
    }

    pub async fn open_writer(
        &mut self,
        segment: &impl StreamingSegment,
    ) -> DashiResult<&mut File> {
        let path = self.output_dir.join(segment.file_name());
        let file = File::create(&path).await?;
        let (_, file) = self.current.insert((path, file));
        Ok(file)
    }

    pub async fn update(&mut self, segment: &impl StreamingSegment) -> DashiResult<()> {
        if let Some((_, mut file)) = self.current.take() {
            file.flush().await?;
        }
        log::debug!("downloaded {}", segment.file_name());
        Ok(())
    }

    pub async fn fail(&mut self, _segment: &impl StreamingSegment) -> DashiResult<()> {
        if let Some((path, file)) = self.current.take() {
            drop(file);
            if path.exists() {
                tokio::fs::remove_file(&path).await?;
            }
            log::warn!("removed partial segment file {}", path.display());
        }
        Ok(())
    }

    pub async fn finish(&mut self) -> DashiResult<()> {
        // Every segment's file is already closed by update or fail.
        Ok(())
    }
}
