mod concat;
mod discrete;

pub use concat::ConcatSink;
pub use discrete::DiscreteSink;

use std::path::PathBuf;

use tokio::fs::File;

use crate::{DashiResult, StreamingSegment};

/// Uniform interface over the two output disciplines: one file per segment,
/// or one growing file per track. The discipline is chosen once per run.
///
/// The sink owns the lifetime of its streams: a writer handed out by
/// [`open_writer`] stays open until the matching [`update`] or [`fail`], and
/// a concatenation stream is only closed by [`finish`], after the last
/// segment of the track.
///
/// [`open_writer`]: TrackSink::open_writer
/// [`update`]: TrackSink::update
/// [`fail`]: TrackSink::fail
/// [`finish`]: TrackSink::finish
pub enum TrackSink {
    Discrete(DiscreteSink),
    Concat(ConcatSink),
}

impl TrackSink {
    pub fn discrete(output_dir: impl Into<PathBuf>) -> Self {
        Self::Discrete(DiscreteSink::new(output_dir.into()))
    }

    pub fn concat(output_dir: impl Into<PathBuf>, track_id: &str) -> Self {
        Self::Concat(ConcatSink::new(output_dir.into(), track_id))
    }

    /// Open the writer for the next segment. In concatenation mode this
    /// returns the shared per-track stream, opened on first use.
    pub async fn open_writer(
        &mut self,
        segment: &impl StreamingSegment,
    ) -> DashiResult<&mut File> {
        match self {
            Self::Discrete(sink) => sink.open_writer(segment).await,
            Self::Concat(sink) => sink.open_writer(segment).await,
        }
    }

    /// Mark the current segment as fully written.
    pub async fn update(&mut self, segment: &impl StreamingSegment) -> DashiResult<()> {
        match self {
            Self::Discrete(sink) => sink.update(segment).await,
            Self::Concat(sink) => sink.update(segment).await,
        }
    }

    /// Mark the current segment as failed mid-stream.
    pub async fn fail(&mut self, segment: &impl StreamingSegment) -> DashiResult<()> {
        match self {
            Self::Discrete(sink) => sink.fail(segment).await,
            Self::Concat(sink) => sink.fail(segment).await,
        }
    }

    /// Flush and close the sink. Called exactly once, after the last segment
    /// of the track.
    pub async fn finish(&mut self) -> DashiResult<()> {
        match self {
            Self::Discrete(sink) => sink.finish().await,
            Self::Concat(sink) => sink.finish().await,
        }
    }
}
