use std::{collections::VecDeque, path::PathBuf};

use tokio::io::AsyncWriteExt;

use crate::{
    fetch::fetch_segment,
    manifest::Manifest,
    segment::{SegmentData, TrackSegment},
    sequence::{sequence_track, InitSegmentMode},
    sink::TrackSink,
    DashiError, DashiResult, HttpClient,
};

/// Everything a run needs, resolved up front. No ambient globals, no
/// working-directory changes; `output_dir` is absolute.
pub struct DownloadContext {
    pub client: HttpClient,
    pub output_dir: PathBuf,
    pub concat: bool,
    pub init_mode: InitSegmentMode,
    pub base_url: String,
}

/// Downloads one track's segments strictly in order, one request in flight
/// at a time. The next segment starts only after the previous body has
/// fully ended, so concatenated output can never interleave.
pub struct SequencialDownloader {
    client: HttpClient,
    sink: TrackSink,
}

impl SequencialDownloader {
    pub fn new(client: HttpClient, sink: TrackSink) -> Self {
        Self { client, sink }
    }

    /// Drains the queue front to back. The first failing segment fails the
    /// whole track; an empty queue is the terminal state and finishes the
    /// sink.
    pub async fn download(&mut self, mut queue: VecDeque<TrackSegment>) -> DashiResult<()> {
        while let Some(segment) = queue.pop_front() {
            match self.write_segment(&segment).await {
                Ok(()) => self.sink.update(&segment).await?,
                Err(source) => {
                    self.sink.fail(&segment).await?;
                    return Err(DashiError::SegmentFetch {
                        track: segment.track_id.clone(),
                        url: segment.locator().to_string(),
                        source: Box::new(source),
                    });
                }
            }
        }

        self.sink.finish().await
    }

    async fn write_segment(&mut self, segment: &TrackSegment) -> DashiResult<()> {
        let writer = self.sink.open_writer(segment).await?;
        match &segment.data {
            SegmentData::Remote { url } => fetch_segment(&self.client, url, writer).await,
            SegmentData::Inline(payload) => {
                writer.write_all(payload).await?;
                writer.flush().await?;
                Ok(())
            }
        }
    }
}

/// Drives every track of the manifest. A failing track is logged and does
/// not prevent the remaining tracks from being processed, but any failure
/// makes the overall result an error.
///
/// Tracks are processed one after another; the strict ordering requirement
/// only holds within a track, and distinct tracks never share an output
/// file name since the track id prefixes every name.
pub async fn download_all(ctx: &DownloadContext, manifest: &Manifest) -> DashiResult<()> {
    let mut failed = 0usize;

    for track in &manifest.video {
        let queue = match sequence_track(track, &ctx.base_url, ctx.init_mode) {
            Ok(queue) => queue,
            Err(error) => {
                log::error!("track {}: {error}", track.id);
                failed += 1;
                continue;
            }
        };
        log::info!("track {}: downloading {} segment(s)", track.id, queue.len());

        let sink = if ctx.concat {
            TrackSink::concat(&ctx.output_dir, &track.id)
        } else {
            TrackSink::discrete(&ctx.output_dir)
        };

        let mut downloader = SequencialDownloader::new(ctx.client.clone(), sink);
        match downloader.download(queue).await {
            Ok(()) => log::info!("track {}: done", track.id),
            Err(error) => {
                log::error!("{error}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(DashiError::TracksFailed(failed));
    }
    Ok(())
}
