pub mod download;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod resolve;
pub mod segment;
pub mod sequence;
pub mod sink;
pub mod util;

pub use error::{DashiError, DashiResult};
pub use segment::{SegmentData, TrackSegment};
pub use util::http::HttpClient;

/// One retrievable chunk of a track.
///
/// Within a track, segments are strictly ordered by [`sequence`]; the
/// initialization segment is always sequence 0. Sinks and log output address
/// a segment by [`file_name`].
///
/// [`sequence`]: StreamingSegment::sequence
/// [`file_name`]: StreamingSegment::file_name
pub trait StreamingSegment {
    fn sequence(&self) -> u64;

    fn file_name(&self) -> &str;
}
