use bytes::Bytes;

use crate::StreamingSegment;

/// Where a segment's bytes come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentData {
    /// Absolute URL to GET. Already joined with the base and track URLs.
    Remote { url: String },
    /// Decoded inline init payload, written without a network fetch.
    Inline(Bytes),
}

/// One entry of a track's download queue. Consumed exactly once, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSegment {
    pub track_id: String,
    pub sequence: u64,
    pub file_name: String,
    pub data: SegmentData,
}

impl TrackSegment {
    /// The URL for remote segments, the local file name otherwise. Used to
    /// identify the segment in errors and logs.
    pub fn locator(&self) -> &str {
        match &self.data {
            SegmentData::Remote { url } => url,
            SegmentData::Inline(_) => &self.file_name,
        }
    }
}

impl StreamingSegment for TrackSegment {
    fn sequence(&self) -> u64 {
        self.sequence
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}
