use std::collections::VecDeque;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;

use crate::{
    manifest::VideoTrack,
    segment::{SegmentData, TrackSegment},
    DashiResult,
};

/// How the manifest encodes the initialization segment. The mode is a
/// per-run switch, never per-track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitSegmentMode {
    /// `init_segment` is a URL fragment, fetched like any media segment.
    #[default]
    Url,
    /// `init_segment` is an inline base64 payload.
    Base64,
}

/// Builds the ordered download queue for one track: the initialization
/// segment first, then the media segments in manifest order.
pub fn sequence_track(
    track: &VideoTrack,
    base_url: &str,
    mode: InitSegmentMode,
) -> DashiResult<VecDeque<TrackSegment>> {
    let mut queue = VecDeque::with_capacity(track.segments.len() + 1);

    let (file_name, data) = match mode {
        InitSegmentMode::Base64 => (
            format!("{}-init.mp4", track.id),
            SegmentData::Inline(Bytes::from(STANDARD.decode(&track.init_segment)?)),
        ),
        InitSegmentMode::Url => (
            segment_file_name(&track.id, &track.init_segment),
            SegmentData::Remote {
                url: absolute_url(base_url, &track.base_url, &track.init_segment),
            },
        ),
    };
    queue.push_back(TrackSegment {
        track_id: track.id.clone(),
        sequence: 0,
        file_name,
        data,
    });

    for (index, segment) in track.segments.iter().enumerate() {
        queue.push_back(TrackSegment {
            track_id: track.id.clone(),
            sequence: index as u64 + 1,
            file_name: segment_file_name(&track.id, &segment.url),
            data: SegmentData::Remote {
                url: absolute_url(base_url, &track.base_url, &segment.url),
            },
        });
    }

    Ok(queue)
}

/// Plain concatenation, no separator normalization. The manifest's fields
/// are expected to already carry the necessary slashes.
fn absolute_url(base_url: &str, track_base_url: &str, segment_url: &str) -> String {
    format!("{base_url}{track_base_url}{segment_url}")
}

/// Discrete-mode file name: `<trackId>-<segmentURL>`, slashes sanitized so
/// the name stays inside the output directory.
pub fn segment_file_name(track_id: &str, segment_url: &str) -> String {
    format!("{}-{}", track_id, segment_url.replace('/', "__"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::SegmentRef;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn track() -> VideoTrack {
        VideoTrack {
            id: "1080".to_string(),
            base_url: "1080/".to_string(),
            init_segment: "init.mp4".to_string(),
            segments: vec![
                SegmentRef {
                    url: "segment-1.m4s".to_string(),
                    start: Some(0.0),
                    end: Some(2.0),
                },
                SegmentRef {
                    url: "segment-2.m4s".to_string(),
                    start: Some(2.0),
                    end: Some(4.0),
                },
            ],
        }
    }

    #[test]
    fn test_init_segment_is_always_first() {
        let queue = sequence_track(&track(), "http://host/path/", InitSegmentMode::Url).unwrap();

        let urls: Vec<_> = queue.iter().map(|s| s.locator().to_string()).collect();
        assert_eq!(
            urls,
            vec![
                "http://host/path/1080/init.mp4",
                "http://host/path/1080/segment-1.m4s",
                "http://host/path/1080/segment-2.m4s",
            ]
        );

        let sequences: Vec<_> = queue.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn test_base64_init_is_decoded_inline() {
        let mut track = track();
        track.init_segment = STANDARD.encode(b"ftypinitdata");

        let queue = sequence_track(&track, "http://host/path/", InitSegmentMode::Base64).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue[0].file_name, "1080-init.mp4");
        assert_eq!(
            queue[0].data,
            SegmentData::Inline(Bytes::from_static(b"ftypinitdata"))
        );
        assert!(matches!(queue[1].data, SegmentData::Remote { .. }));
    }

    #[test]
    fn test_invalid_base64_init_fails() {
        let mut track = track();
        track.init_segment = "!!not base64!!".to_string();

        assert!(sequence_track(&track, "http://host/path/", InitSegmentMode::Base64).is_err());
    }

    #[test]
    fn test_track_with_no_media_segments() {
        let mut track = track();
        track.segments.clear();

        let queue = sequence_track(&track, "http://host/path/", InitSegmentMode::Url).unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].file_name, "1080-init.mp4");
    }

    #[test]
    fn test_file_name_sanitizes_slashes() {
        assert_eq!(
            segment_file_name("720", "chunks/segment-1.m4s"),
            "720-chunks__segment-1.m4s"
        );
    }
}
