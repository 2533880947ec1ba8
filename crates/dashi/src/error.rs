use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashiError {
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("failed to fetch manifest {url}: {source}")]
    ManifestFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed manifest: {0}")]
    MalformedManifest(#[from] serde_json::Error),

    #[error("manifest contains no video tracks")]
    EmptyManifest,

    #[error("track {track}: failed to download {url}: {source}")]
    SegmentFetch {
        track: String,
        url: String,
        #[source]
        source: Box<DashiError>,
    },

    #[error("invalid base64 init segment payload: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("{0} track(s) failed to download")]
    TracksFailed(usize),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
}

pub type DashiResult<T> = Result<T, DashiError>;
