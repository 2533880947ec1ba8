use std::path::Path;

use serde::Deserialize;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::{DashiError, DashiResult, HttpClient};

/// The manifest is always persisted under this name in the output directory.
pub const MANIFEST_FILE_NAME: &str = "master.json";

/// Top-level master.json document. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub video: Vec<VideoTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoTrack {
    /// Names the track's output files.
    pub id: String,
    /// Track-relative URL fragment, appended to the derived base URL.
    #[serde(default)]
    pub base_url: String,
    /// Either a relative URL or an inline base64 payload, depending on the
    /// per-run init segment mode.
    pub init_segment: String,
    #[serde(default)]
    pub segments: Vec<SegmentRef>,
}

/// `start` and `end` are carried through untouched; nothing downstream
/// interprets them.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentRef {
    pub url: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

/// Decodes a manifest and validates the minimal shape needed to proceed.
pub fn parse_manifest(bytes: &[u8]) -> DashiResult<Manifest> {
    let manifest: Manifest = serde_json::from_slice(bytes)?;
    if manifest.video.is_empty() {
        return Err(DashiError::EmptyManifest);
    }
    Ok(manifest)
}

/// Fetches the manifest, persists it at `<output_dir>/master.json` and hands
/// back the parsed structure. The local copy is fully flushed before parsing
/// starts; a fetch or write failure aborts before any parse attempt.
pub async fn fetch_manifest(
    client: &HttpClient,
    url: &str,
    output_dir: &Path,
) -> DashiResult<Manifest> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DashiError::ManifestFetch {
            url: url.to_string(),
            source,
        })?;
    if !response.status().is_success() {
        return Err(DashiError::HttpStatus(response.status()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| DashiError::ManifestFetch {
            url: url.to_string(),
            source,
        })?;

    let path = output_dir.join(MANIFEST_FILE_NAME);
    let mut file = File::create(&path).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;
    log::info!("saved manifest to {}", path.display());

    parse_manifest(&bytes)
}
