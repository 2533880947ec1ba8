use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::DashiResult;

/// Trailing `video/<id>(,<id>)*/<rest>` component of a master.json URL.
/// Everything before it is the prefix shared by all of a video's tracks.
static TRACK_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"video/(?:\d+,?)+/.+$").expect("valid regex"));

/// The manifest URL after rewriting, plus the derived segment prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// Manifest URL with the query string stripped and, unless opted out,
    /// the scheme downgraded to plain http.
    pub manifest_url: String,
    /// Directory prefix that every track's `base_url` appends to.
    pub base_url: String,
}

/// Rewrites the manifest URL and derives the segment base URL from it.
///
/// The scheme downgrade matches the hosting CDN this tool was written
/// against, which served segments over plain http; `keep_scheme` opts out.
pub fn resolve_manifest_url(input: &str, keep_scheme: bool) -> DashiResult<ResolvedUrl> {
    let mut url = Url::parse(input)?;
    url.set_query(None);
    url.set_fragment(None);

    if !keep_scheme && url.scheme() == "https" {
        let _ = url.set_scheme("http");
    }

    let manifest_url = url.to_string();
    let base_url = match TRACK_PATH.find(&manifest_url) {
        Some(m) => manifest_url[..m.start()].to_string(),
        None => {
            log::debug!("manifest url has no video/<id>/ component, using its directory as base");
            match manifest_url.rfind('/') {
                Some(slash) => manifest_url[..=slash].to_string(),
                None => manifest_url.clone(),
            }
        }
    };

    Ok(ResolvedUrl {
        manifest_url,
        base_url,
    })
}
