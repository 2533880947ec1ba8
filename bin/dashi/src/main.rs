use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use dashi::{
    download::{download_all, DownloadContext},
    manifest::fetch_manifest,
    resolve::resolve_manifest_url,
    sequence::InitSegmentMode,
    HttpClient,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct DashiArgs {
    /// Debug output
    #[clap(long, alias = "verbose")]
    debug: bool,

    /// Concatenate each track's segments into a single <id>.mp4 instead of
    /// writing one file per segment
    #[clap(long)]
    concat: bool,

    /// Treat init_segment as an inline base64 payload instead of a URL
    #[clap(long)]
    base64: bool,

    /// Keep the manifest URL's https scheme instead of downgrading to http
    #[clap(long)]
    keep_scheme: bool,

    /// Output directory for the manifest and the downloaded files
    #[clap(short, long, default_value = ".")]
    output: PathBuf,

    /// HTTP timeout, in seconds
    #[clap(short, long, default_value = "30")]
    timeout: u64,

    /// master.json manifest URL
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = DashiArgs::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let resolved = resolve_manifest_url(&args.url, args.keep_scheme)?;
    log::debug!("manifest url: {}", resolved.manifest_url);
    log::debug!("base url: {}", resolved.base_url);

    tokio::fs::create_dir_all(&args.output)
        .await
        .with_context(|| format!("creating output directory {}", args.output.display()))?;
    let output_dir = args
        .output
        .canonicalize()
        .with_context(|| format!("resolving output directory {}", args.output.display()))?;

    let client = HttpClient::with_timeout(Duration::from_secs(args.timeout))?;
    let manifest = fetch_manifest(&client, &resolved.manifest_url, &output_dir).await?;
    log::info!("manifest lists {} video track(s)", manifest.video.len());

    let ctx = DownloadContext {
        client,
        output_dir,
        concat: args.concat,
        init_mode: if args.base64 {
            InitSegmentMode::Base64
        } else {
            InitSegmentMode::Url
        },
        base_url: resolved.base_url,
    };

    download_all(&ctx, &manifest).await?;

    log::info!("all tracks downloaded");
    Ok(())
}
