use futures::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{DashiError, DashiResult, HttpClient};

/// Streams one segment body into the writer, chunk by chunk. Returns only
/// after the body has fully ended and the writer is flushed, so the caller
/// can start the next segment without risking interleaved output.
pub async fn fetch_segment<W>(client: &HttpClient, url: &str, writer: &mut W) -> DashiResult<()>
where
    W: AsyncWrite + Unpin + Send,
{
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(DashiError::HttpStatus(response.status()));
    }

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await?;
    }
    writer.flush().await?;

    Ok(())
}
