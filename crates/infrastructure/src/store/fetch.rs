use warden_dns_domain::CoreError;

/// GET `url` and return the body as text.
///
/// Non-2xx statuses are errors, and the body is read in chunks against
/// `max_bytes` so a hostile source cannot balloon memory.
pub async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
    max_bytes: usize,
) -> Result<String, CoreError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CoreError::UpstreamFetch(format!("fetch error for {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CoreError::UpstreamFetch(format!(
            "HTTP {} for {url}",
            status.as_u16()
        )));
    }

    if let Some(length) = response.content_length() {
        if length as usize > max_bytes {
            return Err(CoreError::UpstreamFetch(format!(
                "response for {url} exceeds {max_bytes} bytes"
            )));
        }
    }

    let mut body: Vec<u8> = Vec::new();
    let mut response = response;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| CoreError::UpstreamFetch(format!("read error for {url}: {e}")))?
    {
        if body.len() + chunk.len() > max_bytes {
            return Err(CoreError::UpstreamFetch(format!(
                "response for {url} exceeds {max_bytes} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
