use reqwest::{Client, StatusCode};
use tracing::warn;

/// Fixed browser User-Agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, como Gecko) Chrome/58.0.3029.110 Safari/537.3 Edge/16.16299";

pub fn client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// GET a page and return its body on HTTP 200. Any other status or a
/// transport error is logged and yields None; callers skip the page.
pub async fn page(client: &Client, url: &str) -> Option<String> {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if status != StatusCode::OK {
                warn!("Request to {} returned status {}", url, status.as_u16());
                return None;
            }
            match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    warn!("Failed to read body of {}: {}", url, e);
                    None
                }
            }
        }
        Err(e) => {
            warn!("Request to {} failed: {}", url, e);
            None
        }
    }
}
