use crate::model::IpInfo;
use anyhow::{Context, Result};

/// One HTTP lookup against the remote geolocation service.
#[allow(async_fn_in_trait)]
pub trait IpLookup {
    /// Resolve `target` — an IP address or domain, or empty for the
    /// caller's own address (whatever the service defines that as).
    async fn lookup(&self, target: &str) -> Result<IpInfo>;
}

/// Client for an ipinfo.io-style endpoint:
/// `GET <base>/<target>/json?token=<token>`.
#[derive(Clone)]
pub struct IpinfoClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl IpinfoClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn url_for(&self, target: &str) -> String {
        if target.is_empty() {
            format!("{}/json?token={}", self.base_url, self.token)
        } else {
            format!("{}/{}/json?token={}", self.base_url, target, self.token)
        }
    }
}

impl IpLookup for IpinfoClient {
    async fn lookup(&self, target: &str) -> Result<IpInfo> {
        let url = self.url_for(target);
        let info = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to call IP lookup service")?
            .json::<IpInfo>()
            .await
            .context("Failed to parse lookup response")?;

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned HTTP response on a loopback port, reporting the
    /// request line that arrived.
    async fn serve_once(body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let head = String::from_utf8_lossy(&buf[..n]).to_string();
            let request_line = head.lines().next().unwrap_or_default().to_string();

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = tx.send(request_line);
        });

        (format!("http://{}", addr), rx)
    }

    #[tokio::test]
    async fn test_lookup_parses_response() {
        let body = r#"{"ip":"8.8.8.8","city":"Mountain View","region":"California","country":"US","loc":"37.4,-122.1","timezone":"America/Los_Angeles","org":"AS15169 Google LLC"}"#;
        let (base, request_line) = serve_once(body).await;
        let client = IpinfoClient::new(&base, "test-token");

        let info = client.lookup("8.8.8.8").await.unwrap();
        assert_eq!(info.ip, "8.8.8.8");
        assert_eq!(info.city, "Mountain View");
        assert_eq!(info.org, "AS15169 Google LLC");
        assert_eq!(info.coordinate().unwrap(), Coordinate::new(37.4, -122.1));

        let line = request_line.await.unwrap();
        assert_eq!(line, "GET /8.8.8.8/json?token=test-token HTTP/1.1");
    }

    #[tokio::test]
    async fn test_lookup_own_address_uses_bare_json_path() {
        let (base, request_line) = serve_once(r#"{"ip":"203.0.113.9"}"#).await;
        let client = IpinfoClient::new(&base, "test-token");

        let info = client.lookup("").await.unwrap();
        assert_eq!(info.ip, "203.0.113.9");
        assert_eq!(info.city, "");

        let line = request_line.await.unwrap();
        assert_eq!(line, "GET /json?token=test-token HTTP/1.1");
    }

    #[tokio::test]
    async fn test_network_failure_is_an_error() {
        // Nothing listens here
        let client = IpinfoClient::new("http://127.0.0.1:9", "test-token");
        assert!(client.lookup("8.8.8.8").await.is_err());
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error() {
        let (base, _request_line) = serve_once("<html>service down</html>").await;
        let client = IpinfoClient::new(&base, "test-token");
        assert!(client.lookup("example.com").await.is_err());
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = IpinfoClient::new("https://ipinfo.io/", "t0k3n");
        assert_eq!(
            client.url_for("1.1.1.1"),
            "https://ipinfo.io/1.1.1.1/json?token=t0k3n"
        );
        assert_eq!(client.url_for(""), "https://ipinfo.io/json?token=t0k3n");
    }
}
