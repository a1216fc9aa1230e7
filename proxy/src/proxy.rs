use reqwest::Client;
use std::time::Duration;
use utility::Result;

///makes a HTTP client with good defaults for timeouts.
pub fn make_http_client(timeout: Option<Duration>, tls_insecure: bool) -> Result<Client> {
    let mut client = reqwest::ClientBuilder::new();

    if let Some(time) = timeout {
        client = client.timeout(time).connect_timeout(time);
    }
    if tls_insecure {
        tracing::debug!("TLS certificate validation disabled");
        client = client.danger_accept_invalid_certs(true);
    }

    Ok(client.build()?)
}

#[cfg(test)]
mod tests {
    use super::make_http_client;
    use std::time::Duration;

    #[test]
    fn test_make_http_client() {
        assert!(make_http_client(None, false).is_ok());
        assert!(make_http_client(Some(Duration::from_secs(60)), true).is_ok());
    }
}
