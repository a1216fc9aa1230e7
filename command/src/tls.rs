/// printed when the gateway is reached over plain HTTP
pub(crate) const NOT_TLS_WARN: &str =
    "WARNING! You are not using an encrypted connection to the gateway, consider using HTTPS.";

const LOCAL_GATEWAYS: [&str; 2] = ["http://127.0.0.1", "http://localhost"];

/// returns the plain HTTP warning for remote gateways, unless TLS checks are disabled
pub(crate) fn tls_warning(gateway: &str, tls_insecure: bool) -> Option<&'static str> {
    let encrypted = gateway.starts_with("https");
    let local = LOCAL_GATEWAYS.iter().any(|g| gateway.starts_with(g));
    if tls_insecure || encrypted || local {
        None
    } else {
        Some(NOT_TLS_WARN)
    }
}
