pub(crate) const OPENFAAS_URL_ENVIRONMENT: &str = "OPENFAAS_URL";

///picks the gateway from the flag, then the environment, then the default
pub(crate) fn get_gateway_url(argument_url: &str, default_url: &str, environment_url: &str) -> String {
    let gateway_url = if !argument_url.is_empty() && argument_url != default_url {
        argument_url
    } else if !environment_url.is_empty() {
        environment_url
    } else {
        default_url
    };

    let gateway_url = gateway_url.trim_end_matches('/').to_ascii_lowercase();
    if !gateway_url.starts_with("http://") && !gateway_url.starts_with("https://") {
        format!("http://{}", gateway_url)
    } else {
        gateway_url
    }
}
