use crate::client::ClientAuth;
use config::config_file::{config_file_path, decode_auth, read_auth_config, AuthConfig, BASIC_AUTH_TYPE};
use reqwest::RequestBuilder;
use std::io::ErrorKind;
use utility::{Error, Result};

///basic authentication type
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

///bearer token, an empty token leaves the request untouched
pub struct BearerToken {
    pub token: String,
}

///no authentication at all
#[derive(Clone, Copy, Default)]
pub struct NoAuth;

impl ClientAuth for BasicAuth {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req.basic_auth(self.username.as_str(), Some(self.password.as_str())))
    }
}

impl ClientAuth for BearerToken {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        if self.token.is_empty() {
            return Ok(req);
        }
        Ok(req.bearer_auth(self.token.as_str()))
    }
}

impl ClientAuth for NoAuth {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req)
    }
}

///auth resolved for the CLI from flags and the config file
pub enum CliAuth {
    BasicAuth(BasicAuth),
    BearerToken(BearerToken),
}

impl CliAuth {
    ///returns a new CLI Auth for `gateway`, a missing config file means no stored credentials
    pub fn new(token: &str, gateway: &str) -> Result<CliAuth> {
        let config = match read_auth_config(config_file_path()?, gateway) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => AuthConfig::default(),
            Err(e) => return Err(e),
        };
        CliAuth::from_config(token, &config)
    }

    pub fn from_config(token: &str, config: &AuthConfig) -> Result<CliAuth> {
        if config.auth == BASIC_AUTH_TYPE {
            let (username, password) = decode_auth(config.token.as_str())?;
            return Ok(CliAuth::BasicAuth(BasicAuth { username, password }));
        }

        // User specified token gets priority
        let token = if !token.is_empty() {
            token.to_string()
        } else {
            config.token.clone()
        };
        Ok(CliAuth::BearerToken(BearerToken { token }))
    }
}

impl ClientAuth for CliAuth {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match self {
            CliAuth::BasicAuth(b) => b.set(req),
            CliAuth::BearerToken(t) => t.set(req),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::config_file::{encode_auth, OAUTH_2AUTH_TYPE};
    use reqwest::header::AUTHORIZATION;

    fn authorization(auth: &dyn ClientAuth) -> Option<String> {
        let req = reqwest::Client::new().get("http://127.0.0.1:8080/system/functions");
        let req = auth.set(req).unwrap().build().unwrap();
        req.headers()
            .get(AUTHORIZATION)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[test]
    fn test_basic_auth_from_config() {
        let config = AuthConfig {
            gateway: "http://127.0.0.1:8080".into(),
            auth: BASIC_AUTH_TYPE.into(),
            token: encode_auth("admin", "secret"),
        };
        let auth = CliAuth::from_config("ignored-token", &config).unwrap();
        assert!(matches!(auth, CliAuth::BasicAuth(_)));
        let expected = format!("Basic {}", encode_auth("admin", "secret"));
        assert_eq!(authorization(&auth), Some(expected));
    }

    #[test]
    fn test_flag_token_has_priority() {
        let config = AuthConfig {
            gateway: "http://127.0.0.1:8080".into(),
            auth: OAUTH_2AUTH_TYPE.into(),
            token: "stored".into(),
        };
        let auth = CliAuth::from_config("flag", &config).unwrap();
        assert_eq!(authorization(&auth), Some("Bearer flag".to_string()));

        let auth = CliAuth::from_config("", &config).unwrap();
        assert_eq!(authorization(&auth), Some("Bearer stored".to_string()));
    }

    #[test]
    fn test_empty_bearer_token_sets_no_header() {
        let auth = CliAuth::from_config("", &AuthConfig::default()).unwrap();
        assert_eq!(authorization(&auth), None);
        assert_eq!(authorization(&NoAuth), None);
    }
}
