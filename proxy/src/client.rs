use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder, Url};
use std::sync::Arc;
use utility::Result;

///an API client to perform all operations against an OpenFaaS gateway
///
///the client only holds configuration, so clones share the same connection pool
///and it can be used from many tasks at once
#[derive(Clone)]
pub struct Client {
    pub(crate) http_client: reqwest::Client,
    ///ClientAuth a type implementing ClientAuth interface for client authentication
    pub client_auth: Arc<dyn ClientAuth>,
    ///Gatewayurl base url of OpenFaaS gateway
    pub gateway: Url,
    ///user agent for the client
    pub user_agent: Option<String>,
}

///ClientAuth an interface for client authentication.
// to add authentication to the client implement this interface
pub trait ClientAuth: Send + Sync {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder>;
}

impl Client {
    /// initializes a new API client with a default transport
    pub fn new(auth: Arc<dyn ClientAuth>, gateway: &str) -> Result<Client> {
        Client::with_http_client(auth, gateway, reqwest::Client::new())
    }

    /// initializes a new API client on top of a preconfigured transport,
    /// see [`crate::proxy::make_http_client`]
    pub fn with_http_client(
        auth: Arc<dyn ClientAuth>,
        gateway: &str,
        http_client: reqwest::Client,
    ) -> Result<Client> {
        let url = gateway.trim_end_matches('/');
        let url = Url::parse(url)?;

        Ok(Client {
            http_client,
            client_auth: auth,
            gateway: url,
            user_agent: None,
        })
    }

    pub fn set_user_agent(&mut self, user_agent: &str) {
        self.user_agent = Some(user_agent.to_string());
    }

    ///create a new HTTP request with authentication for an already composed URL
    pub fn new_request_by_url(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<reqwest::Request> {
        let mut req = self.http_client.request(method, url);

        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }
        if let Some(agent) = &self.user_agent {
            req = req.header(USER_AGENT, agent.as_str());
        }
        let req = self.client_auth.set(req)?;

        Ok(req.build()?)
    }

    ///perform an HTTP request through the transport
    pub(crate) async fn do_request(
        &self,
        req: reqwest::Request,
    ) -> reqwest::Result<reqwest::Response> {
        tracing::debug!(method = %req.method(), url = %req.url(), "sending request to gateway");
        self.http_client.execute(req).await
    }
}
