use crate::client::Client;
use crate::utils::{path_segments, FUNCTION_PATH, NAMESPACE_KEY, USAGE_KEY};
use http::StatusCode;
use reqwest::{Method, Response, Url};
use tokio_util::sync::CancellationToken;
use utility::faas::types::model::FunctionStatus;
use utility::{Cancelled, Error, Result};

///builds `<gateway>/system/function/<name>?namespace=<ns>&usage=1`
///
///the gateway path prefix and unrelated query pairs are kept, the function name is
///escaped as a single path segment
pub fn function_info_url(gateway: &Url, function_name: &str, namespace: &str) -> Result<Url> {
    let mut url = gateway.clone();
    url.path_segments_mut()
        .map_err(|_| Error::RequestConstruction {
            url: gateway.to_string(),
            source: "gateway URL cannot be used as a base".into(),
        })?
        .pop_if_empty()
        .extend(path_segments(FUNCTION_PATH))
        .push(function_name);

    let kept: Vec<(String, String)> = gateway
        .query_pairs()
        .filter(|(k, _)| k != NAMESPACE_KEY && k != USAGE_KEY)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.extend_pairs(kept);
        if !namespace.is_empty() {
            pairs.append_pair(NAMESPACE_KEY, namespace);
        }
        // Request CPU/RAM usage if available
        pairs.append_pair(USAGE_KEY, "1");
    }
    Ok(url)
}

///get an OpenFaaS function information
impl Client {
    pub async fn get_function_info(
        &self,
        cancel: &CancellationToken,
        function_name: &str,
        namespace: &str,
    ) -> Result<FunctionStatus> {
        let url = function_info_url(&self.gateway, function_name, namespace)?;

        let req = self
            .new_request_by_url(Method::GET, url.clone(), None)
            .map_err(|e| Error::RequestConstruction {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let res = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Connection {
                gateway: self.gateway.to_string(),
                source: Box::new(Cancelled),
            }),
            res = self.do_request(req) => res.map_err(|e| Error::Connection {
                gateway: self.gateway.to_string(),
                source: Box::new(e),
            }),
        }?;

        let status = res.status();
        tracing::debug!(status = status.as_u16(), function = function_name, "gateway responded");

        // the response is moved into read_body or dropped with this scope
        match status {
            StatusCode::OK => {
                let body = self.read_body(cancel, res).await?;
                serde_json::from_str(body.as_str()).map_err(|e| Error::Decode {
                    gateway: self.gateway.to_string(),
                    source: e,
                })
            }
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            StatusCode::NOT_FOUND => Err(Error::NotFound(function_name.to_string())),
            status => {
                let body = self.read_body(cancel, res).await?;
                Err(Error::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn read_body(&self, cancel: &CancellationToken, res: Response) -> Result<String> {
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Box::new(Cancelled) as utility::BoxError),
            body = res.text() => body.map_err(|e| Box::new(e) as utility::BoxError),
        };
        body.map_err(|source| Error::Read {
            gateway: self.gateway.to_string(),
            source,
        })
    }
}
