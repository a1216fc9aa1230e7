use thiserror::Error;

///boxed cause carried by the request errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

///cause attached to an error when the caller cancelled the call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("request cancelled")]
pub struct Cancelled;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(#[from] url::ParseError),

    ///the request URL or the request itself could not be built
    #[error("cannot create URL: {url}, error: {source}")]
    RequestConstruction {
        url: String,
        #[source]
        source: BoxError,
    },
    ///the transport could not reach the gateway, or the call was cancelled first
    #[error("cannot connect to URL: {gateway}, error: {source}")]
    Connection {
        gateway: String,
        #[source]
        source: BoxError,
    },
    #[error("cannot read result from OpenFaaS on URL: {gateway}")]
    Read {
        gateway: String,
        #[source]
        source: BoxError,
    },
    #[error("cannot parse result from OpenFaaS on URL: {gateway}\n{source}")]
    Decode {
        gateway: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unauthorized access, run \"faas-cli login\" to setup authentication for this server")]
    Unauthorized,
    #[error("no such function: {0}")]
    NotFound(String),
    #[error("server returned unexpected status code: {status} - {body}")]
    UnexpectedStatus { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, crate::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_connection_error_keeps_cancelled_source() {
        let err = Error::Connection {
            gateway: "http://127.0.0.1:8080/".into(),
            source: Box::new(Cancelled),
        };
        let source = err.source().expect("connection error should carry a source");
        assert_eq!(source.downcast_ref::<Cancelled>(), Some(&Cancelled));
        assert_eq!(
            err.to_string(),
            "cannot connect to URL: http://127.0.0.1:8080/, error: request cancelled"
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            Error::NotFound("missing".into()).to_string(),
            "no such function: missing"
        );
        assert!(Error::Unauthorized.to_string().contains("faas-cli login"));
        let err = Error::UnexpectedStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(
            err.to_string(),
            "server returned unexpected status code: 502 - bad gateway"
        );
    }

    #[test]
    fn test_decode_error_source() {
        let json_err = serde_json::from_str::<u64>("{").unwrap_err();
        let err = Error::Decode {
            gateway: "http://gw/".into(),
            source: json_err,
        };
        assert!(err.source().unwrap().is::<serde_json::Error>());
    }
}
