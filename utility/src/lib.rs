mod error;
mod openfaas;
pub use openfaas::*;

pub use error::*;
