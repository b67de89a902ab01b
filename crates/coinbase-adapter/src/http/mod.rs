/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Signed HTTP requests and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod merchant;
pub mod public;
pub mod signature;
pub mod transactions;
pub mod transport;
pub mod user;

pub use error::{CoinbaseError, Result};
pub use signature::{RequestSigner, SignedHeaders};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

pub use client::{ClientConfig, CoinbaseClient, DEFAULT_BASE_URL};
