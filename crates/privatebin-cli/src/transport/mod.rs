//! Ways of getting a sealed paste to the server.

mod http;

pub use http::HttpTransport;
