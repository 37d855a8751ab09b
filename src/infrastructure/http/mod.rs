//! Shortening service client over HTTP.

mod http_gateway;

pub use http_gateway::HttpShortenGateway;
