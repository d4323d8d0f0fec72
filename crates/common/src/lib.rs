//! Types shared between the API server and its clients.

pub mod response;

pub use response::Response;
