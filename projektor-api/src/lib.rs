mod api_url;
mod client;
mod credentials;

pub mod domain;

pub use api_url::*;
pub use client::*;
pub use credentials::*;
