//! Chrome DevTools Protocol substrate shared by the capture and inspection
//! services.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{BrowserClient, PageSession};
pub use error::CdpError;
