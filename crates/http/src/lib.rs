//! Folio HTTP module providing the typed API client and the wire types shared
//! with the remote content API.

pub mod types;

#[cfg(feature = "client")]
pub mod client;
