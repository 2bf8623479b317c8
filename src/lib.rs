//! # Simple and type-safe client for the UltraDNS REST API.
//!
//! Implements a blocking client for the read-only parts of the [UltraDNS API]:
//! the API version, the accounts of the logged-in user, their zones and the
//! resource record sets of a zone. Responses are decoded into typed structs.
//!
//! ## Examples
//!
//! ```no_run
//! use ultradns::Client;
//!
//! let mut client = Client::new();
//! client.authenticate("<USERNAME>", "<PASSWORD>").unwrap();
//!
//! for zone in client.get_all_zones().unwrap() {
//!     let mut offset = 0;
//!     loop {
//!         let (rrsets, info) = client
//!             .get_rrsets(&zone.properties.name, offset, 100)
//!             .unwrap();
//!         for rrset in rrsets {
//!             println!("{} {} {:?}", rrset.owner_name, rrset.rrtype, rrset.rdata);
//!         }
//!         match info.next_offset() {
//!             Some(next) => offset = next,
//!             None => break,
//!         }
//!     }
//! }
//! ```
//!
//! A [Client] is not meant to be shared between threads without locking:
//! [Client::authenticate] replaces the session in place.
//!
//! Requests and failures are reported through the [log] facade.
//!
//! [UltraDNS API]: https://docs.ultradns.com/

pub mod account;
mod client;
mod errors;
pub mod listing;
mod payload;
pub mod record;
pub mod session;
mod utils;
pub mod zone;

pub use client::*;
pub use errors::*;
pub(crate) use payload::*;
pub use session::Session;
