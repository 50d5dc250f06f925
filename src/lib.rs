//! Object identifiers for GSSAPI bindings.
//!
//! An [`Oid`] holds the BER encoding of an identifier, either in its own allocation, borrowed from
//! the caller, or wrapped straight from a buffer the native library handed out.
//!
//! ```
//! use gss_oid::{known, Oid};
//!
//! let mech: Oid = "1.2.840.113554.1.2.2".parse().unwrap();
//! assert_eq!(mech, known::KRB5);
//! assert_eq!(mech.as_bytes(), [0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x02]);
//! ```

pub mod ber;
mod buffer;
mod error;
#[cfg(all(unix, feature = "gssapi"))]
pub mod gssapi;
pub mod known;
mod oid;
mod set;

pub use buffer::{Ownership, ReleaseFn};
pub use error::{Error, InvalidArgument, MalformedKind, Result};
pub use oid::{Oid, OidBuilder};
pub use set::OidSet;
