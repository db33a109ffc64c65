//! Pure data types for dosh: directory entries, process records, results, errors.
//!
//! This crate is a leaf dependency with no async runtime and no I/O. Front ends
//! that only render kernel output can depend on it without pulling in
//! dosh-kernel and tokio.

pub mod dir_entry;
pub mod error;
pub mod process;
pub mod result;

// Flat re-exports for convenience
pub use dir_entry::*;
pub use error::*;
pub use process::*;
pub use result::*;
