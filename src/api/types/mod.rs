//! Resource types for the Ecwid REST API.
//!
//! Writable fields live in `New*` structs; the read-side structs flatten
//! them and add server-assigned fields, and deref to them.

pub mod attribute;
pub mod category;
pub mod common;
pub mod order;
pub mod product;
pub mod product_type;
pub mod store;
pub mod variation;

// Re-export all types for convenience
pub use attribute::*;
pub use category::*;
pub use common::*;
pub use order::*;
pub use product::*;
pub use product_type::*;
pub use store::*;
pub use variation::*;
