//! Resource endpoints, one `impl EcwidClient` block per resource.

pub mod categories;
pub mod images;
pub mod orders;
pub mod product_types;
pub mod products;
pub mod store;
pub mod variations;

pub use images::IMAGE_CONTENT_TYPE;
