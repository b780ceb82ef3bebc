//! Typed access to flat `key=value` configuration files.
//!
//! One raw store, two reading styles: [`PropReader`] logs problems and
//! substitutes defaults so a caller is never interrupted; [`PropBuilder`]
//! populates many destinations in one fluent chain and hands back every
//! problem at once through its terminal `errors()` call.

pub mod accessor;
pub mod builder;
mod coerce;
pub mod error;
pub mod store;

// Explicit exports for better API clarity
pub use accessor::PropReader;
pub use builder::PropBuilder;
pub use error::{EnumTokenError, LoadError, LoadResult};
pub use store::PropStore;
