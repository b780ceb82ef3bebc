//! Fluent population of many typed destinations in one pass.
//!
//! [`PropBuilder`] reads the same flat store as
//! [`PropReader`](crate::PropReader) but applies the opposite failure
//! policy: nothing is logged and nothing is raised mid-chain. Every problem
//! becomes an entry in a per-instance error set, inspected once through the
//! terminal [`errors`](PropBuilder::errors) call. Destinations are plain
//! `&mut` cells owned by the caller; a failed operation leaves its
//! destination untouched.
//!
//! ```no_run
//! use flatprops::PropBuilder;
//!
//! # fn main() -> Result<(), flatprops::LoadError> {
//! let mut host = String::new();
//! let mut port = 0_i32;
//! let mut verbose = false;
//!
//! let mut builder = PropBuilder::load("app.properties")?;
//! builder
//!     .set_string(&mut host, "app.host")
//!     .set_integer(&mut port, "app.port")
//!     .set_bool_or(&mut verbose, "app.verbose", "Y", false);
//!
//! if builder.has_errors() {
//!     for error in builder.errors() {
//!         eprintln!("{error}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::coerce::{self, Fault};
use crate::error::LoadResult;
use crate::store::PropStore;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;

/// Chained typed writes into caller-owned destinations, accumulating every
/// failure instead of stopping at the first.
#[derive(Debug)]
pub struct PropBuilder {
    store: PropStore,
    errors: BTreeSet<String>,
}

impl PropBuilder {
    /// Load the backing store from a properties file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        Ok(Self::new(PropStore::load(path)?))
    }

    /// Wrap an already-loaded store. The error set starts empty and is
    /// owned by this instance; independent builders never share errors.
    pub fn new(store: PropStore) -> Self {
        Self {
            store,
            errors: BTreeSet::new(),
        }
    }

    /// Append the raw value onto `dest` iff the key exists; otherwise
    /// record an existence error.
    pub fn set_string(&mut self, dest: &mut String, key: &str) -> &mut Self {
        match self.store.get(key) {
            Some(value) => dest.push_str(value),
            None => self.record(key, &Fault::Missing),
        }
        self
    }

    /// As [`set_string`](Self::set_string), uppercasing the value first.
    pub fn set_string_upper(&mut self, dest: &mut String, key: &str) -> &mut Self {
        match self.store.get(key) {
            Some(value) => dest.push_str(&value.to_uppercase()),
            None => self.record(key, &Fault::Missing),
        }
        self
    }

    /// Parse the value as an `i32` and overwrite `dest`. Records an
    /// existence error for a missing key, or a number error for a value
    /// that is not all decimal digits or does not fit the type.
    pub fn set_integer(&mut self, dest: &mut i32, key: &str) -> &mut Self {
        match coerce::lookup_decimal(&self.store, key) {
            Ok(parsed) => *dest = parsed,
            Err(fault) => self.record(key, &fault),
        }
        self
    }

    /// As [`set_integer`](Self::set_integer) at 64 bits.
    pub fn set_long(&mut self, dest: &mut i64, key: &str) -> &mut Self {
        match coerce::lookup_decimal(&self.store, key) {
            Ok(parsed) => *dest = parsed,
            Err(fault) => self.record(key, &fault),
        }
        self
    }

    /// Write whether the stored value case-insensitively equals `"Y"`.
    pub fn set_boolean(&mut self, dest: &mut bool, key: &str) -> &mut Self {
        self.set_bool(dest, key, "Y")
    }

    /// Write whether the stored value case-insensitively equals `flag`.
    /// No trimming is applied. A missing key records an existence error
    /// and leaves `dest` untouched.
    pub fn set_bool(&mut self, dest: &mut bool, key: &str, flag: &str) -> &mut Self {
        match self.store.get(key) {
            Some(value) => *dest = value.eq_ignore_ascii_case(flag),
            None => self.record(key, &Fault::Missing),
        }
        self
    }

    /// As [`set_bool`](Self::set_bool), but a missing key writes `default`
    /// without recording an error.
    pub fn set_bool_or(&mut self, dest: &mut bool, key: &str, flag: &str, default: bool) -> &mut Self {
        if !self.store.has(key) {
            *dest = default;
            return self;
        }
        self.set_bool(dest, key, flag)
    }

    /// Convert the comma-separated value into enumerated values through the
    /// caller's `FromStr` implementation and add them all to `dest`.
    ///
    /// Additive on success; pre-existing members are preserved. Any token
    /// that fails to convert discards the entire result and records one
    /// illegal-enum error, so `dest` never receives a partial set.
    pub fn set_enum_set<E>(&mut self, dest: &mut HashSet<E>, key: &str) -> &mut Self
    where
        E: FromStr + Eq + Hash,
    {
        let outcome = coerce::lookup(&self.store, key)
            .and_then(|value| coerce::parse_tokens(value).map_err(Fault::from));
        match outcome {
            Ok(values) => dest.extend(values),
            Err(fault) => self.record(key, &fault),
        }
        self
    }

    /// Terminal operation: the errors accumulated over the whole chain.
    ///
    /// Idempotent; repeated calls observe the same set, one entry per
    /// distinct key-plus-reason pair.
    pub fn errors(&self) -> &BTreeSet<String> {
        &self.errors
    }

    /// Whether any chained operation failed so far.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn record(&mut self, key: &str, fault: &Fault) {
        self.errors.insert(fault.builder_message(key));
    }
}
