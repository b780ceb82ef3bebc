//! One-shot typed reads with a log-and-continue failure policy.
//!
//! [`PropReader`] never fails the caller: a missing key or an unparseable
//! value is reported through `tracing` and a type-appropriate default is
//! returned instead. The one exception is an illegal enumerated token in
//! [`PropReader::get_enum_set`], which surfaces as an error because there is
//! no sensible default for a partially unconvertible set.

use crate::coerce::{self, Fault};
use crate::error::{EnumTokenError, LoadResult};
use crate::store::PropStore;
use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;
use tracing::error;

/// Typed read access over a [`PropStore`], reporting problems to the log
/// and substituting defaults so the caller is never interrupted.
#[derive(Debug, Clone)]
pub struct PropReader {
    store: PropStore,
}

impl PropReader {
    /// Load the backing store from a properties file.
    ///
    /// File-read failure is the only fatal condition; everything after a
    /// successful load degrades to logging plus defaults.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        Ok(Self::new(PropStore::load(path)?))
    }

    /// Wrap an already-loaded store.
    pub fn new(store: PropStore) -> Self {
        Self { store }
    }

    /// The underlying raw store.
    pub fn store(&self) -> &PropStore {
        &self.store
    }

    /// Raw value for the key, or the empty string if the key is absent
    /// (the miss is logged).
    pub fn get_string(&self, key: &str) -> String {
        match coerce::lookup(&self.store, key) {
            Ok(value) => value.to_string(),
            Err(fault) => {
                self.report(key, &fault);
                String::new()
            }
        }
    }

    /// As [`get_string`](Self::get_string), uppercased after lookup.
    pub fn get_string_upper(&self, key: &str) -> String {
        self.get_string(key).to_uppercase()
    }

    /// Value parsed as an `i32`, or `0` when the key is missing or the
    /// value is not a decimal number (both logged).
    pub fn get_int(&self, key: &str) -> i32 {
        self.get_number(key)
    }

    /// Value parsed as an `i64`, same contract as [`get_int`](Self::get_int).
    pub fn get_long(&self, key: &str) -> i64 {
        self.get_number(key)
    }

    /// Nullable variant of [`get_int`](Self::get_int).
    ///
    /// A missing key logs and yields `None`. A present-but-blank value
    /// yields `None` without logging; blank is how an intentionally
    /// unassigned property reads, not an error. Anything else follows the
    /// usual numeric contract.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        let value = match coerce::lookup(&self.store, key) {
            Ok(value) => value,
            Err(fault) => {
                self.report(key, &fault);
                return None;
            }
        };
        if value.trim().is_empty() {
            return None;
        }
        match coerce::parse_decimal(value) {
            Ok(parsed) => Some(parsed),
            Err(fault) => {
                self.report(key, &fault);
                None
            }
        }
    }

    /// True iff the stored value case-insensitively equals `"Y"`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_flag(key, "Y")
    }

    /// True iff the stored value case-insensitively equals `flag`.
    ///
    /// No trimming is applied: `" Y"` does not match `"Y"`. A missing key
    /// is logged and reads as `false`.
    pub fn get_bool_flag(&self, key: &str, flag: &str) -> bool {
        match coerce::lookup(&self.store, key) {
            Ok(value) => value.eq_ignore_ascii_case(flag),
            Err(fault) => {
                self.report(key, &fault);
                false
            }
        }
    }

    /// As [`get_bool_flag`](Self::get_bool_flag), but a missing key yields
    /// `default` without any logging. This is the intentional no-error
    /// escape path for optional properties.
    pub fn get_bool_or(&self, key: &str, flag: &str, default: bool) -> bool {
        match self.store.get(key) {
            Some(value) => value.eq_ignore_ascii_case(flag),
            None => default,
        }
    }

    /// Comma-separated value converted into a set of enumerated values via
    /// the caller's `FromStr` implementation (exact, case-sensitive names).
    ///
    /// A missing key is logged and yields an empty set. An unrecognized
    /// token fails the whole call; no partial set is ever returned.
    pub fn get_enum_set<E>(&self, key: &str) -> Result<HashSet<E>, EnumTokenError>
    where
        E: FromStr + Eq + Hash,
    {
        let value = match coerce::lookup(&self.store, key) {
            Ok(value) => value,
            Err(fault) => {
                self.report(key, &fault);
                return Ok(HashSet::new());
            }
        };
        match coerce::parse_tokens(value) {
            Ok(values) => Ok(values.into_iter().collect()),
            Err(bad) => Err(EnumTokenError {
                key: key.to_string(),
                token: bad.0,
            }),
        }
    }

    fn get_number<T: FromStr + Default>(&self, key: &str) -> T {
        match coerce::lookup_decimal(&self.store, key) {
            Ok(parsed) => parsed,
            Err(fault) => {
                self.report(key, &fault);
                T::default()
            }
        }
    }

    fn report(&self, key: &str, fault: &Fault) {
        let source = self.store.source_name();
        match fault {
            Fault::Missing => {
                error!("Property {key} not found in file {source}");
            }
            Fault::NotNumeric { value } => {
                error!("Property {key} has value [{value}] which is not an integer in file: {source}");
            }
            Fault::IllegalToken { token } => {
                error!("Property {key} contains illegal enum value [{token}] in file: {source}");
            }
        }
    }
}
