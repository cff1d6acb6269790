//! JSON-to-type mapping for gateway responses
//!
//! The transport layer hands over decoded but untyped
//! [`serde_json::Value`]s; this module is the single seam where they
//! become typed entities. Keeping the step explicit keeps shape
//! failures ([`ChipError::Mapping`]) distinguishable from transport
//! failures, which the transport layer reports itself.

use crate::error::{ChipError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Map a decoded JSON value into a typed entity.
///
/// Unknown keys in `value` are ignored. A field declared `Option` on
/// the target accepts JSON `null` (and absence) as `None`; a required
/// field that is missing, `null`, or of the wrong type fails with
/// [`ChipError::Mapping`].
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(ChipError::Mapping)
}
