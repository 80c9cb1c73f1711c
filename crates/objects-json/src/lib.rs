//! JSON helpers for the object exercises.
//!
//! # Scope
//!
//! - [`serialize`] turns any `Serialize` value into compact JSON text. Field
//!   order follows the value's own iteration order: declaration order for
//!   derived structs, insertion order for [`serde_json::Map`].
//! - [`deserialize`] parses JSON text and rebuilds a value *positionally*:
//!   the encoded values are handed, in encoding order, to the target type's
//!   [`Reconstruct`] impl. Field names are never consulted, so a type whose
//!   constructor order differs from the encoded order is populated wrongly
//!   rather than rejected.
//!
//! ```
//! use objects_json::{Arguments, JsonError, Reconstruct, deserialize, serialize};
//!
//! #[derive(Debug, PartialEq, serde::Serialize)]
//! struct Circle {
//!     radius: f64,
//! }
//!
//! impl Reconstruct for Circle {
//!     fn reconstruct(args: &mut Arguments) -> Result<Self, JsonError> {
//!         Ok(Self { radius: args.take()? })
//!     }
//! }
//!
//! let text = serialize(&Circle { radius: 10.0 })?;
//! assert_eq!(text, r#"{"radius":10.0}"#);
//! assert_eq!(deserialize::<Circle>(&text)?, Circle { radius: 10.0 });
//! # Ok::<(), JsonError>(())
//! ```

mod arguments;
mod error;

pub use arguments::Arguments;
pub use error::JsonError;

use serde::Serialize;
use serde_json::Value;

/// A type that can be rebuilt from positional values.
///
/// Implementors pull their constructor parameters from `args` in order with
/// [`Arguments::take`]. The mapping from encoded order to parameters is
/// declared here, explicitly, instead of being inferred at runtime.
pub trait Reconstruct: Sized {
    /// Build an instance from the positional values in `args`.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Argument`] when a positional value cannot be
    /// converted to the parameter type it is assigned to.
    fn reconstruct(args: &mut Arguments) -> Result<Self, JsonError>;
}

/// Encode `value` as compact JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if the value's `Serialize` impl fails, for
/// example a map whose keys are not strings.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse `text` and rebuild a `T` from its values in encoding order.
///
/// # Errors
///
/// Returns [`JsonError::Syntax`] for malformed text and
/// [`JsonError::Argument`] when a positional value does not fit the
/// parameter `T` assigns it to.
pub fn deserialize<T: Reconstruct>(text: &str) -> Result<T, JsonError> {
    deserialize_with(text, T::reconstruct)
}

/// Like [`deserialize`], with the positional constructor given as a closure.
///
/// ```
/// use objects_json::deserialize_with;
///
/// let pair: (String, u8) = deserialize_with(r#"{"name":"Ann","age":30}"#, |args| {
///     Ok((args.take()?, args.take()?))
/// })?;
/// assert_eq!(pair, ("Ann".to_string(), 30));
/// # Ok::<(), objects_json::JsonError>(())
/// ```
///
/// # Errors
///
/// Same as [`deserialize`], plus anything `factory` itself returns.
pub fn deserialize_with<T, F>(text: &str, factory: F) -> Result<T, JsonError>
where
    F: FnOnce(&mut Arguments) -> Result<T, JsonError>,
{
    let value: Value = serde_json::from_str(text)?;
    let mut args = Arguments::from_value(value);
    let instance = factory(&mut args)?;
    args.finish();
    Ok(instance)
}
