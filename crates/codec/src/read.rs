//! Shared read paths mapping resolution failures into serde errors.

use registry::{EnumRegistry, EnumValue};
use serde::de::Error;

/// Resolves a signed integer token.
///
/// In safe mode any unresolvable integer (including one wider than the
/// enum's `i32` domain) collapses to the default value; in strict mode the
/// resolution failure becomes a custom deserialization error.
pub(crate) fn from_integer<E: Error>(
    registry: &EnumRegistry,
    safe: bool,
    raw: i64,
) -> Result<EnumValue, E> {
    match i32::try_from(raw) {
        Ok(value) if safe => Ok(registry.from_value_lossy(value)),
        Ok(value) => registry.from_value(value).map_err(E::custom),
        Err(_) if safe => Ok(registry.default_value()),
        Err(_) => Err(E::custom(format_args!(
            "integer {raw} is out of range for enum type \"{}\"",
            registry.type_name()
        ))),
    }
}

/// Resolves an unsigned integer token through the signed path.
pub(crate) fn from_unsigned<E: Error>(
    registry: &EnumRegistry,
    safe: bool,
    raw: u64,
) -> Result<EnumValue, E> {
    i64::try_from(raw).map_or_else(
        |_| {
            if safe {
                Ok(registry.default_value())
            } else {
                Err(E::custom(format_args!(
                    "integer {raw} is out of range for enum type \"{}\"",
                    registry.type_name()
                )))
            }
        },
        |value| from_integer(registry, safe, value),
    )
}

/// Resolves a name token case-insensitively.
pub(crate) fn from_name<E: Error>(
    registry: &EnumRegistry,
    safe: bool,
    text: &str,
) -> Result<EnumValue, E> {
    if safe {
        Ok(registry.parse_lossy(text))
    } else {
        registry.parse(text, true).map_err(E::custom)
    }
}
