use registry::{EnumRegistry, EnumValue};
use serde::de::{self, DeserializeSeed, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

use crate::CodecOptions;
use crate::read;

/// Reads and writes the bare integer form of an enum value.
///
/// Writes emit the resolved `i32`. Reads accept integers and, as a
/// convenience, name strings; both go through the registry so the result is
/// always canonical.
#[derive(Clone, Copy, Debug)]
pub struct IntCodec<'a> {
    registry: &'a EnumRegistry,
    options: CodecOptions,
}

impl<'a> IntCodec<'a> {
    /// Creates a codec with the default [`CodecOptions`].
    #[must_use]
    pub fn new(registry: &'a EnumRegistry) -> Self {
        Self::with_options(registry, CodecOptions::new())
    }

    /// Creates a codec with explicit options.
    #[must_use]
    pub const fn with_options(registry: &'a EnumRegistry, options: CodecOptions) -> Self {
        Self { registry, options }
    }

    /// Writes `value` as its integer form.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(&self, value: &EnumValue, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(value.value())
    }

    /// Reads an enum value from its integer (or name) form.
    ///
    /// # Errors
    ///
    /// Fails on a token of the wrong serde type, and in strict mode on any
    /// resolution failure.
    pub fn deserialize<'de, D: Deserializer<'de>>(&self, deserializer: D) -> Result<EnumValue, D::Error> {
        deserializer.deserialize_any(IntVisitor {
            registry: self.registry,
            options: self.options,
        })
    }
}

impl<'de> DeserializeSeed<'de> for &IntCodec<'_> {
    type Value = EnumValue;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<EnumValue, D::Error> {
        IntCodec::deserialize(self, deserializer)
    }
}

struct IntVisitor<'a> {
    registry: &'a EnumRegistry,
    options: CodecOptions,
}

impl Visitor<'_> for IntVisitor<'_> {
    type Value = EnumValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "an integer or name string for enum type \"{}\"",
            self.registry.type_name()
        )
    }

    fn visit_i64<E: de::Error>(self, raw: i64) -> Result<EnumValue, E> {
        read::from_integer(self.registry, self.options.safe_convert, raw)
    }

    fn visit_u64<E: de::Error>(self, raw: u64) -> Result<EnumValue, E> {
        read::from_unsigned(self.registry, self.options.safe_convert, raw)
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<EnumValue, E> {
        read::from_name(self.registry, self.options.safe_convert, text)
    }
}
