use registry::{EnumRegistry, EnumValue, camel_case_name};
use serde::de::{self, DeserializeSeed, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

use crate::CodecOptions;
use crate::read;

/// Reads and writes the text form of an enum value.
///
/// Writes emit the canonical name, camel-cased per segment when
/// `camel_case_text` is set. Reads accept name strings case-insensitively
/// and, unless `allow_integer_values` is cleared, integer tokens.
#[derive(Clone, Copy, Debug)]
pub struct TextCodec<'a> {
    registry: &'a EnumRegistry,
    options: CodecOptions,
}

impl<'a> TextCodec<'a> {
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

    /// Writes `value` as its text form.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(&self, value: &EnumValue, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.camel_case_text {
            serializer.serialize_str(&camel_case_name(value.name()))
        } else {
            serializer.serialize_str(value.name())
        }
    }

    /// Reads an enum value from its text (or integer) form.
    ///
    /// # Errors
    ///
    /// Fails on a token of the wrong serde type, on an integer token when
    /// `allow_integer_values` is cleared, and in strict mode on any
    /// resolution failure.
    pub fn deserialize<'de, D: Deserializer<'de>>(&self, deserializer: D) -> Result<EnumValue, D::Error> {
        deserializer.deserialize_any(TextVisitor {
            registry: self.registry,
            options: self.options,
        })
    }
}

impl<'de> DeserializeSeed<'de> for &TextCodec<'_> {
    type Value = EnumValue;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<EnumValue, D::Error> {
        TextCodec::deserialize(self, deserializer)
    }
}

struct TextVisitor<'a> {
    registry: &'a EnumRegistry,
    options: CodecOptions,
}

impl TextVisitor<'_> {
    fn integer_rejected<E: de::Error>(&self, raw: impl fmt::Display) -> E {
        E::custom(format_args!(
            "integer token {raw} is not accepted for enum type \"{}\"",
            self.registry.type_name()
        ))
    }
}

impl Visitor<'_> for TextVisitor<'_> {
    type Value = EnumValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "a name string for enum type \"{}\"",
            self.registry.type_name()
        )
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<EnumValue, E> {
        read::from_name(self.registry, self.options.safe_convert, text)
    }

    fn visit_i64<E: de::Error>(self, raw: i64) -> Result<EnumValue, E> {
        if self.options.allow_integer_values {
            read::from_integer(self.registry, self.options.safe_convert, raw)
        } else {
            Err(self.integer_rejected(raw))
        }
    }

    fn visit_u64<E: de::Error>(self, raw: u64) -> Result<EnumValue, E> {
        if self.options.allow_integer_values {
            read::from_unsigned(self.registry, self.options.safe_convert, raw)
        } else {
            Err(self.integer_rejected(raw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_support::party_flags;

    #[test]
    fn writes_the_canonical_name() {
        let registry = party_flags();
        let value = registry.from_value(11).unwrap();

        let written = TextCodec::new(&registry)
            .serialize(&value, serde_json::value::Serializer)
            .unwrap();

        assert_eq!(written, json!("PartyTime, HungryTime"));
    }

    #[test]
    fn camel_cases_each_segment_on_write() {
        let registry = party_flags();
        let value = registry.from_value(11).unwrap();

        let options = CodecOptions::new().camel_case_text(true);
        let written = TextCodec::with_options(&registry, options)
            .serialize(&value, serde_json::value::Serializer)
            .unwrap();

        assert_eq!(written, json!("partyTime, hungryTime"));
    }

    #[test]
    fn reads_names_case_insensitively() {
        let registry = party_flags();

        let value = TextCodec::new(&registry)
            .deserialize(json!("sleepytime, party"))
            .unwrap();

        assert_eq!(value.value(), 7);
        assert_eq!(value.name(), "PartyTime, SleepyTime");
    }

    #[test]
    fn reads_integers_when_allowed() {
        let registry = party_flags();

        let value = TextCodec::new(&registry).deserialize(json!(10)).unwrap();

        assert_eq!(value.name(), "HungryTime");
    }

    #[test]
    fn rejects_integers_when_disallowed_even_in_safe_mode() {
        let registry = party_flags();
        let options = CodecOptions::new()
            .safe_convert(true)
            .allow_integer_values(false);

        let error = TextCodec::with_options(&registry, options)
            .deserialize(json!(3))
            .unwrap_err();

        assert!(error.to_string().contains("not accepted"));
    }

    #[test]
    fn safe_mode_absorbs_an_unknown_name() {
        let registry = party_flags();
        let options = CodecOptions::new().safe_convert(true);

        let value = TextCodec::with_options(&registry, options)
            .deserialize(json!("brunch"))
            .unwrap();

        assert_eq!(value, registry.default_value());
    }

    #[test]
    fn strict_mode_surfaces_an_unknown_name() {
        let registry = party_flags();

        let error = TextCodec::new(&registry)
            .deserialize(json!("brunch"))
            .unwrap_err();

        assert!(error.to_string().contains("brunch"));
    }
}
