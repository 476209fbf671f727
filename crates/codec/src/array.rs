use registry::{EnumRegistry, EnumValue, FLAG_SEPARATOR, NAME_SEPARATOR, camel_case_segment};
use serde::de::{self, DeserializeSeed, SeqAccess, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

use crate::CodecOptions;
use crate::read;

/// Reads and writes the string-array form of an enum value.
///
/// Writes emit one string per contributing name, e.g.
/// `["PartyTime", "HungryTime"]`. Reads accept arrays of name strings as
/// well as the single-string and integer forms.
#[derive(Clone, Copy, Debug)]
pub struct StringArrayCodec<'a> {
    registry: &'a EnumRegistry,
    options: CodecOptions,
}

impl<'a> StringArrayCodec<'a> {
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

    /// Writes `value` as one string per contributing name.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(&self, value: &EnumValue, serializer: S) -> Result<S::Ok, S::Error> {
        let segments: Vec<String> = value
            .name()
            .split(FLAG_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                if self.options.camel_case_text {
                    camel_case_segment(segment)
                } else {
                    segment.to_owned()
                }
            })
            .collect();
        serializer.collect_seq(segments)
    }

    /// Reads an enum value from its array, string, or integer form.
    ///
    /// # Errors
    ///
    /// Fails on a token of the wrong serde type, on an empty array, and in
    /// strict mode on any resolution failure.
    pub fn deserialize<'de, D: Deserializer<'de>>(&self, deserializer: D) -> Result<EnumValue, D::Error> {
        deserializer.deserialize_any(ArrayVisitor {
            registry: self.registry,
            options: self.options,
        })
    }
}

impl<'de> DeserializeSeed<'de> for &StringArrayCodec<'_> {
    type Value = EnumValue;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<EnumValue, D::Error> {
        StringArrayCodec::deserialize(self, deserializer)
    }
}

struct ArrayVisitor<'a> {
    registry: &'a EnumRegistry,
    options: CodecOptions,
}

impl<'de> Visitor<'de> for ArrayVisitor<'_> {
    type Value = EnumValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "a non-empty array of name strings for enum type \"{}\"",
            self.registry.type_name()
        )
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<EnumValue, A::Error> {
        let mut segments: Vec<String> = Vec::new();
        while let Some(segment) = seq.next_element::<String>()? {
            segments.push(segment);
        }
        // An empty array carries no names to resolve; safe mode does not
        // paper over the malformed shape.
        if segments.is_empty() {
            return Err(de::Error::invalid_length(0, &self));
        }
        read::from_name(self.registry, self.options.safe_convert, &segments.join(NAME_SEPARATOR))
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<EnumValue, E> {
        read::from_name(self.registry, self.options.safe_convert, text)
    }

    fn visit_i64<E: de::Error>(self, raw: i64) -> Result<EnumValue, E> {
        read::from_integer(self.registry, self.options.safe_convert, raw)
    }

    fn visit_u64<E: de::Error>(self, raw: u64) -> Result<EnumValue, E> {
        read::from_unsigned(self.registry, self.options.safe_convert, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_support::party_flags;

    #[test]
    fn writes_one_string_per_segment() {
        let registry = party_flags();
        let value = registry.from_value(11).unwrap();

        let written = StringArrayCodec::new(&registry)
            .serialize(&value, serde_json::value::Serializer)
            .unwrap();

        assert_eq!(written, json!(["PartyTime", "HungryTime"]));
    }

    #[test]
    fn camel_cases_each_string_on_write() {
        let registry = party_flags();
        let value = registry.from_value(11).unwrap();

        let options = CodecOptions::new().camel_case_text(true);
        let written = StringArrayCodec::with_options(&registry, options)
            .serialize(&value, serde_json::value::Serializer)
            .unwrap();

        assert_eq!(written, json!(["partyTime", "hungryTime"]));
    }

    #[test]
    fn single_valued_names_write_one_element() {
        let registry = party_flags();
        let value = registry.from_value(4).unwrap();

        let written = StringArrayCodec::new(&registry)
            .serialize(&value, serde_json::value::Serializer)
            .unwrap();

        assert_eq!(written, json!(["Sleepy"]));
    }

    #[test]
    fn reads_an_array_of_names() {
        let registry = party_flags();

        let value = StringArrayCodec::new(&registry)
            .deserialize(json!(["hungry", "party"]))
            .unwrap();

        assert_eq!(value.value(), 9);
        assert_eq!(value.name(), "Party, Hungry");
    }

    #[test]
    fn reads_the_single_string_and_integer_forms() {
        let registry = party_flags();
        let codec = StringArrayCodec::new(&registry);

        assert_eq!(codec.deserialize(json!("sleepyTime")).unwrap().value(), 6);
        assert_eq!(codec.deserialize(json!(15)).unwrap().name(), "All");
    }

    #[test]
    fn empty_array_fails_even_in_safe_mode() {
        let registry = party_flags();
        let options = CodecOptions::new().safe_convert(true);

        let error = StringArrayCodec::with_options(&registry, options)
            .deserialize(json!([]))
            .unwrap_err();

        assert!(error.to_string().contains("non-empty array"));
    }

    #[test]
    fn safe_mode_absorbs_unknown_names_in_the_array() {
        let registry = party_flags();
        let options = CodecOptions::new().safe_convert(true);

        let value = StringArrayCodec::with_options(&registry, options)
            .deserialize(json!(["brunch", "nap"]))
            .unwrap();

        assert_eq!(value, registry.default_value());
    }

    #[test]
    fn strict_mode_surfaces_an_all_unknown_array() {
        let registry = party_flags();

        let error = StringArrayCodec::new(&registry)
            .deserialize(json!(["brunch", "nap"]))
            .unwrap_err();

        assert!(error.to_string().contains("brunch"));
    }

    #[test]
    fn unknown_segments_alongside_known_ones_are_dropped() {
        let registry = party_flags();

        let value = StringArrayCodec::new(&registry)
            .deserialize(json!(["party", "brunch"]))
            .unwrap();

        assert_eq!(value.name(), "Party");
        assert_eq!(value.value(), 1);
    }
}
