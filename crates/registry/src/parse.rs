use crate::error::ResolveError;
use crate::registry::EnumRegistry;
use crate::trace;
use crate::value::{EnumValue, FLAG_SEPARATOR};

impl EnumRegistry {
    /// Resolves a name, or a comma-separated list of names, into a value.
    ///
    /// The input is split on `,` and each segment is trimmed; empty segments
    /// are discarded. Segments are matched exact-case first, then (when
    /// `case_insensitive` is set) by an ASCII case-insensitive scan in
    /// declaration order. Segments that match nothing are ignored as long as
    /// at least one segment matched.
    ///
    /// The matched values are combined with bitwise OR and handed to
    /// [`EnumRegistry::from_value`], so a parsed composite always carries the
    /// same canonical name and value the integer path would produce:
    /// `parse("A, B")` equals `from_value(a | b)` for declared options `A`
    /// and `B`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyInput`] for an empty string,
    /// [`ResolveError::CompositeUnsupported`] when multiple segments are
    /// given to a registry that does not combine flags, and
    /// [`ResolveError::UnknownName`] when no segment matches a declared
    /// option.
    pub fn parse(&self, text: &str, case_insensitive: bool) -> Result<EnumValue, ResolveError> {
        if text.is_empty() {
            return Err(ResolveError::EmptyInput {
                type_name: self.type_name().to_owned(),
            });
        }

        let segments: Vec<&str> = text
            .split(FLAG_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.len() > 1 && !self.supports_flags() {
            return Err(ResolveError::CompositeUnsupported {
                type_name: self.type_name().to_owned(),
                input: text.to_owned(),
            });
        }

        let mut combined = 0_i32;
        let mut matched = 0_usize;
        for segment in &segments {
            if let Some(option) = self.option_by_name(segment, case_insensitive) {
                combined |= option.value();
                matched += 1;
            }
        }

        if matched == 0 {
            return Err(ResolveError::UnknownName {
                type_name: self.type_name().to_owned(),
                input: text.to_owned(),
            });
        }

        trace::name_resolved(self.type_name(), text, combined);
        self.from_value(combined)
    }

    /// Parses case-insensitively, falling back to the default value on
    /// failure.
    ///
    /// This is the safe-mode counterpart of [`EnumRegistry::parse`].
    #[must_use]
    pub fn parse_lossy(&self, text: &str) -> EnumValue {
        self.parse(text, true).unwrap_or_else(|_| self.default_value())
    }
}
