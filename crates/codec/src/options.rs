/// Per-site configuration shared by the format adapters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodecOptions {
    /// Absorb resolution failures into the registry's default value instead
    /// of surfacing a deserialization error. Token-shape failures (a wrong
    /// serde type, an empty array, a disallowed integer) are never absorbed.
    pub safe_convert: bool,
    /// Camel-case each name segment on write, e.g. `"PartyTime, Hungry"`
    /// becomes `"partyTime, hungry"`.
    pub camel_case_text: bool,
    /// Accept integer tokens when reading the text form. Only the text
    /// adapter consults this; the integer and string-array adapters always
    /// accept integers.
    pub allow_integer_values: bool,
}

impl CodecOptions {
    /// Returns the default configuration: strict conversion, exact names on
    /// write, integer tokens accepted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            safe_convert: false,
            camel_case_text: false,
            allow_integer_values: true,
        }
    }
}

impl CodecOptions {
    /// Sets whether resolution failures are absorbed into the default value.
    #[must_use]
    pub const fn safe_convert(mut self, safe_convert: bool) -> Self {
        self.safe_convert = safe_convert;
        self
    }

    /// Sets whether written names are camel-cased per segment.
    #[must_use]
    pub const fn camel_case_text(mut self, camel_case_text: bool) -> Self {
        self.camel_case_text = camel_case_text;
        self
    }

    /// Sets whether the text adapter accepts integer tokens.
    #[must_use]
    pub const fn allow_integer_values(mut self, allow_integer_values: bool) -> Self {
        self.allow_integer_values = allow_integer_values;
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::new()
    }
}
