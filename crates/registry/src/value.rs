use ::core::fmt;

/// Character that separates the contributing names of a composite value.
pub const FLAG_SEPARATOR: char = ',';

/// Canonical separator used when joining contributing names into a composite.
pub const NAME_SEPARATOR: &str = ", ";

/// The result of any lookup, parse, or combine operation on a registry.
///
/// A resolved value is either a copy of a declared option or a composite
/// synthesized by the canonical decomposition walk. Both share this shape:
/// a human-readable name and the underlying integer. Two resolved values are
/// equal only when both the name and the value match, and hashing is
/// consistent with that equality.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumValue {
    name: String,
    value: i32,
}

impl EnumValue {
    pub(crate) fn new(name: String, value: i32) -> Self {
        Self { name, value }
    }

    /// Returns the human-readable name.
    ///
    /// For a composite this is the comma-joined list of contributing declared
    /// names in ascending value order, e.g. `"Party, Sleepy"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Reports whether every bit of `other` is set in `self`.
    ///
    /// This is reflexive (`x.has_flag(&x)` is always `true`) and checks the
    /// full bit pattern of `other`, so a composite flag is only reported as
    /// present when all of its contributing bits are.
    #[must_use]
    pub const fn has_flag(&self, other: &Self) -> bool {
        (self.value & other.value) == other.value
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<EnumValue> for i32 {
    fn from(value: EnumValue) -> Self {
        value.value
    }
}

impl From<&EnumValue> for i32 {
    fn from(value: &EnumValue) -> Self {
        value.value
    }
}
