use crate::value::EnumValue;

/// A statically declared member of an enumeration: a fixed name/value pair
/// authored by the type's implementer.
///
/// Options are created through [`RegistryBuilder::option`] and validated when
/// the registry is built; they are immutable afterwards and live as long as
/// the owning [`EnumRegistry`].
///
/// [`RegistryBuilder::option`]: crate::RegistryBuilder::option
/// [`EnumRegistry`]: crate::EnumRegistry
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DeclaredOption {
    name: String,
    value: i32,
}

impl DeclaredOption {
    pub(crate) fn new(name: String, value: i32) -> Self {
        Self { name, value }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared integer value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the option as a freshly owned resolved value.
    #[must_use]
    pub fn resolved(&self) -> EnumValue {
        EnumValue::new(self.name.clone(), self.value)
    }
}

impl From<&DeclaredOption> for EnumValue {
    fn from(option: &DeclaredOption) -> Self {
        option.resolved()
    }
}
