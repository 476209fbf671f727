use ::core::cmp::Reverse;

use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::option::DeclaredOption;
use crate::value::EnumValue;

/// Immutable per-enumeration lookup tables.
///
/// A registry owns every declared option of one enumeration type together
/// with the derived structures the resolution engines need: a value map and
/// an exact-case name map (later declarations win on duplicates), the
/// declaration-order option list, and a cached descending-by-value walk order
/// over the distinct declared values used by the canonical decomposition.
///
/// Registries are built exactly once through [`EnumRegistry::builder`] and
/// never mutated afterwards, so shared references can be handed to any number
/// of concurrent readers.
#[derive(Clone, Debug)]
pub struct EnumRegistry {
    type_name: String,
    options: Vec<DeclaredOption>,
    by_value: FxHashMap<i32, usize>,
    by_name: FxHashMap<String, usize>,
    descending: Vec<usize>,
    supports_flags: bool,
    default_index: usize,
}

impl EnumRegistry {
    /// Starts building a registry for the named enumeration type.
    ///
    /// The type name only serves diagnostics: it appears in error values and
    /// trace output so failures can be attributed to a concrete enumeration.
    pub fn builder(type_name: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            type_name: type_name.into(),
            supports_flags: false,
            options: Vec::new(),
        }
    }

    /// Returns the name of the enumeration type this registry describes.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns every declared option in declaration order.
    ///
    /// Duplicate names and values are preserved here even though the lookup
    /// maps collapse them.
    #[must_use]
    pub fn options(&self) -> &[DeclaredOption] {
        &self.options
    }

    /// Reports whether declared options may be combined as bit flags.
    #[must_use]
    pub const fn supports_flags(&self) -> bool {
        self.supports_flags
    }

    /// Returns the declared zero-valued option as a resolved value.
    #[must_use]
    pub fn default_value(&self) -> EnumValue {
        self.options[self.default_index].resolved()
    }

    /// Looks up the declared option carrying exactly this value.
    ///
    /// When several options declare the same value, the last declaration
    /// wins.
    #[must_use]
    pub fn option_by_value(&self, value: i32) -> Option<&DeclaredOption> {
        self.by_value.get(&value).map(|&index| &self.options[index])
    }

    /// Looks up a declared option by name.
    ///
    /// Exact-case matches are answered from the name map (last declaration
    /// wins). When `case_insensitive` is set and no exact match exists, the
    /// options are scanned in declaration order and the first ASCII
    /// case-insensitive match is returned.
    #[must_use]
    pub fn option_by_name(&self, name: &str, case_insensitive: bool) -> Option<&DeclaredOption> {
        if let Some(&index) = self.by_name.get(name) {
            return Some(&self.options[index]);
        }
        if case_insensitive {
            return self
                .options
                .iter()
                .find(|option| option.name().eq_ignore_ascii_case(name));
        }
        None
    }

    /// Iterates the distinct declared values in descending value order.
    pub(crate) fn descending_options(&self) -> impl Iterator<Item = &DeclaredOption> {
        self.descending.iter().map(|&index| &self.options[index])
    }
}

/// Collects option declarations and validates them into an [`EnumRegistry`].
///
/// The builder performs no validation itself; [`RegistryBuilder::build`]
/// checks every declaration eagerly so a malformed option set fails before
/// the registry can be observed.
#[derive(Clone, Debug)]
pub struct RegistryBuilder {
    type_name: String,
    supports_flags: bool,
    options: Vec<(String, i32)>,
}

impl RegistryBuilder {
    /// Declares whether the enumeration's options represent combinable bits.
    #[must_use]
    pub fn flags(mut self, supports_flags: bool) -> Self {
        self.supports_flags = supports_flags;
        self
    }

    /// Declares one named option.
    ///
    /// Declaration order is preserved; duplicate names and values are
    /// accepted, with later declarations winning in the lookup maps.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: i32) -> Self {
        self.options.push((name.into(), value));
        self
    }

    /// Validates the declarations and builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::BlankName`] when an option name is empty or
    /// whitespace-only, and [`RegistryError::MissingZeroOption`] when no
    /// option declares the value `0`. Every enumeration must name its "none"
    /// concept explicitly; no synthetic default is fabricated.
    pub fn build(self) -> Result<EnumRegistry, RegistryError> {
        let mut options = Vec::with_capacity(self.options.len());
        for (index, (name, value)) in self.options.into_iter().enumerate() {
            if name.trim().is_empty() {
                return Err(RegistryError::BlankName {
                    type_name: self.type_name,
                    index,
                });
            }
            options.push(DeclaredOption::new(name, value));
        }

        let mut by_value = FxHashMap::default();
        let mut by_name = FxHashMap::default();
        for (index, option) in options.iter().enumerate() {
            by_value.insert(option.value(), index);
            by_name.insert(option.name().to_owned(), index);
        }

        let Some(&default_index) = by_value.get(&0) else {
            return Err(RegistryError::MissingZeroOption {
                type_name: self.type_name,
            });
        };

        let mut descending: Vec<usize> = by_value.values().copied().collect();
        descending.sort_unstable_by_key(|&index| Reverse(options[index].value()));

        Ok(EnumRegistry {
            type_name: self.type_name,
            options,
            by_value,
            by_name,
            descending,
            supports_flags: self.supports_flags,
            default_index,
        })
    }
}
