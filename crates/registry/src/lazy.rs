use std::sync::OnceLock;

use crate::error::RegistryError;
use crate::registry::EnumRegistry;

/// A lazily built, process-lifetime registry for a statically declared
/// enumeration.
///
/// Enumerations declared once per program own their registry through a
/// `static LazyRegistry`. The wrapped [`OnceLock`] guarantees the initializer
/// runs at most once even under concurrent first access: one thread builds
/// while the rest block, and no reader ever observes a partially built
/// registry.
///
/// # Examples
///
/// ```
/// use registry::{EnumRegistry, LazyRegistry, RegistryError};
///
/// fn build() -> Result<EnumRegistry, RegistryError> {
///     EnumRegistry::builder("Weekday")
///         .option("None", 0)
///         .option("Monday", 1)
///         .build()
/// }
///
/// static WEEKDAYS: LazyRegistry = LazyRegistry::new(build);
///
/// assert_eq!(WEEKDAYS.get().type_name(), "Weekday");
/// ```
#[derive(Debug)]
pub struct LazyRegistry {
    cell: OnceLock<Result<EnumRegistry, RegistryError>>,
    init: fn() -> Result<EnumRegistry, RegistryError>,
}

impl LazyRegistry {
    /// Creates an uninitialized lazy registry with the given initializer.
    #[must_use]
    pub const fn new(init: fn() -> Result<EnumRegistry, RegistryError>) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Returns the registry, building it on first access.
    ///
    /// # Panics
    ///
    /// Panics when the declaration list fails validation. A
    /// [`RegistryError`] is a defect in the static declarations, so it
    /// aborts type initialization instead of being surfaced for recovery.
    pub fn get(&self) -> &EnumRegistry {
        match self.cell.get_or_init(|| (self.init)()) {
            Ok(registry) => registry,
            Err(error) => panic!("enum registry initialization failed: {error}"),
        }
    }

    /// Returns the registry or the construction error, building on first
    /// access without panicking.
    pub fn try_get(&self) -> Result<&EnumRegistry, &RegistryError> {
        self.cell.get_or_init(|| (self.init)()).as_ref()
    }
}
