#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Smart enum core: closed, named sets of integer options with runtime
//! introspection.
//!
//! An [`EnumRegistry`] holds the declared options of one enumeration type and
//! answers every lookup for it: resolving integers (including canonical
//! decomposition of combined bit flags), parsing comma-separated names, and
//! combining already-resolved values with bitwise operators. The registry is
//! built once, validated eagerly, and is read-only afterwards, so it can be
//! shared freely across threads.
//!
//! # Examples
//!
//! Build a flag-capable registry and resolve values through it:
//!
//! ```
//! use registry::EnumRegistry;
//!
//! let meals = EnumRegistry::builder("Meal")
//!     .flags(true)
//!     .option("None", 0)
//!     .option("Breakfast", 1)
//!     .option("Lunch", 2)
//!     .option("Dinner", 4)
//!     .build()
//!     .expect("declarations are valid");
//!
//! let combo = meals.from_value(3).expect("covered by declared flags");
//! assert_eq!(combo.name(), "Breakfast, Lunch");
//! assert_eq!(combo.value(), 3);
//!
//! let parsed = meals.parse("breakfast, dinner", true).expect("known names");
//! assert_eq!(parsed.value(), 5);
//! ```
//!
//! Registries for statically declared enumerations are usually owned by a
//! [`LazyRegistry`], which guarantees at-most-once construction even under
//! concurrent first access:
//!
//! ```
//! use registry::{EnumRegistry, LazyRegistry, RegistryError};
//!
//! fn build_colors() -> Result<EnumRegistry, RegistryError> {
//!     EnumRegistry::builder("Color")
//!         .option("None", 0)
//!         .option("Black", 1)
//!         .option("Red", 2)
//!         .build()
//! }
//!
//! static COLORS: LazyRegistry = LazyRegistry::new(build_colors);
//!
//! assert_eq!(COLORS.get().parse("red", true).unwrap().value(), 2);
//! ```

mod algebra;
mod case;
mod error;
mod lazy;
mod option;
mod parse;
mod registry;
mod resolve;
mod trace;
mod value;

pub use case::{camel_case_name, camel_case_segment};
pub use error::{RegistryError, ResolveError};
pub use lazy::LazyRegistry;
pub use option::DeclaredOption;
pub use registry::{EnumRegistry, RegistryBuilder};
pub use value::{EnumValue, FLAG_SEPARATOR, NAME_SEPARATOR};
