#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Shared sample registries used across the workspace test suites.
//!
//! The fixtures mirror three shapes of enumeration: a flag-capable set with
//! both single-bit and pre-combined declarations, a plain (non-flag)
//! enumeration, and one with negative declared values.

use registry::{EnumRegistry, RegistryError};

/// Builds the flag-capable "party time" enumeration.
///
/// Declares single bits (`Party`, `Time`, `Sleepy`, `Hungry`) alongside
/// pre-combined options (`PartyTime`, `SleepyTime`, `HungryTime`, `All`), so
/// tests can exercise exact-match short-circuits and overlapping
/// decompositions. The signature fits [`registry::LazyRegistry::new`].
pub fn build_party_flags() -> Result<EnumRegistry, RegistryError> {
    EnumRegistry::builder("PartyTime")
        .flags(true)
        .option("None", 0)
        .option("Party", 1)
        .option("Time", 1 << 1)
        .option("Sleepy", 1 << 2)
        .option("Hungry", 1 << 3)
        .option("PartyTime", 3)
        .option("SleepyTime", 6)
        .option("HungryTime", 10)
        .option("All", 15)
        .build()
}

/// The flag-capable "party time" enumeration, ready to use.
#[must_use]
pub fn party_flags() -> EnumRegistry {
    build_party_flags().expect("party flag declarations are valid")
}

/// Builds the plain color enumeration, which does not combine flags.
pub fn build_colors() -> Result<EnumRegistry, RegistryError> {
    EnumRegistry::builder("Color")
        .option("None", 0)
        .option("Black", 1)
        .option("Red", 2)
        .build()
}

/// The plain color enumeration, ready to use.
#[must_use]
pub fn colors() -> EnumRegistry {
    build_colors().expect("color declarations are valid")
}

/// Builds an enumeration whose options carry negative values.
pub fn build_negatives() -> Result<EnumRegistry, RegistryError> {
    EnumRegistry::builder("Offset")
        .option("None", 0)
        .option("MinusOne", -1)
        .option("MinusTwo", -2)
        .option("MinusThree", -3)
        .build()
}

/// The negative-valued enumeration, ready to use.
#[must_use]
pub fn negatives() -> EnumRegistry {
    build_negatives().expect("offset declarations are valid")
}
