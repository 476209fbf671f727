use thiserror::Error;

/// Errors raised while validating option declarations into a registry.
///
/// These are programming-time defects in the static declaration set, not
/// runtime conditions: callers should surface them during type
/// initialization and abort rather than attempt recovery.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RegistryError {
    /// A declared option was given an empty or whitespace-only name.
    #[error("enum type \"{type_name}\" declares a blank option name at position {index}")]
    BlankName {
        /// Name of the enumeration type being built.
        type_name: String,
        /// Zero-based declaration position of the offending option.
        index: usize,
    },
    /// No declared option carries the value `0`.
    #[error("enum type \"{type_name}\" does not declare a zero-valued default option")]
    MissingZeroOption {
        /// Name of the enumeration type being built.
        type_name: String,
    },
}

impl RegistryError {
    /// Returns the name of the enumeration type that failed to build.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::BlankName { type_name, .. } | Self::MissingZeroOption { type_name } => type_name,
        }
    }
}

/// Errors raised while resolving an integer or name against a registry.
///
/// Every resolution entry point also has a lossy variant that absorbs these
/// errors into the registry's default value; the variants here are what the
/// strict entry points propagate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ResolveError {
    /// The integer matches no declared option and cannot be decomposed into
    /// declared flags.
    #[error("value {value} does not match any declared option of enum type \"{type_name}\"")]
    OutOfRange {
        /// Name of the enumeration type consulted.
        type_name: String,
        /// The unresolvable integer.
        value: i32,
    },
    /// No segment of the input matched a declared option name.
    #[error("name {input:?} does not match any declared option of enum type \"{type_name}\"")]
    UnknownName {
        /// Name of the enumeration type consulted.
        type_name: String,
        /// The input text that failed to match.
        input: String,
    },
    /// Name-based resolution received an empty input.
    #[error("cannot resolve an empty name for enum type \"{type_name}\"")]
    EmptyInput {
        /// Name of the enumeration type consulted.
        type_name: String,
    },
    /// Multiple names were given to an enumeration that does not combine
    /// flags.
    #[error("enum type \"{type_name}\" does not support composite values: {input:?}")]
    CompositeUnsupported {
        /// Name of the enumeration type consulted.
        type_name: String,
        /// The multi-segment input that was rejected.
        input: String,
    },
}

impl ResolveError {
    /// Returns the name of the enumeration type the resolution consulted.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::OutOfRange { type_name, .. }
            | Self::UnknownName { type_name, .. }
            | Self::EmptyInput { type_name }
            | Self::CompositeUnsupported { type_name, .. } => type_name,
        }
    }

    /// Returns the unresolvable integer, if this was a value resolution.
    #[must_use]
    pub const fn value(&self) -> Option<i32> {
        match self {
            Self::OutOfRange { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns the rejected input text, if this was a name resolution.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::UnknownName { input, .. } | Self::CompositeUnsupported { input, .. } => {
                Some(input)
            }
            _ => None,
        }
    }
}
