//! Resolution tracing helpers; no-ops unless the `tracing` feature is on.

#[cfg(feature = "tracing")]
use tracing::trace;

/// Trace a composite value synthesized by the decomposition walk.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn composite_synthesized(type_name: &str, input: i32, output: i32, name: &str) {
    trace!(
        target: "registry::resolve",
        enum_type = type_name,
        input = input,
        output = output,
        name = name,
        "synthesized composite {} ({}) from {}",
        name,
        output,
        input
    );
}

/// Trace a composite value synthesized by the decomposition walk - no-op when
/// tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn composite_synthesized(_type_name: &str, _input: i32, _output: i32, _name: &str) {}

/// Trace a name that resolved to a combined value.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn name_resolved(type_name: &str, text: &str, combined: i32) {
    trace!(
        target: "registry::parse",
        enum_type = type_name,
        text = text,
        combined = combined,
        "resolved {:?} to combined value {}",
        text,
        combined
    );
}

/// Trace a name that resolved to a combined value - no-op when tracing is
/// disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn name_resolved(_type_name: &str, _text: &str, _combined: i32) {}
