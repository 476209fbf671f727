use crate::error::ResolveError;
use crate::registry::EnumRegistry;
use crate::trace;
use crate::value::{EnumValue, NAME_SEPARATOR};

impl EnumRegistry {
    /// Resolves an integer into a declared option or a canonical composite.
    ///
    /// An exact match against a declared value always wins, even when the
    /// integer would also decompose into smaller flags, and regardless of the
    /// sign of the value. Otherwise, for flag-capable registries and positive
    /// inputs, the declared values are walked in descending order and every
    /// positive option whose bits are fully contained in the input (and not
    /// already covered by an earlier pick) contributes to the composite. The
    /// contributing names are joined in ascending value order with `", "`.
    ///
    /// Input bits covered by no declared option are dropped silently, so the
    /// resolved value may be smaller than the input. When nothing matches at
    /// all the input is unresolvable.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::OutOfRange`] when the value has no exact match
    /// and either the registry does not combine flags, the value is not
    /// positive, or no declared option covers any of its bits.
    pub fn from_value(&self, value: i32) -> Result<EnumValue, ResolveError> {
        if let Some(option) = self.option_by_value(value) {
            return Ok(option.resolved());
        }
        if !self.supports_flags() || value <= 0 {
            return Err(self.out_of_range(value));
        }

        let mut accumulator = 0_i32;
        let mut names = Vec::new();
        for option in self.descending_options() {
            let bits = option.value();
            if bits <= 0 {
                continue;
            }
            if value & bits == bits && accumulator & bits != bits {
                accumulator |= bits;
                names.push(option.name());
            }
        }

        if accumulator == 0 {
            return Err(self.out_of_range(value));
        }

        // The walk ran descending; flip the names back into ascending order.
        if names.len() > 1 {
            names.reverse();
        }
        let name = names.join(NAME_SEPARATOR);
        trace::composite_synthesized(self.type_name(), value, accumulator, &name);
        Ok(EnumValue::new(name, accumulator))
    }

    /// Resolves an integer, falling back to the default value on failure.
    ///
    /// This is the safe-mode counterpart of [`EnumRegistry::from_value`]: any
    /// unresolvable input yields the declared zero-valued option instead of
    /// an error.
    #[must_use]
    pub fn from_value_lossy(&self, value: i32) -> EnumValue {
        self.from_value(value)
            .unwrap_or_else(|_| self.default_value())
    }

    fn out_of_range(&self, value: i32) -> ResolveError {
        ResolveError::OutOfRange {
            type_name: self.type_name().to_owned(),
            value,
        }
    }
}
