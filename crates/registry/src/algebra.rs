use crate::error::ResolveError;
use crate::registry::EnumRegistry;
use crate::value::EnumValue;

/// Bitwise combination of already-resolved values.
///
/// Every operator canonicalizes its result through
/// [`EnumRegistry::from_value`], so combining two values can never
/// double-count shared bits and always yields the same name the integer
/// resolution path would produce.
impl EnumRegistry {
    /// Returns the union of both values' flags.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::OutOfRange`] when the union resolves to
    /// nothing, e.g. on a registry that does not combine flags.
    pub fn or(&self, a: &EnumValue, b: &EnumValue) -> Result<EnumValue, ResolveError> {
        self.from_value(a.value() | b.value())
    }

    /// Toggles the flags of `a` that are set in `b`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::OutOfRange`] when the toggled value is
    /// unresolvable.
    pub fn xor(&self, a: &EnumValue, b: &EnumValue) -> Result<EnumValue, ResolveError> {
        self.from_value(a.value() ^ b.value())
    }

    /// Keeps only the flags present in both values.
    ///
    /// Disjoint inputs intersect to `0`, which resolves to the declared
    /// default option.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::OutOfRange`] when the intersection is
    /// unresolvable.
    pub fn and(&self, a: &EnumValue, b: &EnumValue) -> Result<EnumValue, ResolveError> {
        self.from_value(a.value() & b.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party_flags() -> EnumRegistry {
        EnumRegistry::builder("PartyTime")
            .flags(true)
            .option("None", 0)
            .option("Party", 1)
            .option("Time", 2)
            .option("Sleepy", 4)
            .option("Hungry", 8)
            .option("PartyTime", 3)
            .option("SleepyTime", 6)
            .option("HungryTime", 10)
            .option("All", 15)
            .build()
            .unwrap()
    }

    #[test]
    fn or_prefers_a_declared_exact_match() {
        let registry = party_flags();
        let party = registry.from_value(1).unwrap();
        let time = registry.from_value(2).unwrap();

        let combined = registry.or(&party, &time).unwrap();
        assert_eq!(combined.name(), "PartyTime");
        assert_eq!(combined.value(), 3);

        // Operand order does not matter.
        assert_eq!(registry.or(&time, &party).unwrap(), combined);
    }

    #[test]
    fn or_synthesizes_canonical_composites() {
        let registry = party_flags();
        let party_time = registry.from_value(3).unwrap();
        let sleepy = registry.from_value(4).unwrap();

        let combined = registry.or(&party_time, &sleepy).unwrap();
        assert_eq!(combined.name(), "PartyTime, SleepyTime");
        assert_eq!(combined.value(), 7);
        assert!(combined.has_flag(&party_time));
        assert!(combined.has_flag(&sleepy));
    }

    #[test]
    fn or_with_itself_is_idempotent() {
        let registry = party_flags();
        let party = registry.from_value(1).unwrap();

        assert_eq!(registry.or(&party, &party).unwrap(), party);
    }

    #[test]
    fn or_does_not_double_count_shared_bits() {
        let registry = party_flags();
        let party_time = registry.from_value(3).unwrap();
        let sleepy_time = registry.from_value(6).unwrap();

        // Both operands carry the Time bit; the union is 7, not 3 + 6.
        let combined = registry.or(&party_time, &sleepy_time).unwrap();
        assert_eq!(combined.value(), 7);
    }

    #[test]
    fn xor_removes_shared_flags() {
        let registry = party_flags();
        let party_time = registry.from_value(3).unwrap();
        let time = registry.from_value(2).unwrap();

        let toggled = registry.xor(&party_time, &time).unwrap();
        assert_eq!(toggled.name(), "Party");
        assert!(toggled.has_flag(&registry.from_value(1).unwrap()));
        assert!(!toggled.has_flag(&time));
    }

    #[test]
    fn and_keeps_mutual_flags() {
        let registry = party_flags();
        let party_time = registry.from_value(3).unwrap();
        let time = registry.from_value(2).unwrap();

        let mutual = registry.and(&party_time, &time).unwrap();
        assert_eq!(mutual.name(), "Time");
        assert!(!mutual.has_flag(&registry.from_value(1).unwrap()));
    }

    #[test]
    fn and_of_disjoint_values_is_the_default() {
        let registry = party_flags();
        let party = registry.from_value(1).unwrap();
        let hungry = registry.from_value(8).unwrap();

        let mutual = registry.and(&party, &hungry).unwrap();
        assert_eq!(mutual, registry.default_value());
    }
}
