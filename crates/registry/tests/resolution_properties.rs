//! Property tests for the resolution invariants.
//!
//! The registry under test declares one option per bit (`Party` = 1, `Time`
//! = 2, `Sleepy` = 4, `Hungry` = 8), so every value in `1..16` is fully
//! covered and the properties can quantify over arbitrary bit unions.

use proptest::prelude::*;
use registry::{EnumRegistry, NAME_SEPARATOR, camel_case_name};

fn bits() -> EnumRegistry {
    EnumRegistry::builder("Bits")
        .flags(true)
        .option("None", 0)
        .option("Party", 1)
        .option("Time", 2)
        .option("Sleepy", 4)
        .option("Hungry", 8)
        .build()
        .unwrap()
}

proptest! {
    /// Any union of declared disjoint bits resolves to exactly that union,
    /// with the contributing names joined in ascending value order.
    #[test]
    fn disjoint_unions_resolve_exactly(value in 1_i32..16) {
        let registry = bits();
        let resolved = registry.from_value(value).unwrap();

        prop_assert_eq!(resolved.value(), value);

        let expected: Vec<&str> = [(1, "Party"), (2, "Time"), (4, "Sleepy"), (8, "Hungry")]
            .iter()
            .filter(|(bit, _)| value & bit == *bit)
            .map(|(_, name)| *name)
            .collect();
        prop_assert_eq!(resolved.name(), expected.join(NAME_SEPARATOR));
    }

    /// The canonical text form parses back to the identical value.
    #[test]
    fn canonical_names_round_trip(value in 0_i32..16) {
        let registry = bits();
        let resolved = registry.from_value(value).unwrap();

        let reparsed = registry.parse(resolved.name(), true).unwrap();
        prop_assert_eq!(&reparsed, &resolved);

        // Camel-cased output round-trips through case-insensitive parsing.
        let camel = camel_case_name(resolved.name());
        prop_assert_eq!(registry.parse(&camel, true).unwrap(), resolved);
    }

    /// `has_flag` is reflexive and monotone under bit-superset extension.
    #[test]
    fn has_flag_is_reflexive_and_monotone(a in 0_i32..16, b in 0_i32..16, extra in 0_i32..16) {
        let registry = bits();
        let a = registry.from_value(a).unwrap();
        let b = registry.from_value(b).unwrap();
        let superset = registry.from_value(a.value() | extra).unwrap();

        prop_assert!(a.has_flag(&a));
        if a.has_flag(&b) {
            prop_assert!(superset.has_flag(&b));
        }
    }

    /// Safe-mode resolution never fails: it returns either an exact covered
    /// value or the default.
    #[test]
    fn lossy_resolution_is_total(value in proptest::num::i32::ANY) {
        let registry = bits();
        let resolved = registry.from_value_lossy(value);

        let covered = value > 0 && value & 15 != 0;
        if covered {
            prop_assert_eq!(resolved.value(), value & 15);
        } else if value == 0 {
            prop_assert_eq!(resolved.name(), "None");
        } else {
            prop_assert_eq!(&resolved, &registry.default_value());
        }
    }

    /// The operators agree with direct value resolution.
    #[test]
    fn operators_canonicalize(a in 0_i32..16, b in 0_i32..16) {
        let registry = bits();
        let left = registry.from_value(a).unwrap();
        let right = registry.from_value(b).unwrap();

        prop_assert_eq!(registry.or(&left, &right).unwrap(), registry.from_value(a | b).unwrap());
        prop_assert_eq!(registry.and(&left, &right).unwrap(), registry.from_value(a & b).unwrap());
        prop_assert_eq!(registry.xor(&left, &right).unwrap(), registry.from_value(a ^ b).unwrap());
    }
}
