//! Property-based tests for the BER codec and the Oid value semantics.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use gss_oid::{
    ber::{decode_asn1ber, encode_asn1ber},
    Oid,
};
use proptest::prelude::*;

/// Arc sequences that are valid per X.690 8.19.4:
/// the first arc is 0, 1 or 2, the second is below 40 unless the first is 2.
fn arb_arcs() -> impl Strategy<Value = Vec<u64>> {
    (0u64..=2, any::<u64>(), prop::collection::vec(any::<u64>(), 0..=16)).prop_map(|(first, second, rest)| {
        let second = if first < 2 { second % 40 } else { second % (u64::MAX - 80) };
        let mut arcs = vec![first, second];
        arcs.extend(rest);
        arcs
    })
}

fn hash_of(oid: &Oid<'_>) -> u64 {
    let mut hasher = DefaultHasher::new();
    oid.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn ber_round_trip(arcs in arb_arcs()) {
        let encoded = encode_asn1ber(&arcs).unwrap();
        prop_assert_eq!(decode_asn1ber(&encoded).unwrap(), arcs);
    }

    #[test]
    fn dotted_round_trip(arcs in arb_arcs()) {
        let oid = Oid::from_arcs(arcs.iter().copied()).unwrap();
        let reparsed: Oid = oid.dotted_form().parse().unwrap();
        prop_assert_eq!(&reparsed, &oid);
        prop_assert_eq!(reparsed.arcs().collect::<Vec<_>>(), arcs);
    }

    #[test]
    fn equality_matches_hash(a in arb_arcs(), b in arb_arcs()) {
        let a = Oid::from_arcs(a).unwrap();
        let b = Oid::from_arcs(b).unwrap();
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(&a, &a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        let copy = Oid::from_bytes(a.as_bytes()).unwrap();
        prop_assert_eq!(hash_of(&copy), hash_of(&a));
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        if let Ok(arcs) = decode_asn1ber(&bytes) {
            prop_assert_eq!(encode_asn1ber(&arcs).unwrap(), bytes);
        }
    }
}
