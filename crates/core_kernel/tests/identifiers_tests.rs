//! Tests for ledger keys and transaction identifiers

use core_kernel::identifiers::prefix_range;
use core_kernel::{ClaimKey, TxId, CLAIM_KEY_PREFIX};
use proptest::prelude::*;

mod claim_key_tests {
    use super::*;

    #[test]
    fn test_new_preserves_key_verbatim() {
        let key = ClaimKey::new("  odd key \"with\" quotes ");
        assert_eq!(key.as_str(), "  odd key \"with\" quotes ");
    }

    #[test]
    fn test_seeded_keys_are_in_namespace() {
        for index in 0..5 {
            assert!(ClaimKey::seeded(index).is_claim_namespace());
        }
        assert!(!ClaimKey::new("CAR0").is_claim_namespace());
    }
}

mod prefix_range_tests {
    use super::*;

    #[test]
    fn test_claim_prefix() {
        let (start, end) = prefix_range(CLAIM_KEY_PREFIX);
        assert!("CLAIM0".to_string() >= start);
        assert!("CLAIM0".to_string() < end);
        assert!("CLAIMZZZZ".to_string() < end);
        assert!("CLAIN".to_string() >= end);
        assert!("CAR0".to_string() < start);
    }

    #[test]
    fn test_trailing_max_char_is_dropped() {
        let prefix = format!("a{}", char::MAX);
        let (start, end) = prefix_range(&prefix);
        assert_eq!(start, prefix);
        assert_eq!(end, "b");
    }

    proptest! {
        #[test]
        fn prop_prefixed_keys_fall_in_range(prefix in "[A-Za-z0-9]{1,8}", suffix in "[A-Za-z0-9]{0,8}") {
            let (start, end) = prefix_range(&prefix);
            let key = format!("{}{}", prefix, suffix);
            prop_assert!(key >= start);
            prop_assert!(key < end);
        }
    }
}

mod tx_id_tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        assert!(TxId::new_v7().to_string().starts_with("TX-"));
    }

    #[test]
    fn test_new_v7_unique() {
        assert_ne!(TxId::new_v7(), TxId::new_v7());
    }

    #[test]
    fn test_parse_without_prefix() {
        let id = TxId::new_v7();
        let parsed: TxId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
