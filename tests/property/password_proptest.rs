//! Property-based tests for password hashing
//!
//! bcrypt is slow by design, so these run few cases at the lowest cost.

use postboard::backend::auth::CredentialHasher;
use proptest::prelude::*;

fn hasher() -> CredentialHasher {
    CredentialHasher::new(4).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_verify_accepts_own_digest(password in "[a-zA-Z0-9!@#$%]{1,32}") {
        let digest = hasher().hash(&password).unwrap();
        prop_assert_ne!(&digest, &password);
        prop_assert!(hasher().verify(&password, &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_other_password(
        password in "[a-zA-Z0-9]{1,32}",
        other in "[a-zA-Z0-9]{1,32}",
    ) {
        prop_assume!(password != other);
        let digest = hasher().hash(&password).unwrap();
        prop_assert!(!hasher().verify(&other, &digest).unwrap());
    }

    #[test]
    fn test_digests_are_salted(password in "[a-zA-Z0-9]{1,32}") {
        let first = hasher().hash(&password).unwrap();
        let second = hasher().hash(&password).unwrap();
        prop_assert_ne!(first, second);
    }
}
