use folio_gate::{
    Credentials, DigestBackend, Gate, GateError, MemoryStore, PasswordDigest, Sha256Backend,
    Unlock,
};
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug)]
struct OfflineBackend;

impl DigestBackend for OfflineBackend {
    fn digest(&self, _input: &str) -> Result<PasswordDigest, GateError> {
        Err(GateError::DigestUnavailable("hash primitive not present".into()))
    }
}

fn gate() -> Gate {
    Gate::new(Credentials::new(Arc::new(MemoryStore::new())))
}

#[test]
fn test_unavailable_backend_surfaces_verbatim() {
    let gate = Gate::with_backend(
        Credentials::new(Arc::new(MemoryStore::new())),
        Arc::new(OfflineBackend),
    );

    let err = gate.verify("anything").unwrap_err();
    assert_eq!(
        err.to_string(),
        "password hashing is unavailable: hash primitive not present"
    );
    assert!(matches!(
        gate.unlock("anything"),
        Err(GateError::DigestUnavailable(_))
    ));
    assert!(matches!(
        gate.change_password("long enough pass", None),
        Err(GateError::DigestUnavailable(_))
    ));
}

#[test]
fn test_empty_password_checked_before_backend() {
    let gate = Gate::with_backend(
        Credentials::new(Arc::new(MemoryStore::new())),
        Arc::new(OfflineBackend),
    );
    assert!(matches!(gate.verify(""), Err(GateError::EmptyPassword)));
}

#[test]
fn test_comparison_is_exact() {
    let gate = gate();
    gate.change_password("CaseSensitive", None).unwrap();
    assert!(!gate.verify("casesensitive").unwrap().granted);
    assert!(matches!(gate.unlock("CaseSensitive").unwrap(), Unlock::Granted(_)));
}

proptest! {
    #[test]
    fn prop_verify_grants_iff_trimmed_digest_matches(
        reference in "[a-zA-Z0-9 ]{8,24}",
        attempt in "[ \t]{0,2}[a-zA-Z0-9 ]{1,24}[ \t]{0,2}",
    ) {
        prop_assume!(!reference.trim().is_empty() && reference.trim().chars().count() >= 8);
        prop_assume!(!attempt.trim().is_empty());

        let gate = gate();
        let stored = gate.change_password(&reference, None).unwrap();

        let expected = Sha256Backend.digest(attempt.trim()).unwrap() == stored;
        let verification = gate.verify(&attempt).unwrap();
        prop_assert_eq!(verification.granted, expected);
        prop_assert!(!verification.is_default_password);
    }

    #[test]
    fn prop_short_passwords_always_rejected(candidate in "\\PC{1,7}") {
        prop_assume!(!candidate.trim().is_empty());

        let gate = gate();
        let result = gate.change_password(&candidate, Some(&candidate));
        let is_too_short = matches!(result, Err(GateError::PasswordTooShort { min: 8, .. }));
        prop_assert!(is_too_short);
        prop_assert!(gate.reference_digest().unwrap().is_factory_default());
    }

    #[test]
    fn prop_correct_password_always_unlocks(password in "[a-zA-Z0-9!@#$%^&*]{8,32}") {
        let gate = gate();
        gate.change_password(&password, Some(&password)).unwrap();
        let granted = matches!(gate.unlock(&password).unwrap(), Unlock::Granted(_));
        prop_assert!(granted);
    }
}
