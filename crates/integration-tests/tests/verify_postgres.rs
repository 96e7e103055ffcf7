//! Verification against a real `PostgreSQL` database.
//!
//! These tests require a running `PostgreSQL` server reachable through
//! `DATABASE_URL`; `sqlx::test` creates and migrates a fresh database per test.
//!
//! Run with: cargo test -p credcheck-integration-tests -- --include-ignored

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use credcheck_core::{Credentials, VerificationResult};
use credcheck_integration_tests::seed_users;
use credcheck_verifier::{CredentialVerifier, PgStore, UserAccountRepository};
use sqlx::PgPool;

fn verifier(pool: PgPool) -> CredentialVerifier<PgStore> {
    CredentialVerifier::new(PgStore::from_pool(pool))
}

async fn seeded(pool: PgPool) -> CredentialVerifier<PgStore> {
    seed_users(
        &pool,
        &[
            ("alice", "s3cr3t", "Alice A."),
            ("bob", "hunter2", "Bob B."),
        ],
    )
    .await
    .unwrap();
    verifier(pool)
}

// ============================================================================
// Matching
// ============================================================================

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_stored_credentials_match(pool: PgPool) {
    let verifier = seeded(pool).await;

    let result = verifier
        .verify(&Credentials::new("alice", "s3cr3t"))
        .await
        .unwrap();

    assert_eq!(result, VerificationResult::matched("Alice A."));
}

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_unknown_pairs_do_not_match(pool: PgPool) {
    let verifier = seeded(pool).await;

    for (login, secret) in [
        ("mallory", "s3cr3t"),
        ("alice", "hunter2"),
        ("bob", "s3cr3t"),
        ("", ""),
    ] {
        let result = verifier
            .verify(&Credentials::new(login, secret))
            .await
            .unwrap();
        assert_eq!(
            result,
            VerificationResult::NotMatched,
            "{login:?}/{secret:?} should not match"
        );
    }
}

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_case_and_whitespace_preserved(pool: PgPool) {
    seed_users(&pool, &[(" Carol ", "Pass Word", "Carol C.")])
        .await
        .unwrap();
    let verifier = verifier(pool);

    let exact = verifier
        .verify(&Credentials::new(" Carol ", "Pass Word"))
        .await
        .unwrap();
    assert_eq!(exact, VerificationResult::matched("Carol C."));

    for (login, secret) in [
        ("Carol", "Pass Word"),
        (" carol ", "Pass Word"),
        (" Carol ", "pass word"),
        (" Carol ", "Pass Word "),
    ] {
        let result = verifier
            .verify(&Credentials::new(login, secret))
            .await
            .unwrap();
        assert!(!result.is_matched(), "{login:?}/{secret:?} should not match");
    }
}

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_repeated_verification_is_idempotent(pool: PgPool) {
    let verifier = seeded(pool).await;
    let credentials = Credentials::new("bob", "hunter2");

    let first = verifier.verify(&credentials).await.unwrap();
    for _ in 0..5 {
        assert_eq!(verifier.verify(&credentials).await.unwrap(), first);
    }
    assert_eq!(first, VerificationResult::matched("Bob B."));
}

// ============================================================================
// Injection
// ============================================================================

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_injection_payloads_do_not_bypass(pool: PgPool) {
    let verifier = seeded(pool).await;

    for (login, secret) in [
        ("x' OR '1'='1", "anything"),
        ("alice", "' OR '1'='1"),
        ("alice'--", "whatever"),
        ("alice'; DROP TABLE credcheck.user_account; --", "x"),
        ("' OR 1=1 --", "' OR 1=1 --"),
    ] {
        let result = verifier
            .verify(&Credentials::new(login, secret))
            .await
            .unwrap();
        assert_eq!(
            result,
            VerificationResult::NotMatched,
            "{login:?}/{secret:?} must not match"
        );
    }

    // Table is intact and still answers.
    let result = verifier
        .verify(&Credentials::new("alice", "s3cr3t"))
        .await
        .unwrap();
    assert!(result.is_matched());
}

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_quoted_values_match_literally(pool: PgPool) {
    seed_users(&pool, &[("o'brien", "it's\"; --", "Pat O'Brien")])
        .await
        .unwrap();
    let verifier = verifier(pool);

    let result = verifier
        .verify(&Credentials::new("o'brien", "it's\"; --"))
        .await
        .unwrap();

    assert_eq!(result, VerificationResult::matched("Pat O'Brien"));
}

// ============================================================================
// Duplicates
// ============================================================================

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_duplicate_login_returns_first_row(pool: PgPool) {
    seed_users(
        &pool,
        &[
            ("dana", "pw", "Dana First"),
            ("dana", "pw", "Dana Second"),
        ],
    )
    .await
    .unwrap();
    assert_eq!(
        UserAccountRepository::new(&pool)
            .count_by_login("dana")
            .await
            .unwrap(),
        2
    );
    let verifier = verifier(pool);

    let result = verifier
        .verify(&Credentials::new("dana", "pw"))
        .await
        .unwrap();

    assert_eq!(result, VerificationResult::matched("Dana First"));
}

// ============================================================================
// Connection lifecycle
// ============================================================================

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_concurrent_verifications(pool: PgPool) {
    let verifier = std::sync::Arc::new(seeded(pool).await);

    let mut handles = Vec::new();
    for i in 0..20 {
        let verifier = std::sync::Arc::clone(&verifier);
        handles.push(tokio::spawn(async move {
            let credentials = if i % 2 == 0 {
                Credentials::new("alice", "s3cr3t")
            } else {
                Credentials::new("alice", "nope")
            };
            verifier.verify(&credentials).await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.is_matched(), i % 2 == 0);
    }
}

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_ping(pool: PgPool) {
    PgStore::from_pool(pool).ping().await.unwrap();
}

#[sqlx::test(migrator = "credcheck_verifier::MIGRATOR")]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_generous_deadline_completes(pool: PgPool) {
    let verifier = seeded(pool).await;

    let result = verifier
        .verify_within(&Credentials::new("alice", "s3cr3t"), Duration::from_secs(10))
        .await
        .unwrap();

    assert!(result.is_matched());
}
