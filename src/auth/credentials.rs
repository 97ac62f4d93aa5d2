/**
 * Credential Verifier
 *
 * Password hashing and verification. Hashes are salted bcrypt digests,
 * so two hashes of the same password differ; verification is done by
 * bcrypt itself.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a password with a fresh salt
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a stored digest
///
/// A malformed digest counts as a failed verification rather than an
/// error; the caller only cares whether the credentials match.
pub fn verify_password(password: &str, digest: &str) -> bool {
    verify(password, digest).unwrap_or(false)
}
