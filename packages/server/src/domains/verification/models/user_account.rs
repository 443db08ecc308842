use anyhow::Result;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

/// User account model - SQL persistence layer
///
/// Rows exist only for phone numbers the SMS provider approved. The store is
/// append-only: repeat verifications of the same number insert new rows, and
/// nothing here updates or deletes.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct UserAccount {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub phone_number: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account fields as written at the store boundary. Credentials are hashed
/// before they reach this type; the raw password is never persisted.
#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub user_id: String,
    pub name: String,
    pub phone_number: String,
    pub password_hash: String,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl UserAccount {
    /// Append a verified account, returning the stored row with its id.
    pub async fn append(new_account: &NewUserAccount, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (user_id, name, phone_number, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&new_account.user_id)
        .bind(&new_account.name)
        .bind(&new_account.phone_number)
        .bind(&new_account.password_hash)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Hash a password for storage (SHA-256, lowercase hex).
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
    }

    #[test]
    fn different_passwords_hash_differently() {
        assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
    }

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        let hash = hash_password("hunter2");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // Known digest of "hunter2".
        assert_eq!(
            hash,
            "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7"
        );
    }
}
