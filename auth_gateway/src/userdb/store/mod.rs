mod postgres;
mod sqlite;

use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::{errors::UserError, types::User};

use postgres::*;
use sqlite::*;

pub struct UserStore;

impl UserStore {
    /// Initialize the user directory tables
    pub async fn init() -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    /// Get a user by their id
    pub async fn get_user(id: &str) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Insert a user for an unseen email, or return the existing row unchanged.
    ///
    /// A fresh id is supplied for the insert arm; the on-conflict update is a
    /// no-op write that forces a RETURNING of the existing row, so the id is
    /// stable across repeated logins for the same email.
    pub async fn upsert_by_email(email: &str) -> Result<User, UserError> {
        let candidate = User::new(uuid::Uuid::new_v4().to_string(), email.to_string());

        let store = GENERIC_DATA_STORE.lock().await;

        let user = if let Some(pool) = store.as_sqlite() {
            upsert_by_email_sqlite(pool, candidate).await?
        } else if let Some(pool) = store.as_postgres() {
            upsert_by_email_postgres(pool, candidate).await?
        } else {
            return Err(UserError::Storage("Unsupported database type".to_string()));
        };

        tracing::debug!("Found or created user {} with email {}", user.id, user.email);
        Ok(user)
    }

    /// Delete a user row. No gateway flow calls this; it exists for operators
    /// and for exercising the valid-session-vanished-user path.
    pub async fn delete_user(id: &str) -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }
}
