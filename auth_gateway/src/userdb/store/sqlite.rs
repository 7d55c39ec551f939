use crate::storage::DB_TABLE_USERS;
use crate::userdb::{errors::UserError, types::User};
use sqlx::{Pool, Sqlite};

// SQLite implementations
pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#,
        table_name
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_user_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {} WHERE id = ?
        "#,
        table_name
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn upsert_by_email_sqlite(
    pool: &Pool<Sqlite>,
    candidate: User,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    // Single atomic statement; the no-op conflict update forces RETURNING of
    // the existing row so the stored id survives repeated logins.
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO {} (id, email, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (email) DO UPDATE SET email = excluded.email
        RETURNING *
        "#,
        table_name
    ))
    .bind(&candidate.id)
    .bind(&candidate.email)
    .bind(candidate.created_at)
    .bind(candidate.updated_at)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?
    .ok_or_else(|| UserError::Storage(format!("Unable to process user: {}", candidate.email)))
}

pub(super) async fn delete_user_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {} WHERE id = ?
        "#,
        table_name
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}
