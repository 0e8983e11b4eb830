//! User data-access operations.
//!
//! Every operation maps its raw database outcome to `Result<_, ApiError>`,
//! so the caller has exactly one branch: use the value, or hand the error
//! to the responder. The messages set here are the client-facing text; the
//! wrapped cause only ever reaches the error log.

use sqlx::SqlitePool;

use crate::error::{ApiError, Result};
use crate::models::{Credentials, NewUser, User, UserUpdate};
use crate::password;

/// Row shape for authentication; keeps the stored hash out of [`User`].
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    firstname: String,
    lastname: String,
    mail: String,
    password_hash: String,
}

/// Register a new user and return the created row.
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<User> {
    let password_hash = password::hash_password(&user.password)
        .map_err(|e| ApiError::internal("Internal server error", e))?;

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (firstname, lastname, mail, password_hash)
        VALUES (?, ?, ?, ?)
        RETURNING id, firstname, lastname, mail
        "#,
    )
    .bind(&user.firstname)
    .bind(&user.lastname)
    .bind(&user.mail)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ApiError::internal("Internal server error", e))
}

/// Delete a user by id. `Ok(true)` acknowledges the deletion.
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| ApiError::internal("Internal server error", e))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("User not found"));
    }

    Ok(true)
}

/// Fetch a user by id.
///
/// The not-found check only runs when the query itself succeeded; an
/// execution failure is always classified as internal.
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, firstname, lastname, mail
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ApiError::internal("Internal error server", e))?
    .ok_or_else(|| ApiError::not_found("User not found"))
}

/// Update a user's profile fields and return the updated row.
pub async fn update_user(pool: &SqlitePool, id: i64, info: &UserUpdate) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET firstname = ?, lastname = ?, mail = ?
        WHERE id = ?
        RETURNING id, firstname, lastname, mail
        "#,
    )
    .bind(&info.firstname)
    .bind(&info.lastname)
    .bind(&info.mail)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::debug!(error = ?e, user_id = id, "update_user failed");
        ApiError::internal("Internal error server", e)
    })?
    .ok_or_else(|| ApiError::not_found("User not found"))
}

/// Check a user's credentials and return the matched user.
///
/// An unknown mail and a wrong password collapse into the same vague
/// error, so the response cannot reveal which one was wrong.
pub async fn authenticate_user(pool: &SqlitePool, credentials: &Credentials) -> Result<User> {
    let row = sqlx::query_as::<_, CredentialRow>(
        r#"
        SELECT id, firstname, lastname, mail, password_hash
        FROM users
        WHERE mail = ?
        "#,
    )
    .bind(&credentials.mail)
    .fetch_optional(pool)
    .await
    .map_err(|e| ApiError::internal("Internal server error", e))?;

    let Some(row) = row else {
        return Err(ApiError::bad_credentials());
    };

    let verified = password::verify_password(&credentials.password, &row.password_hash)
        .map_err(|e| ApiError::internal("Internal server error", e))?;
    if !verified {
        return Err(ApiError::bad_credentials());
    }

    Ok(User {
        id: row.id,
        firstname: row.firstname,
        lastname: row.lastname,
        mail: row.mail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn alice() -> NewUser {
        NewUser {
            firstname: "Alice".to_string(),
            lastname: "Martin".to_string(),
            mail: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_fetch() {
        let db = test_db().await;

        let created = create_user(db.pool(), &alice()).await.unwrap();
        assert_eq!(created.mail, "alice@example.com");

        let fetched = get_user(db.pool(), created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let db = test_db().await;

        let err = get_user(db.pool(), 9999).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "User not found");
    }

    #[tokio::test]
    async fn test_delete_existing_then_missing() {
        let db = test_db().await;
        let created = create_user(db.pool(), &alice()).await.unwrap();

        assert!(delete_user(db.pool(), created.id).await.unwrap());

        let err = delete_user(db.pool(), created.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = get_user(db.pool(), created.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_update_changes_the_row() {
        let db = test_db().await;
        let created = create_user(db.pool(), &alice()).await.unwrap();

        let info = UserUpdate {
            firstname: "Alicia".to_string(),
            lastname: created.lastname.clone(),
            mail: created.mail.clone(),
        };
        let updated = update_user(db.pool(), created.id, &info).await.unwrap();
        assert_eq!(updated.firstname, "Alicia");
        assert_eq!(updated.id, created.id);

        let fetched = get_user(db.pool(), created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let db = test_db().await;

        let info = UserUpdate {
            firstname: "Nobody".to_string(),
            lastname: "Home".to_string(),
            mail: "nobody@example.com".to_string(),
        };
        let err = update_user(db.pool(), 9999, &info).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_authenticate_with_correct_credentials() {
        let db = test_db().await;
        create_user(db.pool(), &alice()).await.unwrap();

        let credentials = Credentials {
            mail: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
        };
        let user = authenticate_user(db.pool(), &credentials).await.unwrap();
        assert_eq!(user.mail, "alice@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_mail_look_identical() {
        let db = test_db().await;
        create_user(db.pool(), &alice()).await.unwrap();

        let wrong_password = authenticate_user(
            db.pool(),
            &Credentials {
                mail: "alice@example.com".to_string(),
                password: "battery staple".to_string(),
            },
        )
        .await
        .unwrap_err();

        let unknown_mail = authenticate_user(
            db.pool(),
            &Credentials {
                mail: "mallory@example.com".to_string(),
                password: "correct horse".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(wrong_password.kind(), ErrorKind::BadCredentials);
        assert_eq!(unknown_mail.kind(), ErrorKind::BadCredentials);
        assert_eq!(wrong_password.status_code(), 400);
        // Same message either way: the response reveals nothing about
        // which field was wrong.
        assert_eq!(wrong_password.message(), unknown_mail.message());
        assert_eq!(wrong_password.message(), "Incorrect email or password");
    }

    #[tokio::test]
    async fn test_execution_failure_is_internal_with_cause() {
        // No migrations: every query fails at execution time.
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let err = get_user(db.pool(), 1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "Internal error server");
        assert!(err.cause().is_some());

        let err = create_user(db.pool(), &alice()).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "Internal server error");
        assert!(err.cause().is_some());
    }
}
