use crate::error::ApiError;
use crate::models::{NewShowFields, Review, Show, UpdateShowFields};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations. This is the core
/// of the Repository Abstraction pattern, allowing the handlers to interact with
/// the data layer without knowing the specific implementation (Postgres, Mock, etc.).
///
/// Field validation lives at this boundary: every method returns `Result`, and
/// schema constraint violations (blank required field, duplicate title,
/// out-of-range rating) surface as `ApiError::Validation` rather than leaking
/// driver errors. Absence is reported as `Ok(None)` from `find_show` so the
/// caller's classifier — not this layer — decides the 404.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's asynchronous task
/// boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Show Retrieval ---
    // Public listing: every show, newest first.
    async fn list_shows(&self) -> Result<Vec<Show>, ApiError>;
    // Lookup by id. `Ok(None)` means no such document.
    async fn find_show(&self, id: Uuid) -> Result<Option<Show>, ApiError>;

    // --- Show Mutation ---
    // Inserts a new show owned by `owner`. Validates required fields and the
    // unique title constraint.
    async fn create_show(&self, fields: NewShowFields, owner: Uuid) -> Result<Show, ApiError>;
    // Partial update: absent fields keep their stored values. The caller is
    // responsible for the ownership check before invoking this.
    async fn update_show(&self, id: Uuid, fields: UpdateShowFields) -> Result<(), ApiError>;
    // Unconditional delete. The caller is responsible for the ownership check.
    async fn delete_show(&self, id: Uuid) -> Result<(), ApiError>;

    // --- Reviews ---
    // All reviews associated with a show, oldest first.
    async fn reviews_for_show(&self, show_id: Uuid) -> Result<Vec<Review>, ApiError>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the PostgreSQL database.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SHOW_COLUMNS: &str =
    "id, title, starring, director, description, released, owner, created_at, updated_at";

/// require_non_blank
///
/// Store-level required-field validation for creates: a required string column
/// must contain at least one non-whitespace character.
fn require_non_blank(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    async fn list_shows(&self) -> Result<Vec<Show>, ApiError> {
        let query = format!("SELECT {SHOW_COLUMNS} FROM shows ORDER BY created_at DESC");
        let shows = sqlx::query_as::<_, Show>(&query).fetch_all(&self.pool).await?;
        Ok(shows)
    }

    async fn find_show(&self, id: Uuid) -> Result<Option<Show>, ApiError> {
        let query = format!("SELECT {SHOW_COLUMNS} FROM shows WHERE id = $1");
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(show)
    }

    /// create_show
    ///
    /// Inserts a new show with `owner` taken from the authenticated principal.
    /// A duplicate title trips the unique constraint, which the error
    /// classifier surfaces as a validation failure with the store's message.
    async fn create_show(&self, fields: NewShowFields, owner: Uuid) -> Result<Show, ApiError> {
        require_non_blank("title", &fields.title)?;
        require_non_blank("starring", &fields.starring)?;
        require_non_blank("director", &fields.director)?;
        require_non_blank("description", &fields.description)?;

        let query = format!(
            r#"INSERT INTO shows (id, title, starring, director, description, released, owner, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
               RETURNING {SHOW_COLUMNS}"#
        );
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(Uuid::new_v4())
            .bind(&fields.title)
            .bind(&fields.starring)
            .bind(&fields.director)
            .bind(&fields.description)
            .bind(fields.released)
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(show)
    }

    /// update_show
    ///
    /// Uses the PostgreSQL `COALESCE` function to handle `Option<T>` fields:
    /// a column is only updated when the corresponding field is `Some`. The
    /// row is addressed by id alone — ownership has already been verified by
    /// the controller, and keeping the predicate id-only is what lets a
    /// missing row and a foreign-owned row remain distinguishable upstream.
    async fn update_show(&self, id: Uuid, fields: UpdateShowFields) -> Result<(), ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE shows
            SET title = COALESCE($2, title),
                starring = COALESCE($3, starring),
                director = COALESCE($4, director),
                description = COALESCE($5, description),
                released = COALESCE($6, released),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.title)
        .bind(fields.starring)
        .bind(fields.director)
        .bind(fields.description)
        .bind(fields.released)
        .execute(&self.pool)
        .await?;

        // The row can vanish between the controller's fetch and this write;
        // there is no lock spanning the two.
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn delete_show(&self, id: Uuid) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn reviews_for_show(&self, show_id: Uuid) -> Result<Vec<Review>, ApiError> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"SELECT id, title, body, rating, show_id, token, created_at, updated_at
               FROM reviews WHERE show_id = $1 ORDER BY created_at ASC"#,
        )
        .bind(show_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }
}
