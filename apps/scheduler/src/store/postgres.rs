//! PostgreSQL-backed review store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use study_core::{Flashcard, Source};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::store::{NewFlashcard, ReviewStore, ReviewUpdate};

/// Store backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

/// Flashcard row as stored in Postgres.
#[derive(Debug, FromRow)]
struct FlashcardRow {
    id: i64,
    user_id: Uuid,
    front: String,
    back: String,
    source: String,
    created_at: DateTime<Utc>,
    next_review_date: Option<DateTime<Utc>>,
    review_count: i32,
    last_reviewed_at: Option<DateTime<Utc>>,
}

impl FlashcardRow {
    fn into_card(self) -> Flashcard {
        Flashcard {
            id: self.id,
            owner_id: self.user_id,
            front: self.front,
            back: self.back,
            source: Source::from_str(&self.source).unwrap_or_default(),
            created_at: self.created_at,
            next_review_date: self.next_review_date,
            review_count: self.review_count.max(0) as u32,
            last_reviewed_at: self.last_reviewed_at,
        }
    }
}

impl PgStore {
    /// Connect and create the connection pool.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))?;
        Ok(())
    }

    /// Get the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ReviewStore for PgStore {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Flashcard>, StoreError> {
        let rows = sqlx::query_as::<_, FlashcardRow>(
            r#"
            SELECT id, user_id, front, back, source, created_at,
                   next_review_date, review_count, last_reviewed_at
            FROM flashcards
            WHERE user_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FlashcardRow::into_card).collect())
    }

    async fn find_by_owner_and_id(
        &self,
        owner_id: Uuid,
        id: i64,
    ) -> Result<Option<Flashcard>, StoreError> {
        let row = sqlx::query_as::<_, FlashcardRow>(
            r#"
            SELECT id, user_id, front, back, source, created_at,
                   next_review_date, review_count, last_reviewed_at
            FROM flashcards
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(owner_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FlashcardRow::into_card))
    }

    async fn update_review_fields(
        &self,
        owner_id: Uuid,
        id: i64,
        update: ReviewUpdate,
    ) -> Result<bool, StoreError> {
        // The review_count predicate is the compare-and-swap guard; a stale
        // read matches zero rows and nothing is written.
        let result = sqlx::query(
            r#"
            UPDATE flashcards
            SET next_review_date = $3,
                review_count = $4,
                last_reviewed_at = $5,
                updated_at = NOW()
            WHERE user_id = $1 AND id = $2 AND review_count = $6
            "#,
        )
        .bind(owner_id)
        .bind(id)
        .bind(update.next_review_date)
        .bind(update.review_count as i32)
        .bind(update.last_reviewed_at)
        .bind(update.expected_review_count as i32)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert(&self, card: NewFlashcard) -> Result<Flashcard, StoreError> {
        let row = sqlx::query_as::<_, FlashcardRow>(
            r#"
            INSERT INTO flashcards (user_id, front, back, source)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, front, back, source, created_at,
                      next_review_date, review_count, last_reviewed_at
            "#,
        )
        .bind(card.owner_id)
        .bind(&card.front)
        .bind(&card.back)
        .bind(card.source.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_card())
    }
}
