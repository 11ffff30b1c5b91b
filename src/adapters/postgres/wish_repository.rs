//! PostgreSQL implementation of WishRepository.
//!
//! Exchange participation lives in `wish_exchanges` with a composite primary
//! key on `(wish_id, viewer_id)`; `INSERT ... ON CONFLICT DO NOTHING` makes
//! recording idempotent and safe under concurrent attempts.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId, WishId};
use crate::domain::wish::{ImageRef, Wish};
use crate::ports::{wish_not_found, ExchangeRecord, WishRepository};

const SELECT_WISHES: &str = r#"
    SELECT w.id, w.owner_id, w.owner_display_name, w.description, w.image_ref,
           w.created_at,
           COALESCE(
               array_agg(e.viewer_id ORDER BY e.position) FILTER (WHERE e.viewer_id IS NOT NULL),
               '{}'
           ) AS exchanged_with
    FROM wishes w
    LEFT JOIN wish_exchanges e ON e.wish_id = w.id
"#;

const GROUP_WISHES: &str = r#"
    GROUP BY w.id, w.seq, w.owner_id, w.owner_display_name, w.description, w.image_ref,
             w.created_at
"#;

/// PostgreSQL implementation of WishRepository.
#[derive(Clone)]
pub struct PostgresWishRepository {
    pool: PgPool,
}

impl PostgresWishRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishRepository for PostgresWishRepository {
    async fn save(&self, wish: &Wish) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO wishes (
                id, owner_id, owner_display_name, description, image_ref, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(wish.id().as_uuid())
        .bind(wish.owner_id().as_str())
        .bind(wish.owner_display_name())
        .bind(wish.description())
        .bind(wish.image_ref().as_str())
        .bind(wish.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to insert wish"))?;

        Ok(())
    }

    async fn record_exchange(
        &self,
        wish_id: &WishId,
        viewer_id: &UserId,
    ) -> Result<ExchangeRecord, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let owner: Option<(String,)> = sqlx::query_as("SELECT owner_id FROM wishes WHERE id = $1")
            .bind(wish_id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to fetch wish owner"))?;

        let (owner_id,) = owner.ok_or_else(|| wish_not_found(wish_id))?;
        if owner_id == viewer_id.as_str() {
            return Err(DomainError::new(
                ErrorCode::SelfExchange,
                "Cannot exchange with your own wish",
            ));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO wish_exchanges (wish_id, viewer_id, exchanged_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (wish_id, viewer_id) DO NOTHING
            "#,
        )
        .bind(wish_id.as_uuid())
        .bind(viewer_id.as_str())
        .bind(Timestamp::now().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to record exchange"))?;

        let row = sqlx::query(&format!("{} WHERE w.id = $1 {}", SELECT_WISHES, GROUP_WISHES))
            .bind(wish_id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to fetch wish"))?
            .ok_or_else(|| wish_not_found(wish_id))?;
        let wish = row_to_wish(row)?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit exchange"))?;

        Ok(ExchangeRecord {
            wish,
            newly_added: result.rows_affected() == 1,
        })
    }

    async fn find_by_id(&self, id: &WishId) -> Result<Option<Wish>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE w.id = $1 {}", SELECT_WISHES, GROUP_WISHES))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch wish"))?;

        row.map(row_to_wish).transpose()
    }

    async fn list_newest_first(&self) -> Result<Vec<Wish>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} {} ORDER BY w.created_at DESC, w.seq DESC",
            SELECT_WISHES, GROUP_WISHES
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list wishes"))?;

        rows.into_iter().map(row_to_wish).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

fn invalid_row(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

fn row_to_wish(row: sqlx::postgres::PgRow) -> Result<Wish, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| invalid_row("id", e))?;
    let owner_id: String = row
        .try_get("owner_id")
        .map_err(|e| invalid_row("owner_id", e))?;
    let owner_display_name: String = row
        .try_get("owner_display_name")
        .map_err(|e| invalid_row("owner_display_name", e))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| invalid_row("description", e))?;
    let image_ref: String = row
        .try_get("image_ref")
        .map_err(|e| invalid_row("image_ref", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| invalid_row("created_at", e))?;
    let exchanged_with: Vec<String> = row
        .try_get("exchanged_with")
        .map_err(|e| invalid_row("exchanged_with", e))?;

    let exchanged_with = exchanged_with
        .into_iter()
        .map(|v| UserId::new(v).map_err(|e| invalid_row("viewer_id", e)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Wish::reconstitute(
        WishId::from_uuid(id),
        UserId::new(owner_id).map_err(|e| invalid_row("owner_id", e))?,
        owner_display_name,
        description,
        ImageRef::new(image_ref),
        Timestamp::from_datetime(created_at),
        exchanged_with,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_error_prefixes_context() {
        let err = db_error("Failed to list wishes")(sqlx::Error::RowNotFound);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.starts_with("Failed to list wishes: "));
    }

    #[test]
    fn queries_group_by_every_selected_wish_column() {
        for column in [
            "w.id",
            "w.owner_id",
            "w.owner_display_name",
            "w.description",
            "w.image_ref",
            "w.created_at",
        ] {
            assert!(SELECT_WISHES.contains(column));
            assert!(GROUP_WISHES.contains(column));
        }
    }
}
