//! Inquiry Repository
//!
//! Inquiries are intake data, not public content: reads here propagate
//! errors instead of serving substitute records.

use sqlx::SqlitePool;

use shared::models::{Inquiry, InquiryCreate, InquiryKind, InquiryStatus};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const INQUIRY_SELECT: &str =
    "SELECT id, kind, name, email, phone, details, status, created_at, updated_at FROM inquiry";

/// Storage row - `details` is serialized JSON
#[derive(Debug, sqlx::FromRow)]
struct InquiryRow {
    id: i64,
    kind: InquiryKind,
    name: String,
    email: String,
    phone: Option<String>,
    details: String,
    status: InquiryStatus,
    created_at: i64,
    updated_at: i64,
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        let details = serde_json::from_str(&row.details).unwrap_or_else(|_| {
            tracing::warn!(id = row.id, "stored inquiry details are not valid JSON");
            serde_json::Value::Object(serde_json::Map::new())
        });
        Inquiry {
            id: row.id,
            kind: row.kind,
            name: row.name,
            email: row.email,
            phone: row.phone,
            details,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// List filter
#[derive(Debug, Clone, Default)]
pub struct InquiryFilter {
    pub kind: Option<InquiryKind>,
    pub status: Option<InquiryStatus>,
}

/// Admin listing, newest first.
pub async fn find_all(pool: &SqlitePool, filter: &InquiryFilter) -> RepoResult<Vec<Inquiry>> {
    let mut sql = format!("{INQUIRY_SELECT} WHERE 1 = 1");
    if filter.kind.is_some() {
        sql.push_str(" AND kind = ?");
    }
    if filter.status.is_some() {
        sql.push_str(" AND status = ?");
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut query = sqlx::query_as::<_, InquiryRow>(&sql);
    if let Some(kind) = filter.kind {
        query = query.bind(kind);
    }
    if let Some(status) = filter.status {
        query = query.bind(status);
    }
    let rows = query.fetch_all(pool).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Inquiry>> {
    let sql = format!("{INQUIRY_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, InquiryRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Into::into))
}

pub async fn create(pool: &SqlitePool, data: InquiryCreate) -> RepoResult<Inquiry> {
    let id = snowflake_id();
    let now = now_millis();
    let details = serde_json::to_string(&data.details)
        .map_err(|e| RepoError::Validation(format!("Invalid inquiry details: {e}")))?;
    sqlx::query(
        "INSERT INTO inquiry (id, kind, name, email, phone, details, status, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'pending', ?7, ?7)",
    )
    .bind(id)
    .bind(data.kind)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&details)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create inquiry".into()))
}

/// Status transition (pending → read, or back).
pub async fn set_status(pool: &SqlitePool, id: i64, status: InquiryStatus) -> RepoResult<Inquiry> {
    let now = now_millis();
    let rows = sqlx::query("UPDATE inquiry SET status = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Inquiry {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Inquiry {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM inquiry WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn leasing() -> InquiryCreate {
        InquiryCreate {
            kind: InquiryKind::Leasing,
            name: "Ayşe Yılmaz".into(),
            email: "ayse@example.com.tr".into(),
            phone: Some("+90 532 000 00 00".into()),
            details: serde_json::json!({
                "company": "Kahve Durağı",
                "sector": "food",
                "requested_area_m2": 85
            }),
        }
    }

    #[tokio::test]
    async fn intake_round_trips_details_json() {
        let pool = test_pool().await;
        let created = create(&pool, leasing()).await.unwrap();
        assert_eq!(created.status, InquiryStatus::Pending);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found.details["company"], "Kahve Durağı");
        assert_eq!(found.details["requested_area_m2"], 85);
    }

    #[tokio::test]
    async fn status_transition_and_filtering() {
        let pool = test_pool().await;
        let a = create(&pool, leasing()).await.unwrap();
        create(
            &pool,
            InquiryCreate {
                kind: InquiryKind::Contact,
                name: "Mehmet Kaya".into(),
                email: "mehmet@example.com".into(),
                phone: None,
                details: serde_json::json!({"message": "Otopark ücretli mi?"}),
            },
        )
        .await
        .unwrap();

        set_status(&pool, a.id, InquiryStatus::Read).await.unwrap();

        let pending = find_all(
            &pool,
            &InquiryFilter {
                status: Some(InquiryStatus::Pending),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].kind, InquiryKind::Contact);

        let leasing_only = find_all(
            &pool,
            &InquiryFilter {
                kind: Some(InquiryKind::Leasing),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(leasing_only.len(), 1);
        assert_eq!(leasing_only[0].status, InquiryStatus::Read);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = test_pool().await;
        let created = create(&pool, leasing()).await.unwrap();
        assert!(delete(&pool, created.id).await.unwrap());
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }
}
