//! Popup Repository
//!
//! Storage allows any number of active popups; the one shown to
//! visitors is the most recently updated active row.

use sqlx::SqlitePool;

use shared::models::{Popup, PopupCreate, PopupFrequency, PopupUpdate};
use shared::util::{now_millis, snowflake_id};
use shared::LocalizedText;

use super::{RepoError, RepoResult};
use crate::db::fallback;

const POPUP_SELECT: &str = "SELECT id, title_tr, title_en, title_ru, title_ar, image, link, frequency, is_active, created_at, updated_at FROM popup";

/// Storage row with flat per-locale columns
#[derive(Debug, sqlx::FromRow)]
struct PopupRow {
    id: i64,
    title_tr: String,
    title_en: Option<String>,
    title_ru: Option<String>,
    title_ar: Option<String>,
    image: String,
    link: Option<String>,
    frequency: PopupFrequency,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl From<PopupRow> for Popup {
    fn from(row: PopupRow) -> Self {
        Popup {
            id: row.id,
            title: LocalizedText::from_columns(row.title_tr, row.title_en, row.title_ru, row.title_ar),
            image: row.image,
            link: row.link,
            frequency: row.frequency,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// The popup currently shown to visitors, if any.
pub async fn find_current(pool: &SqlitePool) -> Option<Popup> {
    let sql = format!("{POPUP_SELECT} WHERE is_active = 1 ORDER BY updated_at DESC LIMIT 1");
    match sqlx::query_as::<_, PopupRow>(&sql).fetch_optional(pool).await {
        Ok(found) => found.map(Into::into),
        Err(e) => {
            tracing::warn!(error = %e, "popup query failed, serving fallback dataset");
            fallback::popups()
                .into_iter()
                .filter(|p| p.is_active)
                .max_by_key(|p| p.updated_at)
        }
    }
}

/// Every popup, admin view, newest first.
pub async fn find_all(pool: &SqlitePool) -> Vec<Popup> {
    let sql = format!("{POPUP_SELECT} ORDER BY updated_at DESC");
    match sqlx::query_as::<_, PopupRow>(&sql).fetch_all(pool).await {
        Ok(rows) => rows.into_iter().map(Into::into).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "popup list query failed, serving fallback dataset");
            let mut popups = fallback::popups();
            popups.sort_by_key(|p| std::cmp::Reverse(p.updated_at));
            popups
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Popup>> {
    let sql = format!("{POPUP_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, PopupRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Into::into))
}

pub async fn create(pool: &SqlitePool, data: PopupCreate) -> RepoResult<Popup> {
    let id = snowflake_id();
    let now = now_millis();
    let title = data.title.into_columns();
    sqlx::query(
        "INSERT INTO popup (id, title_tr, title_en, title_ru, title_ar, image, link, frequency, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9, ?9)",
    )
    .bind(id)
    .bind(&title.tr)
    .bind(&title.en)
    .bind(&title.ru)
    .bind(&title.ar)
    .bind(&data.image)
    .bind(&data.link)
    .bind(data.frequency.unwrap_or(PopupFrequency::Once))
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create popup".into()))
}

/// Partial update: absent fields keep their stored values.
pub async fn update(pool: &SqlitePool, id: i64, data: PopupUpdate) -> RepoResult<Popup> {
    let now = now_millis();
    let title = data.title.map(LocalizedText::into_columns);
    let rows = sqlx::query(
        "UPDATE popup SET \
         title_tr = COALESCE(?1, title_tr), title_en = COALESCE(?2, title_en), \
         title_ru = COALESCE(?3, title_ru), title_ar = COALESCE(?4, title_ar), \
         image = COALESCE(?5, image), link = COALESCE(?6, link), \
         frequency = COALESCE(?7, frequency), is_active = COALESCE(?8, is_active), \
         updated_at = ?9 WHERE id = ?10",
    )
    .bind(title.as_ref().map(|t| t.tr.clone()))
    .bind(title.as_ref().map(|t| t.en.clone()))
    .bind(title.as_ref().map(|t| t.ru.clone()))
    .bind(title.as_ref().map(|t| t.ar.clone()))
    .bind(&data.image)
    .bind(&data.link)
    .bind(data.frequency)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Popup {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Popup {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM popup WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{closed_pool, test_pool};

    fn sample(title: &str) -> PopupCreate {
        PopupCreate {
            title: LocalizedText::new(title),
            image: format!("/uploads/popups/{title}.jpg"),
            link: None,
            frequency: None,
        }
    }

    #[tokio::test]
    async fn current_popup_is_most_recently_updated_active() {
        let pool = test_pool().await;
        let a = create(&pool, sample("a")).await.unwrap();
        let b = create(&pool, sample("b")).await.unwrap();

        // touching a makes it the most recently updated (sleep keeps the
        // millisecond timestamps strictly ordered)
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        update(
            &pool,
            a.id,
            PopupUpdate {
                link: Some("/kampanyalar".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let current = find_current(&pool).await.unwrap();
        assert_eq!(current.id, a.id);

        // deactivating a hands the slot to b
        update(
            &pool,
            a.id,
            PopupUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let current = find_current(&pool).await.unwrap();
        assert_eq!(current.id, b.id);
    }

    #[tokio::test]
    async fn no_active_popup_means_none() {
        let pool = test_pool().await;
        assert!(find_current(&pool).await.is_none());

        let a = create(&pool, sample("a")).await.unwrap();
        update(
            &pool,
            a.id,
            PopupUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(find_current(&pool).await.is_none());
    }

    #[tokio::test]
    async fn fallback_serves_active_popup() {
        let pool = closed_pool().await;
        let current = find_current(&pool).await;
        assert!(current.is_some());
    }

    #[tokio::test]
    async fn default_frequency_is_once() {
        let pool = test_pool().await;
        let created = create(&pool, sample("a")).await.unwrap();
        assert_eq!(created.frequency, PopupFrequency::Once);
    }
}
