//! Slider Repository
//!
//! Display order is the caller-maintained `sort_order` column. The
//! admin drag-reorder submits the complete reassignment as one batch,
//! applied all-or-nothing.

use sqlx::SqlitePool;

use shared::models::{Slider, SliderCreate, SliderUpdate, SortOrderUpdate};
use shared::util::{now_millis, snowflake_id};
use shared::LocalizedText;

use super::{RepoError, RepoResult};
use crate::db::fallback;

const SLIDER_SELECT: &str = "SELECT id, title_tr, title_en, title_ru, title_ar, subtitle_tr, subtitle_en, subtitle_ru, subtitle_ar, image, mobile_image, link, sort_order, is_active, created_at, updated_at FROM slider";

/// Storage row with flat per-locale columns
#[derive(Debug, sqlx::FromRow)]
struct SliderRow {
    id: i64,
    title_tr: String,
    title_en: Option<String>,
    title_ru: Option<String>,
    title_ar: Option<String>,
    subtitle_tr: String,
    subtitle_en: Option<String>,
    subtitle_ru: Option<String>,
    subtitle_ar: Option<String>,
    image: String,
    mobile_image: Option<String>,
    link: Option<String>,
    sort_order: i64,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl From<SliderRow> for Slider {
    fn from(row: SliderRow) -> Self {
        Slider {
            id: row.id,
            title: LocalizedText::from_columns(row.title_tr, row.title_en, row.title_ru, row.title_ar),
            subtitle: LocalizedText::from_columns(
                row.subtitle_tr,
                row.subtitle_en,
                row.subtitle_ru,
                row.subtitle_ar,
            ),
            image: row.image,
            mobile_image: row.mobile_image,
            link: row.link,
            sort_order: row.sort_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Active sliders in display order.
pub async fn find_active(pool: &SqlitePool) -> Vec<Slider> {
    let sql = format!("{SLIDER_SELECT} WHERE is_active = 1 ORDER BY sort_order ASC");
    match sqlx::query_as::<_, SliderRow>(&sql).fetch_all(pool).await {
        Ok(rows) => rows.into_iter().map(Into::into).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "slider query failed, serving fallback dataset");
            let mut sliders: Vec<Slider> =
                fallback::sliders().into_iter().filter(|s| s.is_active).collect();
            sliders.sort_by_key(|s| s.sort_order);
            sliders
        }
    }
}

/// Every slider, admin view, in display order.
pub async fn find_all(pool: &SqlitePool) -> Vec<Slider> {
    let sql = format!("{SLIDER_SELECT} ORDER BY sort_order ASC");
    match sqlx::query_as::<_, SliderRow>(&sql).fetch_all(pool).await {
        Ok(rows) => rows.into_iter().map(Into::into).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "slider list query failed, serving fallback dataset");
            let mut sliders = fallback::sliders();
            sliders.sort_by_key(|s| s.sort_order);
            sliders
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Slider>> {
    let sql = format!("{SLIDER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, SliderRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Into::into))
}

pub async fn create(pool: &SqlitePool, data: SliderCreate) -> RepoResult<Slider> {
    let id = snowflake_id();
    let now = now_millis();
    let title = data.title.into_columns();
    let subtitle = data.subtitle.into_columns();
    // append to the end of the sequence unless the caller picked a slot
    let sort_order = match data.sort_order {
        Some(order) => order,
        None => next_sort_order(pool).await?,
    };

    sqlx::query(
        "INSERT INTO slider (id, title_tr, title_en, title_ru, title_ar, subtitle_tr, subtitle_en, subtitle_ru, subtitle_ar, image, mobile_image, link, sort_order, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, 1, ?14, ?14)",
    )
    .bind(id)
    .bind(&title.tr)
    .bind(&title.en)
    .bind(&title.ru)
    .bind(&title.ar)
    .bind(&subtitle.tr)
    .bind(&subtitle.en)
    .bind(&subtitle.ru)
    .bind(&subtitle.ar)
    .bind(&data.image)
    .bind(&data.mobile_image)
    .bind(&data.link)
    .bind(sort_order)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create slider".into()))
}

/// Partial update: absent fields keep their stored values.
pub async fn update(pool: &SqlitePool, id: i64, data: SliderUpdate) -> RepoResult<Slider> {
    let now = now_millis();
    let title = data.title.map(LocalizedText::into_columns);
    let subtitle = data.subtitle.map(LocalizedText::into_columns);
    let rows = sqlx::query(
        "UPDATE slider SET \
         title_tr = COALESCE(?1, title_tr), title_en = COALESCE(?2, title_en), \
         title_ru = COALESCE(?3, title_ru), title_ar = COALESCE(?4, title_ar), \
         subtitle_tr = COALESCE(?5, subtitle_tr), subtitle_en = COALESCE(?6, subtitle_en), \
         subtitle_ru = COALESCE(?7, subtitle_ru), subtitle_ar = COALESCE(?8, subtitle_ar), \
         image = COALESCE(?9, image), mobile_image = COALESCE(?10, mobile_image), \
         link = COALESCE(?11, link), sort_order = COALESCE(?12, sort_order), \
         is_active = COALESCE(?13, is_active), updated_at = ?14 WHERE id = ?15",
    )
    .bind(title.as_ref().map(|t| t.tr.clone()))
    .bind(title.as_ref().map(|t| t.en.clone()))
    .bind(title.as_ref().map(|t| t.ru.clone()))
    .bind(title.as_ref().map(|t| t.ar.clone()))
    .bind(subtitle.as_ref().map(|s| s.tr.clone()))
    .bind(subtitle.as_ref().map(|s| s.en.clone()))
    .bind(subtitle.as_ref().map(|s| s.ru.clone()))
    .bind(subtitle.as_ref().map(|s| s.ar.clone()))
    .bind(&data.image)
    .bind(&data.mobile_image)
    .bind(&data.link)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Slider {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Slider {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM slider WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Apply a bulk reorder batch in one transaction.
///
/// All-or-nothing: an unknown id rolls the whole batch back. Sliders
/// outside the batch keep their order values. Concurrent batches are
/// last-write-wins; acceptable for an admin-only operation.
pub async fn reorder(pool: &SqlitePool, updates: &[SortOrderUpdate]) -> RepoResult<usize> {
    let now = now_millis();
    let mut tx = pool.begin().await?;
    for item in updates {
        let rows = sqlx::query("UPDATE slider SET sort_order = ?1, updated_at = ?2 WHERE id = ?3")
            .bind(item.sort_order)
            .bind(now)
            .bind(item.id)
            .execute(&mut *tx)
            .await?;
        if rows.rows_affected() == 0 {
            // dropping the transaction rolls everything back
            return Err(RepoError::NotFound(format!("Slider {} not found", item.id)));
        }
    }
    tx.commit().await?;
    Ok(updates.len())
}

async fn next_sort_order(pool: &SqlitePool) -> RepoResult<i64> {
    let (max,): (Option<i64>,) = sqlx::query_as("SELECT MAX(sort_order) FROM slider")
        .fetch_one(pool)
        .await?;
    Ok(max.map_or(0, |m| m + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{closed_pool, test_pool};

    fn sample(title: &str) -> SliderCreate {
        SliderCreate {
            title: LocalizedText::new(title),
            subtitle: LocalizedText::new("Alt başlık"),
            image: format!("/uploads/sliders/{title}.jpg"),
            mobile_image: None,
            link: None,
            sort_order: None,
        }
    }

    #[tokio::test]
    async fn creates_append_to_display_sequence() {
        let pool = test_pool().await;
        let a = create(&pool, sample("a")).await.unwrap();
        let b = create(&pool, sample("b")).await.unwrap();
        let c = create(&pool, sample("c")).await.unwrap();
        assert_eq!((a.sort_order, b.sort_order, c.sort_order), (0, 1, 2));

        let listed = find_active(&pool).await;
        assert_eq!(
            listed.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![a.id, b.id, c.id]
        );
    }

    #[tokio::test]
    async fn reorder_applies_whole_batch() {
        let pool = test_pool().await;
        let a = create(&pool, sample("a")).await.unwrap();
        let b = create(&pool, sample("b")).await.unwrap();
        let c = create(&pool, sample("c")).await.unwrap();

        reorder(
            &pool,
            &[
                SortOrderUpdate { id: c.id, sort_order: 0 },
                SortOrderUpdate { id: a.id, sort_order: 1 },
                SortOrderUpdate { id: b.id, sort_order: 2 },
            ],
        )
        .await
        .unwrap();

        let listed = find_active(&pool).await;
        assert_eq!(
            listed.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![c.id, a.id, b.id]
        );
    }

    #[tokio::test]
    async fn reorder_with_unknown_id_changes_nothing() {
        let pool = test_pool().await;
        let a = create(&pool, sample("a")).await.unwrap();
        let b = create(&pool, sample("b")).await.unwrap();

        let err = reorder(
            &pool,
            &[
                SortOrderUpdate { id: a.id, sort_order: 1 },
                SortOrderUpdate { id: 424242, sort_order: 0 },
                SortOrderUpdate { id: b.id, sort_order: 2 },
            ],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        // rollback left the original sequence intact
        let listed = find_active(&pool).await;
        assert_eq!(
            listed.iter().map(|s| (s.id, s.sort_order)).collect::<Vec<_>>(),
            vec![(a.id, 0), (b.id, 1)]
        );
    }

    #[tokio::test]
    async fn reorder_leaves_sliders_outside_batch_untouched() {
        let pool = test_pool().await;
        let a = create(&pool, sample("a")).await.unwrap();
        let b = create(&pool, sample("b")).await.unwrap();
        let c = create(&pool, sample("c")).await.unwrap();

        reorder(
            &pool,
            &[
                SortOrderUpdate { id: a.id, sort_order: 5 },
                SortOrderUpdate { id: b.id, sort_order: 4 },
            ],
        )
        .await
        .unwrap();

        let c_after = find_by_id(&pool, c.id).await.unwrap().unwrap();
        assert_eq!(c_after.sort_order, 2);
    }

    #[tokio::test]
    async fn fallback_is_sorted_by_display_order() {
        let pool = closed_pool().await;
        let sliders = find_active(&pool).await;
        assert!(!sliders.is_empty());
        assert!(sliders.windows(2).all(|w| w[0].sort_order <= w[1].sort_order));
    }
}
