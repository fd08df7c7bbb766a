//! Event Repository
//!
//! Upcoming/past is decided at read time against `ends_at`. Creation is
//! capped: the site never carries more than [`MAX_ACTIVE_EVENTS`] active
//! events at once.

use sqlx::SqlitePool;

use shared::models::{Event, EventCreate, EventUpdate};
use shared::util::{now_millis, snowflake_id};
use shared::LocalizedText;

use super::{RepoError, RepoResult};
use crate::db::fallback;

/// Hard cap on active events
pub const MAX_ACTIVE_EVENTS: i64 = 20;

const EVENT_SELECT: &str = "SELECT id, title_tr, title_en, title_ru, title_ar, description_tr, description_en, description_ru, description_ar, slug, image, starts_at, ends_at, location, is_active, created_at, updated_at FROM event";

/// Storage row with flat per-locale columns
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: i64,
    title_tr: String,
    title_en: Option<String>,
    title_ru: Option<String>,
    title_ar: Option<String>,
    description_tr: String,
    description_en: Option<String>,
    description_ru: Option<String>,
    description_ar: Option<String>,
    slug: String,
    image: Option<String>,
    starts_at: i64,
    ends_at: i64,
    location: Option<String>,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: LocalizedText::from_columns(row.title_tr, row.title_en, row.title_ru, row.title_ar),
            description: LocalizedText::from_columns(
                row.description_tr,
                row.description_en,
                row.description_ru,
                row.description_ar,
            ),
            slug: row.slug,
            image: row.image,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            location: row.location,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Active events that have not ended yet, soonest first.
pub async fn find_upcoming(pool: &SqlitePool, now: i64) -> Vec<Event> {
    let sql = format!("{EVENT_SELECT} WHERE is_active = 1 AND ends_at >= ? ORDER BY starts_at ASC");
    match fetch_events(pool, &sql, now).await {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!(error = %e, "upcoming events query failed, serving fallback dataset");
            let mut events: Vec<Event> = fallback::events()
                .into_iter()
                .filter(|ev| ev.is_active && ev.ends_at >= now)
                .collect();
            events.sort_by_key(|ev| ev.starts_at);
            events
        }
    }
}

/// Active events that have ended, most recently ended first.
pub async fn find_past(pool: &SqlitePool, now: i64) -> Vec<Event> {
    let sql = format!("{EVENT_SELECT} WHERE is_active = 1 AND ends_at < ? ORDER BY ends_at DESC");
    match fetch_events(pool, &sql, now).await {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!(error = %e, "past events query failed, serving fallback dataset");
            let mut events: Vec<Event> = fallback::events()
                .into_iter()
                .filter(|ev| ev.is_active && ev.ends_at < now)
                .collect();
            events.sort_by_key(|ev| std::cmp::Reverse(ev.ends_at));
            events
        }
    }
}

/// Every event, admin view, newest start first.
pub async fn find_all(pool: &SqlitePool) -> Vec<Event> {
    let sql = format!("{EVENT_SELECT} ORDER BY starts_at DESC");
    match sqlx::query_as::<_, EventRow>(&sql).fetch_all(pool).await {
        Ok(rows) => rows.into_iter().map(Into::into).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "event list query failed, serving fallback dataset");
            let mut events = fallback::events();
            events.sort_by_key(|ev| std::cmp::Reverse(ev.starts_at));
            events
        }
    }
}

/// Active event by slug. Falls back only when the query itself fails.
pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Option<Event> {
    let sql = format!("{EVENT_SELECT} WHERE slug = ? AND is_active = 1");
    match sqlx::query_as::<_, EventRow>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await
    {
        Ok(found) => found.map(Into::into),
        Err(e) => {
            tracing::warn!(error = %e, slug, "event slug query failed, serving fallback dataset");
            fallback::events()
                .into_iter()
                .find(|ev| ev.slug == slug && ev.is_active)
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Event>> {
    let sql = format!("{EVENT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, EventRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Into::into))
}

pub async fn create(pool: &SqlitePool, data: EventCreate) -> RepoResult<Event> {
    let active = count_active(pool).await?;
    if active >= MAX_ACTIVE_EVENTS {
        return Err(RepoError::Validation(format!(
            "Active event limit reached ({MAX_ACTIVE_EVENTS}); archive an event before adding another"
        )));
    }
    if slug_exists(pool, &data.slug, None).await? {
        return Err(RepoError::Duplicate(format!(
            "Event slug '{}' already exists",
            data.slug
        )));
    }

    let id = snowflake_id();
    let now = now_millis();
    let title = data.title.into_columns();
    let description = data.description.into_columns();
    sqlx::query(
        "INSERT INTO event (id, title_tr, title_en, title_ru, title_ar, description_tr, description_en, description_ru, description_ar, slug, image, starts_at, ends_at, location, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, 1, ?15, ?15)",
    )
    .bind(id)
    .bind(&title.tr)
    .bind(&title.en)
    .bind(&title.ru)
    .bind(&title.ar)
    .bind(&description.tr)
    .bind(&description.en)
    .bind(&description.ru)
    .bind(&description.ar)
    .bind(&data.slug)
    .bind(&data.image)
    .bind(data.starts_at)
    .bind(data.ends_at)
    .bind(&data.location)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create event".into()))
}

/// Partial update: absent fields keep their stored values. A supplied
/// localized field replaces the whole column group, with blank locales
/// refilled from the base text.
pub async fn update(pool: &SqlitePool, id: i64, data: EventUpdate) -> RepoResult<Event> {
    if let Some(slug) = &data.slug {
        if slug_exists(pool, slug, Some(id)).await? {
            return Err(RepoError::Duplicate(format!("Event slug '{slug}' already exists")));
        }
    }

    let now = now_millis();
    let title = data.title.map(LocalizedText::into_columns);
    let description = data.description.map(LocalizedText::into_columns);
    let rows = sqlx::query(
        "UPDATE event SET \
         title_tr = COALESCE(?1, title_tr), title_en = COALESCE(?2, title_en), \
         title_ru = COALESCE(?3, title_ru), title_ar = COALESCE(?4, title_ar), \
         description_tr = COALESCE(?5, description_tr), description_en = COALESCE(?6, description_en), \
         description_ru = COALESCE(?7, description_ru), description_ar = COALESCE(?8, description_ar), \
         slug = COALESCE(?9, slug), image = COALESCE(?10, image), \
         starts_at = COALESCE(?11, starts_at), ends_at = COALESCE(?12, ends_at), \
         location = COALESCE(?13, location), is_active = COALESCE(?14, is_active), \
         updated_at = ?15 WHERE id = ?16",
    )
    .bind(title.as_ref().map(|t| t.tr.clone()))
    .bind(title.as_ref().map(|t| t.en.clone()))
    .bind(title.as_ref().map(|t| t.ru.clone()))
    .bind(title.as_ref().map(|t| t.ar.clone()))
    .bind(description.as_ref().map(|d| d.tr.clone()))
    .bind(description.as_ref().map(|d| d.en.clone()))
    .bind(description.as_ref().map(|d| d.ru.clone()))
    .bind(description.as_ref().map(|d| d.ar.clone()))
    .bind(&data.slug)
    .bind(&data.image)
    .bind(data.starts_at)
    .bind(data.ends_at)
    .bind(&data.location)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Event {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Event {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM event WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

async fn count_active(pool: &SqlitePool) -> RepoResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM event WHERE is_active = 1")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

async fn fetch_events(pool: &SqlitePool, sql: &str, now: i64) -> RepoResult<Vec<Event>> {
    let rows = sqlx::query_as::<_, EventRow>(sql)
        .bind(now)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

async fn slug_exists(pool: &SqlitePool, slug: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
    let row: Option<(i64,)> = match exclude_id {
        Some(id) => {
            sqlx::query_as("SELECT id FROM event WHERE slug = ? AND id != ? LIMIT 1")
                .bind(slug)
                .bind(id)
                .fetch_optional(pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT id FROM event WHERE slug = ? LIMIT 1")
                .bind(slug)
                .fetch_optional(pool)
                .await?
        }
    };
    Ok(row.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{closed_pool, test_pool};

    const DAY: i64 = 86_400_000;

    fn sample(slug: &str, starts_at: i64, ends_at: i64) -> EventCreate {
        EventCreate {
            title: LocalizedText {
                tr: "Yaz Konseri".into(),
                en: Some("Summer Concert".into()),
                ru: None,
                ar: None,
            },
            description: LocalizedText::new("Açık havada canlı müzik"),
            slug: slug.into(),
            image: None,
            starts_at,
            ends_at,
            location: Some("Meydan Katı".into()),
        }
    }

    #[tokio::test]
    async fn missing_locales_default_to_base_on_create() {
        let pool = test_pool().await;
        let now = now_millis();
        let created = create(&pool, sample("yaz-konseri", now, now + DAY)).await.unwrap();

        // en was supplied, ru/ar were derived from the base text on write
        assert_eq!(created.title.en.as_deref(), Some("Summer Concert"));
        assert_eq!(created.title.ru.as_deref(), Some("Yaz Konseri"));
        assert_eq!(created.title.ar.as_deref(), Some("Yaz Konseri"));
        assert_eq!(created.description.en.as_deref(), Some("Açık havada canlı müzik"));
    }

    #[tokio::test]
    async fn upcoming_and_past_are_disjoint_and_sorted() {
        let pool = test_pool().await;
        let now = now_millis();
        create(&pool, sample("gecmis-a", now - 10 * DAY, now - 8 * DAY)).await.unwrap();
        create(&pool, sample("gecmis-b", now - 5 * DAY, now - 2 * DAY)).await.unwrap();
        create(&pool, sample("yakin", now - DAY, now + DAY)).await.unwrap();
        create(&pool, sample("uzak", now + 5 * DAY, now + 9 * DAY)).await.unwrap();

        let upcoming = find_upcoming(&pool, now).await;
        let past = find_past(&pool, now).await;

        assert_eq!(
            upcoming.iter().map(|e| e.slug.as_str()).collect::<Vec<_>>(),
            vec!["yakin", "uzak"]
        );
        assert_eq!(
            past.iter().map(|e| e.slug.as_str()).collect::<Vec<_>>(),
            vec!["gecmis-b", "gecmis-a"]
        );

        // disjoint, and together they cover all active events
        for ev in &upcoming {
            assert!(past.iter().all(|p| p.id != ev.id));
        }
        assert_eq!(upcoming.len() + past.len(), find_all(&pool).await.len());
    }

    #[tokio::test]
    async fn create_fails_at_active_event_cap() {
        let pool = test_pool().await;
        let now = now_millis();
        for i in 0..MAX_ACTIVE_EVENTS {
            create(&pool, sample(&format!("etkinlik-{i}"), now, now + DAY)).await.unwrap();
        }

        let err = create(&pool, sample("bir-fazla", now, now + DAY)).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        // nothing was written
        assert_eq!(find_all(&pool).await.len(), MAX_ACTIVE_EVENTS as usize);

        // deactivating one frees a slot
        let first = find_by_slug(&pool, "etkinlik-0").await.unwrap();
        update(
            &pool,
            first.id,
            EventUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        create(&pool, sample("bir-fazla", now, now + DAY)).await.unwrap();
    }

    #[tokio::test]
    async fn partial_update_keeps_absent_fields() {
        let pool = test_pool().await;
        let now = now_millis();
        let created = create(&pool, sample("yaz-konseri", now, now + DAY)).await.unwrap();

        let updated = update(
            &pool,
            created.id,
            EventUpdate {
                location: Some("Teras Katı".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.location.as_deref(), Some("Teras Katı"));
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.slug, created.slug);
        assert_eq!(updated.starts_at, created.starts_at);
    }

    #[tokio::test]
    async fn fallback_respects_date_predicates() {
        let pool = closed_pool().await;
        // a time between the fallback's past market and future festival
        let now = 1_750_000_000_000; // 2025-06-15

        let upcoming = find_upcoming(&pool, now).await;
        let past = find_past(&pool, now).await;

        assert!(!upcoming.is_empty());
        assert!(upcoming.iter().all(|ev| ev.ends_at >= now));
        assert!(!past.is_empty());
        assert!(past.iter().all(|ev| ev.ends_at < now));
    }
}
