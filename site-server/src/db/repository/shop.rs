//! Shop Repository

use sqlx::SqlitePool;

use shared::models::{Shop, ShopCategory, ShopCreate, ShopUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};
use crate::db::fallback;

const SHOP_SELECT: &str = "SELECT id, name, slug, category, floor, logo, banner, phone, website, featured, is_active, created_at, updated_at FROM shop";

/// List filter - all predicates are ANDed
#[derive(Debug, Clone, Default)]
pub struct ShopFilter {
    /// Case-insensitive substring match on name
    pub q: Option<String>,
    pub category: Option<ShopCategory>,
    pub floor: Option<i64>,
    pub featured_only: bool,
    /// Admin listings include deactivated shops
    pub include_inactive: bool,
}

/// List shops, name-ordered. Serves the fallback dataset when the
/// source is unreachable.
pub async fn list(pool: &SqlitePool, filter: &ShopFilter) -> Vec<Shop> {
    match query_list(pool, filter).await {
        Ok(shops) => shops,
        Err(e) => {
            tracing::warn!(error = %e, "shop list query failed, serving fallback dataset");
            filter_fallback(fallback::shops(), filter)
        }
    }
}

/// Active shop by slug. Falls back only when the query itself fails;
/// a reachable source with no match is a genuine not-found.
pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Option<Shop> {
    let sql = format!("{SHOP_SELECT} WHERE slug = ? AND is_active = 1");
    match sqlx::query_as::<_, Shop>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await
    {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(error = %e, slug, "shop slug query failed, serving fallback dataset");
            fallback::shops()
                .into_iter()
                .find(|s| s.slug == slug && s.is_active)
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Shop>> {
    let sql = format!("{SHOP_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Shop>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ShopCreate) -> RepoResult<Shop> {
    if slug_exists(pool, &data.slug, None).await? {
        return Err(RepoError::Duplicate(format!(
            "Shop slug '{}' already exists",
            data.slug
        )));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO shop (id, name, slug, category, floor, logo, banner, phone, website, featured, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 1, ?11, ?11)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.slug)
    .bind(data.category)
    .bind(data.floor)
    .bind(&data.logo)
    .bind(&data.banner)
    .bind(&data.phone)
    .bind(&data.website)
    .bind(data.featured.unwrap_or(false))
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create shop".into()))
}

/// Partial update: absent fields keep their stored values.
pub async fn update(pool: &SqlitePool, id: i64, data: ShopUpdate) -> RepoResult<Shop> {
    if let Some(slug) = &data.slug {
        if slug_exists(pool, slug, Some(id)).await? {
            return Err(RepoError::Duplicate(format!("Shop slug '{slug}' already exists")));
        }
    }

    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE shop SET name = COALESCE(?1, name), slug = COALESCE(?2, slug), category = COALESCE(?3, category), \
         floor = COALESCE(?4, floor), logo = COALESCE(?5, logo), banner = COALESCE(?6, banner), \
         phone = COALESCE(?7, phone), website = COALESCE(?8, website), featured = COALESCE(?9, featured), \
         is_active = COALESCE(?10, is_active), updated_at = ?11 WHERE id = ?12",
    )
    .bind(&data.name)
    .bind(&data.slug)
    .bind(data.category)
    .bind(data.floor)
    .bind(&data.logo)
    .bind(&data.banner)
    .bind(&data.phone)
    .bind(&data.website)
    .bind(data.featured)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Shop {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Shop {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM shop WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

async fn query_list(pool: &SqlitePool, filter: &ShopFilter) -> RepoResult<Vec<Shop>> {
    let mut sql = format!("{SHOP_SELECT} WHERE 1 = 1");
    if !filter.include_inactive {
        sql.push_str(" AND is_active = 1");
    }
    if filter.q.is_some() {
        sql.push_str(" AND name LIKE '%' || ? || '%'");
    }
    if filter.category.is_some() {
        sql.push_str(" AND category = ?");
    }
    if filter.floor.is_some() {
        sql.push_str(" AND floor = ?");
    }
    if filter.featured_only {
        sql.push_str(" AND featured = 1");
    }
    sql.push_str(" ORDER BY name COLLATE NOCASE ASC");

    let mut query = sqlx::query_as::<_, Shop>(&sql);
    if let Some(q) = &filter.q {
        query = query.bind(q.clone());
    }
    if let Some(category) = filter.category {
        query = query.bind(category);
    }
    if let Some(floor) = filter.floor {
        query = query.bind(floor);
    }
    Ok(query.fetch_all(pool).await?)
}

/// The live list predicate, replayed over the substitute dataset.
fn filter_fallback(shops: Vec<Shop>, filter: &ShopFilter) -> Vec<Shop> {
    let q_lower = filter.q.as_ref().map(|q| q.to_lowercase());
    let mut shops: Vec<Shop> = shops
        .into_iter()
        .filter(|s| filter.include_inactive || s.is_active)
        .filter(|s| {
            q_lower
                .as_ref()
                .map_or(true, |q| s.name.to_lowercase().contains(q))
        })
        .filter(|s| filter.category.map_or(true, |c| s.category == c))
        .filter(|s| filter.floor.map_or(true, |f| s.floor == f))
        .filter(|s| !filter.featured_only || s.featured)
        .collect();
    shops.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    shops
}

async fn slug_exists(pool: &SqlitePool, slug: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
    let row: Option<(i64,)> = match exclude_id {
        Some(id) => {
            sqlx::query_as("SELECT id FROM shop WHERE slug = ? AND id != ? LIMIT 1")
                .bind(slug)
                .bind(id)
                .fetch_optional(pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT id FROM shop WHERE slug = ? LIMIT 1")
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

    fn zara() -> ShopCreate {
        ShopCreate {
            name: "Zara".into(),
            slug: "zara".into(),
            category: ShopCategory::Fashion,
            floor: 1,
            logo: None,
            banner: None,
            phone: None,
            website: None,
            featured: Some(true),
        }
    }

    #[tokio::test]
    async fn create_then_read_back_by_slug() {
        let pool = test_pool().await;
        let created = create(&pool, zara()).await.unwrap();

        let found = find_by_slug(&pool, "zara").await.unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Zara");
        assert_eq!(found.category, ShopCategory::Fashion);
        assert_eq!(found.floor, 1);
        assert_eq!(found.logo, None);
        assert!(found.featured);
        assert!(found.is_active);
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let pool = test_pool().await;
        create(&pool, zara()).await.unwrap();
        let err = create(&pool, zara()).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn partial_update_keeps_absent_fields() {
        let pool = test_pool().await;
        let created = create(&pool, zara()).await.unwrap();

        let updated = update(
            &pool,
            created.id,
            ShopUpdate {
                floor: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.floor, 2);
        assert_eq!(updated.name, "Zara");
        assert_eq!(updated.slug, "zara");
        assert!(updated.featured);
    }

    #[tokio::test]
    async fn deactivated_shop_leaves_public_list() {
        let pool = test_pool().await;
        let created = create(&pool, zara()).await.unwrap();

        let public = list(&pool, &ShopFilter::default()).await;
        assert_eq!(public.len(), 1);

        update(
            &pool,
            created.id,
            ShopUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let public = list(&pool, &ShopFilter::default()).await;
        assert!(public.is_empty());

        let admin = list(
            &pool,
            &ShopFilter {
                include_inactive: true,
                ..Default::default()
            },
        )
        .await;
        assert_eq!(admin.len(), 1);
    }

    #[tokio::test]
    async fn name_search_is_case_insensitive() {
        let pool = test_pool().await;
        create(&pool, zara()).await.unwrap();
        create(
            &pool,
            ShopCreate {
                name: "Mado".into(),
                slug: "mado".into(),
                category: ShopCategory::Food,
                floor: 0,
                logo: None,
                banner: None,
                phone: None,
                website: None,
                featured: None,
            },
        )
        .await
        .unwrap();

        let hits = list(
            &pool,
            &ShopFilter {
                q: Some("zAr".into()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "zara");
    }

    #[tokio::test]
    async fn unreachable_source_serves_filtered_fallback() {
        let pool = closed_pool().await;

        let all = list(&pool, &ShopFilter::default()).await;
        assert_eq!(all.len(), fallback::shops().len());

        let fashion = list(
            &pool,
            &ShopFilter {
                category: Some(ShopCategory::Fashion),
                ..Default::default()
            },
        )
        .await;
        assert!(!fashion.is_empty());
        assert!(fashion.iter().all(|s| s.category == ShopCategory::Fashion));

        // slug lookup falls back on error too
        let zara = find_by_slug(&pool, "zara").await;
        assert!(zara.is_some());
    }

    #[tokio::test]
    async fn reachable_source_with_no_match_is_not_found() {
        let pool = test_pool().await;
        // live source reachable but empty: fallback must NOT mask the 404
        assert!(find_by_slug(&pool, "zara").await.is_none());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = test_pool().await;
        let created = create(&pool, zara()).await.unwrap();
        assert!(delete(&pool, created.id).await.unwrap());
        assert!(!delete(&pool, created.id).await.unwrap());
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }
}
