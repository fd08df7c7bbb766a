//! End-to-end content flow against an on-disk database.

use site_server::db::repository::shop::{self, ShopFilter};
use site_server::db::repository::{event, slider};
use site_server::db::DbService;

use shared::models::{EventCreate, ShopCategory, ShopCreate, ShopUpdate, SortOrderUpdate};
use shared::util::now_millis;
use shared::LocalizedText;

async fn open_db(dir: &tempfile::TempDir) -> DbService {
    let path = dir.path().join("site.db");
    DbService::new(path.to_str().unwrap()).await.unwrap()
}

#[tokio::test]
async fn shop_lifecycle_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir).await;

    let created = shop::create(
        &db.pool,
        ShopCreate {
            name: "Zara".into(),
            slug: "zara".into(),
            category: ShopCategory::Fashion,
            floor: 1,
            logo: None,
            banner: None,
            phone: None,
            website: None,
            featured: None,
        },
    )
    .await
    .unwrap();

    // read back by slug: same fields, no invented logo
    let found = shop::find_by_slug(&db.pool, "zara").await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Zara");
    assert_eq!(found.category, ShopCategory::Fashion);
    assert_eq!(found.floor, 1);
    assert_eq!(found.logo, None);
    assert!(found.is_active);

    // deactivate, public list excludes it
    shop::update(
        &db.pool,
        created.id,
        ShopUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let public = shop::list(&db.pool, &ShopFilter::default()).await;
    assert!(public.iter().all(|s| s.id != created.id));
}

#[tokio::test]
async fn event_calendar_and_slider_order_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir).await;
    let now = now_millis();
    const DAY: i64 = 86_400_000;

    event::create(
        &db.pool,
        EventCreate {
            title: LocalizedText::new("Kış Konserleri"),
            description: LocalizedText::new("Kapalı alan konser serisi"),
            slug: "kis-konserleri".into(),
            image: None,
            starts_at: now - 30 * DAY,
            ends_at: now - 20 * DAY,
            location: None,
        },
    )
    .await
    .unwrap();
    event::create(
        &db.pool,
        EventCreate {
            title: LocalizedText::new("Bahar Şenliği"),
            description: LocalizedText::new("Açık hava etkinlikleri"),
            slug: "bahar-senligi".into(),
            image: None,
            starts_at: now + 10 * DAY,
            ends_at: now + 12 * DAY,
            location: None,
        },
    )
    .await
    .unwrap();

    let upcoming = event::find_upcoming(&db.pool, now).await;
    let past = event::find_past(&db.pool, now).await;
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].slug, "bahar-senligi");
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].slug, "kis-konserleri");

    // sliders: reorder batch persists across a fresh read
    let a = slider::create(&db.pool, slider_input("a")).await.unwrap();
    let b = slider::create(&db.pool, slider_input("b")).await.unwrap();

    slider::reorder(
        &db.pool,
        &[
            SortOrderUpdate { id: b.id, sort_order: 0 },
            SortOrderUpdate { id: a.id, sort_order: 1 },
        ],
    )
    .await
    .unwrap();

    let listed = slider::find_active(&db.pool).await;
    assert_eq!(listed.iter().map(|s| s.id).collect::<Vec<_>>(), vec![b.id, a.id]);
}

fn slider_input(name: &str) -> shared::models::SliderCreate {
    shared::models::SliderCreate {
        title: LocalizedText::new(name),
        subtitle: LocalizedText::new("Alt başlık"),
        image: format!("/uploads/sliders/{name}.jpg"),
        mobile_image: None,
        link: None,
        sort_order: None,
    }
}
