//! Fallback datasets
//!
//! Hand-authored substitute content served when the live data source is
//! unreachable, so public pages keep rendering. Callers apply the same
//! predicate the live query would have used (active-only, date range,
//! slug match, ordering).
//!
//! Event end dates are deliberately far in the future so the upcoming
//! filter keeps returning them; the one past event anchors the past
//! listing.

use shared::models::{Event, Popup, PopupFrequency, Shop, ShopCategory, Slider};
use shared::LocalizedText;

// Fixed authoring timestamp for all substitute rows (2024-11-01 UTC)
const AUTHORED_AT: i64 = 1_730_419_200_000;

// 2030-06-01 / 2030-06-15 / 2030-07-20 UTC
const SUMMER_FEST_START: i64 = 1_906_502_400_000;
const SUMMER_FEST_END: i64 = 1_907_712_000_000;
const KIDS_WORKSHOP_END: i64 = 1_910_736_000_000;

// 2024-12-15 → 2024-12-31 UTC
const NYE_MARKET_START: i64 = 1_734_220_800_000;
const NYE_MARKET_END: i64 = 1_735_603_200_000;

pub fn shops() -> Vec<Shop> {
    vec![
        shop(
            9001,
            "Zara",
            "zara",
            ShopCategory::Fashion,
            1,
            Some("+90 212 555 01 01"),
            true,
        ),
        shop(
            9002,
            "Teknosa",
            "teknosa",
            ShopCategory::Electronics,
            2,
            Some("+90 212 555 01 02"),
            false,
        ),
        shop(
            9003,
            "Mado",
            "mado",
            ShopCategory::Food,
            0,
            Some("+90 212 555 01 03"),
            true,
        ),
        shop(
            9004,
            "Paribu Cineverse",
            "paribu-cineverse",
            ShopCategory::Entertainment,
            3,
            None,
            false,
        ),
        shop(
            9005,
            "Atasun Optik",
            "atasun-optik",
            ShopCategory::Services,
            -1,
            None,
            false,
        ),
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: 9101,
            title: LocalizedText {
                tr: "Yaz Festivali".into(),
                en: Some("Summer Festival".into()),
                ru: Some("Летний фестиваль".into()),
                ar: None,
            },
            description: LocalizedText {
                tr: "Açık hava konserleri ve yemek durakları ile iki hafta".into(),
                en: Some("Two weeks of open-air concerts and food stalls".into()),
                ru: None,
                ar: None,
            },
            slug: "yaz-festivali".into(),
            image: Some("/uploads/events/yaz-festivali.jpg".into()),
            starts_at: SUMMER_FEST_START,
            ends_at: SUMMER_FEST_END,
            location: Some("Meydan Katı".into()),
            is_active: true,
            created_at: AUTHORED_AT,
            updated_at: AUTHORED_AT,
        },
        Event {
            id: 9102,
            title: LocalizedText {
                tr: "Çocuk Atölyesi".into(),
                en: Some("Kids Workshop".into()),
                ru: None,
                ar: None,
            },
            description: LocalizedText::new("Hafta sonları seramik ve resim atölyeleri"),
            slug: "cocuk-atolyesi".into(),
            image: None,
            starts_at: SUMMER_FEST_START,
            ends_at: KIDS_WORKSHOP_END,
            location: Some("2. Kat Etkinlik Alanı".into()),
            is_active: true,
            created_at: AUTHORED_AT,
            updated_at: AUTHORED_AT,
        },
        Event {
            id: 9103,
            title: LocalizedText {
                tr: "Yılbaşı Pazarı".into(),
                en: Some("New Year Market".into()),
                ru: Some("Новогодняя ярмарка".into()),
                ar: None,
            },
            description: LocalizedText::new("El yapımı hediyeler ve sıcak içecekler"),
            slug: "yilbasi-pazari".into(),
            image: Some("/uploads/events/yilbasi-pazari.jpg".into()),
            starts_at: NYE_MARKET_START,
            ends_at: NYE_MARKET_END,
            location: Some("Giriş Katı".into()),
            is_active: true,
            created_at: AUTHORED_AT,
            updated_at: AUTHORED_AT,
        },
    ]
}

pub fn sliders() -> Vec<Slider> {
    vec![
        Slider {
            id: 9201,
            title: LocalizedText {
                tr: "Yaza Merhaba".into(),
                en: Some("Hello Summer".into()),
                ru: None,
                ar: None,
            },
            subtitle: LocalizedText {
                tr: "Sezon indirimleri başladı".into(),
                en: Some("Season sales are on".into()),
                ru: None,
                ar: None,
            },
            image: "/uploads/sliders/yaza-merhaba.jpg".into(),
            mobile_image: Some("/uploads/sliders/yaza-merhaba-m.jpg".into()),
            link: Some("/kampanyalar".into()),
            sort_order: 0,
            is_active: true,
            created_at: AUTHORED_AT,
            updated_at: AUTHORED_AT,
        },
        Slider {
            id: 9202,
            title: LocalizedText::new("Yaz Festivali"),
            subtitle: LocalizedText::new("1-15 Haziran, Meydan Katı"),
            image: "/uploads/sliders/yaz-festivali.jpg".into(),
            mobile_image: None,
            link: Some("/etkinlikler/yaz-festivali".into()),
            sort_order: 1,
            is_active: true,
            created_at: AUTHORED_AT,
            updated_at: AUTHORED_AT,
        },
    ]
}

pub fn popups() -> Vec<Popup> {
    vec![Popup {
        id: 9301,
        title: LocalizedText {
            tr: "Yaz Festivali Başlıyor".into(),
            en: Some("Summer Festival Opens".into()),
            ru: None,
            ar: None,
        },
        image: "/uploads/popups/yaz-festivali.jpg".into(),
        link: Some("/etkinlikler/yaz-festivali".into()),
        frequency: PopupFrequency::Once,
        is_active: true,
        created_at: AUTHORED_AT,
        updated_at: AUTHORED_AT,
    }]
}

fn shop(
    id: i64,
    name: &str,
    slug: &str,
    category: ShopCategory,
    floor: i64,
    phone: Option<&str>,
    featured: bool,
) -> Shop {
    Shop {
        id,
        name: name.into(),
        slug: slug.into(),
        category,
        floor,
        logo: Some(format!("/uploads/shops/{slug}-logo.png")),
        banner: None,
        phone: phone.map(Into::into),
        website: None,
        featured,
        is_active: true,
        created_at: AUTHORED_AT,
        updated_at: AUTHORED_AT,
    }
}
