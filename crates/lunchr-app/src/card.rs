//! Result card construction.
//!
//! [`RestaurantCard`] is the fully-resolved view model for one roulette
//! hit: every display fallback (missing hours, missing tagline, the
//! `"no-image"` photo sentinel, area-mode searches without distance) is
//! applied here so views only render.

use lunchr_api::SearchHit;

/// Substituted when the backend provides no usable photo.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZjBmMGYwIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCwgc2Fucy1zZXJpZiIgZm9udC1zaXpl";

/// Reserved photo URL meaning "no photo available", distinct from an
/// absent field.
pub const NO_PHOTO_SENTINEL: &str = "no-image";

pub const NO_HOURS: &str = "営業時間情報なし";
pub const NO_PHOTO_ALT: &str = "レストラン画像なし";
/// Walking-time slot text for area-mode hits, which carry no distance.
pub const NO_DISTANCE_ACCESS_NOTE: &str = "アクセス情報は店舗詳細をご確認ください";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantCard {
    pub name: String,
    pub genre: String,
    pub address: String,
    pub budget: String,
    pub hours: String,
    pub catchphrase: String,
    pub photo_url: String,
    pub photo_alt: String,
    pub walking_time: String,
    /// Distance badge text; `None` hides the badge (area mode).
    pub distance_badge: Option<String>,
    /// Outbound links, passed through unvalidated — the backend is trusted
    /// to provide well-formed URLs.
    pub map_url: String,
    pub hotpepper_url: String,
}

impl RestaurantCard {
    #[must_use]
    pub fn from_hit(hit: &SearchHit) -> Self {
        let restaurant = &hit.restaurant;

        let hours = restaurant
            .hours
            .clone()
            .unwrap_or_else(|| NO_HOURS.to_owned());

        let catchphrase = restaurant
            .catchphrase
            .clone()
            .or_else(|| restaurant.summary.clone())
            .unwrap_or_default();

        let (photo_url, photo_alt) = match restaurant.photo_url.as_deref() {
            Some(url) if url != NO_PHOTO_SENTINEL => {
                (url.to_owned(), format!("{}の写真", restaurant.name))
            }
            _ => (PLACEHOLDER_IMAGE.to_owned(), NO_PHOTO_ALT.to_owned()),
        };

        let (walking_time, distance_badge) = match &hit.distance {
            Some(distance) => (
                distance.time_display.clone(),
                Some(distance.distance_display.clone()),
            ),
            None => (NO_DISTANCE_ACCESS_NOTE.to_owned(), None),
        };

        Self {
            name: restaurant.name.clone(),
            genre: restaurant.genre.clone(),
            address: restaurant.address.clone(),
            budget: restaurant.budget_display.clone(),
            hours,
            catchphrase,
            photo_url,
            photo_alt,
            walking_time,
            distance_badge,
            map_url: restaurant.map_url.clone(),
            hotpepper_url: restaurant.hotpepper_url.clone(),
        }
    }
}
