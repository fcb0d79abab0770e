//! Terminal rendering of controller state.

use lunchr_api::LocationMode;
use lunchr_app::card::PLACEHOLDER_IMAGE;
use lunchr_app::{ResultView, RestaurantCard};
use lunchr_geo::PlaceLabel;

#[derive(Debug, Default)]
pub struct TerminalView;

impl ResultView for TerminalView {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            println!("検索中...");
        }
    }

    fn show_result(&mut self, card: &RestaurantCard) {
        println!();
        println!("🍽  {}", card.name);
        println!("    ジャンル: {}", card.genre);
        println!("    住所:     {}", card.address);
        println!("    予算:     {}", card.budget);
        println!("    営業時間: {}", card.hours);
        if !card.catchphrase.is_empty() {
            println!("    「{}」", card.catchphrase);
        }
        match &card.distance_badge {
            Some(badge) => println!("    {} ({badge})", card.walking_time),
            None => println!("    {}", card.walking_time),
        }
        // The placeholder graphic is a data URI; not worth a terminal line.
        if card.photo_url != PLACEHOLDER_IMAGE {
            println!("    写真:     {}", card.photo_url);
        }
        println!("    地図:     {}", card.map_url);
        println!("    詳細:     {}", card.hotpepper_url);
    }

    fn clear_result(&mut self) {}

    fn show_error(&mut self, message: &str) {
        for line in message.lines() {
            eprintln!("⚠ {line}");
        }
    }

    fn clear_error(&mut self) {}

    fn mode_changed(&mut self, mode: LocationMode) {
        match mode {
            LocationMode::Current => println!("現在地モードで検索します"),
            LocationMode::Area => println!("エリアモードで検索します"),
        }
    }

    fn location_status(&mut self, status: &str) {
        println!("{status}");
    }

    fn place_resolved(&mut self, label: &PlaceLabel) {
        if label.region.is_empty() {
            println!("📍 {}", label.city);
        } else {
            println!("📍 {}（{}）", label.city, label.region);
        }
    }
}
