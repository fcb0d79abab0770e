//! Presentation seam between the controller and whatever renders it.

use lunchr_api::LocationMode;
use lunchr_geo::PlaceLabel;

use crate::card::RestaurantCard;

/// What the controller needs from a frontend.
///
/// Implementations render state changes; they never decide copy or
/// fallbacks — that happens in [`crate::messages`] and [`crate::card`]
/// before the view is called.
pub trait ResultView {
    /// Busy indicator; also disables the search trigger while `true`.
    fn set_busy(&mut self, busy: bool);

    /// Reveals the result panel with a fully-resolved card.
    fn show_result(&mut self, card: &RestaurantCard);

    /// Hides the previous result before a new search.
    fn clear_result(&mut self);

    /// Shows the error banner (possibly multi-line).
    fn show_error(&mut self, message: &str);

    /// Hides the error banner.
    fn clear_error(&mut self);

    /// The active location mode changed; toggle the input groups.
    fn mode_changed(&mut self, mode: LocationMode);

    /// GPS status line (fetching / success with accuracy / failure).
    fn location_status(&mut self, status: &str);

    /// A reverse-geocoded place label is available for display.
    fn place_resolved(&mut self, label: &PlaceLabel);
}
