pub mod banner;
pub mod card;
pub mod controller;
pub mod messages;
pub mod options;
pub mod view;

pub use banner::ErrorBanner;
pub use card::RestaurantCard;
pub use controller::{ControllerError, ControllerSettings, SearchController, SearchForm};
pub use options::OptionList;
pub use view::ResultView;
