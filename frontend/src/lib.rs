pub mod api;

mod app;
pub use app::App;

mod controls;
pub use controls::{ActionButton, Card};

pub mod rankings;
pub use rankings::RankingSection;
