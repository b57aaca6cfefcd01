mod app;
mod dialogs;
mod draw;
mod icon;
mod menu;

pub use app::App;
pub use icon::window_icon;
use dialogs::Dialogs;
