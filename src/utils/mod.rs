mod config;
mod format_int;
mod ticker;

pub use config::Config;
pub use format_int::with_delimiters;
pub use ticker::Ticker;
