pub mod logging;
pub mod scroll_watcher;
pub mod viewport;
