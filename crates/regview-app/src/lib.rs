pub mod app;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod link;
mod view;

pub use app::App;
pub use config::ViewerConfig;
pub use dispatch::{DispatchStats, Dispatcher};
pub use link::{Link, LinkEvent, LinkState};

#[cfg(test)]
mod dispatch_test;
