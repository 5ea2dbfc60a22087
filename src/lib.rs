//! discover-tui library exports.

pub mod api_client;
pub mod config;
pub mod error;
pub mod events;
pub mod fetch;
pub mod keys;
pub mod nav;
pub mod notifications;
pub mod rowkey;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;
pub mod widgets;
