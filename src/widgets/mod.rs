//! Reusable widget components.

pub mod detail;
pub mod menu;

pub use detail::DetailPanel;
pub use menu::ActionMenu;
