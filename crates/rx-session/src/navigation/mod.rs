pub(crate) mod history_navigator;
pub(crate) mod navigation_listener;
pub(crate) mod navigator;

pub use history_navigator::HistoryNavigator;
pub use navigation_listener::NavigationListener;
pub use navigator::{NavigationMode, Navigator};
