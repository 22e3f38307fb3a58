//! Reusable Dioxus RSX components for the Budget Explorer.

mod accordion;
mod axis_menu;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod record_counter;
mod sidebar;
mod sum_readout;
mod table_pager;

pub use accordion::Accordion;
pub use axis_menu::AxisMenu;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use record_counter::RecordCounter;
pub use sidebar::{Sidebar, SidebarToggle};
pub use sum_readout::SumReadout;
pub use table_pager::TablePager;
