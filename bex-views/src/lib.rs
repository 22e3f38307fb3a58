//! Widget bindings and derived chart data for the Budget Explorer.
//!
//! Everything here is plain data computed from the cross-filter index; the
//! browser and CLI front ends only render what these types produce.

pub mod action;
pub mod axis;
pub mod bubble;
pub mod charts;
pub mod color;
pub mod dashboard;
pub mod layout;
pub mod menu;
pub mod readout;
pub mod table;
pub mod widget;

pub use action::FilterAction;
pub use axis::Axis;
pub use color::OrdinalScale;
pub use dashboard::{AxisBinding, Dashboard, REDRAW_SUBSCRIBER, SUM_READOUT_SUBSCRIBER};
pub use menu::SelectMenu;
pub use readout::RecordCounter;
pub use table::TablePage;
pub use widget::{title, WidgetId};
