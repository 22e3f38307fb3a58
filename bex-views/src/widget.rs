//! Widget identities and the shared title rule.

use crate::axis::Axis;
use bex_filter::Key;
use bex_utils::format::thousands;
use serde::Serialize;

/// Every chart and select menu on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetId {
    RowChart,
    BarChart,
    BubbleChart,
    Sunburst,
    DataTable,
    DepartmentMenu,
    YearMenu,
    FundTypeMenu,
    BranchProgramMenu,
}

impl WidgetId {
    pub const CHARTS: [WidgetId; 4] = [
        WidgetId::RowChart,
        WidgetId::BarChart,
        WidgetId::BubbleChart,
        WidgetId::Sunburst,
    ];

    pub const MENUS: [WidgetId; 4] = [
        WidgetId::DepartmentMenu,
        WidgetId::YearMenu,
        WidgetId::FundTypeMenu,
        WidgetId::BranchProgramMenu,
    ];

    /// DOM id of the widget's container.
    pub fn container_id(&self) -> &'static str {
        match self {
            WidgetId::RowChart => "row-chart",
            WidgetId::BarChart => "bar-chart",
            WidgetId::BubbleChart => "bubble-chart",
            WidgetId::Sunburst => "sun-burst",
            WidgetId::DataTable => "data-table",
            WidgetId::DepartmentMenu => "sel-departments",
            WidgetId::YearMenu => "sel-years",
            WidgetId::FundTypeMenu => "sel-fund-types",
            WidgetId::BranchProgramMenu => "sel-branch-programs",
        }
    }

    /// The axis this widget filters and displays.
    pub fn axis(&self) -> Axis {
        match self {
            WidgetId::RowChart | WidgetId::DepartmentMenu => Axis::Department,
            WidgetId::BarChart | WidgetId::YearMenu | WidgetId::DataTable => Axis::BudgetYear,
            WidgetId::BubbleChart | WidgetId::FundTypeMenu => Axis::FundType,
            WidgetId::Sunburst | WidgetId::BranchProgramMenu => Axis::BranchProgram,
        }
    }

    pub fn menu_for(axis: Axis) -> WidgetId {
        match axis {
            Axis::Department => WidgetId::DepartmentMenu,
            Axis::BudgetYear => WidgetId::YearMenu,
            Axis::FundType => WidgetId::FundTypeMenu,
            Axis::BranchProgram => WidgetId::BranchProgramMenu,
        }
    }
}

/// Tooltip and option text: `"{key}: ${value}"` with thousands separators.
pub fn title(key: &Key, value: f64) -> String {
    format!("{}: ${}", key, thousands(value))
}
