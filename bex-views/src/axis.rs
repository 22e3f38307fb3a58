use bex_core::ExpenditureRecord;
use bex_filter::Key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four category axes the dashboard filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Department,
    BudgetYear,
    FundType,
    BranchProgram,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Department,
        Axis::BudgetYear,
        Axis::FundType,
        Axis::BranchProgram,
    ];

    /// Dimension name registered with the cross-filter index.
    pub fn dimension_name(&self) -> &'static str {
        match self {
            Axis::Department => "department",
            Axis::BudgetYear => "budget_year",
            Axis::FundType => "fund_type",
            Axis::BranchProgram => "branch_program",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::Department => "Departments",
            Axis::BudgetYear => "Budget Years",
            Axis::FundType => "Fund Types",
            Axis::BranchProgram => "Branches & Programs",
        }
    }

    /// Project a record onto this axis.
    pub fn key_of(&self, record: &ExpenditureRecord) -> Key {
        match self {
            Axis::Department => Key::single(record.department.as_str()),
            Axis::BudgetYear => Key::single(record.budget_year.as_str()),
            Axis::FundType => Key::single(record.fund_type.as_str()),
            Axis::BranchProgram => Key::pair(record.branch.as_str(), record.program.as_str()),
        }
    }

    /// Parse a user-supplied key. Branch/program pairs are written `branch/program`.
    pub fn parse_key(&self, text: &str) -> anyhow::Result<Key> {
        match self {
            Axis::BranchProgram => match text.split_once('/') {
                Some((branch, program)) => Ok(Key::pair(branch.trim(), program.trim())),
                None => anyhow::bail!("expected branch/program, got '{}'", text),
            },
            _ => Ok(Key::single(text.trim())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Department => "department",
            Axis::BudgetYear => "year",
            Axis::FundType => "fund-type",
            Axis::BranchProgram => "branch-program",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Axis {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "department" | "departments" => Ok(Axis::Department),
            "year" | "budget-year" | "budget_year" => Ok(Axis::BudgetYear),
            "fund-type" | "fund_type" | "fund" => Ok(Axis::FundType),
            "branch-program" | "branch_program" | "program" => Ok(Axis::BranchProgram),
            other => anyhow::bail!("unknown axis '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_round_trips_through_display() {
        for axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>().unwrap(), axis);
        }
        assert!("colour".parse::<Axis>().is_err());
    }

    #[test]
    fn test_key_of_branch_program() {
        let record = ExpenditureRecord::new("Police", "Field Operations", "Patrol", "General Fund", "2018", 1.0);
        assert_eq!(
            Axis::BranchProgram.key_of(&record),
            Key::pair("Field Operations", "Patrol")
        );
        assert_eq!(Axis::BudgetYear.key_of(&record), Key::single("2018"));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(
            Axis::BranchProgram.parse_key("Utilities / Stormwater").unwrap(),
            Key::pair("Utilities", "Stormwater")
        );
        assert!(Axis::BranchProgram.parse_key("Utilities").is_err());
        assert_eq!(Axis::FundType.parse_key("General Fund").unwrap(), Key::single("General Fund"));
    }
}
