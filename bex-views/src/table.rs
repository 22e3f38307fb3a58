use bex_core::ExpenditureRecord;
use bex_utils::format::currency;
use serde::Serialize;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Column {
    Department,
    Branch,
    Program,
    FundType,
    BudgetYear,
    Budget,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Department,
        Column::Branch,
        Column::Program,
        Column::FundType,
        Column::BudgetYear,
        Column::Budget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Department => "Department",
            Column::Branch => "Branch",
            Column::Program => "Program",
            Column::FundType => "Fund Type",
            Column::BudgetYear => "Budget Year",
            Column::Budget => "Budget",
        }
    }

    pub fn format(&self, record: &ExpenditureRecord) -> String {
        match self {
            Column::Department => record.department.clone(),
            Column::Branch => record.branch.clone(),
            Column::Program => record.program.clone(),
            Column::FundType => record.fund_type.clone(),
            Column::BudgetYear => record.budget_year.clone(),
            Column::Budget => currency(record.budget),
        }
    }
}

/// Project a record through every column.
pub fn project(record: &ExpenditureRecord) -> Vec<String> {
    Column::ALL.iter().map(|c| c.format(record)).collect()
}

/// One page of the data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Zero-based page index, clamped to the last page
    pub page: usize,
    pub page_count: usize,
    /// 1-based index of the first row shown (0 when empty)
    pub begin: usize,
    /// 1-based index of the last row shown
    pub end: usize,
    pub total: usize,
}

impl TablePage {
    pub fn build(records: &[ExpenditureRecord], page: usize) -> Self {
        let total = records.len();
        let page_count = total.div_ceil(PAGE_SIZE).max(1);
        let page = page.min(page_count - 1);
        let start = page * PAGE_SIZE;
        let stop = (start + PAGE_SIZE).min(total);
        let rows = records[start.min(total)..stop].iter().map(project).collect();
        Self {
            columns: Column::ALL.iter().map(|c| c.label()).collect(),
            rows,
            page,
            page_count,
            begin: if total == 0 { 0 } else { start + 1 },
            end: stop,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<ExpenditureRecord> {
        (0..n)
            .map(|i| ExpenditureRecord::new("Police", "Field Operations", "Patrol", "General Fund", "2018", i as f64 * 1000.0))
            .collect()
    }

    #[test]
    fn test_project_formats_budget() {
        let row = project(&ExpenditureRecord::new("Fire", "Emergency Response", "Suppression", "General Fund", "2017", 1250000.0));
        assert_eq!(
            row,
            vec!["Fire", "Emergency Response", "Suppression", "General Fund", "2017", "$1,250,000"]
        );
    }

    #[test]
    fn test_pagination() {
        let all = records(23);
        let first = TablePage::build(&all, 0);
        assert_eq!(first.rows.len(), 10);
        assert_eq!((first.begin, first.end, first.page_count), (1, 10, 3));
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = TablePage::build(&all, 2);
        assert_eq!(last.rows.len(), 3);
        assert_eq!((last.begin, last.end), (21, 23));
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        let page = TablePage::build(&records(5), 9);
        assert_eq!(page.page, 0);
        assert_eq!(page.rows.len(), 5);
    }

    #[test]
    fn test_empty_table() {
        let page = TablePage::build(&[], 0);
        assert!(page.rows.is_empty());
        assert_eq!((page.begin, page.end, page.page_count), (0, 0, 1));
        assert_eq!(page.columns.len(), 6);
    }
}
