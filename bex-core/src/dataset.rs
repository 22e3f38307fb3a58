use crate::payload;
use crate::record::ExpenditureRecord;
use std::collections::HashSet;

/// Embedded sample expenditure dataset, used by tests and as a CLI fallback.
pub static SAMPLE_EXPENDITURES_JSON: &str = include_str!("../../fixtures/expenditures.json");

/// The full ordered collection of expenditure records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ExpenditureRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ExpenditureRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let records: Vec<ExpenditureRecord> = serde_json::from_str(json)?;
        log::info!("[BEX] dataset: parsed {} records", records.len());
        Ok(Self { records })
    }

    /// Parse a raw payload that may be gzip-compressed JSON.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let decoded = payload::decode(bytes)?;
        let records: Vec<ExpenditureRecord> = serde_json::from_slice(&decoded)?;
        log::info!("[BEX] dataset: parsed {} records", records.len());
        Ok(Self { records })
    }

    /// The bundled sample dataset.
    pub fn sample() -> anyhow::Result<Self> {
        Self::from_json(SAMPLE_EXPENDITURES_JSON)
    }

    pub fn records(&self) -> &[ExpenditureRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ExpenditureRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `budget` over every record.
    pub fn total_budget(&self) -> f64 {
        self.records.iter().map(|r| r.budget).sum()
    }

    /// Distinct values of a field in first-seen order.
    pub fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&ExpenditureRecord) -> &str,
    {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| field(r))
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Dataset {
        Dataset::new(vec![
            ExpenditureRecord::new("B", "b1", "p1", "General Fund", "2017", 10.0),
            ExpenditureRecord::new("A", "b2", "p1", "General Fund", "2018", 20.0),
            ExpenditureRecord::new("B", "b1", "p2", "Enterprise Fund", "2018", 30.0),
        ])
    }

    #[test]
    fn test_sample_dataset_parses() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.len(), 42);
        assert!(dataset.records().iter().all(|r| !r.department.is_empty()));
    }

    #[test]
    fn test_distinct_keeps_first_seen_order() {
        let dataset = tiny();
        assert_eq!(dataset.distinct(|r| &r.department), vec!["B", "A"]);
        assert_eq!(dataset.distinct(|r| &r.program), vec!["p1", "p2"]);
    }

    #[test]
    fn test_total_budget() {
        assert_eq!(tiny().total_budget(), 60.0);
        assert_eq!(Dataset::default().total_budget(), 0.0);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Dataset::from_json(r#"{"department": "A"}"#).is_err());
    }

    #[test]
    fn test_empty_array() {
        let dataset = Dataset::from_bytes(b"[]").unwrap();
        assert!(dataset.is_empty());
    }
}
