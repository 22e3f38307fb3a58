use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single line item of the expenditure dataset.
///
/// Every categorical field is kept as a string, including `budget_year`,
/// which the source files store as a JSON number. Missing fields decode to
/// an empty string (or a zero budget) instead of rejecting the whole file.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ExpenditureRecord {
    #[serde(default, deserialize_with = "category")]
    pub department: String,
    #[serde(default, deserialize_with = "category")]
    pub branch: String,
    #[serde(default, deserialize_with = "category")]
    pub program: String,
    #[serde(default, deserialize_with = "category")]
    pub fund_type: String,
    #[serde(default, deserialize_with = "category")]
    pub budget_year: String,
    /// Budgeted amount in dollars
    #[serde(default, deserialize_with = "amount")]
    pub budget: f64,
}

impl ExpenditureRecord {
    pub fn new(
        department: &str,
        branch: &str,
        program: &str,
        fund_type: &str,
        budget_year: &str,
        budget: f64,
    ) -> Self {
        Self {
            department: department.to_string(),
            branch: branch.to_string(),
            program: program.to_string(),
            fund_type: fund_type.to_string(),
            budget_year: budget_year.to_string(),
            budget,
        }
    }
}

fn category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        // "$1,250.00" style strings show up in hand-edited exports
        Value::String(s) => s.trim().trim_start_matches('$').replace(',', "").parse().ok(),
        Value::Null => Some(0.0),
        _ => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        log::warn!("[BEX] record: non-numeric budget {}, using 0", value);
        0.0
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "department": "Police",
            "branch": "Field Operations",
            "program": "Patrol",
            "fund_type": "General Fund",
            "budget_year": 2018,
            "budget": 1250000
        }"#;
        let record: ExpenditureRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record,
            ExpenditureRecord::new("Police", "Field Operations", "Patrol", "General Fund", "2018", 1_250_000.0)
        );
    }

    #[test]
    fn test_budget_year_accepts_string() {
        let record: ExpenditureRecord =
            serde_json::from_str(r#"{"budget_year": "2017-18", "budget": 5}"#).unwrap();
        assert_eq!(record.budget_year, "2017-18");
        assert_eq!(record.budget, 5.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let record: ExpenditureRecord = serde_json::from_str(r#"{"department": "A"}"#).unwrap();
        assert_eq!(record.department, "A");
        assert_eq!(record.branch, "");
        assert_eq!(record.budget, 0.0);
    }

    #[test]
    fn test_budget_currency_string() {
        let record: ExpenditureRecord =
            serde_json::from_str(r#"{"budget": "$1,250.50"}"#).unwrap();
        assert_eq!(record.budget, 1250.5);

        let record: ExpenditureRecord = serde_json::from_str(r#"{"budget": "n/a"}"#).unwrap();
        assert_eq!(record.budget, 0.0);
    }
}
