use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TotalsData {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TxnListData {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_taken_at: Option<String>,
    pub snapshot_written: bool,
    pub currency_symbol: String,
    pub applied: AppliedFilters,
    pub all_time: TotalsData,
    pub filtered: TotalsData,
    pub rows: Vec<TransactionRow>,
    pub rows_skipped: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthOption {
    pub month: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptionsData {
    pub source: String,
    pub years: Vec<i32>,
    pub months: Vec<MonthOption>,
    pub categories: Vec<String>,
    pub rows_skipped: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TxnAddData {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: f64,
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySetsData {
    pub income: Vec<String>,
    pub expense: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryChangeData {
    pub category: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigShowData {
    pub home: String,
    pub config_path: String,
    pub snapshot_path: String,
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSetData {
    pub key: String,
    pub value: String,
    pub config_path: String,
    pub message: String,
}
