use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnKind {
    Income,
    Expense,
}

impl TxnKind {
    /// Capitalized label used for transaction rows on the wire and in output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Lowercase key used by the category endpoints.
    pub const fn category_key(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: TxnKind,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub kind: Option<TxnKind>,
    pub category: Option<String>,
}

/// Category names defined on the sheet, keyed by scope.
#[derive(Debug, Clone, Default)]
pub struct CategorySets {
    pub income: Vec<String>,
    pub expense: Vec<String>,
}

impl CategorySets {
    /// Scope lookup for a category name. Income wins when a name somehow
    /// appears in both sets, matching how the entry form resolved it.
    pub fn kind_of(&self, category: &str) -> Option<TxnKind> {
        if self.income.iter().any(|name| name == category) {
            return Some(TxnKind::Income);
        }
        if self.expense.iter().any(|name| name == category) {
            return Some(TxnKind::Expense);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{CategorySets, TxnKind};

    #[test]
    fn kind_parse_accepts_case_insensitive_labels() {
        assert_eq!(TxnKind::parse("Income"), Some(TxnKind::Income));
        assert_eq!(TxnKind::parse("EXPENSE"), Some(TxnKind::Expense));
        assert_eq!(TxnKind::parse("savings"), None);
    }

    #[test]
    fn category_lookup_prefers_income_scope() {
        let sets = CategorySets {
            income: vec!["Salary".to_string(), "Both".to_string()],
            expense: vec!["Food".to_string(), "Both".to_string()],
        };
        assert_eq!(sets.kind_of("Salary"), Some(TxnKind::Income));
        assert_eq!(sets.kind_of("Food"), Some(TxnKind::Expense));
        assert_eq!(sets.kind_of("Both"), Some(TxnKind::Income));
        assert_eq!(sets.kind_of("Rent"), None);
    }
}
