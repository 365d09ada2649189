use crate::ledger::types::{Transaction, TxnKind};

/// Income and expense sums over one row set. Net is derived, not stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn net(self) -> f64 {
        self.income - self.expense
    }
}

pub fn totals(rows: &[Transaction]) -> Totals {
    let mut result = Totals::default();
    for row in rows {
        match row.kind {
            TxnKind::Income => result.income += row.amount,
            TxnKind::Expense => result.expense += row.amount,
        }
    }
    result
}

/// Currency values are reported at two decimal places everywhere.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
