use crate::contracts::types::{AppliedFilters, TotalsData, TransactionRow};
use crate::ledger::summary::{Totals, round2};
use crate::ledger::types::{ListFilter, Transaction};

pub(crate) fn totals_data(totals: Totals) -> TotalsData {
    TotalsData {
        income: round2(totals.income),
        expense: round2(totals.expense),
        net: round2(totals.net()),
    }
}

pub(crate) fn transaction_row(transaction: &Transaction) -> TransactionRow {
    TransactionRow {
        date: transaction.date.format("%Y-%m-%d").to_string(),
        kind: transaction.kind.label().to_string(),
        category: transaction.category.clone(),
        amount: round2(transaction.amount),
        description: transaction.description.clone(),
    }
}

pub(crate) fn applied_filters(filter: &ListFilter) -> AppliedFilters {
    AppliedFilters {
        year: filter.year,
        month: filter.month,
        kind: filter.kind.map(|kind| kind.label().to_string()),
        category: filter.category.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::totals_data;
    use crate::ledger::summary::Totals;

    #[test]
    fn totals_data_rounds_every_field() {
        let data = totals_data(Totals {
            income: 10.0 / 3.0,
            expense: 1.0 / 3.0,
        });
        assert_eq!(data.income, 3.33);
        assert_eq!(data.expense, 0.33);
        assert_eq!(data.net, 3.0);
    }
}
