use chrono::NaiveDate;

use super::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money coming in (salary, refunds, gifts)
    Income,
    /// Money going out (groceries, rent, bills)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Capitalized name used in terminal output ("Income", "Expense").
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// Sign applied to the amount when it is displayed or aggregated.
    pub fn sign(&self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense.
/// Transactions are immutable once recorded; the ledger has no edit or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// 1-based position in the ledger's insertion order
    pub sequence: u64,
    pub kind: TransactionKind,
    /// Amount in cents (always positive, the sign comes from `kind`)
    pub amount_cents: Cents,
    /// Trimmed, never empty
    pub description: String,
    /// When the transaction happened, rendered as YYYY-MM-DD
    pub date: NaiveDate,
}

impl Transaction {
    /// Amount with the kind's sign applied: positive for income, negative for expense.
    pub fn signed_amount(&self) -> Cents {
        match self.kind {
            TransactionKind::Income => self.amount_cents,
            TransactionKind::Expense => -self.amount_cents,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
