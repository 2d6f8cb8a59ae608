use chrono::{Local, NaiveDate};

use super::{
    resolve_date, validate_amount, validate_description, Cents, Transaction, TransactionKind,
    ValidationError,
};

/// Totals over every transaction in the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Cents,
    pub total_expense: Cents,
    /// total_income - total_expense
    pub balance: Cents,
}

/// In-memory, append-only record of transactions for the lifetime of the process.
/// Stored order is always insertion order; sorted views are computed on read.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transaction dated `date`, or today's local date when omitted.
    pub fn record(
        &mut self,
        kind: TransactionKind,
        amount_cents: Cents,
        description: &str,
        date: Option<&str>,
    ) -> Result<&Transaction, ValidationError> {
        self.record_on(kind, amount_cents, description, date, Local::now().date_naive())
    }

    /// Same as [`Ledger::record`] with an explicit date for "today".
    /// Nothing is appended unless every field is valid.
    pub fn record_on(
        &mut self,
        kind: TransactionKind,
        amount_cents: Cents,
        description: &str,
        date: Option<&str>,
        today: NaiveDate,
    ) -> Result<&Transaction, ValidationError> {
        let amount_cents = validate_amount(amount_cents)?;
        let description = validate_description(description)?;
        let date = resolve_date(date, today)?;

        // Per-kind totals must stay representable so summarize() cannot overflow
        let summary = self.summarize();
        let total = match kind {
            TransactionKind::Income => summary.total_income,
            TransactionKind::Expense => summary.total_expense,
        };
        if total.checked_add(amount_cents).is_none() {
            return Err(ValidationError::TotalOutOfRange(kind));
        }

        let transaction = Transaction {
            sequence: self.transactions.len() as u64 + 1,
            kind,
            amount_cents,
            description,
            date,
        };
        tracing::debug!(
            sequence = transaction.sequence,
            kind = %transaction.kind,
            amount_cents = transaction.amount_cents,
            date = %transaction.date,
            "Recorded transaction"
        );

        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// All transactions, most recent date first.
    /// Transactions sharing a date keep their insertion order.
    /// Returns `None` when nothing has been recorded yet.
    pub fn list(&self) -> Option<Vec<&Transaction>> {
        if self.transactions.is_empty() {
            return None;
        }

        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        Some(sorted)
    }

    /// Income and expense totals plus their difference.
    /// `record_on` keeps each total within `Cents`, so none of these sums overflow.
    pub fn summarize(&self) -> Summary {
        let total_income = self
            .transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount_cents)
            .sum();
        let total_expense = self
            .transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount_cents)
            .sum();

        Summary {
            total_income,
            total_expense,
            balance: self.transactions.iter().map(Transaction::signed_amount).sum(),
        }
    }

    /// Transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
