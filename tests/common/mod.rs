// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use finance_manager::cli::MenuLoop;
use finance_manager::domain::{Ledger, TransactionKind};

/// Fixed "today" used wherever a test needs a deterministic clock
pub fn today() -> NaiveDate {
    parse_date("2024-03-15")
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: ledger pre-filled with a month of activity
pub struct StandardLedger;

impl StandardLedger {
    /// Salary, rent and two grocery runs in January 2024
    pub fn january() -> Ledger {
        let mut ledger = Ledger::new();
        for (kind, amount, description, date) in [
            (TransactionKind::Income, 300000, "Salary", "2024-01-01"),
            (TransactionKind::Expense, 120000, "Rent", "2024-01-02"),
            (TransactionKind::Expense, 8540, "Groceries", "2024-01-10"),
            (TransactionKind::Expense, 4210, "Groceries", "2024-01-24"),
        ] {
            ledger
                .record_on(kind, amount, description, Some(date), today())
                .unwrap();
        }
        ledger
    }
}

/// Drive a full menu session with `input` typed line by line.
/// Returns everything written to the terminal.
pub fn run_session(ledger: &mut Ledger, input: &str) -> String {
    let mut output = Vec::new();
    MenuLoop::new(input.as_bytes(), &mut output)
        .with_today(today())
        .run(ledger)
        .unwrap();
    String::from_utf8(output).unwrap()
}
