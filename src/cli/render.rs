//! Terminal text for the menu loop. Everything here is pure so the exact
//! output can be asserted on without a terminal.

use crate::domain::{format_cents, Cents, Summary, Transaction, DATE_FORMAT};

const CURRENCY_SYMBOL: &str = "$";
const HISTORY_RULE_WIDTH: usize = 60;
const SUMMARY_RULE_WIDTH: usize = 30;

pub const BANNER: &str = "--- Personal Finance Manager ---";

pub const MENU: &str = "\nSelect an option:\n1. Add Income ➕\n2. Add Expense ➖\n3. View All Transactions \n4. Calculate Balance \n5. Exit \n";

pub const INVALID_CHOICE: &str = "\n Invalid choice. Please enter a number between 1 and 5.";
pub const GOODBYE: &str = "\n Thank you for using the Finance Manager. Goodbye!";

/// Amount prefixed with the currency symbol: 1234 -> "$12.34", -500 -> "$-5.00"
pub fn format_money(cents: Cents) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_cents(cents))
}

pub fn render_confirmation(transaction: &Transaction) -> String {
    format!(
        "\n {} of {} added successfully.\n",
        transaction.kind.label(),
        format_money(transaction.amount_cents)
    )
}

/// Transaction history table, or the empty-state notice when `None`.
pub fn render_transactions(transactions: Option<&[&Transaction]>) -> String {
    let Some(transactions) = transactions else {
        return "\n--- No transactions recorded yet. ---\n".to_string();
    };

    let rule = "-".repeat(HISTORY_RULE_WIDTH);
    let mut out = String::from("\n--- Transaction History ---\n");
    out.push_str(&format!(
        "{:<10} {:<8} {:<10} {:<30}\n",
        "Date", "Type", "Amount", "Description"
    ));
    out.push_str(&rule);
    out.push('\n');

    for transaction in transactions {
        let amount = format!(
            "{}{}",
            transaction.kind.sign(),
            format_cents(transaction.amount_cents)
        );
        out.push_str(&format!(
            "{:<10} {:<8} {:<10} {:<30}\n",
            transaction.date.format(DATE_FORMAT).to_string(),
            transaction.kind.label(),
            amount,
            transaction.description
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "\n--- Financial Summary ---\n Total Income: {}\n Total Expenses: {}\n **Current Balance: {}**\n{}\n",
        format_money(summary.total_income),
        format_money(summary.total_expense),
        format_money(summary.balance),
        "-".repeat(SUMMARY_RULE_WIDTH)
    )
}
