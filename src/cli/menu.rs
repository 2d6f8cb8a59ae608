use std::io::{self, BufRead, ErrorKind, Write};

use chrono::{Local, NaiveDate};

use super::render::{
    render_confirmation, render_summary, render_transactions, BANNER, GOODBYE, INVALID_CHOICE,
    MENU,
};
use crate::domain::{
    parse_cents, resolve_date, validate_amount, validate_description, Cents, Ledger,
    ParseCentsError, TransactionKind, ValidationError,
};

const AMOUNT_TOO_LARGE: &str = "Amount is too large. Please try again.";

/// One of the five menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddIncome,
    AddExpense,
    ViewTransactions,
    CalculateBalance,
    Exit,
}

impl Choice {
    /// Only the exact digits 1-5 are accepted (surrounding whitespace is ignored).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::AddIncome),
            "2" => Some(Choice::AddExpense),
            "3" => Some(Choice::ViewTransactions),
            "4" => Some(Choice::CalculateBalance),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Interactive read-evaluate-print loop over a [`Ledger`].
///
/// Owns all terminal I/O: the ledger only ever sees validated values, and
/// every invalid field is asked for again right where it was entered.
pub struct MenuLoop<R, W> {
    input: R,
    output: W,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl<R: BufRead, W: Write> MenuLoop<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Pin "today" to a fixed date instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Box::new(move || today);
        self
    }

    /// Run until the user picks Exit or the input is closed.
    pub fn run(&mut self, ledger: &mut Ledger) -> io::Result<()> {
        match self.run_session(ledger) {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                tracing::info!("Input closed, ending session");
                Ok(())
            }
            result => result,
        }
    }

    fn run_session(&mut self, ledger: &mut Ledger) -> io::Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            write!(self.output, "{}", MENU)?;
            let line = self.prompt("Enter your choice (1-5): ")?;

            match Choice::parse(&line) {
                Some(Choice::AddIncome) => {
                    self.add_transaction(ledger, TransactionKind::Income)?
                }
                Some(Choice::AddExpense) => {
                    self.add_transaction(ledger, TransactionKind::Expense)?
                }
                Some(Choice::ViewTransactions) => {
                    let listing = ledger.list();
                    write!(self.output, "{}", render_transactions(listing.as_deref()))?
                }
                Some(Choice::CalculateBalance) => {
                    write!(self.output, "{}", render_summary(&ledger.summarize()))?
                }
                Some(Choice::Exit) => {
                    writeln!(self.output, "{}", GOODBYE)?;
                    tracing::info!(transactions = ledger.len(), "Exit requested");
                    return Ok(());
                }
                None => {
                    tracing::debug!(input = %line, "Rejected menu choice");
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                }
            }
        }
    }

    fn add_transaction(&mut self, ledger: &mut Ledger, kind: TransactionKind) -> io::Result<()> {
        writeln!(self.output, "\n--- Add {} ---", kind.label())?;

        loop {
            let amount_cents = self.read_amount()?;
            let description = self.read_description()?;
            let today = (self.today)();
            let date = self.read_date(today)?;

            let recorded =
                ledger.record_on(kind, amount_cents, &description, Some(date.as_str()), today);
            match recorded {
                Ok(transaction) => {
                    write!(self.output, "{}", render_confirmation(transaction))?;
                    return Ok(());
                }
                Err(e) => {
                    // Ledger-wide limits the field prompts cannot see; start over from the amount
                    tracing::warn!(error = %e, "Ledger rejected prompted values");
                    writeln!(self.output, "An error occurred: {}", e)?;
                }
            }
        }
    }

    fn read_amount(&mut self) -> io::Result<Cents> {
        loop {
            let input = self.prompt("Enter amount: ")?;
            let message = match parse_cents(&input) {
                Ok(cents) => match validate_amount(cents) {
                    Ok(cents) => return Ok(cents),
                    Err(ValidationError::AmountTooLarge(_)) => AMOUNT_TOO_LARGE,
                    Err(_) => "Amount must be positive. Please try again.",
                },
                Err(ParseCentsError::OutOfRange) => AMOUNT_TOO_LARGE,
                Err(ParseCentsError::InvalidFormat) => {
                    "Invalid input for amount. Please enter a number."
                }
            };
            tracing::debug!(input = %input, "Rejected amount");
            writeln!(self.output, "{}", message)?;
        }
    }

    fn read_description(&mut self) -> io::Result<String> {
        loop {
            let input = self.prompt("Enter description (e.g., Groceries, Salary): ")?;
            match validate_description(&input) {
                Ok(description) => return Ok(description),
                Err(_) => {
                    tracing::debug!("Rejected empty description");
                    writeln!(self.output, "Description cannot be empty. Please try again.")?;
                }
            }
        }
    }

    /// Returns the trimmed input, which is blank when the user accepted today.
    fn read_date(&mut self, today: NaiveDate) -> io::Result<String> {
        let prompt = format!(
            "Enter date (YYYY-MM-DD, press Enter for today: {}): ",
            today
        );
        loop {
            let input = self.prompt(&prompt)?;
            let input = input.trim();
            match resolve_date(Some(input), today) {
                Ok(_) => return Ok(input.to_string()),
                Err(_) => {
                    tracing::debug!(input = %input, "Rejected date");
                    writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD.")?;
                }
            }
        }
    }

    /// Print `message` and read one line without its line terminator.
    /// A closed input surfaces as `ErrorKind::UnexpectedEof`.
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
