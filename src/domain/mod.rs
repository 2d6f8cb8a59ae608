mod ledger;
mod money;
mod transaction;
mod validation;

pub use ledger::*;
pub use money::*;
pub use transaction::*;
pub use validation::*;
