//! # Cash Register
//!
//! Computes the change owed for `owed,paid` input lines and renders the
//! physical denominations to hand back.
//!
//! ## Design Principles
//!
//! - **Integer arithmetic**: Amounts are parsed straight into cents
//! - **Exact change**: Every breakdown sums to the change due
//! - **Explicit configuration**: Denomination table and random divisor are
//!   passed into every call, never read from globals
//! - **Injectable randomness**: Random-mode change draws from a caller-supplied `Rng`
//!
//! ## Example
//!
//! ```no_run
//! use cash_register::{ChangeProcessor, RegisterConfig};
//!
//! let config = RegisterConfig::default();
//! let mut processor = ChangeProcessor::new(config.denominations.clone(), config.options());
//! let output = processor.process("2.12,3.00\n1.97,2.00").unwrap();
//! println!("{}", output.output_text);
//! ```

pub mod breakdown;
pub mod config;
pub mod conversion;
pub mod denomination;
pub mod error;
pub mod formatter;
pub mod money;
pub mod processor;
pub mod transaction;

pub use breakdown::{compute_breakdown, is_random_case, minimum_change, random_change, ChangeBreakdown};
pub use config::RegisterConfig;
pub use conversion::{convert_amount, convert_input};
pub use denomination::{Denomination, DenominationTable};
pub use error::{ChangeError, ParseAmountError, Result};
pub use formatter::{format_breakdown, NO_CHANGE};
pub use money::{parse_amount, MinorAmount};
pub use processor::{
    process_input, ChangeProcessor, LineResult, ProcessOptions, ProcessOutput,
    DEFAULT_RANDOM_DIVISOR,
};
pub use transaction::{parse_line, TransactionLine};
