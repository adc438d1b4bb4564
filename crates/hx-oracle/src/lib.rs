//! The divination engine for Hexivium.
//!
//! Provides the three-coin toss, the [`Reading`] state machine that turns six
//! tosses into an inner and an outer hexagram, changing-line annotations
//! joined against the dataset, and the text handed to an external
//! [`Interpreter`] for a narrative reading.

pub mod coin;
pub mod error;
pub mod interpret;
pub mod interpreter;
pub mod query;
pub mod reading;

pub use coin::{CoinFace, CoinToss, toss_coins, toss_line};
pub use error::{OracleError, OracleResult};
pub use interpret::{ChangingLine, ChangingLinesInfo, HexagramInfo, interpret_changing_lines};
pub use interpreter::{CommandInterpreter, InterpretError, Interpreter};
pub use query::{compose_prompt, format_query};
pub use reading::{Phase, Reading, TossOutcome};
