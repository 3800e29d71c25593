//! Mood Diary contract access
//!
//! Typed binding plus the two call paths the app uses: a read-only getter
//! and a signer-bound setter that waits for one confirmation.

pub mod binding;
pub mod error;
pub mod reader;
pub mod writer;

pub use binding::{ensure_configured, parse_address, MoodDiary};
pub use error::{ContractError, ContractResult};
pub use reader::read_mood;
pub use writer::{write_mood, MinedMood};
