pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::code_table::CodeTable;
pub use crate::core::encoder::{encode, encode_optional, MessageEncoder};
pub use crate::core::engine::{TransmitEngine, TransmitReport};
pub use crate::core::pipeline::MorsePipeline;
pub use crate::core::timing::{checked_duration, duration, relative_units};
pub use crate::domain::model::{Element, FlashPlan, Pulse};
pub use crate::utils::error::{MorseError, Result};
