pub mod code_table;
pub mod encoder;
pub mod engine;
pub mod export;
pub mod pipeline;
pub mod timing;

pub use crate::domain::model::{Element, FlashPlan, Pulse};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
