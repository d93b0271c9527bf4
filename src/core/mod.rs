pub mod copy;

pub use crate::domain::model::CopyPlan;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
