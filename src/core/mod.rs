pub mod generator;

pub use crate::domain::model::{IconSpec, FILL};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
