pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::generator::{encode_icon, render_icon, IconGenerator};
pub use domain::model::{IconSpec, FILL};
pub use utils::error::{IconError, Result};
