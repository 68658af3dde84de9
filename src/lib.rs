//! Builds the figures and tables a monthly report pulls in.

pub mod builder;
pub mod config;
pub mod error;
pub mod figure;
pub mod logging;
pub mod render;
pub mod series;

pub use builder::ReportBuilder;
pub use config::Config;
pub use error::{Error, Result};
pub use figure::Figure;
pub use series::TemperatureSeries;
