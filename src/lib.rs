pub mod config;
pub mod error;
pub mod icon;
pub mod logger;
pub mod models;

pub use config::{IconConfig, PWA_ICON_SIZES};
pub use error::IconError;
pub use icon::{generate_icons, generate_icons_parallel, generate_icons_with};
pub use models::GeneratedIcon;
