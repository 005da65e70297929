pub mod config;
pub mod core;
pub mod navigation;
pub mod preview;

pub use config::{BookConfig, ConfigError};
pub use crate::core::{
    address_form, decompose, has_trailing_consonant, render, AddressForm, Bindings,
};
pub use preview::{BookPreview, PageView};
