//! 한글 이름 처리와 템플릿 치환

pub mod inflector;
pub mod template;
pub mod unicode;

pub use inflector::{address_form, decompose, has_trailing_consonant, AddressForm};
pub use template::{render, Bindings};
pub use unicode::{decompose_syllable, SyllableBlock};
