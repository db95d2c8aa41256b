//! Build Adaptive Card documents as ordered attribute trees and render them
//! as JSON.
//!
//! ```
//! use cardforge::{adaptive_card, catalog::elements::text_block};
//!
//! let card = adaptive_card()
//!     .arg("body", vec![text_block("hello").build()?])
//!     .build()?;
//! assert!(card.to_wire_json()?.starts_with(r#"{"type":"AdaptiveCard""#));
//! # Ok::<(), cardforge::CardError>(())
//! ```
pub mod card;
pub mod catalog;
pub mod demo;
pub mod emit;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod node;
pub mod path_de;
pub mod render;

pub use card::adaptive_card;
pub use emit::{Builder, Emit, FieldSpec, Kind};
pub use enums::EnumValue;
pub use error::{CardError, Result};
pub use node::{AttrValue, Node};
pub use render::Format;
