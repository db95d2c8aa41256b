//! The document root.
//!
//! `type`, `version` and `$schema` are written first on every card and are
//! not parameters. `$schema` is not a plain identifier, so like every other
//! field it goes through the node's keyed assignment.
use crate::emit::{Builder, FieldSpec, Kind, field};

pub const CARD_TYPE: &str = "AdaptiveCard";
pub const SCHEMA_VERSION: &str = "1.5";
pub const SCHEMA_KEY: &str = "$schema";
pub const SCHEMA_URI: &str = "https://adaptivecards.io/schemas/adaptive-card.json";

const CARD_FIELDS: &[FieldSpec] = &[
    field("refresh"),
    field("authentication"),
    field("body"),
    field("actions"),
    field("select_action").key("selectAction"),
    field("fallback_text").key("fallbackText"),
    field("background_image").key("backgroundImage"),
    field("min_height").key("minHeight"),
    field("rtl").true_only(),
    field("speak"),
    field("lang"),
    field("vertical_content_alignment").key("verticalContentAlignment"),
];

pub static ADAPTIVE_CARD: Kind = Kind {
    name: CARD_TYPE,
    constants: &[("type", CARD_TYPE), ("version", SCHEMA_VERSION), (SCHEMA_KEY, SCHEMA_URI)],
    groups: &[CARD_FIELDS],
    requirements: &[],
};

pub fn adaptive_card() -> Builder {
    Builder::new(&ADAPTIVE_CARD)
}
