//! Concrete node kinds, grouped by category.
//!
//! Every kind starts from one of the category bases below and adds its own
//! descriptors. Constructor functions take the required arguments and return
//! a [`Builder`](crate::emit::Builder) for the optional ones.
pub mod actions;
pub mod containers;
pub mod elements;
pub mod inputs;
pub mod types;

use crate::emit::{FieldSpec, field};
use crate::enums::ActionMode;

pub const ELEMENT_BASE: &[FieldSpec] = &[
    field("fallback"),
    field("height"),
    field("separator").true_only(),
    field("spacing"),
    field("visible").key("isVisible").false_only(),
    field("id"),
    field("requires"),
];

pub const ACTION_BASE: &[FieldSpec] = &[
    field("title"),
    field("icon_url").key("iconUrl"),
    field("id"),
    field("style"),
    field("fallback"),
    field("tooltip"),
    field("enabled").key("isEnabled").false_only(),
    field("mode").unless(ActionMode::Primary.wire()),
    field("requires"),
];

pub const INPUT_BASE: &[FieldSpec] = &[
    field("error_message").key("errorMessage"),
    field("required").key("isRequired").true_only(),
    field("label"),
    field("fallback"),
    field("height"),
    field("separator").true_only(),
    field("spacing"),
    field("visible").key("isVisible").false_only(),
    field("requires"),
];

pub const CONTAINER_BASE: &[FieldSpec] = &[
    field("fallback"),
    field("height"),
    field("separator").true_only(),
    field("spacing"),
    field("id"),
    field("visible").key("isVisible").false_only(),
    field("requires"),
];

/// Sets share the container layout fields.
pub const SET_BASE: &[FieldSpec] = CONTAINER_BASE;

/// Fields shared by `selectAction`-capable layout kinds.
pub(crate) const LAYOUT_FIELDS: &[FieldSpec] = &[
    field("select_action").key("selectAction"),
    field("style"),
    field("vertical_content_alignment").key("verticalContentAlignment"),
    field("bleed").true_only(),
    field("background_image").key("backgroundImage"),
    field("min_height").key("minHeight"),
    field("rtl").true_only(),
];
