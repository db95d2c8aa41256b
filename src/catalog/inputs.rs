//! Input elements. Each takes a required `id` ahead of its own fields.
use super::INPUT_BASE;
use crate::emit::{Builder, FieldSpec, Kind, field};

const TEXT_FIELDS: &[FieldSpec] = &[
    field("id").always(),
    field("multiline").key("isMultiline").true_only(),
    field("max_length").key("maxLength"),
    field("placeholder"),
    field("regex"),
    field("style"),
    field("inline_action").key("inlineAction"),
    field("value"),
];

pub static TEXT: Kind = Kind {
    name: "Input.Text",
    constants: &[("type", "Input.Text")],
    groups: &[INPUT_BASE, TEXT_FIELDS],
    requirements: &[],
};

pub fn text(id: impl Into<String>) -> Builder {
    Builder::new(&TEXT).arg("id", id.into())
}

// Shared by number, date and time inputs; bounds are numbers or ISO strings.
const RANGE_FIELDS: &[FieldSpec] = &[
    field("id").always(),
    field("max"),
    field("min"),
    field("placeholder"),
    field("value"),
];

pub static NUMBER: Kind = Kind {
    name: "Input.Number",
    constants: &[("type", "Input.Number")],
    groups: &[INPUT_BASE, RANGE_FIELDS],
    requirements: &[],
};

pub fn number(id: impl Into<String>) -> Builder {
    Builder::new(&NUMBER).arg("id", id.into())
}

pub static DATE: Kind = Kind {
    name: "Input.Date",
    constants: &[("type", "Input.Date")],
    groups: &[INPUT_BASE, RANGE_FIELDS],
    requirements: &[],
};

pub fn date(id: impl Into<String>) -> Builder {
    Builder::new(&DATE).arg("id", id.into())
}

pub static TIME: Kind = Kind {
    name: "Input.Time",
    constants: &[("type", "Input.Time")],
    groups: &[INPUT_BASE, RANGE_FIELDS],
    requirements: &[],
};

pub fn time(id: impl Into<String>) -> Builder {
    Builder::new(&TIME).arg("id", id.into())
}

const TOGGLE_FIELDS: &[FieldSpec] = &[
    field("title").always(),
    field("id").always(),
    field("value"),
    field("value_off").key("valueOff"),
    field("value_on").key("valueOn"),
    field("wrap").true_only(),
];

pub static TOGGLE: Kind = Kind {
    name: "Input.Toggle",
    constants: &[("type", "Input.Toggle")],
    groups: &[INPUT_BASE, TOGGLE_FIELDS],
    requirements: &[],
};

pub fn toggle(title: impl Into<String>, id: impl Into<String>) -> Builder {
    Builder::new(&TOGGLE).arg("title", title.into()).arg("id", id.into())
}

const CHOICE_FIELDS: &[FieldSpec] = &[field("title").always(), field("value").always()];

pub static CHOICE: Kind = Kind {
    name: "Input.Choice",
    constants: &[],
    groups: &[CHOICE_FIELDS],
    requirements: &[],
};

pub fn choice(title: impl Into<String>, value: impl Into<String>) -> Builder {
    Builder::new(&CHOICE).arg("title", title.into()).arg("value", value.into())
}

const CHOICE_SET_FIELDS: &[FieldSpec] = &[
    field("id").always(),
    field("choices"),
    field("multiselect").key("isMultiSelect").true_only(),
    field("style"),
    field("value"),
    field("placeholder"),
    field("wrap").true_only(),
];

pub static CHOICE_SET: Kind = Kind {
    name: "Input.ChoiceSet",
    constants: &[("type", "Input.ChoiceSet")],
    groups: &[INPUT_BASE, CHOICE_SET_FIELDS],
    requirements: &[],
};

pub fn choice_set(id: impl Into<String>) -> Builder {
    Builder::new(&CHOICE_SET).arg("id", id.into())
}
