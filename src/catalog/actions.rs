//! Actions. All of them share [`ACTION_BASE`]: `mode` is only written when it
//! is not `primary`, `isEnabled` only when it is `false`.
use super::ACTION_BASE;
use crate::emit::{Builder, FieldSpec, Kind, field};
use crate::enums::AssociatedInputs;
use crate::node::AttrValue;

const OPEN_URL_FIELDS: &[FieldSpec] = &[field("url").always()];

pub static OPEN_URL: Kind = Kind {
    name: "Action.OpenUrl",
    constants: &[("type", "Action.OpenUrl")],
    groups: &[ACTION_BASE, OPEN_URL_FIELDS],
    requirements: &[],
};

pub fn open_url(url: impl Into<String>) -> Builder {
    Builder::new(&OPEN_URL).arg("url", url.into())
}

const SUBMIT_FIELDS: &[FieldSpec] = &[
    field("data"),
    field("associated_inputs")
        .key("associatedInputs")
        .unless(AssociatedInputs::Auto.wire()),
];

pub static SUBMIT: Kind = Kind {
    name: "Action.Submit",
    constants: &[("type", "Action.Submit")],
    groups: &[ACTION_BASE, SUBMIT_FIELDS],
    requirements: &[],
};

pub fn submit() -> Builder {
    Builder::new(&SUBMIT)
}

const SHOW_CARD_FIELDS: &[FieldSpec] = &[field("card")];

pub static SHOW_CARD: Kind = Kind {
    name: "Action.ShowCard",
    constants: &[("type", "Action.ShowCard")],
    groups: &[ACTION_BASE, SHOW_CARD_FIELDS],
    requirements: &[],
};

pub fn show_card() -> Builder {
    Builder::new(&SHOW_CARD)
}

// `isVisible` on a target has no default: absent means "toggle".
const TARGET_ELEMENT_FIELDS: &[FieldSpec] = &[
    field("element_id").key("elementId").always(),
    field("visible").key("isVisible"),
];

pub static TARGET_ELEMENT: Kind = Kind {
    name: "TargetElement",
    constants: &[],
    groups: &[TARGET_ELEMENT_FIELDS],
    requirements: &[],
};

pub fn target_element(element_id: impl Into<String>) -> Builder {
    Builder::new(&TARGET_ELEMENT).arg("element_id", element_id.into())
}

const TOGGLE_VISIBILITY_FIELDS: &[FieldSpec] =
    &[field("target_elements").key("targetElements").always()];

pub static TOGGLE_VISIBILITY: Kind = Kind {
    name: "Action.ToggleVisibility",
    constants: &[("type", "Action.ToggleVisibility")],
    groups: &[ACTION_BASE, TOGGLE_VISIBILITY_FIELDS],
    requirements: &[],
};

pub fn toggle_visibility(target_elements: impl Into<AttrValue>) -> Builder {
    Builder::new(&TOGGLE_VISIBILITY).arg("target_elements", target_elements)
}

const EXECUTE_FIELDS: &[FieldSpec] = &[
    field("verb"),
    field("data"),
    field("associated_inputs").key("associatedInputs"),
];

pub static EXECUTE: Kind = Kind {
    name: "Action.Execute",
    constants: &[("type", "Action.Execute")],
    groups: &[ACTION_BASE, EXECUTE_FIELDS],
    requirements: &[],
};

pub fn execute() -> Builder {
    Builder::new(&EXECUTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::adaptive_card;
    use crate::enums::{ActionMode, ActionStyle};
    use crate::node::Node;

    #[test]
    fn primary_mode_and_enabled_flag_are_omitted() {
        let node = open_url("https://example.com")
            .arg("title", "Open")
            .arg("mode", ActionMode::Primary)
            .arg("enabled", true)
            .build()
            .unwrap();
        assert_eq!(
            node.to_wire_json().unwrap(),
            r#"{"type":"Action.OpenUrl","title":"Open","url":"https://example.com"}"#
        );
    }

    #[test]
    fn secondary_mode_and_disabled_flag_are_written() {
        let node = open_url("https://example.com")
            .arg("style", ActionStyle::Destructive)
            .arg("mode", ActionMode::Secondary)
            .arg("enabled", false)
            .build()
            .unwrap();
        assert_eq!(
            node.to_wire_json().unwrap(),
            r#"{"type":"Action.OpenUrl","style":"destructive","isEnabled":false,"mode":"secondary","url":"https://example.com"}"#
        );
    }

    #[test]
    fn submit_skips_auto_associated_inputs() {
        let data = Node::from_mapping([("ticket", 42)]);
        let auto = submit()
            .arg("data", data.clone())
            .arg("associated_inputs", AssociatedInputs::Auto)
            .build()
            .unwrap();
        assert_eq!(auto.to_wire_json().unwrap(), r#"{"type":"Action.Submit","data":{"ticket":42}}"#);

        let none = submit().arg("associated_inputs", AssociatedInputs::None).build().unwrap();
        assert_eq!(none.get("associatedInputs").unwrap().as_str(), Some("none"));
    }

    #[test]
    fn show_card_embeds_a_document() {
        let card = adaptive_card().build().unwrap();
        let node = show_card().arg("title", "More").arg("card", card).build().unwrap();
        let inner = node.get("card").unwrap().as_node().unwrap();
        assert_eq!(inner.get("type").unwrap().as_str(), Some("AdaptiveCard"));
    }

    #[test]
    fn toggle_visibility_lists_targets() {
        let targets = vec![
            target_element("details").build().unwrap(),
            target_element("summary").arg("visible", true).build().unwrap(),
        ];
        let node = toggle_visibility(targets).build().unwrap();
        assert_eq!(
            node.to_wire_json().unwrap(),
            r#"{"type":"Action.ToggleVisibility","targetElements":[{"elementId":"details"},{"elementId":"summary","isVisible":true}]}"#
        );
    }

    #[test]
    fn execute_writes_verb_and_data() {
        let node = execute().arg("verb", "approve").arg("data", "x").build().unwrap();
        assert_eq!(node.keys().collect::<Vec<_>>(), ["type", "verb", "data"]);
    }
}
