//! Wraps a finished card in the flat message shape a chat platform expects.
use crate::node::{AttrValue, Node};

pub const MESSAGE_TYPE: &str = "message";
pub const CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// `{"type":"message","attachments":[{"contentType":…,"contentUrl":null,"content":card}]}`
pub fn wrap(card: Node) -> Node {
    let attachment = Node::from_mapping([
        ("contentType", AttrValue::from(CARD_CONTENT_TYPE)),
        ("contentUrl", AttrValue::Null),
        ("content", AttrValue::from(card)),
    ]);
    Node::from_mapping([
        ("type", AttrValue::from(MESSAGE_TYPE)),
        ("attachments", AttrValue::from(vec![attachment])),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::adaptive_card;

    #[test]
    fn envelope_has_fixed_shape() {
        let message = wrap(adaptive_card().build().unwrap());
        assert_eq!(
            message.to_wire_json().unwrap(),
            concat!(
                r#"{"type":"message","attachments":[{"contentType":"application/vnd.microsoft.card.adaptive","#,
                r#""contentUrl":null,"content":{"type":"AdaptiveCard","version":"1.5","#,
                r#""$schema":"https://adaptivecards.io/schemas/adaptive-card.json"}}]}"#
            )
        );
    }

    #[test]
    fn single_attachment_embeds_the_card_unchanged() {
        let card = adaptive_card().arg("lang", "fr").build().unwrap();
        let message = wrap(card.clone());
        let attachments = message.get("attachments").unwrap().as_nodes().unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].get("content").unwrap().as_node(), Some(&card));
    }
}
