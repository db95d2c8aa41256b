//! Reference cards built entirely through the public constructors.
use crate::card::adaptive_card;
use crate::catalog::containers::{column, column_set, container};
use crate::catalog::elements::{image, text_block};
use crate::enums::{FontSize, FontType, FontWeight, ImageSize};
use crate::error::Result;
use crate::node::Node;

pub const CAT_IMAGE_URL: &str = "https://adaptivecards.io/content/cats/1.png";

/// A heading, a two-column key/value table and a subtle footer.
pub fn readme_card() -> Result<Node> {
    let labels = column()
        .arg("width", "stretch")
        .arg(
            "items",
            vec![
                text_block("author").arg("font_weight", FontWeight::Bolder).arg("wrap", true).build()?,
                text_block("version").arg("font_weight", FontWeight::Bolder).arg("wrap", true).build()?,
            ],
        )
        .build()?;
    let values = column()
        .arg("width", "stretch")
        .arg(
            "items",
            vec![
                text_block("The cardforge authors").arg("wrap", true).build()?,
                text_block("0.1.0")
                    .arg("wrap", true)
                    .arg("font_type", FontType::Monospace)
                    .build()?,
            ],
        )
        .build()?;

    let header = container(vec![
        text_block("Adaptive Cards Example")
            .arg("font_weight", FontWeight::Bolder)
            .arg("font_size", FontSize::Large)
            .arg("wrap", true)
            .build()?,
        column_set().arg("columns", vec![labels, values]).build()?,
    ])
    .build()?;

    let footer = text_block("more information available at [adaptivecards.io](https://adaptivecards.io)")
        .arg("subtle", true)
        .arg("wrap", true)
        .arg("font_size", FontSize::Small)
        .build()?;

    adaptive_card().arg("body", vec![header, footer]).build()
}

/// A container holding a caption and the image it links to.
pub fn image_card() -> Result<Node> {
    let body = container(vec![
        text_block(format!("This image is at: [{CAT_IMAGE_URL}]({CAT_IMAGE_URL})")).build()?,
        image(CAT_IMAGE_URL)
            .arg("alt_text", "Catto")
            .arg("size", ImageSize::Small)
            .build()?,
    ])
    .build()?;

    adaptive_card().arg("body", vec![body]).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_card_wire_form() {
        let card = readme_card().unwrap();
        let expected = concat!(
            r#"{"type":"AdaptiveCard","version":"1.5","$schema":"https://adaptivecards.io/schemas/adaptive-card.json","body":["#,
            r#"{"type":"Container","items":["#,
            r#"{"type":"TextBlock","text":"Adaptive Cards Example","size":"large","weight":"bolder","wrap":true},"#,
            r#"{"type":"ColumnSet","columns":["#,
            r#"{"type":"Column","items":["#,
            r#"{"type":"TextBlock","text":"author","weight":"bolder","wrap":true},"#,
            r#"{"type":"TextBlock","text":"version","weight":"bolder","wrap":true}],"width":"stretch"},"#,
            r#"{"type":"Column","items":["#,
            r#"{"type":"TextBlock","text":"The cardforge authors","wrap":true},"#,
            r#"{"type":"TextBlock","text":"0.1.0","fontType":"monospace","wrap":true}],"width":"stretch"}]}]},"#,
            r#"{"type":"TextBlock","text":"more information available at [adaptivecards.io](https://adaptivecards.io)","isSubtle":true,"size":"small","wrap":true}]}"#,
        );
        assert_eq!(card.to_wire_json().unwrap(), expected);
    }

    #[test]
    fn image_card_keeps_alt_text_and_size() {
        let card = image_card().unwrap();
        let body = card.get("body").unwrap().as_nodes().unwrap();
        let items = body[0].get("items").unwrap().as_nodes().unwrap();
        assert_eq!(
            items[1].to_wire_json().unwrap(),
            r#"{"type":"Image","url":"https://adaptivecards.io/content/cats/1.png","altText":"Catto","size":"small"}"#
        );
    }
}
