//! Leaf elements: text, images and media.
use super::ELEMENT_BASE;
use crate::emit::{Builder, FieldSpec, Kind, Requirement, field};
use crate::enums::{BlockElementHeight, TextBlockStyle};
use crate::node::AttrValue;

const TEXT_BLOCK_FIELDS: &[FieldSpec] = &[
    field("text").always(),
    field("color"),
    field("font_type").key("fontType"),
    field("horizontal_alignment").key("horizontalAlignment"),
    field("subtle").key("isSubtle").true_only(),
    field("max_lines").key("maxLines"),
    field("font_size").key("size"),
    field("font_weight").key("weight"),
    field("wrap").true_only(),
    field("style").unless(TextBlockStyle::Default.wire()),
];

pub static TEXT_BLOCK: Kind = Kind {
    name: "TextBlock",
    constants: &[("type", "TextBlock")],
    groups: &[ELEMENT_BASE, TEXT_BLOCK_FIELDS],
    requirements: &[],
};

pub fn text_block(text: impl Into<String>) -> Builder {
    Builder::new(&TEXT_BLOCK).arg("text", text.into())
}

const IMAGE_FIELDS: &[FieldSpec] = &[
    field("url").always(),
    field("alt_text").key("altText"),
    field("background_color").key("backgroundColor"),
    field("height").unless(BlockElementHeight::Auto.wire()),
    field("horizontal_alignment").key("horizontalAlignment"),
    field("select_action").key("selectAction"),
    field("size"),
    field("style"),
    field("width"),
];

pub static IMAGE: Kind = Kind {
    name: "Image",
    constants: &[("type", "Image")],
    groups: &[ELEMENT_BASE, IMAGE_FIELDS],
    requirements: &[],
};

pub fn image(url: impl Into<String>) -> Builder {
    Builder::new(&IMAGE).arg("url", url.into())
}

const MEDIA_SOURCE_FIELDS: &[FieldSpec] = &[field("url").always(), field("mime_type").key("mimeType")];

/// One playable source of a [`MEDIA`] element. A `data:` URL must come with
/// its `mime_type`.
pub static MEDIA_SOURCE: Kind = Kind {
    name: "MediaSource",
    constants: &[],
    groups: &[MEDIA_SOURCE_FIELDS],
    requirements: &[Requirement::DataUriMetadata {
        field: "url",
        metadata: "mime_type",
    }],
};

pub fn media_source(url: impl Into<String>) -> Builder {
    Builder::new(&MEDIA_SOURCE).arg("url", url.into())
}

const MEDIA_FIELDS: &[FieldSpec] = &[
    field("sources").always(),
    field("poster"),
    field("alt_text").key("altText"),
];

pub static MEDIA: Kind = Kind {
    name: "Media",
    constants: &[("type", "Media")],
    groups: &[ELEMENT_BASE, MEDIA_FIELDS],
    requirements: &[],
};

pub fn media(sources: impl Into<AttrValue>) -> Builder {
    Builder::new(&MEDIA).arg("sources", sources)
}

const TEXT_RUN_FIELDS: &[FieldSpec] = &[
    field("text").always(),
    field("color"),
    field("font_type").key("fontType"),
    field("highlight").true_only(),
    field("subtle").key("isSubtle").true_only(),
    field("italic").true_only(),
    field("select_action").key("selectAction"),
    field("size"),
    field("strikethrough").true_only(),
    field("underline").true_only(),
    field("weight"),
];

pub static TEXT_RUN: Kind = Kind {
    name: "TextRun",
    constants: &[("type", "TextRun")],
    groups: &[TEXT_RUN_FIELDS],
    requirements: &[],
};

pub fn text_run(text: impl Into<String>) -> Builder {
    Builder::new(&TEXT_RUN).arg("text", text.into())
}

const RICH_TEXT_BLOCK_FIELDS: &[FieldSpec] = &[
    field("inlines").always(),
    field("horizontal_alignment").key("horizontalAlignment"),
];

pub static RICH_TEXT_BLOCK: Kind = Kind {
    name: "RichTextBlock",
    constants: &[("type", "RichTextBlock")],
    groups: &[ELEMENT_BASE, RICH_TEXT_BLOCK_FIELDS],
    requirements: &[],
};

/// `inlines` mixes plain strings and [`TEXT_RUN`] nodes.
pub fn rich_text_block(inlines: Vec<AttrValue>) -> Builder {
    Builder::new(&RICH_TEXT_BLOCK).arg("inlines", inlines)
}
