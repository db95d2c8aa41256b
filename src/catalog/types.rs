//! Supporting records that appear inside other nodes: background images,
//! refresh and authentication blocks.
use crate::emit::{Builder, FieldSpec, Kind, field};

const BACKGROUND_IMAGE_FIELDS: &[FieldSpec] = &[
    field("url").always(),
    field("fill_mode").key("fillMode"),
    field("horizontal_alignment").key("horizontalAlignment"),
    field("vertical_alignment").key("verticalAlignment"),
];

pub static BACKGROUND_IMAGE: Kind = Kind {
    name: "BackgroundImage",
    constants: &[],
    groups: &[BACKGROUND_IMAGE_FIELDS],
    requirements: &[],
};

pub fn background_image(url: impl Into<String>) -> Builder {
    Builder::new(&BACKGROUND_IMAGE).arg("url", url.into())
}

const REFRESH_FIELDS: &[FieldSpec] = &[field("action"), field("user_ids").key("userIds")];

pub static REFRESH: Kind = Kind {
    name: "Refresh",
    constants: &[],
    groups: &[REFRESH_FIELDS],
    requirements: &[],
};

pub fn refresh() -> Builder {
    Builder::new(&REFRESH)
}

const TOKEN_EXCHANGE_RESOURCE_FIELDS: &[FieldSpec] = &[
    field("id").always(),
    field("uri").always(),
    field("provider_id").key("providerId").always(),
];

pub static TOKEN_EXCHANGE_RESOURCE: Kind = Kind {
    name: "TokenExchangeResource",
    constants: &[],
    groups: &[TOKEN_EXCHANGE_RESOURCE_FIELDS],
    requirements: &[],
};

pub fn token_exchange_resource(
    id: impl Into<String>,
    uri: impl Into<String>,
    provider_id: impl Into<String>,
) -> Builder {
    Builder::new(&TOKEN_EXCHANGE_RESOURCE)
        .arg("id", id.into())
        .arg("uri", uri.into())
        .arg("provider_id", provider_id.into())
}

// `type` is caller-supplied here (e.g. "signin"), not a fixed discriminator.
const AUTH_CARD_BUTTON_FIELDS: &[FieldSpec] = &[
    field("type").always(),
    field("value").always(),
    field("title"),
    field("image"),
];

pub static AUTH_CARD_BUTTON: Kind = Kind {
    name: "AuthCardButton",
    constants: &[],
    groups: &[AUTH_CARD_BUTTON_FIELDS],
    requirements: &[],
};

pub fn auth_card_button(button_type: impl Into<String>, value: impl Into<String>) -> Builder {
    Builder::new(&AUTH_CARD_BUTTON)
        .arg("type", button_type.into())
        .arg("value", value.into())
}

const AUTHENTICATION_FIELDS: &[FieldSpec] = &[
    field("text"),
    field("connection_name").key("connectionName"),
    field("token_exchange_resource").key("tokenExchangeResource"),
    field("buttons"),
];

pub static AUTHENTICATION: Kind = Kind {
    name: "Authentication",
    constants: &[],
    groups: &[AUTHENTICATION_FIELDS],
    requirements: &[],
};

pub fn authentication() -> Builder {
    Builder::new(&AUTHENTICATION)
}
