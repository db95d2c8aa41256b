//! Field emission policy and declarative node kinds.
//!
//! A concrete card type is not a Rust type: it is a [`Kind`], i.e. a list of
//! constant fields plus ordered groups of [`FieldSpec`] descriptors. Each
//! descriptor binds one optional constructor parameter to its wire key and to
//! exactly one [`Emit`] rule. A [`Builder`] collects arguments and resolves the
//! full field set in one go, so a node is either completely built or never
//! handed out.
//!
//! The boolean rules are lossy on purpose: `TrueOnly`/`FalseOnly` cannot tell
//! "explicitly set to the schema default" from "never supplied". Both omit the
//! field, which keeps the JSON minimal.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{CardError, Result};
use crate::node::{AttrValue, Node};

// ————————————————————————————————————————————————————————————————————————————
// POLICY
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Written when non-empty / non-zero / not null.
    Truthy,
    /// Written only for `true`; the schema default is `false`.
    TrueOnly,
    /// Written only for `false`; the schema default is `true`.
    FalseOnly,
    /// Written unconditionally.
    Always,
    /// Written when truthy and different from the given default token.
    Unless(&'static str),
}

impl Emit {
    pub fn admits(self, value: &AttrValue) -> bool {
        match self {
            Emit::Truthy => value.is_truthy(),
            Emit::TrueOnly => value.as_bool() == Some(true),
            Emit::FalseOnly => value.as_bool() == Some(false),
            Emit::Always => true,
            Emit::Unless(default) => value.is_truthy() && value.as_str() != Some(default),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DESCRIPTORS
// ————————————————————————————————————————————————————————————————————————————

/// Binds a constructor parameter to a wire key and an emission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name the caller passes to [`Builder::arg`].
    pub param: &'static str,
    /// Key written into the node.
    pub key: &'static str,
    pub rule: Emit,
}

impl FieldSpec {
    /// A truthy field whose wire key equals its parameter name.
    pub const fn new(param: &'static str) -> Self {
        Self {
            param,
            key: param,
            rule: Emit::Truthy,
        }
    }

    pub const fn key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    pub const fn true_only(mut self) -> Self {
        self.rule = Emit::TrueOnly;
        self
    }

    pub const fn false_only(mut self) -> Self {
        self.rule = Emit::FalseOnly;
        self
    }

    pub const fn always(mut self) -> Self {
        self.rule = Emit::Always;
        self
    }

    pub const fn unless(mut self, default: &'static str) -> Self {
        self.rule = Emit::Unless(default);
        self
    }
}

/// Shorthand for [`FieldSpec::new`].
pub const fn field(param: &'static str) -> FieldSpec {
    FieldSpec::new(param)
}

/// Cross-field rules checked before a node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// When `field` holds a `data:` URI, `metadata` must be supplied as well.
    DataUriMetadata {
        field: &'static str,
        metadata: &'static str,
    },
}

static DATA_URI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*data:").expect("data URI pattern compiles"));

pub fn is_data_uri(s: &str) -> bool {
    DATA_URI.is_match(s)
}

impl Requirement {
    fn check(&self, args: &IndexMap<String, AttrValue>) -> Result<()> {
        match *self {
            Requirement::DataUriMetadata { field, metadata } => {
                let is_data = args.get(field).and_then(AttrValue::as_str).is_some_and(is_data_uri);
                let declared = args.get(metadata).is_some_and(AttrValue::is_truthy);
                if is_data && !declared {
                    return Err(CardError::MissingRequiredMetadata { field, metadata });
                }
                Ok(())
            }
        }
    }
}

/// A concrete node type described as data.
#[derive(Debug)]
pub struct Kind {
    pub name: &'static str,
    /// Written first, verbatim, on every node of this kind.
    pub constants: &'static [(&'static str, &'static str)],
    /// Emitted in order. A parameter declared again in a later group
    /// overrides the earlier descriptor and takes its position.
    pub groups: &'static [&'static [FieldSpec]],
    pub requirements: &'static [Requirement],
}

impl Kind {
    /// Effective descriptors in emission order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let groups = self.groups;
        groups.iter().enumerate().flat_map(move |(i, group)| {
            group.iter().filter(move |spec| {
                !groups[i + 1..]
                    .iter()
                    .any(|later| later.iter().any(|s| s.param == spec.param))
            })
        })
    }

    pub fn field(&self, param: &str) -> Option<&'static FieldSpec> {
        self.groups
            .iter()
            .rev()
            .find_map(|group| group.iter().find(|spec| spec.param == param))
    }

    pub fn declares(&self, param: &str) -> bool {
        self.field(param).is_some()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// BUILDER
// ————————————————————————————————————————————————————————————————————————————

/// Collects constructor arguments for one [`Kind`].
#[derive(Debug, Clone)]
pub struct Builder {
    kind: &'static Kind,
    args: IndexMap<String, AttrValue>,
    extras: Vec<(String, AttrValue)>,
}

impl Builder {
    pub fn new(kind: &'static Kind) -> Self {
        Self {
            kind,
            args: IndexMap::new(),
            extras: Vec::new(),
        }
    }

    pub fn kind(&self) -> &'static Kind {
        self.kind
    }

    /// Supply a declared parameter. Passing it twice keeps the last value.
    pub fn arg(mut self, param: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.args.insert(param.into(), value.into());
        self
    }

    /// A field the kind does not declare, written as-is after all declared
    /// fields. It must not collide with any of them.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.extras.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<Node> {
        let Builder {
            kind,
            mut args,
            extras,
        } = self;

        if let Some(param) = args.keys().find(|param| !kind.declares(param)) {
            return Err(CardError::UnknownParameter {
                kind: kind.name,
                param: param.clone(),
            });
        }
        for requirement in kind.requirements {
            requirement.check(&args)?;
        }

        let mut node = Node::new();
        for (key, value) in kind.constants {
            node.insert(*key, *value)?;
        }
        for spec in kind.fields() {
            match args.swap_remove(spec.param) {
                Some(value) if spec.rule.admits(&value) => node.insert(spec.key, value)?,
                Some(_) => trace!(kind = kind.name, param = spec.param, "dropped by emission policy"),
                None if spec.rule == Emit::Always => {
                    return Err(CardError::MissingArgument {
                        kind: kind.name,
                        param: spec.param,
                    });
                }
                None => {}
            }
        }
        for (key, value) in extras {
            node.insert(key, value)?;
        }

        debug!(kind = kind.name, fields = node.len(), "built node");
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &[FieldSpec] = &[
        field("fallback"),
        field("height"),
        field("visible").key("isVisible").false_only(),
        field("separator").true_only(),
    ];

    const WIDGET_FIELDS: &[FieldSpec] = &[
        field("text").always(),
        field("height").unless("auto"),
        field("mode").unless("primary"),
        field("max_lines").key("maxLines"),
    ];

    static WIDGET: Kind = Kind {
        name: "Widget",
        constants: &[("type", "Widget")],
        groups: &[BASE, WIDGET_FIELDS],
        requirements: &[],
    };

    const SOURCE_FIELDS: &[FieldSpec] = &[field("url").always(), field("mime_type").key("mimeType")];

    static SOURCE: Kind = Kind {
        name: "Source",
        constants: &[],
        groups: &[SOURCE_FIELDS],
        requirements: &[Requirement::DataUriMetadata {
            field: "url",
            metadata: "mime_type",
        }],
    };

    fn keys(node: &Node) -> Vec<&str> {
        node.keys().collect()
    }

    #[test]
    fn rules_admit_expected_values() {
        assert!(Emit::Truthy.admits(&"x".into()));
        assert!(!Emit::Truthy.admits(&"".into()));
        assert!(!Emit::Truthy.admits(&0.into()));

        assert!(Emit::TrueOnly.admits(&true.into()));
        assert!(!Emit::TrueOnly.admits(&false.into()));
        assert!(!Emit::TrueOnly.admits(&AttrValue::Null));

        assert!(Emit::FalseOnly.admits(&false.into()));
        assert!(!Emit::FalseOnly.admits(&true.into()));
        assert!(!Emit::FalseOnly.admits(&AttrValue::Null));

        assert!(Emit::Always.admits(&AttrValue::Null));

        assert!(Emit::Unless("primary").admits(&"secondary".into()));
        assert!(!Emit::Unless("primary").admits(&"primary".into()));
        assert!(!Emit::Unless("primary").admits(&AttrValue::Null));
    }

    #[test]
    fn later_group_overrides_position_and_rule() {
        let order: Vec<_> = WIDGET.fields().map(|s| s.param).collect();
        assert_eq!(order, ["fallback", "visible", "separator", "text", "height", "mode", "max_lines"]);
        assert_eq!(WIDGET.field("height").unwrap().rule, Emit::Unless("auto"));
    }

    #[test]
    fn builds_in_descriptor_order_regardless_of_argument_order() {
        let node = Builder::new(&WIDGET)
            .arg("max_lines", 2)
            .arg("text", "hello")
            .arg("fallback", "drop")
            .build()
            .unwrap();
        assert_eq!(keys(&node), ["type", "fallback", "text", "maxLines"]);
    }

    #[test]
    fn false_only_field_is_written_only_when_false() {
        let shown = Builder::new(&WIDGET).arg("text", "a").arg("visible", true).build().unwrap();
        assert!(!shown.contains_key("isVisible"));

        let hidden = Builder::new(&WIDGET).arg("text", "a").arg("visible", false).build().unwrap();
        assert_eq!(hidden.get("isVisible").unwrap(), &AttrValue::Bool(false));
    }

    #[test]
    fn custom_guard_drops_default_token() {
        let node = Builder::new(&WIDGET)
            .arg("text", "a")
            .arg("height", "auto")
            .arg("mode", "secondary")
            .build()
            .unwrap();
        assert!(!node.contains_key("height"));
        assert_eq!(node.get("mode").unwrap().as_str(), Some("secondary"));
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let err = Builder::new(&WIDGET).arg("text", "a").arg("colour", "red").build().unwrap_err();
        assert!(matches!(err, CardError::UnknownParameter { kind: "Widget", ref param } if param == "colour"));
    }

    #[test]
    fn missing_always_argument_is_rejected() {
        let err = Builder::new(&WIDGET).build().unwrap_err();
        assert!(matches!(err, CardError::MissingArgument { param: "text", .. }));
    }

    #[test]
    fn extras_follow_declared_fields_and_cannot_collide() {
        let node = Builder::new(&WIDGET).arg("text", "a").extra("custom", 1).build().unwrap();
        assert_eq!(keys(&node), ["type", "text", "custom"]);

        let err = Builder::new(&WIDGET).arg("text", "a").extra("type", "Other").build().unwrap_err();
        assert!(matches!(err, CardError::DuplicateKey { ref key } if key == "type"));
    }

    #[test]
    fn data_uri_without_metadata_fails() {
        let err = Builder::new(&SOURCE).arg("url", "data:video/mp4;base64,AAAA").build().unwrap_err();
        assert!(matches!(
            err,
            CardError::MissingRequiredMetadata { field: "url", metadata: "mime_type" }
        ));
    }

    #[test]
    fn data_uri_with_metadata_succeeds() {
        let node = Builder::new(&SOURCE)
            .arg("url", "DATA:video/mp4;base64,AAAA")
            .arg("mime_type", "video/mp4")
            .build()
            .unwrap();
        assert_eq!(node.get("mimeType").unwrap().as_str(), Some("video/mp4"));
    }

    #[test]
    fn plain_url_needs_no_metadata() {
        let node = Builder::new(&SOURCE).arg("url", "https://example.com/a.mp4").build().unwrap();
        assert_eq!(keys(&node), ["url"]);
    }
}
