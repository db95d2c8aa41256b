//! Enum catalog: closed sets of named values with fixed wire strings.
//!
//! These are shared by elements, containers, inputs and actions alike, so they
//! live together here rather than next to any one node kind. Each family is
//! declared once through `wire_enum!`; there is no runtime registration.
use std::fmt;

use crate::node::AttrValue;

/// A catalog entry stripped of its Rust type: the family it belongs to, its
/// symbolic name and the string written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    family: &'static str,
    name: &'static str,
    wire: &'static str,
}

impl EnumValue {
    pub const fn new(family: &'static str, name: &'static str, wire: &'static str) -> Self {
        Self { family, name, wire }
    }

    pub const fn family(&self) -> &'static str {
        self.family
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn wire(&self) -> &'static str {
        self.wire
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire)
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $family:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $family {
            $($variant),+
        }

        impl $family {
            pub const ALL: &'static [$family] = &[$($family::$variant),+];

            pub const fn wire(self) -> &'static str {
                match self {
                    $($family::$variant => $wire),+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($family::$variant => stringify!($variant)),+
                }
            }

            pub fn from_wire(wire: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.wire() == wire)
            }

            pub const fn value(self) -> EnumValue {
                EnumValue::new(stringify!($family), self.name(), self.wire())
            }
        }

        impl fmt::Display for $family {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.wire())
            }
        }

        impl From<$family> for EnumValue {
            fn from(value: $family) -> Self {
                value.value()
            }
        }

        impl From<$family> for AttrValue {
            fn from(value: $family) -> Self {
                AttrValue::Enum(value.value())
            }
        }
    };
}

wire_enum! {
    FontType { Default => "default", Monospace => "monospace" }
}

wire_enum! {
    FontSize {
        Default => "default",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
    }
}

wire_enum! {
    FontWeight { Default => "default", Lighter => "lighter", Bolder => "bolder" }
}

wire_enum! {
    TextBlockStyle { Default => "default", Heading => "heading" }
}

wire_enum! {
    ImageFillMode {
        Cover => "cover",
        RepeatHorizontally => "repeatHorizontally",
        RepeatVertically => "repeatVertically",
        Repeat => "repeat",
    }
}

wire_enum! {
    ImageSize {
        Auto => "auto",
        Stretch => "stretch",
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

wire_enum! {
    ImageStyle { Default => "default", Person => "person" }
}

wire_enum! {
    HorizontalAlignment { Left => "left", Center => "center", Right => "right" }
}

wire_enum! {
    VerticalAlignment { Top => "top", Center => "center", Bottom => "bottom" }
}

wire_enum! {
    BlockElementHeight { Auto => "auto", Stretch => "stretch" }
}

wire_enum! {
    Spacing {
        Default => "default",
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
        Padding => "padding",
    }
}

wire_enum! {
    ActionStyle { Default => "default", Positive => "positive", Destructive => "destructive" }
}

wire_enum! {
    /// `Primary` is the schema default and is never written.
    ActionMode { Primary => "primary", Secondary => "secondary" }
}

wire_enum! {
    /// `Auto` is the schema default for `Action.Submit`.
    AssociatedInputs { Auto => "auto", None => "none" }
}

wire_enum! {
    Color {
        Default => "default",
        Dark => "dark",
        Light => "light",
        Accent => "accent",
        Good => "good",
        Warning => "warning",
        Attention => "attention",
    }
}

wire_enum! {
    ContainerStyle {
        Default => "default",
        Emphasis => "emphasis",
        Good => "good",
        Attention => "attention",
        Warning => "warning",
        Accent => "accent",
    }
}

wire_enum! {
    TextInputStyle {
        Text => "text",
        Tel => "tel",
        Url => "url",
        Email => "email",
        Password => "password",
    }
}

wire_enum! {
    ChoiceInputStyle { Compact => "compact", Expanded => "expanded", Filtered => "filtered" }
}
