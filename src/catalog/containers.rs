//! Containers, sets and tables.
use super::{CONTAINER_BASE, LAYOUT_FIELDS, SET_BASE};
use crate::emit::{Builder, FieldSpec, Kind, field};
use crate::node::AttrValue;

const ACTION_SET_FIELDS: &[FieldSpec] = &[field("actions").always()];

pub static ACTION_SET: Kind = Kind {
    name: "ActionSet",
    constants: &[("type", "ActionSet")],
    groups: &[SET_BASE, ACTION_SET_FIELDS],
    requirements: &[],
};

pub fn action_set(actions: impl Into<AttrValue>) -> Builder {
    Builder::new(&ACTION_SET).arg("actions", actions)
}

const ITEMS: &[FieldSpec] = &[field("items").always()];

pub static CONTAINER: Kind = Kind {
    name: "Container",
    constants: &[("type", "Container")],
    groups: &[CONTAINER_BASE, ITEMS, LAYOUT_FIELDS],
    requirements: &[],
};

pub fn container(items: impl Into<AttrValue>) -> Builder {
    Builder::new(&CONTAINER).arg("items", items)
}

// Columns carry their own field set; they are not laid out like containers.
const COLUMN_FIELDS: &[FieldSpec] = &[
    field("items"),
    field("background_image").key("backgroundImage"),
    field("bleed").true_only(),
    field("fallback"),
    field("min_height").key("minHeight"),
    field("rtl").true_only(),
    field("separator").true_only(),
    field("spacing"),
    field("select_action").key("selectAction"),
    field("style"),
    field("vertical_content_alignment").key("verticalContentAlignment"),
    field("width"),
    field("id"),
    field("visible").key("isVisible").false_only(),
    field("requires"),
];

pub static COLUMN: Kind = Kind {
    name: "Column",
    constants: &[("type", "Column")],
    groups: &[COLUMN_FIELDS],
    requirements: &[],
};

pub fn column() -> Builder {
    Builder::new(&COLUMN)
}

const COLUMN_SET_FIELDS: &[FieldSpec] = &[
    field("columns"),
    field("select_action").key("selectAction"),
    field("style"),
    field("bleed").true_only(),
    field("min_height").key("minHeight"),
    field("horizontal_alignment").key("horizontalAlignment"),
];

pub static COLUMN_SET: Kind = Kind {
    name: "ColumnSet",
    constants: &[("type", "ColumnSet")],
    groups: &[SET_BASE, COLUMN_SET_FIELDS],
    requirements: &[],
};

pub fn column_set() -> Builder {
    Builder::new(&COLUMN_SET)
}

const FACT_FIELDS: &[FieldSpec] = &[field("title").always(), field("value").always()];

pub static FACT: Kind = Kind {
    name: "Fact",
    constants: &[],
    groups: &[FACT_FIELDS],
    requirements: &[],
};

pub fn fact(title: impl Into<String>, value: impl Into<String>) -> Builder {
    Builder::new(&FACT).arg("title", title.into()).arg("value", value.into())
}

const FACT_SET_FIELDS: &[FieldSpec] = &[field("facts").always()];

pub static FACT_SET: Kind = Kind {
    name: "FactSet",
    constants: &[("type", "FactSet")],
    groups: &[SET_BASE, FACT_SET_FIELDS],
    requirements: &[],
};

pub fn fact_set(facts: impl Into<AttrValue>) -> Builder {
    Builder::new(&FACT_SET).arg("facts", facts)
}

const IMAGE_SET_FIELDS: &[FieldSpec] = &[field("images").always(), field("image_size").key("imageSize")];

pub static IMAGE_SET: Kind = Kind {
    name: "ImageSet",
    constants: &[("type", "ImageSet")],
    groups: &[SET_BASE, IMAGE_SET_FIELDS],
    requirements: &[],
};

pub fn image_set(images: impl Into<AttrValue>) -> Builder {
    Builder::new(&IMAGE_SET).arg("images", images)
}

pub static TABLE_CELL: Kind = Kind {
    name: "TableCell",
    constants: &[("type", "TableCell")],
    groups: &[CONTAINER_BASE, ITEMS, LAYOUT_FIELDS],
    requirements: &[],
};

pub fn table_cell(items: impl Into<AttrValue>) -> Builder {
    Builder::new(&TABLE_CELL).arg("items", items)
}

const CELL_ALIGNMENT: &[FieldSpec] = &[
    field("horizontal_cell_content_alignment").key("horizontalCellContentAlignment"),
    field("vertical_cell_content_alignment").key("verticalCellContentAlignment"),
];

const TABLE_ROW_FIELDS: &[FieldSpec] = &[field("cells"), field("style")];

pub static TABLE_ROW: Kind = Kind {
    name: "TableRow",
    constants: &[("type", "TableRow")],
    groups: &[TABLE_ROW_FIELDS, CELL_ALIGNMENT],
    requirements: &[],
};

pub fn table_row() -> Builder {
    Builder::new(&TABLE_ROW)
}

// `firstRowAsHeader` and `showGridLines` default to true in the schema.
const TABLE_FIELDS: &[FieldSpec] = &[
    field("columns"),
    field("rows"),
    field("first_row_as_header").key("firstRowAsHeader").false_only(),
    field("show_grid_lines").key("showGridLines").false_only(),
    field("grid_style").key("gridStyle"),
];

pub static TABLE: Kind = Kind {
    name: "Table",
    constants: &[("type", "Table")],
    groups: &[CONTAINER_BASE, TABLE_FIELDS, CELL_ALIGNMENT],
    requirements: &[],
};

pub fn table() -> Builder {
    Builder::new(&TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::elements::{image, text_block};
    use crate::enums::{ContainerStyle, HorizontalAlignment, ImageSize};
    use crate::node::Node;

    fn leaf(text: &str) -> Node {
        text_block(text).build().unwrap()
    }

    #[test]
    fn container_wraps_items_and_layout_fields() {
        let node = container(vec![leaf("a")])
            .arg("style", ContainerStyle::Emphasis)
            .arg("bleed", true)
            .arg("rtl", false)
            .arg("background_image", "https://x/bg.png")
            .build()
            .unwrap();
        assert_eq!(
            node.to_wire_json().unwrap(),
            r#"{"type":"Container","items":[{"type":"TextBlock","text":"a"}],"style":"emphasis","bleed":true,"backgroundImage":"https://x/bg.png"}"#
        );
    }

    #[test]
    fn column_set_holds_typed_columns() {
        let col = column().arg("width", "stretch").arg("items", vec![leaf("x")]).build().unwrap();
        let node = column_set()
            .arg("columns", vec![col])
            .arg("horizontal_alignment", HorizontalAlignment::Center)
            .build()
            .unwrap();
        assert_eq!(
            node.to_wire_json().unwrap(),
            r#"{"type":"ColumnSet","columns":[{"type":"Column","items":[{"type":"TextBlock","text":"x"}],"width":"stretch"}],"horizontalAlignment":"center"}"#
        );
    }

    #[test]
    fn facts_are_untyped_records() {
        let facts = vec![fact("Owner", "ops").build().unwrap(), fact("Tier", "1").build().unwrap()];
        let node = fact_set(facts).arg("separator", true).build().unwrap();
        assert_eq!(
            node.to_wire_json().unwrap(),
            r#"{"type":"FactSet","separator":true,"facts":[{"title":"Owner","value":"ops"},{"title":"Tier","value":"1"}]}"#
        );
    }

    #[test]
    fn image_set_writes_image_size() {
        let node = image_set(vec![image("https://x/1.png").build().unwrap()])
            .arg("image_size", ImageSize::Medium)
            .build()
            .unwrap();
        assert_eq!(node.get("imageSize").unwrap().as_str(), Some("medium"));
    }

    #[test]
    fn table_writes_header_and_grid_flags_only_when_disabled() {
        let row = table_row()
            .arg("cells", vec![table_cell(vec![leaf("c")]).build().unwrap()])
            .build()
            .unwrap();
        let defaults = table()
            .arg("rows", vec![row.clone()])
            .arg("first_row_as_header", true)
            .arg("show_grid_lines", true)
            .build()
            .unwrap();
        assert_eq!(defaults.keys().collect::<Vec<_>>(), ["type", "rows"]);

        let plain = table()
            .arg("rows", vec![row])
            .arg("first_row_as_header", false)
            .arg("show_grid_lines", false)
            .build()
            .unwrap();
        assert_eq!(
            plain.keys().collect::<Vec<_>>(),
            ["type", "rows", "firstRowAsHeader", "showGridLines"]
        );
        let cell = &plain.get("rows").unwrap().as_nodes().unwrap()[0]
            .get("cells")
            .unwrap()
            .as_nodes()
            .unwrap()[0];
        assert_eq!(cell.get("type").unwrap().as_str(), Some("TableCell"));
    }

    #[test]
    fn hidden_container_writes_is_visible_false() {
        let node = container(vec![leaf("a")]).arg("visible", false).build().unwrap();
        assert_eq!(node.get("isVisible").unwrap(), &AttrValue::Bool(false));
    }
}
