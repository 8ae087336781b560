//! Markup for one sub-form unit.

use crate::count::FormCount;
use crate::naming::{FieldRole, Prefix};

/// CSS classes of the wrapper `div` around each row.
pub const ITEM_CLASS: &str = "diagnostico-item form-row";

const DEFAULT_PLACEHOLDER: &str = "Ingrese diagnóstico presuntivo";
const DEFAULT_DELETE_LABEL: &str = "Eliminar";

/// A rendered row, ready to be inserted as the last child of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFragment {
    pub index: FormCount,
    pub class_name: String,
    pub inner_html: String,
}

impl RowFragment {
    /// The row including its wrapper element.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="{}">{}</div>"#,
            html_escape(&self.class_name),
            self.inner_html
        )
    }
}

/// Template for new rows of one form set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    pub prefix: Prefix,
    pub item_class: String,
    pub placeholder: String,
    pub delete_label: String,
}

impl RowTemplate {
    pub fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            ..Self::diagnosticos()
        }
    }

    pub fn diagnosticos() -> Self {
        Self {
            prefix: Prefix::diagnosticos(),
            item_class: ITEM_CLASS.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            delete_label: DEFAULT_DELETE_LABEL.to_string(),
        }
    }

    pub fn render(&self, index: FormCount) -> RowFragment {
        let name = |role| self.prefix.field_name(index, role);
        let id = |role| self.prefix.field_id(index, role);

        let inner_html = format!(
            r#"
    <input type="hidden" name="{id_name}" id="{id_id}">
    <div class="flex-grow-1">
        <input type="text" name="{desc_name}"
               class="form-control" placeholder="{placeholder}"
               id="{desc_id}">
    </div>
    <div class="ml-2">
        <input type="checkbox" name="{del_name}"
               id="{del_id}">
        <label>{label}</label>
    </div>
"#,
            id_name = name(FieldRole::Id),
            id_id = id(FieldRole::Id),
            desc_name = name(FieldRole::Descripcion),
            desc_id = id(FieldRole::Descripcion),
            placeholder = html_escape(&self.placeholder),
            del_name = name(FieldRole::Delete),
            del_id = id(FieldRole::Delete),
            label = html_escape(&self.delete_label),
        );

        RowFragment {
            index,
            class_name: self.item_class.clone(),
            inner_html,
        }
    }
}

impl Default for RowTemplate {
    fn default() -> Self {
        Self::diagnosticos()
    }
}

pub(crate) fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}
