//! Field naming contract shared with the server-side form-set parser.
//!
//! Every sub-form field is named `<prefix>-<index>-<role>` and carries the id
//! `id_<prefix>-<index>-<role>`. The management fields drop the index:
//! `<prefix>-TOTAL_FORMS`.

use std::fmt;

use crate::count::FormCount;
use crate::error::FormsetError;
use crate::row::html_escape;

/// Prefix used by the diagnosis form set.
pub const DIAGNOSTICOS: &str = "diagnosticos";

/// Upper bound the server framework applies to MAX_NUM_FORMS by default.
pub const DEFAULT_MAX_NUM_FORMS: u32 = 1000;

/// Role of a field inside one sub-form unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Hidden primary key; empty for rows added on the client.
    Id,
    /// Free-text diagnosis.
    Descripcion,
    /// Deletion checkbox.
    Delete,
}

impl FieldRole {
    pub const ALL: [FieldRole; 3] = [FieldRole::Id, FieldRole::Descripcion, FieldRole::Delete];

    pub fn suffix(self) -> &'static str {
        match self {
            FieldRole::Id => "id",
            FieldRole::Descripcion => "descripcion",
            FieldRole::Delete => "DELETE",
        }
    }
}

/// Management-form keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagementKey {
    TotalForms,
    InitialForms,
    MinNumForms,
    MaxNumForms,
}

impl ManagementKey {
    pub const ALL: [ManagementKey; 4] = [
        ManagementKey::TotalForms,
        ManagementKey::InitialForms,
        ManagementKey::MinNumForms,
        ManagementKey::MaxNumForms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ManagementKey::TotalForms => "TOTAL_FORMS",
            ManagementKey::InitialForms => "INITIAL_FORMS",
            ManagementKey::MinNumForms => "MIN_NUM_FORMS",
            ManagementKey::MaxNumForms => "MAX_NUM_FORMS",
        }
    }
}

/// A validated form-set prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Reject prefixes that would make names ambiguous or break out of an
    /// attribute value.
    pub fn new(prefix: impl Into<String>) -> Result<Self, FormsetError> {
        let prefix = prefix.into();
        let bad = prefix.is_empty()
            || prefix
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '-' | '"' | '\'' | '<' | '>' | '&'));
        if bad {
            return Err(FormsetError::InvalidPrefix(prefix));
        }
        Ok(Self(prefix))
    }

    pub fn diagnosticos() -> Self {
        Self(DIAGNOSTICOS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<prefix>-<index>-<role>`
    pub fn field_name(&self, index: FormCount, role: FieldRole) -> String {
        format!("{}-{}-{}", self.0, index, role.suffix())
    }

    /// `id_<prefix>-<index>-<role>`
    pub fn field_id(&self, index: FormCount, role: FieldRole) -> String {
        format!("id_{}", self.field_name(index, role))
    }

    pub fn management_name(&self, key: ManagementKey) -> String {
        format!("{}-{}", self.0, key.as_str())
    }

    pub fn management_id(&self, key: ManagementKey) -> String {
        format!("id_{}", self.management_name(key))
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self::diagnosticos()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render the four hidden management inputs the way the server renders them.
/// `total` is the TOTAL_FORMS field text as it stands on the page.
pub fn management_form_html(prefix: &Prefix, total: &str, initial: u32) -> String {
    ManagementKey::ALL
        .iter()
        .map(|&key| {
            let value = match key {
                ManagementKey::TotalForms => html_escape(total),
                ManagementKey::InitialForms => initial.to_string(),
                ManagementKey::MinNumForms => "0".to_string(),
                ManagementKey::MaxNumForms => DEFAULT_MAX_NUM_FORMS.to_string(),
            };
            format!(
                r#"<input type="hidden" name="{}" value="{}" id="{}">"#,
                prefix.management_name(key),
                value,
                prefix.management_id(key)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
