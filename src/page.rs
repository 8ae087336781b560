//! Bindings between the row appender and the page that hosts it.
//!
//! A host page supplies three elements by id: the row container, the "add"
//! trigger and the hidden TOTAL_FORMS input. [`BindingIds::require`] turns a
//! failed lookup into a [`FormsetError::MissingBinding`] at bind time, so a
//! page with a missing element fails before any click is handled.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::FormsetError;
use crate::naming::{ManagementKey, Prefix};
use crate::row::RowFragment;

/// Which of the three page elements a binding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingRole {
    Container,
    Trigger,
    TotalForms,
}

impl fmt::Display for BindingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BindingRole::Container => "row container",
            BindingRole::Trigger => "add trigger",
            BindingRole::TotalForms => "TOTAL_FORMS counter",
        })
    }
}

/// Element ids the host page must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingIds {
    pub container: String,
    pub trigger: String,
    pub total_forms: String,
}

impl BindingIds {
    /// Ids for a form set whose container is `<prefix>-container` and whose
    /// counter is the rendered TOTAL_FORMS input.
    pub fn for_prefix(prefix: &Prefix, trigger: impl Into<String>) -> Self {
        Self {
            container: format!("{prefix}-container"),
            trigger: trigger.into(),
            total_forms: prefix.management_id(ManagementKey::TotalForms),
        }
    }

    pub fn diagnosticos() -> Self {
        Self::for_prefix(&Prefix::diagnosticos(), "add-diagnostico")
    }

    pub fn id(&self, role: BindingRole) -> &str {
        match role {
            BindingRole::Container => &self.container,
            BindingRole::Trigger => &self.trigger,
            BindingRole::TotalForms => &self.total_forms,
        }
    }

    /// Unwrap a lookup result for `role`, failing with the missing id.
    pub fn require<T>(&self, role: BindingRole, found: Option<T>) -> Result<T, FormsetError> {
        found.ok_or_else(|| FormsetError::MissingBinding {
            role,
            id: self.id(role).to_string(),
        })
    }
}

impl Default for BindingIds {
    fn default() -> Self {
        Self::diagnosticos()
    }
}

/// The page operations the row appender needs once bound.
pub trait RowHost {
    /// Current text of the TOTAL_FORMS field.
    fn total_forms(&self) -> Result<String, FormsetError>;

    fn set_total_forms(&mut self, value: &str) -> Result<(), FormsetError>;

    /// Insert `row` as the last child of the container.
    fn append_row(&mut self, row: RowFragment) -> Result<(), FormsetError>;
}

/// An element of a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryElement {
    Container { rows: Vec<RowFragment> },
    Button,
    Input { value: String },
}

impl MemoryElement {
    fn kind(&self) -> &'static str {
        match self {
            MemoryElement::Container { .. } => "container",
            MemoryElement::Button => "button",
            MemoryElement::Input { .. } => "input",
        }
    }
}

/// A page held in memory, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: BTreeMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the three elements `ids` names, an empty container and the
    /// counter set to `total_forms`.
    pub fn with_bindings(ids: &BindingIds, total_forms: impl Into<String>) -> Self {
        Self::new()
            .with_container(&ids.container)
            .with_button(&ids.trigger)
            .with_input(&ids.total_forms, total_forms)
    }

    pub fn with_container(mut self, id: &str) -> Self {
        self.elements
            .insert(id.to_string(), MemoryElement::Container { rows: Vec::new() });
        self
    }

    pub fn with_button(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), MemoryElement::Button);
        self
    }

    pub fn with_input(mut self, id: &str, value: impl Into<String>) -> Self {
        self.elements.insert(
            id.to_string(),
            MemoryElement::Input {
                value: value.into(),
            },
        );
        self
    }

    /// Add a server-rendered row to an existing container.
    pub fn with_row(mut self, container: &str, row: RowFragment) -> Self {
        if let Some(MemoryElement::Container { rows }) = self.elements.get_mut(container) {
            rows.push(row);
        }
        self
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn rows(&self, container: &str) -> Option<&[RowFragment]> {
        match self.elements.get(container) {
            Some(MemoryElement::Container { rows }) => Some(rows),
            _ => None,
        }
    }

    pub fn input_value(&self, id: &str) -> Option<&str> {
        match self.elements.get(id) {
            Some(MemoryElement::Input { value }) => Some(value),
            _ => None,
        }
    }

    /// Resolve all three bindings or report the first one that is missing or
    /// of the wrong kind. Any element may serve as the trigger.
    pub fn bind(&mut self, ids: &BindingIds) -> Result<MemoryHost<'_>, FormsetError> {
        let container = ids.require(BindingRole::Container, self.elements.get(&ids.container))?;
        self.expect_kind(ids, BindingRole::Container, container, "container")?;

        ids.require(BindingRole::Trigger, self.elements.get(&ids.trigger))?;

        let counter = ids.require(BindingRole::TotalForms, self.elements.get(&ids.total_forms))?;
        self.expect_kind(ids, BindingRole::TotalForms, counter, "input")?;

        Ok(MemoryHost {
            doc: self,
            container: ids.container.clone(),
            total_forms: ids.total_forms.clone(),
        })
    }

    fn expect_kind(
        &self,
        ids: &BindingIds,
        role: BindingRole,
        element: &MemoryElement,
        expected: &str,
    ) -> Result<(), FormsetError> {
        if element.kind() == expected {
            Ok(())
        } else {
            Err(FormsetError::WrongElementKind {
                role,
                id: ids.id(role).to_string(),
                found: element.kind().to_string(),
            })
        }
    }
}

/// A [`MemoryDocument`] bound to one form set.
#[derive(Debug)]
pub struct MemoryHost<'a> {
    doc: &'a mut MemoryDocument,
    container: String,
    total_forms: String,
}

impl MemoryHost<'_> {
    pub fn document(&self) -> &MemoryDocument {
        &*self.doc
    }

    fn unbound(&self, role: BindingRole) -> FormsetError {
        let id = match role {
            BindingRole::Container => &self.container,
            _ => &self.total_forms,
        };
        FormsetError::MissingBinding {
            role,
            id: id.clone(),
        }
    }
}

impl RowHost for MemoryHost<'_> {
    fn total_forms(&self) -> Result<String, FormsetError> {
        self.doc
            .input_value(&self.total_forms)
            .map(str::to_string)
            .ok_or_else(|| self.unbound(BindingRole::TotalForms))
    }

    fn set_total_forms(&mut self, value: &str) -> Result<(), FormsetError> {
        match self.doc.elements.get_mut(&self.total_forms) {
            Some(MemoryElement::Input { value: current }) => {
                *current = value.to_string();
                Ok(())
            }
            _ => Err(self.unbound(BindingRole::TotalForms)),
        }
    }

    fn append_row(&mut self, row: RowFragment) -> Result<(), FormsetError> {
        match self.doc.elements.get_mut(&self.container) {
            Some(MemoryElement::Container { rows }) => {
                rows.push(row);
                Ok(())
            }
            _ => Err(self.unbound(BindingRole::Container)),
        }
    }
}
