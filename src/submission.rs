//! Decoding a submitted form set back into rows.
//!
//! This is the receiving end of the naming contract: TOTAL_FORMS says how
//! many indices to look at, and each index contributes an id, a description
//! and a DELETE flag.

use std::collections::HashMap;

use crate::count::FormCount;
use crate::error::FormsetError;
use crate::naming::{FieldRole, ManagementKey, Prefix};

/// Hard cap on the number of rows read from one submission.
pub const ABSOLUTE_MAX_FORMS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedRow {
    pub index: usize,
    /// Primary key of a row that already existed; `None` for added rows.
    pub id: Option<String>,
    pub descripcion: String,
    pub delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormsetSubmission {
    pub prefix: Prefix,
    pub total_forms: usize,
    pub rows: Vec<SubmittedRow>,
}

impl FormsetSubmission {
    /// Decode form pairs in submission order. Repeated keys keep the last
    /// value.
    pub fn decode<I, K, V>(prefix: &Prefix, pairs: I) -> Result<Self, FormsetError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let data: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let total_key = prefix.management_name(ManagementKey::TotalForms);
        let raw_total = data
            .get(&total_key)
            .ok_or_else(|| FormsetError::ManagementForm(format!("'{total_key}' is missing")))?;
        let declared: usize = raw_total.trim().parse().map_err(|_| {
            FormsetError::ManagementForm(format!("'{total_key}' is not a count: '{raw_total}'"))
        })?;

        let total_forms = declared.min(ABSOLUTE_MAX_FORMS);
        if total_forms < declared {
            tracing::warn!(
                %prefix,
                declared,
                limit = ABSOLUTE_MAX_FORMS,
                "TOTAL_FORMS above limit; extra rows ignored"
            );
        }

        let rows = (0..total_forms)
            .map(|index| {
                let field = |role| {
                    data.get(&prefix.field_name(FormCount::Number(index as i64), role))
                };
                SubmittedRow {
                    index,
                    id: field(FieldRole::Id).filter(|v| !v.is_empty()).cloned(),
                    descripcion: field(FieldRole::Descripcion).cloned().unwrap_or_default(),
                    delete: field(FieldRole::Delete).is_some_and(|v| checkbox_checked(v)),
                }
            })
            .collect();

        Ok(Self {
            prefix: prefix.clone(),
            total_forms,
            rows,
        })
    }

    /// Rows that survive saving: not marked for deletion and with a
    /// description.
    pub fn kept_rows(&self) -> impl Iterator<Item = &SubmittedRow> {
        self.rows
            .iter()
            .filter(|row| !row.delete && !row.descripcion.trim().is_empty())
    }
}

// Browsers send "on" for a ticked checkbox and omit it otherwise. The
// server's boolean field also reads "0" and "false" as unticked.
fn checkbox_checked(value: &str) -> bool {
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}
