//! Error type shared by the library, the CLI and the browser UI.

use std::path::PathBuf;

use crate::page::BindingRole;

/// Errors raised while binding to a page, appending rows, or decoding a
/// submitted form set.
#[derive(Debug, thiserror::Error)]
pub enum FormsetError {
    /// A required page element is absent.
    #[error("missing {role} element '#{id}'")]
    MissingBinding { role: BindingRole, id: String },

    /// An element exists under the bound id but cannot play its role.
    #[error("element '#{id}' cannot act as the {role}: found {found}")]
    WrongElementKind {
        role: BindingRole,
        id: String,
        found: String,
    },

    /// Prefix would break the `<prefix>-<index>-<role>` naming scheme.
    #[error("invalid form-set prefix '{0}'")]
    InvalidPrefix(String),

    /// TOTAL_FORMS is absent or unusable in submitted data.
    #[error("management form data is missing or has been tampered with: {0}")]
    ManagementForm(String),

    /// The browser DOM rejected an operation.
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
