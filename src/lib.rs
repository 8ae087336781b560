//! # formset-rows
//!
//! Client-side row appender for indexed form sets.
//!
//! A form set is a variable-length list of sub-forms whose fields are named
//! `<prefix>-<index>-<role>`, plus a hidden `TOTAL_FORMS` counter telling the
//! server how many indices to read. Adding a row means rendering a new
//! sub-form at index `TOTAL_FORMS`, appending it to the container, and bumping
//! the counter.
//!
//! ## Example
//!
//! ```
//! use formset_rows::{BindingIds, MemoryDocument, RowAppender, RowTemplate};
//!
//! let ids = BindingIds::diagnosticos();
//! let mut page = MemoryDocument::with_bindings(&ids, "2");
//!
//! let host = page.bind(&ids).unwrap();
//! let mut appender = RowAppender::new(host, RowTemplate::diagnosticos());
//! appender.add_row().unwrap();
//! drop(appender);
//!
//! assert_eq!(page.input_value("id_diagnosticos-TOTAL_FORMS"), Some("3"));
//! let row = &page.rows("diagnosticos-container").unwrap()[0];
//! assert!(row.inner_html.contains(r#"name="diagnosticos-2-descripcion""#));
//! ```

pub mod appender;
pub mod cli;
pub mod count;
pub mod error;
pub mod naming;
pub mod page;
pub mod row;
pub mod submission;

pub use appender::RowAppender;
pub use count::{FormCount, TotalForms};
pub use error::FormsetError;
pub use naming::{FieldRole, ManagementKey, Prefix, management_form_html};
pub use page::{BindingIds, BindingRole, MemoryDocument, MemoryElement, MemoryHost, RowHost};
pub use row::{RowFragment, RowTemplate};
pub use submission::{FormsetSubmission, SubmittedRow};
