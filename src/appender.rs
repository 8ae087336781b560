//! The row appender: one click, one new sub-form unit.
//!
//! Each [`RowAppender::add_row`] reads TOTAL_FORMS, renders a row at that
//! index, appends it after every existing row and writes TOTAL_FORMS + 1
//! back. Rows are never removed or renumbered here; ticking a row's DELETE
//! box only signals the server.

use crate::count::{FormCount, TotalForms};
use crate::error::FormsetError;
use crate::page::RowHost;
use crate::row::RowTemplate;

pub struct RowAppender<H: RowHost> {
    host: H,
    template: RowTemplate,
}

impl<H: RowHost> RowAppender<H> {
    pub fn new(host: H, template: RowTemplate) -> Self {
        Self { host, template }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Append one row and advance the counter. Returns the index the new
    /// row's fields were named with.
    pub fn add_row(&mut self) -> Result<FormCount, FormsetError> {
        let mut total = TotalForms::new(self.host.total_forms()?);
        if total.read().is_nan() {
            tracing::warn!(
                prefix = %self.template.prefix,
                total_forms = %total.raw(),
                "TOTAL_FORMS is not numeric; new row index will be NaN"
            );
        }
        let index = total.advance();

        let row = self.template.render(index);
        self.host.append_row(row)?;
        self.host.set_total_forms(total.raw())?;

        tracing::debug!(prefix = %self.template.prefix, %index, "appended form row");
        Ok(index)
    }

    /// Call [`add_row`](Self::add_row) `n` times, returning the indices used.
    pub fn add_rows(&mut self, n: usize) -> Result<Vec<FormCount>, FormsetError> {
        (0..n).map(|_| self.add_row()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{FieldRole, Prefix};
    use crate::page::{BindingIds, MemoryDocument, RowHost};

    fn page(total: &str) -> (BindingIds, MemoryDocument) {
        let ids = BindingIds::diagnosticos();
        let doc = MemoryDocument::with_bindings(&ids, total);
        (ids, doc)
    }

    #[test]
    fn test_single_add_from_two() {
        let (ids, mut doc) = page("2");
        {
            let host = doc.bind(&ids).unwrap();
            let mut appender = RowAppender::new(host, RowTemplate::diagnosticos());
            assert_eq!(appender.add_row().unwrap(), FormCount::Number(2));
        }

        assert_eq!(doc.input_value(&ids.total_forms), Some("3"));
        let rows = doc.rows(&ids.container).unwrap();
        assert_eq!(rows.len(), 1);
        let html = &rows[0].inner_html;
        assert!(html.contains(r#"name="diagnosticos-2-id""#));
        assert!(html.contains(r#"name="diagnosticos-2-descripcion""#));
        assert!(html.contains(r#"name="diagnosticos-2-DELETE""#));
    }

    #[test]
    fn test_three_adds_from_zero() {
        let (ids, mut doc) = page("0");
        let indices = {
            let host = doc.bind(&ids).unwrap();
            RowAppender::new(host, RowTemplate::diagnosticos())
                .add_rows(3)
                .unwrap()
        };

        assert_eq!(
            indices,
            vec![FormCount::Number(0), FormCount::Number(1), FormCount::Number(2)]
        );
        assert_eq!(doc.input_value(&ids.total_forms), Some("3"));
        let rows = doc.rows(&ids.container).unwrap();
        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, FormCount::Number(i as i64));
            assert!(
                row.inner_html
                    .contains(&format!(r#"name="diagnosticos-{i}-descripcion""#))
            );
        }
    }

    #[test]
    fn test_non_numeric_counter_yields_nan() {
        let (ids, mut doc) = page("abc");
        {
            let host = doc.bind(&ids).unwrap();
            let mut appender = RowAppender::new(host, RowTemplate::diagnosticos());
            assert!(appender.add_row().unwrap().is_nan());
            assert!(appender.add_row().unwrap().is_nan());
        }

        assert_eq!(doc.input_value(&ids.total_forms), Some("NaN"));
        for row in doc.rows(&ids.container).unwrap() {
            assert!(row.inner_html.contains(r#"name="diagnosticos-NaN-id""#));
        }
    }

    #[test]
    fn test_counter_and_row_count_track_adds() {
        for (initial, adds) in [(0_i64, 1_usize), (1, 4), (5, 10)] {
            let ids = BindingIds::diagnosticos();
            let template = RowTemplate::diagnosticos();
            let mut doc = MemoryDocument::with_bindings(&ids, initial.to_string());
            for i in 0..initial {
                doc = doc.with_row(&ids.container, template.render(FormCount::Number(i)));
            }

            let indices = {
                let host = doc.bind(&ids).unwrap();
                RowAppender::new(host, template.clone()).add_rows(adds).unwrap()
            };

            let expected_total = initial + adds as i64;
            assert_eq!(
                doc.input_value(&ids.total_forms),
                Some(expected_total.to_string().as_str())
            );
            assert_eq!(
                doc.rows(&ids.container).unwrap().len(),
                expected_total as usize
            );

            let expected: Vec<_> = (initial..expected_total).map(FormCount::Number).collect();
            assert_eq!(indices, expected);
        }
    }

    #[test]
    fn test_existing_rows_untouched() {
        let ids = BindingIds::diagnosticos();
        let template = RowTemplate::diagnosticos();
        let existing = vec![
            template.render(FormCount::Number(0)),
            template.render(FormCount::Number(1)),
        ];
        let mut doc = MemoryDocument::with_bindings(&ids, "2");
        for row in &existing {
            doc = doc.with_row(&ids.container, row.clone());
        }

        {
            let host = doc.bind(&ids).unwrap();
            RowAppender::new(host, template).add_rows(2).unwrap();
        }

        let rows = doc.rows(&ids.container).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[..2], existing.as_slice());
    }

    #[test]
    fn test_host_reflects_counter_between_adds() {
        let (ids, mut doc) = page("4");
        let host = doc.bind(&ids).unwrap();
        let mut appender = RowAppender::new(host, RowTemplate::diagnosticos());

        appender.add_row().unwrap();
        assert_eq!(appender.host().total_forms().unwrap(), "5");
        appender.add_row().unwrap();

        let host = appender.into_host();
        assert_eq!(host.document().input_value(&ids.total_forms), Some("6"));
        assert_eq!(host.document().rows(&ids.container).map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_other_prefix() {
        let prefix = Prefix::new("plans").unwrap();
        let ids = BindingIds::for_prefix(&prefix, "add-plan");
        let mut doc = MemoryDocument::with_bindings(&ids, "1");
        {
            let host = doc.bind(&ids).unwrap();
            RowAppender::new(host, RowTemplate::new(prefix.clone()))
                .add_row()
                .unwrap();
        }
        assert_eq!(doc.input_value("id_plans-TOTAL_FORMS"), Some("2"));
        let row = &doc.rows("plans-container").unwrap()[0];
        assert!(row.inner_html.contains(&format!(
            r#"id="{}""#,
            prefix.field_id(FormCount::Number(1), FieldRole::Delete)
        )));
    }
}
