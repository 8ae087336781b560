//! [`RowHost`] over the live page.

use formset_rows::{
    BindingIds, BindingRole, FormsetError, RowAppender, RowFragment, RowHost, RowTemplate,
};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

/// The bound container and counter of one form set.
pub struct WebHost {
    document: Document,
    container: Element,
    counter: HtmlInputElement,
}

impl WebHost {
    /// Look up all three bindings. Returns the host and the trigger element.
    pub fn bind(document: &Document, ids: &BindingIds) -> Result<(Self, Element), FormsetError> {
        let container = ids.require(
            BindingRole::Container,
            document.get_element_by_id(&ids.container),
        )?;
        let trigger = ids.require(BindingRole::Trigger, document.get_element_by_id(&ids.trigger))?;
        let counter = ids
            .require(
                BindingRole::TotalForms,
                document.get_element_by_id(&ids.total_forms),
            )?
            .dyn_into::<HtmlInputElement>()
            .map_err(|el| FormsetError::WrongElementKind {
                role: BindingRole::TotalForms,
                id: ids.total_forms.clone(),
                found: el.tag_name().to_lowercase(),
            })?;

        let host = Self {
            document: document.clone(),
            container,
            counter,
        };
        Ok((host, trigger))
    }
}

impl RowHost for WebHost {
    fn total_forms(&self) -> Result<String, FormsetError> {
        Ok(self.counter.value())
    }

    fn set_total_forms(&mut self, value: &str) -> Result<(), FormsetError> {
        self.counter.set_value(value);
        Ok(())
    }

    fn append_row(&mut self, row: RowFragment) -> Result<(), FormsetError> {
        let div = self.document.create_element("div").map_err(dom_error)?;
        div.set_class_name(&row.class_name);
        div.set_inner_html(&row.inner_html);
        self.container.append_child(&div).map_err(dom_error)?;
        Ok(())
    }
}

/// Bind the page and register the click handler on the trigger. The handler
/// stays active for as long as the returned listener lives.
pub fn wire(
    document: &Document,
    ids: &BindingIds,
    template: RowTemplate,
) -> Result<EventListener, FormsetError> {
    let (host, trigger) = WebHost::bind(document, ids)?;
    let mut appender = RowAppender::new(host, template);

    Ok(EventListener::new(&trigger, "click", move |_| {
        if let Err(e) = appender.add_row() {
            web_sys::console::error_1(&format!("formset-rows: {e}").into());
        }
    }))
}

fn dom_error(value: JsValue) -> FormsetError {
    FormsetError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
