use common::{
    config::FormConfig,
    validate::{
        ERROR_CLASS, ERROR_TEXT_CLASS, FieldKind, FieldView, clear_field_error, validate_field,
        validate_form,
    },
};
use tracing::{Level, debug, instrument, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{self, DomError};

// an input or textarea inside the contact form
#[derive(Clone)]
struct FormField {
    element: Element,
}

impl FormField {
    fn new(element: Element) -> Self {
        FormField { element }
    }

    // the error span always sits directly after its field
    fn error_element(&self) -> Option<Element> {
        self.element
            .next_element_sibling()
            .filter(|sibling| dom::has_class(sibling, ERROR_TEXT_CLASS))
    }
}

impl FieldView for FormField {
    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn is_required(&self) -> bool {
        self.element.has_attribute("required")
    }

    fn kind(&self) -> FieldKind {
        match self.element.dyn_ref::<HtmlInputElement>() {
            Some(input) => FieldKind::from(input.type_().as_str()),
            None => FieldKind::Text,
        }
    }

    fn set_error_marker(&self, on: bool) {
        dom::set_class(&self.element, ERROR_CLASS, on);
    }

    fn has_error_marker(&self) -> bool {
        dom::has_class(&self.element, ERROR_CLASS)
    }

    fn error_text(&self) -> Option<String> {
        self.error_element()
            .map(|el| el.text_content().unwrap_or_default())
    }

    fn insert_error_text(&self, message: &str) {
        let Some(document) = self.element.owner_document() else {
            return;
        };
        let Ok(span) = document.create_element("span") else {
            return;
        };

        span.set_class_name(ERROR_TEXT_CLASS);
        span.set_text_content(Some(message));
        let _ = self.element.after_with_node_1(&span);
    }

    fn remove_error_text(&self) {
        if let Some(el) = self.error_element() {
            el.remove();
        }
    }
}

// a failed lookup of the required fields blocks the submission instead of waving it through
fn submission_allowed<F: FieldView>(fields: Result<Vec<F>, DomError>) -> bool {
    match fields {
        Ok(fields) => {
            let valid = validate_form(fields.iter());
            if !valid {
                debug!("contact form invalid, submission blocked");
            }
            valid
        }
        Err(err) => {
            warn!("could not look up required fields, submission blocked: {err}");
            false
        }
    }
}

#[instrument(level=Level::DEBUG, skip_all)]
pub fn init(document: &Document, config: &FormConfig) -> Result<(), DomError> {
    let Some(form) = document.query_selector(&config.form_selector)? else {
        return Ok(());
    };

    // a selector the browser rejects disables the module here rather than on first submit
    dom::query_all_in(&form, &config.required_selector)?;

    // the required set is looked up again on every submit in case the markup changed
    let submit_form = form.clone();
    let required_selector = config.required_selector.clone();
    dom::listen(&form, "submit", move |event| {
        let fields = dom::query_all_in(&submit_form, &required_selector)
            .map(|found| found.into_iter().map(FormField::new).collect::<Vec<_>>());

        // the browser carries on with the real submission when everything passes
        if !submission_allowed(fields) {
            event.prevent_default();
        }
    })?;

    let fields = dom::query_all_in(&form, &config.field_selector)?;
    for element in &fields {
        let field = FormField::new(element.clone());
        dom::listen(element, "blur", move |_| {
            let _ = validate_field(&field);
        })?;

        // typing only clears; the next blur or submit decides whether it is valid
        let field = FormField::new(element.clone());
        dom::listen(element, "input", move |_| {
            clear_field_error(&field);
        })?;
    }

    debug!({ fields = fields.len() }, "form validation wired");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    struct StubField {
        value: &'static str,
        marker: Cell<bool>,
        error: RefCell<Option<String>>,
    }

    impl StubField {
        fn new(value: &'static str) -> Self {
            StubField {
                value,
                marker: Cell::new(false),
                error: RefCell::new(None),
            }
        }
    }

    impl FieldView for StubField {
        fn value(&self) -> String {
            String::from(self.value)
        }

        fn is_required(&self) -> bool {
            true
        }

        fn kind(&self) -> FieldKind {
            FieldKind::Text
        }

        fn set_error_marker(&self, on: bool) {
            self.marker.set(on);
        }

        fn has_error_marker(&self) -> bool {
            self.marker.get()
        }

        fn error_text(&self) -> Option<String> {
            self.error.borrow().clone()
        }

        fn insert_error_text(&self, message: &str) {
            *self.error.borrow_mut() = Some(String::from(message));
        }

        fn remove_error_text(&self) {
            *self.error.borrow_mut() = None;
        }
    }

    #[test]
    fn failed_required_lookup_blocks_submission() {
        let fields: Result<Vec<StubField>, DomError> =
            Err(DomError::Js(String::from("SyntaxError: '[[' is not a valid selector")));

        assert!(!submission_allowed(fields));
    }

    #[test]
    fn missing_required_value_blocks_submission() {
        let fields = vec![StubField::new("Ada"), StubField::new("  ")];

        assert!(!submission_allowed(Ok(fields)));
    }

    #[test]
    fn filled_required_fields_allow_submission() {
        assert!(submission_allowed(Ok(vec![StubField::new("Ada"), StubField::new("hello")])));
        assert!(submission_allowed(Ok(Vec::<StubField>::new())));
    }
}
