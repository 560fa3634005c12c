use common::style::{SITE_STYLES, STYLE_ELEMENT_ID};
use tracing::{Level, debug, instrument};
use web_sys::Document;

use crate::dom::DomError;

#[instrument(level=Level::DEBUG, skip_all)]
pub fn init(document: &Document) -> Result<(), DomError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }

    let head = document.head().ok_or(DomError::NoHead)?;

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(SITE_STYLES));
    head.append_child(&style)?;

    debug!("behavior styles injected");
    Ok(())
}
