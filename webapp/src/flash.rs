use common::{
    config::FlashConfig,
    flash::{FADED_OPACITY, FlashPhase},
};
use gloo_timers::callback::Timeout;
use tracing::{Level, debug, instrument};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, DomError};

fn apply_phase(message: &Element, phase: FlashPhase) {
    match phase {
        FlashPhase::Visible => {}
        FlashPhase::Fading => {
            if let Some(html) = message.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("opacity", FADED_OPACITY);
            }
        }
        FlashPhase::Removed => message.remove(),
    }
}

// every banner present at startup fades out and disappears on a fixed schedule
#[instrument(level=Level::DEBUG, skip_all)]
pub fn init(document: &Document, config: &FlashConfig) -> Result<(), DomError> {
    let messages = dom::query_all(document, &config.selector)?;

    let (delay_ms, fade_ms) = (config.delay_ms, config.fade_ms);
    for message in &messages {
        let message = message.clone();

        Timeout::new(delay_ms, move || {
            apply_phase(&message, FlashPhase::at(delay_ms, delay_ms, fade_ms));

            Timeout::new(fade_ms, move || {
                apply_phase(&message, FlashPhase::at(delay_ms.saturating_add(fade_ms), delay_ms, fade_ms));
            })
            .forget();
        })
        .forget();
    }

    debug!({ messages = messages.len() }, "flash messages scheduled");
    Ok(())
}
