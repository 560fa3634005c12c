use common::{
    config::RevealConfig,
    reveal::{AnimationState, ObserverOptions, REVEAL_CLASS},
};
use js_sys::Array;
use tracing::{Level, debug, instrument};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{self, DomError};

// one observer for every animated block
//
// the observer is never disconnected; once a block has its class, further reports for it
// fall through AnimationState::observe without doing anything
#[instrument(level=Level::DEBUG, skip_all)]
pub fn init(document: &Document, config: &RevealConfig) -> Result<(), DomError> {
    let targets = dom::query_all(document, &config.selector())?;
    if targets.is_empty() {
        return Ok(());
    }

    let options = ObserverOptions::from(config);
    let observer_init = IntersectionObserverInit::new();
    observer_init.set_threshold(&JsValue::from_f64(options.threshold));
    observer_init.set_root_margin(&options.root_margin);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };

                let target = entry.target();
                let mut state = AnimationState::from_marker(dom::has_class(&target, REVEAL_CLASS));
                if state.observe(entry.is_intersecting()) {
                    dom::set_class(&target, REVEAL_CLASS, true);
                }
            }
        },
    );

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &observer_init)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }

    debug!({ targets = targets.len() }, "scroll animations wired");
    Ok(())
}
