use std::{cell::Cell, rc::Rc};

use common::{SiteConfig, config::parse_config};
use tracing::{Level, info, instrument, warn};
use web_sys::{Document, VisibilityState, Window};

use crate::{
    dom::{self, DomError},
    flash, form, nav, reveal, style,
};

// pages may ship overrides as <script type="application/json" id="site-config">
pub const CONFIG_ELEMENT_ID: &str = "site-config";

// the one controller for the page
//
// owns nothing but handles to the window and document; each behavior module gets exactly
// the pieces of config and dom it needs and never sees the others
pub struct Site {
    window: Window,
    document: Document,
    config: SiteConfig,
}

impl Site {
    pub fn new(window: Window, document: Document) -> Self {
        let config = load_config(&document);
        Site {
            window,
            document,
            config,
        }
    }

    // wire every behavior, in a fixed order
    //
    // a behavior whose browser apis fail is skipped with a warning; the rest still run
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn init(&self) -> anyhow::Result<()> {
        let steps: [(&str, Result<(), DomError>); 5] = [
            ("navigation", nav::init(&self.window, &self.document, &self.config.nav)),
            ("scroll animations", reveal::init(&self.document, &self.config.reveal)),
            ("form validation", form::init(&self.document, &self.config.form)),
            ("styles", style::init(&self.document)),
            ("flash messages", flash::init(&self.document, &self.config.flash)),
        ];

        for (name, result) in steps {
            if let Err(err) = result {
                warn!("{name} disabled: {err}");
            }
        }

        watch_visibility(&self.document)?;

        info!("site behaviors ready");
        Ok(())
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(doc) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    match parse_config(&doc) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring malformed site config: {err}");
            SiteConfig::default()
        }
    }
}

fn watch_visibility(document: &Document) -> Result<(), DomError> {
    let visibility_document = document.clone();
    dom::listen(document, "visibilitychange", move |_| {
        if visibility_document.visibility_state() == VisibilityState::Visible {
            info!("site is visible again");
        }
    })?;

    Ok(())
}

// readyState is "loading" until the parser is done, then "interactive" and "complete"
fn content_loaded(ready_state: &str) -> bool {
    ready_state != "loading"
}

// run the controller once the structural content is in place
//
// the script may load before or after DOMContentLoaded, so check the ready state first
pub fn start() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if content_loaded(&document.ready_state()) {
        return Site::new(window, document).init();
    }

    let started = Rc::new(Cell::new(false));
    let ready_document = document.clone();
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if started.replace(true) {
            return;
        }

        if let Err(err) = Site::new(window.clone(), ready_document.clone()).init() {
            warn!("site behaviors failed to start: {err}");
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_only_while_loading() {
        assert!(!content_loaded("loading"));
        assert!(content_loaded("interactive"));
        assert!(content_loaded("complete"));
    }
}
