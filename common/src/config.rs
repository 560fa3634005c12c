use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// site configuration
//
// every tunable used by the page behaviors lives here.  the defaults are the values the
// markup and stylesheets are designed around, so a page normally never overrides anything
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub flash: FlashConfig,
    pub form: FormConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // ids
    pub toggle_id: String,
    pub menu_id: String,

    // selectors
    pub link_selector: String,
    pub navbar_selector: String,
    pub section_selector: String,

    // vertical scroll past which the header switches to its compact look
    pub scrolled_threshold: f64,

    // space reserved for the fixed header when jumping to an anchor
    pub header_offset: f64,

    // a section becomes current this far before its top reaches the viewport
    pub section_lookahead: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            toggle_id: String::from("hamburger"),
            menu_id: String::from("nav-menu"),
            link_selector: String::from(".nav-link"),
            navbar_selector: String::from(".navbar"),
            section_selector: String::from("section[id]"),
            scrolled_threshold: 50.0,
            header_offset: 80.0,
            section_lookahead: 100.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    pub target_classes: Vec<String>,

    // fraction of the element that must be visible
    pub threshold: f64,

    // css margin string handed to the intersection observer as-is
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            target_classes: crate::reveal::TARGET_CLASSES
                .iter()
                .map(|c| String::from(*c))
                .collect(),
            threshold: 0.1,
            root_margin: String::from("0px 0px -50px 0px"),
        }
    }
}

impl RevealConfig {
    // ".feature-card, .service-card, ..."
    pub fn selector(&self) -> String {
        self.target_classes
            .iter()
            .map(|c| format!(".{c}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct FlashConfig {
    pub selector: String,
    pub delay_ms: u32,
    pub fade_ms: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        FlashConfig {
            selector: String::from(".flash-message"),
            delay_ms: 5000,
            fade_ms: 300,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_selector: String,
    pub field_selector: String,
    pub required_selector: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            form_selector: String::from(".contact-form"),
            field_selector: String::from("input, textarea"),
            required_selector: String::from("input[required], textarea[required]"),
        }
    }
}

// parse an override document
//
// a bad document must not take the page down, so the caller decides what to do with the
// error (the webapp falls back to the defaults)
#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig, serde_json::Error> {
    debug!("parsing site config override");

    let config: SiteConfig = serde_json::from_str(doc)?;

    debug!("successfully parsed site config override");
    Ok(config)
}
