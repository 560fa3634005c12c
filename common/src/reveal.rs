// entrance animations
//
// blocks start hidden (see style.rs) and get the reveal class the first time they scroll
// into view.  nothing ever takes the class away again

pub const REVEAL_CLASS: &str = "animate-in";

pub const TARGET_CLASSES: [&str; 4] = ["feature-card", "service-card", "step", "contact-item"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Hidden,
    Revealed,
}

impl AnimationState {
    pub fn from_marker(has_reveal_class: bool) -> Self {
        if has_reveal_class {
            AnimationState::Revealed
        } else {
            AnimationState::Hidden
        }
    }

    // feed one intersection report through the state
    //
    // returns true only for the observation that performed hidden -> revealed, which is
    // the caller's cue to apply the class
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (AnimationState::Hidden, true) => {
                *self = AnimationState::Revealed;
                true
            }
            _ => false,
        }
    }
}

// the subset of IntersectionObserverInit we care about
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl From<&crate::config::RevealConfig> for ObserverOptions {
    fn from(config: &crate::config::RevealConfig) -> Self {
        ObserverOptions {
            threshold: config.threshold,
            root_margin: config.root_margin.clone(),
        }
    }
}
