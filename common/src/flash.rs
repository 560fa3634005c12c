// flash message lifecycle
//
// each banner is fully visible for the delay, fades for the fade duration, and is then
// removed from the document.  there is no way to pause or dismiss it early

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashPhase {
    Visible,
    Fading,
    Removed,
}

impl FlashPhase {
    pub fn at(elapsed_ms: u32, delay_ms: u32, fade_ms: u32) -> Self {
        if elapsed_ms < delay_ms {
            FlashPhase::Visible
        } else if elapsed_ms < delay_ms.saturating_add(fade_ms) {
            FlashPhase::Fading
        } else {
            FlashPhase::Removed
        }
    }
}

// inline opacity applied when a banner starts fading
pub const FADED_OPACITY: &str = "0";

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_timeline() {
        assert_eq!(FlashPhase::at(0, 5000, 300), FlashPhase::Visible);
        assert_eq!(FlashPhase::at(4999, 5000, 300), FlashPhase::Visible);
        assert_eq!(FlashPhase::at(5000, 5000, 300), FlashPhase::Fading);
        assert_eq!(FlashPhase::at(5299, 5000, 300), FlashPhase::Fading);
        assert_eq!(FlashPhase::at(5300, 5000, 300), FlashPhase::Removed);
    }

    #[test]
    fn banner_is_transparent_once_fading() {
        assert_eq!(FADED_OPACITY, "0");
    }

    #[test]
    fn no_overflow_near_max() {
        assert_eq!(FlashPhase::at(u32::MAX - 1, u32::MAX - 10, 300), FlashPhase::Fading);
    }

    proptest! {
        #[test]
        fn phases_are_monotonic(a in 0u32..20_000, b in 0u32..20_000) {
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let rank = |p: FlashPhase| match p {
                FlashPhase::Visible => 0,
                FlashPhase::Fading => 1,
                FlashPhase::Removed => 2,
            };

            prop_assert!(rank(FlashPhase::at(early, 5000, 300)) <= rank(FlashPhase::at(late, 5000, 300)));
        }
    }
}
