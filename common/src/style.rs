use constcat::concat;

// styles the behaviors depend on
//
// the page's own stylesheet knows nothing about the animation or error states, so these
// get injected once at startup.  the class names must line up with reveal.rs/validate.rs

const REVEAL_STYLES: &str = r#"
.feature-card, .service-card, .step, .contact-item {
  opacity: 0;
  transform: translateY(30px);
  transition: all 0.6s ease;
}

.feature-card.animate-in, .service-card.animate-in, .step.animate-in, .contact-item.animate-in {
  opacity: 1;
  transform: translateY(0);
}
"#;

const FIELD_ERROR_STYLES: &str = r#"
.field-error {
  color: var(--error, #ef4444);
  font-size: 0.875rem;
  margin-top: 0.25rem;
  display: block;
}

input.error, textarea.error {
  border-color: var(--error, #ef4444);
  box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
}
"#;

const FLASH_STYLES: &str = r#"
.flash-message {
  transition: opacity 0.3s ease;
}
"#;

pub const SITE_STYLES: &str = concat!(REVEAL_STYLES, FIELD_ERROR_STYLES, FLASH_STYLES);

// marks the injected <style> so a second init can tell it is already there
pub const STYLE_ELEMENT_ID: &str = "site-behavior-styles";
