// page behavior logic shared by the webapp
//
// everything here is plain rust over strings and numbers so it can be tested off the
// browser; the webapp crate is responsible for getting those values in and out of the dom

pub mod config;
pub mod flash;
pub mod nav;
pub mod reveal;
pub mod style;
pub mod validate;

pub use config::SiteConfig;
