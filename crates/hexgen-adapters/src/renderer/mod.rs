//! Template rendering adapters.

pub mod tera;

// `self::` disambiguates the child module from the tera crate.
pub use self::tera::TeraRenderer;
