//! Resolution of client options from layered sources

mod options_resolver;

pub use options_resolver::OptionsResolver;
