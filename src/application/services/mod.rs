//! Application services orchestrating storage and code generation.

mod link_registry;
mod redirect_resolver;

pub use link_registry::LinkRegistry;
pub use redirect_resolver::RedirectResolver;
