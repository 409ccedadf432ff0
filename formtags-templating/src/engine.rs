//! Environment wiring.
//!
//! The adapter stays out of the rendering logic: it only installs the
//! filter set into a MiniJinja environment. Nothing registers globally;
//! callers decide which environments carry the filters.

use minijinja::Environment;
use tracing::debug;

use crate::filters;

/// Install the form presentation filters into an existing environment.
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("bwrap", filters::bwrap);
    env.add_filter("blabel", filters::blabel);
    env.add_filter("blabel_unsafe", filters::blabel_unsafe);
    env.add_filter("bclass", filters::bclass);
    env.add_filter("bclass_unsafe", filters::bclass_unsafe);
    env.add_filter("bhelptext", filters::bhelptext);
    env.add_filter("bhelptext_unsafe", filters::bhelptext_unsafe);
    env.add_filter("bform", filters::bform);
    env.add_filter("bfilter", filters::bfilter);
    env.add_filter("bexclude", filters::bexclude);
    debug!("registered form presentation filters");
}

/// A fresh environment with the form presentation filters installed.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    register_filters(&mut env);
    env
}
