//! MiniJinja integration for `formtags`.
//!
//! This crate adapts the engine-agnostic presentation core to MiniJinja:
//! value wrappers that put bound fields and forms into a template context,
//! and the filter set templates chain onto them. Filters refine an
//! accumulated presentation state; the markup materializes when the final
//! value is written to output.
//!
//! ## Filters
//!
//! - `bwrap` — full wrapper block, optional line break after the label
//! - `blabel` / `blabel_unsafe` — label override (escaped / raw)
//! - `bclass` / `bclass_unsafe` — widget CSS class override
//! - `bhelptext` / `bhelptext_unsafe` — help-text override (escaped / raw)
//! - `bform` — render a whole form (or field sequence) wrapped
//! - `bfilter` / `bexclude` — ordered field subsets by name
//!
//! ## Example
//!
//! ```rust
//! use formtags_templating::{environment, FormValue};
//! use formtags_test_utils::sample_form;
//! use minijinja::context;
//!
//! let env = environment();
//! let out = env
//!     .render_str(
//!         "{{ form.foo | blabel }}",
//!         context! { form => FormValue::value(sample_form()) },
//!     )
//!     .unwrap();
//! assert_eq!(out, "<label for=\"id_foo\">Foo</label>");
//! ```

#![warn(missing_docs)]

mod engine;
pub mod filters;
mod objects;

pub use engine::{environment, register_filters};
pub use objects::{FieldValue, FormValue, PresentationValue};
