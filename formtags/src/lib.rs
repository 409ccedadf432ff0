//! Template-layer customization of web-form field rendering.
//!
//! `formtags` renders a form field as a fully wrapped block, a label, a
//! help-text span or the bare widget, driven by presentation overrides that
//! template filters layer onto the field one application at a time. The
//! crate is engine-agnostic: everything here is plain values and functions,
//! directly callable from tests; `formtags-templating` adapts it to a
//! template engine.
//!
//! ## Features
//!
//! - **Form model traits**: [`BoundField`] and [`Form`] are the crate's view
//!   of the hosting framework's form model
//! - **Presentation resolution**: [`Presentation`] accumulates overrides as
//!   an immutable value and resolves them into a single rendering
//! - **Safe-string markup**: [`Markup`] ties escaping to construction so
//!   values are encoded exactly once
//! - **Field selection**: [`FieldSelector`] normalizes comma/whitespace
//!   separated field lists for [`select_fields`] and [`exclude_fields`]
//! - **Whole-form rendering**: [`render_form`] wraps every field and joins
//!   the blocks
//!
//! ## Example
//!
//! ```rust
//! use formtags::{Markup, Presentation, TextOverride};
//! use formtags_test_utils::TestField;
//!
//! let field = TestField::new("email", "Email");
//! let markup = Presentation::new(field)
//!     .with_label(TextOverride::Text(Markup::escape("Work email")))
//!     .render();
//! assert_eq!(
//!     markup.as_str(),
//!     "<label for=\"id_email\">Work email</label>"
//! );
//! ```

#![warn(missing_docs)]

mod error;
mod escape;
mod field;
mod form;
mod presentation;
mod selector;

pub use error::{FormtagsError, Result};
pub use escape::Markup;
pub use field::BoundField;
pub use form::{exclude_fields, render_form, select_fields, Form};
pub use presentation::{Presentation, RenderMode, TextOverride};
pub use selector::FieldSelector;
