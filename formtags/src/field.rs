//! The bound-field abstraction.
//!
//! The hosting web framework owns the form model; this crate only consumes
//! it. [`BoundField`] is the view of one field with its current value and
//! validation state, exposing just the data and render operations the
//! presentation resolver needs.

use std::sync::Arc;

use crate::escape::Markup;

/// One form field bound to its current value and validation state.
///
/// Implementations render their own data (label text, widget, error block)
/// and are responsible for escaping it; the resolver composes the returned
/// markup without re-encoding.
pub trait BoundField {
    /// The field's name within its form.
    fn name(&self) -> &str;

    /// Validation messages for the field, empty if it is valid.
    fn errors(&self) -> &[String];

    /// The field's raw help text. The resolver escapes it on render.
    fn help_text(&self) -> &str;

    /// The field's error-block markup, empty when the field is valid.
    fn render_errors(&self) -> Markup;

    /// Render a `<label>` tag bound to the field.
    ///
    /// `contents` of `None` means the field derives its standard label text
    /// and association target itself; `attrs` carries extra attributes for
    /// the tag, values already escaped by the caller.
    fn label_tag(&self, contents: Option<&Markup>, attrs: &[(&str, &str)]) -> Markup;

    /// Render the field's widget with the given extra attributes.
    fn as_widget(&self, attrs: &[(&str, &str)]) -> Markup;
}

impl<T: BoundField + ?Sized> BoundField for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn errors(&self) -> &[String] {
        (**self).errors()
    }

    fn help_text(&self) -> &str {
        (**self).help_text()
    }

    fn render_errors(&self) -> Markup {
        (**self).render_errors()
    }

    fn label_tag(&self, contents: Option<&Markup>, attrs: &[(&str, &str)]) -> Markup {
        (**self).label_tag(contents, attrs)
    }

    fn as_widget(&self, attrs: &[(&str, &str)]) -> Markup {
        (**self).as_widget(attrs)
    }
}
