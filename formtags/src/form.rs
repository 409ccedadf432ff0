//! Form-level operations: subset selection, exclusion and whole-form
//! rendering.

use std::collections::HashSet;

use crate::error::{FormtagsError, Result};
use crate::escape::Markup;
use crate::field::BoundField;
use crate::presentation::Presentation;
use crate::selector::FieldSelector;

/// An ordered mapping of field name to bound field.
///
/// The hosting framework owns the form; this trait exposes the two
/// operations the crate needs: lookup by name and the declared field order.
pub trait Form {
    /// The bound-field type the form hands out.
    type Field: BoundField;

    /// Field names in the form's declared order.
    fn field_names(&self) -> Vec<String>;

    /// Look up one bound field by name.
    fn field(&self, name: &str) -> Option<Self::Field>;
}

/// Return the form's bound fields for exactly the selected names, in the
/// selector's order (not the form's declaration order).
///
/// An unknown name is fatal: the lookup miss propagates as
/// [`FormtagsError::UnknownField`].
pub fn select_fields<F: Form>(form: &F, selector: &FieldSelector) -> Result<Vec<F::Field>> {
    selector
        .names()
        .iter()
        .map(|name| {
            form.field(name)
                .ok_or_else(|| FormtagsError::UnknownField { name: name.clone() })
        })
        .collect()
}

/// Return all of the form's bound fields except the excluded names, in the
/// form's declared order.
pub fn exclude_fields<F: Form>(form: &F, selector: &FieldSelector) -> Vec<F::Field> {
    let excluded: HashSet<&str> = selector.names().iter().map(String::as_str).collect();
    form.field_names()
        .iter()
        .filter(|name| !excluded.contains(name.as_str()))
        .filter_map(|name| form.field(name))
        .collect()
}

/// Render every field of the form through the wrapped pipeline, joined with
/// newlines. An absent form renders as empty markup.
pub fn render_form<F: Form>(form: Option<&F>) -> Markup {
    let Some(form) = form else {
        return Markup::empty();
    };
    let rendered: Vec<String> = form
        .field_names()
        .iter()
        .filter_map(|name| form.field(name))
        .map(|field| {
            Presentation::new(field)
                .with_wrap(false)
                .render()
                .into_string()
        })
        .collect();
    Markup::raw(rendered.join("\n"))
}
