//! The form presentation filter set.
//!
//! Every field filter accepts either a bound field or the output of a
//! previous filter, layers its own override onto the accumulated state and
//! hands back a value that renders at template output time. The `*_unsafe`
//! variants skip argument escaping and trust the caller's markup.

use formtags::{FieldSelector, Markup, Presentation, TextOverride};
use minijinja::value::Value;
use minijinja::{Error, ErrorKind};
use tracing::debug;

use crate::objects::{DynField, FieldValue, FormValue, PresentationValue};

/// Conditionally escape a filter argument.
///
/// Values the engine already marks safe pass through verbatim; everything
/// else is entity-encoded, exactly once.
fn escape_argument(value: &Value) -> Markup {
    if value.is_safe() {
        Markup::raw(value.to_string())
    } else {
        Markup::escape(&value.to_string())
    }
}

/// Accept a filter argument as pre-trusted markup.
fn raw_argument(value: &Value) -> Markup {
    Markup::raw(value.to_string())
}

/// Build the working state for a filter input: a fresh state for a bound
/// field, a copy of the accumulated state for a chained value, an empty
/// state for a missing one.
fn presentation_of(value: &Value) -> Result<Presentation<DynField>, Error> {
    if value.is_undefined() || value.is_none() || value.as_str() == Some("") {
        return Ok(Presentation::missing());
    }
    if let Some(prior) = value.downcast_object_ref::<PresentationValue>() {
        return Ok(prior.state());
    }
    if let Some(field) = value.downcast_object_ref::<FieldValue>() {
        return Ok(Presentation::new(field.field()));
    }
    Err(Error::new(
        ErrorKind::InvalidOperation,
        "filter expects a form field or a chained field presentation",
    ))
}

/// Parse a field selector argument: a single comma/whitespace separated
/// string or a sequence of name strings.
fn selector_of(value: &Value) -> Result<FieldSelector, Error> {
    if let Some(spec) = value.as_str() {
        return Ok(FieldSelector::parse(spec));
    }
    if let Ok(items) = value.try_iter() {
        let mut names = Vec::new();
        for item in items {
            match item.as_str() {
                Some(name) => names.push(name.to_owned()),
                None => {
                    return Err(Error::new(
                        ErrorKind::InvalidOperation,
                        "field selector entries must be strings",
                    ))
                }
            }
        }
        return Ok(FieldSelector::new(names));
    }
    Err(Error::new(
        ErrorKind::InvalidOperation,
        "field selector must be a string or a sequence of names",
    ))
}

fn field_values(fields: Vec<DynField>) -> Value {
    fields
        .into_iter()
        .map(|field| Value::from_object(FieldValue::from_shared(field)))
        .collect()
}

/// Render the field fully wrapped: errors, label, widget and help text in
/// the standard block. The optional argument inserts a line break after the
/// label.
pub fn bwrap(value: Value, break_after_label: Option<bool>) -> Result<Value, Error> {
    let state = presentation_of(&value)?;
    Ok(PresentationValue::new(state.with_wrap(break_after_label.unwrap_or(false))).into())
}

/// Override the field's label, escaping the argument. Without an argument
/// the field's own label is rendered.
pub fn blabel(value: Value, label: Option<Value>) -> Result<Value, Error> {
    let state = presentation_of(&value)?;
    let label = match &label {
        Some(label) => TextOverride::Text(escape_argument(label)),
        None => TextOverride::FieldDefault,
    };
    Ok(PresentationValue::new(state.with_label(label)).into())
}

/// Override the field's label with pre-trusted markup.
pub fn blabel_unsafe(value: Value, label: Option<Value>) -> Result<Value, Error> {
    let state = presentation_of(&value)?;
    let label = match &label {
        Some(label) => TextOverride::Text(raw_argument(label)),
        None => TextOverride::FieldDefault,
    };
    Ok(PresentationValue::new(state.with_label(label)).into())
}

/// Set the CSS class applied to the rendered widget, escaping the argument.
/// Without an argument a previously set class is cleared.
pub fn bclass(value: Value, class: Option<Value>) -> Result<Value, Error> {
    let state = presentation_of(&value)?;
    let class = class.as_ref().map(escape_argument);
    Ok(PresentationValue::new(state.with_class(class)).into())
}

/// Set the CSS class applied to the rendered widget from pre-trusted
/// markup.
pub fn bclass_unsafe(value: Value, class: Option<Value>) -> Result<Value, Error> {
    let state = presentation_of(&value)?;
    let class = class.as_ref().map(raw_argument);
    Ok(PresentationValue::new(state.with_class(class)).into())
}

/// Override the field's help text, escaping the argument. Without an
/// argument the field's own help text is rendered.
pub fn bhelptext(value: Value, help_text: Option<Value>) -> Result<Value, Error> {
    let state = presentation_of(&value)?;
    let help_text = match &help_text {
        Some(help_text) => TextOverride::Text(escape_argument(help_text)),
        None => TextOverride::FieldDefault,
    };
    Ok(PresentationValue::new(state.with_help_text(help_text)).into())
}

/// Override the field's help text with pre-trusted markup.
pub fn bhelptext_unsafe(value: Value, help_text: Option<Value>) -> Result<Value, Error> {
    let state = presentation_of(&value)?;
    let help_text = match &help_text {
        Some(help_text) => TextOverride::Text(raw_argument(help_text)),
        None => TextOverride::FieldDefault,
    };
    Ok(PresentationValue::new(state.with_help_text(help_text)).into())
}

/// Render every field wrapped, joined with newlines.
///
/// Accepts a form or a sequence of fields (such as `bfilter` output); a
/// missing form renders as empty output.
pub fn bform(value: Value) -> Result<Value, Error> {
    if value.is_undefined() || value.is_none() {
        debug!("rendering empty output for a missing form");
        return Ok(Value::from_safe_string(String::new()));
    }
    if let Some(form) = value.downcast_object_ref::<FormValue>() {
        return Ok(Value::from_safe_string(
            formtags::render_form(Some(form)).into_string(),
        ));
    }
    let items = value.try_iter().map_err(|_| {
        Error::new(
            ErrorKind::InvalidOperation,
            "bform expects a form or a sequence of form fields",
        )
    })?;
    let mut rendered = Vec::new();
    for item in items {
        rendered.push(
            presentation_of(&item)?
                .with_wrap(false)
                .render()
                .into_string(),
        );
    }
    Ok(Value::from_safe_string(rendered.join("\n")))
}

/// Select an ordered subset of the form's fields by name.
///
/// The subset comes back in the selector's order. An unknown name is fatal
/// to the render.
pub fn bfilter(value: Value, selector: Value) -> Result<Value, Error> {
    let Some(form) = value.downcast_object_ref::<FormValue>() else {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "bfilter expects a form",
        ));
    };
    let selector = selector_of(&selector)?;
    let fields = formtags::select_fields(form, &selector)
        .map_err(|err| Error::new(ErrorKind::InvalidOperation, err.to_string()))?;
    Ok(field_values(fields))
}

/// Return all of the form's fields except the named ones, in the form's
/// declared order.
pub fn bexclude(value: Value, selector: Value) -> Result<Value, Error> {
    let Some(form) = value.downcast_object_ref::<FormValue>() else {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "bexclude expects a form",
        ));
    };
    let selector = selector_of(&selector)?;
    Ok(field_values(formtags::exclude_fields(form, &selector)))
}
