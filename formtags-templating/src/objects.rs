//! Template value wrappers for fields, forms and presentation states.
//!
//! MiniJinja carries custom Rust values through filter chains as objects;
//! these wrappers are what the filters downcast to. A [`FieldValue`] or
//! [`FormValue`] goes into the template context, a [`PresentationValue`]
//! comes out of a filter and materializes its markup when the template
//! writes it.

use std::fmt;
use std::sync::Arc;

use formtags::{BoundField, Form, Markup, Presentation};
use minijinja::value::{Enumerator, Object, ObjectRepr, Value};

/// The field type the template layer operates on.
pub(crate) type DynField = Arc<dyn BoundField + Send + Sync>;

/// A bound field exposed to templates.
///
/// Attribute access mirrors the field's data (`name`, `help_text`,
/// `errors`); writing the value to output renders the bare widget.
#[derive(Clone)]
pub struct FieldValue {
    field: DynField,
}

impl FieldValue {
    /// Wrap a bound field for template use.
    pub fn new(field: impl BoundField + Send + Sync + 'static) -> Self {
        Self {
            field: Arc::new(field),
        }
    }

    /// Wrap a bound field directly as a template [`Value`].
    pub fn value(field: impl BoundField + Send + Sync + 'static) -> Value {
        Value::from_object(Self::new(field))
    }

    pub(crate) fn from_shared(field: DynField) -> Self {
        Self { field }
    }

    pub(crate) fn field(&self) -> DynField {
        self.field.clone()
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("name", &self.field.name())
            .finish()
    }
}

impl Object for FieldValue {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        match key.as_str()? {
            "name" => Some(Value::from(self.field.name())),
            "help_text" => Some(Value::from(self.field.help_text())),
            "errors" => Some(
                self.field
                    .errors()
                    .iter()
                    .map(|message| Value::from(message.as_str()))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(&["name", "help_text", "errors"])
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field.as_widget(&[]))
    }
}

/// An ordered form exposed to templates.
///
/// `form.name` resolves one bound field; iterating the value yields the
/// bound fields in the form's declared order, mirroring how the underlying
/// form iterates.
#[derive(Debug, Clone)]
pub struct FormValue {
    entries: Vec<(String, Value)>,
}

impl FormValue {
    /// Wrap a form for template use.
    pub fn new<F>(form: F) -> Self
    where
        F: Form,
        F::Field: Send + Sync + 'static,
    {
        let mut entries = Vec::new();
        for name in form.field_names() {
            if let Some(field) = form.field(&name) {
                entries.push((name, FieldValue::value(field)));
            }
        }
        Self { entries }
    }

    /// Wrap a form directly as a template [`Value`].
    pub fn value<F>(form: F) -> Value
    where
        F: Form,
        F::Field: Send + Sync + 'static,
    {
        Value::from_object(Self::new(form))
    }
}

impl Form for FormValue {
    type Field = DynField;

    fn field_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    fn field(&self, name: &str) -> Option<DynField> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .and_then(|(_, value)| value.downcast_object_ref::<FieldValue>())
            .map(FieldValue::field)
    }
}

impl Object for FormValue {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Iterable
    }

    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let name = key.as_str()?;
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value.clone())
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Values(
            self.entries
                .iter()
                .map(|(_, value)| value.clone())
                .collect(),
        )
    }
}

/// A presentation state deferred until template output.
///
/// Filters hand these back so further filters can keep refining the state;
/// writing the value to output materializes the resolved markup.
#[derive(Clone)]
pub struct PresentationValue {
    state: Presentation<DynField>,
}

impl PresentationValue {
    pub(crate) fn new(state: Presentation<DynField>) -> Self {
        Self { state }
    }

    pub(crate) fn state(&self) -> Presentation<DynField> {
        self.state.clone()
    }

    /// Render the state to markup immediately.
    pub fn render(&self) -> Markup {
        self.state.render()
    }
}

impl From<PresentationValue> for Value {
    fn from(value: PresentationValue) -> Self {
        Value::from_object(value)
    }
}

impl fmt::Debug for PresentationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationValue")
            .field("mode", &self.state.mode())
            .finish()
    }
}

impl Object for PresentationValue {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state.render())
    }
}
