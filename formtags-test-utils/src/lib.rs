//! Shared test fixtures for the formtags crates.
//!
//! [`TestField`] is a minimal text-input field and [`TestForm`] an ordered
//! collection of them: just enough form model to exercise the presentation
//! pipeline without a web framework behind it.

#![warn(missing_docs)]

use formtags::{BoundField, Form, Markup};
use indexmap::IndexMap;

/// A text-input form field with settable label, help text and errors.
#[derive(Debug, Clone)]
pub struct TestField {
    name: String,
    label: String,
    help_text: String,
    errors: Vec<String>,
}

impl TestField {
    /// Create a valid field with no help text.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            help_text: String::new(),
            errors: Vec::new(),
        }
    }

    /// Set the raw help text.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    /// Add a validation error message.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    fn id(&self) -> String {
        format!("id_{}", self.name)
    }

    fn render_attrs(attrs: &[(&str, &str)]) -> String {
        attrs
            .iter()
            .map(|(name, value)| format!(" {name}=\"{value}\""))
            .collect()
    }
}

impl BoundField for TestField {
    fn name(&self) -> &str {
        &self.name
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }

    fn help_text(&self) -> &str {
        &self.help_text
    }

    fn render_errors(&self) -> Markup {
        if self.errors.is_empty() {
            return Markup::empty();
        }
        let items: String = self
            .errors
            .iter()
            .map(|message| format!("<li>{}</li>", Markup::escape(message)))
            .collect();
        Markup::raw(format!("<ul class=\"errorlist\">{items}</ul>"))
    }

    fn label_tag(&self, contents: Option<&Markup>, attrs: &[(&str, &str)]) -> Markup {
        let contents = match contents {
            Some(contents) => contents.clone(),
            None => Markup::escape(&self.label),
        };
        Markup::raw(format!(
            "<label for=\"{id}\"{attrs}>{contents}</label>",
            id = self.id(),
            attrs = Self::render_attrs(attrs),
        ))
    }

    fn as_widget(&self, attrs: &[(&str, &str)]) -> Markup {
        Markup::raw(format!(
            "<input type=\"text\" name=\"{name}\" id=\"{id}\"{attrs}>",
            name = self.name,
            id = self.id(),
            attrs = Self::render_attrs(attrs),
        ))
    }
}

/// An ordered collection of [`TestField`]s keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TestForm {
    fields: IndexMap<String, TestField>,
}

impl TestForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keyed by its name. Declaration order is insertion
    /// order.
    pub fn with_field(mut self, field: TestField) -> Self {
        self.fields.insert(field.name().to_owned(), field);
        self
    }

    /// Iterate the fields in declared order.
    pub fn fields(&self) -> impl Iterator<Item = &TestField> {
        self.fields.values()
    }
}

impl Form for TestForm {
    type Field = TestField;

    fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn field(&self, name: &str) -> Option<TestField> {
        self.fields.get(name).cloned()
    }
}

/// The three-field form used across the test suites: `foo` (plain), `bar`
/// (help text), `baz` (markup-significant label and help text).
pub fn sample_form() -> TestForm {
    TestForm::new()
        .with_field(TestField::new("foo", "Foo"))
        .with_field(TestField::new("bar", "Bar").with_help_text("help bar"))
        .with_field(TestField::new("baz", "<baz>").with_help_text("<baz>"))
}

/// [`sample_form`] with a required-value error on `foo`.
pub fn sample_invalid_form() -> TestForm {
    TestForm::new()
        .with_field(TestField::new("foo", "Foo").with_error("This field is required."))
        .with_field(TestField::new("bar", "Bar").with_help_text("help bar"))
        .with_field(TestField::new("baz", "<baz>").with_help_text("<baz>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_markup() {
        let field = TestField::new("foo", "Foo");
        assert_eq!(
            field.as_widget(&[]).as_str(),
            "<input type=\"text\" name=\"foo\" id=\"id_foo\">"
        );
        assert_eq!(
            field.as_widget(&[("class", "asdf")]).as_str(),
            "<input type=\"text\" name=\"foo\" id=\"id_foo\" class=\"asdf\">"
        );
    }

    #[test]
    fn test_label_tag_escapes_own_label() {
        let field = TestField::new("baz", "<baz>");
        assert_eq!(
            field.label_tag(None, &[]).as_str(),
            "<label for=\"id_baz\">&lt;baz&gt;</label>"
        );
    }

    #[test]
    fn test_label_tag_override_contents() {
        let field = TestField::new("foo", "Foo");
        let contents = Markup::escape("asdf");
        assert_eq!(
            field.label_tag(Some(&contents), &[]).as_str(),
            "<label for=\"id_foo\">asdf</label>"
        );
    }

    #[test]
    fn test_error_markup() {
        let field = TestField::new("foo", "Foo").with_error("required & missing");
        assert_eq!(
            field.render_errors().as_str(),
            "<ul class=\"errorlist\"><li>required &amp; missing</li></ul>"
        );
        assert_eq!(TestField::new("foo", "Foo").render_errors().as_str(), "");
    }

    #[test]
    fn test_form_declared_order() {
        let form = sample_form();
        assert_eq!(form.field_names(), ["foo", "bar", "baz"]);
        let labels: Vec<&str> = form.fields().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Foo", "Bar", "<baz>"]);
    }

    #[test]
    fn test_form_lookup() {
        let form = sample_form();
        assert!(form.field("bar").is_some());
        assert!(form.field("qux").is_none());
    }
}
