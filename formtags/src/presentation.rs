//! Field presentation resolution.
//!
//! [`Presentation`] pairs one bound field with the overrides accumulated
//! from a chain of filter applications and resolves them into a single
//! rendering: the standard wrapper block, the label alone, the help-text
//! span alone, or the bare widget. States are immutable values; each filter
//! application copies the prior state and overlays its own key, and nothing
//! is rendered until the final value is written out.

use tracing::debug;

use crate::escape::Markup;
use crate::field::BoundField;

/// CSS class attached to the label of a field with validation errors.
const LABEL_ERROR_CLASS: &str = "error";

/// Line-break marker inserted after the label in wrapped mode.
const BR_TAG: &str = "<br />";

/// Override state for a text property that can fall back to the field's own
/// value.
///
/// The three states are distinct on purpose: a property that was never
/// requested ([`Unset`](TextOverride::Unset)) does not drive rendering at
/// all, while one requested without a value
/// ([`FieldDefault`](TextOverride::FieldDefault)) selects the rendering with
/// the field's own text. An explicit empty string is a regular
/// [`Text`](TextOverride::Text) value, not a fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextOverride {
    /// No override requested.
    #[default]
    Unset,
    /// Override requested without a value; use the field's own text.
    FieldDefault,
    /// Explicit replacement text, already escaping-safe.
    Text(Markup),
}

impl TextOverride {
    /// Whether this override participates in render-mode selection.
    pub fn is_set(&self) -> bool {
        !matches!(self, TextOverride::Unset)
    }
}

/// The rendering a [`Presentation`] resolves to.
///
/// Selection walks the fixed priority order wrap > label > help text >
/// field and takes the first property that is set. Wrapping subsumes the
/// other three renderings and a label subsumes help text and the widget, so
/// the most complete output requested anywhere in a filter chain wins,
/// independent of application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The full wrapper block: errors, label, widget and help text.
    Wrapped,
    /// The `<label>` tag only.
    Label,
    /// The help-text span only.
    HelpText,
    /// The bare widget.
    FieldOnly,
}

/// One field plus the presentation overrides accumulated so far.
///
/// Every `with_*` builder consumes the state and returns a new one with the
/// single key replaced, so chains are referentially transparent and a clone
/// of any intermediate state can be replayed or shared freely.
#[derive(Debug, Clone)]
pub struct Presentation<F> {
    field: Option<F>,
    wrap: Option<bool>,
    label: TextOverride,
    class: Option<Markup>,
    help_text: TextOverride,
}

impl<F: BoundField> Presentation<F> {
    /// Start an all-default presentation of `field`.
    pub fn new(field: F) -> Self {
        Self {
            field: Some(field),
            wrap: None,
            label: TextOverride::Unset,
            class: None,
            help_text: TextOverride::Unset,
        }
    }

    /// A presentation with no field behind it.
    ///
    /// Template lookups of nonexistent fields land here; the state renders
    /// as empty markup instead of failing.
    pub fn missing() -> Self {
        Self {
            field: None,
            wrap: None,
            label: TextOverride::Unset,
            class: None,
            help_text: TextOverride::Unset,
        }
    }

    /// Request the fully wrapped rendering.
    ///
    /// `break_after_label` inserts a `<br />` between the label and the
    /// widget.
    pub fn with_wrap(mut self, break_after_label: bool) -> Self {
        self.wrap = Some(break_after_label);
        self
    }

    /// Replace the label override.
    pub fn with_label(mut self, label: TextOverride) -> Self {
        self.label = label;
        self
    }

    /// Replace the CSS class applied to the widget, or clear it with `None`.
    pub fn with_class(mut self, class: Option<Markup>) -> Self {
        self.class = class;
        self
    }

    /// Replace the help-text override.
    pub fn with_help_text(mut self, help_text: TextOverride) -> Self {
        self.help_text = help_text;
        self
    }

    /// The rendering this state currently resolves to.
    pub fn mode(&self) -> RenderMode {
        if self.wrap.is_some() {
            RenderMode::Wrapped
        } else if self.label.is_set() {
            RenderMode::Label
        } else if self.help_text.is_set() {
            RenderMode::HelpText
        } else {
            RenderMode::FieldOnly
        }
    }

    /// Materialize the resolved rendering.
    ///
    /// A missing field renders as empty markup; everything else dispatches
    /// on [`mode`](Self::mode).
    pub fn render(&self) -> Markup {
        let Some(field) = &self.field else {
            debug!("rendering empty output for a missing form field");
            return Markup::empty();
        };
        match self.mode() {
            RenderMode::Wrapped => self.render_wrapped(field),
            RenderMode::Label => self.render_label(field),
            RenderMode::HelpText => self.render_help_text(field),
            RenderMode::FieldOnly => self.render_field(field),
        }
    }

    fn render_wrapped(&self, field: &F) -> Markup {
        let br = if self.wrap.unwrap_or(false) { BR_TAG } else { "" };
        Markup::raw(format!(
            "<div class=\"fieldWrapper\">{errors}{label} :{br}{widget}{help_text}</div>",
            errors = field.render_errors(),
            label = self.render_label(field),
            br = br,
            widget = self.render_field(field),
            help_text = self.render_help_text(field),
        ))
    }

    fn render_label(&self, field: &F) -> Markup {
        let contents = match &self.label {
            TextOverride::Unset | TextOverride::FieldDefault => None,
            TextOverride::Text(text) => Some(text),
        };
        if field.errors().is_empty() {
            field.label_tag(contents, &[])
        } else {
            field.label_tag(contents, &[("class", LABEL_ERROR_CLASS)])
        }
    }

    fn render_field(&self, field: &F) -> Markup {
        match &self.class {
            Some(class) => field.as_widget(&[("class", class.as_str())]),
            None => field.as_widget(&[]),
        }
    }

    fn render_help_text(&self, field: &F) -> Markup {
        let text = match &self.help_text {
            TextOverride::Unset | TextOverride::FieldDefault => Markup::escape(field.help_text()),
            TextOverride::Text(text) => text.clone(),
        };
        if text.is_empty() {
            return Markup::empty();
        }
        Markup::raw(format!("<span class=\"helptext\">{text}</span>"))
    }
}
