//! Property tests for override chaining and escaping.

use formtags::{Markup, Presentation, RenderMode, TextOverride};
use formtags_test_utils::TestField;
use proptest::prelude::*;

/// One filter application in a chain.
#[derive(Debug, Clone)]
enum Op {
    Wrap(bool),
    Label(Option<String>),
    Class(Option<String>),
    HelpText(Option<String>),
}

fn text_arg() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9&<>\" ]{0,12}")
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Wrap),
        text_arg().prop_map(Op::Label),
        text_arg().prop_map(Op::Class),
        text_arg().prop_map(Op::HelpText),
    ]
}

fn apply(state: Presentation<TestField>, op: &Op) -> Presentation<TestField> {
    match op {
        Op::Wrap(br) => state.with_wrap(*br),
        Op::Label(arg) => state.with_label(text_override(arg)),
        Op::Class(arg) => state.with_class(arg.as_deref().map(Markup::escape)),
        Op::HelpText(arg) => state.with_help_text(text_override(arg)),
    }
}

fn text_override(arg: &Option<String>) -> TextOverride {
    match arg {
        Some(text) => TextOverride::Text(Markup::escape(text)),
        None => TextOverride::FieldDefault,
    }
}

fn field() -> TestField {
    TestField::new("foo", "Foo").with_help_text("help foo")
}

proptest! {
    /// The mode a chain resolves to depends only on which keys ended up
    /// set, never on the order the chain applied them in.
    #[test]
    fn mode_follows_priority_of_set_keys(ops in proptest::collection::vec(op(), 0..8)) {
        let state = ops.iter().fold(Presentation::new(field()), apply);

        let wrap_set = ops.iter().any(|op| matches!(op, Op::Wrap(_)));
        let label_set = ops.iter().any(|op| matches!(op, Op::Label(_)));
        let help_set = ops.iter().any(|op| matches!(op, Op::HelpText(_)));
        let expected = if wrap_set {
            RenderMode::Wrapped
        } else if label_set {
            RenderMode::Label
        } else if help_set {
            RenderMode::HelpText
        } else {
            RenderMode::FieldOnly
        };
        prop_assert_eq!(state.mode(), expected);
    }

    /// Replaying the last application of each key, in any fixed order,
    /// renders identically to the full chain: only the final value per key
    /// matters.
    #[test]
    fn render_depends_only_on_final_key_values(ops in proptest::collection::vec(op(), 0..8)) {
        let chained = ops.iter().fold(Presentation::new(field()), apply);

        let mut collapsed = Presentation::new(field());
        for kind in [
            std::mem::discriminant(&Op::Wrap(false)),
            std::mem::discriminant(&Op::Label(None)),
            std::mem::discriminant(&Op::Class(None)),
            std::mem::discriminant(&Op::HelpText(None)),
        ] {
            if let Some(last) = ops.iter().rev().find(|op| std::mem::discriminant(*op) == kind) {
                collapsed = apply(collapsed, last);
            }
        }
        prop_assert_eq!(chained.render(), collapsed.render());
    }

    /// Escaping happens at most once: rendering never produces a
    /// double-encoded ampersand entity.
    #[test]
    fn escaping_is_applied_exactly_once(arg in "[a-zA-Z&<>]{0,12}") {
        let state = Presentation::new(field())
            .with_label(TextOverride::Text(Markup::escape(&arg)))
            .with_wrap(false);
        let rendered = state.render().into_string();
        prop_assert!(!rendered.contains("&amp;amp;"));
        prop_assert!(!rendered.contains("&amp;lt;"));
        prop_assert!(!rendered.contains("&amp;gt;"));
    }
}
