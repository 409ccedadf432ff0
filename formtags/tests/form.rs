use formtags::{
    exclude_fields, render_form, select_fields, BoundField, FieldSelector, FormtagsError,
};
use formtags_test_utils::{sample_form, TestForm};

#[test]
fn test_select_fields_in_selector_order() {
    let form = sample_form();
    let fields = select_fields(&form, &FieldSelector::parse("bar,foo")).unwrap();
    let names: Vec<&str> = fields.iter().map(BoundField::name).collect();
    assert_eq!(names, ["bar", "foo"]);
}

#[test]
fn test_select_fields_comma_and_whitespace_agree() {
    let form = sample_form();
    let by_comma = select_fields(&form, &FieldSelector::parse("foo,bar")).unwrap();
    let by_space = select_fields(&form, &FieldSelector::parse("foo bar")).unwrap();
    let comma_names: Vec<&str> = by_comma.iter().map(BoundField::name).collect();
    let space_names: Vec<&str> = by_space.iter().map(BoundField::name).collect();
    assert_eq!(comma_names, space_names);
    assert_eq!(comma_names, ["foo", "bar"]);
}

#[test]
fn test_select_fields_unknown_name_fails() {
    let form = sample_form();
    let err = select_fields(&form, &FieldSelector::parse("foo,qux")).unwrap_err();
    assert_eq!(err, FormtagsError::UnknownField { name: "qux".into() });
}

#[test]
fn test_exclude_fields_keeps_declared_order() {
    let form = sample_form();
    let fields = exclude_fields(&form, &FieldSelector::parse("baz"));
    let names: Vec<&str> = fields.iter().map(BoundField::name).collect();
    assert_eq!(names, ["foo", "bar"]);
}

#[test]
fn test_exclude_fields_with_empty_selector_is_identity() {
    let form = sample_form();
    let fields = exclude_fields(&form, &FieldSelector::default());
    let names: Vec<&str> = fields.iter().map(BoundField::name).collect();
    assert_eq!(names, ["foo", "bar", "baz"]);
}

#[test]
fn test_render_form_joins_wrapped_fields() {
    let rendered = render_form(Some(&sample_form())).into_string();
    let blocks: Vec<&str> = rendered.split('\n').collect();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].contains("<label for=\"id_foo\">Foo</label>"));
    assert!(blocks[1].contains("<span class=\"helptext\">help bar</span>"));
    assert!(blocks[2].contains("<label for=\"id_baz\">&lt;baz&gt;</label>"));
    for block in blocks {
        assert!(block.starts_with("<div class=\"fieldWrapper\">"));
        assert!(block.ends_with("</div>"));
    }
}

#[test]
fn test_render_form_absent_is_empty() {
    assert_eq!(render_form(None::<&TestForm>).as_str(), "");
}

#[test]
fn test_render_form_empty_form_is_empty() {
    assert_eq!(render_form(Some(&TestForm::new())).as_str(), "");
}
