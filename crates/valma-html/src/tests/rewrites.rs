use pretty_assertions::assert_eq;

use super::*;

#[test]
fn rewrite_attribute_touches_only_matching_values() {
    let doc = doc();
    let out = doc.rewrite_attribute("href", |el, value| {
        (el.is("a") && value.ends_with("studentHome.html")).then(|| "#home".to_string())
    });
    assert!(out.contains(r##"<a href="#home">Home</a>"##));
    assert!(out.contains("href='./studentProfile.html'"));
    assert!(out.contains(r#"href="studentStyle.css""#));
    assert_eq!(out.len(), STUDENT_PAGE.len() - "studentHome.html".len() + "#home".len());
}

#[test]
fn rewrite_preserves_single_quotes() {
    let doc = doc();
    let out = doc.rewrite_attribute("href", |_, value| {
        (value == "./studentProfile.html").then(|| "#profile".to_string())
    });
    assert!(out.contains("href='#profile'"));
}

#[test]
fn rewrite_fills_empty_quoted_value() {
    let doc = HtmlDocument::parse(r#"<a href="">x</a>"#);
    let out = doc.rewrite_attribute("href", |_, value| {
        value.is_empty().then(|| "#home".to_string())
    });
    assert_eq!(out, r##"<a href="#home">x</a>"##);
}

#[test]
fn rewrite_with_no_matches_is_identity() {
    let doc = doc();
    let out = doc.rewrite_attribute("href", |_, _| None);
    assert_eq!(out, STUDENT_PAGE);
}

#[test]
fn replace_title_text() {
    let doc = doc();
    let out = doc.replace_inner_of("title", "VALMAtrack - Student");
    assert!(out.contains("<title>VALMAtrack - Student</title>"));
    assert!(!out.contains("VALMAtrack - Home"));
}

#[test]
fn replace_inner_of_missing_tag_is_identity() {
    let doc = HtmlDocument::parse("<head><meta charset=\"utf-8\"></head>");
    assert_eq!(doc.replace_inner_of("title", "x"), doc.source());
}
