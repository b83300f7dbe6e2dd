use formlinks::{
    AttributeMap, CatalogTranslator, Error, EscapeHtml, FormLinks, LinkInput, Links, Page, Result,
    Translate,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), Some((*value).to_owned())))
        .collect()
}

struct CountingEscaper {
    calls: Arc<AtomicUsize>,
}

impl CountingEscaper {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl EscapeHtml for CountingEscaper {
    fn escape_html(&self, value: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}-escaped", value))
    }
}

struct CountingTranslator {
    calls: Arc<AtomicUsize>,
}

impl Translate for CountingTranslator {
    fn translate(&self, message: &str, _text_domain: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(message.to_owned())
    }
}

struct FailingEscaper;

impl EscapeHtml for FailingEscaper {
    fn escape_html(&self, _value: &str) -> Result<String> {
        Err(Error::Capability(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "broken encoding",
        ))))
    }
}

struct NullPage;

impl Page for NullPage {
    fn id(&self) -> Option<String> {
        None
    }

    fn title(&self) -> Option<String> {
        None
    }

    fn class(&self) -> Option<String> {
        None
    }

    fn href(&self) -> String {
        "/page".to_owned()
    }

    fn target(&self) -> Option<String> {
        None
    }

    fn label(&self) -> Option<String> {
        Some("Page".to_owned())
    }
}

#[test]
fn render_single_link() {
    let mut element = Links::new();
    element.set_attributes(attrs(&[("class", "test-class"), ("aria-label", "test")]));
    element
        .set_links([LinkInput::from(attrs(&[
            ("class", "abc"),
            ("href", "#"),
            ("label", "test-label"),
        ]))])
        .unwrap();
    element.set_separator("");

    let rendered = FormLinks::with_defaults().render(&element).unwrap();

    assert_eq!(
        rendered,
        r#"<a aria-label="test" href="#" class="test-class abc">test-label</a>"#,
    );
}

#[test]
fn render_two_links_with_separator_and_indent() {
    let mut element = Links::new();
    element.set_attributes(attrs(&[("class", "test-class"), ("aria-label", "test")]));
    element.set_separator("||");
    element
        .set_links([
            LinkInput::from(attrs(&[
                ("class", "abc"),
                ("href", "#1"),
                ("label", "test-label1"),
            ])),
            LinkInput::from(attrs(&[
                ("class", "xyz"),
                ("href", "#2"),
                ("label", "test-label2"),
            ])),
        ])
        .unwrap();

    let mut helper = FormLinks::with_defaults();
    helper.set_indent("    ");

    let rendered = helper.render(&element).unwrap();

    let expected = "    <a aria-label=\"test\" href=\"#1\" class=\"test-class abc\">test-label1</a>\n    \
                    ||\n    \
                    <a aria-label=\"test\" href=\"#2\" class=\"test-class xyz\">test-label2</a>";
    assert_eq!(rendered, expected);
}

#[test]
fn render_deduplicates_class_tokens_in_first_occurrence_order() {
    let mut element = Links::new();
    element.set_attributes(attrs(&[("class", "a b")]));
    element
        .set_links([LinkInput::from(attrs(&[
            ("class", "b c"),
            ("href", "#"),
        ]))])
        .unwrap();

    let rendered = FormLinks::with_defaults().render(&element).unwrap();

    assert_eq!(rendered, r#"<a href="#" class="a b c"></a>"#);
}

#[test]
fn render_link_with_null_class() {
    let mut element = Links::new();
    element.set_attributes(attrs(&[("class", "test-class")]));

    let mut link = attrs(&[("href", "#")]);
    link.insert("class".to_owned(), None);
    element.set_links([LinkInput::from(link)]).unwrap();

    let rendered = FormLinks::with_defaults().render(&element).unwrap();

    assert_eq!(rendered, r#"<a href="#" class="test-class"></a>"#);
}

#[test]
fn render_empty_label_skips_escaper_and_translator() {
    let mut element = Links::new();
    element.set_links(["#"]).unwrap();

    let escaper = CountingEscaper::new();
    let escape_calls = escaper.call_counter();

    let translate_calls = Arc::new(AtomicUsize::new(0));
    let translator = CountingTranslator {
        calls: Arc::clone(&translate_calls),
    };

    let helper = FormLinks::new(Box::new(escaper), Some(Box::new(translator)));
    let rendered = helper.render(&element).unwrap();

    assert_eq!(rendered, r#"<a href="#" class=""></a>"#);
    assert_eq!(escape_calls.load(Ordering::SeqCst), 0);
    assert_eq!(translate_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn render_escapes_labels_through_the_injected_escaper() {
    let mut element = Links::new();
    element
        .set_links([LinkInput::from(attrs(&[("href", "#"), ("label", "L")]))])
        .unwrap();
    element.set_separator("");

    let helper = FormLinks::new(Box::new(CountingEscaper::new()), None);
    let rendered = helper.render(&element).unwrap();

    assert_eq!(rendered, r#"<a href="#" class="">L-escaped</a>"#);
}

#[test]
fn render_translates_labels_before_escaping() {
    let mut element = Links::new();
    element
        .set_links([LinkInput::from(attrs(&[("href", "/"), ("label", "Home")]))])
        .unwrap();

    let mut translator = CatalogTranslator::new();
    translator.insert("navigation", "Home", "Startseite");

    let mut helper = FormLinks::new(Box::new(CountingEscaper::new()), Some(Box::new(translator)));
    helper.set_translator_text_domain("navigation");

    let rendered = helper.render(&element).unwrap();

    assert_eq!(rendered, r#"<a href="/" class="">Startseite-escaped</a>"#);
}

#[test]
fn render_propagates_escaper_errors_unchanged() {
    let mut element = Links::new();
    element
        .set_links([LinkInput::from(attrs(&[("href", "#"), ("label", "L")]))])
        .unwrap();

    let helper = FormLinks::new(Box::new(FailingEscaper), None);
    let error = helper.render(&element).unwrap_err();

    assert!(matches!(error, Error::Capability(_)));
    assert_eq!(error.to_string(), "broken encoding");
}

#[test]
fn render_page_link_keeps_null_attributes() {
    let mut element = Links::new();
    element
        .set_links([LinkInput::Page(Box::new(NullPage))])
        .unwrap();

    let rendered = FormLinks::with_defaults().render(&element).unwrap();

    assert_eq!(
        rendered,
        r#"<a id="" title="" href="/page" target="" class="">Page</a>"#,
    );
}

#[test]
fn render_never_emits_a_label_attribute() {
    let mut element = Links::new();
    element
        .set_links([LinkInput::from(attrs(&[
            ("href", "#"),
            ("label", "test-label"),
        ]))])
        .unwrap();

    let rendered = FormLinks::with_defaults().render(&element).unwrap();

    assert!(!rendered.contains("label=\""));
}

#[test]
fn render_does_not_mutate_the_element() {
    let mut element = Links::new();
    element.set_attributes(attrs(&[("class", "a")]));
    element
        .set_links([LinkInput::from(attrs(&[("class", "b"), ("href", "#")]))])
        .unwrap();

    let helper = FormLinks::with_defaults();
    let first = helper.render(&element).unwrap();
    let second = helper.render(&element).unwrap();

    assert_eq!(first, second);
}
