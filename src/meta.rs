//! Generic fallback extraction from page metadata.
//!
//! Used to fill fields the structured-data stage left absent: the title
//! comes from Open Graph tags or the `<title>` element, the location from
//! common geo meta tags.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static OG_TITLE_PROPERTY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());
static OG_TITLE_NAME: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="og:title"]"#).unwrap());
static TITLE_TAG: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

static GEO_PLACENAME: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="geo.placename"]"#).unwrap());
static GEO_REGION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="geo.region"]"#).unwrap());
static OG_LOCALITY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:locality"]"#).unwrap());

/// Page title: `og:title` (property form, then name form), else the
/// document's `<title>` text.
pub fn title(document: &Html) -> Option<String> {
    meta_content(document, &OG_TITLE_PROPERTY)
        .or_else(|| meta_content(document, &OG_TITLE_NAME))
        .or_else(|| {
            document
                .select(&TITLE_TAG)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty())
        })
}

/// Location from geo meta tags: `geo.placename`, `geo.region`,
/// `og:locality`, first present wins.
pub fn location(document: &Html) -> Option<String> {
    meta_content(document, &GEO_PLACENAME)
        .or_else(|| meta_content(document, &GEO_REGION))
        .or_else(|| meta_content(document, &OG_LOCALITY))
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn og_title_property_form_preferred() {
        let doc = Html::parse_document(
            r#"<head>
                <meta property="og:title" content="Rust Engineer at Acme">
                <title>Acme Careers</title>
            </head>"#,
        );
        assert_eq!(title(&doc).as_deref(), Some("Rust Engineer at Acme"));
    }

    #[test]
    fn og_title_name_form_accepted() {
        let doc = Html::parse_document(
            r#"<head><meta name="og:title" content="Compiler Engineer"></head>"#,
        );
        assert_eq!(title(&doc).as_deref(), Some("Compiler Engineer"));
    }

    #[test]
    fn falls_back_to_title_tag() {
        let doc = Html::parse_document("<head><title> Acme Careers </title></head>");
        assert_eq!(title(&doc).as_deref(), Some("Acme Careers"));
    }

    #[test]
    fn empty_og_content_does_not_shadow_title_tag() {
        let doc = Html::parse_document(
            r#"<head>
                <meta property="og:title" content="">
                <title>Fallback Title</title>
            </head>"#,
        );
        assert_eq!(title(&doc).as_deref(), Some("Fallback Title"));
    }

    #[test]
    fn location_priority_order() {
        let doc = Html::parse_document(
            r#"<head>
                <meta name="geo.region" content="DE-BY">
                <meta name="geo.placename" content="Munich">
            </head>"#,
        );
        assert_eq!(location(&doc).as_deref(), Some("Munich"));

        let doc = Html::parse_document(
            r#"<head><meta property="og:locality" content="Oslo"></head>"#,
        );
        assert_eq!(location(&doc).as_deref(), Some("Oslo"));
    }

    #[test]
    fn no_tags_no_location() {
        let doc = Html::parse_document("<head><title>Jobs</title></head>");
        assert_eq!(location(&doc), None);
    }
}
