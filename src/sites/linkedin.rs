//! LinkedIn job page heuristics (`linkedin.com`).

use super::first_text;
use crate::job::JobFields;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TITLE_PRIMARY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".top-card-layout__title").unwrap());
static TITLE_SECONDARY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.topcard__title").unwrap());

static ORG_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".topcard__org-name-link").unwrap());
static ORG_LINK_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.topcard__org-name-link").unwrap());
static ORG_LINK_NESTED: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".top-card-layout__card a.topcard__org-name-link").unwrap());

static FLAVOR_BULLET: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".topcard__flavor--bullet").unwrap());
static SECOND_SUBLINE_SPAN: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".top-card-layout__second-subline span").unwrap());

pub(super) fn extract(document: &Html, _raw_html: &str) -> JobFields {
    JobFields {
        title: first_text(document, &[&TITLE_PRIMARY, &TITLE_SECONDARY]),
        company: first_text(document, &[&ORG_LINK, &ORG_LINK_ANCHOR, &ORG_LINK_NESTED]),
        location: first_text(document, &[&FLAVOR_BULLET, &SECOND_SUBLINE_SPAN]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_topcard_markup() {
        let doc = Html::parse_document(
            r#"<html><body>
                <h1 class="topcard__title">Staff Engineer</h1>
                <a class="topcard__org-name-link" href="/company/acme">Acme Corp</a>
                <span class="topcard__flavor--bullet">Austin, TX</span>
            </body></html>"#,
        );
        let fields = extract(&doc, "");
        assert_eq!(fields.title.as_deref(), Some("Staff Engineer"));
        assert_eq!(fields.company.as_deref(), Some("Acme Corp"));
        assert_eq!(fields.location.as_deref(), Some("Austin, TX"));
    }

    #[test]
    fn primary_title_class_wins_over_topcard_heading() {
        let doc = Html::parse_document(
            r#"<div class="top-card-layout__title">Principal Engineer</div>
               <h1 class="topcard__title">Old Heading</h1>"#,
        );
        let fields = extract(&doc, "");
        assert_eq!(fields.title.as_deref(), Some("Principal Engineer"));
    }

    #[test]
    fn location_falls_back_to_second_subline_span() {
        let doc = Html::parse_document(
            r#"<div class="top-card-layout__second-subline">
                <span>Remote - Germany</span><span>500 applicants</span>
            </div>"#,
        );
        let fields = extract(&doc, "");
        assert_eq!(fields.location.as_deref(), Some("Remote - Germany"));
    }

    #[test]
    fn empty_markup_yields_no_fields() {
        let doc = Html::parse_document("<html><body><p>login wall</p></body></html>");
        assert!(extract(&doc, "").is_empty());
    }
}
