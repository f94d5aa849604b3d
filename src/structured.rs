//! JSON-LD structured-data extraction (schema.org JobPosting).

use crate::job::JobFields;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

static JSON_LD_SCRIPTS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").unwrap());

/// Extract JobPosting fields from a document's JSON-LD script blocks.
///
/// Script blocks are scanned in document order; the first JobPosting object
/// found anywhere in them wins and the search stops. A block that fails to
/// parse as JSON is skipped, it never aborts the scan.
pub fn extract(document: &Html) -> JobFields {
    from_scripts(
        document
            .select(&JSON_LD_SCRIPTS)
            .map(|script| script.text().collect::<String>()),
    )
}

/// Extract JobPosting fields from raw JSON-LD script contents.
pub fn from_scripts<I, S>(scripts: I) -> JobFields
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for script in scripts {
        // Some sites wrap the JSON in CDATA markers
        let content = script
            .as_ref()
            .trim()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .trim();

        let Ok(parsed) = serde_json::from_str::<Value>(content) else {
            continue;
        };

        if let Some(posting) = find_job_posting(&parsed) {
            return fields_from_posting(posting);
        }
    }

    JobFields::default()
}

/// Depth-first search for the first object with `@type` = `"JobPosting"`.
///
/// Arrays are searched element by element; objects that are not themselves
/// a JobPosting are searched through their `@graph` property.
fn find_job_posting(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.iter().find_map(find_job_posting),
        Value::Object(map) => {
            if map.get("@type").and_then(Value::as_str) == Some("JobPosting") {
                return Some(value);
            }
            map.get("@graph").and_then(find_job_posting)
        }
        _ => None,
    }
}

fn fields_from_posting(posting: &Value) -> JobFields {
    JobFields {
        title: posting
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string),
        company: posting.get("hiringOrganization").and_then(company_name),
        location: posting.get("jobLocation").and_then(location_text),
    }
}

/// `hiringOrganization` is either a plain string or an object with a `name`.
fn company_name(org: &Value) -> Option<String> {
    match org {
        Value::String(name) => Some(name.clone()),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// `jobLocation` may be a string, an array (first element used), or a Place
/// object. A Place with an `address` yields "locality, region, country" with
/// absent parts skipped; otherwise the Place's `name` is used.
fn location_text(location: &Value) -> Option<String> {
    let location = match location {
        Value::Array(items) => items.first()?,
        other => other,
    };

    if let Value::String(text) = location {
        return Some(text.clone());
    }

    if let Some(address) = location.get("address") {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(locality) = address.get("addressLocality").and_then(Value::as_str) {
            parts.push(locality);
        }
        if let Some(region) = address.get("addressRegion").and_then(Value::as_str) {
            parts.push(region);
        }
        if let Some(country) = address.get("addressCountry") {
            // addressCountry is a string or a Country object with a name
            let country = match country {
                Value::String(name) => Some(name.as_str()),
                other => other.get("name").and_then(Value::as_str),
            };
            if let Some(country) = country {
                parts.push(country);
            }
        }
        if !parts.is_empty() {
            return Some(parts.join(", "));
        }
        return None;
    }

    location
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_posting_with_address() {
        let fields = from_scripts([r#"{
            "@type": "JobPosting",
            "title": "Engineer",
            "hiringOrganization": {"name": "Acme"},
            "jobLocation": {"address": {
                "addressLocality": "Austin",
                "addressRegion": "TX",
                "addressCountry": "US"
            }}
        }"#]);
        assert_eq!(fields.title.as_deref(), Some("Engineer"));
        assert_eq!(fields.company.as_deref(), Some("Acme"));
        assert_eq!(fields.location.as_deref(), Some("Austin, TX, US"));
    }

    #[test]
    fn organization_as_plain_string() {
        let fields = from_scripts([
            r#"{"@type": "JobPosting", "hiringOrganization": "Initech"}"#,
        ]);
        assert_eq!(fields.company.as_deref(), Some("Initech"));
        assert!(fields.title.is_none());
    }

    #[test]
    fn location_array_uses_first_element() {
        let fields = from_scripts([r#"{
            "@type": "JobPosting",
            "jobLocation": [
                {"name": "Berlin HQ"},
                {"name": "Hamburg Office"}
            ]
        }"#]);
        assert_eq!(fields.location.as_deref(), Some("Berlin HQ"));
    }

    #[test]
    fn address_country_as_object() {
        let fields = from_scripts([r#"{
            "@type": "JobPosting",
            "jobLocation": {"address": {
                "addressLocality": "Munich",
                "addressCountry": {"@type": "Country", "name": "Germany"}
            }}
        }"#]);
        assert_eq!(fields.location.as_deref(), Some("Munich, Germany"));
    }

    #[test]
    fn address_with_all_parts_absent_falls_through_to_none() {
        let fields = from_scripts([
            r#"{"@type": "JobPosting", "jobLocation": {"address": {"postalCode": "78701"}}}"#,
        ]);
        assert_eq!(fields.location, None);
    }

    #[test]
    fn posting_nested_in_graph_array() {
        let fields = from_scripts([r#"{
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "WebSite", "name": "Jobs Board"},
                [{"@type": "JobPosting", "title": "Platform Engineer"}]
            ]
        }"#]);
        assert_eq!(fields.title.as_deref(), Some("Platform Engineer"));
    }

    #[test]
    fn malformed_block_is_skipped() {
        let fields = from_scripts([
            "{not valid json",
            r#"{"@type": "JobPosting", "title": "Backend Engineer"}"#,
        ]);
        assert_eq!(fields.title.as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn first_posting_wins_across_blocks() {
        let fields = from_scripts([
            r#"{"@type": "JobPosting", "title": "First"}"#,
            r#"{"@type": "JobPosting", "title": "Second", "hiringOrganization": "Later Corp"}"#,
        ]);
        // Fields absent from the first match stay absent
        assert_eq!(fields.title.as_deref(), Some("First"));
        assert_eq!(fields.company, None);
    }

    #[test]
    fn no_posting_yields_empty_fields() {
        let fields = from_scripts([r#"{"@type": "Article", "headline": "Not a job"}"#]);
        assert!(fields.is_empty());
    }

    #[test]
    fn cdata_wrapped_block() {
        let fields = from_scripts([
            r#"<![CDATA[{"@type": "JobPosting", "title": "SRE"}]]>"#,
        ]);
        assert_eq!(fields.title.as_deref(), Some("SRE"));
    }

    #[test]
    fn extract_reads_script_tags_in_document_order() {
        let html = Html::parse_document(
            r#"<html><head>
            <script type="application/ld+json">{"@type": "WebPage"}</script>
            <script type="application/ld+json">{"@type": "JobPosting", "title": "Data Engineer"}</script>
            </head><body></body></html>"#,
        );
        let fields = extract(&html);
        assert_eq!(fields.title.as_deref(), Some("Data Engineer"));
    }
}
