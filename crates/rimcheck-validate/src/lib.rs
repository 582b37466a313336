//! RimWorld-flavored XML structural validator.
//!
//! Schema-light checking for mod XML: well-formedness via the quick-xml
//! reader, then structural rules keyed off the root element (About
//! metadata vs. Defs collections), a duplicate-defName sweep and an
//! advisory unknown-tag walk against a static vocabulary.
//!
//! All entry points are pure functions over the input text. Nothing is
//! shared between calls, so callers may validate from worker threads
//! without coordination.

mod report;
mod stats;
mod structure;
mod tags;

use std::collections::HashSet;

use rimcheck_domain::ValidationReport;

pub use report::{build_report, format_report};
pub use stats::xml_statistics;
pub use tags::rimworld_tags;

/// Validate one XML document.
///
/// A parse failure short-circuits: the report carries exactly the one
/// syntax error and no warnings, since there is no tree to walk. When the
/// parse succeeds all structural findings are accumulated and the result
/// is valid iff no errors were collected.
pub fn validate_content(content: &str) -> ValidationReport {
    validate_content_with_tags(content, &HashSet::new())
}

/// Like [`validate_content`], with additional user-known tags that the
/// unknown-tag walk should accept (typically from `rimcheck.toml`).
pub fn validate_content_with_tags(
    content: &str,
    extra_tags: &HashSet<String>,
) -> ValidationReport {
    let root = match rimcheck_parsers_xml::parse_document(content) {
        Ok(root) => root,
        Err(e) => {
            return report::build_report(vec![format!("Syntax error in XML: {e}")], Vec::new())
        }
    };

    let findings = structure::validate_structure(&root, extra_tags);
    report::build_report(findings.errors, findings.warnings)
}

/// Cheap well-formedness probe for real-time editor feedback. No
/// structural rules, just the parser verdict.
pub fn quick_check(content: &str) -> (bool, String) {
    match rimcheck_parsers_xml::parse_document(content) {
        Ok(_) => (true, "XML is well-formed".to_string()),
        Err(e) => (false, format!("XML error: {e}")),
    }
}
