use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use rimcheck_core::XmlNode;

use crate::tags;

/// Accumulated structural findings for one document. Never aborts a walk;
/// the caller always gets the full picture in one pass.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Run all structural checks on a parsed tree.
pub(crate) fn validate_structure(root: &XmlNode, extra_tags: &HashSet<String>) -> Findings {
    let mut findings = Findings::default();

    match root.tag.as_str() {
        tags::METADATA_ROOT => validate_mod_metadata(root, &mut findings),
        tags::DEFS_ROOT => validate_defs(root, &mut findings),
        other => findings
            .warnings
            .push(format!("Unusual root element: {other}")),
    }

    check_unknown_tags(root, extra_tags, &mut findings);
    findings
}

fn package_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // author.modname, alnum/underscore segments joined by exactly one dot
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+\.[a-zA-Z0-9_]+$").expect("static regex"))
}

/// About.xml invariants: required children, packageId shape, at least one
/// supported version.
fn validate_mod_metadata(root: &XmlNode, findings: &mut Findings) {
    for tag in tags::REQUIRED_METADATA_TAGS {
        if root.find_child(tag).is_none() {
            findings.errors.push(format!("Missing required tag: <{tag}>"));
        }
    }

    if let Some(package_id) = root.find_child("packageId") {
        let value = package_id.text_trimmed();
        if !package_id_re().is_match(value) {
            findings
                .errors
                .push(format!("Invalid packageId format: {value}"));
        }
    }

    if let Some(versions) = root.find_child("supportedVersions") {
        if !versions.children.iter().any(|c| c.tag == "li") {
            findings
                .warnings
                .push("supportedVersions does not list any version".to_string());
        }
    }
}

/// Defs invariants: every immediate child is one definition and must carry
/// a unique, non-empty defName. Duplicate detection is scoped to this one
/// document; there is no cross-file tracking.
fn validate_defs(root: &XmlNode, findings: &mut Findings) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for def in &root.children {
        match def.find_child("defName") {
            None => findings
                .errors
                .push(format!("Definition {} has no defName", def.tag)),
            Some(def_name) => {
                let value = def_name.text_trimmed();
                if value.is_empty() {
                    findings
                        .errors
                        .push(format!("Empty defName in definition {}", def.tag));
                } else {
                    if seen.contains_key(value) {
                        findings.errors.push(format!("Duplicate defName: {value}"));
                    }
                    *seen.entry(value).or_insert(0) += 1;
                }
            }
        }

        if tags::VISIBLE_DEF_TAGS.contains(&def.tag.as_str()) && def.find_child("label").is_none()
        {
            findings
                .warnings
                .push(format!("Definition {} has no label", def.tag));
        }
    }

    if root.children.is_empty() {
        findings
            .warnings
            .push("Defs file contains no definitions".to_string());
    }
}

/// Advisory full-tree sweep against the static vocabulary. Iterative
/// preorder walk; deeply nested documents must not hit call-stack limits.
fn check_unknown_tags(root: &XmlNode, extra_tags: &HashSet<String>, findings: &mut Findings) {
    let known = tags::rimworld_tags();

    let mut work: Vec<(&XmlNode, String)> = vec![(root, root.tag.clone())];
    while let Some((node, path)) = work.pop() {
        let tag = node.tag.as_str();
        let exempt = tags::EXEMPT_TAGS.contains(&tag) || tag.ends_with("Def");
        if !exempt && !known.contains(tag) && !extra_tags.contains(tag) {
            findings.warnings.push(format!("Unknown tag: {path}"));
        }
        // push in reverse so siblings come out in document order
        for child in node.children.iter().rev() {
            work.push((child, format!("{path}/{}", child.tag)));
        }
    }
}
