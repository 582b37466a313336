use std::collections::BTreeMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use rimcheck_domain::{XmlStats, SCHEMA_VERSION};

/// Count elements, attributes and definitions in a document. Best-effort:
/// a malformed tail simply stops the scan, the counts gathered so far are
/// still returned.
pub fn xml_statistics(content: &str) -> XmlStats {
    let mut stats = XmlStats {
        schema_version: SCHEMA_VERSION,
        total_elements: 0,
        total_attributes: 0,
        def_count: 0,
        def_types: BTreeMap::new(),
        file_size: content.len(),
        line_count: content.split('\n').count(),
    };

    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                stats.total_elements += 1;
                stats.total_attributes += e.attributes().filter_map(|a| a.ok()).count();
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if tag.ends_with("Def") {
                    stats.def_count += 1;
                    *stats.def_types.entry(tag).or_insert(0) += 1;
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
        buf.clear();
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_elements_and_def_types() {
        let xml = r#"<Defs>
            <ThingDef ParentName="Base"><defName>A</defName></ThingDef>
            <ThingDef><defName>B</defName></ThingDef>
            <RecipeDef><defName>C</defName></RecipeDef>
        </Defs>"#;
        let stats = xml_statistics(xml);
        assert_eq!(stats.def_count, 3);
        assert_eq!(stats.def_types.get("ThingDef"), Some(&2));
        assert_eq!(stats.def_types.get("RecipeDef"), Some(&1));
        assert_eq!(stats.total_attributes, 1);
        // Defs + 3 defs + 3 defNames
        assert_eq!(stats.total_elements, 7);
    }

    #[test]
    fn malformed_tail_keeps_partial_counts() {
        let stats = xml_statistics("<Defs><ThingDef></Defs>");
        assert!(stats.total_elements >= 1);
        assert_eq!(stats.file_size, "<Defs><ThingDef></Defs>".len());
    }
}
