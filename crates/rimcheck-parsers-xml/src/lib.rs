use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use rimcheck_core::{RimCheckError, XmlNode};

/// Byte offsets at which each line starts.
fn line_starts_of(text: &str) -> Vec<usize> {
    let mut starts = Vec::with_capacity(256);
    starts.push(0);
    for (i, b) in text.as_bytes().iter().enumerate() {
        if *b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Map a byte position to a 1-based line number.
fn byte_pos_to_line(pos: usize, starts: &[usize]) -> usize {
    let idx = starts.partition_point(|&s| s <= pos);
    idx.max(1)
}

fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else {
        *root = Some(node);
    }
}

fn syntax_err(msg: impl std::fmt::Display, pos: usize, starts: &[usize]) -> RimCheckError {
    RimCheckError::Xml(format!("{msg} (line {})", byte_pos_to_line(pos, starts)))
}

/// Parse `xml` into an element tree with 1-based line numbers.
///
/// Mismatched or unclosed tags, junk after the document element and an
/// empty input are all reported as `RimCheckError::Xml` with the parser's
/// own diagnostic text where quick-xml supplies one.
pub fn parse_document(xml: &str) -> std::result::Result<XmlNode, RimCheckError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let line_starts = line_starts_of(xml);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader.read_event_into(&mut buf);
        // buffer_position() points right after the event just read
        let pos = reader.buffer_position() as usize;
        match event {
            Ok(Event::Start(e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(syntax_err("junk after document element", pos, &line_starts));
                }
                let mut node = XmlNode::new(
                    String::from_utf8_lossy(e.name().as_ref()).to_string(),
                    Some(byte_pos_to_line(pos, &line_starts)),
                );
                collect_attrs(&e, &mut node, pos, &line_starts)?;
                stack.push(node);
            }
            Ok(Event::Empty(e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(syntax_err("junk after document element", pos, &line_starts));
                }
                let mut node = XmlNode::new(
                    String::from_utf8_lossy(e.name().as_ref()).to_string(),
                    Some(byte_pos_to_line(pos, &line_starts)),
                );
                collect_attrs(&e, &mut node, pos, &line_starts)?;
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::End(_)) => {
                // name matching is enforced by the reader itself
                let Some(node) = stack.pop() else {
                    return Err(syntax_err("close tag without open tag", pos, &line_starts));
                };
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::Text(e)) => {
                let value = e
                    .unescape()
                    .map_err(|e| syntax_err(e, pos, &line_starts))?;
                match stack.last_mut() {
                    Some(top) => top.text.push_str(&value),
                    None => {
                        if !value.trim().is_empty() {
                            return Err(syntax_err(
                                "text outside of the root element",
                                pos,
                                &line_starts,
                            ));
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declaration, comments, PI, doctype
            Err(e) => return Err(syntax_err(e, pos, &line_starts)),
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(RimCheckError::Xml(format!(
            "unexpected end of document: <{}> is never closed",
            open.tag
        )));
    }
    root.ok_or_else(|| RimCheckError::Xml("no root element found".to_string()))
}

fn collect_attrs(
    e: &quick_xml::events::BytesStart<'_>,
    node: &mut XmlNode,
    pos: usize,
    starts: &[usize],
) -> std::result::Result<(), RimCheckError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| syntax_err(e, pos, starts))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| syntax_err(e, pos, starts))?
            .to_string();
        node.attrs.push((key, value));
    }
    Ok(())
}

/// Re-indent an XML document. Returns the input unchanged when it does not
/// parse; the caller is expected to validate separately.
pub fn format_document(xml: &str, indent: &str) -> String {
    let Ok(root) = parse_document(xml) else {
        return xml.to_string();
    };
    let mut out = String::with_capacity(xml.len());
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    write_node(&mut out, &root, 0, indent);
    out
}

fn write_node(out: &mut String, node: &XmlNode, level: usize, indent: &str) {
    let pad = indent.repeat(level);
    out.push_str(&pad);
    out.push('<');
    out.push_str(&node.tag);
    for (k, v) in &node.attrs {
        out.push(' ');
        out.push_str(k);
        out.push_str("=\"");
        out.push_str(&escape(v.as_str()));
        out.push('"');
    }
    let text = node.text.trim();
    if node.children.is_empty() {
        if text.is_empty() {
            out.push_str(" />\n");
        } else {
            out.push('>');
            out.push_str(&escape(text));
            out.push_str("</");
            out.push_str(&node.tag);
            out.push_str(">\n");
        }
    } else {
        out.push_str(">\n");
        // mixed content is rare in mod XML; text comes first when present
        if !text.is_empty() {
            out.push_str(&indent.repeat(level + 1));
            out.push_str(&escape(text));
            out.push('\n');
        }
        for child in &node.children {
            write_node(out, child, level + 1, indent);
        }
        out.push_str(&pad);
        out.push_str("</");
        out.push_str(&node.tag);
        out.push_str(">\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_tree_with_lines() {
        let xml = "<Defs>\n  <ThingDef>\n    <defName>Steel</defName>\n  </ThingDef>\n</Defs>";
        let root = parse_document(xml).expect("well-formed");
        assert_eq!(root.tag, "Defs");
        assert_eq!(root.children.len(), 1);
        let thing = &root.children[0];
        assert_eq!(thing.tag, "ThingDef");
        let def_name = thing.find_child("defName").expect("defName child");
        assert_eq!(def_name.text_trimmed(), "Steel");
        assert_eq!(def_name.line, Some(3));
    }

    #[test]
    fn keeps_attributes() {
        let xml = r#"<Defs><ThingDef ParentName="BaseThing" Abstract="True"><defName>X</defName></ThingDef></Defs>"#;
        let root = parse_document(xml).expect("well-formed");
        let thing = &root.children[0];
        assert_eq!(
            thing.attrs,
            vec![
                ("ParentName".to_string(), "BaseThing".to_string()),
                ("Abstract".to_string(), "True".to_string()),
            ]
        );
    }

    #[test]
    fn empty_input_is_a_syntax_error() {
        let err = parse_document("").expect_err("no root");
        assert!(err.to_string().contains("no root element"));
    }

    #[test]
    fn mismatched_tags_are_a_syntax_error() {
        assert!(parse_document("<Defs><ThingDef></Defs>").is_err());
    }

    #[test]
    fn unclosed_root_is_a_syntax_error() {
        // either the reader flags the missing end tag or the leftover
        // open-element check does
        assert!(parse_document("<Defs><ThingDef/>").is_err());
    }

    #[test]
    fn second_root_is_a_syntax_error() {
        let err = parse_document("<Defs></Defs><Defs></Defs>").expect_err("two roots");
        assert!(err.to_string().contains("junk after document element"));
    }

    #[test]
    fn unescapes_entities() {
        let root = parse_document("<a><b>x &amp; y</b></a>").expect("well-formed");
        assert_eq!(root.children[0].text_trimmed(), "x & y");
    }

    #[test]
    fn format_reindents_and_adds_declaration() {
        let xml = "<Defs><ThingDef><defName>Steel</defName></ThingDef></Defs>";
        let formatted = format_document(xml, "  ");
        assert!(formatted.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(formatted.contains("  <ThingDef>\n"));
        assert!(formatted.contains("    <defName>Steel</defName>\n"));
    }

    #[test]
    fn format_returns_input_when_unparsable() {
        let xml = "<Defs><broken></Defs>";
        assert_eq!(format_document(xml, "  "), xml);
    }
}
