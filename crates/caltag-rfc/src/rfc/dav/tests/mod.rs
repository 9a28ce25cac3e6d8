//! Rendering tests across the catalog, escaping and declarations.
//!
//! Documents are re-read with `quick-xml` to check that what we write parses.

mod round_trip;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

/// Reads `xml` to the end and returns the names of every element start,
/// failing on any parse error or mismatched end tag.
fn element_names(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut names = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                names.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML {xml:?}: {e}"),
        }
    }

    names
}

/// Returns the text between the start and end tags of a rendered element.
fn inner_text<'a>(xml: &'a str, element: &str) -> &'a str {
    xml.strip_prefix(&format!("<{element}>"))
        .and_then(|rest| rest.strip_suffix(&format!("</{element}>")))
        .unwrap_or_else(|| panic!("{xml:?} is not a <{element}> pair"))
}

/// Returns the character data of `xml` the way a conforming parser reports it:
/// line endings normalized, entity and character references resolved.
fn parsed_text(xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(e)) => text.push_str(&e.xml_content().unwrap()),
            Ok(Event::GeneralRef(e)) => match e.resolve_char_ref().unwrap() {
                Some(c) => text.push(c),
                None => {
                    let name = e.decode().unwrap();
                    text.push_str(resolve_predefined_entity(&name).unwrap());
                }
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML {xml:?}: {e}"),
        }
    }

    text
}
