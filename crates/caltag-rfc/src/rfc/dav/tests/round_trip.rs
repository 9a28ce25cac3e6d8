//! Round-trip tests: text in, text back out.

use super::{element_names, inner_text, parsed_text};
use crate::rfc::dav::build::{
    escape_text, href_tag, multistatus_close, multistatus_open, status_tag, tag, text_tag,
    unescape_text,
};
use crate::rfc::dav::core::catalog;

#[test]
fn plain_text_survives_rendering() {
    let samples = [
        "\"etag-123\"",
        "text/calendar; charset=utf-8",
        "Mon, 12 Jan 2026 10:00:00 GMT",
        "  padded  ",
        "1024",
    ];

    for text in samples {
        for name in [
            &catalog::GET_ETAG,
            &catalog::GET_CONTENT_TYPE,
            &catalog::GET_CTAG,
        ] {
            let xml = tag(name, text);
            assert_eq!(inner_text(&xml, &name.prefixed_name()), text);
        }
    }
}

#[test]
fn escaped_text_survives_rendering() {
    let raw = "BEGIN:VCALENDAR\r\nSUMMARY:R&D <sync> \"all\"\r\nEND:VCALENDAR\r\n";
    let xml = text_tag(&catalog::CALENDAR_DATA, raw);

    element_names(&xml);
    let inner = inner_text(&xml, "C:calendar-data");
    assert!(!inner.contains('<'));
    assert_eq!(unescape_text(inner).unwrap(), raw);
}

#[test]
fn calendar_data_keeps_crlf_through_a_parser() {
    let raw = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
    let xml = text_tag(&catalog::CALENDAR_DATA, raw);

    assert_eq!(parsed_text(&xml), raw);
}

#[test]
fn parser_sees_the_original_text() {
    for raw in ["<a&b>", "tab\there", "a'b\"c", "lone\rcr", "R&D\r\n"] {
        let xml = text_tag(&catalog::DISPLAY_NAME, raw);
        assert_eq!(parsed_text(&xml), raw);
    }
}

#[test]
fn escape_then_unescape() {
    for raw in ["<a&b>", "", "a'b\"c", "&amp;", "plain"] {
        assert_eq!(unescape_text(&escape_text(raw)).unwrap(), raw);
    }
}

#[test_log::test]
fn assembled_multistatus_parses() {
    let resource_type = tag(
        &catalog::RESOURCE_TYPE,
        &[tag(&catalog::COLLECTION, ""), tag(&catalog::CALENDAR, "")].concat(),
    );
    let prop = tag(
        &catalog::PROP,
        &[
            text_tag(&catalog::DISPLAY_NAME, "Work & Play"),
            tag(&catalog::GET_CTAG, "\"17\""),
            resource_type,
            tag(&catalog::SUPPORTED_CALENDAR_COMPONENT_SET, ""),
        ]
        .concat(),
    );
    let propstat = tag(&catalog::PROPSTAT, &[prop, status_tag(200)].concat());
    let response = tag(
        &catalog::RESPONSE,
        &[href_tag("/calendars/alice/work/"), propstat].concat(),
    );
    let document = [multistatus_open(), response, multistatus_close()].concat();

    let names = element_names(&document);
    assert_eq!(names.first().map(String::as_str), Some("D:multistatus"));
    assert!(names.iter().any(|n| n == "CS:getctag"));
    assert!(names.iter().any(|n| n == "C:calendar"));
    assert!(document.contains("<D:status>HTTP/1.1 200 OK</D:status>"));
}
