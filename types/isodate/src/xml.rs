//! XML encode/decode for a standalone `Date` element.
//!
//! Struct fields typed `Date` go through the serde impls in `date.rs` with
//! `quick_xml::se` / `quick_xml::de`; these helpers cover a single element
//! written to or read from a caller-owned document.

use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io;

use crate::date::Date;
use crate::error::DateError;

impl Date {
  /// Emit `<tag>YYYY-MM-DD</tag>`: no attributes, no whitespace. The tag
  /// must be a well-formed XML name.
  pub fn encode_xml<W: io::Write>(&self, writer: &mut Writer<W>, tag: &str) -> Result<(), DateError> {
    if !is_xml_name(tag) {
      return Err(DateError::invalid_tag(tag));
    }
    let text = self.format();
    writer
      .create_element(tag)
      .write_text_content(BytesText::new(&text))?;
    Ok(())
  }

  /// Render the element into a fresh string.
  pub fn to_xml(&self, tag: &str) -> Result<String, DateError> {
    let mut writer = Writer::new(Vec::new());
    self.encode_xml(&mut writer, tag)?;
    Ok(String::from_utf8(writer.into_inner())?)
  }

  /// Read the first element of `xml` and parse its text content: character
  /// and entity references resolved, CDATA sections included, comments
  /// skipped. The element name is not checked; a child element is a mismatch.
  pub fn decode_xml(xml: &str) -> Result<Self, DateError> {
    let mut reader = Reader::from_str(xml);
    loop {
      match reader.read_event()? {
        Event::Start(_) => return element_text(&mut reader)?.parse(),
        Event::Empty(_) => return Err(DateError::mismatch("")),
        Event::Eof => return Err(DateError::mismatch(xml)),
        // Declaration, comments, processing instructions, whitespace.
        _ => {}
      }
    }
  }
}

/// Collect text content up to the end tag of the element just opened.
fn element_text(reader: &mut Reader<&[u8]>) -> Result<String, DateError> {
  let mut text = String::new();
  loop {
    match reader.read_event()? {
      Event::Text(t) => text.push_str(&t.unescape()?),
      Event::CData(c) => {
        let raw = c.into_inner();
        let s = std::str::from_utf8(&raw).map_err(|_| DateError::mismatch(text.clone()))?;
        text.push_str(s);
      }
      Event::End(_) => return Ok(text),
      Event::Start(_) | Event::Empty(_) | Event::Eof => return Err(DateError::mismatch(text)),
      _ => {}
    }
  }
}

/// XML 1.0 `Name`, restricted to what an element tag can carry.
fn is_xml_name(tag: &str) -> bool {
  let mut chars = tag.chars();
  match chars.next() {
    Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
    _ => return false,
  }
  chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn april_first() -> Date {
    Date::from_ymd(2019, 4, 1).unwrap()
  }

  #[test]
  fn to_xml_exact_bytes() {
    assert_eq!(april_first().to_xml("date").unwrap(), "<date>2019-04-01</date>");
  }

  #[test]
  fn encode_xml_into_caller_writer() {
    let mut writer = Writer::new(Vec::new());
    april_first().encode_xml(&mut writer, "start").unwrap();
    april_first().encode_xml(&mut writer, "end").unwrap();
    assert_eq!(
      writer.into_inner(),
      b"<start>2019-04-01</start><end>2019-04-01</end>".to_vec()
    );
  }

  #[test]
  fn decode_xml_element() {
    let date = Date::decode_xml("<date>2019-04-01</date>").unwrap();
    assert_eq!(date, april_first());
  }

  #[test]
  fn decode_xml_skips_declaration() {
    let xml = r#"<?xml version="1.0"?><!-- due --><due>2019-04-01</due>"#;
    assert_eq!(Date::decode_xml(xml).unwrap(), april_first());
  }

  #[test]
  fn decode_xml_resolves_references_and_cdata() {
    for xml in [
      "<date>2019&#45;04-01</date>",
      "<date>2019&#x2D;04&#x2d;01</date>",
      "<date><![CDATA[2019-04-01]]></date>",
      "<date>2019-<![CDATA[04]]>-01</date>",
      "<date>2019-04<!-- month -->-01</date>",
    ] {
      assert_eq!(Date::decode_xml(xml).unwrap(), april_first(), "{}", xml);
    }
  }

  #[test]
  fn decode_xml_agrees_with_serde_field() {
    #[derive(serde::Deserialize)]
    struct Payload {
      date: Date,
    }
    for inner in ["2019&#45;04-01", "<![CDATA[2019-04-01]]>"] {
      let standalone = Date::decode_xml(&format!("<date>{}</date>", inner)).unwrap();
      let field: Payload = quick_xml::de::from_str(&format!("<p><date>{}</date></p>", inner)).unwrap();
      assert_eq!(standalone, field.date);
    }
  }

  #[test]
  fn decode_xml_rejects_child_element() {
    let err = Date::decode_xml("<date><d>2019-04-01</d></date>").unwrap_err();
    assert!(err.is_format_mismatch());
  }

  #[test]
  fn encode_xml_rejects_malformed_tag() {
    for tag in ["", "a b<", "1date", "-x", "da>te"] {
      let err = april_first().to_xml(tag).unwrap_err();
      assert!(matches!(err, DateError::InvalidTag { .. }), "{:?}: {}", tag, err);
    }
  }

  #[test]
  fn encode_xml_accepts_qualified_tag() {
    assert_eq!(
      april_first().to_xml("ns:due-date").unwrap(),
      "<ns:due-date>2019-04-01</ns:due-date>"
    );
  }

  #[test]
  fn decode_xml_rejects_bad_content() {
    for xml in [
      "<date>2019-4-1</date>",
      "<date> 2019-04-01 </date>",
      "<date></date>",
      "<date/>",
      "",
    ] {
      let err = Date::decode_xml(xml).unwrap_err();
      assert!(err.is_format_mismatch(), "{:?}: {}", xml, err);
    }
  }
}
