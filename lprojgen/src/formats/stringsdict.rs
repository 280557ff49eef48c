//! Generation of Apple `.stringsdict` plural rule files.
//!
//! Only terms with plural definitions are written. Every entry uses a single `format`
//! variable of plural rule type, so the localized format key is always `%#@format@`.

use std::{io::Write, path::Path};

use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use time::OffsetDateTime;

use crate::{
    error::Error,
    header::{self, GENERATOR_LINE},
    options::FormatOptions,
    stats::{RunStats, StatsCollector},
    traits::Document,
    transform::{Target, transform},
    types::{PluralForms, TermRecord, is_quantity_tag},
};

/// File extension of generated plural rule files.
pub const EXTENSION: &str = "stringsdict";

const PLIST_DOCTYPE: &str = r#"plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd""#;

pub const LOCALIZED_FORMAT_KEY: &str = "NSStringLocalizedFormatKey";
pub const FORMAT_SPEC_TYPE_KEY: &str = "NSStringFormatSpecTypeKey";
pub const FORMAT_VALUE_TYPE_KEY: &str = "NSStringFormatValueTypeKey";
pub const PLURAL_RULE_TYPE: &str = "NSStringPluralRuleType";

/// Name of the single variable referenced by every localized format.
pub const FORMAT_VARIABLE: &str = "format";

/// A rendered `.stringsdict` plist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsDictDocument {
    xml: String,
}

impl StringsDictDocument {
    pub fn as_str(&self) -> &str {
        &self.xml
    }
}

impl Document for StringsDictDocument {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.xml.as_bytes()).map_err(Error::Io)
    }
}

pub struct StringsDictFormatter;

impl StringsDictFormatter {
    /// Renders the plural terms of `records` as a `.stringsdict` document.
    ///
    /// Incomplete and excluded records are counted as in
    /// [`StringsFormatter`](super::strings::StringsFormatter). Records with a singular
    /// definition are dropped without being counted anywhere.
    pub fn render(
        records: &[TermRecord],
        options: &FormatOptions,
    ) -> Result<(StringsDictDocument, RunStats), Error> {
        let mut stats = StatsCollector::new();
        let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

        write_prolog(&mut writer, options)?;
        writer.write_event(Event::Start(
            BytesStart::new("plist").with_attributes([("version", "1.0")]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("dict")))?;

        for record in records {
            if record.is_incomplete() {
                stats.record_invalid(&record.term);
                continue;
            }
            if options.is_excluded(&record.term) {
                tracing::debug!(term = %record.term, "excluding term");
                stats.record_excluded();
                continue;
            }
            let Some(forms) = record.definition.as_ref().and_then(|d| d.as_plural()) else {
                continue;
            };
            write_entry(&mut writer, record.plural_key(), forms, options)?;
            stats.record_processed();
        }

        writer.write_event(Event::End(BytesEnd::new("dict")))?;
        writer.write_event(Event::End(BytesEnd::new("plist")))?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        let xml = String::from_utf8_lossy(&bytes).into_owned();

        Ok((StringsDictDocument { xml }, stats.finish()))
    }

    /// Renders `records` and writes the document to `destination`.
    pub fn write<P: AsRef<Path>>(
        records: &[TermRecord],
        destination: P,
        options: &FormatOptions,
    ) -> Result<RunStats, Error> {
        let (document, stats) = Self::render(records, options)?;
        tracing::debug!(path = %destination.as_ref().display(), "writing stringsdict file");
        document.write_to(destination)?;
        Ok(stats)
    }
}

fn write_prolog<W: Write>(writer: &mut Writer<W>, options: &FormatOptions) -> Result<(), Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(PLIST_DOCTYPE)))?;

    let mut comments = vec![GENERATOR_LINE.to_string()];
    if let Some(source) = &options.source {
        comments.push(format!("Exported from {source}"));
    }
    if options.print_date
        && let Some(stamp) = header::timestamp(OffsetDateTime::now_utc())
    {
        comments.push(format!("Generated on {stamp}"));
    }
    for comment in comments {
        // `--` may not appear inside an XML comment.
        let mut comment = comment;
        while comment.contains("--") {
            comment = comment.replace("--", "- -");
        }
        writer.write_event(Event::Comment(BytesText::from_escaped(format!(" {comment} "))))?;
    }
    Ok(())
}

fn write_entry<W: Write>(
    writer: &mut Writer<W>,
    key: &str,
    forms: &PluralForms,
    options: &FormatOptions,
) -> Result<(), Error> {
    write_key(writer, key)?;
    writer.write_event(Event::Start(BytesStart::new("dict")))?;
    write_key(writer, LOCALIZED_FORMAT_KEY)?;
    write_string(writer, &format!("%#@{FORMAT_VARIABLE}@"))?;

    write_key(writer, FORMAT_VARIABLE)?;
    writer.write_event(Event::Start(BytesStart::new("dict")))?;
    write_key(writer, FORMAT_SPEC_TYPE_KEY)?;
    write_string(writer, PLURAL_RULE_TYPE)?;
    write_key(writer, FORMAT_VALUE_TYPE_KEY)?;
    write_string(writer, "d")?;
    for (tag, text) in forms.iter() {
        if !is_quantity_tag(tag) {
            tracing::warn!(term = key, tag = %tag, "unknown plural quantity tag");
        }
        write_key(writer, tag)?;
        write_string(
            writer,
            &transform(text, &options.substitutions, Target::StringsDict),
        )?;
    }
    writer.write_event(Event::End(BytesEnd::new("dict")))?;

    writer.write_event(Event::End(BytesEnd::new("dict")))?;
    Ok(())
}

fn write_key<W: Write>(writer: &mut Writer<W>, key: &str) -> Result<(), Error> {
    write_text_element(writer, "key", key)
}

fn write_string<W: Write>(writer: &mut Writer<W>, value: &str) -> Result<(), Error> {
    write_text_element(writer, "string", value)
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Definition;

    fn render(records: &[TermRecord], options: &FormatOptions) -> (String, RunStats) {
        let (document, stats) = StringsDictFormatter::render(records, options).unwrap();
        (document.as_str().to_string(), stats)
    }

    fn item_count() -> TermRecord {
        TermRecord::new(
            "item_count",
            Definition::plural([("one", "1 item"), ("other", "%d items")]),
        )
    }

    #[test]
    fn test_document_structure() {
        let (xml, stats) = render(&[item_count()], &FormatOptions::default());
        let expected = [
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#,
            "<!-- Generated by lprojgen from the translation source. -->",
            r#"<plist version="1.0">"#,
            "\t<dict>",
            "\t\t<key>item_count</key>",
            "\t\t<dict>",
            "\t\t\t<key>NSStringLocalizedFormatKey</key>",
            "\t\t\t<string>%#@format@</string>",
            "\t\t\t<key>format</key>",
            "\t\t\t<dict>",
            "\t\t\t\t<key>NSStringFormatSpecTypeKey</key>",
            "\t\t\t\t<string>NSStringPluralRuleType</string>",
            "\t\t\t\t<key>NSStringFormatValueTypeKey</key>",
            "\t\t\t\t<string>d</string>",
            "\t\t\t\t<key>one</key>",
            "\t\t\t\t<string>1 item</string>",
            "\t\t\t\t<key>other</key>",
            "\t\t\t\t<string>%d items</string>",
            "\t\t\t</dict>",
            "\t\t</dict>",
            "\t</dict>",
            "</plist>",
            "",
        ]
        .join("\n");
        assert_eq!(xml, expected);
        assert_eq!(stats.processed, 1);
    }

    #[test]
    fn test_uses_term_plural_as_key() {
        let (xml, _) = render(
            &[item_count().with_term_plural("items_count")],
            &FormatOptions::default(),
        );
        assert!(xml.contains("<key>items_count</key>"));
        assert!(!xml.contains("<key>item_count</key>"));
    }

    #[test]
    fn test_singular_definitions_are_dropped_silently() {
        let records = vec![TermRecord::new("hello", "World"), item_count()];
        let (xml, stats) = render(&records, &FormatOptions::default());
        assert!(!xml.contains("hello"));
        assert_eq!(stats.processed, 1);
        assert_eq!(stats.excluded, 0);
        assert!(stats.invalid.is_empty());
    }

    #[test]
    fn test_filtering_stats() {
        let records = vec![
            TermRecord::new("android_only_1", Definition::plural([("one", "x")])),
            TermRecord::new("no_forms", Definition::plural::<&str, &str>([])),
            TermRecord::new("", Definition::plural([("one", "x")])),
            item_count(),
        ];
        let (xml, stats) = render(&records, &FormatOptions::default());
        assert_eq!(stats.processed, 1);
        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.invalid, vec!["no_forms".to_string(), String::new()]);
        assert!(!xml.contains("android_only_1"));
    }

    #[test]
    fn test_values_are_transformed_for_xml() {
        let records = vec![TermRecord::new(
            "files",
            Definition::plural([
                ("one", r#"One "file" in %s"#),
                ("other", r"%d files\nin %1$s & <more>"),
            ]),
        )];
        let options =
            FormatOptions::default().with_substitutions([("file".to_string(), "doc".to_string())].into());
        let (xml, _) = render(&records, &options);
        assert!(xml.contains(r#"<string>One "doc" in %@</string>"#));
        assert!(xml.contains("<string>%d docs\nin %1$@ &amp; &lt;more&gt;</string>"));
    }

    #[test]
    fn test_source_comment() {
        let options = FormatOptions::default().with_source("https://example.com/export--v2");
        let (xml, _) = render(&[item_count()], &options);
        assert!(xml.contains("<!-- Exported from https://example.com/export- -v2 -->"));
        assert!(!xml.contains("Generated on"));
    }

    #[test]
    fn test_source_comment_with_dash_runs() {
        let options = FormatOptions::default().with_source("https://x.example/a---b----c");
        let (xml, _) = render(&[item_count()], &options);
        let comment = xml
            .lines()
            .find(|line| line.starts_with("<!-- Exported from"))
            .unwrap();
        let body = &comment["<!--".len()..comment.len() - "-->".len()];
        assert!(!body.contains("--"), "{comment}");
        assert_eq!(body, " Exported from https://x.example/a- - -b- - - -c ");
    }

    #[test]
    fn test_print_date_comment() {
        let options = FormatOptions::default().with_print_date(true);
        let (xml, _) = render(&[item_count()], &options);
        assert!(xml.contains("<!-- Generated on "));
    }
}
