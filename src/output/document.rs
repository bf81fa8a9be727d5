use crate::output::OutputError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fs;
use std::path::Path;

/// One persisted recipe inside a domain document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    /// Original URL the recipe was extracted from
    pub source: String,

    /// Ingredient strings in extraction order
    pub ingredients: Vec<String>,
}

/// Reads all recipe records from a domain document
///
/// The expected shape is a `<recipes>` root containing `<recipe source="...">`
/// elements, each with one `<ingredient>` child per entry.
///
/// # Errors
///
/// Returns [`OutputError::Malformed`] when the XML does not parse or a
/// `<recipe>` element lacks its `source` attribute.
pub fn read_document(path: &Path) -> Result<Vec<RecipeRecord>, OutputError> {
    let content = fs::read_to_string(path)?;

    let malformed = |message: String| OutputError::Malformed {
        path: path.display().to_string(),
        message,
    };

    let mut reader = Reader::from_str(&content);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut current: Option<RecipeRecord> = None;
    let mut in_ingredient = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"recipe" => {
                    let mut source = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        if attr.key.as_ref() == b"source" {
                            source = Some(attr.unescape_value()?.into_owned());
                        }
                    }
                    let source = source
                        .ok_or_else(|| malformed("<recipe> without source attribute".into()))?;
                    current = Some(RecipeRecord {
                        source,
                        ingredients: Vec::new(),
                    });
                }
                b"ingredient" => in_ingredient = true,
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if in_ingredient {
                    if let Some(record) = current.as_mut() {
                        record.ingredients.push(t.unescape()?.trim().to_string());
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"recipe" => {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                }
                b"ingredient" => in_ingredient = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(e.to_string())),
        }
        buf.clear();
    }

    Ok(records)
}

/// Writes a complete domain document, replacing any existing file
///
/// The document is serialized to a temp file next to the target and then
/// renamed into place, so readers never observe a partial write.
pub fn write_document(path: &Path, records: &[RecipeRecord]) -> Result<(), OutputError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("recipes")))?;

    for record in records {
        let mut recipe = BytesStart::new("recipe");
        recipe.push_attribute(("source", record.source.as_str()));
        writer.write_event(Event::Start(recipe))?;

        for ingredient in &record.ingredients {
            writer.write_event(Event::Start(BytesStart::new("ingredient")))?;
            writer.write_event(Event::Text(BytesText::new(ingredient)))?;
            writer.write_event(Event::End(BytesEnd::new("ingredient")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("recipe")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("recipes")))?;

    let tmp_path = path.with_extension("xml.tmp");
    fs::write(&tmp_path, writer.into_inner())?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(source: &str, ingredients: &[&str]) -> RecipeRecord {
        RecipeRecord {
            source: source.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_document_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("example.com.xml");

        write_document(&path, &[]).unwrap();
        assert!(path.is_file());
        assert!(read_document(&path).unwrap().is_empty());
    }

    #[test]
    fn test_records_round_trip_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("example.com.xml");

        let records = vec![
            record("https://example.com/r/1", &["2 eggs", "1 cup flour"]),
            record("https://example.com/r/2", &["250 ml milk"]),
        ];
        write_document(&path, &records).unwrap();

        assert_eq!(read_document(&path).unwrap(), records);
    }

    #[test]
    fn test_special_characters_escaped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("example.com.xml");

        let records = vec![record(
            "https://example.com/r?a=1&b=2",
            &["salt & pepper", "<1 tsp sugar"],
        )];
        write_document(&path, &records).unwrap();

        assert_eq!(read_document(&path).unwrap(), records);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("example.com.xml");

        write_document(&path, &[record("https://example.com/r/1", &["2 eggs"])]).unwrap();

        let names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["example.com.xml".to_string()]);
    }

    #[test]
    fn test_malformed_document_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.xml");
        fs::write(&path, "<recipes><recipe>").unwrap();

        // Missing source attribute
        let result = read_document(&path);
        assert!(matches!(result, Err(OutputError::Malformed { .. })));
    }
}
