//! Reading the term export and writing the generated files.

use std::path::{Path, PathBuf};

use lprojgen::{
    FormatOptions, RunStats, StringsDictFormatter, StringsFormatter, formats::stringsdict,
    source::load_records,
};

/// Default `.stringsdict` destination for `language`, relative to the working directory.
pub fn default_stringsdict_path(language: &str) -> PathBuf {
    PathBuf::from(format!("{language}.lproj"))
        .join(format!("Localizable.{}", stringsdict::EXTENSION))
}

/// Generates the `.strings` files of `language` below `root`.
pub fn generate_strings(
    input: &Path,
    language: &str,
    root: &Path,
    options: &FormatOptions,
) -> Result<RunStats, String> {
    let records = load_records(input)
        .map_err(|e| format!("Error reading {}: {}", input.display(), e))?;
    tracing::info!(records = records.len(), language, "generating strings files");

    let (document, stats) = StringsFormatter::write(&records, language, options);
    document
        .write_all(root)
        .map_err(|e| format!("Error writing output: {}", e))?;
    for path in document.paths() {
        tracing::info!(path = %root.join(path).display(), "wrote strings file");
    }
    stats.log();
    Ok(stats)
}

/// Generates one `.stringsdict` file at `output`.
pub fn generate_stringsdict(
    input: &Path,
    output: &Path,
    options: &FormatOptions,
) -> Result<RunStats, String> {
    let records = load_records(input)
        .map_err(|e| format!("Error reading {}: {}", input.display(), e))?;
    tracing::info!(records = records.len(), "generating stringsdict file");

    let stats = StringsDictFormatter::write(&records, output, options)
        .map_err(|e| format!("Error writing output: {}", e))?;
    tracing::info!(path = %output.display(), "wrote stringsdict file");
    stats.log();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TERMS: &str = r#"[
        {"term": "hello", "definition": "Bonjour", "context": "en.lproj/Localizable.strings"},
        {"term": "apples", "definition": {"one": "Une pomme", "other": "%d pommes"},
         "context": "en.lproj/Localizable.strings"}
    ]"#;

    #[test]
    fn test_default_stringsdict_path() {
        assert_eq!(
            default_stringsdict_path("fr"),
            PathBuf::from("fr.lproj/Localizable.stringsdict")
        );
    }

    #[test]
    fn test_generate_both_formats() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("terms.json");
        fs::write(&input, TERMS).unwrap();
        let options = FormatOptions::default();

        let stats = generate_strings(&input, "fr", temp_dir.path(), &options).unwrap();
        assert_eq!(stats.processed, 2);
        let strings =
            fs::read_to_string(temp_dir.path().join("fr.lproj/Localizable.strings")).unwrap();
        assert!(strings.contains(r#""apples" = "Une pomme";"#));

        let output = temp_dir.path().join("fr.lproj/Localizable.stringsdict");
        let stats = generate_stringsdict(&input, &output, &options).unwrap();
        assert_eq!(stats.processed, 1);
        assert!(fs::read_to_string(output).unwrap().contains("<string>%d pommes</string>"));
    }

    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let err = generate_strings(
            &temp_dir.path().join("nope.json"),
            "fr",
            temp_dir.path(),
            &FormatOptions::default(),
        )
        .unwrap_err();
        assert!(err.starts_with("Error reading"));
    }
}
