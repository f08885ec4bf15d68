//! Inline documentation lookup for configuration sections.
//!
//! The documentation lives in an annotated YAML resource embedded at
//! compile time. Blocks are headed by `# Section: <name>` marker lines and
//! run until the next marker; `---` document separators are skipped. This
//! is read-only, static data with no write path.

const DOCS: &str = include_str!("data/docs.yaml");

const SECTION_MARKER: &str = "# Section: ";

/// The documentation blocks as `(section, text)` pairs, in file order.
///
/// A repeated section name overwrites the earlier entry's text in place,
/// keeping the original position.
pub fn doc_sections() -> Vec<(String, String)> {
    let mut sections: Vec<(String, String)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in DOCS.lines() {
        if line.starts_with("---") {
            continue;
        }
        if let Some(name) = line.strip_prefix(SECTION_MARKER) {
            let name = name.trim().to_string();
            current = Some(match sections.iter().position(|(key, _)| *key == name) {
                Some(index) => {
                    sections[index].1.clear();
                    index
                }
                None => {
                    sections.push((name, String::new()));
                    sections.len() - 1
                }
            });
        }
        // Lines before the first marker belong to no section.
        let Some(index) = current else { continue };
        sections[index].1.push_str(line);
        sections[index].1.push('\n');
    }

    sections
}

/// Documentation text for `section`, every section when empty, and an
/// empty string for unknown names.
pub fn doc_text(section: &str) -> String {
    doc_sections()
        .into_iter()
        .filter(|(name, _)| section.is_empty() || name == section)
        .map(|(_, text)| text)
        .collect()
}

/// Print documentation for `section`.
///
/// An empty `section` prints every block in file order. Unknown names
/// print nothing and do not error.
pub fn help(section: &str) {
    for (name, text) in doc_sections() {
        if section.is_empty() || section == name {
            println!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_sections_in_file_order() {
        let names: Vec<String> = doc_sections().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["general", "observations", "datasets", "fit", "flux_points"]
        );
    }

    #[test]
    fn test_doc_text_for_known_section() {
        let text = doc_text("observations");
        assert!(text.starts_with("# Section: observations"));
        assert!(text.contains("datastore"));
    }

    #[test]
    fn test_doc_text_empty_section_returns_everything() {
        let all = doc_text("");
        for (_, text) in doc_sections() {
            assert!(all.contains(&text));
        }
    }

    #[test]
    fn test_doc_text_unknown_section_is_empty() {
        assert_eq!(doc_text("nonexistent_section"), "");
    }
}
