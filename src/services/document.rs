//! Reference document renderer.
//!
//! Turns catalog descriptors into Markdown. The output is a direct
//! transcription: names, argument lists and descriptions are written
//! verbatim, Markdown syntax inside them included.

use crate::config::DocumentConfig;
use crate::models::FunctionDescriptor;

/// A headed group of function blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Level-2 heading text
    pub heading: &'a str,
    /// Prose line written under the heading, if any
    pub intro: Option<&'a str>,
}

/// Section for the primary-pattern query
pub const FUNCTIONS_SECTION: Section<'static> = Section {
    heading: "Functions",
    intro: None,
};

/// Section for the internal-pattern query
pub const INTERNAL_FUNCTIONS_SECTION: Section<'static> = Section {
    heading: "Internal functions",
    intro: Some("These are mostly function for which a more comfortable wrapper function exists."),
};

/// Render the header block that opens the document.
pub fn render_header(document: &DocumentConfig) -> String {
    format!(
        "\n# {}\n\n{} [{}]({}).\n\n",
        document.title, document.description, document.link_text, document.link_url
    )
}

/// Render one function block.
///
/// Heading, description, synopsis and return type, each separated by a
/// blank line, followed by two blank lines.
pub fn render_function(function: &FunctionDescriptor) -> String {
    let mut block = String::new();
    block.push_str(&format!("### {}", function.name));
    block.push_str(&format!("\n\n{}", function.description));
    block.push_str(&format!("\n\n__Synopsis:__ `{}`", function.synopsis()));
    block.push_str(&format!("\n\n__Returntype:__ `{}`", function.return_type));
    block.push_str("\n\n\n");
    block
}

/// Render a section: its heading, optional intro line, then one block per
/// descriptor in the order given.
pub fn render(descriptors: &[FunctionDescriptor], section: &Section<'_>) -> String {
    let mut out = format!("\n## {}\n\n", section.heading);
    if let Some(intro) = section.intro {
        out.push_str(&format!("{}\n\n", intro));
    }
    for function in descriptors {
        out.push_str(&render_function(function));
    }
    out
}

/// Assemble the full document: header, primary section, internal section.
pub fn compose_document(document: &DocumentConfig, primary: &str, internal: &str) -> String {
    let mut doc = render_header(document);
    doc.reserve(primary.len() + internal.len());
    doc.push_str(primary);
    doc.push_str(internal);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string_fn() -> FunctionDescriptor {
        FunctionDescriptor::new(
            "h3_to_string",
            "h3index bigint",
            "text",
            Some("Converts an index to its string form.".to_string()),
        )
    }

    #[test]
    fn test_render_header_defaults() {
        assert_eq!(
            render_header(&DocumentConfig::default()),
            "\n# PostgreSQL H3 extension\n\n\
             Postgresql extension to wrap the hexagonal hierarchical geospatial indexing system of \
             [h3 library](https://github.com/uber/h3).\n\n"
        );
    }

    #[test]
    fn test_render_function_exact() {
        assert_eq!(
            render_function(&to_string_fn()),
            "### h3_to_string\n\n\
             Converts an index to its string form.\n\n\
             __Synopsis:__ `h3_to_string(h3index bigint)`\n\n\
             __Returntype:__ `text`\n\n\n"
        );
    }

    #[test]
    fn test_render_contains_expected_parts() {
        let out = render(&[to_string_fn()], &FUNCTIONS_SECTION);

        assert!(out.starts_with("\n## Functions\n\n"));
        assert!(out.contains("### h3_to_string"));
        assert!(out.contains("Converts an index to its string form."));
        assert!(out.contains("`h3_to_string(h3index bigint)`"));
        assert!(out.contains("`text`"));
    }

    #[test]
    fn test_missing_description_renders_blank_line() {
        let f = FunctionDescriptor::new("h3_get_resolution", "h3index", "integer", None);
        let out = render_function(&f);

        assert!(out.starts_with("### h3_get_resolution\n\n\n\n__Synopsis:__"));
        assert!(!out.contains("None"));
        assert!(!out.contains("null"));
    }

    #[test]
    fn test_zero_argument_synopsis() {
        let f = FunctionDescriptor::new("h3_get_extension_version", "", "text", None);
        assert!(render_function(&f).contains("`h3_get_extension_version()`"));
    }

    #[test]
    fn test_blocks_keep_input_order() {
        let a = FunctionDescriptor::new("h3_a", "", "void", None);
        let b = FunctionDescriptor::new("h3_b", "", "void", None);
        let out = render(&[a, b], &FUNCTIONS_SECTION);

        let pos_a = out.find("### h3_a").unwrap();
        let pos_b = out.find("### h3_b").unwrap();
        assert!(pos_a < pos_b);
    }

    #[test]
    fn test_markdown_passes_through() {
        let f = FunctionDescriptor::new(
            "h3_*bold*",
            "a `text`",
            "setof record",
            Some("Uses `backticks`, **bold** and <br>".to_string()),
        );
        let out = render_function(&f);

        assert!(out.contains("### h3_*bold*"));
        assert!(out.contains("Uses `backticks`, **bold** and <br>"));
        assert!(out.contains("`h3_*bold*(a `text`)`"));
    }

    #[test]
    fn test_empty_internal_section() {
        let out = render(&[], &INTERNAL_FUNCTIONS_SECTION);
        assert_eq!(
            out,
            "\n## Internal functions\n\n\
             These are mostly function for which a more comfortable wrapper function exists.\n\n"
        );
    }

    #[test]
    fn test_compose_document_order() {
        let primary = render(&[to_string_fn()], &FUNCTIONS_SECTION);
        let internal = render(
            &[FunctionDescriptor::new("_h3_raw", "", "void", None)],
            &INTERNAL_FUNCTIONS_SECTION,
        );
        let doc = compose_document(&DocumentConfig::default(), &primary, &internal);

        let header = doc.find("# PostgreSQL H3 extension").unwrap();
        let functions = doc.find("## Functions").unwrap();
        let block = doc.find("### h3_to_string").unwrap();
        let internal_heading = doc.find("## Internal functions").unwrap();
        let internal_block = doc.find("### _h3_raw").unwrap();

        assert!(header < functions);
        assert!(functions < block);
        assert!(block < internal_heading);
        assert!(internal_heading < internal_block);
        assert_eq!(doc.matches("# PostgreSQL H3 extension").count(), 1);
    }

    #[test]
    fn test_compose_document_custom_header() {
        let document = DocumentConfig {
            title: "Geo".to_string(),
            description: "Geo helpers for".to_string(),
            link_text: "geo".to_string(),
            link_url: "https://example.org/geo".to_string(),
        };
        let doc = compose_document(&document, "", "");
        assert_eq!(doc, "\n# Geo\n\nGeo helpers for [geo](https://example.org/geo).\n\n");
    }
}
