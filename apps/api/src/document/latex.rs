//! LaTeX document assembly.
//!
//! `render_document` is pure: the same personal info and sections always
//! produce a byte-identical document. Storing the result is the caller's job,
//! so hand edits to a stored document survive until the next explicit render.

use crate::models::{PersonalInfo, Section};

const PREAMBLE: &str = "\\documentclass{resume}\n\\usepackage{graphicx}\n\\begin{document}\n";
const POSTAMBLE: &str = "\\end{resume}\n\\end{document}";

/// Document shown before anything has been rendered.
pub const PLACEHOLDER_DOCUMENT: &str = "\\documentclass{resume}
\\usepackage{graphicx}
\\begin{document}
\\name{Your Name}
\\begin{resume}

% Content will be populated here

\\end{resume}
\\end{document}";

/// Characters that must be backslash-escaped inside a LaTeX argument.
const LATEX_SPECIALS: &[char] = &['&', '#', '$', '%', '_', '{', '}'];

/// Renders the resume skeleton around the enhanced text of every section
/// that has any, in list order, separated by one blank line.
pub fn render_document(personal_info: &PersonalInfo, sections: &[Section]) -> String {
    let body = sections
        .iter()
        .filter(|s| !s.enhanced.is_empty())
        .map(|s| s.enhanced.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{PREAMBLE}\\name{{{name}}}\n\\begin{{resume}}\n\n{body}\n\n{POSTAMBLE}",
        name = escape_latex(&personal_info.full_name),
    )
}

/// Escapes `& # $ % _ { }` so user-entered text cannot break the markup.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if LATEX_SPECIALS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, enhanced: &str) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_string(),
            content: String::new(),
            enhanced: enhanced.to_string(),
        }
    }

    fn jane() -> PersonalInfo {
        PersonalInfo {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_skips_sections_without_enhanced_text() {
        let sections = vec![
            section("summary", "Enhanced Summary content"),
            section("skills", ""),
        ];
        let doc = render_document(&jane(), &sections);

        assert_eq!(doc.matches("Enhanced Summary content").count(), 1);
        assert!(doc.contains("\\name{Jane Doe}"));
    }

    #[test]
    fn test_render_exact_layout() {
        let sections = vec![section("a", "First"), section("b", "Second")];
        let doc = render_document(&jane(), &sections);

        let expected = "\\documentclass{resume}
\\usepackage{graphicx}
\\begin{document}
\\name{Jane Doe}
\\begin{resume}

First

Second

\\end{resume}
\\end{document}";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_render_with_no_enhanced_sections_leaves_empty_body() {
        let sections = vec![section("a", ""), section("b", "")];
        let doc = render_document(&PersonalInfo::default(), &sections);

        assert!(doc.contains("\\begin{resume}\n\n\n\n\\end{resume}"));
        assert!(doc.contains("\\name{}"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let sections = vec![section("a", "One"), section("b", "Two")];
        assert_eq!(
            render_document(&jane(), &sections),
            render_document(&jane(), &sections)
        );
    }

    #[test]
    fn test_escape_latex_specials() {
        assert_eq!(escape_latex("R&D_100%"), "R\\&D\\_100\\%");
        assert_eq!(escape_latex("{#$}"), "\\{\\#\\$\\}");
        assert_eq!(escape_latex("Plain Name"), "Plain Name");
    }

    #[test]
    fn test_name_is_escaped_but_body_is_verbatim() {
        let info = PersonalInfo {
            full_name: "Smith & Sons".to_string(),
            ..Default::default()
        };
        let sections = vec![section("a", "\\section{Skills} 100\\%")];
        let doc = render_document(&info, &sections);

        assert!(doc.contains("\\name{Smith \\& Sons}"));
        assert!(doc.contains("\\section{Skills} 100\\%"));
    }
}
