// src/render/typst.rs
//! Lower a `Document` to Typst markup. User text only ever appears inside
//! escaped string literals, so it cannot inject markup.

use std::fmt::Write;

use super::document::{Document, Entry, ProjectEntry, ResumeLayout, Section, PAPER};

const PAGE_FILL: &str = "#f8fafc";
const ACCENT: &str = "#2563eb";
const INK: &str = "#1e293b";
const MUTED: &str = "#475569";
const RULE: &str = "#e2e8f0";
const TAG_LABEL: &str = "#64748b";
const TAG_PANEL: &str = "#f1f5f9";

pub fn to_typst(doc: &Document) -> String {
    let mut out = String::new();
    let paper = match doc {
        Document::Resume(layout) => layout.paper,
        Document::Error { .. } => PAPER,
    };
    let _ = writeln!(
        out,
        "#set page(paper: {}, margin: 40pt, fill: rgb(\"{}\"))",
        string_literal(paper),
        PAGE_FILL
    );
    let _ = writeln!(out, "#set text(size: 12pt, fill: rgb(\"{}\"))", INK);
    out.push('\n');

    match doc {
        Document::Resume(layout) => write_layout(&mut out, layout),
        Document::Error { message } => {
            let _ = writeln!(out, "#text({})", string_literal(message));
        }
    }
    out
}

fn write_layout(out: &mut String, layout: &ResumeLayout) {
    let _ = writeln!(
        out,
        "#block(width: 100%, inset: (bottom: 20pt), below: 30pt, stroke: (bottom: 2pt + rgb(\"{}\")))[",
        ACCENT
    );
    let _ = writeln!(
        out,
        "  #block(below: 8pt, text(size: 28pt, weight: \"bold\", {}))",
        string_literal(&layout.header.name)
    );
    for line in &layout.header.contact {
        let _ = writeln!(
            out,
            "  #block(below: 4pt, text(size: 12pt, fill: rgb(\"{}\"), {}))",
            MUTED,
            string_literal(line)
        );
    }
    out.push_str("]\n");

    for section in &layout.sections {
        write_section(out, section);
    }
}

fn write_section(out: &mut String, section: &Section) {
    let _ = writeln!(
        out,
        "#block(width: 100%, fill: white, inset: 15pt, radius: 8pt, below: 20pt)["
    );
    let _ = writeln!(
        out,
        "  #block(width: 100%, inset: (bottom: 8pt), below: 12pt, stroke: (bottom: 1pt + rgb(\"{}\")), text(size: 18pt, weight: \"bold\", fill: rgb(\"{}\"), {}))",
        RULE,
        ACCENT,
        string_literal(section.title)
    );
    for entry in &section.entries {
        match entry {
            Entry::Line(line) => {
                let _ = writeln!(out, "  #block(below: 8pt, text({}))", string_literal(line));
            }
            Entry::Project(project) => write_project(out, project),
        }
    }
    out.push_str("]\n");
}

fn write_project(out: &mut String, project: &ProjectEntry) {
    out.push_str("  #block(below: 8pt)[\n");
    let _ = writeln!(
        out,
        "    #block(below: 4pt, text(size: 14pt, weight: \"bold\", {}))",
        string_literal(&project.title)
    );

    let description = project
        .description
        .iter()
        .map(|line| format!("#{}", string_literal(line)))
        .collect::<Vec<_>>()
        .join("#linebreak()");
    let _ = writeln!(
        out,
        "    #block(below: 8pt, text(fill: rgb(\"{}\"))[{}])",
        MUTED, description
    );

    let tags = project
        .technologies
        .iter()
        .map(|tech| {
            format!(
                "#box(fill: rgb(\"{}\"), inset: (x: 6pt, y: 2pt), radius: 4pt, text(fill: rgb(\"{}\"), {}))",
                RULE,
                MUTED,
                string_literal(tech)
            )
        })
        .collect::<Vec<_>>()
        .join("#h(4pt)");
    let _ = writeln!(
        out,
        "    #block(width: 100%, fill: rgb(\"{}\"), inset: (x: 8pt, y: 4pt), radius: 4pt, above: 4pt)[#set text(size: 10pt, fill: rgb(\"{}\")); #\"Technologies:\" #linebreak() {}]",
        TAG_PANEL, TAG_LABEL, tags
    );
    out.push_str("  ]\n");
}

/// Quote `s` as a Typst string literal
pub(crate) fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
