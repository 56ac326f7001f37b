//! Heuristic Fallback Explanations
//!
//! Deterministic, rule-based text used whenever the text-generation
//! capability is unavailable or declines. Guaranteed to produce
//! non-empty output for any file name, extension and content.
//!
//! The declaration counters are plain regex scans, not tokenization:
//! matches inside string literals or comments overcount, and that
//! approximation is the contract.

use std::sync::LazyLock;

use regex::Regex;

static FUNCTION_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+\w+").expect("static pattern"));
static CONST_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const\s+\w+").expect("static pattern"));
static CLASS_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+\w+").expect("static pattern"));
static PYTHON_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+\w+").expect("static pattern"));

/// Either of the two textual markers signaling a cross-file dependency.
fn has_import_marker(content: &str) -> bool {
    content.contains("import ") || content.contains("require(")
}

/// Plain-language summary keyed on the file extension.
pub fn beginner_explanation(ext: &str, content: &str) -> String {
    let base = match ext {
        "js" => "This is a JavaScript file. It likely adds interactivity or logic to the application.",
        "ts" => "This is a TypeScript file. It likely adds interactivity or logic to the application.",
        "json" => "This is a data file. It stores settings or information in a structured format.",
        "html" => "This is the structure of a web page.",
        "css" => "This file controls how the website looks (colors, fonts, etc).",
        "md" => "This is a documentation file, usually explaining the project.",
        _ => "This is a source code file.",
    };

    let mut summary = base.to_string();
    if has_import_marker(content) {
        summary.push_str("\n\nIt imports other files to work together.");
    }
    summary
}

/// Structured bullet summary: line count plus approximate declaration
/// counts and framework notes for the extensions we can scan.
pub fn advanced_explanation(name: &str, ext: &str, content: &str) -> String {
    let mut details = format!("**File Analysis: {name}**\n\n");

    let lines = content.split('\n').count();
    details.push_str(&format!("- **Lines of Code**: {lines}\n"));

    if ext == "js" || ext == "ts" {
        let functions = FUNCTION_DECL.find_iter(content).count();
        let consts = CONST_DECL.find_iter(content).count();
        let classes = CLASS_DECL.find_iter(content).count();

        details.push_str(&format!("- **Functions**: {functions}\n"));
        details.push_str(&format!("- **Classes**: {classes}\n"));
        details.push_str(&format!("- **Constants**: {consts}\n"));

        if content.contains("react") {
            details.push_str("\n**Framework Detection**: React.js detected (Components, Hooks).");
        }
        if content.contains("express") {
            details.push_str("\n**Framework Detection**: Express.js server logic.");
        }
    }

    if ext == "py" {
        let defs = PYTHON_DEF.find_iter(content).count();
        details.push_str(&format!("- **Functions (def)**: {defs}\n"));
    }

    details
}

// =============================================================================
// Tests
// =============================================================================
