//! Doc-comment generation for lowered functions.
//!
//! Priority order: a specification block wins over an effects summary,
//! which wins over no documentation at all.

use crate::ast::{FunctionDecl, SpecBlock};

pub fn function_doc(func: &FunctionDecl) -> Vec<String> {
    if let Some(spec) = &func.spec {
        return spec_doc_lines(spec);
    }
    if func.is_pure {
        return vec!["Pure function - no side effects".to_string()];
    }
    if !func.effects.is_empty() {
        return vec![format!("Effects: {}", func.effects.join(", "))];
    }
    Vec::new()
}

/// A structured summary: intent, a "Business Rules" list, an "Expected
/// Outcomes" list, and a "Source" line, each included only when present.
fn spec_doc_lines(spec: &SpecBlock) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(intent) = &spec.intent {
        lines.push(intent.clone());
    }
    if !spec.rules.is_empty() {
        lines.push("Business Rules:".to_string());
        lines.extend(spec.rules.iter().map(|rule| format!("- {rule}")));
    }
    if !spec.postconditions.is_empty() {
        lines.push("Expected Outcomes:".to_string());
        lines.extend(spec.postconditions.iter().map(|outcome| format!("- {outcome}")));
    }
    if let Some(source) = &spec.source {
        lines.push(format!("Source: {source}"));
    }
    if lines.is_empty() && !spec.source_doc.is_empty() {
        lines.extend(spec.source_doc.lines().map(|l| l.trim().to_string()).filter(|l| !l.is_empty()));
    }
    lines
}
