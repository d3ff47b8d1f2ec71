//! Debug utilities for inspecting compilation artifacts
//!
//! Renders the output of each phase as plain text, the same views a
//! front end would show side by side.

use super::ir::TacInstruction;
use super::CompilationResult;
use crate::lexer::Token;

/// Numbered TAC listing, one instruction per line
pub fn format_tac(instructions: &[TacInstruction]) -> String {
    instructions
        .iter()
        .enumerate()
        .map(|(i, instr)| format!("{:04}: {}", i, instr))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Token listing, one token per line
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full report of a compilation, one section per phase
pub fn render_report(result: &CompilationResult) -> String {
    let sections = [
        ("TOKENS", format_tokens(&result.tokens)),
        ("AST", result.ast.to_string()),
        ("TAC", format_tac(&result.tac)),
        ("OPTIMIZED TAC", format_tac(&result.optimized_tac)),
        ("ASSEMBLY", result.assembly.clone()),
        ("RESULT", result.result.to_string()),
    ];

    let mut out = String::new();
    for (title, body) in sections {
        out.push_str(&format!("== {} ==\n{}\n\n", title, body));
    }
    out.truncate(out.trim_end().len());
    out
}
