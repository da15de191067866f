#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::Line;

fn render(f: impl FnOnce(&mut TerminalEmitter<Vec<u8>>)) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    f(&mut emitter);
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn diagnostics_render_one_per_line() {
    let out = render(|e| {
        e.emit_all(&[
            Diagnostic::lexical(Line::new(2), "unrecognized symbol '$'"),
            Diagnostic::semantic(Line::new(4), "undeclared variable y"),
        ]);
    });
    assert_eq!(
        out,
        "Lexical error: line 2 -- unrecognized symbol '$'\n\
         Semantic error: line 4 -- undeclared variable y\n"
    );
}

#[test]
fn summary_reports_success() {
    let out = render(|e| e.emit_summary(0));
    assert_eq!(out, "\n compilation successful\n");
}

#[test]
fn summary_reports_error_count() {
    let out = render(|e| e.emit_summary(3));
    assert_eq!(out, "\n 3 errors detected\n");
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn colored_output_wraps_kind() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&Diagnostic::syntax(Line::new(1), "unexpected token"));
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(out.starts_with("\x1b[1;31mSyntax error\x1b[0m"));
}
