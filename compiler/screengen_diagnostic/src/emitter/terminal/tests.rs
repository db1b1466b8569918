use super::*;
use crate::ErrorCode;
use screengen_ir::Span;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message("second argument must be a map literal")
        .with_label(Span::new(10, 15), "expected a map literal")
        .with_secondary_label(Span::new(0, 5), "in this attribute")
        .with_note("the first argument names the target type")
        .with_suggestion("write `[\"from\": \"to\"]`")
}

fn render(mode: ColorMode, is_tty: bool, diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, is_tty);
    emitter.emit_all(diagnostics);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(ColorMode::Never, false, &[sample_diagnostic()]);
    assert!(text.contains("error[E1002]: second argument must be a map literal"));
    assert!(text.contains("--> 10..15: expected a map literal"));
    assert!(text.contains("0..5: in this attribute"));
    assert!(text.contains("= note: the first argument names the target type"));
    assert!(text.contains("= help:"));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, false, &[sample_diagnostic()]);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1002"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(render(ColorMode::Auto, true, &[sample_diagnostic()]).contains("\x1b["));
    assert!(!render(ColorMode::Auto, false, &[sample_diagnostic()]).contains("\x1b["));
}

#[test]
fn test_warning_header() {
    let diag = Diagnostic::warning(ErrorCode::W1001).with_message("unused keys");
    let text = render(ColorMode::Never, false, &[diag]);
    assert!(text.starts_with("warning[W1001]: unused keys"));
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E0001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E1001).with_message("error 2"),
    ];
    let text = render(ColorMode::Never, false, &diagnostics);
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

fn summary(errors: usize, warnings: usize) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_emit_summary_errors() {
    let text = summary(2, 1);
    assert_eq!(text, "error: aborting due to 2 previous errors; 1 warning emitted\n");
}

#[test]
fn test_emit_summary_single_error() {
    assert_eq!(summary(1, 0), "error: aborting due to previous error\n");
}

#[test]
fn test_emit_summary_warnings_only() {
    assert_eq!(summary(0, 3), "warning: 3 warnings emitted\n");
}

#[test]
fn test_emit_summary_clean() {
    assert_eq!(summary(0, 0), "");
}

#[test]
fn test_color_mode_parse() {
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
    assert!("sometimes".parse::<ColorMode>().is_err());
}
