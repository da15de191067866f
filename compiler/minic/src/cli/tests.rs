use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn input_only() {
    let options = parse_args(args(&["prog.mini"]));
    assert_eq!(
        options.ok(),
        Some(Options {
            input: PathBuf::from("prog.mini"),
            output: None,
            color: ColorMode::Auto,
            diagnostics: DiagnosticConfig::default(),
        })
    );
}

#[test]
fn all_options() {
    let options = parse_args(args(&[
        "--color=never",
        "prog.mini",
        "-o",
        "out.ll",
        "--error-limit=5",
    ]));
    assert_eq!(
        options.ok(),
        Some(Options {
            input: PathBuf::from("prog.mini"),
            output: Some(PathBuf::from("out.ll")),
            color: ColorMode::Never,
            diagnostics: DiagnosticConfig::with_limit(5),
        })
    );
}

#[test]
fn missing_input() {
    let error = parse_args(args(&[])).err();
    assert!(matches!(error, Some(DriverError::MissingInput)));
    assert_eq!(error.map(|e| e.exit_code()), Some(crate::EXIT_NO_INPUT));
}

#[test]
fn bad_arguments() {
    for bad in [
        args(&["a.mini", "-o"]),
        args(&["a.mini", "--color=sometimes"]),
        args(&["a.mini", "--error-limit=many"]),
        args(&["a.mini", "--verbose"]),
        args(&["a.mini", "b.mini"]),
    ] {
        let error = parse_args(bad.clone()).err();
        assert!(
            matches!(error, Some(DriverError::InvalidArguments(_))),
            "{bad:?} gave {error:?}"
        );
    }
}
