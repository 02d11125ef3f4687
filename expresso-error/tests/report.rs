use expresso_attrs::ErrorKind;
use expresso_error::{Error, ErrorKind};

/// A variable name was used that does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable `{}`", name),
    labels = ["this variable", ""],
    help = "variables are made of letters only",
)]
struct UnknownVariable {
    name: String,
}

/// An error with nothing to say besides its message.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something went wrong")]
struct Bare;

/// Renders the report for the given error to a string with the color codes removed.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.write_report("input", input, &mut buf).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn derived_methods() {
    let kind = UnknownVariable { name: "foo".to_string() };
    assert_eq!(kind.message(), "unknown variable `foo`");
    assert_eq!(kind.labels(), vec!["this variable".to_string(), String::new()]);
    assert_eq!(kind.help().as_deref(), Some("variables are made of letters only"));
}

#[test]
fn defaults_without_tags() {
    assert_eq!(Bare.message(), "something went wrong");
    assert!(Bare.labels().is_empty());
    assert_eq!(Bare.help(), None);
}

#[test]
fn display_uses_message() {
    let err = Error::new(vec![0..3], UnknownVariable { name: "foo".to_string() });
    assert_eq!(err.to_string(), "unknown variable `foo`");
}

#[test]
fn report_contains_message_label_and_help() {
    let input = "foo + bar";
    let err = Error::new(vec![0..3, 6..9], UnknownVariable { name: "foo".to_string() });
    let report = render(&err, input);

    assert!(report.contains("unknown variable `foo`"));
    assert!(report.contains("this variable"));
    assert!(report.contains("variables are made of letters only"));
    assert!(report.contains("foo + bar"));
}

#[test]
fn report_without_spans() {
    let err = Error::new(Vec::new(), Bare);
    let report = render(&err, "");
    assert!(report.contains("something went wrong"));
}
