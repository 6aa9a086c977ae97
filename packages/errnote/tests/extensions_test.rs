//! `Result`/`Option` extensions and the early-return macros

use errnote::{Error, Failure, Fault, LoggingTransformer, Message, OptionExt, ResultExt};

#[derive(Debug, thiserror::Error)]
#[error("permission denied")]
struct Denied(Error);

impl Failure for Denied {
    fn as_annotatable(&mut self) -> Option<&mut dyn errnote::Annotatable> {
        self.0.as_annotatable()
    }
}

fn read_config(path: &str) -> Result<String, std::io::Error> {
    std::fs::read_to_string(path)
}

fn load(path: &str) -> Result<String, Error> {
    read_config(path).wrap_err(format!("loading {path}"))
}

fn parse_port(raw: &str) -> errnote::Result<u16> {
    errnote::ensure!(!raw.is_empty(), "port is empty");
    match raw.parse::<u16>() {
        Ok(port) => Ok(port),
        Err(_) => errnote::bail!("invalid port {raw:?}"),
    }
}

fn parse_port_boxed(raw: &str) -> Result<u16, Fault> {
    errnote::ensure!(!raw.is_empty(), "port is empty");
    raw.parse::<u16>().note_err("parsing port")
}

#[test]
fn ok_values_pass_through() {
    let ok: Result<u8, Message> = Ok(3);
    assert_eq!(ok.clone().wrap_err("unused").ok(), Some(3));
    assert_eq!(ok.clone().mask_err("unused").ok(), Some(3));
    assert_eq!(ok.clone().note_err("unused").ok(), Some(3));
    assert_eq!(ok.pass_err("unused", &[]).ok(), Some(3));
    assert_eq!(Some(4).ok_or_new("unused").ok(), Some(4));
}

#[test]
fn wrap_err_keeps_io_error_as_cause() {
    let err = load("/definitely/not/here.toml").expect_err("file does not exist");
    assert!(err.to_string().starts_with("loading /definitely/not/here.toml: "));

    let cause = err.cause().expect("wrap records a cause");
    let io = cause.downcast_ref::<std::io::Error>().expect("io error keeps its type");
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn mask_err_hides_the_io_error() {
    let err = read_config("/definitely/not/here.toml")
        .mask_err("config unavailable")
        .expect_err("file does not exist");
    assert!(err.cause().is_none());
    assert!(err.to_string().starts_with("config unavailable: "));
}

#[test]
fn note_err_preserves_annotatable_types() {
    let failing: Result<(), Denied> = Err(Denied(errnote::new("uid 1000")));
    let err = failing.note_err("opening vault").expect_err("still failing");
    let denied = err.downcast_ref::<Denied>().expect("type survives noting");
    assert_eq!(denied.0.to_string(), "opening vault: uid 1000");
}

#[test]
fn pass_err_applies_predicates() {
    let is_denied = |err: &dyn Failure| err.is::<Denied>();

    let kept: Result<(), Denied> = Err(Denied(errnote::new("uid 1000")));
    let kept = kept.pass_err("syncing", &[&is_denied]).expect_err("still failing");
    assert!(kept.is::<Denied>());

    let hidden: Result<(), Message> = Err(Message::new("disk full"));
    let hidden = hidden.pass_err("syncing", &[&is_denied]).expect_err("still failing");
    assert!(hidden.is::<Error>());
    assert_eq!(hidden.to_string(), "syncing: disk full");
}

#[test]
fn ok_or_new_builds_root_error() {
    let err = None::<u8>.ok_or_new("no port configured").expect_err("value was absent");
    assert_eq!(err.to_string(), "no port configured");
    assert!(err.cause().is_none());
}

#[test]
fn bail_and_ensure_return_root_errors() {
    assert_eq!(parse_port("8080").ok(), Some(8080));
    assert_eq!(
        parse_port("").map_err(|err| err.to_string()),
        Err("port is empty".to_string())
    );
    assert_eq!(
        parse_port("eighty").map_err(|err| err.to_string()),
        Err("invalid port \"eighty\"".to_string())
    );
}

#[test]
fn bail_converts_into_boxed_faults() {
    let empty = parse_port_boxed("").expect_err("empty input");
    assert!(empty.is::<Error>());

    let invalid = parse_port_boxed("x").expect_err("not a number");
    let wrapper = invalid.downcast_ref::<Error>().expect("parse errors get wrapped");
    let cause = wrapper.cause().expect("wrap records a cause");
    assert!(cause.is::<std::num::ParseIntError>());
}

#[test]
fn logging_reports_do_not_consume_errors() {
    LoggingTransformer::init_test();

    let err = load("/definitely/not/here.toml").expect_err("file does not exist");
    LoggingTransformer::log_details(&err);
    LoggingTransformer::log_chain(&err);
    LoggingTransformer::log_masked("load", &err);
    assert!(err.cause().is_some());
}
