//! Config loading that only lets "not found" escape the startup layer
//!
//! Run with `RUST_LOG=debug` to see the cause chain as well as the located trace.

use errnote::{Caused, Detailed, Error, Failure, Fault, LoggingTransformer, OptionExt, ResultExt};

/// The one failure callers are allowed to depend on
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct NotFound(Error);

impl Failure for NotFound {
    fn as_caused(&self) -> Option<&dyn Caused> {
        self.0.as_caused()
    }

    fn as_annotatable(&mut self) -> Option<&mut dyn errnote::Annotatable> {
        self.0.as_annotatable()
    }

    fn as_detailed(&self) -> Option<&dyn Detailed> {
        self.0.as_detailed()
    }
}

fn is_not_found(err: &dyn Failure) -> bool {
    err.is::<NotFound>()
}

fn get_config(path: &str) -> Result<Vec<u8>, Fault> {
    match std::fs::read(path) {
        Ok(data) => Ok(data),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let wrapped = Error::with_cause(Box::new(err), "couldn't find config file");
            Err(Box::new(NotFound(wrapped)))
        }
        Err(err) => Err(Error::with_cause(Box::new(err), "error reading config file").into()),
    }
}

fn start_foo(path: &str) -> Result<(), Fault> {
    let data = get_config(path).pass_err("can't start foo", &[&is_not_found])?;
    log::info!("foo started with {} bytes of config", data.len());
    Ok(())
}

fn bootstrap(path: &str) -> Result<(), Fault> {
    start_foo(path).note_err("can't bootstrap")
}

fn main() -> anyhow::Result<()> {
    LoggingTransformer::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_new("usage: bootstrap <config path>")?;

    match bootstrap(&path) {
        Ok(()) => {
            println!("bootstrapped from {path}");
            Ok(())
        }
        Err(err) => {
            println!("not found: {}", is_not_found(err.as_ref()));
            println!("{}", errnote::details(Some(err.as_ref())));
            LoggingTransformer::log_chain(err.as_ref());
            anyhow::bail!("{err}")
        }
    }
}
