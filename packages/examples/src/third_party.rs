//! Mixing errnote with error types that know nothing about it

use errnote::{Caused, Failure, Fault, Foreign, ResultExt};
use std::fmt;

/// An error from a library that only implements `std::error::Error`
#[derive(Debug)]
struct DriverError {
    code: u16,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver returned code {}", self.code)
    }
}

impl std::error::Error for DriverError {}

/// A domain error that exposes its cause but takes no annotations
#[derive(Debug, thiserror::Error)]
#[error("user {id} unavailable")]
struct UserUnavailable {
    id: u32,
    cause: Fault,
}

impl Caused for UserUnavailable {
    fn cause(&self) -> Option<&dyn Failure> {
        Some(self.cause.as_ref())
    }
}

impl Failure for UserUnavailable {
    fn as_caused(&self) -> Option<&dyn Caused> {
        Some(self)
    }
}

fn query(id: u32) -> Result<String, Foreign<DriverError>> {
    if id == 0 {
        Ok("root".to_string())
    } else {
        Err(Foreign(DriverError { code: 503 }))
    }
}

fn fetch_user(id: u32) -> Result<String, Fault> {
    query(id)
        .wrap_err(format!("SELECT name FROM users WHERE id = {id}"))
        .map_err(|err| Box::new(UserUnavailable { id, cause: err.into() }) as Fault)
}

fn main() -> anyhow::Result<()> {
    errnote::LoggingTransformer::init();

    let noted = match fetch_user(7).note_err("rendering profile") {
        Ok(name) => return Err(anyhow::anyhow!("unexpected user {name}")),
        Err(err) => err,
    };
    println!("noted:  {noted}");
    for (depth, link) in errnote::chain(noted.as_ref()).enumerate() {
        println!("  #{depth} {}: {link}", link.concrete_type_name());
    }

    let masked = match fetch_user(7).mask_err("profile unavailable") {
        Ok(name) => return Err(anyhow::anyhow!("unexpected user {name}")),
        Err(err) => err,
    };
    let (cause, found) = errnote::cause(Some(&masked));
    println!("masked: {masked} (cause reported: {found}, cause present: {})", cause.is_some());

    errnote::LoggingTransformer::log_details(&masked);
    println!("{}", masked.details());
    Ok(())
}
