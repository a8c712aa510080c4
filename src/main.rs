use std::process::ExitCode;

mod config;
mod error;
mod library;
mod materialize;
mod runtime;
mod tags;

#[cfg(test)]
mod test_support;

fn main() -> ExitCode {
    runtime::run()
}
