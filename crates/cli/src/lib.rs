pub mod cli;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod markup;
pub mod output;
pub mod watchlist;

pub use cli::{Cli, Command, InitArgs, MatchArgs, OutputFormat, StripArgs, WatchArgs};
pub use config::Config;
pub use engine::{AliasTable, CompiledPhrase, DEFAULT_MIN_TOKEN_LEN, match_phrase};
pub use error::{Error, ExitCode, Result};
pub use event::{MatchEvent, MatchedPhrase};
pub use markup::strip_markup;
pub use watchlist::{WatchError, WatchList};

#[cfg(test)]
pub mod test_utils;
