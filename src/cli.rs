//! CLI domain: parse, route, output and presentation only.
//! No filesystem logic; the route table dispatches to the execution variants.

mod demo;
mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_file_list, format_flags, format_purge_report};
pub use route::{command_name, RunContext};
