use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ullama: ask a KoboldAI-style text generation server from the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON preferences file layered over the bundled defaults.
    #[arg(long, global = true, env = "ULLAMA_PREFS")]
    pub prefs: Option<PathBuf>,

    /// Server address; overrides `llama_host`.
    #[arg(long, global = true, env = "LLAMA_HOST")]
    pub host: Option<String>,

    /// Override a single preference (e.g., --set llama_top_k=20). Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,

    /// Increase verbosity (use multiple times for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Type a launcher query and walk through the results.
    Query(QueryArgs),
    /// Send a prompt straight to the server.
    Ask(AskArgs),
    /// Show the model served by the configured host.
    Models,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Query text. The extension keyword is prepended unless already present.
    #[arg(trailing_var_arg = true)]
    pub words: Vec<String>,

    /// Select the first item of every list instead of prompting.
    #[arg(long)]
    pub first: bool,

    /// Print the answer instead of copying it to the clipboard.
    #[arg(long)]
    pub no_copy: bool,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Prompt text.
    #[arg(required = true, trailing_var_arg = true)]
    pub words: Vec<String>,

    /// Copy the answer to the clipboard as well as printing it.
    #[arg(long)]
    pub copy: bool,
}
