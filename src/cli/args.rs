use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "deepl")]
#[command(about = "Translate text from the command line with the DeepL API")]
#[command(version)]
pub struct Args {
    /// Suppress status messages on stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text (reads from stdin if no text is given)
    Translate {
        /// Source language code (detected automatically if omitted)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code (e.g. EN-US, DE, RU)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Text to translate
        text: Vec<String>,
    },
    /// Show the stored API key
    ViewKey,
    /// Replace the stored API key
    UpdateKey {
        /// New API key (prompted for if omitted)
        key: Option<String>,
    },
    /// Delete the stored API key
    DeleteKey,
    /// List supported language codes
    Languages,
}
