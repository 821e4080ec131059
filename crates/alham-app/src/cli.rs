use clap::Parser;

/// alham — an Islamic voice-and-chat assistant.
#[derive(Parser, Debug)]
#[command(name = "alham", version, about)]
pub struct Args {
    /// First name forwarded to the voice assistant as a template variable.
    #[arg(long, default_value = "User")]
    pub name: String,

    /// Chat model override.
    #[arg(long)]
    pub model: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
