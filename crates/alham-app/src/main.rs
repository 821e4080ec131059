mod cli;
mod repl;

use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root — two levels up from crates/alham-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "warn".parse().expect("valid default directive")),
            ),
        )
        .init();

    if let Err(err) = repl::run(args).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
