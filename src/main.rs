use anyhow::Context;
use clap::Parser;
use component_ready::{handle_render_command, Cli, Commands, ComponentKind};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --verbose enables DEBUG, otherwise RUST_LOG or WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => {
            let markup = handle_render_command(&args)
                .with_context(|| format!("Failed to render component :{}", args.kind))?;
            let mut stdout = std::io::stdout();
            stdout
                .write_all(markup.as_str().as_bytes())
                .context("Failed to write markup to stdout")?;
            if !markup.is_empty() {
                writeln!(stdout).context("Failed to write markup to stdout")?;
            }
            Ok(())
        }
        Commands::List => {
            for kind in ComponentKind::ALL {
                println!("{}", kind);
            }
            Ok(())
        }
    }
}
