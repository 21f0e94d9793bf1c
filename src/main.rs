use chunktag::application::{InspectService, TagHistogram};
use chunktag::cli::output::{
    format_code_conversions, format_compact_domain, format_histogram, format_span_list,
    format_tag_list, DEFAULT_CODE_INPUTS,
};
use chunktag::cli::{Cli, Commands};
use chunktag::domain::annotation::parse_line;
use chunktag::domain::{ChunkSpan, ChunkTag};
use chunktag::error::ChunkError;
use chunktag::infrastructure::Config;
use clap::Parser;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ChunkError> {
    match cli.command {
        Commands::Tags => {
            print!("{}", format_tag_list(ChunkTag::all()));
            Ok(())
        }
        Commands::Codes { names } => {
            print!("{}", format_compact_domain());
            println!();
            if names.is_empty() {
                print!("{}", format_code_conversions(&DEFAULT_CODE_INPUTS));
            } else {
                print!("{}", format_code_conversions(names.as_slice()));
            }
            Ok(())
        }
        Commands::Format { left, right, label } => {
            let span = ChunkSpan::new(left, right, label.as_deref());
            println!("{}", span);
            Ok(())
        }
        Commands::Inspect {
            line,
            tokens,
            strict_tags,
        } => {
            let config = Config::resolve(cli.config.as_deref())?;
            let spans = InspectService::new(config)
                .with_strict_tags(strict_tags)
                .execute(&line, tokens)?;
            println!("{}", format_span_list(&spans).trim_end());
            Ok(())
        }
        Commands::Report { line } => {
            let spans = parse_line(&line)?;
            println!(
                "{}",
                format_histogram(&TagHistogram::from_spans(&spans)).trim_end()
            );
            Ok(())
        }
        Commands::Config { key } => {
            let config = Config::resolve(cli.config.as_deref())?;
            match key {
                Some(k) => println!("{}", config.get(&k)?),
                None => print!("{}", config.to_toml()?),
            }
            Ok(())
        }
    }
}
