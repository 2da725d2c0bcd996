use clap::Parser;
use miette::Result;
use poster::cli::{Cli, Commands};
use poster::output::Printer;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Render(args) => poster::cli::render::run(args, &printer)?,
        Commands::Palette(args) => poster::cli::palette::run(args, &printer)?,
        Commands::Validate(args) => poster::cli::validate::run(args, &printer)?,
        Commands::Init(args) => poster::cli::init::run(args, &printer)?,
        Commands::Watch(args) => poster::cli::watch::run(args, &printer)?,
        Commands::Completions(args) => poster::cli::completions::run(args)?,
    }

    Ok(())
}
