/// Portrait tool main entry point
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use portrait_tool::PortraitTool;
use portrait_tool::cli::Cli;
use portrait_tool::reporter::Reporter;
use std::io::Write;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = cli.resolve_settings()?;
    let reporter = Reporter::new("portrait_tool", cli.log_level);

    let tool = PortraitTool::new(
        &cli.source_folder,
        &cli.output_folder,
        settings,
        cli.run_options(),
        reporter,
    )?;
    tool.run().with_context(|| {
        format!(
            "processing '{}' into '{}' failed",
            cli.source_folder.display(),
            cli.output_folder.display()
        )
    })?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    if let Err(err) = run(&cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
