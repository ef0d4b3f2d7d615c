use tracing_subscriber::EnvFilter;
use weeklog::cli::Cli;
use weeklog::core::activity::load_builtin_week;
use weeklog::core::ReportRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let config = cli.report_config();
    tracing::debug!(?config, "starting weekly analysis");

    let week = load_builtin_week()?;
    let renderer = ReportRenderer::new(config);
    println!("{}", renderer.render(&week)?);

    Ok(())
}
