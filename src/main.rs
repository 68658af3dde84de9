use report_assets::{logging, render, Config, ReportBuilder};

fn main() -> miette::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    tracing::info!(
        period = %config.period,
        root = %config.root().display(),
        "building report assets"
    );

    let builder = ReportBuilder::new(config, render::probe());
    builder.run(&mut std::io::stdout().lock())?;

    Ok(())
}
