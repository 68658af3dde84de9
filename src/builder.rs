use std::{io::Write, path::PathBuf};

use crate::{
    config::Config,
    error::{create_dir_all, Error},
    figure::Figure,
    render::Renderer,
    series::TemperatureSeries,
    Result,
};

/// Runs every report step against one configuration.
///
/// Without a renderer each figure step prints a skip notice to `out`
/// instead of drawing anything; the table is written either way.
pub struct ReportBuilder {
    config: Config,
    renderer: Option<Box<dyn Renderer>>,
}

impl ReportBuilder {
    pub fn new(config: Config, renderer: Option<Box<dyn Renderer>>) -> Self {
        Self { config, renderer }
    }

    pub fn prepare_output_dirs(&self) -> Result<()> {
        create_dir_all(self.config.figures_dir())?;
        create_dir_all(self.config.tables_dir())
    }

    /// Draws one figure, or says on `out` why it was skipped.
    pub fn build_figure(&self, figure: Figure, out: &mut impl Write) -> Result<()> {
        let Some(renderer) = &self.renderer else {
            return skip(figure, &self.config, out);
        };

        let path = self.config.figure_path(figure);
        if figure.is_placeholder() {
            renderer.placeholder(&path, figure.title())?;
        } else {
            let series = TemperatureSeries::synthetic();
            renderer.temperature_trend(&path, figure.title(), &series)?;
        }
        tracing::info!(path = %path.display(), "wrote {figure}");
        Ok(())
    }

    pub fn build_tables(&self) -> Result<PathBuf> {
        let path = self.config.table_path();
        std::fs::write(&path, timestamp_line(&self.config.period)).map_err(|source| {
            Error::Write {
                path: path.clone(),
                source,
            }
        })?;
        tracing::info!(path = %path.display(), "wrote data timestamp");
        Ok(path)
    }

    /// Every figure in `Figure::ALL` order, the table, then the completion line.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        self.prepare_output_dirs()?;

        for figure in Figure::ALL {
            self.build_figure(figure, out)?;
        }
        self.build_tables()?;

        writeln!(out, "Done.")?;
        Ok(())
    }
}

pub fn timestamp_line(period: &str) -> String {
    format!("Data updated for {period}\n")
}

fn skip(figure: Figure, config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Skipping {}: plotting is unavailable",
        figure.file_name(&config.period)
    )?;
    Ok(())
}
