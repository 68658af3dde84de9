use std::path::Path;

use crate::{series::TemperatureSeries, Result};

/// Anything able to turn a figure description into an image file.
pub trait Renderer {
    fn placeholder(&self, path: &Path, title: &str) -> Result<()>;

    fn temperature_trend(&self, path: &Path, title: &str, series: &TemperatureSeries)
        -> Result<()>;
}

/// Checks once whether plotting works here, and hands out a renderer if so.
pub fn probe() -> Option<Box<dyn Renderer>> {
    #[cfg(feature = "plot")]
    {
        match bitmap::BitmapRenderer::probe() {
            Ok(renderer) => {
                tracing::info!("plotting backend is available");
                Some(Box::new(renderer))
            }
            Err(e) => {
                tracing::warn!("plotting backend failed its probe: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "plot"))]
    {
        tracing::warn!("built without the `plot` feature");
        None
    }
}

#[cfg(feature = "plot")]
pub use bitmap::{save, BitmapRenderer};

#[cfg(feature = "plot")]
mod bitmap {
    use std::{error::Error as StdError, ops::Range, path::Path};

    use plotters::{
        coord::{
            ranged1d::{DefaultFormatting, KeyPointHint},
            Shift,
        },
        prelude::*,
    };

    use super::Renderer;
    use crate::{error::create_dir_all, series::TemperatureSeries, Error, Result};

    const DPI: u32 = 200;
    const FIGURE_INCHES: (f64, f64) = (6.4, 4.8);
    const FIGURE_SIZE: (u32, u32) = (
        (FIGURE_INCHES.0 * DPI as f64) as u32,
        (FIGURE_INCHES.1 * DPI as f64) as u32,
    );

    // Stand in for a tight bounding box: just enough room for the labels,
    // with extra on the right for the last x label.
    const MARGIN: u32 = 20;
    const MARGIN_RIGHT: u32 = 50;
    const LABEL_AREA: u32 = 80;
    // Space above the data for the series labels.
    const LEGEND_HEADROOM: f64 = 8.0;
    const PROBE_SIZE: (u32, u32) = (64, 32);

    type DrawResult = std::result::Result<(), Box<dyn StdError>>;

    /// Writes the figure drawn by `draw` to `path` as a PNG at the fixed
    /// resolution, creating parent directories and overwriting whatever was
    /// there. The backend is released before returning, error or not, and a
    /// failed drawing leaves no file behind.
    pub fn save<'p>(
        path: &'p Path,
        draw: impl FnOnce(&DrawingArea<BitMapBackend<'p>, Shift>) -> DrawResult,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        let drawn = root
            .fill(&WHITE)
            .map_err(|e| Box::new(e) as Box<dyn StdError>)
            .and_then(|()| draw(&root))
            .and_then(|()| root.present().map_err(|e| Box::new(e) as Box<dyn StdError>));
        drop(root);

        if drawn.is_err() {
            // the backend flushes whatever it has on drop
            let _ = std::fs::remove_file(path);
        }
        drawn.map_err(|e| Error::Render {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Linear day axis whose key points are exactly the given ticks.
    struct DayAxis {
        days: Range<f64>,
        ticks: Vec<f64>,
    }

    impl Ranged for DayAxis {
        type FormatOption = DefaultFormatting;
        type ValueType = f64;

        fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
            let share = (value - self.days.start) / (self.days.end - self.days.start);
            limit.0 + (share * f64::from(limit.1 - limit.0)).round() as i32
        }

        fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
            self.ticks.clone()
        }

        fn range(&self) -> Range<f64> {
            self.days.clone()
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct BitmapRenderer;

    impl BitmapRenderer {
        /// Draws some text into a throwaway in-memory bitmap. This fails when
        /// the font stack is unusable, which would otherwise break every
        /// figure later on.
        pub fn probe() -> std::result::Result<Self, Box<dyn StdError>> {
            let mut buffer = vec![0u8; (PROBE_SIZE.0 * PROBE_SIZE.1 * 3) as usize];
            {
                let root =
                    BitMapBackend::with_buffer(&mut buffer, PROBE_SIZE).into_drawing_area();
                root.fill(&WHITE)?;
                let style = TextStyle::from(("sans-serif", 12).into_font());
                root.draw_text("probe", &style, (1, 1))?;
                root.present()?;
            }
            Ok(Self)
        }
    }

    impl Renderer for BitmapRenderer {
        fn placeholder(&self, path: &Path, title: &str) -> Result<()> {
            save(path, |root| {
                let mut chart = ChartBuilder::on(root)
                    .caption(title, ("sans-serif", 44).into_font())
                    .margin(MARGIN)
                    .margin_right(MARGIN_RIGHT)
                    .x_label_area_size(LABEL_AREA)
                    .y_label_area_size(LABEL_AREA)
                    .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

                chart
                    .configure_mesh()
                    .disable_mesh()
                    .label_style(("sans-serif", 26))
                    .draw()?;

                Ok(())
            })
        }

        fn temperature_trend(
            &self,
            path: &Path,
            title: &str,
            series: &TemperatureSeries,
        ) -> Result<()> {
            let baseline = series.baseline;
            let first_day = series.first_day();
            let last_day = series.last_day();
            let days = DayAxis {
                days: first_day..last_day,
                ticks: series.day_ticks(),
            };
            let temps = series.value_range(2.0);
            let temps = temps.start..temps.end + LEGEND_HEADROOM;
            let above = RED.mix(0.25);
            let below = BLUE.mix(0.25);

            save(path, |root| {
                let mut chart = ChartBuilder::on(root)
                    .caption(title, ("sans-serif", 44).into_font())
                    .margin(MARGIN)
                    .margin_right(MARGIN_RIGHT)
                    .x_label_area_size(LABEL_AREA)
                    .y_label_area_size(LABEL_AREA)
                    .build_cartesian_2d(days, temps)?;

                chart
                    .configure_mesh()
                    .x_labels(7)
                    .x_label_formatter(&|day| format!("{day:.0}"))
                    .y_label_formatter(&|temp| format!("{temp:.0}"))
                    .x_desc("Day of month")
                    .y_desc("Temperature (°C)")
                    .label_style(("sans-serif", 26))
                    .draw()?;

                chart
                    .draw_series(AreaSeries::new(
                        series.points().map(|(day, temp)| (day, temp.max(baseline))),
                        baseline,
                        above.filled(),
                    ))?
                    .label("Above baseline")
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 6), (x + 20, y + 6)], above.filled())
                    });

                chart
                    .draw_series(AreaSeries::new(
                        series.points().map(|(day, temp)| (day, temp.min(baseline))),
                        baseline,
                        below.filled(),
                    ))?
                    .label("Below baseline")
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 6), (x + 20, y + 6)], below.filled())
                    });

                chart
                    .draw_series(LineSeries::new(
                        [(first_day, baseline), (last_day, baseline)],
                        BLACK.stroke_width(2),
                    ))?
                    .label(format!("Baseline ({baseline:.0} °C)"))
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

                chart
                    .draw_series(
                        LineSeries::new(series.points(), GREEN.stroke_width(3)).point_size(4),
                    )?
                    .label("Daily mean temperature")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperRight)
                    .label_font(("sans-serif", 26))
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .draw()?;

                Ok(())
            })
        }
    }

}
