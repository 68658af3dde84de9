use std::fmt;

/// Every figure the report build produces, in build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    OperatingSchedule,
    PrecipSummary,
    HistoricalBaseline,
    RadiometerVilwDiff,
    TemperatureTrend,
}

impl Figure {
    pub const ALL: [Figure; 5] = [
        Figure::OperatingSchedule,
        Figure::PrecipSummary,
        Figure::HistoricalBaseline,
        Figure::RadiometerVilwDiff,
        Figure::TemperatureTrend,
    ];

    pub fn file_name(&self, period: &str) -> String {
        match self {
            Self::OperatingSchedule => format!("{period}_OperatingSchedule_Report.png"),
            Self::PrecipSummary => format!("{period}_PrecipSummary_Report.png"),
            Self::HistoricalBaseline => format!("{period}_HistoricalBaseline_Report.png"),
            Self::RadiometerVilwDiff => format!("Radiometer_VILWDiff_{period}.png"),
            Self::TemperatureTrend => format!("{period}_TemperatureTrend_Report.png"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::OperatingSchedule => "Operating schedule (placeholder)",
            Self::PrecipSummary => "Precip summary (placeholder)",
            Self::HistoricalBaseline => "Historical baseline (placeholder)",
            Self::RadiometerVilwDiff => "Radiometer VILW diff (placeholder)",
            Self::TemperatureTrend => "Daily temperature trend (synthetic)",
        }
    }

    /// Placeholders only carry a title; they are not backed by any data yet.
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Self::TemperatureTrend)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OperatingSchedule => "operating schedule",
            Self::PrecipSummary => "precip summary",
            Self::HistoricalBaseline => "historical baseline",
            Self::RadiometerVilwDiff => "radiometer VILW diff",
            Self::TemperatureTrend => "temperature trend",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_carry_the_period_verbatim() {
        for period in ["Dec2025", "Test2026", "", "with space", "ünïcode"] {
            assert_eq!(
                Figure::OperatingSchedule.file_name(period),
                format!("{period}_OperatingSchedule_Report.png")
            );
            assert_eq!(
                Figure::PrecipSummary.file_name(period),
                format!("{period}_PrecipSummary_Report.png")
            );
            assert_eq!(
                Figure::HistoricalBaseline.file_name(period),
                format!("{period}_HistoricalBaseline_Report.png")
            );
            assert_eq!(
                Figure::RadiometerVilwDiff.file_name(period),
                format!("Radiometer_VILWDiff_{period}.png")
            );
            assert_eq!(
                Figure::TemperatureTrend.file_name(period),
                format!("{period}_TemperatureTrend_Report.png")
            );
        }
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<_> = Figure::ALL.iter().map(|f| f.file_name("Dec2025")).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Figure::ALL.len());
    }

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<_> = Figure::ALL.iter().map(Figure::title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), Figure::ALL.len());
    }

    #[test]
    fn only_the_temperature_trend_has_data() {
        let placeholders = Figure::ALL.iter().filter(|f| f.is_placeholder()).count();
        assert_eq!(placeholders, 4);
        assert!(!Figure::TemperatureTrend.is_placeholder());
    }
}
