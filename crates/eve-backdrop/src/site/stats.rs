use serde::{Deserialize, Serialize};

/// Hours of screen time on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub day: String,
    pub hours: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// One tile in the metrics grid. `value` is display text ("1.55h", "13").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub key: String,
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

/// The statistics panel beside the hero. All numbers are static mock data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsPanel {
    pub daily_usage: Vec<DailyUsage>,
    /// Top of the chart's y axis.
    #[serde(default = "default_max_hours")]
    pub max_hours: f32,
    /// Y values of the horizontal guide lines.
    #[serde(default = "default_grid_lines")]
    pub grid_lines: Vec<f32>,
    /// Headline figure, e.g. "3h 45".
    pub total_screen_time: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    /// Protocol health label next to the blinking dot.
    pub status: String,
}

fn default_max_hours() -> f32 {
    6.0
}

fn default_grid_lines() -> Vec<f32> {
    vec![0.0, 2.0, 4.0, 6.0]
}

/// One bar of the usage chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub day: String,
    /// Bar height as a fraction of the chart height, in [0, 1].
    pub ratio: f32,
}

impl StatsPanel {
    /// Bars scaled against `max_hours`, clamped to the chart.
    pub fn bars(&self) -> Vec<Bar> {
        self.daily_usage
            .iter()
            .map(|d| Bar {
                day: d.day.clone(),
                ratio: self.ratio(d.hours),
            })
            .collect()
    }

    /// Fraction of the chart height for a guide line or bar at `hours`.
    pub fn ratio(&self, hours: f32) -> f32 {
        if self.max_hours <= 0.0 {
            return 0.0;
        }
        (hours / self.max_hours).clamp(0.0, 1.0)
    }

    /// Mean daily hours, or 0 with no data.
    pub fn average_hours(&self) -> f32 {
        if self.daily_usage.is_empty() {
            return 0.0;
        }
        let total: f32 = self.daily_usage.iter().map(|d| d.hours).sum();
        total / self.daily_usage.len() as f32
    }

    /// Day with the most usage.
    pub fn peak_day(&self) -> Option<&DailyUsage> {
        self.daily_usage
            .iter()
            .max_by(|a, b| a.hours.total_cmp(&b.hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(hours: &[(&str, f32)]) -> StatsPanel {
        StatsPanel {
            daily_usage: hours
                .iter()
                .map(|(d, h)| DailyUsage { day: d.to_string(), hours: *h })
                .collect(),
            max_hours: 6.0,
            grid_lines: default_grid_lines(),
            total_screen_time: "3h 45".into(),
            metrics: Vec::new(),
            status: "Live".into(),
        }
    }

    #[test]
    fn bars_scale_and_clamp() {
        let p = panel(&[("Mon", 4.5), ("Tue", 9.0), ("Wed", 0.0)]);
        let bars = p.bars();
        assert_eq!(bars[0].ratio, 0.75);
        assert_eq!(bars[1].ratio, 1.0);
        assert_eq!(bars[2].ratio, 0.0);
        assert_eq!(bars[0].day, "Mon");
    }

    #[test]
    fn average_and_peak() {
        let p = panel(&[("Mon", 4.5), ("Tue", 4.1), ("Sun", 1.1)]);
        assert!((p.average_hours() - 3.2333).abs() < 1e-3);
        assert_eq!(p.peak_day().unwrap().day, "Mon");
        assert_eq!(panel(&[]).average_hours(), 0.0);
    }

    #[test]
    fn grid_lines_map_to_ratios() {
        let p = panel(&[]);
        let ratios: Vec<f32> = p.grid_lines.iter().map(|h| p.ratio(*h)).collect();
        assert_eq!(ratios.len(), 4);
        assert_eq!(ratios[3], 1.0);
    }
}
