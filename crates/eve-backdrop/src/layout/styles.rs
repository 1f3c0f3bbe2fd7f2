use log::debug;
use serde::Serialize;

use super::breakpoint::Breakpoint;

/// A CSS length the host can drop straight into a style object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl From<Length> for String {
    fn from(len: Length) -> String {
        match len {
            Length::Px(v) => format!("{}px", v),
            Length::Percent(v) => format!("{}%", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStyle {
    pub title_font_size: f32,
    pub title_line_height: f32,
    pub title_margin_bottom: f32,
    pub padding: f32,
    pub margin_bottom: f32,
    pub direction: FlexDirection,
    pub gap: f32,
    pub padding_top: f32,
    pub column_width: Length,
    pub column_padding_top: f32,
    pub logo_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: Option<f32>,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub max_width: Length,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    pub max_width: Length,
    pub padding_x: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsStyle {
    pub padding: f32,
    pub max_width: Length,
    pub chart_height: f32,
    pub chart_margin_bottom: f32,
    pub grid_padding: f32,
    pub grid_gap: f32,
    pub metric_label_size: f32,
    pub metric_value_size: f32,
    pub trend_size: f32,
    pub logo_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStyle {
    pub padding: f32,
    pub direction: FlexDirection,
    pub gap: f32,
    pub centered: bool,
}

/// Every width-dependent style value on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSet {
    pub breakpoint: Breakpoint,
    pub hero: HeroStyle,
    pub description: TextStyle,
    pub system_text: TextStyle,
    pub content: ContainerStyle,
    pub stats: StatsStyle,
    pub footer: FooterStyle,
}

impl StyleSet {
    pub fn for_breakpoint(bp: Breakpoint) -> Self {
        let compact = bp.is_compact();
        let stacked = bp.is_stacked();
        let column = |yes: bool| if yes { FlexDirection::Column } else { FlexDirection::Row };

        Self {
            breakpoint: bp,
            hero: HeroStyle {
                title_font_size: bp.pick(40.0, 48.0, 64.0, 64.0),
                title_line_height: bp.pick(50.0, 52.0, 68.0, 68.0),
                title_margin_bottom: bp.pick(1.0, 10.0, 10.0, 10.0),
                padding: if compact { 20.0 } else { 40.0 },
                margin_bottom: bp.pick(2.0, 20.0, 20.0, 20.0),
                direction: column(stacked),
                gap: bp.pick(20.0, 20.0, 30.0, 60.0),
                padding_top: bp.pick(10.0, 10.0, 20.0, 40.0),
                column_width: if stacked { Length::Percent(100.0) } else { Length::Percent(45.0) },
                column_padding_top: if stacked { 0.0 } else { 40.0 },
                logo_size: bp.pick(31.0, 35.0, 40.0, 40.0),
            },
            description: TextStyle {
                font_size: bp.pick(14.0, 16.0, 20.0, 20.0),
                line_height: Some(bp.pick(20.0, 24.0, 32.0, 32.0)),
                margin_top: if compact { 12.0 } else { 24.0 },
                margin_bottom: 0.0,
                max_width: if stacked { Length::Px(600.0) } else { Length::Percent(100.0) },
            },
            system_text: TextStyle {
                font_size: bp.pick(11.0, 13.0, 16.0, 16.0),
                line_height: None,
                margin_top: 0.0,
                margin_bottom: bp.pick(12.0, 16.0, 24.0, 24.0),
                max_width: Length::Percent(100.0),
            },
            content: ContainerStyle {
                max_width: bp.pick(
                    Length::Percent(100.0),
                    Length::Percent(100.0),
                    Length::Px(856.0),
                    Length::Px(1200.0),
                ),
                padding_x: bp.pick(20.0, 20.0, 30.0, 40.0),
            },
            stats: StatsStyle {
                padding: if compact { 15.0 } else { 35.0 },
                max_width: if compact { Length::Percent(100.0) } else { Length::Px(500.0) },
                chart_height: if compact { 120.0 } else { 180.0 },
                chart_margin_bottom: if compact { 8.0 } else { 15.0 },
                grid_padding: if compact { 10.0 } else { 25.0 },
                grid_gap: if compact { 8.0 } else { 15.0 },
                metric_label_size: bp.pick(8.0, 10.0, 11.0, 11.0),
                metric_value_size: bp.pick(12.0, 16.0, 18.0, 18.0),
                trend_size: bp.pick(9.0, 11.0, 12.0, 12.0),
                logo_size: if compact { 28.0 } else { 40.0 },
            },
            footer: FooterStyle {
                padding: if compact { 20.0 } else { 40.0 },
                direction: column(compact),
                gap: if compact { 30.0 } else { 40.0 },
                centered: compact,
            },
        }
    }
}

/// Styles for a raw viewport width.
pub fn style_for(width: f32) -> StyleSet {
    StyleSet::for_breakpoint(Breakpoint::from_width(width))
}

/// Memoizes `StyleSet` on the breakpoint bucket, so resizes within a bucket
/// cost nothing.
#[derive(Debug, Default)]
pub struct StyleCache {
    current: Option<StyleSet>,
    recomputes: u32,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, width: f32) -> &StyleSet {
        let bp = Breakpoint::from_width(width);
        if self.current.as_ref().map_or(true, |s| s.breakpoint != bp) {
            self.recomputes += 1;
            debug!("styles: recomputed for {:?} (width {})", bp, width);
            self.current = Some(StyleSet::for_breakpoint(bp));
        }
        self.current.get_or_insert_with(|| StyleSet::for_breakpoint(bp))
    }

    /// Number of times a `StyleSet` was actually built.
    pub fn recomputes(&self) -> u32 {
        self.recomputes
    }
}
