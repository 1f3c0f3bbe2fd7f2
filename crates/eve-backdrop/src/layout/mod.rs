//! Responsive layout: width → breakpoint bucket → style set.

mod breakpoint;
mod styles;

pub use breakpoint::{Breakpoint, ViewportFlags};
pub use styles::{
    style_for, ContainerStyle, FlexDirection, FooterStyle, HeroStyle, Length, StatsStyle,
    StyleCache, StyleSet, TextStyle,
};
