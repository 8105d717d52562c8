use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use yomi_types::{LayoutMode, StyleParams};

pub const BODY_FONT_SIZE: RangeInclusive<u32> = 10..=40;
pub const RUBY_FONT_SIZE: RangeInclusive<u32> = 5..=20;
pub const LINE_HEIGHT: RangeInclusive<f32> = 1.0..=4.0;
pub const CELL_PADDING: RangeInclusive<u32> = 0..=50;

/// Style overrides, unset values fall back to the layout's defaults
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// pt
    pub body_font_size: Option<u32>,
    /// pt
    pub ruby_font_size: Option<u32>,
    pub line_height: Option<f32>,
    /// px, tabular layout only
    pub cell_padding: Option<u32>,
}

fn clamp<T: PartialOrd + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    }
}

impl StyleConfig {
    /// Final parameters for a layout, every value clamped into range
    pub fn resolve(&self, layout: LayoutMode) -> StyleParams {
        let defaults = StyleParams::for_layout(layout);

        let line_height = self
            .line_height
            .filter(|v| v.is_finite())
            .unwrap_or(defaults.line_height);

        StyleParams {
            body_font_size: clamp(
                self.body_font_size.unwrap_or(defaults.body_font_size),
                &BODY_FONT_SIZE,
            ),
            ruby_font_size: clamp(
                self.ruby_font_size.unwrap_or(defaults.ruby_font_size),
                &RUBY_FONT_SIZE,
            ),
            line_height: clamp(line_height, &LINE_HEIGHT),
            cell_padding: clamp(
                self.cell_padding.unwrap_or(defaults.cell_padding),
                &CELL_PADDING,
            ),
        }
    }

    /// Layer `other` over `self`, set values in `other` win
    pub fn overlay(self, other: StyleConfig) -> Self {
        Self {
            body_font_size: other.body_font_size.or(self.body_font_size),
            ruby_font_size: other.ruby_font_size.or(self.ruby_font_size),
            line_height: other.line_height.or(self.line_height),
            cell_padding: other.cell_padding.or(self.cell_padding),
        }
    }
}
