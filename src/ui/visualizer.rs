//! Layered cup illustration.
//!
//! `layout_layers` turns a recipe's layers and the sequencer's visible count
//! into bands on a fixed vessel scale; `CupWidget` paints those bands inside
//! the cup outline. Heights are used as given, never normalised, and every
//! band is clipped to the vessel.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::catalog::{IngredientLayer, Rgb};
use crate::ui::theme::{rgb, CUP_GLASS, STEAM};

/// Height of the vessel interior in layer units.
pub const VESSEL_CAPACITY: f32 = 100.0;

const STEAM_ROWS: u16 = 2;
const HANDLE_COLS: u16 = 3;
const REFLECTION: f32 = 0.35;
const STEAM_GLYPHS: [&str; 4] = ["~", "≈", "∼", " "];

/// One layer placed in the vessel, in layer units from the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerBand {
    pub index: usize,
    pub color: Rgb,
    pub bottom: f32,
    pub top: f32,
    pub revealed: bool,
}

impl LayerBand {
    pub fn thickness(&self) -> f32 {
        self.top - self.bottom
    }

    fn contains(&self, level: f32) -> bool {
        level >= self.bottom && level < self.top
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselLayout {
    pub bands: Vec<LayerBand>,
}

impl VesselLayout {
    /// The revealed band covering `level`, if any.
    pub fn band_at(&self, level: f32) -> Option<&LayerBand> {
        self.bands
            .iter()
            .find(|band| band.revealed && band.contains(level))
    }

    /// Top of the highest revealed band.
    pub fn fill_level(&self) -> f32 {
        self.bands
            .iter()
            .filter(|band| band.revealed)
            .map(|band| band.top)
            .fold(0.0, f32::max)
    }
}

/// Stack `layers` bottom to top. Layer `i` is revealed when `i < visible`.
pub fn layout_layers(layers: &[IngredientLayer], visible: usize) -> VesselLayout {
    let mut base = 0.0_f32;
    let bands = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let height = if layer.height_percent.is_finite() {
                layer.height_percent.max(0.0)
            } else {
                0.0
            };
            let bottom = base;
            base += height;
            LayerBand {
                index,
                color: layer.color,
                bottom: bottom.min(VESSEL_CAPACITY),
                top: base.min(VESSEL_CAPACITY),
                revealed: index < visible,
            }
        })
        .collect();
    VesselLayout { bands }
}

/// Cup outline with its revealed layers, a glass reflection and an
/// optional steam cue.
pub struct CupWidget<'a> {
    layers: &'a [IngredientLayer],
    visible: usize,
    steam_frame: Option<u64>,
}

impl<'a> CupWidget<'a> {
    pub fn new(layers: &'a [IngredientLayer], visible: usize) -> Self {
        Self {
            layers,
            visible,
            steam_frame: None,
        }
    }

    /// Show steam above the rim, animated by `frame`.
    pub fn steam(mut self, frame: u64) -> Self {
        self.steam_frame = Some(frame);
        self
    }
}

impl Widget for CupWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < HANDLE_COLS + 3 || area.height < STEAM_ROWS + 2 {
            return;
        }

        let cup_width = area.width - HANDLE_COLS;
        let left = area.x;
        let right = area.x + cup_width - 1;
        let rim = area.y + STEAM_ROWS;
        let base = area.bottom() - 1;
        let interior_rows = base - rim;
        let interior_left = left + 1;
        let interior_width = cup_width - 2;

        let glass = |cell: &mut ratatui::buffer::Cell, symbol: &str| {
            cell.set_symbol(symbol).set_fg(CUP_GLASS);
        };

        for y in rim..base {
            if let Some(cell) = buf.cell_mut((left, y)) {
                glass(cell, "│");
            }
            if let Some(cell) = buf.cell_mut((right, y)) {
                glass(cell, "│");
            }
        }
        for x in left..=right {
            let symbol = if x == left {
                "╰"
            } else if x == right {
                "╯"
            } else {
                "─"
            };
            if let Some(cell) = buf.cell_mut((x, base)) {
                glass(cell, symbol);
            }
        }

        if interior_rows >= 3 {
            let handle_top = rim + interior_rows / 4;
            let handle_bottom = rim + (interior_rows * 3 / 4).max(interior_rows / 4 + 1);
            for y in handle_top..=handle_bottom {
                let (inner, outer) = if y == handle_top {
                    (Some("─"), "╮")
                } else if y == handle_bottom {
                    (Some("─"), "╯")
                } else {
                    (None, "│")
                };
                if let Some(symbol) = inner {
                    if let Some(cell) = buf.cell_mut((right + 1, y)) {
                        glass(cell, symbol);
                    }
                }
                if let Some(cell) = buf.cell_mut((right + 2, y)) {
                    glass(cell, outer);
                }
            }
        }

        let layout = layout_layers(self.layers, self.visible);
        let samples = f32::from(interior_rows) * 2.0;
        let level_of = |sample: u16| (f32::from(sample) + 0.5) / samples * VESSEL_CAPACITY;
        let reflection_x = (interior_width >= 4).then_some(interior_left + 1);

        for row in 0..interior_rows {
            let y = rim + row;
            let lower_sample = (interior_rows - 1 - row) * 2;
            let upper = layout.band_at(level_of(lower_sample + 1)).map(|b| b.color);
            let lower = layout.band_at(level_of(lower_sample)).map(|b| b.color);

            for x in interior_left..interior_left + interior_width {
                let shade = |color: Rgb| {
                    if Some(x) == reflection_x {
                        rgb(color.lighten(REFLECTION))
                    } else {
                        rgb(color)
                    }
                };
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                match (upper, lower) {
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol("▀").set_fg(shade(top)).set_bg(shade(bottom));
                    }
                    (Some(top), None) => {
                        cell.set_symbol("▀").set_fg(shade(top)).set_bg(Color::Reset);
                    }
                    (None, Some(bottom)) => {
                        cell.set_symbol("▄").set_fg(shade(bottom)).set_bg(Color::Reset);
                    }
                    (None, None) => {}
                }
            }
        }

        if let Some(frame) = self.steam_frame {
            let center = interior_left + interior_width / 2;
            let wisps = [center.saturating_sub(2), center, center + 2];
            for (i, x) in wisps.into_iter().enumerate() {
                if x < interior_left || x >= interior_left + interior_width {
                    continue;
                }
                for row in 0..STEAM_ROWS {
                    let phase = (frame as usize + i + row as usize * 2) % STEAM_GLYPHS.len();
                    if let Some(cell) = buf.cell_mut((x, area.y + row)) {
                        cell.set_symbol(STEAM_GLYPHS[phase]).set_fg(STEAM);
                    }
                }
            }
        }
    }
}
