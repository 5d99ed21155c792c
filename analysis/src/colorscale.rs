use colors_transform::{Color, Rgb};
use common::Palette;

fn stops(palette: Palette) -> &'static [&'static str] {
    match palette {
        Palette::Viridis => &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"],
        Palette::Plasma => &["#0d0887", "#7e03a8", "#cc4778", "#f89540", "#f0f921"],
        Palette::Inferno => &["#000004", "#57106e", "#bc3754", "#f98e09", "#fcffa4"],
        Palette::Magma => &["#000004", "#51127c", "#b73779", "#fc8961", "#fcfdbf"],
        Palette::Cividis => &["#00224e", "#414d6b", "#7c7b78", "#bcaf6f", "#fee838"],
        Palette::Blues => &["#f7fbff", "#c6dbef", "#6baed6", "#2171b5", "#08306b"],
        Palette::Greens => &["#f7fcf5", "#c7e9c0", "#74c476", "#238b45", "#00441b"],
        Palette::Reds => &["#fff5f0", "#fcbba1", "#fb6a4a", "#cb181d", "#67000d"],
        Palette::Turbo => &[
            "#30123b", "#4686fb", "#1ae4b6", "#a2fc3c", "#faba39", "#7a0403",
        ],
    }
}

/// Piecewise linear color scale over a palette's stops.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<Rgb>,
}

impl ColorScale {
    pub fn new(palette: Palette) -> Self {
        let stops = stops(palette)
            .iter()
            .filter_map(|hex| Rgb::from_hex_str(hex).ok())
            .collect();

        Self { stops }
    }

    /// Color for `value` on a `0..=max` scale. Values above `max` clamp to the last stop.
    pub fn color(&self, value: u64, max: u64) -> String {
        let t = if max == 0 {
            0.0
        } else {
            (value as f32 / max as f32).clamp(0.0, 1.0)
        };

        self.at(t).to_css_hex_string()
    }

    fn at(&self, t: f32) -> Rgb {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Rgb::from(0.0, 0.0, 0.0),
        };
        if t <= 0.0 {
            return first.clone();
        }
        if t >= 1.0 {
            return last.clone();
        }

        let segments = (self.stops.len() - 1) as f32;
        let position = t * segments;
        let idx = position.floor() as usize;
        let frac = position - idx as f32;

        let lower = &self.stops[idx];
        let upper = &self.stops[(idx + 1).min(self.stops.len() - 1)];
        let lerp = |a: f32, b: f32| (a + (b - a) * frac).round();

        Rgb::from(
            lerp(lower.get_red(), upper.get_red()),
            lerp(lower.get_green(), upper.get_green()),
            lerp(lower.get_blue(), upper.get_blue()),
        )
    }
}
