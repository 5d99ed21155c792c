pub mod dashboard;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub default: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub controls: Vec<Control>,
    pub sections: Vec<dashboard::Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Control {
    Player {
        options: Vec<String>,
        selected: Option<String>,
    },
    Palette {
        options: Vec<Palette>,
        selected: Palette,
    },
}

/// The color scales a heatmap can be drawn with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum Palette {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Blues,
    Greens,
    Reds,
    Turbo,
}

impl Palette {
    pub const ALL: [Palette; 9] = [
        Palette::Viridis,
        Palette::Plasma,
        Palette::Inferno,
        Palette::Magma,
        Palette::Cividis,
        Palette::Blues,
        Palette::Greens,
        Palette::Reds,
        Palette::Turbo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Blues => "blues",
            Self::Greens => "greens",
            Self::Reds => "reds",
            Self::Turbo => "turbo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPalette(pub String);

impl core::fmt::Display for UnknownPalette {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown palette {:?}", self.0)
    }
}

impl core::str::FromStr for Palette {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| UnknownPalette(s.to_owned()))
    }
}

impl core::fmt::Display for Palette {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_parse_back() {
        for palette in Palette::ALL {
            assert_eq!(palette.name().parse::<Palette>(), Ok(palette));
        }
        assert_eq!("  Magma ".parse::<Palette>(), Ok(Palette::Magma));
        assert!("rainbow".parse::<Palette>().is_err());
    }

    #[test]
    fn page_serializes_as_json() {
        let page = Page {
            id: "home".to_owned(),
            title: "Home".to_owned(),
            controls: vec![Control::Palette {
                options: Palette::ALL.to_vec(),
                selected: Palette::default(),
            }],
            sections: Vec::new(),
        };

        let raw = serde_json::to_string(&page).unwrap();
        let parsed: Page = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, page);
    }
}
