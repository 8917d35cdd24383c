use thiserror::Error;

/// Decorative wave graphic drawn behind the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveVariant {
    Pink,
    Yellow,
    Orange,
    Brown,
}

impl WaveVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveVariant::Pink => "pink",
            WaveVariant::Yellow => "yellow",
            WaveVariant::Orange => "orange",
            WaveVariant::Brown => "brown",
        }
    }

    /// Y coordinate of the front wave's crest line on the 800x600 view box.
    pub fn crest(&self) -> u32 {
        match self {
            WaveVariant::Pink => 100,
            WaveVariant::Yellow => 120,
            WaveVariant::Orange => 140,
            WaveVariant::Brown => 160,
        }
    }

    /// Front and back wave paths, front first.
    pub fn paths(&self) -> [String; 2] {
        let front = self.crest();
        [wave_path(front), wave_path(front + 80)]
    }
}

fn wave_path(y: u32) -> String {
    format!("M0,{y} Q200,{} 400,{y} T800,{y} V600 H0 Z", y + 100)
}

/// A named bundle of colors, images and decoration.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: &'static str,
    pub accent: &'static str,
    /// File name under the public asset root.
    pub main_dish: &'static str,
    pub food_icons: [&'static str; 4],
    pub wave: WaveVariant,
}

const FOOD_ICONS: [&str; 4] = ["food1.png", "food2.png", "food3.png", "food4.png"];

pub const THEMES: [Theme; 4] = [
    Theme {
        name: "pink",
        bg: "#ff4fa2",
        accent: "#ffb6e6",
        main_dish: "main-dish.png",
        food_icons: FOOD_ICONS,
        wave: WaveVariant::Pink,
    },
    Theme {
        name: "yellow",
        bg: "#f7e35b",
        accent: "#fff7b2",
        main_dish: "food2.png",
        food_icons: FOOD_ICONS,
        wave: WaveVariant::Yellow,
    },
    Theme {
        name: "orange",
        bg: "#ffb347",
        accent: "#ffe0b2",
        main_dish: "food3.png",
        food_icons: FOOD_ICONS,
        wave: WaveVariant::Orange,
    },
    Theme {
        name: "brown",
        bg: "#d08c60",
        accent: "#f3d6b6",
        main_dish: "food4.png",
        food_icons: FOOD_ICONS,
        wave: WaveVariant::Brown,
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme index {index} is out of range (only {len} themes)")]
    OutOfRange { index: usize, len: usize },
}

/// Index into [`THEMES`] that is always in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeIndex(usize);

impl ThemeIndex {
    pub fn get(self) -> usize {
        self.0
    }

    pub fn theme(self) -> &'static Theme {
        &THEMES[self.0]
    }
}

impl TryFrom<usize> for ThemeIndex {
    type Error = ThemeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < THEMES.len() {
            Ok(ThemeIndex(index))
        } else {
            Err(ThemeError::OutOfRange {
                index,
                len: THEMES.len(),
            })
        }
    }
}

/// The one piece of mutable page state: which theme is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    active: ThemeIndex,
}

impl ThemeSelection {
    pub fn new(active: ThemeIndex) -> Self {
        Self { active }
    }

    pub fn active(&self) -> ThemeIndex {
        self.active
    }

    pub fn theme(&self) -> &'static Theme {
        self.active.theme()
    }

    /// Makes `index` the active theme. Returns false if it already was.
    pub fn select(&mut self, index: ThemeIndex) -> bool {
        if self.active == index {
            return false;
        }
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_first_theme() {
        let selection = ThemeSelection::default();
        assert_eq!(selection.active().get(), 0);
        assert_eq!(selection.theme().name, "pink");
        assert_eq!(selection.theme().main_dish, "main-dish.png");
    }

    #[test]
    fn select_switches_every_theme() {
        for i in 0..THEMES.len() {
            let mut selection = ThemeSelection::default();
            let index = ThemeIndex::try_from(i).unwrap();
            assert_eq!(selection.select(index), i != 0);
            assert_eq!(selection.active(), index);
            assert_eq!(selection.theme(), &THEMES[i]);
        }
    }

    #[test]
    fn reselecting_active_theme_is_noop() {
        let yellow = ThemeIndex::try_from(1).unwrap();
        let mut selection = ThemeSelection::new(yellow);
        let before = selection;
        assert!(!selection.select(yellow));
        assert_eq!(selection, before);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(
            ThemeIndex::try_from(4),
            Err(ThemeError::OutOfRange { index: 4, len: 4 })
        );
        let err = ThemeIndex::try_from(usize::MAX).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn every_theme_has_four_icons() {
        for theme in THEMES.iter() {
            assert_eq!(theme.food_icons.len(), 4);
            assert_eq!(theme.food_icons[0], "food1.png");
        }
    }

    #[test]
    fn theme_table_matches_palette() {
        let palette: Vec<_> = THEMES.iter().map(|t| (t.name, t.bg, t.accent)).collect();
        assert_eq!(
            palette,
            vec![
                ("pink", "#ff4fa2", "#ffb6e6"),
                ("yellow", "#f7e35b", "#fff7b2"),
                ("orange", "#ffb347", "#ffe0b2"),
                ("brown", "#d08c60", "#f3d6b6"),
            ]
        );
        for theme in THEMES.iter() {
            assert_eq!(theme.wave.as_str(), theme.name);
        }
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn theme_images_ship_with_the_page() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for theme in THEMES.iter() {
            for file in std::iter::once(theme.main_dish).chain(theme.food_icons) {
                assert!(public.join(file).is_file(), "missing public/{file}");
            }
        }
    }

    #[test]
    fn wave_paths_follow_crest() {
        let [front, back] = WaveVariant::Orange.paths();
        assert_eq!(front, "M0,140 Q200,240 400,140 T800,140 V600 H0 Z");
        assert_eq!(back, "M0,220 Q200,320 400,220 T800,220 V600 H0 Z");
        assert_eq!(WaveVariant::Pink.paths()[0], "M0,100 Q200,200 400,100 T800,100 V600 H0 Z");
    }
}
