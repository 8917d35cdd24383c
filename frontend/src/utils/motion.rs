//! Timing for the page's transitions and entrance animations.
//!
//! Everything animates through CSS. These values render into `transition`
//! and `animation` shorthands so the durations live in one place.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    /// Slow start and finish with a fast middle, used for the theme swap.
    Theme,
    /// Slight overshoot, used for the hero image flip.
    Spring,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Theme => "cubic-bezier(0.77, 0, 0.18, 1)",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// `transition` value for a single property.
    pub fn transition(&self, property: &str) -> String {
        format!(
            "{property} {}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }

    /// `animation` value playing `keyframes` once, keeping the end state.
    /// The start state is held during the delay.
    pub fn animation(&self, keyframes: &str) -> String {
        format!(
            "{keyframes} {}ms {} {}ms both",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

pub const THEME_SWAP: Transition = Transition::new(700, Easing::Theme);
pub const ENTRANCE: Transition = Transition::new(700, Easing::EaseOut);
pub const HERO_TITLE: Transition = ENTRANCE.delayed(200);
pub const HERO_DESC: Transition = ENTRANCE.delayed(400);
pub const DISH_FLIP: Transition = Transition::new(700, Easing::Spring);
pub const ICON_BORDER: Transition = Transition::new(400, Easing::EaseOut);

/// Entrance of the `n`th content section, staggered by 100ms.
pub fn section_entrance(n: u32) -> Transition {
    ENTRANCE.delayed(n * 100)
}

/// Endless vertical bob for the `idx`th hero icon. Each icon gets a longer
/// period and a later start so the row never moves in lockstep.
pub fn icon_bob(idx: u32) -> String {
    format!(
        "food-bob {}ms {} {}ms infinite",
        4000 + idx * 1000,
        Easing::EaseInOut.css(),
        idx * 200
    )
}
