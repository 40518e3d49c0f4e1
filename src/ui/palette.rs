/// Terminal palette: two fixed variants, picked once at startup.
///
/// Rich wants a truecolor terminal and keeps the original custom-mixed
/// terrain colors; Basic sticks to the 8 ANSI colors. Color classes are
/// stable across both, so swapping palettes never touches classification
/// or compositing.

use std::env;

use crossterm::style::Color;

use crate::config::ColorMode;
use crate::domain::tile::ColorClass;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Palette {
    Rich,
    Basic,
}

impl Palette {
    /// Pick a variant: an explicit preference wins, auto probes the
    /// terminal's truecolor advertisement.
    pub fn select(mode: ColorMode) -> Palette {
        match mode {
            ColorMode::Rich => Palette::Rich,
            ColorMode::Basic => Palette::Basic,
            ColorMode::Auto => {
                if truecolor_terminal() {
                    Palette::Rich
                } else {
                    Palette::Basic
                }
            }
        }
    }

    /// Foreground and background for one color class.
    pub fn colors(self, class: ColorClass) -> (Color, Color) {
        match self {
            Palette::Rich => rich(class),
            Palette::Basic => basic(class),
        }
    }
}

fn truecolor_terminal() -> bool {
    env::var("COLORTERM")
        .map(|v| v.contains("truecolor") || v.contains("24bit"))
        .unwrap_or(false)
}

// Custom-mixed terrain colors used by the rich variant.
const HOOK_BROWN: Color = Color::Rgb { r: 157, g: 141, b: 102 };
const UNHOOK_GREY: Color = Color::Rgb { r: 125, g: 126, b: 134 };
const AIR_GREY: Color = Color::Rgb { r: 160, g: 160, b: 150 };
const FREEZE_GREY: Color = Color::Rgb { r: 67, g: 67, b: 67 };

fn rich(class: ColorClass) -> (Color, Color) {
    match class {
        // Air and freeze paint foreground and background alike: the cell
        // reads as a solid block regardless of glyph.
        ColorClass::Air => (AIR_GREY, AIR_GREY),
        ColorClass::Hook => (HOOK_BROWN, Color::Reset),
        ColorClass::Kill => (Color::White, Color::DarkRed),
        ColorClass::Unhook => (UNHOOK_GREY, Color::Reset),
        ColorClass::Freeze => (FREEZE_GREY, FREEZE_GREY),
        ColorClass::Unfreeze => (Color::Black, Color::DarkYellow),
        ColorClass::Deep => (Color::DarkMagenta, Color::Black),
        ColorClass::Undeep => (Color::DarkRed, Color::DarkYellow),
        ColorClass::RedFrom => (Color::DarkBlue, Color::DarkRed),
        ColorClass::BlueFrom => (Color::DarkRed, Color::DarkBlue),
        ColorClass::Checkpoint => (Color::Black, Color::White),
        ColorClass::To => (Color::White, Color::DarkYellow),
    }
}

fn basic(class: ColorClass) -> (Color, Color) {
    match class {
        ColorClass::Air => (Color::DarkBlue, Color::Reset),
        ColorClass::Hook => (Color::DarkYellow, Color::Reset),
        ColorClass::Unhook => (Color::White, Color::Reset),
        ColorClass::Freeze => (Color::White, Color::Black),
        // The remaining pairs use named colors in both variants.
        other => rich(other),
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLASSES: [ColorClass; 12] = [
        ColorClass::Air,
        ColorClass::Hook,
        ColorClass::Kill,
        ColorClass::Unhook,
        ColorClass::Freeze,
        ColorClass::Unfreeze,
        ColorClass::Deep,
        ColorClass::Undeep,
        ColorClass::RedFrom,
        ColorClass::BlueFrom,
        ColorClass::Checkpoint,
        ColorClass::To,
    ];

    #[test]
    fn every_class_resolves_in_both_variants() {
        for class in ALL_CLASSES {
            let _ = Palette::Rich.colors(class);
            let _ = Palette::Basic.colors(class);
        }
    }

    #[test]
    fn explicit_preference_wins() {
        assert_eq!(Palette::select(ColorMode::Rich), Palette::Rich);
        assert_eq!(Palette::select(ColorMode::Basic), Palette::Basic);
    }

    #[test]
    fn variants_differ_on_terrain_classes() {
        for class in [ColorClass::Air, ColorClass::Hook, ColorClass::Unhook, ColorClass::Freeze] {
            assert_ne!(Palette::Rich.colors(class), Palette::Basic.colors(class));
        }
        // Shared pairs stay identical.
        assert_eq!(
            Palette::Rich.colors(ColorClass::Kill),
            Palette::Basic.colors(ColorClass::Kill)
        );
    }
}
