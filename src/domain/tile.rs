/// Tile semantics for the three physics layers (game, front, tele).
/// Classification is total: an id outside a layer's table maps to Unknown,
/// never an error. All layer tables and glyphs are centralized here.

/// Which physics layer a raw tile id came from. Each layer has its own
/// id table; the same id can mean different things per layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayerKind {
    Game,
    Front,
    Tele,
}

/// Semantic tag of one classified tile, across all layers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileKind {
    Air,
    Hook,
    Kill,
    Unhook,
    Freeze,
    Unfreeze,
    Deep,
    Undeep,
    Hookthrough,
    YellowTelegun,
    BlueTelegun,
    RedFrom,
    BlueFrom,
    To,
    Checkpoint,
    Cto,
    BlueCfrm,
    RedCfrm,
    Unknown,
}

/// Palette pair index. Discriminants are stable pair numbers, not colors;
/// the palette resolves them to concrete colors once at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum ColorClass {
    Air = 1,
    Hook = 2,
    Kill = 3,
    Unhook = 4,
    Freeze = 5,
    Unfreeze = 6,
    Deep = 7,
    Undeep = 8,
    RedFrom = 10,
    BlueFrom = 11,
    Checkpoint = 12,
    To = 13,
}

impl ColorClass {
    #[allow(dead_code)]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// One display cell: always two terminal columns wide.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Appearance {
    pub glyph: [char; 2],
    pub color: ColorClass,
}

impl TileKind {
    /// Classify a raw tile id for the given layer.
    pub fn classify(layer: LayerKind, id: u8) -> TileKind {
        match layer {
            LayerKind::Game => TileKind::from_game_id(id),
            LayerKind::Front => TileKind::from_front_id(id),
            LayerKind::Tele => TileKind::from_tele_id(id),
        }
    }

    fn from_game_id(id: u8) -> TileKind {
        match id {
            0 => TileKind::Air,
            1 => TileKind::Hook,
            2 => TileKind::Kill,
            3 => TileKind::Unhook,
            9 => TileKind::Freeze,
            11 => TileKind::Unfreeze,
            // Upstream listed 12 as both deep and undeep; the second entry
            // silently won. Kept as undeep, likely an upstream defect.
            12 => TileKind::Undeep,
            _ => TileKind::Unknown,
        }
    }

    fn from_front_id(id: u8) -> TileKind {
        match id {
            2 | 4 => TileKind::Kill,
            5 => TileKind::Hookthrough,
            9 => TileKind::Freeze,
            11 => TileKind::Unfreeze,
            12 => TileKind::Undeep, // same duplicate-key history as the game table
            98 => TileKind::YellowTelegun,
            99 => TileKind::BlueTelegun,
            _ => TileKind::Unknown,
        }
    }

    fn from_tele_id(id: u8) -> TileKind {
        match id {
            10 => TileKind::RedFrom,
            26 => TileKind::BlueFrom,
            27 => TileKind::To,
            29 => TileKind::Checkpoint,
            30 => TileKind::Cto,
            31 => TileKind::BlueCfrm,
            63 => TileKind::RedCfrm,
            _ => TileKind::Unknown,
        }
    }

    /// Does this tag take precedence over lower layers when compositing?
    /// Everything except Unknown does; note that the teleguns override even
    /// though they render with the fallback glyph.
    pub fn overrides(self) -> bool {
        self != TileKind::Unknown
    }

    /// Glyph and color class for this tag. `aux` is the teleporter number
    /// and only shows up in the tags that display it.
    pub fn appearance(self, aux: u8) -> Appearance {
        let (glyph, color) = match self {
            TileKind::Air => ([' ', ' '], ColorClass::Air),
            TileKind::Hook => (['█', '█'], ColorClass::Hook),
            TileKind::Kill => (['>', '<'], ColorClass::Kill),
            TileKind::Unhook => (['█', '█'], ColorClass::Unhook),
            TileKind::Freeze => ([' ', ' '], ColorClass::Freeze),
            TileKind::Unfreeze => (['☀', ' '], ColorClass::Unfreeze),
            TileKind::Deep => (['☀', ' '], ColorClass::Deep),
            TileKind::Undeep => (['☀', ' '], ColorClass::Undeep),
            TileKind::Hookthrough => (['▀', '▄'], ColorClass::Unhook),
            TileKind::RedFrom => (format_aux(aux), ColorClass::RedFrom),
            TileKind::BlueFrom => (format_aux(aux), ColorClass::BlueFrom),
            TileKind::RedCfrm => (['c', 'f'], ColorClass::RedFrom),
            TileKind::BlueCfrm => (['c', 'f'], ColorClass::BlueFrom),
            TileKind::Checkpoint => (format_aux(aux), ColorClass::Checkpoint),
            TileKind::To | TileKind::Cto => (format_aux(aux), ColorClass::To),
            TileKind::YellowTelegun | TileKind::BlueTelegun | TileKind::Unknown => {
                (['?', '?'], ColorClass::Hook)
            }
        };
        Appearance { glyph, color }
    }
}

/// Format a teleporter number into its fixed 2-column field. Single digits
/// are left-padded with a space; numbers past two digits keep only their
/// last two. Wider numbers cannot fit the cell, so the truncation is a
/// known display limit, not data loss elsewhere.
pub fn format_aux(value: u8) -> [char; 2] {
    let ones = (b'0' + value % 10) as char;
    if value < 10 {
        [' ', ones]
    } else {
        let tens = (b'0' + (value / 10) % 10) as char;
        [tens, ones]
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LAYERS: [LayerKind; 3] = [LayerKind::Game, LayerKind::Front, LayerKind::Tele];

    #[test]
    fn classification_is_total() {
        for layer in ALL_LAYERS {
            for id in 0..=255u8 {
                // Every id must classify and render, with or without aux.
                let tag = TileKind::classify(layer, id);
                let _ = tag.appearance(0);
                let _ = tag.appearance(255);
            }
        }
    }

    #[test]
    fn game_table_entries() {
        let t = |id| TileKind::classify(LayerKind::Game, id);
        assert_eq!(t(0), TileKind::Air);
        assert_eq!(t(1), TileKind::Hook);
        assert_eq!(t(2), TileKind::Kill);
        assert_eq!(t(3), TileKind::Unhook);
        assert_eq!(t(9), TileKind::Freeze);
        assert_eq!(t(11), TileKind::Unfreeze);
        assert_eq!(t(4), TileKind::Unknown);
        assert_eq!(t(200), TileKind::Unknown);
    }

    #[test]
    fn tele_table_entries() {
        let t = |id| TileKind::classify(LayerKind::Tele, id);
        assert_eq!(t(10), TileKind::RedFrom);
        assert_eq!(t(26), TileKind::BlueFrom);
        assert_eq!(t(27), TileKind::To);
        assert_eq!(t(29), TileKind::Checkpoint);
        assert_eq!(t(30), TileKind::Cto);
        assert_eq!(t(31), TileKind::BlueCfrm);
        assert_eq!(t(63), TileKind::RedCfrm);
        assert_eq!(t(0), TileKind::Unknown);
    }

    #[test]
    fn id_12_is_undeep_not_deep() {
        assert_eq!(TileKind::classify(LayerKind::Game, 12), TileKind::Undeep);
        assert_eq!(TileKind::classify(LayerKind::Front, 12), TileKind::Undeep);
    }

    #[test]
    fn teleguns_override_but_render_fallback() {
        for id in [98u8, 99] {
            let tag = TileKind::classify(LayerKind::Front, id);
            assert!(tag.overrides());
            let looks = tag.appearance(0);
            assert_eq!(looks.glyph, ['?', '?']);
            assert_eq!(looks.color, ColorClass::Hook);
        }
    }

    #[test]
    fn unknown_never_overrides() {
        assert!(!TileKind::Unknown.overrides());
        assert!(TileKind::Air.overrides());
    }

    #[test]
    fn aux_formatting() {
        assert_eq!(format_aux(7), [' ', '7']);
        assert_eq!(format_aux(42), ['4', '2']);
        assert_eq!(format_aux(123), ['2', '3']);
        assert_eq!(format_aux(0), [' ', '0']);
        assert_eq!(format_aux(255), ['5', '5']);
    }

    #[test]
    fn appearance_spot_checks() {
        let kill = TileKind::Kill.appearance(0);
        assert_eq!(kill.glyph, ['>', '<']);
        assert_eq!(kill.color.index(), 3);

        let air = TileKind::Air.appearance(0);
        assert_eq!(air.glyph, [' ', ' ']);
        assert_eq!(air.color.index(), 1);

        let to = TileKind::To.appearance(7);
        assert_eq!(to.glyph, [' ', '7']);
        assert_eq!(to.color.index(), 13);
    }
}
