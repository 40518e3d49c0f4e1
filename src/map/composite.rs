/// Layer compositing: the three raw grids collapse into one immutable
/// glyph/color grid, computed once after load.
///
/// Priority per cell: tele > front > game. An overlay layer wins only when
/// its id classifies to a known tag; the game layer is the unconditional
/// fallback, Unknown included (rendered "??"). Overlays are informational
/// annotations and must stay visible over base terrain.

use crate::domain::tile::{Appearance, LayerKind, TileKind};
use crate::map::source::MapLayers;

/// Width×height grid of composited display cells. Read-only for the rest
/// of the session; the viewport only ever reads from it.
pub struct UnifiedGrid {
    width: usize,
    height: usize,
    cells: Vec<Appearance>,
}

impl UnifiedGrid {
    pub fn compose(layers: &MapLayers) -> Self {
        let width = layers.game.width();
        let height = layers.game.height();
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(compose_cell(layers, x, y));
            }
        }
        UnifiedGrid { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Appearance {
        self.cells[y * self.width + x]
    }
}

fn compose_cell(layers: &MapLayers, x: usize, y: usize) -> Appearance {
    let tele = layers.tele.get(x, y);
    let tele_tag = TileKind::classify(LayerKind::Tele, tele.id);
    if tele_tag.overrides() {
        return tele_tag.appearance(tele.aux);
    }

    let front = layers.front.get(x, y);
    let front_tag = TileKind::classify(LayerKind::Front, front.id);
    if front_tag.overrides() {
        return front_tag.appearance(front.aux);
    }

    let game = layers.game.get(x, y);
    TileKind::classify(LayerKind::Game, game.id).appearance(game.aux)
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile::ColorClass;
    use crate::map::source::{LayerGrid, RawTile};

    /// Grid from a sparse list of (x, y, id, aux); everything else zero.
    fn grid(width: usize, height: usize, tiles: &[(usize, usize, u8, u8)]) -> LayerGrid {
        let mut cells = vec![RawTile::default(); width * height];
        for &(x, y, id, aux) in tiles {
            cells[y * width + x] = RawTile { id, aux };
        }
        LayerGrid::from_cells(width, height, cells)
    }

    fn layers(game: LayerGrid, front: LayerGrid, tele: LayerGrid) -> MapLayers {
        MapLayers {
            title: "test".to_string(),
            game,
            front,
            tele,
        }
    }

    /// Game-only map with absent (zeroed) overlays: kill at (1,1), air
    /// everywhere else.
    #[test]
    fn game_only_kill_grid() {
        let m = layers(
            grid(4, 4, &[(1, 1, 2, 0)]),
            LayerGrid::zeroed(4, 4),
            LayerGrid::zeroed(4, 4),
        );
        let u = UnifiedGrid::compose(&m);
        assert_eq!(u.width(), 4);
        assert_eq!(u.height(), 4);

        let kill = u.get(1, 1);
        assert_eq!(kill.glyph, ['>', '<']);
        assert_eq!(kill.color.index(), 3);

        for (x, y) in [(0, 0), (3, 3), (2, 1)] {
            let air = u.get(x, y);
            assert_eq!(air.glyph, [' ', ' ']);
            assert_eq!(air.color.index(), 1);
        }
    }

    #[test]
    fn front_overrides_game() {
        // Front freeze (id 9) over game air at (0,0).
        let m = layers(
            grid(2, 1, &[]),
            grid(2, 1, &[(0, 0, 9, 0)]),
            LayerGrid::zeroed(2, 1),
        );
        let u = UnifiedGrid::compose(&m);
        let cell = u.get(0, 0);
        assert_eq!(cell, TileKind::Freeze.appearance(0));
        assert_eq!(cell.color, ColorClass::Freeze);
    }

    #[test]
    fn tele_beats_front_and_game() {
        // All three layers populated at (0,0): tele "to" number 5 must win.
        let m = layers(
            grid(1, 1, &[(0, 0, 1, 0)]),
            grid(1, 1, &[(0, 0, 2, 0)]),
            grid(1, 1, &[(0, 0, 27, 5)]),
        );
        let u = UnifiedGrid::compose(&m);
        let cell = u.get(0, 0);
        assert_eq!(cell.glyph, [' ', '5']);
        assert_eq!(cell.color, ColorClass::To);
    }

    #[test]
    fn unknown_tele_falls_through_to_front() {
        // Tele id 1 is unmapped, so the front hook-through shows.
        let m = layers(
            grid(1, 1, &[(0, 0, 1, 0)]),
            grid(1, 1, &[(0, 0, 5, 0)]),
            grid(1, 1, &[(0, 0, 1, 0)]),
        );
        let u = UnifiedGrid::compose(&m);
        assert_eq!(u.get(0, 0), TileKind::Hookthrough.appearance(0));
    }

    #[test]
    fn unknown_everywhere_renders_game_fallback() {
        let m = layers(
            grid(1, 1, &[(0, 0, 77, 0)]),
            LayerGrid::zeroed(1, 1),
            LayerGrid::zeroed(1, 1),
        );
        let u = UnifiedGrid::compose(&m);
        let cell = u.get(0, 0);
        assert_eq!(cell.glyph, ['?', '?']);
        assert_eq!(cell.color, ColorClass::Hook);
    }

    #[test]
    fn tele_number_formats_into_two_columns() {
        let m = layers(
            grid(3, 1, &[]),
            LayerGrid::zeroed(3, 1),
            grid(3, 1, &[(0, 0, 10, 7), (1, 0, 26, 42), (2, 0, 29, 123)]),
        );
        let u = UnifiedGrid::compose(&m);
        assert_eq!(u.get(0, 0).glyph, [' ', '7']);
        assert_eq!(u.get(0, 0).color, ColorClass::RedFrom);
        assert_eq!(u.get(1, 0).glyph, ['4', '2']);
        assert_eq!(u.get(1, 0).color, ColorClass::BlueFrom);
        // Numbers past two digits keep their last two.
        assert_eq!(u.get(2, 0).glyph, ['2', '3']);
        assert_eq!(u.get(2, 0).color, ColorClass::Checkpoint);
    }
}
