/// Map loading: a thin adapter over the `twmap` parser.
///
/// Nothing outside this module sees twmap types. Each physics layer comes
/// out as a plain (id, aux) grid the rest of the program owns. Front and
/// tele layers are optional in the format; an absent one is replaced by an
/// all-zero grid of the game layer's dimensions, so the classifier's
/// Unknown default naturally yields no override.

use std::path::Path;

use anyhow::{Context, Result};
use twmap::{FrontLayer, GameLayer, TeleLayer, TwMap};

/// One raw layer cell: tile id plus auxiliary byte (tile flags for the
/// game/front layers, teleporter number for the tele layer).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RawTile {
    pub id: u8,
    pub aux: u8,
}

/// Row-major width×height grid of raw tiles.
#[derive(Clone, Debug)]
pub struct LayerGrid {
    width: usize,
    height: usize,
    cells: Vec<RawTile>,
}

impl LayerGrid {
    /// Grid of all-zero tiles. Stands in for an absent layer.
    pub fn zeroed(width: usize, height: usize) -> Self {
        LayerGrid {
            width,
            height,
            cells: vec![RawTile::default(); width * height],
        }
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<RawTile>) -> Self {
        assert_eq!(cells.len(), width * height);
        LayerGrid { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y); out-of-bounds reads come back as a zero tile.
    pub fn get(&self, x: usize, y: usize) -> RawTile {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            RawTile::default()
        }
    }
}

/// The three parallel layer grids of one loaded map, plus its display title.
/// All grids share the game layer's dimensions.
pub struct MapLayers {
    pub title: String,
    pub game: LayerGrid,
    pub front: LayerGrid,
    pub tele: LayerGrid,
}

/// Parse a map file and pull out the physics layers.
/// Fails before the terminal is ever touched, so errors here surface as
/// ordinary messages on stderr.
pub fn load_map(path: &Path) -> Result<MapLayers> {
    let mut map = TwMap::parse_file(path)
        .with_context(|| format!("failed to parse map file {}", path.display()))?;
    map.load()
        .with_context(|| format!("failed to decode map data in {}", path.display()))?;

    let game = {
        let layer = map
            .find_physics_layer::<GameLayer>()
            .context("map has no game layer")?;
        let tiles = layer.tiles.unwrap_ref();
        let (height, width) = tiles.dim();
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let tile = &tiles[[y, x]];
                cells.push(RawTile {
                    id: tile.id,
                    aux: tile.flags.bits(),
                });
            }
        }
        LayerGrid::from_cells(width, height, cells)
    };

    let front = match map.find_physics_layer::<FrontLayer>() {
        Some(layer) => {
            let tiles = layer.tiles.unwrap_ref();
            let (height, width) = tiles.dim();
            let mut cells = Vec::with_capacity(width * height);
            for y in 0..height {
                for x in 0..width {
                    let tile = &tiles[[y, x]];
                    cells.push(RawTile {
                        id: tile.id,
                        aux: tile.flags.bits(),
                    });
                }
            }
            LayerGrid::from_cells(width, height, cells)
        }
        None => LayerGrid::zeroed(game.width(), game.height()),
    };

    let tele = match map.find_physics_layer::<TeleLayer>() {
        Some(layer) => {
            let tiles = layer.tiles.unwrap_ref();
            let (height, width) = tiles.dim();
            let mut cells = Vec::with_capacity(width * height);
            for y in 0..height {
                for x in 0..width {
                    let tile = &tiles[[y, x]];
                    cells.push(RawTile {
                        id: tile.id,
                        aux: tile.number,
                    });
                }
            }
            LayerGrid::from_cells(width, height, cells)
        }
        None => LayerGrid::zeroed(game.width(), game.height()),
    };

    Ok(MapLayers {
        title: path.display().to_string(),
        game,
        front,
        tele,
    })
}
