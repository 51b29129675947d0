use super::common::{Rect, Shape};
use crate::physics::Obstacles;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::{fs, io, path::Path};

macro_rules! define_tiles {
    ($($variant:ident => ($cx:literal, $cy:literal)),+ $(,)?) => {
        #[derive(Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug)]
        pub enum TileType {
            $($variant),+
        }

        impl TileType {
            pub const ALL: &'static [TileType] = &[
                $(TileType::$variant),+
            ];

            /// Column and row of this tile in the sprite sheet.
            const fn sheet_cell(self) -> (i32, i32) {
                match self {
                    $(TileType::$variant => ($cx, $cy)),+
                }
            }
        }
    };
}

define_tiles! {
    Red         => (0, 0),
    Green       => (0, 1),
    Blue        => (0, 2),
    Center      => (2, 1),
    Top         => (2, 0),
    TopRight    => (3, 0),
    Right       => (3, 1),
    BottomRight => (3, 2),
    Bottom      => (2, 2),
    BottomLeft  => (1, 2),
    Left        => (1, 1),
    TopLeft     => (1, 0),
}

impl TileType {
    pub fn from_code(code: i64) -> Option<TileType> {
        usize::try_from(code)
            .ok()
            .and_then(|index| TileType::ALL.get(index))
            .copied()
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Walls are every type from `Center` to `TopLeft`.
    pub fn is_blocking(self) -> bool {
        (TileType::Center.code()..=TileType::TopLeft.code()).contains(&self.code())
    }

    pub fn sprite_clip(self, tile_width: i32, tile_height: i32) -> Rect {
        let (cx, cy) = self.sheet_cell();
        Rect::new(cx * tile_width, cy * tile_height, tile_width, tile_height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadError {
    InvalidType { index: usize, code: i64 },
    Truncated { expected: usize, found: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::InvalidType { index, code } => {
                write!(f, "invalid tile type {} at cell {}", code, index)
            }
            LoadError::Truncated { expected, found } => {
                write!(f, "map ended after {} of {} cells", found, expected)
            }
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub tile_width: i32,
    pub tile_height: i32,
    pub tiles_per_row: usize,
    pub rows: usize,
}

impl GridLayout {
    pub fn total_tiles(&self) -> usize {
        self.tiles_per_row * self.rows
    }

    pub fn level_bounds(&self) -> Rect {
        Rect::new(
            0,
            0,
            self.tile_width * self.tiles_per_row as i32,
            self.tile_height * self.rows as i32,
        )
    }

    pub fn tile_rect(&self, index: usize) -> Rect {
        Rect::new(
            (index % self.tiles_per_row) as i32 * self.tile_width,
            (index / self.tiles_per_row) as i32 * self.tile_height,
            self.tile_width,
            self.tile_height,
        )
    }
}

impl Default for GridLayout {
    /// 16 x 12 tiles of 80 px, a 1280 x 960 level.
    fn default() -> Self {
        GridLayout {
            tile_width: 80,
            tile_height: 80,
            tiles_per_row: 16,
            rows: 12,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub rect: Rect,
    pub tile_type: TileType,
}

impl Tile {
    pub fn is_blocking(&self) -> bool {
        self.tile_type.is_blocking()
    }
}

pub struct TileMap {
    layout: GridLayout,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Builds one tile per cell from codes given in row major order. Codes past
    /// the last cell are ignored.
    pub fn load_from_cell_stream(
        layout: GridLayout,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<TileMap, LoadError> {
        let expected = layout.total_tiles();
        let mut tiles = Vec::with_capacity(expected);
        let mut ids = ids.into_iter();

        for index in 0..expected {
            let Some(code) = ids.next() else {
                warn!("Tile map truncated at cell {} of {}", index, expected);
                return Err(LoadError::Truncated {
                    expected,
                    found: index,
                });
            };
            let Some(tile_type) = TileType::from_code(code) else {
                warn!("Invalid tile type {} at cell {}", code, index);
                return Err(LoadError::InvalidType { index, code });
            };
            tiles.push(Tile {
                rect: layout.tile_rect(index),
                tile_type,
            });
        }

        debug!("Loaded tile map with {} tiles", tiles.len());
        Ok(TileMap { layout, tiles })
    }

    /// Parses whitespace separated codes. Reading stops at the first token that
    /// is not an integer, so a garbled map reports as truncated.
    pub fn parse_cell_stream(layout: GridLayout, text: &str) -> Result<TileMap, LoadError> {
        let ids = text.split_whitespace().map_while(|t| t.parse::<i64>().ok());
        TileMap::load_from_cell_stream(layout, ids)
    }

    pub fn load_file(path: impl AsRef<Path>, layout: GridLayout) -> io::Result<TileMap> {
        let s = fs::read_to_string(path)?;
        TileMap::parse_cell_stream(layout, &s)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile_at(&self, col: usize, row: usize) -> Option<&Tile> {
        if col >= self.layout.tiles_per_row {
            return None;
        }
        self.tiles.get(col + row * self.layout.tiles_per_row)
    }

    pub fn level_bounds(&self) -> Rect {
        self.layout.level_bounds()
    }

    pub fn blocking_overlap(&self, shape: &Shape) -> bool {
        self.tiles
            .iter()
            .filter(|tile| tile.is_blocking())
            .any(|tile| Shape::Rect(tile.rect).overlaps(shape))
    }

    /// Tiles overlapping the camera view, in map order.
    pub fn visible_tiles<'a>(&'a self, view: &'a Rect) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles.iter().filter(move |tile| tile.rect.overlaps(view))
    }
}

impl Obstacles for TileMap {
    fn blocks(&self, shape: &Shape) -> bool {
        self.blocking_overlap(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Circle;

    fn small_layout() -> GridLayout {
        GridLayout {
            tile_width: 10,
            tile_height: 10,
            tiles_per_row: 3,
            rows: 2,
        }
    }

    #[test]
    fn test_full_stream_loads() {
        let layout = GridLayout::default();
        let ids = (0..layout.total_tiles() as i64).map(|i| i % 12);
        let map = TileMap::load_from_cell_stream(layout, ids).unwrap();
        assert_eq!(map.len(), 192);
        assert_eq!(map.tiles()[17].rect, Rect::new(80, 80, 80, 80));
        assert_eq!(map.tiles()[191].rect, Rect::new(1200, 880, 80, 80));
    }

    #[test]
    fn test_one_short_is_truncated() {
        let layout = GridLayout::default();
        let ids = vec![0; layout.total_tiles() - 1];
        let err = TileMap::load_from_cell_stream(layout, ids).err().unwrap();
        assert_eq!(
            err,
            LoadError::Truncated {
                expected: 192,
                found: 191
            }
        );
    }

    #[test]
    fn test_out_of_range_codes() {
        let layout = small_layout();
        let err = TileMap::load_from_cell_stream(layout, vec![0, 1, -1, 0, 0, 0])
            .err()
            .unwrap();
        assert_eq!(err, LoadError::InvalidType { index: 2, code: -1 });

        let err = TileMap::load_from_cell_stream(layout, vec![0, 1, 2, 12, 0, 0])
            .err()
            .unwrap();
        assert_eq!(err, LoadError::InvalidType { index: 3, code: 12 });
    }

    #[test]
    fn test_parse_text_stream() {
        let map = TileMap::parse_cell_stream(small_layout(), "00 01 02\n03 04 05\n").unwrap();
        assert_eq!(map.tile_at(2, 1).unwrap().tile_type, TileType::TopRight);
        assert_eq!(map.tile_at(2, 1).unwrap().rect, Rect::new(20, 10, 10, 10));
        assert!(map.tile_at(3, 0).is_none());

        let err = TileMap::parse_cell_stream(small_layout(), "0 1 x 3 4 5")
            .err()
            .unwrap();
        assert_eq!(
            err,
            LoadError::Truncated {
                expected: 6,
                found: 2
            }
        );
    }

    #[test]
    fn test_blocking_range() {
        assert!(!TileType::Red.is_blocking());
        assert!(!TileType::Green.is_blocking());
        assert!(!TileType::Blue.is_blocking());
        for tile_type in &TileType::ALL[3..] {
            assert!(tile_type.is_blocking(), "{:?}", tile_type);
        }
    }

    #[test]
    fn test_blocking_overlap() {
        // Only the middle cell of the top row is a wall
        let map = TileMap::load_from_cell_stream(small_layout(), vec![0, 3, 0, 0, 0, 0]).unwrap();
        assert!(map.blocking_overlap(&Shape::Rect(Rect::new(5, 0, 6, 6))));
        assert!(!map.blocking_overlap(&Shape::Rect(Rect::new(0, 0, 10, 10))));
        assert!(!map.blocking_overlap(&Shape::Rect(Rect::new(0, 10, 30, 10))));
        assert!(map.blocking_overlap(&Shape::Circle(Circle::new(15, 15, 6))));
        assert!(!map.blocking_overlap(&Shape::Circle(Circle::new(15, 15, 5))));
    }

    #[test]
    fn test_visible_tiles() {
        let map = TileMap::load_from_cell_stream(small_layout(), vec![0; 6]).unwrap();
        let view = Rect::new(12, 0, 10, 5);
        let visible: Vec<_> = map.visible_tiles(&view).map(|t| t.rect.x).collect();
        assert_eq!(visible, vec![10, 20]);
    }

    #[test]
    fn test_sprite_clip() {
        assert_eq!(
            TileType::TopLeft.sprite_clip(80, 80),
            Rect::new(80, 0, 80, 80)
        );
        assert_eq!(
            TileType::Bottom.sprite_clip(80, 80),
            Rect::new(160, 160, 80, 80)
        );
    }

    #[test]
    fn test_load_file_wraps_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.map");
        fs::write(&path, "0 0 0").unwrap();
        let err = TileMap::load_file(&path, small_layout()).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
