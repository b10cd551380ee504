//! Tile colors keyed by value.

/// Background colors a tile can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TileColor {
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
    Cyan,
    Pink,
    Orange,
    White,
}

/// Background for a tile value.
///
/// Values up to 256 each have their own color. Empty cells and anything
/// above 256 fall back to white.
pub const fn tile_color(value: u32) -> TileColor {
    match value {
        2 => TileColor::Green,
        4 => TileColor::Blue,
        8 => TileColor::Red,
        16 => TileColor::Yellow,
        32 => TileColor::Purple,
        64 => TileColor::Cyan,
        128 => TileColor::Pink,
        256 => TileColor::Orange,
        _ => TileColor::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_two_through_256() {
        let expected = [
            (2, TileColor::Green),
            (4, TileColor::Blue),
            (8, TileColor::Red),
            (16, TileColor::Yellow),
            (32, TileColor::Purple),
            (64, TileColor::Cyan),
            (128, TileColor::Pink),
            (256, TileColor::Orange),
        ];
        for (value, color) in expected {
            assert_eq!(tile_color(value), color, "value {value}");
        }
    }

    #[test]
    fn everything_else_is_white() {
        for value in [0, 512, 1024, 2048, 1 << 17] {
            assert_eq!(tile_color(value), TileColor::White);
        }
    }
}
