use serde::{Deserialize, Serialize};

/// Bounding dimensions of a blueprint. All axes are non-negative; a
/// block coordinate is valid when `0 <= coord < dim` on every axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Size {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Size { x, y, z }
    }

    pub fn volume(&self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && y >= 0 && z >= 0 && x < self.x && y < self.y && z < self.z
    }

    /// Linear cell index for the flat-array formats. Height-major,
    /// then depth, then width; every flat-array decoder relies on
    /// this exact ordering.
    pub fn index_of(&self, x: i32, y: i32, z: i32) -> usize {
        let width = self.x as usize;
        let length = self.z as usize;
        y as usize * (width * length) + z as usize * width + x as usize
    }

    /// Inverse of `index_of`. Callers must ensure `x` and `z` are
    /// non-zero before deriving coordinates from an index.
    pub fn coords_of(&self, index: usize) -> (i32, i32, i32) {
        let width = self.x as usize;
        let length = self.z as usize;
        let x = (index % width) as i32;
        let z = ((index / width) % length) as i32;
        let y = (index / (width * length)) as i32;
        (x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::Size;

    #[test]
    fn test_index_round_trip() {
        let size = Size::new(3, 4, 5);
        for y in 0..4 {
            for z in 0..5 {
                for x in 0..3 {
                    let index = size.index_of(x, y, z);
                    assert_eq!(size.coords_of(index), (x, y, z));
                }
            }
        }
    }

    #[test]
    fn test_index_ordering_is_height_major() {
        let size = Size::new(2, 2, 2);
        // y * (w * l) + z * w + x
        assert_eq!(size.index_of(1, 0, 0), 1);
        assert_eq!(size.index_of(0, 0, 1), 2);
        assert_eq!(size.index_of(0, 1, 0), 4);
    }

    #[test]
    fn test_contains() {
        let size = Size::new(2, 3, 4);
        assert!(size.contains(0, 0, 0));
        assert!(size.contains(1, 2, 3));
        assert!(!size.contains(2, 0, 0));
        assert!(!size.contains(0, 3, 0));
        assert!(!size.contains(0, 0, 4));
        assert!(!size.contains(-1, 0, 0));
    }
}
