/// A detected face rectangle in frame pixel coordinates.
///
/// Detections are consumed immediately by the aggregation loop; only the
/// first face-bearing frame's boxes survive long enough to be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl FaceBox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let b = FaceBox::new(10, -5, 40, 60);
        assert_eq!(b.x, 10);
        assert_eq!(b.y, -5);
        assert_eq!(b.width, 40);
        assert_eq!(b.height, 60);
    }
}
