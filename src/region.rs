/// An axis-aligned rectangle of interest, with inclusive bounds.
///
/// The bounds are signed so a region computed from an oversized margin can be inverted (`max < min`). Such a region is
/// [empty](Region::is_empty) and is never sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    // min, max
    x: (i64, i64),
    // min, max
    y: (i64, i64),
}

impl Region {
    /// Compute the centered region of an image of the given size, excluding `margin` of the width and height from
    /// every edge.
    ///
    /// The lower bounds are rounded up and the upper bounds down, so the region never grows past the margin. A margin
    /// of `0.0` gives the full image bounds, and a margin of `0.5` or more gives an empty or inverted region.
    pub fn centered(width: u32, height: u32, margin: f64) -> Region {
        let (width, height) = (width as f64, height as f64);

        Region {
            x: ((width * margin).ceil() as i64, (width - width * margin).floor() as i64),
            y: ((height * margin).ceil() as i64, (height - height * margin).floor() as i64),
        }
    }

    pub fn new(x: (i64, i64), y: (i64, i64)) -> Region {
        Region { x, y }
    }

    pub fn min_x(self) -> i64 {
        self.x.0
    }

    pub fn max_x(self) -> i64 {
        self.x.1
    }

    pub fn min_y(self) -> i64 {
        self.y.0
    }

    pub fn max_y(self) -> i64 {
        self.y.1
    }

    pub fn width(self) -> i64 {
        self.x.1 - self.x.0
    }

    pub fn height(self) -> i64 {
        self.y.1 - self.y.0
    }

    /// Whether the region is inverted in either dimension, or collapsed to a single point.
    pub fn is_empty(self) -> bool {
        let (width, height) = (self.width(), self.height());
        width < 0 || height < 0 || (width == 0 && height == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MARGIN;

    #[test]
    fn default_margin_excludes_edges() {
        let region = Region::centered(100, 100, DEFAULT_MARGIN);

        assert_eq!((region.min_x(), region.max_x()), (16, 84));
        assert_eq!((region.min_y(), region.max_y()), (16, 84));
        assert_eq!(region.width(), 68);
        assert_eq!(region.height(), 68);
        assert!(!region.is_empty());
    }

    #[test]
    fn bounds_round_inwards() {
        // 0.16 * 250 = 40, 0.16 * 123 = 19.68
        let region = Region::centered(250, 123, 0.16);

        assert_eq!((region.min_x(), region.max_x()), (40, 210));
        assert_eq!((region.min_y(), region.max_y()), (20, 103));
    }

    #[test]
    fn zero_margin_is_full_image() {
        let region = Region::centered(640, 480, 0.0);

        assert_eq!(region, Region::new((0, 640), (0, 480)));
    }

    #[test]
    fn half_margin_is_empty() {
        assert!(Region::centered(100, 100, 0.5).is_empty());
        assert!(Region::centered(101, 99, 0.5).is_empty());
        assert!(Region::centered(100, 100, 0.75).is_empty());
    }

    #[test]
    fn single_column_is_not_empty() {
        let region = Region::new((5, 5), (0, 10));

        assert_eq!(region.width(), 0);
        assert!(!region.is_empty());
    }
}
