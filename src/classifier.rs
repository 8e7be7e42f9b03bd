use crate::{reference::ReferencePalette, ColorVector};

/// Maps sampled colors to the nearest entry of a palette.
#[derive(Debug, Clone, Copy)]
pub struct PixelClassifier<'a> {
    palette: &'a ReferencePalette,
}

impl<'a> PixelClassifier<'a> {
    pub fn new(palette: &'a ReferencePalette) -> Self {
        Self { palette }
    }

    /// Return the index of the palette entry closest to `color`.
    ///
    /// Equal distances resolve to the entry that comes first in the palette. If no entry can match at all, the first
    /// entry is returned.
    pub fn classify(&self, color: ColorVector) -> usize {
        let mut min_distance = f64::INFINITY;
        let mut nearest = 0;

        for (index, entry) in self.palette.entries().iter().enumerate() {
            let distance = entry.distance(color);

            if distance < min_distance {
                min_distance = distance;
                nearest = index;
            }
        }

        nearest
    }

    pub fn classify_label(&self, color: ColorVector) -> &'a str {
        let palette = self.palette;
        palette.entries()[self.classify(color)].label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::PaletteEntry;

    fn classify(palette: &ReferencePalette, (red, green, blue): (u8, u8, u8)) -> &str {
        PixelClassifier::new(palette).classify_label(ColorVector::new(red, green, blue))
    }

    #[test]
    fn reference_colors_classify_as_themselves() {
        let palette = ReferencePalette::default();

        for entry in palette.entries() {
            assert_eq!(classify(&palette, entry.rgb()), entry.label(), "{entry:?}");
        }
    }

    #[test]
    fn mid_gray_is_not_black_or_white() {
        let palette = ReferencePalette::default();

        assert_eq!(classify(&palette, (150, 150, 150)), "gray");
        assert_eq!(classify(&palette, (200, 200, 205)), "gray");
        assert_eq!(classify(&palette, (100, 100, 100)), "gray");
    }

    #[test]
    fn near_black_and_near_white_skip_gray() {
        let palette = ReferencePalette::default();

        assert_eq!(classify(&palette, (5, 5, 5)), "black");
        assert_eq!(classify(&palette, (60, 60, 60)), "black");
        assert_eq!(classify(&palette, (250, 250, 250)), "white");
    }

    #[test]
    fn dark_red_is_red() {
        assert_eq!(classify(&ReferencePalette::default(), (200, 50, 50)), "red");
    }

    #[test]
    fn shared_hue_beats_equal_raw_distance() {
        // both references are sqrt(300) away from the sample, only the second orders its channels the same way
        let palette = ReferencePalette::new(vec![
            PaletteEntry::euclidean("olive", (90, 90, 70)),
            PaletteEntry::euclidean("tan", (110, 90, 70)),
        ])
        .unwrap();

        assert_eq!(classify(&palette, (100, 80, 60)), "tan");
    }

    #[test]
    fn ties_resolve_to_first_entry() {
        let palette = ReferencePalette::new(vec![
            PaletteEntry::euclidean("first", (100, 0, 0)),
            PaletteEntry::euclidean("second", (100, 0, 0)),
        ])
        .unwrap();
        assert_eq!(classify(&palette, (120, 0, 0)), "first");

        let swapped = ReferencePalette::new(vec![
            PaletteEntry::euclidean("second", (100, 0, 0)),
            PaletteEntry::euclidean("first", (100, 0, 0)),
        ])
        .unwrap();
        assert_eq!(classify(&swapped, (120, 0, 0)), "second");
    }

    #[test]
    fn unmatched_color_falls_back_to_first_entry() {
        let palette = ReferencePalette::new(vec![PaletteEntry::grayscale_band("gray", (127, 127, 127))]).unwrap();

        assert_eq!(classify(&palette, (255, 0, 0)), "gray");
    }
}
