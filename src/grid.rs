use crate::region::Region;

/// An iterator over the sample points of a fixed-step grid laid across a [`Region`].
///
/// The step is the longer side of the region divided by the granularity, so the grid is square even when the region
/// isn't. Points are yielded row by row starting from the region's minimum corner, up to and including the maximum
/// bounds, and are rounded to the nearest pixel. Floating point rounding may leave the last row or column just short
/// of the bound, in which case it is not sampled.
///
/// An empty region yields no points.
#[derive(Debug, Clone)]
pub struct GridSampler {
    region: Region,
    step: f64,
    column: u64,
    row: u64,
    done: bool,
}

impl GridSampler {
    pub fn new(region: &Region, granularity: u32) -> Self {
        let longest_side = region.width().max(region.height());
        let step = longest_side as f64 / granularity.max(1) as f64;

        Self {
            region: *region,
            step,
            column: 0,
            row: 0,
            done: region.is_empty() || step <= 0.0,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    fn offset(&self, min: i64, index: u64) -> f64 {
        // computed from the index rather than accumulated so errors don't build up along the row
        min as f64 + index as f64 * self.step
    }
}

impl Iterator for GridSampler {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let y = self.offset(self.region.min_y(), self.row);
            if y > self.region.max_y() as f64 {
                self.done = true;
                break;
            }

            let x = self.offset(self.region.min_x(), self.column);
            if x > self.region.max_x() as f64 {
                // wrap around to the start of the next row
                self.row += 1;
                self.column = 0;
                continue;
            }

            self.column += 1;
            return Some((to_pixel(x), to_pixel(y)));
        }

        None
    }
}

fn to_pixel(coordinate: f64) -> u32 {
    coordinate.round().max(0.0) as u32
}
