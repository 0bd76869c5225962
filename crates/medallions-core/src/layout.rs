//! Tiling the canvas with medallions.
//!
//! Cells are laid out row-major from the top-left corner and may overhang
//! the right and bottom edges. Two cells per layout are marked special.

use rand::Rng;

use crate::config::{PatternConfig, MIN_PITCH};
use crate::geom::{Point, Viewport};
use crate::medallion::Medallion;

/// Number of special medallions per layout
pub const SPECIAL_COUNT: usize = 2;

/// Grid cell centers in row-major order, before the global offset
///
/// Rows start at `diameter / 2` and advance by `diameter + spacing` while
/// the coordinate stays below the viewport extent plus one diameter, so the
/// last row and column may hang past the edge. A pitch below [`MIN_PITCH`]
/// yields no cells.
pub fn grid_positions(viewport: Viewport, diameter: f32, spacing: f32) -> Vec<Point> {
    let pitch = diameter + spacing;
    let mut positions = Vec::new();
    let finite = diameter.is_finite() && viewport.width.is_finite() && viewport.height.is_finite();
    if !(finite && pitch >= MIN_PITCH) {
        return positions;
    }

    let mut y = diameter / 2.0;
    while y < viewport.height + diameter {
        let mut x = diameter / 2.0;
        while x < viewport.width + diameter {
            positions.push(Point::new(x, y));
            x += pitch;
        }
        y += pitch;
    }
    positions
}

/// Build a full layout for `viewport`
///
/// Every medallion gets a freshly sampled recipe; then two distinct ones
/// are marked special.
pub fn build_layout<R: Rng + ?Sized>(
    viewport: Viewport,
    config: &PatternConfig,
    rng: &mut R,
) -> Vec<Medallion> {
    let offset = Point::new(config.offset_x, config.offset_y);
    let mut medallions: Vec<Medallion> =
        grid_positions(viewport, config.circle_diameter, config.spacing)
            .into_iter()
            .map(|p| Medallion::sample(p + offset, config.circle_diameter, rng))
            .collect();

    for idx in choose_special(medallions.len(), rng) {
        medallions[idx].is_special = true;
    }

    log::debug!(
        "built layout: {} medallions for {}x{}",
        medallions.len(),
        viewport.width,
        viewport.height
    );
    medallions
}

/// Pick `SPECIAL_COUNT` distinct indices below `count`
///
/// Redraws until an unused index comes up. With fewer than
/// `SPECIAL_COUNT` candidates every index is returned.
pub fn choose_special<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<usize> {
    if count <= SPECIAL_COUNT {
        return (0..count).collect();
    }

    let mut chosen = Vec::with_capacity(SPECIAL_COUNT);
    while chosen.len() < SPECIAL_COUNT {
        let idx = rng.random_range(0..count);
        if !chosen.contains(&idx) {
            chosen.push(idx);
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn layout(w: f32, h: f32, seed: u64) -> Vec<Medallion> {
        let mut rng = StdRng::seed_from_u64(seed);
        build_layout(Viewport::new(w, h), &PatternConfig::default(), &mut rng)
    }

    #[test]
    fn rows_and_columns_step_by_pitch() {
        let config = PatternConfig::default();
        let pitch = config.pitch();
        for (w, h) in [(180.0, 180.0), (640.0, 480.0), (1920.0, 1080.0), (333.0, 1234.0)] {
            let medallions = layout(w, h, 1);
            let first_y = medallions[0].center.y;
            let per_row = medallions.iter().filter(|m| m.center.y == first_y).count();
            assert_eq!(medallions.len() % per_row, 0);

            for row in medallions.chunks(per_row) {
                for pair in row.windows(2) {
                    assert_eq!(pair[1].center.x - pair[0].center.x, pitch);
                    assert_eq!(pair[1].center.y, pair[0].center.y);
                }
            }
            for rows in medallions.chunks(per_row).collect::<Vec<_>>().windows(2) {
                assert_eq!(rows[1][0].center.y - rows[0][0].center.y, pitch);
                assert_eq!(rows[1][0].center.x, rows[0][0].center.x);
            }
        }
    }

    #[test]
    fn exactly_two_special() {
        for seed in 0..50 {
            let medallions = layout(800.0, 600.0, seed);
            assert_eq!(medallions.iter().filter(|m| m.is_special).count(), 2);
        }
    }

    #[test]
    fn special_pair_varies_across_seeds() {
        let pairs: HashSet<Vec<usize>> = (0..20)
            .map(|seed| {
                layout(800.0, 600.0, seed)
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| m.is_special)
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();
        assert!(pairs.len() > 1);
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(layout(800.0, 600.0, 42), layout(800.0, 600.0, 42));
    }

    #[test]
    fn choose_special_small_counts_terminate() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(choose_special(0, &mut rng).is_empty());
        assert_eq!(choose_special(1, &mut rng), vec![0]);
        let mut two = choose_special(2, &mut rng);
        two.sort();
        assert_eq!(two, vec![0, 1]);
    }

    #[test]
    fn choose_special_indices_are_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let picked = choose_special(3, &mut rng);
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|&i| i < 3));
        }
    }

    #[test]
    fn empty_viewport_still_tiles_one_cell() {
        // x < 0 + diameter admits the first cell
        let medallions = layout(0.0, 0.0, 5);
        assert_eq!(medallions.len(), 1);
        assert!(medallions[0].is_special);
    }

    #[test]
    fn degenerate_pitch_yields_nothing() {
        assert!(grid_positions(Viewport::new(800.0, 600.0), 10.0, -10.0).is_empty());
    }

    #[test]
    fn sub_unit_pitch_returns_instead_of_spinning() {
        // x += 0.0001 stalls in f32 long before x reaches 800
        assert!(grid_positions(Viewport::new(800.0, 600.0), 0.0001, 0.0).is_empty());
        assert!(grid_positions(Viewport::new(f32::INFINITY, 600.0), 180.0, 35.0).is_empty());

        let unit = grid_positions(Viewport::new(10.0, 10.0), 1.0, 0.0);
        assert_eq!(unit.len(), 11 * 11);
    }
}
