use approx::assert_relative_eq;
use medallions_core::layout::grid_positions;
use medallions_core::signal::FixedSpectrum;
use medallions_core::{build_layout, Driver, PatternConfig, Point, Recorder, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scenario_config() -> PatternConfig {
    PatternConfig {
        circle_diameter: 180.0,
        spacing: 35.0,
        ..PatternConfig::default()
    }
}

#[test]
fn default_window_tiles_five_by_four() {
    let config = scenario_config();
    let mut rng = StdRng::seed_from_u64(2024);
    let medallions = build_layout(Viewport::new(800.0, 600.0), &config, &mut rng);

    // columns: 90, 305, 520, 735, 950 (< 980); rows: 90, 305, 520, 735 (< 780)
    assert_eq!(medallions.len(), 20);
    assert_eq!(medallions[0].center, Point::new(80.0, 70.0));
    assert_eq!(medallions[19].center, Point::new(940.0, 715.0));
    assert_eq!(medallions[4].center, Point::new(940.0, 70.0));
    assert_eq!(medallions[5].center, Point::new(80.0, 285.0));
    assert_eq!(medallions.iter().filter(|m| m.is_special).count(), 2);
}

#[test]
fn zero_offset_positions_match_grid() {
    let config = PatternConfig {
        offset_x: 0.0,
        offset_y: 0.0,
        ..scenario_config()
    };
    let viewport = Viewport::new(1024.0, 768.0);
    let grid = grid_positions(viewport, 180.0, 35.0);
    let medallions = build_layout(viewport, &config, &mut StdRng::seed_from_u64(9));
    let centers: Vec<Point> = medallions.iter().map(|m| m.center).collect();
    assert_eq!(centers, grid);
}

#[test]
fn resize_then_frame_uses_new_layout() {
    let mut driver = Driver::new(
        scenario_config(),
        Viewport::new(800.0, 600.0),
        StdRng::seed_from_u64(5),
    );
    let mut source = FixedSpectrum::new(vec![255.0; 1024]);
    let mut recorder = Recorder::new();

    driver.frame(&mut source, &mut recorder);
    let before = recorder.shapes().count();

    driver.resize(400.0, 300.0);
    recorder.clear();
    let stats = driver.frame(&mut source, &mut recorder);

    // 3 columns (90, 305, 520 < 580) by 2 rows (90, 305 < 480)
    assert_eq!(stats.medallions, 6);
    assert!(recorder.shapes().count() < before);
    assert_relative_eq!(driver.rotation(), 2.0 * 255.0 / 10_000.0, epsilon = 1e-6);
    assert_eq!(recorder.depth(), 0);
    assert_eq!(recorder.unbalanced_pops(), 0);
}
