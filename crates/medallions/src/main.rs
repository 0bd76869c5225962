mod audio;
mod cli;
mod renderer;
mod ui;
mod utils;

use clap::Parser;
use cli::{Args, Settings};
use medallions_core::paint::Geometry;
use medallions_core::{Driver, PlaybackState, Recorder, SignalSource, Silence, Viewport};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{NannouPainter, Resolution};
use std::cell::RefCell;
use ui::bindings::{parse_key, Action};
use ui::toggle::PlayToggle;
use utils::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());
    let args = Args::parse();

    if args.dump_frame {
        dump_frame(&args.settings());
        return;
    }

    nannou::app(model).run();
}

struct Model {
    driver: RefCell<Driver<StdRng>>,
    source: RefCell<Box<dyn SignalSource>>,
    toggle: PlayToggle,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn model(app: &App) -> Model {
    let args = Args::parse();
    let settings = args.settings();
    let resolution = Resolution::current(args.windowed);
    app.set_exit_on_escape(false);

    let mut win = app
        .new_window()
        .title("medallions")
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .resized(resized)
        .size(resolution.width, resolution.height)
        .min_size(200, 200);

    if resolution.fullscreen {
        win = win.fullscreen();
    }

    let window_id = match win.build() {
        Ok(id) => id,
        Err(e) => {
            log::error!("Could not open window: {:?}", e);
            std::process::exit(1);
        }
    };

    let (width, height) = app
        .window(window_id)
        .map(|w| w.inner_size_points())
        .unwrap_or((resolution.width as f32, resolution.height as f32));
    log::info!(
        "Window size: {}x{} (requested: {}x{})",
        width,
        height,
        resolution.width,
        resolution.height
    );

    let mut driver = Driver::new(
        settings.config.pattern(),
        Viewport::new(width, height),
        make_rng(settings.seed),
    );
    let mut source = audio::open_source(
        settings.track.as_deref(),
        driver.config().spectrum_bins,
        settings.config.smoothing(),
    );

    if args.autoplay {
        driver.set_playback(&mut *source, PlaybackState::Running);
    }

    Model {
        driver: RefCell::new(driver),
        source: RefCell::new(source),
        toggle: PlayToggle::new(),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let bounds = app.window_rect();
    let draw = app.draw();

    let mut driver = model.driver.borrow_mut();
    let mut source = model.source.borrow_mut();
    let mut painter = NannouPainter::new(&draw, bounds);
    let stats = driver.frame(&mut **source, &mut painter);

    if frame.nth() % 600 == 0 {
        log::debug!(
            "frame {}: peak {} over {} bins, {} medallions{}",
            frame.nth(),
            stats.peak,
            stats.bins,
            stats.medallions,
            if stats.underrun { " (no signal)" } else { "" }
        );
    }

    model.toggle.draw(&draw, bounds, driver.playback());

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", e);
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    model.driver.get_mut().resize(size.x, size.y);
}

fn toggle_playback(model: &mut Model) {
    let source = model.source.get_mut();
    model.driver.get_mut().toggle_playback(&mut **source);
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match parse_key(key) {
        Some(Action::Quit) => app.quit(),
        Some(Action::TogglePlayback) => toggle_playback(model),
        Some(Action::Regenerate) => model.driver.get_mut().regenerate(),
        None => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && model.toggle.hit(app.window_rect(), app.mouse.position()) {
        toggle_playback(model);
    }
}

/// Headless run: one silent 800x600 frame into a recorder
fn dump_frame(settings: &Settings) {
    let mut driver = Driver::new(
        settings.config.pattern(),
        Viewport::new(800.0, 600.0),
        make_rng(settings.seed),
    );
    let mut recorder = Recorder::new();
    let stats = driver.frame(&mut Silence::default(), &mut recorder);

    let (mut ellipses, mut rects, mut triangles, mut polylines) = (0, 0, 0, 0);
    for shape in recorder.shapes() {
        match shape.geometry {
            Geometry::Ellipse { .. } => ellipses += 1,
            Geometry::Rect { .. } => rects += 1,
            Geometry::Triangle(_) => triangles += 1,
            Geometry::Polyline { .. } => polylines += 1,
        }
    }

    let specials = driver.medallions().iter().filter(|m| m.is_special).count();
    let arcs = driver.medallions().iter().filter(|m| m.has_arc).count();
    println!(
        "{} medallions ({} special, {} with arcs), {} bins",
        stats.medallions, specials, arcs, stats.bins
    );
    println!(
        "{} shapes: {} ellipses, {} rects, {} triangles, {} polylines",
        ellipses + rects + triangles + polylines,
        ellipses,
        rects,
        triangles,
        polylines
    );
}
