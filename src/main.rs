use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

use showcase::config::CarouselConfig;
use showcase::constants::*;
use showcase::dropdown::Dropdown;
use showcase::render::texture_loader::{load_texture_with_exif_rotation, preload_textures};
use showcase::render::{Banner, IndicatorStrip, NavMenu, PanelStrip, upload_area};
use showcase::timer::FrameTicker;
use showcase::upload::{UploadCandidate, UploadField};
use showcase::Carousel;

/// Auto-advancing image carousel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory of images to show, one slide per file
    image_dir: Option<PathBuf>,

    /// TOML file with `interval_ms` and `[[slides]]` entries; wins over IMAGE_DIR
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Time between automatic advances, in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (mut config, source) = CarouselConfig::resolve(args.config.as_deref(), args.image_dir.as_deref())
        .context("failed to load carousel configuration")?;
    if let Some(interval_ms) = args.interval_ms {
        config = config.with_interval_ms(interval_ms)?;
    }
    log::info!(
        "{} slides from {source:?}, advancing every {:?}",
        config.slides.len(),
        config.interval()
    );

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Showcase")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Mount the carousel ---
    let textures = preload_textures(&mut rl, &thread, &config.slides);
    let mut ticker = FrameTicker::new();
    let mut carousel = Carousel::mount(
        &config.slides,
        config.interval(),
        Some(PanelStrip::new(textures)),
        Some(IndicatorStrip::new()),
        &mut ticker,
    );

    let menu = NavMenu::new(config.slides.iter().map(|s| s.label.clone()).collect());
    let mut dropdown = Dropdown::new();
    let mut upload = UploadField::new();
    let mut thumbnail: Option<Texture2D> = None;
    let mut banner = Banner::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let panel_bounds = Rectangle::new(
            0.0,
            TOP_BAR_HEIGHT,
            screen_width,
            screen_height - TOP_BAR_HEIGHT,
        );
        let mouse = rl.get_mouse_position();

        // 1. Pointer input
        if dropdown.is_open() && menu.menu_rect().check_collision_point_rec(mouse) {
            dropdown.on_menu_enter();
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if menu.button_rect().check_collision_point_rec(mouse) {
                dropdown.toggle();
            } else if let Some(index) = menu.item_at(mouse).filter(|_| dropdown.is_open()) {
                if let Some(carousel) = carousel.as_mut() {
                    carousel.on_select(index)?;
                }
                dropdown.toggle();
            } else {
                dropdown.on_outside_click();
                if let Some(carousel) = carousel.as_mut() {
                    if let Some(index) = carousel.indicators().hit_test(panel_bounds, mouse) {
                        carousel.on_select(index)?;
                    }
                }
            }
        }

        // 2. Upload area
        if rl.is_file_dropped() {
            let dropped = rl.load_dropped_files();
            let files: Vec<UploadCandidate> = dropped
                .paths()
                .into_iter()
                .filter_map(|path| match UploadCandidate::from_path(Path::new(path)) {
                    Ok(file) => Some(file),
                    Err(e) => {
                        log::warn!("cannot read dropped file {path}: {e}");
                        None
                    }
                })
                .collect();

            match upload.drop_files(files) {
                Ok(Some(file)) => {
                    log::info!("accepted upload {} ({} bytes)", file.name, file.size);
                    let path = file.path.clone();
                    thumbnail = match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
                        Ok(texture) => Some(texture),
                        Err(e) => {
                            log::warn!("{e:#}");
                            None
                        }
                    };
                }
                Ok(None) => {}
                Err(e) => {
                    log::info!("rejected upload: {e:?}");
                    banner.show(e.to_string());
                }
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
            upload.clear();
            thumbnail = None;
        }

        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            match upload.submit() {
                Ok(file) => banner.show(format!("Ready to submit {}", file.name)),
                Err(e) => banner.show(e.to_string()),
            }
        }

        // 3. Timers and fades
        if let Some(carousel) = carousel.as_mut() {
            for _ in 0..ticker.advance(Duration::from_secs_f32(dt)) {
                carousel.on_advance_tick();
            }
            carousel.panels_mut().update(dt);
        }
        banner.update(dt);

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        if let Some(carousel) = carousel.as_ref() {
            carousel.panels().draw(&mut d, panel_bounds);
            carousel.indicators().draw(&mut d, panel_bounds);
        }

        d.draw_rectangle_rec(
            Rectangle::new(0.0, 0.0, screen_width, TOP_BAR_HEIGHT),
            Color::new(17, 24, 39, 255),
        );
        upload_area::draw(
            &mut d,
            &upload,
            thumbnail.as_ref(),
            upload_area::area_rect(screen_width),
        );
        banner.draw(&mut d, screen_width);
        menu.draw(
            &mut d,
            &dropdown,
            carousel.as_ref().and_then(|c| c.panels().visible_index()),
        );
    }

    Ok(())
}
