// src/main.rs
use nannou::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use squarecircle::{
    config::Config,
    controllers::SceneController,
    render::{DrawSink, SceneRenderer},
};

struct Model {
    // Core components:
    controller: SceneController,
    scene: SceneRenderer,

    // Rendering components:
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,
    surface_size: Vec2,
    needs_redraw: bool,

    // FPS
    last_update: Instant,
    fps: f32,

    // Debug overlay
    debug_flag: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config; a bad config stops here rather than mid-animation
    let config = Config::load().expect("Failed to load config file");
    let controller = SceneController::from_config(&config).expect("Failed to build shape chain");
    let scene = SceneRenderer::from_config(&config).expect("Failed to build scene renderer");

    tracing::info!(
        "{} shapes, step {}, tick every {}ms",
        controller.sequence().chain().len(),
        config.animation.step,
        config.animation.interval_ms
    );

    // Create window
    let window_id = app
        .new_window()
        .title("squarecircle")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to create window");
    let window = app.window(window_id).expect("Window closed during setup");

    // Set up render texture
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([
            config.rendering.texture_width,
            config.rendering.texture_height,
        ])
        // RENDER_ATTACHMENT for the `Draw` render pass, sampled by the reshaper.
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(config.rendering.texture_samples)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    // Set up rendering pipeline
    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());
    let sample_count = window.msaa_samples();

    // Create the texture reshaper.
    let texture_view = texture.view().build();
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture.sample_count(),
        texture.sample_type(),
        sample_count,
        Frame::TEXTURE_FORMAT,
    );

    // Draw coordinates are texture pixels
    let surface_size = vec2(
        config.rendering.texture_width as f32,
        config.rendering.texture_height as f32,
    );

    Model {
        controller,
        scene,

        texture,
        draw,
        draw_renderer,
        texture_reshaper,
        surface_size,
        needs_redraw: true,

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.controller.on_tap();
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            model.controller.on_tap();
        }
        Key::D => {
            model.debug_flag = !model.debug_flag;
            model.needs_redraw = true;
        }
        Key::Q | Key::Escape => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    // Redraw requests from the controller are coalesced into one frame
    let mut redraw_requested = false;
    model
        .controller
        .update(update.since_last.as_secs_f32(), |_| redraw_requested = true);

    if redraw_requested || model.needs_redraw || model.debug_flag {
        redraw_scene(model);
        render_to_texture(app, model);
        model.needs_redraw = false;
    }
}

// Draw the state of Model into the given Frame
fn view(_app: &App, model: &Model, frame: Frame) {
    //resize texture to screen
    let mut encoder = frame.command_encoder();

    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

// ******************************* Scene drawing *******************************

fn redraw_scene(model: &mut Model) {
    model.draw.reset();
    let mut sink = DrawSink::new(&model.draw);
    model.scene.draw(
        &mut sink,
        model.controller.sequence(),
        Vec2::ZERO,
        model.surface_size,
    );

    if model.debug_flag {
        draw_debug_overlay(model);
    }
}

fn draw_debug_overlay(model: &Model) {
    let draw = &model.draw;
    let sequence = model.controller.sequence();
    let node = sequence.current();

    let text = format!(
        "FPS: {:.1}\nnode {} / {}\nsweep {:?}\nprogress {:.3} ({:?})",
        model.fps,
        node.index,
        sequence.chain().len(),
        sequence.direction(),
        node.state.progress(),
        node.state.phase(),
    );

    let corner = model.surface_size / 2.0;
    draw.text(&text)
        .left_justify()
        .w_h(300.0, 100.0)
        .x_y(-corner.x + 160.0, corner.y - 60.0)
        .color(BLACK);
}

// ******************************* Rendering *****************************

fn render_to_texture(app: &App, model: &mut Model) {
    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Texture renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);
    let texture_view = model.texture.view().build();

    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        1.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
}
