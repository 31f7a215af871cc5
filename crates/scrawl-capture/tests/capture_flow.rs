//! End-to-end capture flows: mount, draw, switch tools, resize, export.

use pretty_assertions::assert_eq;
use scrawl_capture::{CaptureConfig, CaptureSurface};
use scrawl_core::input::{InputEvent, SurfaceRect, TouchPoint};
use scrawl_core::model::Tool;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn container() -> SurfaceRect {
    SurfaceRect::new(0.0, 0.0, 800.0, 400.0)
}

fn mounted(dpr: f32) -> CaptureSurface {
    let mut capture = CaptureSurface::new(CaptureConfig::default());
    capture.mount(&container(), dpr).unwrap();
    capture
}

fn pixel(capture: &CaptureSurface, x: u32, y: u32) -> [u8; 4] {
    let p = capture.surface().unwrap().pixmap().pixel(x, y).unwrap();
    [p.red(), p.green(), p.blue(), p.alpha()]
}

fn draw_line(capture: &mut CaptureSurface, from: (f32, f32), to: (f32, f32)) {
    capture.handle(&InputEvent::mouse_down(from.0, from.1));
    capture.handle(&InputEvent::mouse_move(to.0, to.1));
    capture.handle(&InputEvent::PointerUp);
}

#[test]
fn dpr_two_doubles_the_backing_buffer() {
    let capture = mounted(2.0);
    assert_eq!(capture.surface().unwrap().physical_size(), (1600, 800));
    assert_eq!(capture.surface().unwrap().logical_size(), (800.0, 400.0));
}

#[test]
fn logical_stroke_lands_at_physical_coordinates() {
    let mut capture = mounted(2.0);
    draw_line(&mut capture, (10.0, 10.0), (100.0, 10.0));

    // Logical (10,10)->(100,10) rasterizes along physical y=20, x in [20,200].
    assert_ne!(pixel(&capture, 100, 20), WHITE);
    assert_ne!(pixel(&capture, 30, 20), WHITE);
    assert_eq!(pixel(&capture, 100, 80), WHITE);
}

#[test]
fn no_pixels_before_pointer_down() {
    let mut capture = mounted(1.0);
    let blank = capture.export_image().unwrap();

    // Stray moves with no preceding down must not draw.
    capture.handle(&InputEvent::mouse_move(50.0, 50.0));
    capture.handle(&InputEvent::mouse_move(200.0, 200.0));

    assert_eq!(capture.export_image().unwrap(), blank);
}

#[test]
fn down_alone_commits_nothing() {
    let mut capture = mounted(1.0);
    let blank = capture.export_image().unwrap();

    capture.handle(&InputEvent::mouse_down(50.0, 50.0));
    capture.handle(&InputEvent::PointerUp);

    assert_eq!(capture.export_image().unwrap(), blank);
}

#[test]
fn clear_restores_the_blank_payload() {
    let mut capture = mounted(1.0);
    let blank = capture.export_image().unwrap();

    draw_line(&mut capture, (10.0, 10.0), (300.0, 200.0));
    draw_line(&mut capture, (50.0, 300.0), (700.0, 40.0));
    assert_ne!(capture.export_image().unwrap(), blank);

    capture.clear();
    assert_eq!(capture.export_image().unwrap(), blank);
}

#[test]
fn clear_keeps_the_active_tool() {
    let mut capture = mounted(1.0);
    capture.set_tool(Tool::Eraser);
    capture.clear();
    assert_eq!(capture.tool(), Tool::Eraser);
}

#[test]
fn export_twice_without_drawing_is_byte_identical() {
    let mut capture = mounted(1.5);
    draw_line(&mut capture, (10.0, 10.0), (200.0, 150.0));

    let first = capture.export_image().unwrap();
    let second = capture.export_image().unwrap();
    assert_eq!(first, second);
}

#[test]
fn export_invokes_save_callback_with_data_uri() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let saved: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&saved);

    let mut capture = CaptureSurface::new(CaptureConfig::default())
        .on_save(move |uri| sink.borrow_mut().push(uri.to_string()));
    capture.mount(&container(), 1.0).unwrap();

    let returned = capture.export_image().unwrap();
    let saved = saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0], returned);
    assert!(saved[0].starts_with("data:image/png;base64,"));
}

#[test]
fn operations_before_mount_are_silent_noops() {
    let mut capture = CaptureSurface::new(CaptureConfig::default());

    capture.handle(&InputEvent::mouse_down(10.0, 10.0));
    capture.handle(&InputEvent::mouse_move(50.0, 50.0));
    capture.clear();
    assert_eq!(capture.export_image(), None);
    assert!(!capture.is_mounted());

    // Mounting afterwards starts from a blank buffer.
    capture.mount(&container(), 1.0).unwrap();
    assert_eq!(pixel(&capture, 30, 30), WHITE);
}

#[test]
fn unmount_drops_the_buffer() {
    let mut capture = mounted(1.0);
    draw_line(&mut capture, (10.0, 10.0), (100.0, 100.0));

    capture.unmount();
    assert_eq!(capture.export_image(), None);
}

#[test]
fn tool_switch_mid_stroke_restyles_later_segments_only() {
    let mut capture = mounted(1.0);

    // Ink a horizontal run, then switch to the eraser mid-stroke and come
    // back across it vertically.
    capture.handle(&InputEvent::mouse_down(20.0, 50.0));
    capture.handle(&InputEvent::mouse_move(120.0, 50.0));
    assert_ne!(pixel(&capture, 70, 50), WHITE);

    capture.set_tool(Tool::Eraser);
    capture.handle(&InputEvent::mouse_move(120.0, 200.0));
    capture.handle(&InputEvent::PointerUp);

    // The inked segment far from the eraser's path is untouched...
    assert_ne!(pixel(&capture, 70, 50), WHITE);
    // ...but where the eraser crossed, the background is back.
    assert_eq!(pixel(&capture, 120, 120), WHITE);
}

#[test]
fn eraser_pass_overpaints_ink() {
    let mut capture = mounted(1.0);
    draw_line(&mut capture, (100.0, 20.0), (100.0, 380.0));
    assert_ne!(pixel(&capture, 100, 200), WHITE);

    capture.set_tool(Tool::Eraser);
    draw_line(&mut capture, (20.0, 200.0), (300.0, 200.0));
    assert_eq!(pixel(&capture, 100, 200), WHITE);
}

#[test]
fn resize_discards_raster_content() {
    let mut capture = mounted(1.0);
    let blank = capture.export_image().unwrap();

    draw_line(&mut capture, (10.0, 10.0), (400.0, 300.0));
    assert_ne!(capture.export_image().unwrap(), blank);

    // Same container, same dpr: still a fresh buffer afterwards.
    capture.handle_resize(&container(), 1.0).unwrap();
    assert_eq!(capture.export_image().unwrap(), blank);
}

#[test]
fn resize_abandons_the_stroke_in_progress() {
    let mut capture = mounted(1.0);
    let blank = capture.export_image().unwrap();

    capture.handle(&InputEvent::mouse_down(10.0, 10.0));
    capture.handle(&InputEvent::mouse_move(50.0, 50.0));

    capture.handle_resize(&container(), 2.0).unwrap();
    assert_eq!(capture.surface().unwrap().physical_size(), (1600, 800));

    // Moves after the resize must not stitch to the pre-resize path.
    capture.handle(&InputEvent::mouse_move(300.0, 300.0));
    assert_eq!(capture.export_image().unwrap(), blank);
}

#[test]
fn configured_width_overrides_container_measurement() {
    let mut capture = CaptureSurface::new(CaptureConfig {
        logical_width: Some(640.0),
        logical_height: 360.0,
    });
    capture.mount(&SurfaceRect::new(0.0, 0.0, 1024.0, 400.0), 1.0).unwrap();
    assert_eq!(capture.surface().unwrap().logical_size(), (640.0, 360.0));
}

#[test]
fn only_the_first_touch_point_draws() {
    let rect = container();
    let mut capture = mounted(1.0);

    // Two simultaneous contacts: one tracing the top edge, one the bottom.
    let start = [
        TouchPoint { client_x: 100.0, client_y: 50.0 },
        TouchPoint { client_x: 100.0, client_y: 350.0 },
    ];
    let moved = [
        TouchPoint { client_x: 500.0, client_y: 50.0 },
        TouchPoint { client_x: 500.0, client_y: 350.0 },
    ];

    capture.handle(&InputEvent::touch_start(&start, &rect).unwrap());
    capture.handle(&InputEvent::touch_move(&moved, &rect).unwrap());
    capture.handle(&InputEvent::touch_end());

    // First touch's trajectory rendered; second's untouched.
    assert_ne!(pixel(&capture, 300, 50), WHITE);
    assert_eq!(pixel(&capture, 300, 350), WHITE);
}
