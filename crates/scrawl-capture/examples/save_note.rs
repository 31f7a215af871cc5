//! Minimal host: mount a capture surface, scribble, save the snapshot.
//!
//! Plays the role the note-taking page plays in production: it receives the
//! encoded image through the save callback and owns it from there (here it
//! just writes the PNG next to the binary).

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use scrawl_capture::{CaptureConfig, CaptureSurface};
use scrawl_core::input::{InputEvent, SurfaceRect};
use scrawl_core::model::Tool;

fn main() {
    env_logger::init();

    let mut capture = CaptureSurface::new(CaptureConfig::default()).on_save(|uri| {
        println!("host received {} bytes: {}...", uri.len(), &uri[..40]);

        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        let png = BASE64_STANDARD.decode(payload).unwrap();
        std::fs::write("scrawl_note.png", png).unwrap();
        println!("wrote scrawl_note.png");
    });

    let container = SurfaceRect::new(0.0, 0.0, 800.0, 400.0);
    capture.mount(&container, 2.0).expect("mount");

    // A zigzag in ink...
    capture.handle(&InputEvent::mouse_down(50.0, 300.0));
    for i in 0..=20 {
        let x = 50.0 + i as f32 * 30.0;
        let y = if i % 2 == 0 { 100.0 } else { 300.0 };
        capture.handle(&InputEvent::mouse_move(x, y));
    }
    capture.handle(&InputEvent::PointerUp);

    // ...with a bite taken out of the middle.
    capture.set_tool(Tool::Eraser);
    capture.handle(&InputEvent::mouse_down(300.0, 80.0));
    capture.handle(&InputEvent::mouse_move(300.0, 320.0));
    capture.handle(&InputEvent::PointerUp);

    capture.export_image();
}
