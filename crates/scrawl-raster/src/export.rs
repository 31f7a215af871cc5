//! Lossless snapshot encoding.
//!
//! Exports are one-shot: each call encodes the buffer as it is at that
//! moment, nothing is cached, and identical pixels encode to identical
//! bytes.

use crate::error::RasterResult;
use crate::surface::StrokeSurface;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Encode the surface's current contents as a PNG (RGBA8, straight alpha).
pub fn to_png(surface: &StrokeSurface) -> RasterResult<Vec<u8>> {
    let pixmap = surface.pixmap();

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;

        // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
        let mut data = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        writer.write_image_data(&data)?;
    }

    Ok(buf)
}

/// Encode the surface as a `data:image/png;base64,...` URI, the payload the
/// host forwards to whatever consumes the snapshot.
pub fn to_data_uri(surface: &StrokeSurface) -> RasterResult<String> {
    let png_bytes = to_png(surface)?;
    let mut uri = String::from("data:image/png;base64,");
    BASE64_STANDARD.encode_string(&png_bytes, &mut uri);
    log::debug!("exported {} PNG bytes as data URI", png_bytes.len());
    Ok(uri)
}
