use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::shared::constants::ACCENT_COLOR;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// 5x7 glyph rows for the tag text, one bit per column, MSB leftmost.
const GLYPH_F: [u8; 7] = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000];
const GLYPH_A: [u8; 7] = [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001];
const GLYPH_C: [u8; 7] = [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110];
const GLYPH_E: [u8; 7] = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111];

const TAG: [[u8; 7]; 4] = [GLYPH_F, GLYPH_A, GLYPH_C, GLYPH_E];
const GLYPH_SCALE: i32 = 2;

/// Draws one hollow rectangle plus a "FACE" tag per detection on a copy of
/// the frame. The original frame stays untouched.
pub fn annotate(frame: &Frame, faces: &[FaceBox]) -> Frame {
    let mut canvas = RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .unwrap_or_else(|| RgbImage::new(frame.width(), frame.height()));

    let accent = Rgb(ACCENT_COLOR);
    for face in faces {
        if face.width == 0 || face.height == 0 {
            continue;
        }
        let rect = Rect::at(face.x, face.y).of_size(face.width, face.height);
        draw_hollow_rect_mut(&mut canvas, rect, accent);
        draw_tag(&mut canvas, face.x, face.y - 7 * GLYPH_SCALE - 3, accent);
    }

    Frame::new(
        canvas.into_raw(),
        frame.width(),
        frame.height(),
        frame.channels(),
        frame.index(),
    )
}

fn draw_tag(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    let mut cursor_x = x;
    for glyph in &TAG {
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..5 {
                if bits & (0b10000 >> col) == 0 {
                    continue;
                }
                let px = cursor_x + col as i32 * GLYPH_SCALE;
                let py = y + row as i32 * GLYPH_SCALE;
                if px < 0 || py < 0 {
                    continue;
                }
                draw_filled_rect_mut(
                    canvas,
                    Rect::at(px, py).of_size(GLYPH_SCALE as u32, GLYPH_SCALE as u32),
                    color,
                );
            }
        }
        // glyph width plus one column of spacing
        cursor_x += 6 * GLYPH_SCALE;
    }
}
