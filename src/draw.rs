// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the rendered tunnel.
// 2) Stroked lines and rectangle outlines drawn straight into the pixel
//    buffer, which is all the tunnel scene is made of.

use crate::error::Error;
use crate::types::{FrameBuffer, Rect, Segment};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window for the tunnel scene.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| Error::WindowInit(e.to_string()))?;

        // The scene is static; 60 fps is plenty for resize/key polling.
        window.set_target_fps(60);

        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current drawable size in pixels. A change between two polls is our
    /// resize notification.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    // Tuning keys. KeyRepeat::Yes lets a held key keep stepping the value.

    /// `=` or numpad `+`: one step deeper into the tunnel.
    pub fn depth_up_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Equal, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::NumPadPlus, KeyRepeat::Yes)
    }

    /// `-` or numpad `-`: one step shallower.
    pub fn depth_down_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Minus, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::NumPadMinus, KeyRepeat::Yes)
    }

    /// `.`: raise the shrink factor (frames thin out more slowly).
    pub fn shrink_up_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Period, KeyRepeat::Yes)
    }

    /// `,`: lower the shrink factor (frames rush toward the center).
    pub fn shrink_down_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Comma, KeyRepeat::Yes)
    }
}

/* ---------- Software drawing: pixels, stroked lines, outlines ---------- */

/// Fill the whole framebuffer with one color.
/// Visual: the canvas becomes a flat field of `color`.
pub fn fill(fb: &mut FrameBuffer, color: u32) {
    for px in &mut fb.pixels {
        *px = color;
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Stamp a `width` x `width` block centered on (x,y).
/// Visual: one dot of a stroked line.
#[inline]
fn stamp(fb: &mut FrameBuffer, x: i32, y: i32, width: i32, color: u32) {
    let lo = -(width / 2);
    let hi = lo + width - 1;
    for dy in lo..=hi {
        for dx in lo..=hi {
            put_pixel(fb, x + dx, y + dy, color);
        }
    }
}

/// Draw a stroked line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight black joint line appears on the yellow wall.
pub fn draw_line(
    fb: &mut FrameBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    color: u32,
) {
    let width = width.max(1);
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(fb, x0, y0, width, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw the four edges of a rectangle outline.
/// Visual: one "ring" of the tunnel.
pub fn draw_rect_outline(fb: &mut FrameBuffer, rect: &Rect, width: i32, color: u32) {
    let l = rect.left.round() as i32;
    let t = rect.top.round() as i32;
    let r = rect.right.round() as i32;
    let b = rect.bottom.round() as i32;
    draw_line(fb, l, t, r, t, width, color);
    draw_line(fb, r, t, r, b, width, color);
    draw_line(fb, r, b, l, b, width, color);
    draw_line(fb, l, b, l, t, width, color);
}

/// Draw one planned wall segment.
pub fn draw_segment(fb: &mut FrameBuffer, seg: &Segment, width: i32, color: u32) {
    draw_line(
        fb,
        seg.x0.round() as i32,
        seg.y0.round() as i32,
        seg.x1.round() as i32,
        seg.y1.round() as i32,
        width,
        color,
    );
}
