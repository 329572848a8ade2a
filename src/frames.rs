// Frame generator: the concentric rectangles that form the tunnel.
// Visual expectation: rectangle 0 hugs the window edges (minus the margin),
// and each following rectangle is a smaller copy pulled toward the center
// of the window, the vanishing point of the perspective.

use crate::types::Rect;

/// Generation stops once a contracted rectangle's width or height falls
/// below this many pixels.
pub const MIN_FRAME_EXTENT: f32 = 2.0;

/// Produce the ordered frame sequence for a `width` x `height` surface.
///
/// Index 0 is the outermost rectangle; every later index sits one step
/// deeper in the tunnel. The result always holds at least 1 and at most
/// `depth_layers` rectangles.
pub fn generate_frames(
    width: f32,
    height: f32,
    margin: f32,
    depth_layers: usize,
    shrink: f32,
) -> Vec<Rect> {
    let cx = width / 2.0;
    let cy = height / 2.0;

    let mut rect = Rect {
        left: margin,
        top: margin,
        right: width - margin,
        bottom: height - margin,
    };

    let mut frames = Vec::with_capacity(depth_layers);
    for _ in 0..depth_layers {
        frames.push(rect);

        // Pull every coordinate toward its center axis by the shrink factor.
        // The center itself never moves, so the rectangles stay concentric.
        rect = Rect {
            left: cx + (rect.left - cx) * shrink,
            top: cy + (rect.top - cy) * shrink,
            right: cx + (rect.right - cx) * shrink,
            bottom: cy + (rect.bottom - cy) * shrink,
        };

        // Signed extent check: a collapsed *or inverted* rectangle ends the
        // sequence. A 0-sized surface inverts at once and yields one frame.
        if rect.width() < MIN_FRAME_EXTENT || rect.height() < MIN_FRAME_EXTENT {
            break;
        }
    }

    frames
}
