// Wall renderer: turns the frame sequence into the actual tunnel drawing.
// Visual outcomes:
// - Every frame is outlined in black, so the ceiling and floor joints read
//   as receding rings.
// - The gap between adjacent frames is bricked up: each of the four wall
//   bands carries 16 joint lines, and consecutive courses offset their
//   joints by half a brick (running bond), like a real wall.

use crate::draw;
use crate::frames::generate_frames;
use crate::types::{FrameBuffer, Rect, Segment};

/// Strong yellow background with black line work.
pub const BACKGROUND: u32 = 0x00FF_D300;
pub const FOREGROUND: u32 = 0x0000_0000;

/// Joint lines per wall band.
pub const BAND_JOINTS: usize = 16;

/// Bands are skipped once either bounding frame is this small; the joint
/// density near the vanishing point would otherwise turn solid black.
pub const MIN_BAND_EXTENT: f32 = 50.0;

const DEPTH_STEP: i32 = 5;
const DEPTH_MIN: usize = 10;
const DEPTH_MAX: usize = 200;

const SHRINK_STEP: f32 = 0.02;
const SHRINK_MIN: f32 = 0.80;
const SHRINK_MAX: f32 = 0.97;

/// Tunable drawing parameters. Only the renderer mutates these, through the
/// clamped bump methods below.
#[derive(Clone, Copy, Debug)]
pub struct RenderParams {
    pub margin: f32,         // pixels from the window edge to the first frame
    pub depth_layers: usize, // target number of frames in depth
    pub shrink: f32,         // per-layer contraction factor
    pub line_width: i32,     // stroke width for every outline and joint
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            margin: 16.0,
            depth_layers: 70,
            shrink: 0.92,
            line_width: 2,
        }
    }
}

impl RenderParams {
    /// Step the layer count, saturating inside [10, 200].
    fn bump_depth(&mut self, delta: i32) {
        let depth = self.depth_layers as i32 + delta;
        self.depth_layers = depth.clamp(DEPTH_MIN as i32, DEPTH_MAX as i32) as usize;
    }

    /// Step the shrink factor, saturating inside [0.80, 0.97].
    fn bump_shrink(&mut self, delta: f32) {
        self.shrink = (self.shrink + delta).clamp(SHRINK_MIN, SHRINK_MAX);
    }
}

/// Notifications the host loop routes to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Resized,
    DepthUp,
    DepthDown,
    ShrinkUp,
    ShrinkDown,
}

/// The tunnel scene. Owns the render parameters and redraws on demand.
pub struct Tunnel {
    params: RenderParams,
}

impl Tunnel {
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Apply one notification. Returns true when the scene must be redrawn.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Resized => {}
            Event::DepthUp => self.params.bump_depth(DEPTH_STEP),
            Event::DepthDown => self.params.bump_depth(-DEPTH_STEP),
            Event::ShrinkUp => self.params.bump_shrink(SHRINK_STEP),
            Event::ShrinkDown => self.params.bump_shrink(-SHRINK_STEP),
        }
        // Every notification invalidates the drawing; the frame sequence is
        // rebuilt from scratch on the next redraw, never patched in place.
        true
    }

    /// Redraw the whole scene into `fb`.
    /// Visual: yellow background, black frame outlines, bricked wall bands.
    pub fn redraw(&self, fb: &mut FrameBuffer) {
        draw::fill(fb, BACKGROUND);

        let frames = generate_frames(
            fb.width as f32,
            fb.height as f32,
            self.params.margin,
            self.params.depth_layers,
            self.params.shrink,
        );
        if frames.len() < 2 {
            // Background only; a lone frame has no walls to brick up.
            return;
        }

        for rect in &frames {
            draw::draw_rect_outline(fb, rect, self.params.line_width, FOREGROUND);
        }
        for seg in wall_segments(&frames) {
            draw::draw_segment(fb, &seg, self.params.line_width, FOREGROUND);
        }
    }
}

/// The four wall bands between one pair of frames, as (near edge, far edge)
/// pairs: top, bottom, left, right. Both edges of a band run in the same
/// direction so joint fractions line up across them.
fn band_edges(near: &Rect, far: &Rect) -> [(Segment, Segment); 4] {
    let top = |r: &Rect| Segment {
        x0: r.left,
        y0: r.top,
        x1: r.right,
        y1: r.top,
    };
    let bottom = |r: &Rect| Segment {
        x0: r.left,
        y0: r.bottom,
        x1: r.right,
        y1: r.bottom,
    };
    let left = |r: &Rect| Segment {
        x0: r.left,
        y0: r.top,
        x1: r.left,
        y1: r.bottom,
    };
    let right = |r: &Rect| Segment {
        x0: r.right,
        y0: r.top,
        x1: r.right,
        y1: r.bottom,
    };
    [
        (top(near), top(far)),
        (bottom(near), bottom(far)),
        (left(near), left(far)),
        (right(near), right(far)),
    ]
}

/// Where along an edge the joints sit, as a fraction of the edge length.
/// Odd courses shift every joint by exactly half a brick, so joints on
/// consecutive courses never line up.
#[inline]
fn joint_fraction(joint: usize, shifted: bool) -> f32 {
    let offset = if shifted { 0.5 } else { 0.0 };
    (joint as f32 + offset) / BAND_JOINTS as f32
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Plan every brick-joint line for the whole frame sequence.
///
/// Course parity restarts at even on every call, so the pattern holds steady
/// across resizes instead of drifting with an accumulated phase. Pairs whose
/// frames are already small are left bare (see `MIN_BAND_EXTENT`).
pub fn wall_segments(frames: &[Rect]) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (course, pair) in frames.windows(2).enumerate() {
        let (near, far) = (&pair[0], &pair[1]);
        if near.width() <= MIN_BAND_EXTENT
            || near.height() <= MIN_BAND_EXTENT
            || far.width() <= MIN_BAND_EXTENT
            || far.height() <= MIN_BAND_EXTENT
        {
            continue;
        }

        let shifted = course % 2 == 1;
        for (near_edge, far_edge) in band_edges(near, far) {
            for joint in 0..BAND_JOINTS {
                let t = joint_fraction(joint, shifted);
                segments.push(Segment {
                    x0: lerp(near_edge.x0, near_edge.x1, t),
                    y0: lerp(near_edge.y0, near_edge.y1, t),
                    x1: lerp(far_edge.x0, far_edge.x1, t),
                    y1: lerp(far_edge.y0, far_edge.y1, t),
                });
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    fn buffer(width: usize, height: usize) -> FrameBuffer {
        FrameBuffer {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    #[test]
    fn depth_steps_down_in_fives() {
        let mut tunnel = Tunnel::new(RenderParams::default());
        for _ in 0..4 {
            tunnel.handle_event(Event::DepthDown);
        }
        assert_eq!(tunnel.params().depth_layers, 50);
    }

    #[test]
    fn depth_saturates_at_both_bounds() {
        let mut tunnel = Tunnel::new(RenderParams::default());
        for _ in 0..100 {
            tunnel.handle_event(Event::DepthDown);
        }
        assert_eq!(tunnel.params().depth_layers, 10);

        for _ in 0..100 {
            tunnel.handle_event(Event::DepthUp);
        }
        assert_eq!(tunnel.params().depth_layers, 200);
    }

    #[test]
    fn shrink_saturates_at_both_bounds() {
        let mut tunnel = Tunnel::new(RenderParams::default());
        for _ in 0..20 {
            tunnel.handle_event(Event::ShrinkUp);
        }
        assert!((tunnel.params().shrink - 0.97).abs() < 1e-6);

        for _ in 0..20 {
            tunnel.handle_event(Event::ShrinkDown);
        }
        assert!((tunnel.params().shrink - 0.80).abs() < 1e-6);
    }

    #[test]
    fn resize_requests_a_redraw_without_touching_params() {
        let mut tunnel = Tunnel::new(RenderParams::default());
        assert!(tunnel.handle_event(Event::Resized));
        assert_eq!(tunnel.params().depth_layers, 70);
        assert!((tunnel.params().shrink - 0.92).abs() < 1e-6);
    }

    #[test]
    fn one_wide_pair_yields_four_full_bands() {
        let frames = [rect(0.0, 0.0, 400.0, 300.0), rect(20.0, 15.0, 380.0, 285.0)];
        let segments = wall_segments(&frames);
        assert_eq!(segments.len(), 4 * BAND_JOINTS);
    }

    #[test]
    fn small_frames_get_no_wall_joints() {
        // Near frame is 40 px wide; all four bands of this pair must be skipped.
        let frames = [rect(0.0, 0.0, 40.0, 300.0), rect(2.0, 15.0, 38.0, 285.0)];
        assert!(wall_segments(&frames).is_empty());
    }

    #[test]
    fn odd_courses_shift_joints_by_half_a_brick() {
        for joint in 0..BAND_JOINTS {
            let even = joint_fraction(joint, false);
            let odd = joint_fraction(joint, true);
            assert!(
                (odd - even - 0.5 / BAND_JOINTS as f32).abs() < 1e-6,
                "joint {joint}: even={even} odd={odd}"
            );
        }
    }

    #[test]
    fn consecutive_courses_do_not_align() {
        // Three nested frames, all comfortably above the band cutoff.
        let frames = [
            rect(0.0, 0.0, 800.0, 600.0),
            rect(40.0, 30.0, 760.0, 570.0),
            rect(76.0, 57.0, 724.0, 543.0),
        ];
        let segments = wall_segments(&frames);
        assert_eq!(segments.len(), 2 * 4 * BAND_JOINTS);

        // First joint of the top band, course 0 vs course 1: the odd course
        // starts half a brick in.
        let course0 = &segments[0];
        let course1 = &segments[4 * BAND_JOINTS];
        let brick0 = 800.0 / BAND_JOINTS as f32;
        let brick1 = 720.0 / BAND_JOINTS as f32;
        assert!((course0.x0 - 0.0).abs() < 1e-3);
        assert!((course1.x0 - (40.0 + 0.5 * brick1)).abs() < 1e-3);
        assert!(course0.x0 % brick0 < 1e-3);
    }

    #[test]
    fn lone_frame_draws_background_only() {
        // 32 px surface with a 16 px margin collapses after one frame.
        let mut fb = buffer(32, 32);
        let tunnel = Tunnel::new(RenderParams::default());
        tunnel.redraw(&mut fb);
        assert!(fb.pixels.iter().all(|&px| px == BACKGROUND));
    }

    #[test]
    fn default_scene_paints_lines_on_yellow() {
        let mut fb = buffer(900, 600);
        let tunnel = Tunnel::new(RenderParams::default());
        tunnel.redraw(&mut fb);

        // Outermost outline passes through (16, 16); the far corner outside
        // the margin stays yellow.
        assert_eq!(fb.pixels[16 * 900 + 16], FOREGROUND);
        assert_eq!(fb.pixels[0], BACKGROUND);
        assert!(fb.pixels.iter().any(|&px| px == FOREGROUND));
    }
}
