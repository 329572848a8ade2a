// What you SEE:
// • A yellow window holding a black-line "brick tunnel" that recedes toward
//   the center of the window in one-point perspective.
// • Resize the window and the tunnel re-fits itself immediately.
// • `=`/`-` add or remove depth layers; `.`/`,` relax or tighten how fast
//   the frames shrink. ESC quits.

mod draw;
mod error;
mod frames;
mod tunnel;
mod types;

use draw::Drawer;
use error::Error;
use tunnel::{Event, RenderParams, Tunnel};
use types::FrameBuffer;

const DEFAULT_WIDTH: usize = 900;
const DEFAULT_HEIGHT: usize = 600;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Window + scene setup ---
       Visual: a resizable 900x600 window opens and fills with the tunnel. */
    let mut drawer = Drawer::new("Brick Tunnel", DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
    let mut tunnel = Tunnel::new(RenderParams::default());

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see; it is reallocated when the
       window changes size. */
    let (mut width, mut height) = drawer.size();
    let mut screen = FrameBuffer {
        width,
        height,
        pixels: vec![0u32; width * height],
    };

    log::info!("brick tunnel up at {width}x{height}");
    tunnel.redraw(&mut screen);

    /* ------------------------------ Event loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let mut dirty = false;

        /* 1) Resize notification: the polled size no longer matches the
           buffer. Swap in a fresh buffer before redrawing. */
        let (w, h) = drawer.size();
        if w != width || h != height {
            width = w;
            height = h;
            screen = FrameBuffer {
                width,
                height,
                pixels: vec![0u32; width * height],
            };
            dirty |= tunnel.handle_event(Event::Resized);
            log::debug!("resized to {width}x{height}");
        }

        /* 2) Tuning keys become renderer events. */
        if drawer.depth_up_pressed() {
            dirty |= tunnel.handle_event(Event::DepthUp);
        }
        if drawer.depth_down_pressed() {
            dirty |= tunnel.handle_event(Event::DepthDown);
        }
        if drawer.shrink_up_pressed() {
            dirty |= tunnel.handle_event(Event::ShrinkUp);
        }
        if drawer.shrink_down_pressed() {
            dirty |= tunnel.handle_event(Event::ShrinkDown);
        }

        /* 3) Rebuild the whole drawing when anything changed; the scene is
           static otherwise and the old pixels are still correct. */
        if dirty {
            let p = tunnel.params();
            log::debug!("redraw: depth={} shrink={:.2}", p.depth_layers, p.shrink);
            tunnel.redraw(&mut screen);
        }

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;
    }

    Ok(())
}
