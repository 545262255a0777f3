//! Fitting the virtual frame into the window
//!
//! The frame is scaled uniformly by the largest factor that fits both axes,
//! then centered. Whatever is left over on the other axis becomes bars.

/// Placement of the scaled virtual frame inside the window (window pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Scaled frame size
    pub width: f32,
    pub height: f32,
}

/// Compute scale and offsets for a `virtual_w` x `virtual_h` frame in a
/// `window_w` x `window_h` window. Sizes and offsets are whole pixels.
pub fn compute_letterbox(window_w: f32, window_h: f32, virtual_w: f32, virtual_h: f32) -> Letterbox {
    let window_w = window_w.max(0.0);
    let window_h = window_h.max(0.0);
    let scale = (window_w / virtual_w).min(window_h / virtual_h);

    let width = (virtual_w * scale).floor().min(window_w.floor());
    let height = (virtual_h * scale).floor().min(window_h.floor());
    Letterbox {
        offset_x: ((window_w - width) / 2.0).floor(),
        offset_y: ((window_h - height) / 2.0).floor(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let lb = compute_letterbox(1080.0, 720.0, 1080.0, 720.0);
        assert_eq!((lb.offset_x, lb.offset_y), (0.0, 0.0));
        assert_eq!((lb.width, lb.height), (1080.0, 720.0));
    }

    #[test]
    fn test_wide_window_gets_side_bars() {
        let lb = compute_letterbox(1920.0, 1080.0, 1080.0, 720.0);
        assert_eq!((lb.width, lb.height), (1620.0, 1080.0));
        assert_eq!((lb.offset_x, lb.offset_y), (150.0, 0.0));
    }

    #[test]
    fn test_tall_window_gets_top_bars() {
        let lb = compute_letterbox(540.0, 1000.0, 1080.0, 720.0);
        assert_eq!((lb.width, lb.height), (540.0, 360.0));
        assert_eq!((lb.offset_x, lb.offset_y), (0.0, 320.0));
    }

    #[test]
    fn test_always_fits_inside_window() {
        for w in (0..=2600).step_by(37) {
            for h in (0..=1600).step_by(23) {
                let (w, h) = (w as f32, h as f32);
                let lb = compute_letterbox(w, h, 1080.0, 720.0);
                assert!(lb.offset_x >= 0.0 && lb.offset_y >= 0.0, "{}x{}", w, h);
                assert!(lb.offset_x + lb.width <= w, "{}x{}", w, h);
                assert!(lb.offset_y + lb.height <= h, "{}x{}", w, h);
                // Aspect ratio kept: one axis is (nearly) filled
                assert!(w - lb.width < 2.0 || h - lb.height < 2.0, "{}x{}", w, h);
            }
        }
    }
}
