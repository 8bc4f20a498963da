//! Preview zoom: slider position ↔ scale, and the fit-to-container scale.
//!
//! The slider is non-linear: its lower half covers 50–100% and its upper
//! half 100–300%, so 100% sits exactly in the middle.

use crate::paper::PageSize;

/// Smallest zoom factor.
pub const MIN_SCALE: f64 = 0.5;
/// Largest zoom factor.
pub const MAX_SCALE: f64 = 3.0;

/// CSS pixels per millimeter (96 dpi).
pub const PX_PER_MM: f64 = 96.0 / 25.4;

/// Container padding around the previewed page, in pixels.
const TOP_GAP_PX: f64 = 10.0;
const BOTTOM_GAP_PX: f64 = 10.0;
const HORIZONTAL_GAP_PX: f64 = 20.0;

/// Slider fraction (0–1, clamped) to zoom factor.
pub fn pct_to_scale(pct: f64) -> f64 {
    let pct = pct.clamp(0.0, 1.0);
    if pct <= 0.5 {
        MIN_SCALE + (pct / 0.5) * (1.0 - MIN_SCALE)
    } else {
        1.0 + ((pct - 0.5) / 0.5) * (MAX_SCALE - 1.0)
    }
}

/// Zoom factor to slider fraction. Inverse of [`pct_to_scale`]; out-of-range
/// scales clamp to the slider ends.
pub fn scale_to_pct(scale: f64) -> f64 {
    if scale <= 1.0 {
        let s = scale.max(MIN_SCALE);
        ((s - MIN_SCALE) / (1.0 - MIN_SCALE)) * 0.5
    } else {
        let s = scale.min(MAX_SCALE);
        0.5 + ((s - 1.0) / (MAX_SCALE - 1.0)) * 0.5
    }
}

/// Slider thumb offset from the bottom of the track, in percent.
pub fn thumb_bottom_pct(scale: f64) -> f64 {
    scale_to_pct(scale) * 100.0
}

/// Slider fraction for a pointer at `pointer_y` on a vertical track whose
/// top edge is at `track_top` (bottom = 0, top = 1, unclamped).
pub fn slider_pct(pointer_y: f64, track_top: f64, track_height: f64) -> f64 {
    1.0 - (pointer_y - track_top) / track_height
}

/// Base scale that fits the rendered page inside a container of
/// `container_w × container_h` CSS pixels, leaving the preview gaps.
pub fn fit_scale(container_w: f64, container_h: f64, page: PageSize) -> f64 {
    let avail_w = container_w - HORIZONTAL_GAP_PX;
    let avail_h = container_h - (TOP_GAP_PX + BOTTOM_GAP_PX);
    let paper_w = page.width * PX_PER_MM;
    let paper_h = page.height * PX_PER_MM;
    (avail_w / paper_w).min(avail_h / paper_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn slider_landmarks() {
        assert_eq!(pct_to_scale(0.0), 0.5);
        assert_eq!(pct_to_scale(0.25), 0.75);
        assert_eq!(pct_to_scale(0.5), 1.0);
        assert_eq!(pct_to_scale(0.75), 2.0);
        assert_eq!(pct_to_scale(1.0), 3.0);
    }

    #[test]
    fn slider_clamps() {
        assert_eq!(pct_to_scale(-1.0), MIN_SCALE);
        assert_eq!(pct_to_scale(7.0), MAX_SCALE);
        assert_eq!(scale_to_pct(0.1), 0.0);
        assert_eq!(scale_to_pct(10.0), 1.0);
    }

    #[test]
    fn inverse_over_slider_range() {
        for i in 0..=100 {
            let pct = f64::from(i) / 100.0;
            assert!(approx(scale_to_pct(pct_to_scale(pct)), pct), "pct {pct}");
        }
    }

    #[test]
    fn thumb_position() {
        assert_eq!(thumb_bottom_pct(1.0), 50.0);
        assert_eq!(thumb_bottom_pct(3.0), 100.0);
    }

    #[test]
    fn pointer_to_slider() {
        assert_eq!(slider_pct(100.0, 100.0, 200.0), 1.0);
        assert_eq!(slider_pct(300.0, 100.0, 200.0), 0.0);
        assert_eq!(slider_pct(200.0, 100.0, 200.0), 0.5);
    }

    #[test]
    fn fit_scale_picks_tighter_axis() {
        let a4 = PageSize::new(210.0, 297.0);
        let s = fit_scale(2000.0, 600.0, a4);
        assert!(approx(s, 580.0 / (297.0 * PX_PER_MM)));
        let s = fit_scale(420.0, 5000.0, a4);
        assert!(approx(s, 400.0 / (210.0 * PX_PER_MM)));
    }
}
