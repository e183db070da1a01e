//! Index arithmetic for the testimonials carousel.
//!
//! The carousel shows `slides_to_show` cards starting at `index` and steps
//! one card at a time. `index` always stays in `0..=max_index()`.

use std::ops::Range;

pub const MOBILE_BREAKPOINT: u32 = 768;
pub const TABLET_BREAKPOINT: u32 = 1024;

/// Cards visible at a given viewport width in CSS pixels
pub fn slides_for_width(width: u32) -> usize {
    if width < MOBILE_BREAKPOINT {
        1
    } else if width < TABLET_BREAKPOINT {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    slides_to_show: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize, slides_to_show: usize) -> Self {
        Self {
            index: 0,
            slides_to_show: slides_to_show.max(1),
            len,
        }
    }

    pub fn for_width(len: usize, width: u32) -> Self {
        Self::new(len, slides_for_width(width))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last index that still fills the window
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.slides_to_show)
    }

    /// Step forward one card, wrapping to the start once the window
    /// already reaches the last card
    pub fn next(&mut self) {
        self.index = if self.index + self.slides_to_show >= self.len {
            0
        } else {
            self.index + 1
        };
    }

    /// Step back one card, wrapping to the last full window from the start
    pub fn previous(&mut self) {
        self.index = if self.index == 0 {
            self.max_index()
        } else {
            self.index - 1
        };
    }

    pub fn go_to(&mut self, position: usize) {
        self.index = position.min(self.max_index());
    }

    /// Viewport changed; keep the index inside the new bounds
    pub fn set_slides_to_show(&mut self, slides_to_show: usize) {
        self.slides_to_show = slides_to_show.max(1);
        self.index = self.index.min(self.max_index());
    }

    pub fn resize(&mut self, width: u32) {
        self.set_slides_to_show(slides_for_width(width));
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.index..(self.index + self.slides_to_show).min(self.len)
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.max_index()
    }

    /// Number of indicator dots, one per reachable index
    pub fn position_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Horizontal offset of the track, in percent of one window
    pub fn offset_percent(&self) -> f64 {
        self.index as f64 * (100.0 / self.slides_to_show as f64)
    }

    /// Width of the track relative to the viewport, in percent
    pub fn track_width_percent(&self) -> f64 {
        self.len as f64 * 100.0 / self.slides_to_show as f64
    }
}

/// Filled flags for a 5-star rating row; ratings above five clamp
pub fn stars(rating: u8) -> [bool; 5] {
    let mut row = [false; 5];
    for (i, star) in row.iter_mut().enumerate() {
        *star = i < usize::from(rating);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_for_width() {
        assert_eq!(slides_for_width(500), 1);
        assert_eq!(slides_for_width(767), 1);
        assert_eq!(slides_for_width(768), 2);
        assert_eq!(slides_for_width(1023), 2);
        assert_eq!(slides_for_width(1024), 3);
        assert_eq!(slides_for_width(1200), 3);
    }

    #[test]
    fn test_mobile_shows_one_card() {
        let carousel = CarouselState::for_width(4, 500);
        assert_eq!(carousel.visible_range(), 0..1);
        assert_eq!(carousel.max_index(), 3);
    }

    #[test]
    fn test_desktop_shows_three_cards() {
        let carousel = CarouselState::for_width(4, 1200);
        assert_eq!(carousel.visible_range(), 0..3);
        assert_eq!(carousel.max_index(), 1);
        assert_eq!(carousel.position_count(), 2);
    }

    #[test]
    fn test_next_wraps_after_last_window() {
        let mut carousel = CarouselState::new(4, 3);
        carousel.next();
        assert_eq!(carousel.index(), 1);
        assert!(carousel.at_end());

        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last_window() {
        let mut carousel = CarouselState::new(4, 3);
        carousel.previous();
        assert_eq!(carousel.index(), 1);

        let mut mobile = CarouselState::new(4, 1);
        mobile.previous();
        assert_eq!(mobile.index(), 3);
        mobile.previous();
        assert_eq!(mobile.index(), 2);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        for show in 1..=3 {
            let mut carousel = CarouselState::new(4, show);
            for step in 0..20 {
                if step % 3 == 0 {
                    carousel.previous();
                } else {
                    carousel.next();
                }
                assert!(carousel.index() <= carousel.max_index());
                assert!(carousel.visible_range().len() == show);
            }
        }
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = CarouselState::new(4, 3);
        carousel.go_to(1);
        assert_eq!(carousel.index(), 1);
        carousel.go_to(3);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_resize_reclamps_index() {
        let mut carousel = CarouselState::for_width(4, 500);
        carousel.go_to(3);
        assert_eq!(carousel.index(), 3);

        carousel.resize(1200);
        assert_eq!(carousel.slides_to_show(), 3);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.visible_range(), 1..4);
    }

    #[test]
    fn test_fewer_cards_than_window() {
        let mut carousel = CarouselState::new(2, 3);
        assert_eq!(carousel.max_index(), 0);
        assert_eq!(carousel.visible_range(), 0..2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 0);

        let empty = CarouselState::new(0, 3);
        assert!(empty.is_empty());
        assert_eq!(empty.visible_range(), 0..0);
    }

    #[test]
    fn test_track_geometry() {
        let mut carousel = CarouselState::new(4, 2);
        assert_eq!(carousel.track_width_percent(), 200.0);
        carousel.next();
        assert_eq!(carousel.offset_percent(), 50.0);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(5), [true; 5]);
        assert_eq!(stars(3), [true, true, true, false, false]);
        assert_eq!(stars(0), [false; 5]);
        assert_eq!(stars(9), [true; 5]);
    }
}
