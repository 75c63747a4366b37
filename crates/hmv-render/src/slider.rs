//! Slide rotation arithmetic shared by the hero and product sliders.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCycle {
    current: usize,
    total: usize,
}

impl SlideCycle {
    /// `None` when there is nothing to rotate.
    pub fn new(total: usize) -> Option<Self> {
        (total > 1).then_some(Self { current: 0, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.total;
        self.current
    }

    /// Offset of the current slide when the strip holds all slides side by side.
    pub fn strip_offset_percent(&self) -> f64 {
        self.current as f64 * 100.0 / self.total as f64
    }

    /// Offset when each slide fills the viewport.
    pub fn page_offset_percent(&self) -> f64 {
        self.current as f64 * 100.0
    }
}

pub fn translate_x(percent: f64) -> String {
    format!("translateX(-{}%)", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slide_never_rotates() {
        assert!(SlideCycle::new(0).is_none());
        assert!(SlideCycle::new(1).is_none());
    }

    #[test]
    fn hero_strip_wraps_after_last_slide() {
        let mut cycle = SlideCycle::new(5).unwrap();
        let offsets: Vec<String> = (0..6)
            .map(|_| {
                cycle.advance();
                translate_x(cycle.strip_offset_percent())
            })
            .collect();
        assert_eq!(
            offsets,
            [
                "translateX(-20%)",
                "translateX(-40%)",
                "translateX(-60%)",
                "translateX(-80%)",
                "translateX(-0%)",
                "translateX(-20%)",
            ]
        );
    }

    #[test]
    fn product_slider_moves_whole_pages() {
        let mut cycle = SlideCycle::new(3).unwrap();
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.current(), 2);
        assert_eq!(translate_x(cycle.page_offset_percent()), "translateX(-200%)");
        cycle.advance();
        assert_eq!(cycle.current(), 0);
    }
}
