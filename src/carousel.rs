use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCarousel {
    index: usize,
    len: usize,
}

impl PhotoCarousel {
    // A zero photo count violates the profile contract; degrade to a single
    // no-op slot instead of faulting.
    pub fn new(photo_count: usize) -> Self {
        let len = if photo_count == 0 {
            warn!("profile supplied no photos; treating it as a single photo");
            1
        } else {
            photo_count
        };
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn photo_count(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let mut carousel = PhotoCarousel::new(3);
        assert_eq!(carousel.advance(), 1);
        assert_eq!(carousel.advance(), 2);
        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn single_photo_never_moves() {
        let mut carousel = PhotoCarousel::new(1);
        assert_eq!(carousel.advance(), 0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn zero_photos_degrades_to_one_slot() {
        let mut carousel = PhotoCarousel::new(0);
        assert_eq!(carousel.photo_count(), 1);
        assert_eq!(carousel.advance(), 0);
    }
}
