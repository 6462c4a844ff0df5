#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    None,
    SingleTap,
    DoubleTap,
    Cancelled,
    Committed(SwipeDirection),
}

// Distances in logical pixels; 8 px is the usual touch slop.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    pub jitter_px: f64,
    pub tap_max_ms: f64,
    pub double_tap_window_ms: f64,
    pub horizontal_threshold_px: f64,
    pub vertical_threshold_px: f64,
    pub lateral_guard_px: f64,
    pub dead_zone_px: f64,
    pub rotation_deg_per_px: f64,
    pub exit_distance_px: f64,
    pub exit_rotation_deg: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            jitter_px: 8.0,
            tap_max_ms: 300.0,
            double_tap_window_ms: 350.0,
            horizontal_threshold_px: 80.0,
            vertical_threshold_px: 80.0,
            lateral_guard_px: 85.0,
            dead_zone_px: 10.0,
            rotation_deg_per_px: 0.06,
            exit_distance_px: 1400.0,
            exit_rotation_deg: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct GestureSession {
    origin_x: f64,
    origin_y: f64,
    pressed_at_ms: f64,
    moved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureClassifier {
    config: GestureConfig,
    session: Option<GestureSession>,
    last_tap_ms: Option<f64>,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
            last_tap_ms: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the open session ever left the jitter radius.
    pub fn session_moved(&self) -> bool {
        self.session.as_ref().map(|s| s.moved).unwrap_or(false)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, now_ms: f64) {
        if self.session.is_some() {
            return;
        }
        self.session = Some(GestureSession {
            origin_x: x,
            origin_y: y,
            pressed_at_ms: now_ms,
            moved: false,
        });
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let session = self.session.as_mut()?;
        let dx = x - session.origin_x;
        let dy = y - session.origin_y;
        if !session.moved && dx.hypot(dy) > self.config.jitter_px {
            session.moved = true;
        }
        Some((dx, dy))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64, now_ms: f64) -> GestureOutcome {
        let Some(session) = self.session.take() else {
            return GestureOutcome::None;
        };
        let dx = x - session.origin_x;
        let dy = y - session.origin_y;

        // Only release distance and duration decide a tap; a drag that
        // wandered out and came back still counts.
        if dx.hypot(dy) < self.config.jitter_px
            && now_ms - session.pressed_at_ms < self.config.tap_max_ms
        {
            match self.last_tap_ms {
                Some(last) if now_ms - last < self.config.double_tap_window_ms => {
                    // Reset the clock so a triple tap reads as one double-tap
                    // plus one fresh single-tap, not two double-taps.
                    self.last_tap_ms = None;
                    return GestureOutcome::DoubleTap;
                }
                _ => {
                    self.last_tap_ms = Some(now_ms);
                    return GestureOutcome::SingleTap;
                }
            }
        }

        // Vertical wins only while lateral motion stays inside the guard band.
        if dy < -self.config.vertical_threshold_px && dx.abs() < self.config.lateral_guard_px {
            GestureOutcome::Committed(SwipeDirection::Up)
        } else if dx > self.config.horizontal_threshold_px {
            GestureOutcome::Committed(SwipeDirection::Right)
        } else if dx < -self.config.horizontal_threshold_px {
            GestureOutcome::Committed(SwipeDirection::Left)
        } else {
            GestureOutcome::Cancelled
        }
    }

    // A pointercancel reads as a release at the origin.
    pub fn pointer_cancel(&mut self) -> GestureOutcome {
        if self.session.take().is_none() {
            return GestureOutcome::None;
        }
        GestureOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(GestureConfig::default())
    }

    fn release(classifier: &mut GestureClassifier, dx: f64, dy: f64) -> GestureOutcome {
        classifier.pointer_down(100.0, 100.0, 10_000.0);
        classifier.pointer_move(100.0 + dx, 100.0 + dy);
        classifier.pointer_up(100.0 + dx, 100.0 + dy, 10_400.0)
    }

    #[test]
    fn short_still_press_is_a_tap() {
        let mut c = classifier();
        c.pointer_down(50.0, 50.0, 10_000.0);
        assert_eq!(c.pointer_up(52.0, 51.0, 10_100.0), GestureOutcome::SingleTap);
    }

    #[test]
    fn slow_still_press_is_not_a_tap() {
        let mut c = classifier();
        c.pointer_down(50.0, 50.0, 10_000.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_500.0), GestureOutcome::Cancelled);
    }

    #[test]
    fn out_and_back_quick_release_is_a_tap() {
        let mut c = classifier();
        c.pointer_down(100.0, 100.0, 10_000.0);
        c.pointer_move(150.0, 100.0);
        c.pointer_move(100.0, 100.0);
        assert_eq!(c.pointer_up(100.0, 100.0, 10_200.0), GestureOutcome::SingleTap);
    }

    #[test]
    fn moved_flag_tracks_leaving_the_jitter_radius() {
        let mut c = classifier();
        assert!(!c.session_moved());
        c.pointer_down(0.0, 0.0, 10_000.0);
        c.pointer_move(3.0, 0.0);
        assert!(!c.session_moved());
        c.pointer_move(50.0, 0.0);
        assert!(c.session_moved());
        c.pointer_move(0.0, 0.0);
        assert!(c.session_moved());
    }

    #[test]
    fn two_taps_inside_window_make_one_double_tap() {
        let mut c = classifier();
        c.pointer_down(50.0, 50.0, 10_000.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_050.0), GestureOutcome::SingleTap);
        c.pointer_down(50.0, 50.0, 10_200.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_250.0), GestureOutcome::DoubleTap);
    }

    #[test]
    fn triple_tap_is_double_tap_then_fresh_single_tap() {
        let mut c = classifier();
        c.pointer_down(50.0, 50.0, 10_000.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_050.0), GestureOutcome::SingleTap);
        c.pointer_down(50.0, 50.0, 10_150.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_200.0), GestureOutcome::DoubleTap);
        c.pointer_down(50.0, 50.0, 10_300.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_350.0), GestureOutcome::SingleTap);
    }

    #[test]
    fn taps_outside_window_stay_single() {
        let mut c = classifier();
        c.pointer_down(50.0, 50.0, 10_000.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_050.0), GestureOutcome::SingleTap);
        c.pointer_down(50.0, 50.0, 10_500.0);
        assert_eq!(c.pointer_up(50.0, 50.0, 10_550.0), GestureOutcome::SingleTap);
    }

    #[test]
    fn horizontal_thresholds_commit() {
        assert_eq!(
            release(&mut classifier(), 81.0, 0.0),
            GestureOutcome::Committed(SwipeDirection::Right)
        );
        assert_eq!(
            release(&mut classifier(), -81.0, 0.0),
            GestureOutcome::Committed(SwipeDirection::Left)
        );
        assert_eq!(release(&mut classifier(), 79.0, 0.0), GestureOutcome::Cancelled);
    }

    #[test]
    fn upward_release_commits_inside_lateral_guard() {
        assert_eq!(
            release(&mut classifier(), 20.0, -81.0),
            GestureOutcome::Committed(SwipeDirection::Up)
        );
    }

    #[test]
    fn wide_diagonal_release_resolves_horizontally() {
        assert_eq!(
            release(&mut classifier(), 120.0, -120.0),
            GestureOutcome::Committed(SwipeDirection::Right)
        );
    }

    #[test]
    fn downward_drag_never_commits() {
        assert_eq!(release(&mut classifier(), 0.0, 200.0), GestureOutcome::Cancelled);
    }

    #[test]
    fn cancel_always_cancels() {
        let mut c = classifier();
        c.pointer_down(0.0, 0.0, 10_000.0);
        c.pointer_move(300.0, 0.0);
        assert_eq!(c.pointer_cancel(), GestureOutcome::Cancelled);
        assert!(!c.is_active());
    }

    #[test]
    fn events_without_a_session_are_dropped() {
        let mut c = classifier();
        assert_eq!(c.pointer_move(10.0, 10.0), None);
        assert_eq!(c.pointer_up(10.0, 10.0, 10_000.0), GestureOutcome::None);
        assert_eq!(c.pointer_cancel(), GestureOutcome::None);
    }

    #[test]
    fn move_deltas_are_relative_to_origin() {
        let mut c = classifier();
        c.pointer_down(40.0, 60.0, 10_000.0);
        assert_eq!(c.pointer_move(45.0, 50.0), Some((5.0, -10.0)));
    }
}
