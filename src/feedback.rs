use crate::gesture::{GestureConfig, SwipeDirection};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragFeedback {
    pub dx: f64,
    pub dy: f64,
    pub rotation_deg: f64,
    pub like: f64,
    pub nope: f64,
    pub superlike: f64,
}

// At most one stamp is visible: the vertical one while lateral motion stays
// inside the guard band, otherwise the one matching the sign of dx. Pure, so
// the pointer-move hot path stays allocation-free.
pub fn drag_feedback(dx: f64, dy: f64, config: &GestureConfig) -> DragFeedback {
    let mut feedback = DragFeedback {
        dx,
        dy,
        rotation_deg: dx * config.rotation_deg_per_px,
        ..DragFeedback::default()
    };

    if dy < -config.dead_zone_px && dx.abs() < config.lateral_guard_px {
        feedback.superlike = (dy.abs() / config.vertical_threshold_px).min(1.0);
    } else if dx > config.dead_zone_px {
        feedback.like = (dx / config.horizontal_threshold_px).min(1.0);
    } else if dx < -config.dead_zone_px {
        feedback.nope = (dx.abs() / config.horizontal_threshold_px).min(1.0);
    }

    feedback
}

// Terminal transform for a committed card, with its stamp at full opacity.
pub fn exit_feedback(direction: SwipeDirection, config: &GestureConfig) -> DragFeedback {
    match direction {
        SwipeDirection::Right => DragFeedback {
            dx: config.exit_distance_px,
            rotation_deg: config.exit_rotation_deg,
            like: 1.0,
            ..DragFeedback::default()
        },
        SwipeDirection::Left => DragFeedback {
            dx: -config.exit_distance_px,
            rotation_deg: -config.exit_rotation_deg,
            nope: 1.0,
            ..DragFeedback::default()
        },
        SwipeDirection::Up => DragFeedback {
            dy: -config.exit_distance_px,
            superlike: 1.0,
            ..DragFeedback::default()
        },
    }
}
