use log::debug;

use crate::carousel::PhotoCarousel;
use crate::feedback::{drag_feedback, DragFeedback};
use crate::gesture::{GestureClassifier, GestureConfig, GestureOutcome, SwipeDirection};
use crate::profiles::Profile;

// Removal is eviction from the deck, not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Idle,
    Interactive,
    Dragging,
    Exiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub profile: Profile,
    pub carousel: PhotoCarousel,
    pub classifier: GestureClassifier,
    pub phase: CardPhase,
    pub exit_direction: Option<SwipeDirection>,
}

impl Card {
    fn new(profile: Profile, config: &GestureConfig) -> Self {
        Self {
            carousel: PhotoCarousel::new(profile.photos.len()),
            classifier: GestureClassifier::new(config.clone()),
            profile,
            phase: CardPhase::Idle,
            exit_direction: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEvent {
    CardRemoved { id: String },
    DeckEmpty,
}

// Ordered card stack, front = top. Only the commit-completion and reset
// paths may remove or reorder cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckController {
    config: GestureConfig,
    cards: Vec<Card>,
}

impl DeckController {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// The one card allowed to receive pointer input; `None` while the top
    /// card is exiting or the deck is empty.
    pub fn interactive_card_id(&self) -> Option<&str> {
        self.cards
            .first()
            .filter(|card| card.phase != CardPhase::Exiting)
            .map(|card| card.profile.id.as_str())
    }

    // Discards every card immediately; an exit still in flight becomes
    // stale and its completion will remove nothing.
    pub fn reset(&mut self, profiles: Vec<Profile>) {
        self.cards = profiles
            .into_iter()
            .map(|profile| Card::new(profile, &self.config))
            .collect();
        if let Some(top) = self.cards.first_mut() {
            top.phase = CardPhase::Interactive;
        }
    }

    pub fn pointer_down(&mut self, card_id: &str, x: f64, y: f64, now_ms: f64) {
        let Some(top) = self.cards.first_mut() else {
            return;
        };
        if top.profile.id != card_id || top.phase == CardPhase::Exiting {
            debug!("pointer down for non-interactive card {card_id} dropped");
            return;
        }
        top.classifier.pointer_down(x, y, now_ms);
        top.phase = CardPhase::Dragging;
    }

    pub fn pointer_move(&mut self, card_id: &str, x: f64, y: f64) -> Option<DragFeedback> {
        let top = self.cards.first_mut()?;
        if top.profile.id != card_id || top.phase != CardPhase::Dragging {
            return None;
        }
        let (dx, dy) = top.classifier.pointer_move(x, y)?;
        Some(drag_feedback(dx, dy, &self.config))
    }

    // Per session at most one of cancel/commit ever runs.
    pub fn pointer_up(&mut self, card_id: &str, x: f64, y: f64, now_ms: f64) -> GestureOutcome {
        let outcome = {
            let Some(top) = self.cards.first_mut() else {
                return GestureOutcome::None;
            };
            if top.profile.id != card_id || top.phase != CardPhase::Dragging {
                debug!("pointer up for non-dragging card {card_id} dropped");
                return GestureOutcome::None;
            }
            let outcome = top.classifier.pointer_up(x, y, now_ms);
            top.phase = CardPhase::Interactive;
            if outcome == GestureOutcome::DoubleTap {
                top.carousel.advance();
            }
            outcome
        };
        if let GestureOutcome::Committed(direction) = outcome {
            self.commit(direction);
        }
        outcome
    }

    pub fn pointer_cancel(&mut self, card_id: &str) -> GestureOutcome {
        let Some(top) = self.cards.first_mut() else {
            return GestureOutcome::None;
        };
        if top.profile.id != card_id || top.phase != CardPhase::Dragging {
            return GestureOutcome::None;
        }
        top.phase = CardPhase::Interactive;
        top.classifier.pointer_cancel()
    }

    /// Dismisses the top card. Shared by the drag path and the buttons, so
    /// the trigger source is unobservable downstream.
    pub fn commit(&mut self, direction: SwipeDirection) -> bool {
        let Some(top) = self.cards.first_mut() else {
            debug!("commit({}) on empty deck ignored", direction.as_str());
            return false;
        };
        if top.phase == CardPhase::Exiting {
            debug!("re-entrant commit({}) ignored", direction.as_str());
            return false;
        }
        // Close any open session so no drag state outlives the decision.
        top.classifier.pointer_cancel();
        top.phase = CardPhase::Exiting;
        top.exit_direction = Some(direction);
        debug!("card {} exiting {}", top.profile.id, direction.as_str());
        true
    }

    /// One-shot exit completion: evicts the card exactly once and promotes
    /// the next; completions for anything but the exiting top card report
    /// nothing.
    pub fn finish_exit(&mut self, card_id: &str) -> Vec<DeckEvent> {
        match self.cards.first() {
            Some(top) if top.phase == CardPhase::Exiting && top.profile.id == card_id => {}
            _ => {
                debug!("stale exit completion for {card_id} ignored");
                return Vec::new();
            }
        }
        let removed = self.cards.remove(0);
        let mut events = vec![DeckEvent::CardRemoved {
            id: removed.profile.id,
        }];
        match self.cards.first_mut() {
            Some(next) => next.phase = CardPhase::Interactive,
            None => events.push(DeckEvent::DeckEmpty),
        }
        events
    }
}
