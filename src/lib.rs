pub mod carousel;
pub mod deck;
pub mod feedback;
pub mod gesture;
pub mod profiles;

use deck::{Card, CardPhase, DeckController, DeckEvent};
use feedback::{drag_feedback, exit_feedback, DragFeedback};
use gesture::{GestureConfig, SwipeDirection};
use log::debug;
use std::ops::Deref;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const DECK_SIZE: usize = 12;

// The pointer currently captured by the top card; other pointers are ignored
// for the duration of the session. Carries the drag origin so move events
// never have to touch the deck state.
#[derive(Clone, PartialEq)]
struct ActivePointer {
    pointer_id: i32,
    card_id: String,
    origin_x: f64,
    origin_y: f64,
}

#[function_component(App)]
fn app() -> Html {
    let deck = use_state(|| {
        let mut controller = DeckController::new(GestureConfig::default());
        controller.reset(profiles::generate(DECK_SIZE));
        controller
    });
    let drag = use_state(|| None::<DragFeedback>);
    let active_pointer = use_state(|| None::<ActivePointer>);

    let on_commit = {
        let deck = deck.clone();
        let drag = drag.clone();
        let active_pointer = active_pointer.clone();
        Callback::from(move |direction: SwipeDirection| {
            let mut next = (*deck).clone();
            if next.commit(direction) {
                drag.set(None);
                active_pointer.set(None);
            }
            deck.set(next);
        })
    };

    let on_shuffle = {
        let deck = deck.clone();
        let drag = drag.clone();
        let active_pointer = active_pointer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*deck).clone();
            next.reset(profiles::generate(DECK_SIZE));
            drag.set(None);
            active_pointer.set(None);
            deck.set(next);
        })
    };

    let on_like = {
        let on_commit = on_commit.clone();
        Callback::from(move |_: MouseEvent| on_commit.emit(SwipeDirection::Right))
    };
    let on_nope = {
        let on_commit = on_commit.clone();
        Callback::from(move |_: MouseEvent| on_commit.emit(SwipeDirection::Left))
    };
    let on_super = {
        let on_commit = on_commit.clone();
        Callback::from(move |_: MouseEvent| on_commit.emit(SwipeDirection::Up))
    };

    let deck_markup = if deck.is_empty() {
        html! {
            <div class="empty-state">
                <p>{ "You've seen everyone!" }</p>
                <p>{ "Hit Shuffle to see more." }</p>
            </div>
        }
    } else {
        // Back-to-front so the top card paints last.
        html! {
            <>
                { for deck.cards().iter().enumerate().rev().map(|(index, card)| {
                    render_card(card, index == 0, &deck, &drag, &active_pointer)
                }) }
            </>
        }
    };

    html! {
        <div class="app-container">
            <main class="deck-area">
                <div class="deck">
                    { deck_markup }
                </div>
                <div class="controls">
                    <button class="control-button nope" onclick={on_nope}>{ "✖" }</button>
                    <button class="control-button super" onclick={on_super}>{ "★" }</button>
                    <button class="control-button like" onclick={on_like}>{ "♥" }</button>
                    <button class="control-button shuffle" onclick={on_shuffle}>{ "Shuffle" }</button>
                </div>
            </main>
        </div>
    }
}

fn render_card(
    card: &Card,
    is_top: bool,
    deck: &UseStateHandle<DeckController>,
    drag: &UseStateHandle<Option<DragFeedback>>,
    active_pointer: &UseStateHandle<Option<ActivePointer>>,
) -> Html {
    let card_id = card.profile.id.clone();

    let feedback = match (card.phase, card.exit_direction) {
        (CardPhase::Exiting, Some(direction)) => exit_feedback(direction, (*deck).config()),
        (CardPhase::Dragging, _) => drag.deref().clone().unwrap_or_default(),
        _ => DragFeedback::default(),
    };

    let style = match card.phase {
        CardPhase::Exiting => format!(
            "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg); opacity: 0; \
             transition: transform 420ms ease-in, opacity 420ms ease-in;",
            feedback.dx, feedback.dy, feedback.rotation_deg
        ),
        CardPhase::Dragging => format!(
            "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg); transition: none;",
            feedback.dx, feedback.dy, feedback.rotation_deg
        ),
        _ => "transform: none; \
              transition: transform 350ms cubic-bezier(0.175, 0.885, 0.32, 1.275);"
            .to_string(),
    };

    let pointer_down = {
        let deck = deck.clone();
        let drag = drag.clone();
        let active_pointer = active_pointer.clone();
        let card_id = card_id.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            event.prevent_default();
            if active_pointer.deref().is_some() {
                return;
            }
            let mut next = (*deck).clone();
            if next.interactive_card_id() != Some(card_id.as_str()) {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(event.pointer_id());
            }
            let x = event.client_x() as f64;
            let y = event.client_y() as f64;
            next.pointer_down(&card_id, x, y, js_sys::Date::now());
            active_pointer.set(Some(ActivePointer {
                pointer_id: event.pointer_id(),
                card_id: card_id.clone(),
                origin_x: x,
                origin_y: y,
            }));
            drag.set(Some(DragFeedback::default()));
            deck.set(next);
        })
    };

    let pointer_move = {
        let drag = drag.clone();
        let active_pointer = active_pointer.clone();
        let config = (*deck).config().clone();
        let card_id = card_id.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            let Some(active) = active_pointer.deref().clone() else {
                return;
            };
            if active.pointer_id != event.pointer_id() || active.card_id != card_id {
                return;
            }
            event.prevent_default();
            // Hot path: the deck state is untouched until up/cancel.
            let dx = event.client_x() as f64 - active.origin_x;
            let dy = event.client_y() as f64 - active.origin_y;
            drag.set(Some(drag_feedback(dx, dy, &config)));
        })
    };

    let pointer_up = {
        let deck = deck.clone();
        let drag = drag.clone();
        let active_pointer = active_pointer.clone();
        let card_id = card_id.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            let Some(active) = active_pointer.deref().clone() else {
                return;
            };
            if active.pointer_id != event.pointer_id() || active.card_id != card_id {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(event.pointer_id());
            }
            let mut next = (*deck).clone();
            let outcome = next.pointer_up(
                &card_id,
                event.client_x() as f64,
                event.client_y() as f64,
                js_sys::Date::now(),
            );
            debug!("card {card_id} released: {outcome:?}");
            drag.set(None);
            active_pointer.set(None);
            deck.set(next);
        })
    };

    let pointer_cancel = {
        let deck = deck.clone();
        let drag = drag.clone();
        let active_pointer = active_pointer.clone();
        let card_id = card_id.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            let Some(active) = active_pointer.deref().clone() else {
                return;
            };
            if active.pointer_id != event.pointer_id() || active.card_id != card_id {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(event.pointer_id());
            }
            let mut next = (*deck).clone();
            next.pointer_cancel(&card_id);
            drag.set(None);
            active_pointer.set(None);
            deck.set(next);
        })
    };

    let transition_end = {
        let deck = deck.clone();
        let card_id = card_id.clone();
        Callback::from(move |event: web_sys::TransitionEvent| {
            // Fires for every animated property and for snap-back endings;
            // the controller's one-shot guard makes those harmless.
            if event.property_name() != "transform" {
                return;
            }
            let mut next = (*deck).clone();
            let events = next.finish_exit(&card_id);
            if events.is_empty() {
                return;
            }
            for deck_event in &events {
                match deck_event {
                    DeckEvent::CardRemoved { id } => debug!("card {id} removed"),
                    DeckEvent::DeckEmpty => debug!("deck is empty"),
                }
            }
            deck.set(next);
        })
    };

    let photo = card
        .profile
        .photos
        .get(card.carousel.index())
        .cloned()
        .unwrap_or_default();

    let dots = if card.carousel.photo_count() > 1 {
        html! {
            <div class="photo-dots">
                { for (0..card.carousel.photo_count()).map(|i| {
                    let class = if i == card.carousel.index() {
                        "photo-dot photo-dot--active"
                    } else {
                        "photo-dot"
                    };
                    html! { <span class={class}></span> }
                }) }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <article
            key={card.profile.id.clone()}
            class={classes!("card", if is_top { Some("card--top") } else { None })}
            style={style}
            onpointerdown={pointer_down}
            onpointermove={pointer_move}
            onpointerup={pointer_up}
            onpointercancel={pointer_cancel}
            ontransitionend={transition_end}
        >
            <img
                class="card__media"
                src={photo}
                alt={format!("{} — profile photo", card.profile.name)}
                draggable="false"
            />
            { dots }
            <div class="swipe-overlay swipe-overlay--like" style={format!("opacity: {:.3};", feedback.like)}>
                { "LIKE ♥" }
            </div>
            <div class="swipe-overlay swipe-overlay--nope" style={format!("opacity: {:.3};", feedback.nope)}>
                { "NOPE ✖" }
            </div>
            <div class="swipe-overlay swipe-overlay--super" style={format!("opacity: {:.3};", feedback.superlike)}>
                { "SUPER ★" }
            </div>
            <div class="card__body">
                <div class="title-row">
                    <h2 class="card__title">{ &card.profile.name }</h2>
                    <span class="card__age">{ card.profile.age }</span>
                </div>
                <div class="card__meta">{ format!("{} • {}", card.profile.title, card.profile.city) }</div>
                <div class="card__chips">
                    { for card.profile.tags.iter().map(|tag| html! { <span class="chip">{ tag }</span> }) }
                </div>
            </div>
        </article>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
