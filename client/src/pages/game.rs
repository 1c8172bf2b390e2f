//! The single game screen: restart header, status banner, dial and card.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `GameSession` for the lifetime of the tab. Every
//! browser event is forwarded to it and the `HostTask`s it returns are
//! started here: timers become `gloo_timers` timeouts, fetches become
//! `spawn_local` tasks. After each transition the session's view is
//! published to a `GameView` signal that the components render from.
//!
//! ERROR HANDLING
//! ==============
//! Concept fetch failures are logged and handed to the engine, which falls
//! back to its offline list. Nothing on this page surfaces an error to the
//! players.

use leptos::prelude::*;

use crate::components::concept_card::ConceptCardPanel;
use crate::components::dial::Dial;
use crate::components::game_status::GameStatus;
use crate::components::restart_button::RestartButton;
use crate::state::game::GameView;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use dial::config::GameConfig;
#[cfg(feature = "hydrate")]
use dial::geometry::{DialBounds, Point};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[cfg(feature = "hydrate")]
use crate::net::api::fetch_concepts;
#[cfg(feature = "hydrate")]
use crate::state::session::{GameSession, HostTask};
#[cfg(feature = "hydrate")]
use crate::util::dial_input::{client_point, element_bounds, now_ms, session_seed};

/// Browser-side owner of the session.
#[cfg(feature = "hydrate")]
struct Host {
    session: RefCell<GameSession>,
    view: RwSignal<GameView>,
}

#[cfg(feature = "hydrate")]
impl Host {
    fn new(view: RwSignal<GameView>) -> Rc<Self> {
        Rc::new(Self { session: RefCell::new(GameSession::new(GameConfig::default(), session_seed())), view })
    }

    fn publish(&self) {
        let next = self.session.borrow().view();
        let previous = self.view.get_untracked().phase;
        if previous != next.phase {
            log::debug!("phase {} -> {}", previous.as_str(), next.phase.as_str());
        }
        self.view.set(next);
    }

    /// Start the browser work the session asked for, then publish.
    fn run(self: &Rc<Self>, tasks: Vec<HostTask>) {
        for task in tasks {
            match task {
                HostTask::Timer { token, delay_ms } => {
                    let host = Rc::clone(self);
                    Timeout::new(delay_ms, move || {
                        let tasks = host.session.borrow_mut().timer_fired(token);
                        host.run(tasks);
                    })
                    .forget();
                }
                HostTask::Fetch(ticket) => {
                    let host = Rc::clone(self);
                    leptos::task::spawn_local(async move {
                        let result = fetch_concepts().await;
                        if let Err(e) = &result {
                            log::warn!("concept fetch failed: {e}");
                        }
                        let tasks = host.session.borrow_mut().batch_arrived(ticket, result);
                        host.run(tasks);
                    });
                }
            }
        }
        self.publish();
    }

    fn start(self: &Rc<Self>) {
        let tasks = self.session.borrow_mut().start();
        self.run(tasks);
    }

    fn tap(self: &Rc<Self>) {
        let tasks = self.session.borrow_mut().tap(now_ms());
        self.run(tasks);
    }

    fn restart(self: &Rc<Self>) {
        let tasks = self.session.borrow_mut().restart();
        self.run(tasks);
    }

    fn drag_start(&self, point: Point, bounds: &DialBounds) -> bool {
        let started = self.session.borrow_mut().drag_start(point, bounds);
        if started {
            self.publish();
        }
        started
    }

    fn drag_move(&self, point: Point, bounds: &DialBounds) {
        let moved = self.session.borrow_mut().drag_move(point, bounds);
        if moved {
            self.publish();
        }
    }

    fn drag_end(&self) {
        let ended = self.session.borrow_mut().drag_end(now_ms());
        if ended {
            self.publish();
        }
    }
}

#[component]
pub fn GamePage() -> impl IntoView {
    let game_view = RwSignal::new(GameView::default());
    let dial_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let host = Host::new(game_view);

    #[cfg(feature = "hydrate")]
    {
        let host = Rc::clone(&host);
        Effect::new(move || host.start());
    }

    let on_tap = {
        #[cfg(feature = "hydrate")]
        {
            let host = Rc::clone(&host);
            move |_ev: leptos::ev::MouseEvent| host.tap()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_restart = {
        #[cfg(feature = "hydrate")]
        {
            let host = Rc::clone(&host);
            move || host.restart()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move || {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let host = Rc::clone(&host);
            move |ev: leptos::ev::PointerEvent| {
                let Some(el) = dial_ref.get() else {
                    return;
                };
                if host.drag_start(client_point(&ev), &element_bounds(&el)) {
                    ev.prevent_default();
                    let _ = el.set_pointer_capture(ev.pointer_id());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let host = Rc::clone(&host);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(el) = dial_ref.get() {
                    host.drag_move(client_point(&ev), &element_bounds(&el));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let host = Rc::clone(&host);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(el) = dial_ref.get() {
                    let _ = el.release_pointer_capture(ev.pointer_id());
                }
                host.drag_end();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div class="game" on:click=on_tap>
            <RestartButton on_restart=on_restart/>
            <GameStatus state=game_view/>
            <main class="game__main">
                <div class="game__dial">
                    <Dial
                        state=game_view
                        node_ref=dial_ref
                        on_pointer_down=on_pointer_down
                        on_pointer_move=on_pointer_move
                        on_pointer_up=on_pointer_up
                    />
                </div>
                <div class="game__card">
                    <ConceptCardPanel state=game_view/>
                </div>
            </main>
        </div>
    }
}
