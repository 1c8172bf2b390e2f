//! The semicircular dial: face, rotating target wedge, cover screen, score
//! numbers and the draggable needle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Path data comes from `dial::render`; this component only lays it out as
//! SVG and forwards pointer events. The wrapper `div` has the view box's
//! aspect ratio, so its bounding box is the SVG's and can be measured for
//! pointer math.

use leptos::prelude::*;

use dial::consts::{DIAL_CENTER_X, DIAL_CENTER_Y, DIAL_RADIUS};
use dial::render::{self, COVER_FILL, EDGE_STROKE, FACE_FILL, FACE_STROKE, LABEL_FILL, NEEDLE_FILL};

use crate::state::game::GameView;

const NEEDLE_WIDTH: f64 = 6.0;
const NEEDLE_OVERHANG: f64 = 15.0;
const NEEDLE_HUB_RADIUS: f64 = 18.0;
const HITBOX_WIDTH: f64 = 50.0;

fn px(v: f64) -> String {
    format!("{v:.2}")
}

/// Dial graphic with pointer lifecycle handlers.
#[component]
pub fn Dial<PD, PM, PU>(
    #[prop(into)] state: Signal<GameView>,
    #[prop(optional)] node_ref: NodeRef<leptos::html::Div>,
    on_pointer_down: PD,
    on_pointer_move: PM,
    on_pointer_up: PU,
) -> impl IntoView
where
    PD: Fn(leptos::ev::PointerEvent) + Clone + 'static,
    PM: Fn(leptos::ev::PointerEvent) + Clone + 'static,
    PU: Fn(leptos::ev::PointerEvent) + Clone + 'static,
{
    let face = render::face_path();
    let wedges = render::wedge_sectors()
        .into_iter()
        .map(|sector| view! { <path d=sector.path fill=sector.fill></path> })
        .collect_view();

    let labels = Memo::new(move |_| state.get().score_labels());
    let wedge_style = move || state.get().wedge_style();
    let cover_style = move || state.get().cover_style();
    let needle_style = move || state.get().needle_style();
    let needle_class = move || {
        if state.get().dragging {
            "dial__needle"
        } else {
            "dial__needle dial__needle--eased"
        }
    };

    // Needle geometry in view-box units, pointing straight up at rest.
    let needle_x = px(DIAL_CENTER_X - NEEDLE_WIDTH / 2.0);
    let needle_y = px(DIAL_CENTER_Y - DIAL_RADIUS - NEEDLE_OVERHANG);
    let needle_h = px(DIAL_RADIUS + NEEDLE_OVERHANG);
    let hitbox_x = px(DIAL_CENTER_X - HITBOX_WIDTH / 2.0);
    let hitbox_y = px(DIAL_CENTER_Y - DIAL_RADIUS - 2.0 * NEEDLE_OVERHANG);
    let hitbox_h = px(DIAL_RADIUS + 4.0 * NEEDLE_OVERHANG);

    view! {
        <div
            class="dial"
            node_ref=node_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up.clone()
            on:pointercancel=on_pointer_up
        >
            <svg class="dial__svg" viewBox="0 0 300 170">
                <defs>
                    <clipPath id="dial-mask">
                        <path d=face.clone()></path>
                    </clipPath>
                </defs>

                <path d=face fill=FACE_FILL stroke=FACE_STROKE stroke-width="2"></path>

                <g clip-path="url(#dial-mask)">
                    <g class="dial__wedge" style=wedge_style>
                        {wedges}
                    </g>
                </g>

                <path class="dial__cover" d=render::cover_path() fill=COVER_FILL style=cover_style></path>

                <g class="dial__labels">
                    {move || {
                        labels
                            .get()
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <text
                                        x=px(label.x)
                                        y=px(label.y)
                                        text-anchor="middle"
                                        dominant-baseline="middle"
                                        fill=LABEL_FILL
                                        font-size="10"
                                        font-weight="900"
                                    >
                                        {label.text}
                                    </text>
                                }
                            })
                            .collect_view()
                    }}
                </g>

                <path d=render::edge_path() stroke=EDGE_STROKE stroke-width="4" stroke-linecap="round"></path>

                <g
                    class=needle_class
                    style=needle_style
                    on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <rect x=hitbox_x y=hitbox_y width=px(HITBOX_WIDTH) height=hitbox_h fill="transparent"></rect>
                    <rect x=needle_x y=needle_y width=px(NEEDLE_WIDTH) height=needle_h fill=NEEDLE_FILL rx="3"></rect>
                    <circle cx=px(DIAL_CENTER_X) cy=px(DIAL_CENTER_Y) r=px(NEEDLE_HUB_RADIUS) fill=NEEDLE_FILL></circle>
                </g>
            </svg>
        </div>
    }
}
