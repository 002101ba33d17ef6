use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, AddEventListenerOptions, Element, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, WheelEvent,
};
use gloo_timers::callback::Timeout;
use gloo_console::warn;

use crate::config;
use crate::navigation::{
    group_at, key_action, observed_section, Direction, NavAction, NavigationState, SectionGroup,
    Transition,
};

const SECTION_INDEX_ATTR: &str = "data-section-index";

#[derive(Properties, PartialEq)]
pub struct SlideDeckProps {
    pub children: Children,
    #[prop_or(config::DEFAULT_VISIBILITY_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub groups: Vec<SectionGroup>,
    #[prop_or_default]
    pub show_counter: bool,
    // Delay before the visibility observer starts watching sections
    #[prop_or_default]
    pub observer_delay_ms: u32,
    #[prop_or_default]
    pub reset_on_mount: bool,
    #[prop_or(AttrValue::from("section"))]
    pub indicator_label: AttrValue,
}

fn scroll_to_section(container: &NodeRef, index: usize) -> Result<(), JsValue> {
    let container = container
        .cast::<Element>()
        .ok_or_else(|| JsValue::from_str("slide container is not mounted"))?;
    let section = container
        .children()
        .item(index as u32)
        .ok_or_else(|| JsValue::from_str("no section at requested index"))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

fn reset_scroll(container: &NodeRef) {
    if let Some(container) = container.cast::<Element>() {
        container.set_scroll_top(0);
    }
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn is_form_control(event: &KeyboardEvent) -> bool {
    match event.target() {
        Some(target) => {
            target.has_type::<HtmlInputElement>()
                || target.has_type::<HtmlSelectElement>()
                || target.has_type::<HtmlTextAreaElement>()
        }
        None => false,
    }
}

fn observe_sections(container: &NodeRef, observer: &IntersectionObserver) {
    let Some(container) = container.cast::<Element>() else {
        warn!("Slide container missing, visibility tracking disabled");
        return;
    };
    let sections = container.children();
    for i in 0..sections.length() {
        if let Some(section) = sections.item(i) {
            observer.observe(&section);
        }
    }
}

/// Full-viewport, snap-scrolling container for a fixed list of sections.
#[function_component(SlideDeck)]
pub fn slide_deck(props: &SlideDeckProps) -> Html {
    let total = props.children.len();
    let nav = use_reducer(move || NavigationState::new(total));
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let reset = props.reset_on_mount;
        use_mount(move || {
            if reset {
                reset_scroll(&container_ref);
                // Layout may still shift right after mount, so reset once more
                Timeout::new(config::SCROLL_RESET_RETRY_MS, move || reset_scroll(&container_ref))
                    .forget();
            }
        });
    }

    // Drive the accepted transition: scroll there, then release the lock
    // once the settle window has passed.
    {
        let container_ref = container_ref.clone();
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |transition: &Option<Transition>| {
                let settle_timer = transition.map(|transition| {
                    if let Err(e) = scroll_to_section(&container_ref, transition.target) {
                        warn!("Section scroll failed:", e);
                    }
                    Timeout::new(config::SETTLE_DELAY_MS, move || {
                        dispatcher.dispatch(NavAction::Settle(transition.id));
                    })
                });
                move || drop(settle_timer)
            },
            nav.transition(),
        );
    }

    // Wheel ticks step one section; native scrolling is suppressed.
    {
        let container_ref = container_ref.clone();
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let container = container_ref.cast::<Element>();
                let wheel_callback = Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    if let Some(direction) = Direction::from_wheel_delta(e.delta_y()) {
                        dispatcher.dispatch(NavAction::Step(direction));
                    }
                }) as Box<dyn FnMut(WheelEvent)>);

                if let Some(container) = &container {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(false);
                    if let Err(e) = container.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        wheel_callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        warn!("Failed to attach wheel listener:", e);
                    }
                }

                move || {
                    if let Some(container) = container {
                        let _ = container.remove_event_listener_with_callback(
                            "wheel",
                            wheel_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Arrow, Page Up/Down, Home and End keys anywhere on the page
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if let Some(action) = key_action(&e.key(), is_form_control(&e)) {
                        e.prevent_default();
                        dispatcher.dispatch(action);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to attach keydown listener:", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Reconcile the index when the user drags the scrollbar or swipes.
    {
        let container_ref = container_ref.clone();
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |&(threshold, delay_ms): &(f64, u32)| {
                let observer_callback = Closure::wrap(Box::new(
                    move |entries: Array, _observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            let raw_index = entry.target().get_attribute(SECTION_INDEX_ATTR);
                            if let Some(action) = observed_section(
                                raw_index.as_deref(),
                                entry.intersection_ratio(),
                                threshold,
                            ) {
                                dispatcher.dispatch(action);
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(threshold));
                let observer = match IntersectionObserver::new_with_options(
                    observer_callback.as_ref().unchecked_ref(),
                    &init,
                ) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("Failed to create visibility observer:", e);
                        None
                    }
                };

                let attach_timer = observer.clone().and_then(|observer| {
                    if delay_ms == 0 {
                        observe_sections(&container_ref, &observer);
                        None
                    } else {
                        Some(Timeout::new(delay_ms, move || {
                            observe_sections(&container_ref, &observer)
                        }))
                    }
                });

                move || {
                    drop(attach_timer);
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(observer_callback);
                }
            },
            (props.threshold, props.observer_delay_ms),
        );
    }

    let current = nav.current_index();
    let total = nav.total_sections();

    let sections = props
        .children
        .iter()
        .enumerate()
        .map(|(index, section)| {
            html! {
                <div class="deck-section" key={index} data-section-index={index.to_string()}>
                    { section }
                </div>
            }
        })
        .collect::<Html>();

    let indicators = (0..total)
        .map(|index| {
            let onclick = {
                let dispatcher = nav.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::GoTo(index)))
            };
            html! {
                <button
                    key={index}
                    class={classes!("deck-dot", (index == current).then(|| "active"))}
                    aria-label={format!("Go to {} {}", props.indicator_label, index + 1)}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    let group_nav = if props.groups.is_empty() {
        html! {}
    } else {
        let active = group_at(&props.groups, current).map(|group| group.start);
        html! {
            <div class="deck-groups">
                {
                    props.groups.iter().map(|group| {
                        let is_active = active == Some(group.start);
                        let onclick = {
                            let dispatcher = nav.dispatcher();
                            let start = group.start;
                            Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::GoTo(start)))
                        };
                        html! {
                            <button
                                key={group.start}
                                class={classes!("deck-group", is_active.then(|| "active"))}
                                aria-label={format!("Jump to {} section", group.label)}
                                {onclick}
                            >
                                <div class="deck-group-bar"></div>
                                <span>{group.label}</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    };

    html! {
        <>
            { group_nav }
            <div class="deck-dots">{ indicators }</div>
            if props.show_counter {
                <div class="deck-counter">
                    <span>{format!("{} / {}", current + 1, total)}</span>
                </div>
            }
            <div ref={container_ref} class="deck-container" aria-busy={nav.is_transitioning().to_string()}>
                { sections }
            </div>
            <style>
                {r#"
                .deck-container {
                    height: 100vh;
                    overflow-y: scroll;
                    scroll-snap-type: y mandatory;
                    scroll-behavior: smooth;
                    scrollbar-width: none;
                    -ms-overflow-style: none;
                }

                .deck-container::-webkit-scrollbar {
                    display: none;
                }

                .deck-section {
                    height: 100vh;
                    scroll-snap-align: start;
                    scroll-snap-stop: always;
                    position: relative;
                    overflow: hidden;
                }

                .deck-section > section {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }

                .deck-dots {
                    position: fixed;
                    right: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .deck-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border: none;
                    padding: 0;
                    border-radius: 9999px;
                    background: #94a3b8;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .deck-dot:hover {
                    background: #475569;
                }

                .deck-dot.active {
                    height: 1.5rem;
                    background: #1e293b;
                }

                html.dark .deck-dot {
                    background: #475569;
                }

                html.dark .deck-dot.active {
                    background: #e2e8f0;
                }

                .deck-groups {
                    position: fixed;
                    left: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .deck-group {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    opacity: 0.4;
                    transition: opacity 0.3s ease;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #111827;
                }

                .deck-group:hover {
                    opacity: 0.7;
                }

                .deck-group.active {
                    opacity: 1;
                }

                .deck-group-bar {
                    height: 3rem;
                    width: 0.25rem;
                    border-radius: 9999px;
                    background: #9ca3af;
                }

                .deck-group.active .deck-group-bar {
                    background: #111827;
                }

                html.dark .deck-group {
                    color: #f9fafb;
                }

                html.dark .deck-group.active .deck-group-bar {
                    background: #f3f4f6;
                }

                .deck-counter {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    border: 1px solid #e5e7eb;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                }

                html.dark .deck-counter {
                    background: rgba(31, 41, 55, 0.8);
                    border-color: #374151;
                    color: #d1d5db;
                }

                @media (max-width: 768px) {
                    .deck-groups {
                        display: none;
                    }

                    .deck-dots {
                        right: 0.75rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
