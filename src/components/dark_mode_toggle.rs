use yew::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;
use gloo_console::warn;

const DARK_CLASS: &str = "dark";

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_theme(dark: bool) -> Result<(), JsValue> {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from_str("document root unavailable"))?;
    if dark {
        root.class_list().add_1(DARK_CLASS)
    } else {
        root.class_list().remove_1(DARK_CLASS)
    }
}

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle() -> Html {
    let is_dark = use_state(prefers_dark);

    {
        use_effect_with_deps(
            move |dark: &bool| {
                if let Err(e) = apply_theme(*dark) {
                    warn!("Failed to apply theme:", e);
                }
                || ()
            },
            *is_dark,
        );
    }

    let onclick = {
        let is_dark = is_dark.clone();
        Callback::from(move |_: MouseEvent| {
            is_dark.set(!*is_dark);
        })
    };

    html! {
        <>
            <button class="theme-toggle" {onclick} aria-label="Toggle dark mode">
                { if *is_dark { "☀" } else { "☾" } }
            </button>
            <style>
                {r#"
                .theme-toggle {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 60;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    border: 1px solid #e5e7eb;
                    background: #ffffff;
                    color: #4b5563;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .theme-toggle:hover {
                    background: #f3f4f6;
                }

                html.dark .theme-toggle {
                    background: #1f2937;
                    border-color: #374151;
                    color: #d1d5db;
                }

                html.dark .theme-toggle:hover {
                    background: #374151;
                }
                "#}
            </style>
        </>
    }
}
