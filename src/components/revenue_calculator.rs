use yew::prelude::*;
use web_sys::HtmlInputElement;
use log::debug;

use crate::calculator::{compute, CalculatorInputs, CalculatorPreset};

#[derive(Properties, PartialEq)]
pub struct RevenueCalculatorProps {
    pub preset: CalculatorPreset,
}

#[function_component(RevenueCalculator)]
pub fn revenue_calculator(props: &RevenueCalculatorProps) -> Html {
    let preset = props.preset;
    let inputs = use_state(move || CalculatorInputs::defaults(preset));

    // Outputs are never stored, only derived from the current slider values
    let outputs = compute(&inputs);

    let sliders = preset
        .sliders()
        .iter()
        .map(|&slider| {
            let domain = preset.domain(slider);
            let value = inputs.get(slider).unwrap_or(domain.min);
            let oninput = {
                let inputs = inputs.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if let Ok(raw) = input.value().parse::<u32>() {
                        let mut next = *inputs;
                        next.set(slider, raw);
                        debug!("{:?} set to {:?}", slider, next.get(slider));
                        inputs.set(next);
                    }
                })
            };
            let id = format!("calc-{:?}", slider).to_lowercase();

            html! {
                <div class="calc-slider" key={id.clone()}>
                    <div class="calc-slider-head">
                        <label for={id.clone()}>{slider.label()}</label>
                        <span class="calc-slider-value">{slider.format_value(value)}</span>
                    </div>
                    <input
                        type="range"
                        id={id}
                        min={domain.min.to_string()}
                        max={domain.max.to_string()}
                        step={domain.step.to_string()}
                        value={value.to_string()}
                        {oninput}
                    />
                </div>
            }
        })
        .collect::<Html>();

    let headlines = outputs
        .headlines()
        .into_iter()
        .map(|headline| {
            html! {
                <div class={classes!("calc-result", headline.highlight.then(|| "highlight"))}>
                    <div class="calc-result-label">{headline.label}</div>
                    <div class="calc-result-value">{headline.value}</div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="calc">
            <h3 class="calc-title">{preset.title()}</h3>
            <div class="calc-sliders">{ sliders }</div>
            <div class="calc-results">{ headlines }</div>
            <p class="calc-note">{"Your share is a fixed 50% of every royalty collected."}</p>
            <style>
                {r#"
                .calc {
                    width: 100%;
                    max-width: 40rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.7);
                    border: 1px solid #e2e8f0;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
                    text-align: left;
                }

                html.dark .calc {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(51, 65, 85, 0.5);
                }

                .calc-title {
                    font-size: 1.5rem;
                    font-weight: 800;
                    margin: 0 0 1.5rem 0;
                    color: #111827;
                }

                html.dark .calc-title {
                    color: #ffffff;
                }

                .calc-slider {
                    margin-bottom: 1.25rem;
                }

                .calc-slider-head {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-bottom: 0.4rem;
                }

                html.dark .calc-slider-head {
                    color: #94a3b8;
                }

                .calc-slider-value {
                    font-family: ui-monospace, monospace;
                    font-weight: 700;
                    color: #111827;
                }

                html.dark .calc-slider-value {
                    color: #f1f5f9;
                }

                .calc-slider input[type="range"] {
                    width: 100%;
                    accent-color: #334155;
                }

                .calc-results {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #e2e8f0;
                }

                html.dark .calc-results {
                    border-top-color: #334155;
                }

                .calc-result-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: #6b7280;
                }

                .calc-result-value {
                    font-family: ui-monospace, monospace;
                    font-size: 1.75rem;
                    font-weight: 800;
                    color: #111827;
                }

                html.dark .calc-result-value {
                    color: #ffffff;
                }

                .calc-result.highlight .calc-result-value {
                    color: #b45309;
                }

                html.dark .calc-result.highlight .calc-result-value {
                    color: #fbbf24;
                }

                .calc-note {
                    margin: 1rem 0 0 0;
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                @media (max-width: 640px) {
                    .calc {
                        padding: 1.25rem;
                    }

                    .calc-results {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
