use yew::prelude::*;
use crate::config;
use crate::calculator::{format_currency, resale_split};
use crate::components::slide_deck::SlideDeck;

const CURRENCY: &str = "CHF ";
const RETAIL_PRICE: f64 = 3000.0;
const SECONDARY_PRICE: f64 = 6500.0;
const STANDING_ROYALTY_RATE: u32 = 30;

// Time-based royalty schedule shown on the passport
const ROYALTY_SCHEDULE: [(&str, u32); 3] = [
    ("Year 1 (2024-2025)", 90),
    ("Year 2 (2025-2026)", 60),
    ("Year 3+ (2026 onwards)", 30),
];

fn chf(amount: f64) -> String {
    format_currency(CURRENCY, amount)
}

fn markup_label() -> String {
    let markup = (SECONDARY_PRICE - RETAIL_PRICE) / RETAIL_PRICE * 100.0;
    format!("(~{}% markup)", markup.floor())
}

fn pillars(items: &[(&str, &str)], accent: &'static str) -> Html {
    html! {
        <div class="napkin-pillars">
            {
                items.iter().map(|(head, text)| html! {
                    <div class="napkin-pillar">
                        <p class={classes!("napkin-pillar-head", accent)}>{format!("\"{}\"", head)}</p>
                        <p class="napkin-pillar-text">{*text}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(NapkinStrategy)]
pub fn napkin_strategy() -> Html {
    let without = resale_split(RETAIL_PRICE, SECONDARY_PRICE, 0);
    let with_passport = resale_split(RETAIL_PRICE, SECONDARY_PRICE, STANDING_ROYALTY_RATE);

    html! {
        <div class="napkin">
            <div class="napkin-logo">{"Faircut"}</div>
            <SlideDeck
                threshold={config::STRATEGY_VISIBILITY_THRESHOLD}
                observer_delay_ms={config::STRATEGY_OBSERVER_DELAY_MS}
                reset_on_mount={true}
            >
                // Current strategy
                <section>
                    <div class="napkin-inner">
                        <div class="napkin-title">
                            <p class="napkin-eyebrow">{"Louis Erard Strategy"}</p>
                            <h2>{"Selling, Not Distributing"}</h2>
                            <p class="napkin-subtitle">{"50% direct, 50% selected retailers, self-sustainable and independent"}</p>
                        </div>

                        <p class="napkin-label">{"Primary Market"}</p>
                        <div class="napkin-card">
                            <div class="napkin-flow">
                                <span>{"You"}</span><span class="napkin-arrow">{"→"}</span><span>{"Collector"}</span>
                                <span class="napkin-price">{chf(RETAIL_PRICE)}</span>
                            </div>
                        </div>

                        <p class="napkin-label">{"Secondary Market (Le Régulateur x Alain Silberstein, Chrono24)"}</p>
                        <div class="napkin-card loss">
                            <div class="napkin-flow">
                                <span>{"You"}</span><span class="napkin-arrow">{"→"}</span>
                                <span>{"Flipper"}</span><span class="napkin-arrow">{"→"}</span>
                                <span>{"New Collector"}</span>
                                <span class="napkin-price loss">
                                    {chf(SECONDARY_PRICE)}{" "}<small>{markup_label()}</small>
                                </span>
                            </div>
                            <div class="napkin-ticker loss">
                                <div class="napkin-ticker-row">
                                    <span>{"Flipper profit"}</span>
                                    <span class="napkin-amount">{chf(without.reseller_profit)}</span>
                                </div>
                                <div class="napkin-ticker-row">
                                    <span>{"Your share"}</span>
                                    <span class="napkin-amount">{chf(without.royalty)}</span>
                                </div>
                            </div>
                        </div>

                        {pillars(&[
                            ("Frustration", "Real collectors can't buy at retail because flippers buy instantly and list immediately at markup"),
                            ("Headaches", "Collectors buying secondhand face authenticity concerns, warranty issues, and condition uncertainties"),
                            ("Lost Community", "No connection between brand and secondary market collectors, missing opportunities to build lasting relationships"),
                        ], "loss")}
                    </div>
                </section>

                // New strategy
                <section>
                    <div class="napkin-inner">
                        <div class="napkin-title">
                            <p class="napkin-eyebrow">{"The Napkin Strategy"}</p>
                            <h2>{"Selling And Distributing"}</h2>
                            <p class="napkin-subtitle">{"100% control, zero cost, perpetual revenue, maintaining independence and self-sustainability"}</p>
                        </div>

                        <div class="napkin-passport-frame">
                            <span class="napkin-badge">{"🔐 Watch With A Digital Passport"}</span>

                            <p class="napkin-label">{"Primary Market"}</p>
                            <div class="napkin-card">
                                <div class="napkin-flow">
                                    <span>{"You"}</span><span class="napkin-arrow">{"→"}</span><span>{"Collector"}</span>
                                    <span class="napkin-price">{chf(RETAIL_PRICE)}</span>
                                </div>
                            </div>

                            <p class="napkin-label">{"Secondary Market (Le Régulateur x Alain Silberstein, Chrono24)"}</p>
                            <div class="napkin-card">
                                <div class="napkin-flow">
                                    <span>{"You"}</span><span class="napkin-arrow">{"→"}</span>
                                    <span>{"Reseller"}</span><span class="napkin-arrow">{"→"}</span>
                                    <span>{"New Collector"}</span>
                                    <span class="napkin-price">{chf(SECONDARY_PRICE)}</span>
                                </div>
                                <div class="napkin-ticker gain">
                                    <div class="napkin-ticker-row">
                                        <span>{"Reseller profit"}</span>
                                        <span class="napkin-amount">{chf(with_passport.reseller_profit)}</span>
                                    </div>
                                    <div class="napkin-ticker-row">
                                        <span>{format!("Your share ({}% royalty)", STANDING_ROYALTY_RATE)}</span>
                                        <span class="napkin-amount gain">
                                            {chf(with_passport.royalty)}
                                            <small>{"Per resale. Perpetual."}</small>
                                        </span>
                                    </div>
                                </div>
                            </div>
                        </div>

                        {pillars(&[
                            ("Fair Access", "Set time-based royalty rates (e.g., 90% first year) to eliminate flippers' margin, ensuring real collectors get priority access"),
                            ("Trust & Security", "Digital passport ensures authenticity, tracks warranty, and maintains condition history throughout ownership"),
                            ("Connected Community", "Like a dating app, you connect collectors with each other across the watch's lifetime, building lasting relationships and community"),
                        ], "gain")}
                    </div>
                </section>

                // Digital passport example
                <section>
                    <div class="napkin-inner narrow">
                        <div class="napkin-title">
                            <p class="napkin-eyebrow">{"Example"}</p>
                            <h2>{"Digital Passport"}</h2>
                            <p class="napkin-subtitle">{"Le Régulateur Louis Erard x Alain Silberstein"}</p>
                        </div>

                        <div class="napkin-passport">
                            <div class="napkin-passport-head">
                                <div>
                                    <h3>{"Le Régulateur"}</h3>
                                    <p>{"Louis Erard × Alain Silberstein"}</p>
                                </div>
                                <div class="napkin-lock">{"🔐"}</div>
                            </div>

                            <div class="napkin-facts">
                                <div><p class="napkin-label">{"Serial Number"}</p><p class="napkin-fact mono">{"LE-AS-2024-0042"}</p></div>
                                <div><p class="napkin-label">{"Edition"}</p><p class="napkin-fact">{"Limited 178 pcs"}</p></div>
                                <div><p class="napkin-label">{"Retail Base Price"}</p><p class="napkin-fact mono">{chf(RETAIL_PRICE)}</p></div>
                                <div><p class="napkin-label">{"Warranty"}</p><p class="napkin-fact">{"Valid until Oct 2026"}</p></div>
                            </div>

                            <div class="napkin-card">
                                <h4>{"Resale Royalties"}</h4>
                                {
                                    ROYALTY_SCHEDULE.iter().map(|(period, rate)| html! {
                                        <div class="napkin-ticker-row">
                                            <span>{*period}</span>
                                            <span class="napkin-amount gain">{format!("{}%", rate)}</span>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>

                            <div class="napkin-facts">
                                <div class="napkin-chip"><p class="napkin-label">{"Authenticity"}</p><p class="ok">{"✓ Verified"}</p></div>
                                <div class="napkin-chip"><p class="napkin-label">{"Ownership History"}</p><p>{"1 Transfer"}</p></div>
                                <div class="napkin-chip"><p class="napkin-label">{"Service Records"}</p><p>{"Up to date"}</p></div>
                                <div class="napkin-chip"><p class="napkin-label">{"Insurance"}</p><p class="ok">{"✓ Active"}</p></div>
                            </div>
                        </div>
                    </div>
                </section>
            </SlideDeck>

            <style>
                {r#"
                .napkin {
                    color: #111827;
                }

                html.dark .napkin {
                    color: #ffffff;
                }

                .napkin .deck-section > section {
                    background: linear-gradient(135deg, #f8fafc, #fafaf9, #fafafa);
                }

                html.dark .napkin .deck-section > section {
                    background: linear-gradient(135deg, #020617, #0f172a, #0a0a0a);
                }

                .napkin-logo {
                    position: fixed;
                    top: 1.5rem;
                    left: 1.5rem;
                    z-index: 50;
                    font-size: 1.875rem;
                    font-weight: 900;
                    letter-spacing: -0.02em;
                    background: linear-gradient(to right, #d97706, #ea580c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .napkin .napkin-inner {
                    width: 100%;
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .napkin .napkin-inner.narrow {
                    max-width: 56rem;
                }

                .napkin .napkin-title {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .napkin .napkin-title h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 900;
                    margin: 0 0 0.75rem 0;
                }

                .napkin .napkin-eyebrow,
                .napkin .napkin-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                }

                .napkin .napkin-subtitle {
                    font-size: 1.125rem;
                    color: #4b5563;
                }

                html.dark .napkin .napkin-subtitle {
                    color: #9ca3af;
                }

                .napkin .napkin-card {
                    background: rgba(255, 255, 255, 0.6);
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 1.25rem 1.5rem;
                    margin-bottom: 1.5rem;
                }

                html.dark .napkin .napkin-card {
                    background: rgba(15, 23, 42, 0.6);
                    border-color: #1f2937;
                }

                .napkin .napkin-card.loss {
                    background: rgba(254, 242, 242, 0.7);
                    border-color: #fecaca;
                }

                html.dark .napkin .napkin-card.loss {
                    background: rgba(127, 29, 29, 0.2);
                    border-color: #991b1b;
                }

                .napkin .napkin-flow {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 1.25rem;
                    font-weight: 500;
                }

                .napkin .napkin-arrow {
                    color: #6b7280;
                }

                .napkin .napkin-price {
                    margin-left: auto;
                    font-family: ui-monospace, monospace;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .napkin .napkin-price.loss {
                    color: #dc2626;
                }

                .napkin .napkin-ticker {
                    margin-top: 1rem;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                }

                .napkin .napkin-ticker.loss {
                    background: #fee2e2;
                    border: 1px solid #f87171;
                }

                .napkin .napkin-ticker.gain {
                    background: #fffbeb;
                    border: 1px solid #fcd34d;
                }

                html.dark .napkin .napkin-ticker.loss {
                    background: rgba(127, 29, 29, 0.4);
                }

                html.dark .napkin .napkin-ticker.gain {
                    background: rgba(120, 53, 15, 0.3);
                }

                .napkin .napkin-ticker-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.875rem;
                    padding: 0.25rem 0;
                }

                .napkin .napkin-amount {
                    font-family: ui-monospace, monospace;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-align: right;
                }

                .napkin .napkin-amount small {
                    display: block;
                    font-family: inherit;
                    font-size: 0.75rem;
                    font-style: italic;
                    font-weight: 400;
                    color: #4b5563;
                }

                .napkin .napkin-amount.gain,
                .napkin .napkin-pillar-head.gain {
                    color: #d97706;
                }

                .napkin .napkin-pillar-head.loss {
                    color: #dc2626;
                }

                .napkin .napkin-passport-frame {
                    background: linear-gradient(135deg, rgba(255, 251, 235, 0.7), rgba(255, 247, 237, 0.7));
                    border: 1px solid #fcd34d;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                }

                html.dark .napkin .napkin-passport-frame {
                    background: rgba(120, 53, 15, 0.2);
                    border-color: #b45309;
                }

                .napkin .napkin-badge {
                    display: inline-block;
                    background: #fde68a;
                    color: #78350f;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .napkin .napkin-pillars {
                    display: flex;
                    gap: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #d1d5db;
                }

                .napkin .napkin-pillar {
                    flex: 1;
                    text-align: center;
                }

                .napkin .napkin-pillar-head {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }

                .napkin .napkin-pillar-text {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #4b5563;
                }

                html.dark .napkin .napkin-pillar-text {
                    color: #9ca3af;
                }

                .napkin .napkin-passport {
                    background: linear-gradient(135deg, #fffbeb, #fff7ed);
                    border: 2px solid #fbbf24;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                html.dark .napkin .napkin-passport {
                    background: rgba(120, 53, 15, 0.3);
                    border-color: #d97706;
                }

                .napkin .napkin-passport-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-bottom: 1.5rem;
                    margin-bottom: 1.5rem;
                    border-bottom: 2px solid #fcd34d;
                }

                .napkin .napkin-passport-head h3 {
                    font-size: 1.5rem;
                    font-weight: 900;
                    margin: 0;
                }

                .napkin .napkin-lock {
                    font-size: 3rem;
                }

                .napkin .napkin-facts {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .napkin .napkin-fact {
                    font-size: 1.125rem;
                    font-weight: 700;
                }

                .napkin .mono {
                    font-family: ui-monospace, monospace;
                }

                .napkin .napkin-chip {
                    background: rgba(255, 255, 255, 0.5);
                    border: 1px solid #d1d5db;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                html.dark .napkin .napkin-chip {
                    background: rgba(15, 23, 42, 0.5);
                    border-color: #374151;
                }

                .napkin .ok {
                    color: #16a34a;
                }

                @media (max-width: 768px) {
                    .napkin .napkin-pillars {
                        display: none;
                    }

                    .napkin .napkin-flow {
                        flex-wrap: wrap;
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
