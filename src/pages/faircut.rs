use yew::prelude::*;
use chrono::{Datelike, Local};
use crate::config;
use crate::calculator::CalculatorPreset;
use crate::components::revenue_calculator::RevenueCalculator;
use crate::components::slide_deck::SlideDeck;

#[function_component(FaircutFooter)]
fn faircut_footer() -> Html {
    let year = Local::now().year();
    html! {
        <div class="pitch-footer">
            <div class="pitch-footer-links">
                <a href="#">{"GitHub"}</a>
                <a href="#">{"Twitter"}</a>
                <a href="#">{"Discord"}</a>
                <a href="#">{"Docs"}</a>
            </div>
            <p>{format!("© {} Faircut. All Rights Reserved.", year)}</p>
        </div>
    }
}

#[function_component(FaircutLandingPage)]
pub fn faircut_landing_page() -> Html {
    html! {
        <div class="pitch">
            <SlideDeck>
                // Hero
                <section class="pitch-light">
                    <div class="pitch-inner centered">
                        <h1 class="pitch-logo">{"FAIRCUT"}</h1>
                        <p class="pitch-tagline">{"Unlock the Legacy Value of Your Creations"}</p>
                        <div class="pitch-quote">
                            <p>
                                <strong>{"Jonas"}</strong>
                                {" sold a jacket last year. This morning, he woke up to "}
                                <strong>{"$60"}</strong>
                                {" from a sale he never made."}
                            </p>
                            <p class="pitch-quote-punch">{"It's not just revenue. It's his legacy, earning for him."}</p>
                        </div>
                    </div>
                </section>

                // The gap
                <section class="pitch-muted">
                    <div class="pitch-inner centered">
                        <h2 class="pitch-heading">{"Your work sells twice."}<br/>{"You get paid once."}</h2>
                        <p class="pitch-lead">{"When a piece is resold, the markup goes to whoever flipped it. The maker who gave it its value never sees a cent."}</p>
                        <div class="pitch-cards">
                            <div class="pitch-card">
                                <div class="pitch-card-head">{"Original sale"}</div>
                                <div class="pitch-card-text">{"You set the price and earn once"}</div>
                            </div>
                            <div class="pitch-card">
                                <div class="pitch-card-head">{"Every resale"}</div>
                                <div class="pitch-card-text">{"The price climbs, the reseller profits"}</div>
                            </div>
                            <div class="pitch-card">
                                <div class="pitch-card-head">{"Your share"}</div>
                                <div class="pitch-card-text">{"Zero, until now"}</div>
                            </div>
                        </div>
                    </div>
                </section>

                // Value props
                <section class="pitch-light">
                    <div class="pitch-inner centered">
                        <h2 class="pitch-heading">{"Your Creations."}<br/>{"Your Legacy Revenue."}</h2>
                        <p class="pitch-lead">{"Faircut gives every physical product a digital soul, one that pays you a royalty on every future resale. Passively. Automatically. Permanently."}</p>
                        <div class="pitch-cards">
                            <div class="pitch-card">
                                <div class="pitch-card-head">{"Effortless Onboarding"}</div>
                                <div class="pitch-card-text">{"5-minute Shopify setup"}</div>
                            </div>
                            <div class="pitch-card">
                                <div class="pitch-card-head">{"Zero Investment"}</div>
                                <div class="pitch-card-text">{"Free to install"}</div>
                            </div>
                            <div class="pitch-card">
                                <div class="pitch-card-head">{"Perpetual Royalties"}</div>
                                <div class="pitch-card-text">{"Earn from every resale"}</div>
                            </div>
                        </div>
                    </div>
                </section>

                // Calculator
                <section class="pitch-muted">
                    <div class="pitch-inner">
                        <RevenueCalculator preset={CalculatorPreset::CreatorLegacy} />
                    </div>
                </section>

                // How it works
                <section class="pitch-light">
                    <div class="pitch-inner centered">
                        <h2 class="pitch-heading">{"How It Works"}</h2>
                        <ol class="pitch-steps">
                            <li><strong>{"Connect your store."}</strong>{" Install the Shopify app and pick your royalty rate."}</li>
                            <li><strong>{"Sell as usual."}</strong>{" Every order ships with a digital passport."}</li>
                            <li><strong>{"Get paid on resale."}</strong>{" When the item changes hands, your cut arrives automatically."}</li>
                        </ol>
                    </div>
                </section>

                // Call to action
                <section class="pitch-light">
                    <div class="pitch-inner centered">
                        <h2 class="pitch-heading">{"Ready to Get"}<br/>{"Your Fair Cut?"}</h2>
                        <p class="pitch-lead">{"Stop leaving money on the table. Join the brands turning every resale into revenue."}</p>
                        <a href={config::access_request_href()} class="pitch-cta">
                            {"Request Exclusive Access"}
                        </a>
                        <div class="pitch-fineprint">{"Seamless Shopify Integration • Simple for Everyone"}</div>
                    </div>
                    <FaircutFooter />
                </section>
            </SlideDeck>

            <style>
                {r#"
                .pitch {
                    color: #111827;
                }

                html.dark .pitch {
                    color: #ffffff;
                }

                .pitch .pitch-light {
                    background: linear-gradient(135deg, #f8fafc, #fafaf9, #fafafa);
                }

                .pitch .pitch-muted {
                    background: linear-gradient(135deg, #f5f5f4, #f1f5f9, #f4f4f5);
                }

                html.dark .pitch .pitch-light {
                    background: linear-gradient(135deg, #020617, #0f172a, #0a0a0a);
                }

                html.dark .pitch .pitch-muted {
                    background: linear-gradient(135deg, #0f172a, #171717, #1c1917);
                }

                .pitch .pitch-inner {
                    width: 100%;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .pitch .pitch-inner.centered {
                    text-align: center;
                }

                .pitch .pitch-logo {
                    font-size: clamp(4.5rem, 10vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    margin: 0 0 1rem 0;
                }

                .pitch .pitch-tagline {
                    font-size: 1.35rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                    margin-bottom: 4rem;
                }

                .pitch .pitch-quote {
                    max-width: 42rem;
                    margin: 0 auto;
                    text-align: left;
                    border-left: 2px solid #94a3b8;
                    padding-left: 2rem;
                    font-size: 1.35rem;
                    font-weight: 300;
                    line-height: 1.6;
                }

                .pitch .pitch-quote-punch {
                    font-weight: 600;
                    margin-top: 1.5rem;
                }

                .pitch .pitch-heading {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 0 0 1.5rem 0;
                }

                .pitch .pitch-lead {
                    font-size: 1.2rem;
                    line-height: 1.6;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto 3rem auto;
                }

                html.dark .pitch .pitch-lead,
                html.dark .pitch .pitch-tagline {
                    color: #9ca3af;
                }

                .pitch .pitch-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .pitch .pitch-card {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }

                html.dark .pitch .pitch-card {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(51, 65, 85, 0.5);
                }

                .pitch .pitch-card-head {
                    font-size: 1.35rem;
                    font-weight: 700;
                }

                .pitch .pitch-card-text {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-top: 0.25rem;
                }

                .pitch .pitch-steps {
                    text-align: left;
                    max-width: 36rem;
                    margin: 0 auto;
                    font-size: 1.2rem;
                    line-height: 1.8;
                }

                .pitch .pitch-cta {
                    display: inline-block;
                    background: linear-gradient(to right, #0f172a, #1c1917);
                    color: #ffffff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    padding: 1rem 3rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }

                .pitch .pitch-cta:hover {
                    transform: scale(1.05);
                }

                html.dark .pitch .pitch-cta {
                    background: linear-gradient(to right, #f1f5f9, #f5f5f4);
                    color: #0f172a;
                }

                .pitch .pitch-fineprint {
                    margin-top: 3rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .pitch .pitch-footer {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 0;
                    right: 0;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                .pitch .pitch-footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 0.75rem;
                    font-size: 0.875rem;
                }

                .pitch .pitch-footer-links a {
                    color: inherit;
                    text-decoration: none;
                }

                .pitch .pitch-footer-links a:hover {
                    color: #111827;
                }

                html.dark .pitch .pitch-footer-links a:hover {
                    color: #d1d5db;
                }

                @media (max-width: 768px) {
                    .pitch .pitch-cards {
                        grid-template-columns: 1fr;
                        gap: 0.75rem;
                    }

                    .pitch .pitch-tagline {
                        margin-bottom: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
