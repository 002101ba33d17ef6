use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::calculator::CalculatorPreset;
use crate::components::revenue_calculator::RevenueCalculator;
use crate::components::slide_deck::SlideDeck;
use crate::navigation::SectionGroup;

fn story_slide(step: &str, title: &str, body: &str) -> Html {
    html! {
        <section class="story-slide">
            <div class="slide-inner">
                <p class="slide-eyebrow">{step}</p>
                <h2 class="slide-title">{title}</h2>
                <p class="slide-body">{body}</p>
            </div>
        </section>
    }
}

fn business_slide(eyebrow: &str, title: &str, points: &[(&str, &str)]) -> Html {
    html! {
        <section class="business-slide">
            <div class="slide-inner">
                <p class="slide-eyebrow">{eyebrow}</p>
                <h2 class="slide-title">{title}</h2>
                <div class="slide-points">
                    {
                        points.iter().map(|(head, text)| html! {
                            <div class="slide-point">
                                <div class="slide-point-head">{*head}</div>
                                <div class="slide-point-text">{*text}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let groups = vec![
        SectionGroup { label: "The Story", start: 0 },
        SectionGroup { label: "The Business", start: 7 },
        SectionGroup { label: "FAIRCUT", start: 16 },
    ];

    html! {
        <div class="landing">
            <SlideDeck groups={groups} show_counter={true} indicator_label="slide">
                // The story (slides 1-7)
                { story_slide("01", "A jacket, made by hand.", "Jonas spent three weeks stitching a waxed-cotton jacket. He sold it for $240 and moved on to the next one.") }
                { story_slide("02", "It didn't stop there.", "The buyer wore it for a season, then listed it online. It sold again in two days.") }
                { story_slide("03", "For $480.", "Double the original price. The jacket had become a collectible, and someone else captured the gain.") }
                { story_slide("04", "Then again. And again.", "Every resale raised the price. Every resale paid the reseller. None of it reached the person who made it.") }
                { story_slide("05", "This happens every day.", "Sneakers, watches, furniture, art. The secondary market grows faster than the primary one, and creators are locked out of it.") }
                { story_slide("06", "What if the object remembered?", "A digital passport travels with the item. When it changes hands, the creator's cut is settled automatically.") }
                { story_slide("07", "This morning, Jonas woke up to $60.", "From a sale he never made. It's not just revenue. It's his legacy, earning for him.") }

                // The business (slides 8-16)
                { business_slide("The Problem", "Creators miss the second life of their work", &[
                    ("$200B+", "Global resale market, growing 3x faster than retail"),
                    ("0%", "Share of resale profit reaching the original maker"),
                    ("Flippers", "Capture the margin that loyal collectors would pay the brand"),
                ]) }
                { business_slide("The Solution", "A royalty on every future resale", &[
                    ("Digital passport", "Each product gets a verifiable identity at first sale"),
                    ("Automatic split", "Resale platforms settle the royalty at checkout"),
                    ("Perpetual", "Royalties continue for the lifetime of the item"),
                ]) }
                { business_slide("How It Works", "Three steps, no new habits", &[
                    ("Install", "5-minute Shopify setup, free to start"),
                    ("Sell", "Passports are issued with every order"),
                    ("Earn", "Royalties arrive whenever an item is resold"),
                ]) }
                { business_slide("Why Now", "Resale went mainstream", &[
                    ("Regulation", "EU digital product passports become mandatory for textiles"),
                    ("Platforms", "Major marketplaces already verify authenticity"),
                    ("Buyers", "Collectors want provenance and will pay for it"),
                ]) }
                <section class="business-slide">
                    <div class="slide-inner">
                        <p class="slide-eyebrow">{"The Numbers"}</p>
                        <RevenueCalculator preset={CalculatorPreset::AnnualPassive} />
                    </div>
                </section>
                { business_slide("Business Model", "We earn when you earn", &[
                    ("50/50", "Royalty pool split between the creator and Faircut"),
                    ("No fees", "Nothing to pay up front, nothing per passport"),
                    ("Aligned", "Our revenue only grows with your resale volume"),
                ]) }
                { business_slide("Go To Market", "Start with independent brands", &[
                    ("Shopify", "Distribution through the app store"),
                    ("Limited editions", "Watches and apparel drops with high resale demand"),
                    ("Communities", "Collectors invite the brands they love"),
                ]) }
                { business_slide("Competition", "Nobody pays the maker", &[
                    ("Marketplaces", "Take a fee from both sides, nothing for the creator"),
                    ("Authenticators", "Verify items but do not share value"),
                    ("Faircut", "Turns provenance into perpetual revenue"),
                ]) }
                { business_slide("The Ask", "Join the first cohort", &[
                    ("Pilot brands", "Ten design partners for the launch season"),
                    ("Integration", "Two resale platforms settling royalties at checkout"),
                    ("Timeline", "Live in one quarter"),
                ]) }

                // Summary (slide 17)
                <section class="summary-slide">
                    <div class="slide-grid"></div>
                    <div class="slide-inner centered">
                        <h1 class="summary-title">{"FAIRCUT"}</h1>
                        <p class="summary-subtitle">{"Unlock the Legacy Value of Your Creations"}</p>
                        <Link<Route> to={Route::Faircut} classes="summary-cta">
                            <span>{"Learn More"}</span>
                            <i class="arrow">{"→"}</i>
                        </Link<Route>>
                    </div>
                </section>
            </SlideDeck>

            <style>
                {r#"
                .landing {
                    background: #ffffff;
                    color: #111827;
                }

                html.dark .landing {
                    background: #111827;
                    color: #f9fafb;
                }

                .landing .story-slide {
                    background: linear-gradient(135deg, #f8fafc, #fafaf9, #fafafa);
                }

                .landing .business-slide {
                    background: linear-gradient(135deg, #f5f5f4, #f1f5f9, #f4f4f5);
                }

                html.dark .landing .story-slide {
                    background: linear-gradient(135deg, #020617, #0f172a, #0a0a0a);
                }

                html.dark .landing .business-slide {
                    background: linear-gradient(135deg, #0f172a, #171717, #1c1917);
                }

                .landing .summary-slide {
                    background: #ffffff;
                    position: relative;
                }

                html.dark .landing .summary-slide {
                    background: #111827;
                }

                .landing .slide-grid {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(to right, rgba(128, 128, 128, 0.04) 1px, transparent 1px),
                        linear-gradient(to bottom, rgba(128, 128, 128, 0.04) 1px, transparent 1px);
                    background-size: 64px 64px;
                }

                .landing .slide-inner {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .landing .slide-inner.centered {
                    text-align: center;
                }

                .landing .slide-eyebrow {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                    margin-bottom: 1rem;
                }

                .landing .slide-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 900;
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    margin: 0 0 1.5rem 0;
                }

                .landing .slide-body {
                    font-size: 1.35rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: #374151;
                    border-left: 2px solid #94a3b8;
                    padding-left: 2rem;
                }

                html.dark .landing .slide-body {
                    color: #d1d5db;
                }

                .landing .slide-points {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .landing .slide-point {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }

                html.dark .landing .slide-point {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(51, 65, 85, 0.5);
                }

                .landing .slide-point-head {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .landing .slide-point-text {
                    font-size: 0.9rem;
                    color: #4b5563;
                }

                html.dark .landing .slide-point-text {
                    color: #94a3b8;
                }

                .landing .summary-title {
                    font-size: clamp(4.5rem, 10vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    margin: 0 0 2rem 0;
                }

                .landing .summary-subtitle {
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: #4b5563;
                    margin-bottom: 3rem;
                }

                html.dark .landing .summary-subtitle {
                    color: #9ca3af;
                }

                .landing .summary-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #111827;
                    color: #ffffff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    padding: 1rem 2.5rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }

                .landing .summary-cta:hover {
                    transform: scale(1.05);
                }

                .landing .summary-cta .arrow {
                    font-style: normal;
                    transition: transform 0.2s ease;
                }

                .landing .summary-cta:hover .arrow {
                    transform: translateX(4px);
                }

                html.dark .landing .summary-cta {
                    background: #ffffff;
                    color: #111827;
                }

                @media (max-width: 768px) {
                    .landing .slide-points {
                        grid-template-columns: 1fr;
                        gap: 0.75rem;
                    }

                    .landing .slide-point {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
