//! Royalty revenue estimates behind the calculator widgets.
//!
//! Two presets exist because the pitch pages use different input sets:
//! the "creator legacy" form projects a creator's share over an item's
//! lifetime of resales, the "annual passive" form projects a brand's yearly
//! royalty income. Both are pure functions of their slider values.

/// Share of the royalty pool paid to the original seller.
pub const CREATOR_SHARE: f64 = 0.5;

pub const DISPLAY_CURRENCY: &str = "$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorPreset {
    CreatorLegacy,
    AnnualPassive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slider {
    AveragePrice,
    ItemsSold,
    LifetimeResales,
    ResaleMarkup,
    RoyaltyRate,
    ResaleShare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Currency,
    Count,
    Percent,
    Times,
}

impl Slider {
    pub fn label(self) -> &'static str {
        match self {
            Slider::AveragePrice => "Average Item Price",
            Slider::ItemsSold => "Items Sold Annually",
            Slider::LifetimeResales => "Lifetime Resales per Item",
            Slider::ResaleMarkup => "Resale Markup",
            Slider::RoyaltyRate => "Royalty Rate",
            Slider::ResaleShare => "Items Resold per Year",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Slider::AveragePrice => Unit::Currency,
            Slider::ItemsSold => Unit::Count,
            Slider::LifetimeResales => Unit::Times,
            Slider::ResaleMarkup | Slider::RoyaltyRate | Slider::ResaleShare => Unit::Percent,
        }
    }

    pub fn format_value(self, value: u32) -> String {
        match self.unit() {
            Unit::Currency => format_currency(DISPLAY_CURRENCY, f64::from(value)),
            Unit::Count => group_thousands(u64::from(value)),
            Unit::Percent => format!("{}%", value),
            Unit::Times => format!("{}x", value),
        }
    }
}

/// The `[min, max]` range and step of a range input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderDomain {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderDomain {
    pub const fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }

    /// Clamps into range and snaps to the nearest step above `min`.
    pub fn clamp(&self, raw: u32) -> u32 {
        let bounded = raw.clamp(self.min, self.max);
        if self.step <= 1 {
            return bounded;
        }
        let offset = bounded - self.min;
        let steps = (offset + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }
}

impl CalculatorPreset {
    pub fn sliders(self) -> &'static [Slider] {
        match self {
            CalculatorPreset::CreatorLegacy => &[
                Slider::AveragePrice,
                Slider::ItemsSold,
                Slider::LifetimeResales,
                Slider::ResaleMarkup,
                Slider::RoyaltyRate,
            ],
            CalculatorPreset::AnnualPassive => &[
                Slider::AveragePrice,
                Slider::ResaleMarkup,
                Slider::ItemsSold,
                Slider::RoyaltyRate,
                Slider::ResaleShare,
            ],
        }
    }

    pub fn domain(self, slider: Slider) -> SliderDomain {
        match (self, slider) {
            (_, Slider::AveragePrice) => SliderDomain::new(50, 5000, 50),
            (_, Slider::ItemsSold) => SliderDomain::new(100, 10000, 100),
            (_, Slider::RoyaltyRate) => SliderDomain::new(5, 25, 1),
            (_, Slider::LifetimeResales) => SliderDomain::new(1, 10, 1),
            (CalculatorPreset::CreatorLegacy, Slider::ResaleMarkup) => SliderDomain::new(50, 300, 25),
            (CalculatorPreset::AnnualPassive, Slider::ResaleMarkup) => SliderDomain::new(0, 300, 25),
            (_, Slider::ResaleShare) => SliderDomain::new(5, 100, 5),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CalculatorPreset::CreatorLegacy => "Calculate Your Legacy Revenue",
            CalculatorPreset::AnnualPassive => "Your Annual Passive Revenue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreatorLegacyInputs {
    pub average_price: u32,
    pub items_sold: u32,
    pub lifetime_resales: u32,
    pub resale_markup: u32,
    pub royalty_rate: u32,
}

impl Default for CreatorLegacyInputs {
    fn default() -> Self {
        Self {
            average_price: 300,
            items_sold: 500,
            lifetime_resales: 2,
            resale_markup: 125,
            royalty_rate: 15,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnualPassiveInputs {
    pub average_price: u32,
    pub resale_markup: u32,
    pub items_sold: u32,
    pub royalty_rate: u32,
    pub resale_share: u32,
}

impl Default for AnnualPassiveInputs {
    fn default() -> Self {
        Self {
            average_price: 500,
            resale_markup: 150,
            items_sold: 1000,
            royalty_rate: 10,
            resale_share: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalculatorInputs {
    CreatorLegacy(CreatorLegacyInputs),
    AnnualPassive(AnnualPassiveInputs),
}

impl CalculatorInputs {
    pub fn defaults(preset: CalculatorPreset) -> Self {
        match preset {
            CalculatorPreset::CreatorLegacy => CalculatorInputs::CreatorLegacy(Default::default()),
            CalculatorPreset::AnnualPassive => CalculatorInputs::AnnualPassive(Default::default()),
        }
    }

    pub fn preset(&self) -> CalculatorPreset {
        match self {
            CalculatorInputs::CreatorLegacy(_) => CalculatorPreset::CreatorLegacy,
            CalculatorInputs::AnnualPassive(_) => CalculatorPreset::AnnualPassive,
        }
    }

    fn slot(&mut self, slider: Slider) -> Option<&mut u32> {
        match self {
            CalculatorInputs::CreatorLegacy(inputs) => match slider {
                Slider::AveragePrice => Some(&mut inputs.average_price),
                Slider::ItemsSold => Some(&mut inputs.items_sold),
                Slider::LifetimeResales => Some(&mut inputs.lifetime_resales),
                Slider::ResaleMarkup => Some(&mut inputs.resale_markup),
                Slider::RoyaltyRate => Some(&mut inputs.royalty_rate),
                Slider::ResaleShare => None,
            },
            CalculatorInputs::AnnualPassive(inputs) => match slider {
                Slider::AveragePrice => Some(&mut inputs.average_price),
                Slider::ItemsSold => Some(&mut inputs.items_sold),
                Slider::ResaleMarkup => Some(&mut inputs.resale_markup),
                Slider::RoyaltyRate => Some(&mut inputs.royalty_rate),
                Slider::ResaleShare => Some(&mut inputs.resale_share),
                Slider::LifetimeResales => None,
            },
        }
    }

    /// Current value of `slider`, or `None` if this preset has no such slider.
    pub fn get(&self, slider: Slider) -> Option<u32> {
        match self {
            CalculatorInputs::CreatorLegacy(inputs) => match slider {
                Slider::AveragePrice => Some(inputs.average_price),
                Slider::ItemsSold => Some(inputs.items_sold),
                Slider::LifetimeResales => Some(inputs.lifetime_resales),
                Slider::ResaleMarkup => Some(inputs.resale_markup),
                Slider::RoyaltyRate => Some(inputs.royalty_rate),
                Slider::ResaleShare => None,
            },
            CalculatorInputs::AnnualPassive(inputs) => match slider {
                Slider::AveragePrice => Some(inputs.average_price),
                Slider::ItemsSold => Some(inputs.items_sold),
                Slider::ResaleMarkup => Some(inputs.resale_markup),
                Slider::RoyaltyRate => Some(inputs.royalty_rate),
                Slider::ResaleShare => Some(inputs.resale_share),
                Slider::LifetimeResales => None,
            },
        }
    }

    /// Stores a raw widget value, clamped to the preset's domain. Sliders the
    /// preset does not use are ignored.
    pub fn set(&mut self, slider: Slider, raw: u32) {
        let domain = self.preset().domain(slider);
        if let Some(value) = self.slot(slider) {
            *value = domain.clamp(raw);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CreatorLegacyOutputs {
    pub profit_per_resale: f64,
    pub total_resales: f64,
    pub total_market_profit: f64,
    pub total_royalty_generated: f64,
    pub creator_share: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnnualPassiveOutputs {
    pub resale_price: f64,
    pub profit_on_resale: f64,
    pub total_royalty_per_item: f64,
    pub brand_royalty_per_item: f64,
    pub number_of_resales: f64,
    pub total_annual_revenue: f64,
    pub resale_count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalculatorOutputs {
    CreatorLegacy(CreatorLegacyOutputs),
    AnnualPassive(AnnualPassiveOutputs),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Headline {
    pub label: &'static str,
    pub value: String,
    pub highlight: bool,
}

impl CalculatorOutputs {
    pub fn headlines(&self) -> Vec<Headline> {
        match self {
            CalculatorOutputs::CreatorLegacy(out) => vec![
                Headline {
                    label: "Total Reseller Profit",
                    value: format_currency(DISPLAY_CURRENCY, out.total_market_profit),
                    highlight: false,
                },
                Headline {
                    label: "Your Share with Faircut",
                    value: format_currency(DISPLAY_CURRENCY, out.creator_share),
                    highlight: true,
                },
            ],
            CalculatorOutputs::AnnualPassive(out) => vec![
                Headline {
                    label: "Resales per Year",
                    value: group_thousands(out.resale_count),
                    highlight: false,
                },
                Headline {
                    label: "Annual Passive Revenue",
                    value: format_currency(DISPLAY_CURRENCY, out.total_annual_revenue),
                    highlight: true,
                },
            ],
        }
    }
}

fn percent(value: u32) -> f64 {
    f64::from(value) / 100.0
}

pub fn compute_creator_legacy(inputs: &CreatorLegacyInputs) -> CreatorLegacyOutputs {
    if inputs.items_sold == 0 {
        return CreatorLegacyOutputs::default();
    }
    let profit_per_resale = f64::from(inputs.average_price) * percent(inputs.resale_markup);
    let total_resales = f64::from(inputs.items_sold) * f64::from(inputs.lifetime_resales);
    let total_market_profit = profit_per_resale * total_resales;
    let total_royalty_generated = total_market_profit * percent(inputs.royalty_rate);
    CreatorLegacyOutputs {
        profit_per_resale,
        total_resales,
        total_market_profit,
        total_royalty_generated,
        creator_share: total_royalty_generated * CREATOR_SHARE,
    }
}

pub fn compute_annual_passive(inputs: &AnnualPassiveInputs) -> AnnualPassiveOutputs {
    if inputs.items_sold == 0 {
        return AnnualPassiveOutputs::default();
    }
    let price = f64::from(inputs.average_price);
    let resale_price = price * (1.0 + percent(inputs.resale_markup));
    let profit_on_resale = (resale_price - price).max(0.0);
    let total_royalty_per_item = profit_on_resale * percent(inputs.royalty_rate);
    let brand_royalty_per_item = total_royalty_per_item * CREATOR_SHARE;
    let number_of_resales = f64::from(inputs.items_sold) * percent(inputs.resale_share);
    AnnualPassiveOutputs {
        resale_price,
        profit_on_resale,
        total_royalty_per_item,
        brand_royalty_per_item,
        number_of_resales,
        total_annual_revenue: brand_royalty_per_item * number_of_resales,
        resale_count: number_of_resales.round() as u64,
    }
}

pub fn compute(inputs: &CalculatorInputs) -> CalculatorOutputs {
    match inputs {
        CalculatorInputs::CreatorLegacy(inputs) => {
            CalculatorOutputs::CreatorLegacy(compute_creator_legacy(inputs))
        }
        CalculatorInputs::AnnualPassive(inputs) => {
            CalculatorOutputs::AnnualPassive(compute_annual_passive(inputs))
        }
    }
}

/// How one resale's markup divides between the reseller and the brand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResaleSplit {
    pub market_profit: f64,
    pub royalty: f64,
    pub reseller_profit: f64,
}

pub fn resale_split(retail_price: f64, resale_price: f64, royalty_rate: u32) -> ResaleSplit {
    let market_profit = (resale_price - retail_price).max(0.0);
    let royalty = market_profit * percent(royalty_rate);
    ResaleSplit {
        market_profit,
        royalty,
        reseller_profit: market_profit - royalty,
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole currency units with thousands separators, e.g. `$28,125`.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.abs() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn creator_legacy_reference_values() {
        let out = compute_creator_legacy(&CreatorLegacyInputs {
            average_price: 300,
            items_sold: 500,
            lifetime_resales: 2,
            resale_markup: 125,
            royalty_rate: 15,
        });
        assert!(close(out.profit_per_resale, 375.0));
        assert!(close(out.total_resales, 1000.0));
        assert!(close(out.total_market_profit, 375_000.0));
        assert!(close(out.total_royalty_generated, 56_250.0));
        assert!(close(out.creator_share, 28_125.0));
    }

    #[test]
    fn annual_passive_reference_values() {
        let out = compute_annual_passive(&AnnualPassiveInputs {
            average_price: 500,
            resale_markup: 150,
            items_sold: 1000,
            royalty_rate: 10,
            resale_share: 10,
        });
        assert!(close(out.resale_price, 1250.0));
        assert!(close(out.profit_on_resale, 750.0));
        assert!(close(out.total_royalty_per_item, 75.0));
        assert!(close(out.brand_royalty_per_item, 37.5));
        assert!(close(out.number_of_resales, 100.0));
        assert!(close(out.total_annual_revenue, 3750.0));
        assert_eq!(out.resale_count, 100);
    }

    #[test]
    fn zero_volume_yields_exact_zeroes() {
        for price in [50, 300, 5000] {
            let out = compute_creator_legacy(&CreatorLegacyInputs {
                average_price: price,
                items_sold: 0,
                lifetime_resales: 10,
                resale_markup: 300,
                royalty_rate: 25,
            });
            assert_eq!(out.total_market_profit, 0.0);
            assert_eq!(out.creator_share, 0.0);
        }

        let out = compute_annual_passive(&AnnualPassiveInputs {
            items_sold: 0,
            ..Default::default()
        });
        assert_eq!(out, AnnualPassiveOutputs::default());
    }

    #[test]
    fn no_markup_never_goes_negative() {
        let out = compute_annual_passive(&AnnualPassiveInputs {
            resale_markup: 0,
            ..Default::default()
        });
        assert_eq!(out.profit_on_resale, 0.0);
        assert_eq!(out.total_royalty_per_item, 0.0);
        assert_eq!(out.brand_royalty_per_item, 0.0);
        assert_eq!(out.total_annual_revenue, 0.0);
    }

    #[test]
    fn defaults_match_reference_headlines() {
        let legacy = compute(&CalculatorInputs::defaults(CalculatorPreset::CreatorLegacy));
        let values: Vec<_> = legacy.headlines().into_iter().map(|h| h.value).collect();
        assert_eq!(values, vec!["$375,000", "$28,125"]);

        let passive = compute(&CalculatorInputs::defaults(CalculatorPreset::AnnualPassive));
        let values: Vec<_> = passive.headlines().into_iter().map(|h| h.value).collect();
        assert_eq!(values, vec!["100", "$3,750"]);
    }

    #[test]
    fn set_clamps_and_snaps_to_domain() {
        let mut inputs = CalculatorInputs::defaults(CalculatorPreset::CreatorLegacy);
        inputs.set(Slider::AveragePrice, 20_000);
        assert_eq!(inputs.get(Slider::AveragePrice), Some(5000));
        inputs.set(Slider::AveragePrice, 10);
        assert_eq!(inputs.get(Slider::AveragePrice), Some(50));
        inputs.set(Slider::ResaleMarkup, 130);
        assert_eq!(inputs.get(Slider::ResaleMarkup), Some(125));
        inputs.set(Slider::ResaleMarkup, 140);
        assert_eq!(inputs.get(Slider::ResaleMarkup), Some(150));
        inputs.set(Slider::RoyaltyRate, 17);
        assert_eq!(inputs.get(Slider::RoyaltyRate), Some(17));
    }

    #[test]
    fn sliders_outside_preset_are_ignored() {
        let mut inputs = CalculatorInputs::defaults(CalculatorPreset::CreatorLegacy);
        let before = inputs;
        inputs.set(Slider::ResaleShare, 50);
        assert_eq!(inputs, before);
        assert_eq!(inputs.get(Slider::ResaleShare), None);

        let passive = CalculatorInputs::defaults(CalculatorPreset::AnnualPassive);
        assert_eq!(passive.get(Slider::LifetimeResales), None);
    }

    #[test]
    fn get_reads_each_field_without_touching_others() {
        let inputs = CalculatorInputs::AnnualPassive(AnnualPassiveInputs {
            average_price: 700,
            resale_markup: 75,
            items_sold: 40,
            royalty_rate: 12,
            resale_share: 35,
        });
        assert_eq!(inputs.get(Slider::AveragePrice), Some(700));
        assert_eq!(inputs.get(Slider::ResaleMarkup), Some(75));
        assert_eq!(inputs.get(Slider::ItemsSold), Some(40));
        assert_eq!(inputs.get(Slider::RoyaltyRate), Some(12));
        assert_eq!(inputs.get(Slider::ResaleShare), Some(35));

        let mut legacy = CalculatorInputs::defaults(CalculatorPreset::CreatorLegacy);
        legacy.set(Slider::LifetimeResales, 4);
        assert_eq!(legacy.get(Slider::LifetimeResales), Some(4));
        assert_eq!(legacy.get(Slider::ItemsSold), Some(500));
    }

    #[test]
    fn every_preset_slider_has_a_value_and_default_in_domain() {
        for preset in [CalculatorPreset::CreatorLegacy, CalculatorPreset::AnnualPassive] {
            let inputs = CalculatorInputs::defaults(preset);
            for &slider in preset.sliders() {
                let value = inputs.get(slider).unwrap();
                let domain = preset.domain(slider);
                assert_eq!(domain.clamp(value), value, "{:?} default off-grid", slider);
            }
        }
    }

    #[test]
    fn annual_passive_allows_zero_markup_slider() {
        let mut inputs = CalculatorInputs::defaults(CalculatorPreset::AnnualPassive);
        inputs.set(Slider::ResaleMarkup, 0);
        assert_eq!(inputs.get(Slider::ResaleMarkup), Some(0));
        match compute(&inputs) {
            CalculatorOutputs::AnnualPassive(out) => assert_eq!(out.total_annual_revenue, 0.0),
            other => panic!("unexpected outputs {:?}", other),
        }
    }

    #[test]
    fn resale_split_matches_strategy_figures() {
        let flipper = resale_split(3000.0, 6500.0, 0);
        assert!(close(flipper.market_profit, 3500.0));
        assert!(close(flipper.royalty, 0.0));

        let with_royalty = resale_split(3000.0, 6500.0, 30);
        assert!(close(with_royalty.royalty, 1050.0));
        assert!(close(with_royalty.reseller_profit, 2450.0));

        let underwater = resale_split(3000.0, 2500.0, 30);
        assert_eq!(underwater.market_profit, 0.0);
        assert_eq!(underwater.reseller_profit, 0.0);
    }

    #[test]
    fn currency_rounds_and_groups() {
        assert_eq!(format_currency("$", 28_125.000_000_4), "$28,125");
        assert_eq!(format_currency("$", 999.5), "$1,000");
        assert_eq!(format_currency("$", 0.0), "$0");
        assert_eq!(format_currency("CHF ", 3500.0), "CHF 3,500");
        assert_eq!(format_currency("$", 1_234_567.0), "$1,234,567");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
    }

    #[test]
    fn slider_values_render_with_units() {
        assert_eq!(Slider::AveragePrice.format_value(300), "$300");
        assert_eq!(Slider::ItemsSold.format_value(10000), "10,000");
        assert_eq!(Slider::RoyaltyRate.format_value(15), "15%");
        assert_eq!(Slider::LifetimeResales.format_value(2), "2x");
    }
}
