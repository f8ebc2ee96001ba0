use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::domain::BitcoinKpis;
use crate::models::market_table::Trend;
use crate::utils::{
    dollars, format_local_timestamp, format_market_cap, format_percent, format_price,
};

/// Labelled slots of the Bitcoin KPI panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum KpiSlot {
    Price,
    Change24h,
    MarketCap,
    Volume24h,
    Dominance,
    CirculatingSupply,
    MaxSupply,
    Ath,
    FromAth,
    High24h,
    Low24h,
    LastUpdated,
}

impl KpiSlot {
    pub fn id(&self) -> &'static str {
        match self {
            KpiSlot::Price => "kpi-price",
            KpiSlot::Change24h => "kpi-change",
            KpiSlot::MarketCap => "kpi-mcap",
            KpiSlot::Volume24h => "kpi-vol",
            KpiSlot::Dominance => "kpi-dom",
            KpiSlot::CirculatingSupply => "kpi-supply",
            KpiSlot::MaxSupply => "kpi-max-supply",
            KpiSlot::Ath => "kpi-ath",
            KpiSlot::FromAth => "kpi-from-ath",
            KpiSlot::High24h => "kpi-high-24h",
            KpiSlot::Low24h => "kpi-low-24h",
            KpiSlot::LastUpdated => "kpi-last-updated",
        }
    }

    /// Slots whose value is coloured by sign.
    pub fn is_signed(&self) -> bool {
        matches!(self, KpiSlot::Change24h | KpiSlot::FromAth)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiValue {
    pub slot: KpiSlot,
    pub text: String,
    pub trend: Trend,
}

/// Display-ready KPI values, one per slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KpiPanel {
    values: Vec<KpiValue>,
}

impl KpiPanel {
    pub fn from_kpis(kpis: &BitcoinKpis) -> Self {
        let values = KpiSlot::iter()
            .map(|slot| {
                let (text, raw) = match slot {
                    KpiSlot::Price => (dollars(format_price(kpis.price)), None),
                    KpiSlot::Change24h => (format_percent(kpis.change_24h), kpis.change_24h),
                    KpiSlot::MarketCap => (dollars(format_market_cap(kpis.market_cap)), None),
                    KpiSlot::Volume24h => (dollars(format_market_cap(kpis.volume_24h)), None),
                    KpiSlot::Dominance => (format_percent(kpis.dominance), None),
                    KpiSlot::CirculatingSupply => (format_market_cap(kpis.circulating_supply), None),
                    KpiSlot::MaxSupply => (format_market_cap(kpis.max_supply), None),
                    KpiSlot::Ath => (dollars(format_price(kpis.ath)), None),
                    KpiSlot::FromAth => (format_percent(kpis.from_ath_pct), kpis.from_ath_pct),
                    KpiSlot::High24h => (dollars(format_price(kpis.high_24h)), None),
                    KpiSlot::Low24h => (dollars(format_price(kpis.low_24h)), None),
                    KpiSlot::LastUpdated => {
                        (format_local_timestamp(kpis.last_updated.as_deref()), None)
                    }
                };
                let trend = if slot.is_signed() {
                    Trend::of(raw)
                } else {
                    Trend::Flat
                };
                KpiValue { slot, text, trend }
            })
            .collect();
        Self { values }
    }

    pub fn values(&self) -> &[KpiValue] {
        &self.values
    }

    pub fn get(&self, slot: KpiSlot) -> Option<&KpiValue> {
        self.values.iter().find(|value| value.slot == slot)
    }

    pub fn text(&self, slot: KpiSlot) -> &str {
        self.get(slot).map(|value| value.text.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::PLACEHOLDER;

    fn sample() -> BitcoinKpis {
        BitcoinKpis {
            price: Some(104_321.77),
            change_24h: Some(-1.234),
            market_cap: Some(2_070_000_000_000.0),
            volume_24h: Some(35_500_000_000.4),
            dominance: Some(61.5),
            circulating_supply: Some(19_876_543.0),
            max_supply: Some(21_000_000.0),
            ath: Some(111_970.0),
            from_ath_pct: Some(-6.83),
            high_24h: Some(105_000.0),
            low_24h: Some(103_250.5),
            last_updated: None,
        }
    }

    #[test]
    fn every_slot_is_filled_once() {
        let panel = KpiPanel::from_kpis(&sample());
        assert_eq!(panel.values().len(), KpiSlot::iter().count());
        assert_eq!(panel.values()[0].slot, KpiSlot::Price);
    }

    #[test]
    fn slots_are_formatted() {
        let panel = KpiPanel::from_kpis(&sample());
        assert_eq!(panel.text(KpiSlot::Price), "$104,322");
        assert_eq!(panel.text(KpiSlot::Change24h), "-1.23%");
        assert_eq!(panel.text(KpiSlot::MarketCap), "$2,070,000,000,000");
        assert_eq!(panel.text(KpiSlot::Dominance), "61.50%");
        assert_eq!(panel.text(KpiSlot::MaxSupply), "21,000,000");
        assert_eq!(panel.text(KpiSlot::Ath), "$111,970");
    }

    #[test]
    fn signed_slots_carry_trend() {
        let panel = KpiPanel::from_kpis(&sample());
        assert_eq!(panel.get(KpiSlot::Change24h).map(|v| v.trend), Some(Trend::Negative));
        assert_eq!(panel.get(KpiSlot::FromAth).map(|v| v.trend), Some(Trend::Negative));
        assert_eq!(panel.get(KpiSlot::Price).map(|v| v.trend), Some(Trend::Flat));
    }

    #[test]
    fn missing_values_render_placeholder_and_blank_timestamp() {
        let panel = KpiPanel::from_kpis(&BitcoinKpis::default());
        assert_eq!(panel.text(KpiSlot::Price), PLACEHOLDER);
        assert_eq!(panel.text(KpiSlot::Ath), PLACEHOLDER);
        assert_eq!(panel.text(KpiSlot::CirculatingSupply), PLACEHOLDER);
        assert_eq!(panel.text(KpiSlot::LastUpdated), "");
    }

    #[test]
    fn slot_ids_are_stable() {
        assert_eq!(KpiSlot::Change24h.id(), "kpi-change");
        assert_eq!(KpiSlot::MaxSupply.id(), "kpi-max-supply");
        assert_eq!(KpiSlot::LastUpdated.id(), "kpi-last-updated");
    }
}
