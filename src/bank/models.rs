use serde::{Deserialize, Serialize};

use crate::utils::format_usd;

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: u32,
    pub name: String,
    /// Display string, never parsed.
    pub date: String,
    pub amount: f64,
    /// Avatar seed.
    pub icon: String,
    pub card: Option<String>,
}

impl TransactionRecord {
    pub fn amount_label(&self) -> String {
        format_usd(self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub is_positive: bool,
}

impl Trend {
    pub fn label(&self) -> String {
        let sign = if self.is_positive { '+' } else { '-' };
        format!("{sign}{}%", self.value.abs())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardData {
    pub title: String,
    pub value: String,
    pub icon: &'static str,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Area,
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardInfo {
    pub number: String,
    pub holder: String,
    pub expires: String,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub heading: String,
    pub stats: Vec<StatCardData>,
    pub charts: Vec<ChartSpec>,
    pub transactions: Vec<TransactionRecord>,
    pub card: Option<CardInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardVariant {
    #[default]
    Overview,
    Statistics,
    Wallet,
    Transfers,
    Spending,
}

impl DashboardVariant {
    pub const ALL: [DashboardVariant; 5] = [
        DashboardVariant::Overview,
        DashboardVariant::Statistics,
        DashboardVariant::Wallet,
        DashboardVariant::Transfers,
        DashboardVariant::Spending,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DashboardVariant::Overview => "Dashboard",
            DashboardVariant::Statistics => "Statistics",
            DashboardVariant::Wallet => "Wallet",
            DashboardVariant::Transfers => "Transfers",
            DashboardVariant::Spending => "Spending",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            DashboardVariant::Overview => "go-home-symbolic",
            DashboardVariant::Statistics => "view-grid-symbolic",
            DashboardVariant::Wallet => "wallet-symbolic",
            DashboardVariant::Transfers => "send-to-symbolic",
            DashboardVariant::Spending => "emblem-documents-symbolic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_sign_comes_from_flag() {
        assert_eq!(Trend { value: 12.0, is_positive: true }.label(), "+12%");
        assert_eq!(Trend { value: 8.0, is_positive: false }.label(), "-8%");
        assert_eq!(Trend { value: -8.0, is_positive: false }.label(), "-8%");
        assert_eq!(Trend { value: -2.5, is_positive: true }.label(), "+2.5%");
    }

    #[test]
    fn variant_names_round_trip_through_toml_strings() {
        #[derive(Deserialize)]
        struct Wrap {
            v: DashboardVariant,
        }
        let w: Wrap = toml::from_str("v = \"wallet\"").unwrap();
        assert_eq!(w.v, DashboardVariant::Wallet);
    }
}
