//! Literal datasets behind each dashboard layout.

use super::models::{
    CardInfo, ChartKind, ChartSpec, DashboardData, DashboardVariant, DataPoint, StatCardData,
    TransactionRecord, Trend,
};
use crate::utils::format_usd_whole;

const BALANCE: f64 = 6480.0;

fn stat(title: &str, value: &str, icon: &'static str, trend: Option<(f64, bool)>) -> StatCardData {
    StatCardData {
        title: title.to_string(),
        value: value.to_string(),
        icon,
        trend: trend.map(|(value, is_positive)| Trend { value, is_positive }),
    }
}

fn tx(id: u32, name: &str, date: &str, amount: f64, icon: &str, card: Option<&str>) -> TransactionRecord {
    TransactionRecord {
        id,
        name: name.to_string(),
        date: date.to_string(),
        amount,
        icon: icon.to_string(),
        card: card.map(str::to_string),
    }
}

fn series(title: &str, kind: ChartKind, points: &[(&str, f64)]) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        kind,
        points: points
            .iter()
            .map(|(category, amount)| DataPoint { category: category.to_string(), amount: *amount })
            .collect(),
    }
}

fn primary_card() -> CardInfo {
    CardInfo {
        number: "4568 8456 9874 2468".into(),
        holder: "Alex Smith".into(),
        expires: "05/25".into(),
        balance: BALANCE,
    }
}

fn weekly_spending() -> ChartSpec {
    series(
        "Spending Overview",
        ChartKind::Area,
        &[
            ("Mon", 120.0),
            ("Tue", 200.0),
            ("Wed", 150.0),
            ("Thu", 300.0),
            ("Fri", 250.0),
            ("Sat", 180.0),
            ("Sun", 220.0),
        ],
    )
}

fn recent_transactions() -> Vec<TransactionRecord> {
    vec![
        tx(1, "Dribbble Pro", "Apr 18, 2024", 60.00, "dribbble", None),
        tx(2, "Apple Pro", "Apr 18, 2024", 26.00, "apple", None),
        tx(3, "Pizza Hub", "Apr 18, 2024", 36.00, "pizza", None),
    ]
}

fn headline_stats() -> Vec<StatCardData> {
    vec![
        stat("Total Balance", &format_usd_whole(BALANCE), "wallet-symbolic", Some((12.0, true))),
        stat("Monthly Spending", "$2,460", "money-symbolic", Some((8.0, false))),
        stat("Active Cards", "3", "credit-card-symbolic", None),
    ]
}

pub fn dataset(variant: DashboardVariant) -> DashboardData {
    match variant {
        DashboardVariant::Overview => DashboardData {
            heading: "Welcome back, Alex".into(),
            stats: headline_stats(),
            charts: vec![weekly_spending()],
            transactions: recent_transactions(),
            card: None,
        },
        DashboardVariant::Statistics => DashboardData {
            heading: "Statistics".into(),
            stats: vec![
                stat("Income", "$8,250", "go-up-symbolic", Some((4.5, true))),
                stat("Expenses", "$2,460", "go-down-symbolic", Some((8.0, false))),
                stat("Savings Rate", "70%", "starred-symbolic", Some((3.0, true))),
            ],
            charts: vec![
                series(
                    "Monthly Expenses",
                    ChartKind::Bar,
                    &[
                        ("Jan", 2100.0),
                        ("Feb", 1850.0),
                        ("Mar", 2300.0),
                        ("Apr", 2460.0),
                        ("May", 1980.0),
                        ("Jun", 2240.0),
                    ],
                ),
                series(
                    "Spending by Category",
                    ChartKind::Pie,
                    &[
                        ("Shopping", 840.0),
                        ("Food", 620.0),
                        ("Bills", 540.0),
                        ("Entertainment", 260.0),
                        ("Other", 200.0),
                    ],
                ),
            ],
            transactions: recent_transactions(),
            card: None,
        },
        DashboardVariant::Wallet => DashboardData {
            heading: "My Cards".into(),
            stats: vec![
                stat("Card Balance", &format_usd_whole(BALANCE), "wallet-symbolic", Some((12.0, true))),
                stat("Credit Limit", "$10,000", "credit-card-symbolic", None),
            ],
            charts: vec![weekly_spending()],
            transactions: vec![
                tx(1, "Netflix", "Apr 17, 2024", 15.99, "netflix", Some("Visa •••• 2468")),
                tx(2, "Uber", "Apr 16, 2024", 24.50, "uber", Some("Visa •••• 2468")),
                tx(3, "Starbucks", "Apr 16, 2024", 6.75, "starbucks", Some("Mastercard •••• 1190")),
                tx(4, "Amazon", "Apr 15, 2024", 89.99, "amazon", Some("Visa •••• 2468")),
            ],
            card: Some(primary_card()),
        },
        DashboardVariant::Transfers => DashboardData {
            heading: "Transfers".into(),
            stats: vec![
                stat("Sent This Month", "$1,250", "send-to-symbolic", Some((5.0, false))),
                stat("Received This Month", "$3,400", "mail-inbox-symbolic", Some((9.0, true))),
                stat("Favorites", "2", "starred-symbolic", None),
            ],
            charts: vec![series(
                "Transfers per Week",
                ChartKind::Bar,
                &[("W1", 300.0), ("W2", 450.0), ("W3", 200.0), ("W4", 300.0)],
            )],
            transactions: vec![
                tx(1, "John Doe", "Apr 18, 2024", 250.00, "JD", Some("Transfer")),
                tx(2, "Jane Smith", "Apr 12, 2024", 500.00, "JS", Some("Transfer")),
                tx(3, "John Doe", "Apr 03, 2024", 500.00, "JD", Some("Transfer")),
            ],
            card: None,
        },
        DashboardVariant::Spending => DashboardData {
            heading: "Spending".into(),
            stats: vec![
                stat("Monthly Spending", "$2,460", "money-symbolic", Some((8.0, false))),
                stat("Daily Average", "$82", "x-office-calendar-symbolic", Some((2.0, false))),
            ],
            charts: vec![
                weekly_spending(),
                series(
                    "Where It Went",
                    ChartKind::Pie,
                    &[("Subscriptions", 86.0), ("Food", 36.0), ("Tech", 26.0)],
                ),
            ],
            transactions: recent_transactions(),
            card: Some(primary_card()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_matches_reference_layout() {
        let data = dataset(DashboardVariant::Overview);
        assert_eq!(data.stats[0].value, "$6,480");
        assert_eq!(data.stats[0].trend.unwrap().label(), "+12%");
        assert_eq!(data.stats[1].trend.unwrap().label(), "-8%");
        assert!(data.stats[2].trend.is_none());
        let amounts: Vec<f64> = data.charts[0].points.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, [120.0, 200.0, 150.0, 300.0, 250.0, 180.0, 220.0]);
        let names: Vec<&str> = data.transactions.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Dribbble Pro", "Apple Pro", "Pizza Hub"]);
    }

    #[test]
    fn every_variant_has_content() {
        for variant in DashboardVariant::ALL {
            let data = dataset(variant);
            assert!(!data.stats.is_empty(), "{variant:?}");
            assert!(!data.charts.is_empty(), "{variant:?}");
            assert!(!data.transactions.is_empty(), "{variant:?}");
        }
    }

    #[test]
    fn transaction_ids_are_unique_per_variant() {
        for variant in DashboardVariant::ALL {
            let mut ids: Vec<u32> = dataset(variant).transactions.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), dataset(variant).transactions.len());
        }
    }
}
