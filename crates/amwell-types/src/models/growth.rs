//! Growth summary returned by `/admin/combinedGrowth` and the dashboard
//! statistics derived from it.

use serde::{Deserialize, Deserializer, Serialize};

/// One bucket of the weekly time series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPoint {
    /// Display label, e.g. "Week 1"
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub doctors: u64,
}

/// Time-windowed growth summary for the requested number of months.
///
/// The backend serializes the percentage deltas inconsistently (number or
/// numeric string), so those fields go through a coercing deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummary {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_approved_doctors: u64,
    #[serde(default)]
    pub total_pending_doctors: u64,
    #[serde(default)]
    pub total_rejected_doctors: u64,
    #[serde(default)]
    pub monthly_revenue: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub user_growth_percentage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub doctor_growth_percentage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pending_growth_percentage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_growth_percent: f64,

    #[serde(default)]
    pub weekly_growth: Vec<WeeklyPoint>,
}

/// Accept a float, an integer, or a numeric string; anything else is 0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(value)) => value,
        Some(NumberOrString::Text(text)) => text.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

/// The four KPI cards on the dashboard, derived from a growth summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_doctors: u64,
    pub pending_approvals: u64,
    pub monthly_revenue: f64,
    pub user_growth: f64,
    pub doctor_growth: f64,
    pub pending_growth: f64,
    pub revenue_growth: f64,
}

impl DashboardStats {
    /// Calculate card values from a growth summary.
    pub fn from_growth(growth: &GrowthSummary) -> Self {
        Self {
            total_users: growth.total_users,
            active_doctors: growth.total_approved_doctors,
            pending_approvals: growth.total_pending_doctors,
            monthly_revenue: growth.monthly_revenue,
            user_growth: growth.user_growth_percentage,
            doctor_growth: growth.doctor_growth_percentage,
            pending_growth: growth.pending_growth_percentage,
            revenue_growth: growth.revenue_growth_percent,
        }
    }
}

impl GrowthSummary {
    /// (label, count) triples for the doctor approval status donut.
    pub fn doctor_status_breakdown(&self) -> [(&'static str, u64); 3] {
        [
            ("Approved", self.total_approved_doctors),
            ("Pending", self.total_pending_doctors),
            ("Rejected", self.total_rejected_doctors),
        ]
    }

    /// Whether there is anything worth charting.
    pub fn has_weekly_data(&self) -> bool {
        self.weekly_growth.iter().any(|week| week.users > 0 || week.doctors > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_accept_numbers_and_strings() {
        let growth: GrowthSummary = serde_json::from_str(
            r#"{
                "totalUsers": 320,
                "totalApprovedDoctors": 41,
                "userGrowthPercentage": "12.5",
                "doctorGrowthPercentage": 4,
                "revenueGrowthPercent": "oops"
            }"#,
        )
        .unwrap();

        assert_eq!(growth.user_growth_percentage, 12.5);
        assert_eq!(growth.doctor_growth_percentage, 4.0);
        assert_eq!(growth.revenue_growth_percent, 0.0);
    }

    #[test]
    fn test_dashboard_stats_from_growth() {
        let growth = GrowthSummary {
            total_users: 320,
            total_approved_doctors: 41,
            total_pending_doctors: 7,
            monthly_revenue: 1250.0,
            user_growth_percentage: 12.5,
            ..Default::default()
        };

        let stats = DashboardStats::from_growth(&growth);
        assert_eq!(stats.total_users, 320);
        assert_eq!(stats.active_doctors, 41);
        assert_eq!(stats.pending_approvals, 7);
        assert_eq!(stats.user_growth, 12.5);
    }

    #[test]
    fn test_doctor_status_breakdown_order() {
        let growth = GrowthSummary {
            total_approved_doctors: 10,
            total_pending_doctors: 3,
            total_rejected_doctors: 1,
            ..Default::default()
        };

        let breakdown = growth.doctor_status_breakdown();
        assert_eq!(breakdown[0], ("Approved", 10));
        assert_eq!(breakdown[1], ("Pending", 3));
        assert_eq!(breakdown[2], ("Rejected", 1));
    }

    #[test]
    fn test_weekly_data_detection() {
        let mut growth = GrowthSummary::default();
        assert!(!growth.has_weekly_data());

        growth.weekly_growth =
            vec![WeeklyPoint { label: "Week 1".into(), users: 5, doctors: 0 }];
        assert!(growth.has_weekly_data());
    }
}
