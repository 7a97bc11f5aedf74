#![forbid(unsafe_code)]

use peopledesk_kernel_contracts::dashboard::{
    ActivityEntry, StatCard, TeamHeadcount, DASHBOARD_STATS, RECENT_ACTIVITY, TEAM_DISTRIBUTION,
};

use crate::session::SessionContext;

pub const REGISTRATION_TITLE: &str = "Employee Registration";
pub const REGISTRATION_BADGE: &str = "Coming Soon";
pub const REGISTRATION_BODY: &str =
    "This feature will be available once connected to a backend system.";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DashboardView {
    pub greeting: String,
    pub stats: &'static [StatCard],
    pub teams: &'static [TeamHeadcount],
    pub activity: &'static [ActivityEntry],
}

impl DashboardView {
    pub fn team_total(&self) -> u32 {
        self.teams.iter().map(|t| t.headcount).sum()
    }
}

pub fn dashboard_view(session: &SessionContext) -> DashboardView {
    let greeting = match session.display_name() {
        Some(name) => format!("Welcome back, {name}! Here's your team's performance at a glance."),
        None => "Welcome back! Here's your team's performance at a glance.".to_string(),
    };
    DashboardView {
        greeting,
        stats: DASHBOARD_STATS,
        teams: TEAM_DISTRIBUTION,
        activity: RECENT_ACTIVITY,
    }
}
