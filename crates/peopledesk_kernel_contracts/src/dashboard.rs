#![forbid(unsafe_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u32,
    pub description: &'static str,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TeamHeadcount {
    pub team: &'static str,
    pub headcount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ActivityEntry {
    pub when: &'static str,
    pub summary: &'static str,
}

pub const DASHBOARD_STATS: &[StatCard] = &[
    StatCard {
        title: "Total Employees",
        value: 147,
        description: "Active employees",
        trend: "+12 this month",
    },
    StatCard {
        title: "Certifications",
        value: 89,
        description: "Total certifications earned",
        trend: "+7 this month",
    },
    StatCard {
        title: "Roll On (This Month)",
        value: 23,
        description: "New joiners",
        trend: "+5 from last month",
    },
    StatCard {
        title: "Roll Off (This Month)",
        value: 8,
        description: "Departures",
        trend: "-2 from last month",
    },
];

pub const TEAM_DISTRIBUTION: &[TeamHeadcount] = &[
    TeamHeadcount {
        team: "Development",
        headcount: 45,
    },
    TeamHeadcount {
        team: "QA",
        headcount: 28,
    },
    TeamHeadcount {
        team: "DevOps",
        headcount: 15,
    },
    TeamHeadcount {
        team: "Design",
        headcount: 12,
    },
    TeamHeadcount {
        team: "Management",
        headcount: 18,
    },
    TeamHeadcount {
        team: "Support",
        headcount: 29,
    },
];

pub const RECENT_ACTIVITY: &[ActivityEntry] = &[
    ActivityEntry {
        when: "Today",
        summary: "3 new certifications added",
    },
    ActivityEntry {
        when: "Yesterday",
        summary: "2 employees joined Development team",
    },
    ActivityEntry {
        when: "This week",
        summary: "5 training sessions completed",
    },
    ActivityEntry {
        when: "This month",
        summary: "23 new employee registrations",
    },
];
