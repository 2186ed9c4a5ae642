/// One summary tile on the dashboard. Values are display strings, nothing is computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const SUMMARY_METRICS: [Metric; 3] = [
    Metric {
        label: "Total Bookings",
        value: "24",
        icon: "📅",
        accent: "bg-blue-500",
    },
    Metric {
        label: "Active Customers",
        value: "156",
        icon: "👥",
        accent: "bg-green-500",
    },
    Metric {
        label: "Revenue",
        value: "$12,450",
        icon: "💰",
        accent: "bg-yellow-500",
    },
];
