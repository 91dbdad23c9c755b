//! Key-metric cards shown on the Dashboard page.

/// How urgently a metric needs attention; drives card accent and tag text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Attention,
    Critical,
}

impl Tone {
    pub fn title(&self) -> &'static str {
        match self {
            Tone::Ok => "ok",
            Tone::Attention => "attention",
            Tone::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

/// The portal's key metrics. Concept data, fixed for the process lifetime.
pub fn portal_metrics() -> Vec<Metric> {
    vec![
        Metric {
            title: "Active Assets",
            value: "128",
            description: "Equipment currently operating normally",
            tone: Tone::Ok,
        },
        Metric {
            title: "Service Alerts",
            value: "3",
            description: "Some require immediate attention",
            tone: Tone::Attention,
        },
        Metric {
            title: "Assets in Critical State",
            value: "1",
            description: "Some equipment requiring immediate action",
            tone: Tone::Critical,
        },
        Metric {
            title: "Energy Consumption",
            value: "1.24 MWh",
            description: "Total consumption in the last 24 hours",
            tone: Tone::Ok,
        },
        Metric {
            title: "System Status",
            value: "Operational",
            description: "All platform services operational",
            tone: Tone::Ok,
        },
    ]
}

/// Hourly consumption over the last day, kWh. Backs the dashboard sparkline.
pub fn consumption_series() -> [u64; 24] {
    [
        38, 35, 33, 31, 30, 32, 41, 55, 62, 66, 64, 61, 60, 63, 65, 68, 72, 70, 66, 58, 52, 47,
        43, 40,
    ]
}
