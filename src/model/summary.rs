//! Read-only review of a draft, shown before the station is submitted.

use super::draft::{ConnectionType, StationDraft};

pub const SUPPORT_EMAIL: &str = "support@chargefox.com";

/// The "Important information" notes shown under the summary.
pub static REVIEW_NOTES: &[&str] = &[
    "Once submitted, you cannot edit your station while it is in review.",
    "Station reviews typically take 1-3 business days.",
];

const NOT_AVAILABLE: &str = "N/A";

/// A titled group of `label: value` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBlock {
    pub heading: String,
    pub lines: Vec<(&'static str, String)>,
}

impl SummaryBlock {
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    fn line(&mut self, label: &'static str, value: impl Into<String>) {
        self.lines.push((label, value.into()));
    }

    /// Looks up the value of the first line with `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Review summary: one block per section, plus one per connector once the
/// station is connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub blocks: Vec<SummaryBlock>,
}

fn or_na(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Blank or zero means free charging.
fn base_price(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value.parse::<f64>().is_ok_and(|n| n == 0.0) {
        "Free".to_string()
    } else {
        format!("${value}")
    }
}

impl ReviewSummary {
    pub fn from_draft(draft: &StationDraft) -> Self {
        let mut blocks = Vec::new();

        let details = &draft.station_details;
        let mut block = SummaryBlock::new("Station Details");
        block.line(
            "Visibility",
            details.visibility.map_or(NOT_AVAILABLE, |v| v.label()),
        );
        block.line("Location Name", or_na(&details.location_name));
        block.line("Address", or_na(&details.location_address));
        block.line(
            "Coordinates",
            format!(
                "{}, {}",
                or_na(&details.latitude),
                or_na(&details.longitude)
            ),
        );
        if !details.directions.trim().is_empty() {
            block.line("Directions", details.directions.trim());
        }
        blocks.push(block);

        let stickers = &draft.stickers_labels;
        let mut block = SummaryBlock::new("Stickers & Labels");
        block.line(
            "Applied",
            stickers
                .stickers_applied
                .map_or(NOT_AVAILABLE, |s| s.label()),
        );
        block.line("Station Number", or_na(&stickers.station_number));
        blocks.push(block);

        let network = &draft.network_communication;
        let mut block = SummaryBlock::new("Network Communication");
        block.line(
            "Connection Type",
            network.connection_type.map_or(NOT_AVAILABLE, |c| c.label()),
        );
        if network.connection_type == Some(ConnectionType::SimChargefox) {
            block.line("SIM ICCID", or_na(&network.sim_card_iccid));
        } else if !network.provider.trim().is_empty() {
            block.line("Provider", network.provider.trim());
        }
        blocks.push(block);

        let pricing = &draft.pricing;
        let mut block = SummaryBlock::new("Pricing");
        block.line(
            "Base Price per kWh",
            base_price(&pricing.base_price_per_kwh),
        );
        if pricing.add_free_period {
            block.line(
                "Free Period",
                format!("{} minutes", or_na(&pricing.free_minutes)),
            );
        }
        if pricing.add_peak_pricing {
            block.line(
                "Peak Pricing",
                format!(
                    "${} ({} - {})",
                    or_na(&pricing.peak_price_per_kwh),
                    or_na(&pricing.peak_start_time),
                    or_na(&pricing.peak_end_time)
                ),
            );
        }
        blocks.push(block);

        let conn = &draft.connect_to_chargefox;
        let mut block = SummaryBlock::new("Chargefox Connection");
        block.line("OCPP ID", or_na(&conn.ocpp_id));
        block.line(
            "Connection Status",
            if conn.connected {
                "Connected"
            } else {
                "Not Connected"
            },
        );
        blocks.push(block);

        if conn.connected {
            let hw = &draft.hardware_details;
            let mut block = SummaryBlock::new("Hardware Details");
            block.line("Make", or_na(&hw.make));
            block.line("Model", or_na(&hw.model));
            block.line("Power", format!("{} kW", or_na(&hw.power_rating)));
            block.line("Using LMS", yes_no(hw.using_lms));
            blocks.push(block);

            for (i, connector) in hw.connectors.iter().enumerate() {
                let mut block = SummaryBlock::new(format!("Connector {}", i + 1));
                block.line(
                    "Port Name",
                    connector.port_name.map_or(NOT_AVAILABLE, |p| p.label()),
                );
                block.line(
                    "Plug Type",
                    connector.plug_type.map_or(NOT_AVAILABLE, |p| p.label()),
                );
                block.line("Drivers Bring Cable", yes_no(connector.drivers_bring_cable));
                blocks.push(block);
            }
        }

        Self { blocks }
    }

    /// Finds a block by heading.
    pub fn block(&self, heading: &str) -> Option<&SummaryBlock> {
        self.blocks.iter().find(|b| b.heading == heading)
    }
}
