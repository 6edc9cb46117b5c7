//! Per-section completion rules and the aggregate submission flag.

use super::draft::{ConnectionStatus, ConnectionType, StationDraft};
use super::field::FieldId;
use super::section::Section;

/// Completion dependencies: `(section, dependency)` means `section` cannot be
/// complete until `dependency` is.
///
/// Hardware is only *unlocked by* the connection section (see
/// [`Section::unlocked_by`]); its completion rule handles the gate itself, so
/// no section declares a completion dependency today.
static COMPLETION_DEPENDENCIES: &[(Section, Section)] = &[];

/// Returns `true` if every answer the section needs is present.
///
/// Pure: depends only on the draft, and is safe to call on every mutation.
pub fn is_complete(section: Section, draft: &StationDraft) -> bool {
    is_complete_with(section, draft, COMPLETION_DEPENDENCIES)
}

fn is_complete_with(
    section: Section,
    draft: &StationDraft,
    dependencies: &[(Section, Section)],
) -> bool {
    if let Some(&(_, dependency)) = dependencies.iter().find(|(s, _)| *s == section)
        && (dependency == section || !is_complete_with(dependency, draft, dependencies))
    {
        return false;
    }

    match section {
        Section::ConnectToChargefox => {
            draft.connect_to_chargefox.status == ConnectionStatus::Success
        }
        Section::NetworkCommunication => network_complete(draft),
        Section::Pricing => pricing_complete(draft),
        Section::HardwareDetails => hardware_complete(draft),
        Section::VisibilityLocation | Section::StickersLabels => {
            required_present(section.required_fields(), draft)
        }
    }
}

fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn required_present(fields: &[FieldId], draft: &StationDraft) -> bool {
    fields.iter().all(|f| !f.is_blank(draft))
}

fn network_complete(draft: &StationDraft) -> bool {
    let network = &draft.network_communication;
    match network.connection_type {
        None => false,
        Some(ConnectionType::SimChargefox) => not_blank(&network.sim_card_iccid),
        Some(_) => true,
    }
}

fn pricing_complete(draft: &StationDraft) -> bool {
    let pricing = &draft.pricing;
    if !not_blank(&pricing.base_price_per_kwh) {
        return false;
    }
    if pricing.add_free_period && !not_blank(&pricing.free_minutes) {
        return false;
    }
    if pricing.add_peak_pricing
        && [
            &pricing.peak_start_time,
            &pricing.peak_end_time,
            &pricing.peak_price_per_kwh,
        ]
        .iter()
        .any(|v| !not_blank(v))
    {
        return false;
    }
    true
}

/// Hardware is vacuously complete until the station has connected.
fn hardware_complete(draft: &StationDraft) -> bool {
    if !draft.connect_to_chargefox.connected {
        return true;
    }
    let hw = &draft.hardware_details;
    not_blank(&hw.make)
        && not_blank(&hw.model)
        && not_blank(&hw.power_rating)
        && hw
            .connectors
            .iter()
            .all(|c| c.port_name.is_some() && c.plug_type.is_some())
}

/// Completion flags for all six sections, recomputed from a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionStatuses {
    completed: [bool; 6],
}

impl SectionStatuses {
    /// Evaluates every section against `draft`.
    pub fn evaluate(draft: &StationDraft) -> Self {
        let mut completed = [false; 6];
        for &section in Section::all() {
            completed[section.index()] = is_complete(section, draft);
        }
        Self { completed }
    }

    /// Returns the completion flag of one section.
    pub fn is_complete(&self, section: Section) -> bool {
        self.completed[section.index()]
    }

    /// Returns `true` if the section can be opened: it has no gate, or its
    /// gating section is complete.
    pub fn is_unlocked(&self, section: Section) -> bool {
        section
            .unlocked_by()
            .is_none_or(|gate| self.is_complete(gate))
    }

    /// Number of complete sections.
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&c| c).count()
    }

    /// The aggregate flag: `true` iff every section is complete.
    pub fn all_complete(&self) -> bool {
        self.completed.iter().all(|&c| c)
    }
}
