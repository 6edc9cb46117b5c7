//! Draft builders shared by the model tests.

use quickcheck::Arbitrary;

use super::draft::{ConnectionStatus, StationDraft};
use super::field::{ChoiceField, FlagField, TextField};

static ALL_TEXT_FIELDS: &[TextField] = &[
    TextField::LocationName,
    TextField::LocationAddress,
    TextField::Latitude,
    TextField::Longitude,
    TextField::Directions,
    TextField::StationNumber,
    TextField::SimCardIccid,
    TextField::Provider,
    TextField::BasePricePerKwh,
    TextField::FreeMinutes,
    TextField::PeakStartTime,
    TextField::PeakEndTime,
    TextField::PeakPricePerKwh,
    TextField::OcppId,
    TextField::Make,
    TextField::Model,
    TextField::PowerRating,
];

static ALL_CHOICE_FIELDS: &[ChoiceField] = &[
    ChoiceField::Visibility,
    ChoiceField::StickersApplied,
    ChoiceField::ConnectionType,
    ChoiceField::PortName(0),
    ChoiceField::PlugType(0),
    ChoiceField::PortName(1),
    ChoiceField::PlugType(1),
];

/// A draft with every section complete and the station connected through a
/// Chargefox SIM.
pub fn complete_draft() -> StationDraft {
    let mut draft = StationDraft::new();
    draft.set_choice(ChoiceField::Visibility, Some(0));
    draft.set_text(TextField::LocationName, "Melbourne Office Carpark 2");
    draft.set_text(TextField::LocationAddress, "1 Collins St, Melbourne VIC");
    draft.set_text(TextField::Latitude, "-37.8136");
    draft.set_text(TextField::Longitude, "144.9631");
    draft.set_choice(ChoiceField::StickersApplied, Some(0));
    draft.set_text(TextField::StationNumber, "CFX-1042");
    draft.set_choice(ChoiceField::ConnectionType, Some(0));
    draft.set_text(TextField::SimCardIccid, "8961012345678901234");
    draft.set_text(TextField::BasePricePerKwh, "0.35");
    draft.set_text(TextField::OcppId, "chargefox");
    draft.connect_to_chargefox.status = ConnectionStatus::Success;
    draft.connect_to_chargefox.connected = true;
    draft.set_text(TextField::Make, "Fimer");
    draft.set_text(TextField::Model, "Electra DC / QCK-DC-AC");
    draft.set_text(TextField::PowerRating, "50");
    draft.set_choice(ChoiceField::PortName(0), Some(0));
    draft.set_choice(ChoiceField::PlugType(0), Some(0));
    draft.set_choice(ChoiceField::PortName(1), Some(1));
    draft.set_choice(ChoiceField::PlugType(1), Some(2));
    draft
}

/// Random draft for property tests. Text values are drawn from a small pool
/// that mixes blank, whitespace-only and filled answers.
#[derive(Debug, Clone)]
pub struct AnyDraft(pub StationDraft);

impl Arbitrary for AnyDraft {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const TEXT_POOL: &[&str] = &["", "  ", "x", "12.5", "17:00", "chargefox"];

        let mut draft = StationDraft::new();
        for &field in ALL_CHOICE_FIELDS {
            let len = field.option_count();
            let pick = if bool::arbitrary(g) {
                Some(usize::arbitrary(g) % len)
            } else {
                None
            };
            draft.set_choice(field, pick);
        }
        for &field in ALL_TEXT_FIELDS {
            let value = g.choose(TEXT_POOL).copied().unwrap_or_default();
            draft.set_text(field, value);
        }
        for field in [
            FlagField::AddFreePeriod,
            FlagField::AddPeakPricing,
            FlagField::UsingLms,
            FlagField::DriversBringCable(0),
            FlagField::DriversBringCable(1),
        ] {
            draft.set_flag(field, bool::arbitrary(g));
        }
        // Set after the OCPP ID, whose edit resets the connection.
        draft.connect_to_chargefox.status = *g
            .choose(&[
                ConnectionStatus::Idle,
                ConnectionStatus::Loading,
                ConnectionStatus::Success,
                ConnectionStatus::Error,
            ])
            .unwrap();
        draft.connect_to_chargefox.connected = bool::arbitrary(g);
        AnyDraft(draft)
    }
}
