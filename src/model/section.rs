use super::draft::{ConnectionType, StationDraft, StickersApplied};
use super::field::{ChoiceField, FieldId, FlagField, TextField};

/// One of the six accordion sections of the station panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    VisibilityLocation,
    StickersLabels,
    NetworkCommunication,
    Pricing,
    ConnectToChargefox,
    HardwareDetails,
}

static ALL_SECTIONS: &[Section] = &[
    Section::VisibilityLocation,
    Section::StickersLabels,
    Section::NetworkCommunication,
    Section::Pricing,
    Section::ConnectToChargefox,
    Section::HardwareDetails,
];

static VISIBILITY_LOCATION_REQUIRED: &[FieldId] = &[
    FieldId::Choice(ChoiceField::Visibility),
    FieldId::Text(TextField::LocationName),
    FieldId::Text(TextField::LocationAddress),
    FieldId::Text(TextField::Latitude),
    FieldId::Text(TextField::Longitude),
];

static STICKERS_LABELS_REQUIRED: &[FieldId] = &[
    FieldId::Choice(ChoiceField::StickersApplied),
    FieldId::Text(TextField::StationNumber),
];

static NETWORK_COMMUNICATION_REQUIRED: &[FieldId] = &[FieldId::Choice(ChoiceField::ConnectionType)];

static PRICING_REQUIRED: &[FieldId] = &[FieldId::Text(TextField::BasePricePerKwh)];

static CONNECT_REQUIRED: &[FieldId] = &[FieldId::Text(TextField::OcppId)];

static HARDWARE_REQUIRED: &[FieldId] = &[
    FieldId::Text(TextField::Make),
    FieldId::Text(TextField::Model),
    FieldId::Text(TextField::PowerRating),
    FieldId::Choice(ChoiceField::PortName(0)),
    FieldId::Choice(ChoiceField::PlugType(0)),
    FieldId::Choice(ChoiceField::PortName(1)),
    FieldId::Choice(ChoiceField::PlugType(1)),
];

impl Section {
    /// Returns all sections in panel order.
    pub fn all() -> &'static [Section] {
        ALL_SECTIONS
    }

    /// Position of this section in [`Section::all`].
    pub fn index(self) -> usize {
        match self {
            Section::VisibilityLocation => 0,
            Section::StickersLabels => 1,
            Section::NetworkCommunication => 2,
            Section::Pricing => 3,
            Section::ConnectToChargefox => 4,
            Section::HardwareDetails => 5,
        }
    }

    /// Stable identifier, matching the keys of the form's section status map.
    pub fn key(self) -> &'static str {
        match self {
            Section::VisibilityLocation => "visibilityLocation",
            Section::StickersLabels => "stickersLabels",
            Section::NetworkCommunication => "networkCommunication",
            Section::Pricing => "pricing",
            Section::ConnectToChargefox => "connectToChargefox",
            Section::HardwareDetails => "hardwareDetails",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::VisibilityLocation => "Visibility and location",
            Section::StickersLabels => "Stickers and labels",
            Section::NetworkCommunication => "Network communication",
            Section::Pricing => "Pricing",
            Section::ConnectToChargefox => "Enter chargebox identity",
            Section::HardwareDetails => "Hardware details",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::VisibilityLocation => {
                "Enter the station's visibility type and location details."
            }
            Section::StickersLabels => "Add information about physical labels on the station.",
            Section::NetworkCommunication => "Choose how the station will connect to the internet.",
            Section::Pricing => "Choose how you want to price charging sessions at this station.",
            Section::ConnectToChargefox => {
                "Enter the station's chargebox identity to connect it to the Chargefox network."
            }
            Section::HardwareDetails => "Enter station hardware, connector, and power settings.",
        }
    }

    /// Fields that must hold an answer for the section to count as complete.
    ///
    /// Sections with conditional rules (network, pricing, connection,
    /// hardware) list only their unconditional fields here.
    pub fn required_fields(self) -> &'static [FieldId] {
        match self {
            Section::VisibilityLocation => VISIBILITY_LOCATION_REQUIRED,
            Section::StickersLabels => STICKERS_LABELS_REQUIRED,
            Section::NetworkCommunication => NETWORK_COMMUNICATION_REQUIRED,
            Section::Pricing => PRICING_REQUIRED,
            Section::ConnectToChargefox => CONNECT_REQUIRED,
            Section::HardwareDetails => HARDWARE_REQUIRED,
        }
    }

    /// The section that must be complete before this one can be opened.
    pub fn unlocked_by(self) -> Option<Section> {
        match self {
            Section::HardwareDetails => Some(Section::ConnectToChargefox),
            _ => None,
        }
    }

    /// Fields currently shown for this section, in display order.
    ///
    /// Conditional fields appear only when the answer they depend on is set:
    /// the ICCID for the Chargefox SIM, the provider for other connection
    /// types, free minutes and peak fields when their checkbox is ticked.
    pub fn visible_fields(self, draft: &StationDraft) -> Vec<FieldId> {
        match self {
            Section::VisibilityLocation => vec![
                ChoiceField::Visibility.into(),
                TextField::LocationName.into(),
                TextField::LocationAddress.into(),
                TextField::Latitude.into(),
                TextField::Longitude.into(),
                TextField::Directions.into(),
            ],
            Section::StickersLabels => vec![
                ChoiceField::StickersApplied.into(),
                TextField::StationNumber.into(),
            ],
            Section::NetworkCommunication => {
                let mut fields = vec![ChoiceField::ConnectionType.into()];
                match draft.network_communication.connection_type {
                    Some(ConnectionType::SimChargefox) => {
                        fields.push(TextField::SimCardIccid.into());
                    }
                    Some(_) => fields.push(TextField::Provider.into()),
                    None => {}
                }
                fields
            }
            Section::Pricing => {
                let mut fields = vec![
                    TextField::BasePricePerKwh.into(),
                    FlagField::AddFreePeriod.into(),
                ];
                if draft.pricing.add_free_period {
                    fields.push(TextField::FreeMinutes.into());
                }
                fields.push(FlagField::AddPeakPricing.into());
                if draft.pricing.add_peak_pricing {
                    fields.extend([
                        FieldId::from(TextField::PeakStartTime),
                        TextField::PeakEndTime.into(),
                        TextField::PeakPricePerKwh.into(),
                    ]);
                }
                fields
            }
            Section::ConnectToChargefox => vec![TextField::OcppId.into()],
            Section::HardwareDetails => {
                let mut fields = vec![
                    TextField::Make.into(),
                    TextField::Model.into(),
                    TextField::PowerRating.into(),
                    FlagField::UsingLms.into(),
                ];
                for i in 0..draft.hardware_details.connectors.len() {
                    fields.extend([
                        FieldId::from(ChoiceField::PortName(i)),
                        ChoiceField::PlugType(i).into(),
                        FlagField::DriversBringCable(i).into(),
                    ]);
                }
                fields
            }
        }
    }

    /// Extra guidance shown inside the section body, depending on answers.
    pub fn notice(self, draft: &StationDraft) -> Option<&'static str> {
        match self {
            Section::StickersLabels
                if draft.stickers_labels.stickers_applied == Some(StickersApplied::No) =>
            {
                Some("Contact support@chargefox.com to arrange delivery.")
            }
            Section::ConnectToChargefox => Some(
                "Please configure your station with the secure OCPP URL (wss://test.chargefox.com/ocpp/1.6).",
            ),
            _ => None,
        }
    }
}
