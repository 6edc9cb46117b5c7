//! Typed identifiers for every editable field of a [`StationDraft`].
//!
//! Each identifier resolves directly to its backing sub-record through the
//! accessors on [`StationDraft`]; no field is ever looked up by name.

use super::draft::{ConnectionType, PlugType, PortName, StationDraft, StickersApplied, Visibility};

/// Maximum length of the free-text directions.
pub const DIRECTIONS_MAX_LEN: usize = 150;
/// Maximum length of a SIM card ICCID.
pub const ICCID_MAX_LEN: usize = 20;
/// Length of an `HH:MM` time value.
const TIME_MAX_LEN: usize = 5;

/// Characters a text field accepts from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Any printable character.
    Free,
    /// Digits, a decimal point and a leading minus sign.
    Decimal,
    /// Digits and `:`.
    Time,
    /// ASCII digits only.
    Digits,
}

impl InputKind {
    /// Returns `true` if `ch` may be typed into a field of this kind.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            InputKind::Free => !ch.is_control(),
            InputKind::Decimal => ch.is_ascii_digit() || ch == '.' || ch == '-',
            InputKind::Time => ch.is_ascii_digit() || ch == ':',
            InputKind::Digits => ch.is_ascii_digit(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    LocationName,
    LocationAddress,
    Latitude,
    Longitude,
    Directions,
    StationNumber,
    SimCardIccid,
    Provider,
    BasePricePerKwh,
    FreeMinutes,
    PeakStartTime,
    PeakEndTime,
    PeakPricePerKwh,
    OcppId,
    Make,
    Model,
    PowerRating,
}

impl TextField {
    pub fn label(self) -> &'static str {
        match self {
            TextField::LocationName => "Location name",
            TextField::LocationAddress => "Location address",
            TextField::Latitude => "Latitude",
            TextField::Longitude => "Longitude",
            TextField::Directions => "Directions",
            TextField::StationNumber => "Station number",
            TextField::SimCardIccid => "SIM card ICCID",
            TextField::Provider => "Provider",
            TextField::BasePricePerKwh => "Price per kWh",
            TextField::FreeMinutes => "Free for how many minutes?",
            TextField::PeakStartTime => "Start time",
            TextField::PeakEndTime => "End time",
            TextField::PeakPricePerKwh => "Peak pricing per kWh",
            TextField::OcppId => "Chargebox identity (OCPP ID)",
            TextField::Make => "Make",
            TextField::Model => "Model",
            TextField::PowerRating => "Power",
        }
    }

    /// Keyboard filter applied while typing.
    pub fn input_kind(self) -> InputKind {
        match self {
            TextField::Latitude
            | TextField::Longitude
            | TextField::BasePricePerKwh
            | TextField::FreeMinutes
            | TextField::PeakPricePerKwh
            | TextField::PowerRating => InputKind::Decimal,
            TextField::PeakStartTime | TextField::PeakEndTime => InputKind::Time,
            TextField::SimCardIccid => InputKind::Digits,
            _ => InputKind::Free,
        }
    }

    pub fn max_len(self) -> Option<usize> {
        match self {
            TextField::Directions => Some(DIRECTIONS_MAX_LEN),
            TextField::SimCardIccid => Some(ICCID_MAX_LEN),
            TextField::PeakStartTime | TextField::PeakEndTime => Some(TIME_MAX_LEN),
            _ => None,
        }
    }

    /// Make and model are filled in by the connection check, not by the user.
    pub fn read_only(self) -> bool {
        matches!(self, TextField::Make | TextField::Model)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    AddFreePeriod,
    AddPeakPricing,
    UsingLms,
    /// Per-connector "drivers bring their own cable".
    DriversBringCable(usize),
}

impl FlagField {
    pub fn label(self) -> &'static str {
        match self {
            FlagField::AddFreePeriod => "Add a free charging period at the beginning",
            FlagField::AddPeakPricing => "Add peak pricing",
            FlagField::UsingLms => "Station is using a Load Management System (LMS)",
            FlagField::DriversBringCable(_) => "Drivers need to bring their own cable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceField {
    Visibility,
    StickersApplied,
    ConnectionType,
    PortName(usize),
    PlugType(usize),
}

impl ChoiceField {
    pub fn label(self) -> &'static str {
        match self {
            ChoiceField::Visibility => "Station visibility",
            ChoiceField::StickersApplied => {
                "Are station stickers and port labels applied to the station?"
            }
            ChoiceField::ConnectionType => "Connection type",
            ChoiceField::PortName(_) => "Port name",
            ChoiceField::PlugType(_) => "Plug type",
        }
    }

    /// Number of options, matching the enum's `all()` table.
    pub fn option_count(self) -> usize {
        match self {
            ChoiceField::Visibility => Visibility::all().len(),
            ChoiceField::StickersApplied => StickersApplied::all().len(),
            ChoiceField::ConnectionType => ConnectionType::all().len(),
            ChoiceField::PortName(_) => PortName::all().len(),
            ChoiceField::PlugType(_) => PlugType::all().len(),
        }
    }

    /// Display label of the option at `index`, in the order used by
    /// [`StationDraft::set_choice`].
    pub fn option_label(self, index: usize) -> Option<&'static str> {
        match self {
            ChoiceField::Visibility => Visibility::all().get(index).map(|v| v.label()),
            ChoiceField::StickersApplied => StickersApplied::all().get(index).map(|v| v.label()),
            ChoiceField::ConnectionType => ConnectionType::all().get(index).map(|v| v.label()),
            ChoiceField::PortName(_) => PortName::all().get(index).map(|v| v.label()),
            ChoiceField::PlugType(_) => PlugType::all().get(index).map(|v| v.label()),
        }
    }

    /// All option labels in display order.
    pub fn options(self) -> Vec<&'static str> {
        (0..self.option_count())
            .filter_map(|i| self.option_label(i))
            .collect()
    }

    /// `true` for drop-down selects, `false` for radio groups.
    pub fn is_select(self) -> bool {
        matches!(self, ChoiceField::PortName(_) | ChoiceField::PlugType(_))
    }
}

/// Any editable field in the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Text(TextField),
    Flag(FlagField),
    Choice(ChoiceField),
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Text(f) => f.label(),
            FieldId::Flag(f) => f.label(),
            FieldId::Choice(f) => f.label(),
        }
    }

    /// Whether the field is marked as required when it is shown.
    pub fn required(self) -> bool {
        match self {
            FieldId::Text(f) => !matches!(
                f,
                TextField::Directions | TextField::Provider | TextField::Make | TextField::Model
            ),
            FieldId::Flag(_) => false,
            FieldId::Choice(_) => true,
        }
    }

    /// Guidance shown under the field.
    pub fn help(self) -> Option<&'static str> {
        match self {
            FieldId::Text(TextField::LocationName) => {
                Some("For public stations, this name will be displayed to drivers in the app.")
            }
            FieldId::Text(TextField::Directions) => {
                Some("Displayed in the app to help drivers easily locate the station.")
            }
            FieldId::Text(TextField::StationNumber) => {
                Some("Enter the Chargefox station number printed on the sticker.")
            }
            FieldId::Text(TextField::SimCardIccid) => {
                Some("Unique 19-20 digit number typically located on the SIM card.")
            }
            FieldId::Text(TextField::BasePricePerKwh) => Some(
                "Leave this field blank or enter 0 if charging will be free at this station.",
            ),
            FieldId::Text(TextField::OcppId) => {
                Some("The charger identity typically found in the documentation or packaging.")
            }
            FieldId::Text(TextField::Make | TextField::Model) => Some("Autopopulated by OCPP"),
            FieldId::Text(TextField::PowerRating) => {
                Some("Enter the final power reading for the station.")
            }
            FieldId::Choice(ChoiceField::PortName(_)) => {
                Some("Ensure this matches the port label sticker")
            }
            _ => None,
        }
    }

    /// Returns `true` when the field holds no answer.
    ///
    /// Text is blank when empty after trimming; a choice is blank when unset.
    /// Checkboxes always hold a defined value and are never blank.
    pub fn is_blank(self, draft: &StationDraft) -> bool {
        match self {
            FieldId::Text(f) => draft.text(f).trim().is_empty(),
            FieldId::Flag(_) => false,
            FieldId::Choice(f) => draft.choice(f).is_none(),
        }
    }

    /// Human-readable current value, used by the review summary and rendering.
    pub fn display_value(self, draft: &StationDraft) -> String {
        match self {
            FieldId::Text(f) => draft.text(f).to_string(),
            FieldId::Flag(f) => if draft.flag(f) { "Yes" } else { "No" }.to_string(),
            FieldId::Choice(f) => draft
                .choice(f)
                .and_then(|i| f.option_label(i))
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }
}

impl From<TextField> for FieldId {
    fn from(f: TextField) -> Self {
        FieldId::Text(f)
    }
}

impl From<FlagField> for FieldId {
    fn from(f: FlagField) -> Self {
        FieldId::Flag(f)
    }
}

impl From<ChoiceField> for FieldId {
    fn from(f: ChoiceField) -> Self {
        FieldId::Choice(f)
    }
}
