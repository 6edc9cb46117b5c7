use serde::{Deserialize, Serialize};

use super::field::{ChoiceField, FlagField, TextField};

/// Whether the station is listed for all drivers or kept private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

static ALL_VISIBILITIES: &[Visibility] = &[Visibility::Public, Visibility::Private];

impl Visibility {
    /// Returns all visibility options in display order.
    pub fn all() -> &'static [Visibility] {
        ALL_VISIBILITIES
    }

    pub fn label(self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }
}

/// Answer to "are station stickers and port labels applied?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickersApplied {
    Yes,
    No,
}

static ALL_STICKER_ANSWERS: &[StickersApplied] = &[StickersApplied::Yes, StickersApplied::No];

impl StickersApplied {
    /// Returns both answers in display order.
    pub fn all() -> &'static [StickersApplied] {
        ALL_STICKER_ANSWERS
    }

    pub fn label(self) -> &'static str {
        match self {
            StickersApplied::Yes => "Yes",
            StickersApplied::No => "No",
        }
    }
}

/// How the station reaches the internet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    /// SIM card supplied by Chargefox; requires the card's ICCID.
    #[serde(rename = "sim_card_chargefox")]
    SimChargefox,
    #[serde(rename = "i_have_my_own_sim_card")]
    OwnSim,
    #[serde(rename = "ethernet_wifi")]
    EthernetWifi,
}

static ALL_CONNECTION_TYPES: &[ConnectionType] = &[
    ConnectionType::SimChargefox,
    ConnectionType::OwnSim,
    ConnectionType::EthernetWifi,
];

impl ConnectionType {
    /// Returns all connection types in display order.
    pub fn all() -> &'static [ConnectionType] {
        ALL_CONNECTION_TYPES
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionType::SimChargefox => "SIM card provided by Chargefox",
            ConnectionType::OwnSim => "I have my own SIM card",
            ConnectionType::EthernetWifi => "Ethernet / Wi-Fi",
        }
    }
}

/// Port label printed on the station sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortName {
    A,
    B,
    C,
    D,
    E,
    F,
}

static ALL_PORT_NAMES: &[PortName] = &[
    PortName::A,
    PortName::B,
    PortName::C,
    PortName::D,
    PortName::E,
    PortName::F,
];

impl PortName {
    /// Returns all port labels, A through F.
    pub fn all() -> &'static [PortName] {
        ALL_PORT_NAMES
    }

    pub fn label(self) -> &'static str {
        match self {
            PortName::A => "A",
            PortName::B => "B",
            PortName::C => "C",
            PortName::D => "D",
            PortName::E => "E",
            PortName::F => "F",
        }
    }
}

/// Connector plug standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlugType {
    Ccs2,
    Chademo,
    Type2,
    Type1,
}

static ALL_PLUG_TYPES: &[PlugType] = &[
    PlugType::Ccs2,
    PlugType::Chademo,
    PlugType::Type2,
    PlugType::Type1,
];

impl PlugType {
    /// Returns all plug types in display order.
    pub fn all() -> &'static [PlugType] {
        ALL_PLUG_TYPES
    }

    pub fn label(self) -> &'static str {
        match self {
            PlugType::Ccs2 => "CCS2",
            PlugType::Chademo => "CHAdeMO",
            PlugType::Type2 => "Type 2",
            PlugType::Type1 => "Type 1",
        }
    }
}

/// Progress of the simulated connect-to-network check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Number of connectors every station is onboarded with.
pub const CONNECTOR_COUNT: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDetails {
    #[serde(rename = "stationVisibility")]
    pub visibility: Option<Visibility>,
    pub location_name: String,
    pub location_address: String,
    pub latitude: String,
    pub longitude: String,
    pub directions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickersLabels {
    pub stickers_applied: Option<StickersApplied>,
    pub station_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCommunication {
    pub connection_type: Option<ConnectionType>,
    #[serde(rename = "simCardICCID")]
    pub sim_card_iccid: String,
    pub provider: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Blank or zero means charging is free.
    pub base_price_per_kwh: String,
    pub add_free_period: bool,
    pub free_minutes: String,
    pub add_peak_pricing: bool,
    pub peak_price_per_kwh: String,
    pub peak_start_time: String,
    pub peak_end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargefoxConnection {
    pub ocpp_id: String,
    pub connected: bool,
    pub status: ConnectionStatus,
    pub message: String,
}

impl ChargefoxConnection {
    /// Returns to `Idle`, dropping any message and the connected flag.
    pub fn reset(&mut self) {
        self.status = ConnectionStatus::Idle;
        self.message.clear();
        self.connected = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub port_name: Option<PortName>,
    pub plug_type: Option<PlugType>,
    pub drivers_bring_cable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareDetails {
    pub make: String,
    pub model: String,
    pub power_rating: String,
    #[serde(rename = "usingLMS")]
    pub using_lms: bool,
    pub connectors: [Connector; CONNECTOR_COUNT],
}

/// Every onboarding answer for one station, across all six sections.
///
/// Created empty when the app starts and mutated in place; nothing here is
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDraft {
    pub station_details: StationDetails,
    pub stickers_labels: StickersLabels,
    pub network_communication: NetworkCommunication,
    pub pricing: Pricing,
    pub connect_to_chargefox: ChargefoxConnection,
    pub hardware_details: HardwareDetails,
}

impl StationDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::LocationName => &self.station_details.location_name,
            TextField::LocationAddress => &self.station_details.location_address,
            TextField::Latitude => &self.station_details.latitude,
            TextField::Longitude => &self.station_details.longitude,
            TextField::Directions => &self.station_details.directions,
            TextField::StationNumber => &self.stickers_labels.station_number,
            TextField::SimCardIccid => &self.network_communication.sim_card_iccid,
            TextField::Provider => &self.network_communication.provider,
            TextField::BasePricePerKwh => &self.pricing.base_price_per_kwh,
            TextField::FreeMinutes => &self.pricing.free_minutes,
            TextField::PeakStartTime => &self.pricing.peak_start_time,
            TextField::PeakEndTime => &self.pricing.peak_end_time,
            TextField::PeakPricePerKwh => &self.pricing.peak_price_per_kwh,
            TextField::OcppId => &self.connect_to_chargefox.ocpp_id,
            TextField::Make => &self.hardware_details.make,
            TextField::Model => &self.hardware_details.model,
            TextField::PowerRating => &self.hardware_details.power_rating,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::LocationName => &mut self.station_details.location_name,
            TextField::LocationAddress => &mut self.station_details.location_address,
            TextField::Latitude => &mut self.station_details.latitude,
            TextField::Longitude => &mut self.station_details.longitude,
            TextField::Directions => &mut self.station_details.directions,
            TextField::StationNumber => &mut self.stickers_labels.station_number,
            TextField::SimCardIccid => &mut self.network_communication.sim_card_iccid,
            TextField::Provider => &mut self.network_communication.provider,
            TextField::BasePricePerKwh => &mut self.pricing.base_price_per_kwh,
            TextField::FreeMinutes => &mut self.pricing.free_minutes,
            TextField::PeakStartTime => &mut self.pricing.peak_start_time,
            TextField::PeakEndTime => &mut self.pricing.peak_end_time,
            TextField::PeakPricePerKwh => &mut self.pricing.peak_price_per_kwh,
            TextField::OcppId => &mut self.connect_to_chargefox.ocpp_id,
            TextField::Make => &mut self.hardware_details.make,
            TextField::Model => &mut self.hardware_details.model,
            TextField::PowerRating => &mut self.hardware_details.power_rating,
        }
    }

    /// Replaces a text field's value.
    ///
    /// Editing the OCPP ID drops any connection result: status returns to
    /// `Idle`, the message is cleared and the station is no longer connected.
    /// The value is truncated to the field's maximum length, if it has one.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let mut value = value.into();
        if let Some(max) = field.max_len()
            && let Some((idx, _)) = value.char_indices().nth(max)
        {
            value.truncate(idx);
        }
        *self.text_mut(field) = value;
        if field == TextField::OcppId {
            self.connect_to_chargefox.reset();
        }
    }

    /// Returns the current value of a checkbox field.
    ///
    /// Connector flags outside the connector range read as `false`.
    pub fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::AddFreePeriod => self.pricing.add_free_period,
            FlagField::AddPeakPricing => self.pricing.add_peak_pricing,
            FlagField::UsingLms => self.hardware_details.using_lms,
            FlagField::DriversBringCable(i) => self
                .hardware_details
                .connectors
                .get(i)
                .is_some_and(|c| c.drivers_bring_cable),
        }
    }

    /// Sets a checkbox field. Out-of-range connector indices are ignored.
    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        match field {
            FlagField::AddFreePeriod => self.pricing.add_free_period = value,
            FlagField::AddPeakPricing => self.pricing.add_peak_pricing = value,
            FlagField::UsingLms => self.hardware_details.using_lms = value,
            FlagField::DriversBringCable(i) => {
                if let Some(c) = self.hardware_details.connectors.get_mut(i) {
                    c.drivers_bring_cable = value;
                }
            }
        }
    }

    /// Returns the index of the selected option for a choice field, if any.
    pub fn choice(&self, field: ChoiceField) -> Option<usize> {
        fn index_of<T: PartialEq>(all: &[T], value: Option<&T>) -> Option<usize> {
            value.and_then(|v| all.iter().position(|x| x == v))
        }

        let connectors = &self.hardware_details.connectors;
        match field {
            ChoiceField::Visibility => index_of(
                Visibility::all(),
                self.station_details.visibility.as_ref(),
            ),
            ChoiceField::StickersApplied => index_of(
                StickersApplied::all(),
                self.stickers_labels.stickers_applied.as_ref(),
            ),
            ChoiceField::ConnectionType => index_of(
                ConnectionType::all(),
                self.network_communication.connection_type.as_ref(),
            ),
            ChoiceField::PortName(i) => index_of(
                PortName::all(),
                connectors.get(i).and_then(|c| c.port_name.as_ref()),
            ),
            ChoiceField::PlugType(i) => index_of(
                PlugType::all(),
                connectors.get(i).and_then(|c| c.plug_type.as_ref()),
            ),
        }
    }

    /// Selects the option at `index` for a choice field, or clears it with `None`.
    ///
    /// Indices past the option list clear the choice. Moving the connection
    /// type away from the Chargefox SIM clears the ICCID.
    pub fn set_choice(&mut self, field: ChoiceField, index: Option<usize>) {
        fn pick<T: Copy>(all: &[T], index: Option<usize>) -> Option<T> {
            index.and_then(|i| all.get(i).copied())
        }

        match field {
            ChoiceField::Visibility => {
                self.station_details.visibility = pick(Visibility::all(), index);
            }
            ChoiceField::StickersApplied => {
                self.stickers_labels.stickers_applied = pick(StickersApplied::all(), index);
            }
            ChoiceField::ConnectionType => {
                let selected = pick(ConnectionType::all(), index);
                self.network_communication.connection_type = selected;
                if selected != Some(ConnectionType::SimChargefox) {
                    self.network_communication.sim_card_iccid.clear();
                }
            }
            ChoiceField::PortName(i) => {
                if let Some(c) = self.hardware_details.connectors.get_mut(i) {
                    c.port_name = pick(PortName::all(), index);
                }
            }
            ChoiceField::PlugType(i) => {
                if let Some(c) = self.hardware_details.connectors.get_mut(i) {
                    c.plug_type = pick(PlugType::all(), index);
                }
            }
        }
    }
}
