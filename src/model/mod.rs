mod completion;
mod connection;
mod draft;
mod field;
mod section;
mod session;
mod summary;
#[cfg(test)]
mod test_support;
mod validation;

pub use completion::{SectionStatuses, is_complete};
pub use connection::{
    AUTOFILL_MAKE, AUTOFILL_MODEL, CheckOutcome, ConnectionCheck, DEFAULT_CONNECT_DELAY,
    INVALID_IDENTITY, SUCCESS_IDENTITY,
};
pub use draft::{
    CONNECTOR_COUNT, ChargefoxConnection, ConnectionStatus, ConnectionType, Connector,
    HardwareDetails, NetworkCommunication, PlugType, PortName, Pricing, StationDetails,
    StationDraft, StickersApplied, StickersLabels, Visibility,
};
pub use field::{
    ChoiceField, DIRECTIONS_MAX_LEN, FieldId, FlagField, ICCID_MAX_LEN, InputKind, TextField,
};
pub use section::Section;
pub use session::{Onboarding, SubmitError};
pub use summary::{REVIEW_NOTES, ReviewSummary, SUPPORT_EMAIL, SummaryBlock};
pub use validation::{
    ValidationError, field_hint, validate_iccid, validate_number, validate_time_of_day,
};
