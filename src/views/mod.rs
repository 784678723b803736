//! # Concrete View Bindings
//!
//! Named, typed bindings over [`ViewReader`](crate::reader::ViewReader) for
//! the maritime schema's views, declared with
//! [`define_view!`](crate::define_view) and
//! [`define_view_extension!`](crate::define_view_extension). Each binding
//! pairs a borrowing accessor struct with a `*_descriptor()` function that
//! produces the matching decode table, and derived message views share their
//! parent's leading ordinals by construction.


mod ais;
mod camera;
mod enums;

pub use ais::{
    aid_to_navigation_report_message_view_descriptor, aircraft_type_view_descriptor,
    ais_base_station_report_message_view_descriptor, ais_device_command_reply_view_descriptor,
    ais_device_command_view_descriptor, ais_device_raw_message_view_descriptor,
    ais_device_raw_sentence_view_descriptor, ais_message_view_descriptor,
    AidToNavigationReportMessageView, AircraftTypeView, AisBaseStationReportMessageView,
    AisDeviceCommandReplyView, AisDeviceCommandView, AisDeviceRawMessageView,
    AisDeviceRawSentenceView, AisMessageView,
};
pub use camera::{camera_configuration_view_descriptor, CameraConfigurationView};
pub use enums::{
    AisMessageType, CameraControlProtocol, CameraFocalLengthMode, CameraPanTiltMode,
    DeviceCommandReplyStatus, DeviceCommandSourceType, NavigationalAidType, PositionAccuracy,
    PositionFixType, Raim,
};
