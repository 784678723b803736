//! View bindings for AIS devices and the AIS message hierarchy.
//!
//! The message views form an ordinal-inheritance chain: every concrete
//! message view selects `AisMessageView`'s columns first, in the same order,
//! and appends its own. The bindings mirror that with
//! [`define_view_extension!`](crate::define_view_extension), so inherited
//! accessors decode at the exact ordinals the parent binding uses.

use crate::{define_view, define_view_extension};

use super::enums::{
    DeviceCommandReplyStatus, DeviceCommandSourceType, NavigationalAidType, PositionAccuracy,
    PositionFixType, Raim,
};

define_view! {
    /// Aircraft type lookup rows.
    AircraftTypeView ("AircraftTypeView", "at") {
        0 => id as "Id": guid,
        1 => row_version as "RowVersion": i64,
        2 => name as "Name": str,
    }
}

define_view! {
    /// Commands issued to an AIS device. `Reply` stays NULL until the device
    /// answers.
    AisDeviceCommandView ("AisDeviceCommandView", "adc") {
        0 => id as "Id": guid,
        1 => row_version as "RowVersion": i64,
        2 => ais_device as "AisDevice": guid,
        3 => timestamp as "Timestamp": timestamp,
        4 => device_command_source_type as "DeviceCommandSourceType": (enum DeviceCommandSourceType),
        5 => device_command_source_id as "DeviceCommandSourceId": guid,
        6 => reply as "Reply": (opt guid),
    }
}

define_view! {
    /// Replies an AIS device sent for earlier commands.
    AisDeviceCommandReplyView ("AisDeviceCommandReplyView", "adcr") {
        0 => id as "Id": guid,
        1 => row_version as "RowVersion": i64,
        2 => ais_device as "AisDevice": guid,
        3 => timestamp as "Timestamp": timestamp,
        4 => command as "Command": guid,
        5 => status as "Status": (enum DeviceCommandReplyStatus),
        6 => message as "Message": str,
    }
}

define_view! {
    /// Raw AIS message traffic as sent or received by a device.
    AisDeviceRawMessageView ("AisDeviceRawMessageView", "adrm") {
        0 => id as "Id": guid,
        1 => row_version as "RowVersion": i64,
        2 => ais_device as "AisDevice": guid,
        3 => timestamp as "Timestamp": timestamp,
        4 => is_sent as "IsSent": bool,
        5 => message as "Message": str,
    }
}

define_view! {
    /// Raw NMEA sentences received by an AIS device.
    AisDeviceRawSentenceView ("AisDeviceRawSentenceView", "adrs") {
        0 => id as "Id": guid,
        1 => row_version as "RowVersion": i64,
        2 => ais_device as "AisDevice": guid,
        3 => timestamp as "Timestamp": timestamp,
        4 => sentence as "Sentence": str,
    }
}

define_view! {
    /// Columns shared by every AIS message view. `EntityType` carries the
    /// concrete row kind's discriminator code.
    AisMessageView ("AisMessageView", "am") {
        0 => id as "Id": guid,
        1 => entity_type as "EntityType": i32,
        2 => row_version as "RowVersion": i64,
        3 => ais_device as "AisDevice": guid,
        4 => received_timestamp as "ReceivedTimestamp": timestamp,
        5 => message_sequence_number as "MessageSequenceNumber": i64,
        6 => repeat as "Repeat": i32,
        7 => mmsi as "Mmsi": guid,
    }
}

define_view_extension! {
    /// AIS message 21. `timestamp` here is the report's UTC second-of-minute,
    /// not an instant; the receive instant is the inherited
    /// `received_timestamp`.
    AidToNavigationReportMessageView ("AidToNavigationReportMessageView", "atnrm") : AisMessageView {
        8 => navigational_aid_type as "NavigationalAidType": (enum NavigationalAidType),
        9 => name as "Name": str,
        10 => position_accuracy as "PositionAccuracy": (enum PositionAccuracy),
        11 => longitude as "Longitude": f64,
        12 => latitude as "Latitude": f64,
        13 => dimension_to_bow as "DimensionToBow": i32,
        14 => dimension_to_stern as "DimensionToStern": i32,
        15 => dimension_to_port as "DimensionToPort": i32,
        16 => dimension_to_starboard as "DimensionToStarboard": i32,
        17 => position_fix_type as "PositionFixType": (enum PositionFixType),
        18 => timestamp as "Timestamp": i32,
        19 => off_position as "OffPosition": bool,
        20 => regional_reserved as "RegionalReserved": i32,
        21 => raim as "Raim": (enum Raim),
        22 => virtual_aid as "VirtualAid": bool,
        23 => assigned as "Assigned": bool,
        24 => spare as "Spare": i32,
        25 => name_extension as "NameExtension": str,
    }
}

define_view_extension! {
    /// AIS message 4, a base station's position and UTC reference.
    AisBaseStationReportMessageView ("AisBaseStationReportMessageView", "absrm") : AisMessageView {
        8 => timestamp as "Timestamp": timestamp,
        9 => position_accuracy as "PositionAccuracy": (enum PositionAccuracy),
        10 => longitude as "Longitude": f64,
        11 => latitude as "Latitude": f64,
        12 => position_fix_type as "PositionFixType": (enum PositionFixType),
        13 => spare as "Spare": i32,
        14 => raim as "Raim": (enum Raim),
        15 => radio_status as "RadioStatus": i32,
    }
}
