//! Integral-coded enums shared by the view bindings.
//!
//! Every enum here is stored as an `i32` code in its column and declared
//! through [`db_enum!`](crate::db_enum), so decoding goes by numeric
//! identity. Variant names follow the upstream schema verbatim, misspellings
//! included, because the codes are the contract and the names are only
//! diagnostics.

use crate::db_enum;

db_enum! {
    /// Originator of a command sent to a device.
    DeviceCommandSourceType {
        Unknown = 0,
        Session = 1,
        Device = 2,
        Source = 3,
    }
}

db_enum! {
    /// Outcome a device reported for a command.
    DeviceCommandReplyStatus {
        Unknown = 0,
        Ok = 1,
        NotImplemented = 2,
        Error = 3,
    }
}

db_enum! {
    /// AIS message type, ITU-R M.1371 message IDs 1 through 27.
    AisMessageType {
        PositionReportClassA = 1,
        PositionReportClassAAssignedSchedule = 2,
        PositionReportClassAResponseToInterrogation = 3,
        BaseStationReport = 4,
        StaticAndVoyageRelatedData = 5,
        BinaryAddressedMessage = 6,
        BinaryAcknowledge = 7,
        BinaryBroadcastMessage = 8,
        StandardSarAircraftPositionReport = 9,
        UtcAndDateInquiry = 10,
        UtcAndDateResponse = 11,
        AddressedSafetyRelatedMessage = 12,
        SafetyRelatedAcknowledgment = 13,
        SafetyRelatedBroadcastMessage = 14,
        Interrogation = 15,
        AssignmentModeCommand = 16,
        DgnssBinaryBroadcastMessage = 17,
        StandardClassBCsPositionReport = 18,
        ExtendedClassBCsPositionReport = 19,
        DataLinkManagement = 20,
        AidToNavigationReport = 21,
        ChannelManagement = 22,
        GroupAssignmentCommand = 23,
        StaticDataReport = 24,
        SingleSlotBinaryMessage = 25,
        MultipleSlotBinaryMessageWithCommunicationsState = 26,
        PositionReportForLongRangeApplications = 27,
    }
}

db_enum! {
    /// Kind of navigational aid carried in an aid-to-navigation report.
    NavigationalAidType {
        NotSpecified = 0,
        ReferencePoint = 1,
        Racon = 2,
        FixedStuctureOffShore = 3,
        Spare = 4,
        LightWithoutSectors = 5,
        LightWithSectors = 6,
        LeadingLightFront = 7,
        LeadingLigthRear = 8,
        BeaconCardinalN = 9,
        BeaconCardinalE = 10,
        BeaconCardinalS = 11,
        BeaconCardinalW = 12,
        BeaconPortHand = 13,
        BeaconStarboardHand = 14,
        BeaconPreferredChannelPortHand = 15,
        BeaconPreferredChannelStarboardHand = 16,
        BeaconIsolatedDanger = 17,
        BeaconSafeWater = 18,
        BeaconSpecialMark = 19,
        CardinalMarkN = 20,
        CardinalMarkE = 21,
        CardinalMarkS = 22,
        CardinalMarkW = 23,
        PortHandMark = 24,
        StarboardHandMark = 25,
        PreferredChannelPortHand = 26,
        PreferredChannelStarboardHand = 27,
        IsolatedDanger = 28,
        SafeWater = 29,
        SpecialMark = 30,
        LightVessel = 31,
    }
}

db_enum! {
    /// Reported position accuracy flag.
    PositionAccuracy {
        Low = 0,
        High = 1,
    }
}

db_enum! {
    /// Electronic position fixing device type.
    PositionFixType {
        Undefined1 = 0,
        Gps = 1,
        Glonass = 2,
        CombinedGpsAndGlonass = 3,
        LoranC = 4,
        Chayka = 5,
        IntegratedNavigationSystem = 6,
        Surveyed = 7,
        Galileo = 8,
        Undefined2 = 15,
    }
}

db_enum! {
    /// Receiver autonomous integrity monitoring flag.
    Raim {
        NotInUse = 0,
        InUse = 1,
    }
}

db_enum! {
    /// Protocol used to control a camera.
    CameraControlProtocol {
        Unknown = 0,
        Onvif = 1,
    }
}

db_enum! {
    /// How pan and tilt coordinates are expressed for a camera.
    CameraPanTiltMode {
        Unknown = 0,
        Normalized = 1,
        Angular = 2,
    }
}

db_enum! {
    /// How focal length is expressed for a camera.
    CameraFocalLengthMode {
        Unknown = 0,
        Normalized = 1,
        Millimeter = 2,
    }
}
