//! End-to-end decoding through the public API: cursor rows in, typed view
//! values out.

use chrono::DateTime;
use uuid::Uuid;

use seaview::registry;
use seaview::views::{
    ais_device_command_view_descriptor, ais_message_view_descriptor,
    AidToNavigationReportMessageView, AisDeviceCommandView, AisMessageView,
    DeviceCommandSourceType, NavigationalAidType, PositionAccuracy, PositionFixType, Raim,
};
use seaview::{DecodeError, FieldValue, MemoryCursor, RowBuilder, ViewReader};

const COMMAND_TICKS: i64 = 637_920_000_000_000_000;

fn command_row(reply: Option<Uuid>) -> Vec<seaview::RawValue<'static>> {
    let mut row = RowBuilder::new(7);
    row.set_guid(0, Uuid::from_u128(0x0ABC)).unwrap();
    row.set_i64(1, 5).unwrap();
    row.set_guid(2, Uuid::from_u128(0x0DEF)).unwrap();
    row.set_ticks(3, COMMAND_TICKS).unwrap();
    row.set_i32(4, DeviceCommandSourceType::Source as i32).unwrap();
    row.set_guid(5, Uuid::from_u128(0x0123)).unwrap();
    if let Some(reply) = reply {
        row.set_guid(6, reply).unwrap();
    }
    row.finish()
}

#[test]
fn decodes_a_device_command_row_end_to_end() {
    let mut cursor = MemoryCursor::new(7);
    cursor.push_row(command_row(None)).unwrap();

    let mut reader = ViewReader::new(cursor);
    assert!(reader.advance().unwrap());
    let command = AisDeviceCommandView::new(&reader);

    assert_eq!(command.id().unwrap(), Uuid::from_u128(0x0ABC));
    assert_eq!(command.row_version().unwrap(), 5);
    assert_eq!(
        command.timestamp().unwrap().to_rfc3339(),
        "2022-06-28T08:00:00+00:00"
    );
    assert_eq!(
        command.device_command_source_type().unwrap(),
        DeviceCommandSourceType::Source
    );
    assert_eq!(command.reply().unwrap(), None);

    assert!(!reader.advance().unwrap());
}

#[test]
fn pending_and_answered_commands_differ_only_in_reply() {
    let reply_id = Uuid::from_u128(0x0456);
    let mut cursor = MemoryCursor::new(7);
    cursor.push_row(command_row(None)).unwrap();
    cursor.push_row(command_row(Some(reply_id))).unwrap();

    let mut reader = ViewReader::new(cursor);
    let mut replies = Vec::new();
    while reader.advance().unwrap() {
        let command = AisDeviceCommandView::new(&reader);
        replies.push(command.reply().unwrap());
    }
    assert_eq!(replies, vec![None, Some(reply_id)]);
}

#[test]
fn decode_row_against_the_registry_descriptor() {
    let registry = registry::global().unwrap();
    let descriptor = registry.resolve("AisDeviceCommandView").unwrap();

    let mut cursor = MemoryCursor::new(7);
    cursor.push_row(command_row(None)).unwrap();

    let mut reader = ViewReader::new(cursor);
    assert!(reader.advance().unwrap());

    let values = reader.decode_row(descriptor).unwrap();
    assert_eq!(values.len(), descriptor.field_count());
    assert_eq!(values[1], FieldValue::I64(5));
    assert_eq!(
        values[3],
        FieldValue::Timestamp(DateTime::from_timestamp(1_656_403_200, 0).unwrap())
    );
    assert_eq!(values[4], FieldValue::Enum(DeviceCommandSourceType::Source as i32));
    assert_eq!(values[6], FieldValue::Null);
}

#[test]
fn null_in_a_required_column_is_an_error_not_a_default() {
    let mut cursor = MemoryCursor::new(7);
    let mut row = RowBuilder::new(7);
    row.set_guid(0, Uuid::from_u128(0x0ABC)).unwrap();
    // RowVersion left NULL
    cursor.push_row(row.finish()).unwrap();

    let mut reader = ViewReader::new(cursor);
    assert!(reader.advance().unwrap());
    let command = AisDeviceCommandView::new(&reader);

    let err = command.row_version().unwrap_err();
    assert_eq!(
        err.downcast_ref::<DecodeError>(),
        Some(&DecodeError::NullViolation { ordinal: 1 })
    );
}

fn aton_row() -> Vec<seaview::RawValue<'static>> {
    let mut row = RowBuilder::new(26);
    row.set_guid(0, Uuid::from_u128(0x1111)).unwrap();
    row.set_i32(1, 21).unwrap();
    row.set_i64(2, 2).unwrap();
    row.set_guid(3, Uuid::from_u128(0x2222)).unwrap();
    row.set_ticks(4, COMMAND_TICKS).unwrap();
    row.set_i64(5, 900).unwrap();
    row.set_i32(6, 1).unwrap();
    row.set_guid(7, Uuid::from_u128(0x3333)).unwrap();
    row.set_i32(8, NavigationalAidType::Racon as i32).unwrap();
    row.set_text(9, "HELCOM BUOY 7").unwrap();
    row.set_i32(10, PositionAccuracy::High as i32).unwrap();
    row.set_f64(11, 11.85).unwrap();
    row.set_f64(12, 57.64).unwrap();
    row.set_i32(13, 2).unwrap();
    row.set_i32(14, 2).unwrap();
    row.set_i32(15, 1).unwrap();
    row.set_i32(16, 1).unwrap();
    row.set_i32(17, PositionFixType::Surveyed as i32).unwrap();
    row.set_i32(18, 60).unwrap();
    row.set_bool(19, false).unwrap();
    row.set_i32(20, 0).unwrap();
    row.set_i32(21, Raim::InUse as i32).unwrap();
    row.set_bool(22, true).unwrap();
    row.set_bool(23, false).unwrap();
    row.set_i32(24, 0).unwrap();
    row.set_text(25, "").unwrap();
    row.finish()
}

#[test]
fn base_and_derived_bindings_agree_on_shared_ordinals() {
    let mut cursor = MemoryCursor::new(26);
    cursor.push_row(aton_row()).unwrap();

    let mut reader = ViewReader::new(cursor);
    assert!(reader.advance().unwrap());

    let report = AidToNavigationReportMessageView::new(&reader);
    let base = AisMessageView::new(&reader);

    assert_eq!(report.id().unwrap(), base.id().unwrap());
    assert_eq!(report.entity_type().unwrap(), base.entity_type().unwrap());
    assert_eq!(report.mmsi().unwrap(), base.mmsi().unwrap());
    assert_eq!(
        report.received_timestamp().unwrap(),
        base.received_timestamp().unwrap()
    );

    assert_eq!(
        report.navigational_aid_type().unwrap(),
        NavigationalAidType::Racon
    );
    assert_eq!(report.name().unwrap(), "HELCOM BUOY 7");
    assert!(report.virtual_aid().unwrap());
    assert_eq!(report.timestamp().unwrap(), 60);
}

#[test]
fn derived_descriptor_is_the_base_descriptor_plus_new_columns() {
    let registry = registry::global().unwrap();
    let base = registry.resolve("AisMessageView").unwrap();
    let derived = registry.resolve("AidToNavigationReportMessageView").unwrap();

    derived.extends(base).unwrap();
    for (ordinal, field) in base.fields().iter().enumerate() {
        assert_eq!(derived.field(ordinal), Some(field));
    }
    assert_eq!(derived.inherited_count(), base.field_count());
}

#[test]
fn owning_reader_disposes_its_cursor_when_dropped() {
    let mut cursor = MemoryCursor::new(7);
    cursor.push_row(command_row(None)).unwrap();
    {
        let mut reader = ViewReader::with_ownership(&mut cursor, true);
        assert!(reader.advance().unwrap());
    }
    assert!(cursor.is_closed());
    assert_eq!(cursor.close_calls(), 1);
}

#[test]
fn borrowed_cursor_outlives_a_non_owning_reader() {
    let mut cursor = MemoryCursor::new(7);
    cursor.push_row(command_row(None)).unwrap();
    cursor.push_row(command_row(None)).unwrap();

    {
        let mut reader = ViewReader::with_ownership(&mut cursor, false);
        assert!(reader.advance().unwrap());
    }
    assert!(!cursor.is_closed());

    // the second row is still reachable through a fresh reader
    let mut reader = ViewReader::new(cursor);
    assert!(reader.advance().unwrap());
    let command = AisDeviceCommandView::new(&reader);
    assert_eq!(command.row_version().unwrap(), 5);
}

#[test]
fn registry_base_query_matches_the_descriptor_render() {
    let descriptor = ais_device_command_view_descriptor().unwrap();
    let expected = "SELECT \r\n  adc.[Id], \r\n  adc.[RowVersion], \r\n  adc.[AisDevice], \r\n  \
                    adc.[Timestamp], \r\n  adc.[DeviceCommandSourceType], \r\n  \
                    adc.[DeviceCommandSourceId], \r\n  adc.[Reply] \r\nFROM [AisDeviceCommandView] adc \r\n";
    assert_eq!(descriptor.base_query(), expected);

    let registry = registry::global().unwrap();
    assert_eq!(
        registry.base_query("AisDeviceCommandView").unwrap(),
        expected
    );
}

#[test]
fn message_descriptor_field_names_keep_declaration_order() {
    let descriptor = ais_message_view_descriptor().unwrap();
    let names: Vec<&str> = descriptor.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Id",
            "EntityType",
            "RowVersion",
            "AisDevice",
            "ReceivedTimestamp",
            "MessageSequenceNumber",
            "Repeat",
            "Mmsi"
        ]
    );
}
