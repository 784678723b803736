//! Tests for the descriptor module

use super::*;
use crate::error::DecodeError;

fn device_message_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::required("Id", FieldKind::Guid),
        FieldDef::required("RowVersion", FieldKind::I64),
        FieldDef::required("Timestamp", FieldKind::Timestamp),
        FieldDef::optional("Message", FieldKind::Text),
    ]
}

#[test]
fn descriptor_preserves_field_order_and_ordinals() {
    let descriptor =
        ViewDescriptor::new("DeviceMessageView", "dm", device_message_fields()).unwrap();

    assert_eq!(descriptor.field_count(), 4);
    assert_eq!(descriptor.ordinal_of("Id"), Some(0));
    assert_eq!(descriptor.ordinal_of("Message"), Some(3));
    assert_eq!(descriptor.ordinal_of("Missing"), None);
    assert_eq!(descriptor.field(2).unwrap().kind, FieldKind::Timestamp);
    assert_eq!(descriptor.inherited_count(), 0);
}

#[test]
fn descriptor_rejects_empty_field_list() {
    let result = ViewDescriptor::new("EmptyView", "e", Vec::new());
    assert!(result.is_err());
}

#[test]
fn descriptor_rejects_duplicate_field_names() {
    let fields = vec![
        FieldDef::required("Id", FieldKind::Guid),
        FieldDef::required("Id", FieldKind::I64),
    ];
    let err = ViewDescriptor::new("DupView", "d", fields).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn base_query_lists_alias_qualified_columns_in_ordinal_order() {
    let descriptor =
        ViewDescriptor::new("DeviceMessageView", "dm", device_message_fields()).unwrap();

    let expected = "SELECT \r\n  dm.[Id], \r\n  dm.[RowVersion], \r\n  dm.[Timestamp], \r\n  dm.[Message] \r\nFROM [DeviceMessageView] dm \r\n";
    assert_eq!(descriptor.base_query(), expected);
    assert_eq!(descriptor.view_name(), "DeviceMessageView");
    assert_eq!(descriptor.alias(), "dm");
}

#[test]
fn extend_appends_fields_after_parent_ordinals() {
    let parent = ViewDescriptor::new("DeviceMessageView", "dm", device_message_fields()).unwrap();
    let child = parent
        .extend(
            "TrackedDeviceMessageView",
            "tdm",
            vec![
                FieldDef::required("Track", FieldKind::Guid),
                FieldDef::optional("Latitude", FieldKind::F64),
            ],
        )
        .unwrap();

    assert_eq!(child.field_count(), 6);
    assert_eq!(child.inherited_count(), 4);
    assert_eq!(child.ordinal_of("Track"), Some(4));
    for ordinal in 0..parent.field_count() {
        assert_eq!(child.field(ordinal), parent.field(ordinal));
    }
}

#[test]
fn extends_accepts_structural_prefix() {
    let parent = ViewDescriptor::new("DeviceMessageView", "dm", device_message_fields()).unwrap();
    let child = parent
        .extend(
            "TrackedDeviceMessageView",
            "tdm",
            vec![FieldDef::required("Track", FieldKind::Guid)],
        )
        .unwrap();

    child.extends(&parent).unwrap();
}

#[test]
fn extends_rejects_reordered_prefix() {
    let parent = ViewDescriptor::new("DeviceMessageView", "dm", device_message_fields()).unwrap();

    let mut reordered = device_message_fields();
    reordered.swap(0, 1);
    reordered.push(FieldDef::required("Track", FieldKind::Guid));
    let impostor = ViewDescriptor::new("TrackedDeviceMessageView", "tdm", reordered).unwrap();

    let err = impostor.extends(&parent).unwrap_err();
    match err.downcast_ref::<DecodeError>() {
        Some(DecodeError::OrdinalDrift { ordinal, .. }) => assert_eq!(*ordinal, 0),
        other => panic!("expected OrdinalDrift, got {:?}", other),
    }
}

#[test]
fn extends_rejects_shorter_descriptor() {
    let parent = ViewDescriptor::new("DeviceMessageView", "dm", device_message_fields()).unwrap();
    let narrow = ViewDescriptor::new(
        "NarrowView",
        "n",
        vec![FieldDef::required("Id", FieldKind::Guid)],
    )
    .unwrap();

    assert!(narrow.extends(&parent).is_err());
}

#[test]
fn extend_rejects_field_name_collision_with_parent() {
    let parent = ViewDescriptor::new("DeviceMessageView", "dm", device_message_fields()).unwrap();
    let result = parent.extend(
        "ShadowView",
        "s",
        vec![FieldDef::required("Id", FieldKind::Guid)],
    );
    assert!(result.is_err());
}

#[test]
fn field_kind_storage_maps_temporals_and_enums_to_integers() {
    assert_eq!(FieldKind::Timestamp.storage(), "i64");
    assert_eq!(FieldKind::Duration.storage(), "i64");
    assert_eq!(FieldKind::Enum.storage(), "i32");
    assert_eq!(FieldKind::Guid.storage(), "guid");
}
