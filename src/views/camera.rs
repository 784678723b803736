//! View binding for camera configuration rows.

use crate::define_view;

use super::enums::{CameraControlProtocol, CameraFocalLengthMode, CameraPanTiltMode};

define_view! {
    /// Full PTZ camera configuration. The four trailing timeout columns are
    /// elapsed spans, not instants, despite sharing the tick storage of
    /// `Timestamp`.
    CameraConfigurationView ("CameraConfigurationView", "cc") {
        0 => id as "Id": guid,
        1 => row_version as "RowVersion": i64,
        2 => camera as "Camera": guid,
        3 => timestamp as "Timestamp": timestamp,
        4 => camera_control_protocol as "CameraControlProtocol": (enum CameraControlProtocol),
        5 => camera_url as "CameraURL": str,
        6 => configuration_url as "ConfigurationURL": str,
        7 => user_name as "UserName": str,
        8 => password as "Password": str,
        9 => use_rtsp_uri_override as "UseRtspUriOverride": bool,
        10 => rtsp_uri_override as "RtspUriOverride": str,
        11 => latitude as "Latitude": f64,
        12 => longitude as "Longitude": f64,
        13 => altitude as "Altitude": f64,
        14 => use_relative_position as "UseRelativePosition": bool,
        15 => pan_tilt_mode as "PanTiltMode": (enum CameraPanTiltMode),
        16 => min_tilt_angle as "MinTiltAngle": f64,
        17 => max_tilt_angle as "MaxTiltAngle": f64,
        18 => min_tilt_scale_angle as "MinTiltScaleAngle": f64,
        19 => max_tilt_scale_angle as "MaxTiltScaleAngle": f64,
        20 => use_reverse_tilt_angle as "UseReverseTiltAngle": bool,
        21 => use_reverse_normalized_tilt_angle as "UseReverseNormalizedTiltAngle": bool,
        22 => min_tilt_velocity as "MinTiltVelocity": f64,
        23 => max_tilt_velocity as "MaxTiltVelocity": f64,
        24 => min_tilt_speed as "MinTiltSpeed": f64,
        25 => max_tilt_speed as "MaxTiltSpeed": f64,
        26 => min_pan_angle as "MinPanAngle": f64,
        27 => max_pan_angle as "MaxPanAngle": f64,
        28 => min_pan_scale_angle as "MinPanScaleAngle": f64,
        29 => max_pan_scale_angle as "MaxPanScaleAngle": f64,
        30 => use_reverse_pan_angle as "UseReversePanAngle": bool,
        31 => use_reverse_normalized_pan_angle as "UseReverseNormalizedPanAngle": bool,
        32 => min_pan_velocity as "MinPanVelocity": f64,
        33 => max_pan_velocity as "MaxPanVelocity": f64,
        34 => min_pan_speed as "MinPanSpeed": f64,
        35 => max_pan_speed as "MaxPanSpeed": f64,
        36 => focal_length_mode as "FocalLengthMode": (enum CameraFocalLengthMode),
        37 => min_focal_length as "MinFocalLength": f64,
        38 => max_focal_length as "MaxFocalLength": f64,
        39 => min_focal_length_scale as "MinFocalLengthScale": f64,
        40 => max_focal_length_scale as "MaxFocalLengthScale": f64,
        41 => min_zoom_velocity as "MinZoomVelocity": f64,
        42 => max_zoom_velocity as "MaxZoomVelocity": f64,
        43 => min_zoom_speed as "MinZoomSpeed": f64,
        44 => max_zoom_speed as "MaxZoomSpeed": f64,
        45 => image_sensor_width as "ImageSensorWidth": f64,
        46 => image_sensor_height as "ImageSensorHeight": f64,
        47 => home_pan_angle as "HomePanAngle": f64,
        48 => home_tilt_angle as "HomeTiltAngle": f64,
        49 => home_focal_length as "HomeFocalLength": f64,
        50 => pan_offset as "PanOffset": f64,
        51 => tilt_offset as "TiltOffset": f64,
        52 => aim_altitude as "AimAltitude": f64,
        53 => minimum_target_width as "MinimumTargetWidth": f64,
        54 => target_lock_timeout as "TargetLockTimeout": duration,
        55 => update_status_interval as "UpdateStatusInterval": duration,
        56 => read_timeout as "ReadTimeout": duration,
        57 => move_command_status_delay as "MoveCommandStatusDelay": duration,
        58 => ptz_profile_name as "PtzProfileName": str,
        59 => ptz_configuration_token as "PtzConfigurationToken": str,
        60 => video_source_token as "VideoSourceToken": str,
    }
}
