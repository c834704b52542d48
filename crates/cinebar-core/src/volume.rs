//! Volume level to icon mapping.
//!
//! Levels are linear gain where `1.0` is 100%; anything above is
//! over-amplification.

/// Upper bound (inclusive) of the low icon range.
const LOW_MAX: f64 = 0.3;
/// Upper bound (inclusive) of the medium icon range.
const MEDIUM_MAX: f64 = 0.7;
/// Upper bound (inclusive) of the high icon range; also the overamp threshold.
const HIGH_MAX: f64 = 1.0;

/// Discrete volume icon states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeIcon {
    Muted,
    Low,
    Medium,
    High,
    Overamplified,
}

impl VolumeIcon {
    /// Standard symbolic icon name for this state.
    pub fn icon_name(self) -> &'static str {
        match self {
            VolumeIcon::Muted => "audio-volume-muted-symbolic",
            VolumeIcon::Low => "audio-volume-low-symbolic",
            VolumeIcon::Medium => "audio-volume-medium-symbolic",
            VolumeIcon::High => "audio-volume-high-symbolic",
            VolumeIcon::Overamplified => "audio-volume-overamplified-symbolic",
        }
    }
}

/// What the volume button should display for a given volume state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeIndicator {
    pub icon: VolumeIcon,
    /// Drives the scale's over-amplification marker, independent of the icon.
    pub overamplified: bool,
}

/// Map a volume level and mute flag to the icon and overamp marker.
///
/// NaN levels are treated as silent.
pub fn map_volume(level: f64, muted: bool) -> VolumeIndicator {
    let overamplified = level > HIGH_MAX;

    let icon = if level.is_nan() || level <= 0.0 || muted {
        VolumeIcon::Muted
    } else if level <= LOW_MAX {
        VolumeIcon::Low
    } else if level <= MEDIUM_MAX {
        VolumeIcon::Medium
    } else if level <= HIGH_MAX {
        VolumeIcon::High
    } else {
        VolumeIcon::Overamplified
    };

    VolumeIndicator {
        icon,
        overamplified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(map_volume(0.0, false).icon, VolumeIcon::Muted);
        assert_eq!(map_volume(0.01, false).icon, VolumeIcon::Low);
        assert_eq!(map_volume(0.3, false).icon, VolumeIcon::Low);
        assert_eq!(map_volume(0.31, false).icon, VolumeIcon::Medium);
        assert_eq!(map_volume(0.7, false).icon, VolumeIcon::Medium);
        assert_eq!(map_volume(0.71, false).icon, VolumeIcon::High);
        assert_eq!(map_volume(1.01, false).icon, VolumeIcon::Overamplified);
    }

    #[test]
    fn test_full_volume_is_high_without_overamp() {
        let indicator = map_volume(1.0, false);
        assert_eq!(indicator.icon, VolumeIcon::High);
        assert!(!indicator.overamplified);
    }

    #[test]
    fn test_muted_overamp_keeps_marker() {
        let indicator = map_volume(1.5, true);
        assert_eq!(indicator.icon, VolumeIcon::Muted);
        assert!(indicator.overamplified);
    }

    #[test]
    fn test_negative_and_nan_are_muted() {
        assert_eq!(map_volume(-0.5, false).icon, VolumeIcon::Muted);
        let nan = map_volume(f64::NAN, false);
        assert_eq!(nan.icon, VolumeIcon::Muted);
        assert!(!nan.overamplified);
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(VolumeIcon::Muted.icon_name(), "audio-volume-muted-symbolic");
        assert_eq!(
            VolumeIcon::Overamplified.icon_name(),
            "audio-volume-overamplified-symbolic"
        );
    }
}
