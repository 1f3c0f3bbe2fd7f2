use serde::Serialize;

/// Width buckets the page layout switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// width ≤ 480
    Phone,
    /// 480 < width ≤ 768
    Mobile,
    /// 768 < width ≤ 1024
    Tablet,
    /// width > 1024
    Desktop,
}

impl Breakpoint {
    pub const PHONE_MAX: f32 = 480.0;
    pub const MOBILE_MAX: f32 = 768.0;
    pub const TABLET_MAX: f32 = 1024.0;

    pub fn from_width(width: f32) -> Self {
        if width <= Self::PHONE_MAX {
            Breakpoint::Phone
        } else if width <= Self::MOBILE_MAX {
            Breakpoint::Mobile
        } else if width <= Self::TABLET_MAX {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Stable numeric code for the shared buffer header.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Phone or mobile: anything at or below 768.
    pub fn is_compact(self) -> bool {
        self <= Breakpoint::Mobile
    }

    /// Anything at or below 1024, where the hero stacks into one column.
    pub fn is_stacked(self) -> bool {
        self <= Breakpoint::Tablet
    }

    /// Pick a value per bucket.
    pub fn pick<T>(self, phone: T, mobile: T, tablet: T, desktop: T) -> T {
        match self {
            Breakpoint::Phone => phone,
            Breakpoint::Mobile => mobile,
            Breakpoint::Tablet => tablet,
            Breakpoint::Desktop => desktop,
        }
    }
}

/// Boolean switches the page derives straight from width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportFlags {
    /// Navbar collapses below 768.
    pub is_small_screen: bool,
    /// Octahedron icon only renders on wide screens.
    pub show_octahedron: bool,
}

impl ViewportFlags {
    pub const SMALL_SCREEN_BELOW: f32 = 768.0;
    pub const OCTAHEDRON_ABOVE: f32 = 1200.0;

    pub fn from_width(width: f32) -> Self {
        Self {
            is_small_screen: width < Self::SMALL_SCREEN_BELOW,
            show_octahedron: width > Self::OCTAHEDRON_ABOVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Phone);
        assert_eq!(Breakpoint::from_width(480.0), Breakpoint::Phone);
        assert_eq!(Breakpoint::from_width(481.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1025.0), Breakpoint::Desktop);
    }

    #[test]
    fn ordering_helpers() {
        assert!(Breakpoint::Mobile.is_compact());
        assert!(!Breakpoint::Tablet.is_compact());
        assert!(Breakpoint::Tablet.is_stacked());
        assert!(!Breakpoint::Desktop.is_stacked());
        assert_eq!(Breakpoint::Desktop.index(), 3);
    }

    #[test]
    fn flags_split_at_their_own_thresholds() {
        let narrow = ViewportFlags::from_width(767.0);
        assert!(narrow.is_small_screen && !narrow.show_octahedron);
        let exact = ViewportFlags::from_width(1200.0);
        assert!(!exact.is_small_screen && !exact.show_octahedron);
        assert!(ViewportFlags::from_width(1201.0).show_octahedron);
    }
}
