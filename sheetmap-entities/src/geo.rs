use std::fmt;

pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = RawCoord::MIN;
const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

/// Compact fixed-point integer representation of a geographical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_COORD_INVALID);

    pub const fn to_raw(self) -> RawCoord {
        self.0
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(raw)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        let res = Self::INVALID;
        debug_assert!(!res.is_valid());
        res
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else if self.is_valid() && other.is_valid() {
            Some(self.to_raw().cmp(&other.to_raw()))
        } else {
            None
        }
    }
}

// Latitude and longitude only differ in their degree range.
macro_rules! degree_coord {
    ($name:ident, $deg_max:expr) => {
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd)]
        pub struct $name(GeoCoord);

        impl $name {
            const DEG_MAX: f64 = $deg_max;
            const DEG_MIN: f64 = -$deg_max;
            const TO_DEG: f64 =
                (Self::DEG_MAX - Self::DEG_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);
            const FROM_DEG: f64 =
                (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64) / (Self::DEG_MAX - Self::DEG_MIN);

            pub const fn to_raw(self) -> RawCoord {
                self.0.to_raw()
            }

            pub const fn from_raw(raw: RawCoord) -> Self {
                Self(GeoCoord::from_raw(raw))
            }

            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }

            pub fn to_deg(self) -> f64 {
                if self.is_valid() {
                    let deg = f64::from(self.to_raw()) * Self::TO_DEG;
                    debug_assert!(deg >= Self::DEG_MIN);
                    debug_assert!(deg <= Self::DEG_MAX);
                    deg
                } else {
                    f64::NAN
                }
            }

            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!(deg >= Self::DEG_MIN);
                debug_assert!(deg <= Self::DEG_MAX);
                let res = Self::from_raw(f64::round(deg * Self::FROM_DEG) as RawCoord);
                debug_assert!(res.is_valid());
                res
            }

            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                // NaN fails both comparisons
                if deg >= Self::DEG_MIN && deg <= Self::DEG_MAX {
                    Some(Self::from_deg(deg))
                } else {
                    None
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.to_deg())
            }
        }
    };
}

degree_coord!(LatCoord, 90.0);
degree_coord!(LngCoord, 180.0);

/// Compact internal representation of a geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Axis-aligned bounding box, e.g. the viewport that
/// a map needs to show all resolved places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    /// The smallest box that covers all valid points.
    ///
    /// Returns `None` if there is no valid point at all.
    /// Boxes crossing the antimeridian are not considered.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = MapPoint>,
    {
        points
            .into_iter()
            .filter(|pos| pos.is_valid())
            .fold(None, |bbox: Option<Self>, pos| {
                let Some(Self { sw, ne }) = bbox else {
                    return Some(Self::new(pos, pos));
                };
                let sw = MapPoint::new(
                    LatCoord::from_raw(sw.lat().to_raw().min(pos.lat().to_raw())),
                    LngCoord::from_raw(sw.lng().to_raw().min(pos.lng().to_raw())),
                );
                let ne = MapPoint::new(
                    LatCoord::from_raw(ne.lat().to_raw().max(pos.lat().to_raw())),
                    LngCoord::from_raw(ne.lng().to_raw().max(pos.lng().to_raw())),
                );
                Some(Self::new(sw, ne))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_degree_roundtrip_is_precise_enough() {
        let pos = MapPoint::from_lat_lng_deg(51.523_767, -0.158_556);
        let (lat, lng) = pos.to_lat_lng_deg();
        assert!((lat - 51.523_767).abs() < 1e-6);
        assert!((lng + 0.158_556).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_degrees() {
        assert!(LatCoord::try_from_deg(90.1).is_none());
        assert!(LatCoord::try_from_deg(-90.1).is_none());
        assert!(LngCoord::try_from_deg(180.5).is_none());
        assert!(LngCoord::try_from_deg(f64::NAN).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(45.0, 200.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 180.0).is_some());
    }

    #[test]
    fn default_point_is_invalid() {
        assert!(!MapPoint::default().is_valid());
        assert!(LatCoord::default().to_deg().is_nan());
    }

    #[test]
    fn enclosing_bbox() {
        assert!(MapBbox::enclosing(vec![]).is_none());
        assert!(MapBbox::enclosing(vec![MapPoint::default()]).is_none());

        let london = MapPoint::from_lat_lng_deg(51.5, -0.12);
        let paris = MapPoint::from_lat_lng_deg(48.85, 2.35);
        let berlin = MapPoint::from_lat_lng_deg(52.52, 13.4);

        let single = MapBbox::enclosing(vec![london]).unwrap();
        assert_eq!(single.south_west(), london);
        assert_eq!(single.north_east(), london);

        let bbox = MapBbox::enclosing(vec![london, MapPoint::default(), paris, berlin]).unwrap();
        assert!(bbox.is_valid());
        assert_eq!(bbox.south_west(), MapPoint::from_lat_lng_deg(48.85, -0.12));
        assert_eq!(bbox.north_east(), MapPoint::from_lat_lng_deg(52.52, 13.4));

        let with_rome =
            MapBbox::enclosing(vec![london, paris, berlin, MapPoint::from_lat_lng_deg(41.9, 12.5)])
                .unwrap();
        assert_eq!(with_rome.south_west(), MapPoint::from_lat_lng_deg(41.9, -0.12));
        assert_eq!(with_rome.north_east(), bbox.north_east());
    }
}
