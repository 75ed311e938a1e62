//! Foundational types shared across the geosar workspace.

/// Solar illumination phases and their display labels.
pub mod phase {
    use std::fmt;

    use serde::{Deserialize, Serialize};

    /// One of the six mutually exclusive illumination labels.
    ///
    /// The five sunlit/dark phases partition time by solar elevation band;
    /// `Planning` covers records without a timestamp (un-geolocated legs,
    /// e.g. driving between waypoints). Variants are listed darkest first,
    /// but nothing downstream relies on ordinal comparison.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Phase {
        #[serde(rename = "Night")]
        Night,
        #[serde(rename = "Astronomical Twilight")]
        AstronomicalTwilight,
        #[serde(rename = "Nautical Twilight")]
        NauticalTwilight,
        #[serde(rename = "Civil Twilight")]
        CivilTwilight,
        #[serde(rename = "Daytime")]
        Daytime,
        #[serde(rename = "Planning")]
        Planning,
    }

    impl Phase {
        /// Human-readable label used in reports and exported tables.
        pub fn label(&self) -> &'static str {
            match self {
                Phase::Night => "Night",
                Phase::AstronomicalTwilight => "Astronomical Twilight",
                Phase::NauticalTwilight => "Nautical Twilight",
                Phase::CivilTwilight => "Civil Twilight",
                Phase::Daytime => "Daytime",
                Phase::Planning => "Planning",
            }
        }
    }

    impl fmt::Display for Phase {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }
}

/// Geographic primitives and the median helpers used to site the observer.
pub mod geo {
    /// A latitude/longitude pair in decimal degrees.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct GeoPoint {
        pub latitude: f64,
        pub longitude: f64,
    }

    /// Coordinate-wise median of a point set, each axis taken independently.
    ///
    /// Returns `None` for an empty set. The median (rather than the mean)
    /// keeps a handful of stray points, such as a track recorded before GPS
    /// lock stabilized, from dragging the result out of the operating area.
    pub fn median_position(points: &[GeoPoint]) -> Option<GeoPoint> {
        if points.is_empty() {
            return None;
        }
        let latitude = median(points.iter().map(|p| p.latitude).collect());
        let longitude = median(points.iter().map(|p| p.longitude).collect());
        Some(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// Median of a non-empty sample; even-length samples average the two
    /// middle values.
    fn median(mut values: Vec<f64>) -> f64 {
        values.sort_by(f64::total_cmp);
        let mid = values.len() / 2;
        if values.len() % 2 == 1 {
            values[mid]
        } else {
            (values[mid - 1] + values[mid]) / 2.0
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn pt(latitude: f64, longitude: f64) -> GeoPoint {
            GeoPoint {
                latitude,
                longitude,
            }
        }

        #[test]
        fn median_of_empty_set_is_none() {
            assert!(median_position(&[]).is_none());
        }

        #[test]
        fn median_of_odd_count_picks_middle_value() {
            let points = [pt(1.0, 10.0), pt(3.0, 30.0), pt(2.0, 20.0)];
            let mid = median_position(&points).unwrap();
            assert_eq!(mid.latitude, 2.0);
            assert_eq!(mid.longitude, 20.0);
        }

        #[test]
        fn median_of_even_count_averages_middle_values() {
            let points = [pt(1.0, 10.0), pt(2.0, 20.0), pt(3.0, 30.0), pt(4.0, 40.0)];
            let mid = median_position(&points).unwrap();
            assert_eq!(mid.latitude, 2.5);
            assert_eq!(mid.longitude, 25.0);
        }

        #[test]
        fn median_resists_a_single_extreme_outlier() {
            // One pre-lock point far from the operating area must not drag
            // the derived location out of the bulk of the cluster.
            let mut points = vec![pt(36.0, -79.5)];
            for i in 0..9 {
                points.push(pt(37.5 + 0.01 * i as f64, -77.4 - 0.01 * i as f64));
            }
            let mid = median_position(&points).unwrap();
            assert!(mid.latitude > 37.4 && mid.latitude < 37.7);
            assert!(mid.longitude > -77.6 && mid.longitude < -77.3);
        }
    }
}
