use serde_derive::{Deserialize, Serialize};

/// A parsed map position. Lives only for the duration of one recenter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn from_fields(longitude: Option<&str>, latitude: Option<&str>) -> Option<Coordinate> {
        let longitude = longitude?.trim().parse::<f64>().ok()?;
        let latitude = latitude?.trim().parse::<f64>().ok()?;

        Some(Coordinate {
            latitude,
            longitude,
        })
    }
}
