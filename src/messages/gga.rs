#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, GpsQuality, add_enum_field, add_padded, expect_unit};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::{coordinate, time_of_day},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GGA {
    /// Fix time in UTC, seconds since midnight
    pub time: f64,
    /// Latitude in degrees, negative south
    pub latitude: f64,
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// GPS Quality Indicator
    pub quality: Option<GpsQuality>,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: f64,
    /// Geoidal separation in meters, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoidal_separation: f64,
    /// Age of Differential GPS data in seconds
    pub dgps_age: f64,
    /// Differential reference station ID
    pub dgps_station_id: u16,
}

impl Decode for GGA {
    const TYPE_CODE: &'static str = "GGA";
    const MIN_FIELDS: usize = 14;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        expect_unit(sentence, 9, 'M')?;
        expect_unit(sentence, 11, 'M')?;

        Ok(GGA {
            time: time_of_day(sentence.field(0)),
            latitude: coordinate(sentence.field(1), sentence.field(2)),
            longitude: coordinate(sentence.field(3), sentence.field(4)),
            quality: GpsQuality::from_field(sentence.field(5)),
            satellite_count: sentence.get(6),
            hdop: sentence.get(7),
            altitude: sentence.get(8),
            geoidal_separation: sentence.get(10),
            dgps_age: sentence.get(12),
            dgps_station_id: sentence.get(13),
        })
    }
}

impl Encode for GGA {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_time_field(self.time)?;
        sentence.add_latitude_field(self.latitude)?;
        sentence.add_longitude_field(self.longitude)?;
        add_enum_field(&mut sentence, self.quality.map(GpsQuality::as_char))?;
        add_padded(&mut sentence, self.satellite_count, 2)?;
        sentence.add_double_field(self.hdop, 1.0, NumberFormat::DEFAULT, None)?;
        sentence.add_double_field(self.altitude, 1.0, NumberFormat::DEFAULT, Some("M"))?;
        sentence.add_double_field(self.geoidal_separation, 1.0, NumberFormat::DEFAULT, Some("M"))?;
        sentence.add_double_field(self.dgps_age, 1.0, NumberFormat::DEFAULT, None)?;
        add_padded(&mut sentence, self.dgps_station_id, 4)?;
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::na::NotAvailable;

    const FIXTURE: &str = "$GPGGA,182435.00,6023.20859,N,02219.99442,E,2,10,0.9,4.0,M,20.6,M,5.0,0120*4D";

    #[test]
    fn test_gga_fixture() {
        let gga = GGA::decode(&Sentence::parse(FIXTURE).unwrap()).unwrap().unwrap();

        assert!((gga.time - 66275.0).abs() < 1e-6);
        assert!((gga.latitude - (60.0 + 23.20859 / 60.0)).abs() < 1e-9);
        assert!((gga.longitude - (22.0 + 19.99442 / 60.0)).abs() < 1e-9);
        assert_eq!(gga.quality, Some(GpsQuality::DgpsFix));
        assert_eq!(gga.satellite_count, 10);
        assert_eq!(gga.hdop, 0.9);
        assert_eq!(gga.altitude, 4.0);
        assert_eq!(gga.geoidal_separation, 20.6);
        assert_eq!(gga.dgps_age, 5.0);
        assert_eq!(gga.dgps_station_id, 120);

        // Minutes are written with three decimals.
        assert_eq!(
            gga.encode("GP").unwrap().to_string(),
            "$GPGGA,182435.00,6023.209,N,02219.994,E,2,10,0.9,4.0,M,20.6,M,5.0,0120*46"
        );
    }

    #[test]
    fn test_gga_not_available() {
        let gga = GGA {
            time: f64::NA,
            latitude: f64::NA,
            longitude: f64::NA,
            quality: None,
            satellite_count: u8::NA,
            hdop: f64::NA,
            altitude: f64::NA,
            geoidal_separation: f64::NA,
            dgps_age: f64::NA,
            dgps_station_id: u16::NA,
        };

        let sentence = gga.encode("GP").unwrap();
        assert_eq!(sentence.to_string(), "$GPGGA,,,,,,,,,,M,,M,,*56");

        let decoded = GGA::decode(&sentence).unwrap().unwrap();
        assert!(decoded.latitude.is_na());
        assert!(decoded.satellite_count.is_na());
        assert!(decoded.dgps_station_id.is_na());
        assert_eq!(decoded.quality, None);
    }

    #[test]
    fn test_gga_unknown_altitude_unit() {
        let mut raw = "$GPGGA,182435.00,6023.20859,N,02219.99442,E,2,10,0.9,4.0,f,20.6,M,5.0,0120".to_string();
        crate::checksum::append_checksum(&mut raw);

        assert_eq!(
            GGA::decode(&Sentence::parse(&raw).unwrap()),
            Err(DecodeError::UnknownUnit { field: 9, unit: 'f' })
        );
    }
}
