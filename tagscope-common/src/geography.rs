use std::f64::consts::PI;

/// A position given by latitude and longitude in signed degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub lat: Coord,
    pub lon: Coord,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Coord(lat),
            lon: Coord(lon),
        }
    }

    /// Return coordinate according to ISO 6709 Annex D
    ///
    /// <https://en.wikipedia.org/wiki/ISO_6709>
    ///
    /// ```
    /// # use tagscope_common::geography::*;
    /// let loc = Location::new(-46.235, 126.06861);
    /// assert_eq!(loc.iso_6709(), r#"46°14'06"S 126°04'07"E"#);
    /// ```
    pub fn iso_6709(&self) -> String {
        let (lat_deg, lat_min, lat_sec) = self.lat.as_deg_min_sec();
        let (lon_deg, lon_min, lon_sec) = self.lon.as_deg_min_sec();
        let lat_ref = LatRef::from_sign(self.lat.0);
        let lon_ref = LonRef::from_sign(self.lon.0);

        fn pad_one_0(v: f64) -> String {
            let s = format!("{v}");

            let pre_decimal = s.split_once('.').map_or(s.as_str(), |x| x.0);

            if pre_decimal.len() == 1 {
                format!("0{s}")
            } else {
                s
            }
        }

        let lat_deg = lat_deg.abs();
        let lon_deg = lon_deg.abs();
        let lat_sec = pad_one_0(lat_sec);
        let lon_sec = pad_one_0(lon_sec);

        format!("{lat_deg}°{lat_min:02}'{lat_sec}\"{lat_ref} {lon_deg}°{lon_min:02}'{lon_sec}\"{lon_ref}")
    }

    /// Locations as `geo:` URI
    ///
    /// The precision of the coordinates is limited to six decimal places.
    pub fn geo_uri(&self) -> String {
        let lat = self.lat.0;
        let lon = self.lon.0;
        // six decimal places gives more than a meter accuracy
        format!("geo:{lat:.6},{lon:.6}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub f64);

impl Coord {
    /// Return coordinate as degrees, minutes, seconds
    ///
    /// ```
    /// # use tagscope_common::geography::*;
    /// let ang = Coord(-46.235);
    /// assert_eq!(ang.as_deg_min_sec(), (-46., 14., 6.));
    /// ```
    pub fn as_deg_min_sec(&self) -> (f64, f64, f64) {
        let deg = self.0;
        let h = deg.fract().abs() * 60.;
        let s = h.fract() * 60.;

        (deg.trunc(), h.trunc(), (s * 100.).round() / 100.)
    }
}

/// Hemisphere of a latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatRef {
    North,
    South,
}

impl LatRef {
    pub fn from_sign(sign: f64) -> Self {
        if sign >= 0. {
            Self::North
        } else {
            Self::South
        }
    }

    pub fn as_sign(&self) -> f64 {
        match self {
            Self::North => 1.,
            Self::South => -1.,
        }
    }
}

impl TryFrom<&str> for LatRef {
    type Error = InvalidLatRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            v => Err(Self::Error::InvalidLatitudeRef(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidLatRef {
    #[error("Invalid latitude reference: '{0}'. Must be 'N' or 'S'.")]
    InvalidLatitudeRef(String),
}

impl std::fmt::Display for LatRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => f.write_str("N"),
            Self::South => f.write_str("S"),
        }
    }
}

/// Hemisphere of a longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LonRef {
    East,
    West,
}

impl LonRef {
    pub fn from_sign(sign: f64) -> Self {
        if sign >= 0. {
            Self::East
        } else {
            Self::West
        }
    }

    pub fn as_sign(&self) -> f64 {
        match self {
            Self::East => 1.,
            Self::West => -1.,
        }
    }
}

impl TryFrom<&str> for LonRef {
    type Error = InvalidLonRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            v => Err(Self::Error::InvalidLongitudeRef(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidLonRef {
    #[error("Invalid longitude reference: '{0}'. Must be 'E' or 'W'.")]
    InvalidLongitudeRef(String),
}

impl std::fmt::Display for LonRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::East => f.write_str("E"),
            Self::West => f.write_str("W"),
        }
    }
}

/// Map tile in the OpenStreetMap "slippy map" scheme
///
/// <https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl Tile {
    /// Highest zoom level served by the standard tile layer
    pub const MAX_ZOOM: u8 = 19;
    /// Edge length of a tile in pixels
    pub const SIZE: u32 = 256;

    /// Tile containing the location
    ///
    /// Returns `None` for zoom levels above [`Self::MAX_ZOOM`] and for
    /// latitudes outside of the Web Mercator range.
    ///
    /// ```
    /// # use tagscope_common::geography::*;
    /// let tile = Tile::for_location(Location::new(52.543644, 13.383522), 10).unwrap();
    /// assert_eq!((tile.x, tile.y), (550, 335));
    /// ```
    pub fn for_location(location: Location, zoom: u8) -> Option<Self> {
        if zoom > Self::MAX_ZOOM {
            return None;
        }

        let (x, y) = Self::fractional_position(location, zoom)?;
        let last = Self::count(zoom).checked_sub(1)?;

        Some(Self {
            x: to_index(x, last)?,
            y: to_index(y, last)?,
            zoom,
        })
    }

    /// Location of the upper left corner
    pub fn north_west(&self) -> Location {
        let n = f64::from(Self::count(self.zoom));
        let lon = f64::from(self.x) / n * 360. - 180.;
        let lat = (PI * (1. - 2. * f64::from(self.y) / n)).sinh().atan();

        Location::new(lat.to_degrees(), lon)
    }

    /// Pixel position of the location within this tile
    ///
    /// Positions outside of the tile are not clamped.
    pub fn pixel_position(&self, location: Location) -> Option<(f64, f64)> {
        let (x, y) = Self::fractional_position(location, self.zoom)?;
        let size = f64::from(Self::SIZE);

        Some((
            (x - f64::from(self.x)) * size,
            (y - f64::from(self.y)) * size,
        ))
    }

    /// URL of the tile on the standard OpenStreetMap tile server
    pub fn url(&self) -> String {
        format!(
            "https://tile.openstreetmap.org/{}/{}/{}.png",
            self.zoom, self.x, self.y
        )
    }

    fn count(zoom: u8) -> u32 {
        1_u32.checked_shl(zoom.into()).unwrap_or(u32::MAX)
    }

    fn fractional_position(location: Location, zoom: u8) -> Option<(f64, f64)> {
        let lat = location.lat.0;
        let lon = location.lon.0;

        if !(-85.0511..=85.0511).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }

        let n = f64::from(Self::count(zoom));
        let lat_rad = lat.to_radians();

        let x = (lon + 180.) / 360. * n;
        let y = (1. - (lat_rad.tan() + 1. / lat_rad.cos()).ln() / PI) / 2. * n;

        Some((x, y))
    }
}

fn to_index(value: f64, last: u32) -> Option<u32> {
    let value = value.floor();
    if value.is_nan() || value < 0. {
        return None;
    }

    if value >= f64::from(last) {
        Some(last)
    } else {
        // In range of u32 after the checks above
        Some(value as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refs() {
        assert_eq!(LatRef::try_from("S").unwrap().as_sign(), -1.);
        assert_eq!(LatRef::try_from("N ").unwrap(), LatRef::North);
        assert!(LatRef::try_from("W").is_err());
        assert_eq!(LonRef::try_from("W").unwrap().as_sign(), -1.);
        assert_eq!(LonRef::from_sign(0.), LonRef::East);
    }

    #[test]
    fn tile_corners() {
        let location = Location::new(45.4642, 9.19);
        let tile = Tile::for_location(location, 13).unwrap();
        let nw = tile.north_west();

        assert!(nw.lat.0 >= location.lat.0);
        assert!(nw.lon.0 <= location.lon.0);

        let (x, y) = tile.pixel_position(location).unwrap();
        assert!((0. ..256.).contains(&x));
        assert!((0. ..256.).contains(&y));
        assert_eq!(tile.url(), format!("https://tile.openstreetmap.org/13/{}/{}.png", tile.x, tile.y));
    }

    #[test]
    fn tile_bounds() {
        assert_eq!(
            Tile::for_location(Location::new(0., -180.), 0),
            Some(Tile { x: 0, y: 0, zoom: 0 })
        );
        assert_eq!(
            Tile::for_location(Location::new(0., 180.), 2).map(|t| t.x),
            Some(3)
        );
        assert!(Tile::for_location(Location::new(89., 0.), 5).is_none());
        assert!(Tile::for_location(Location::new(0., 0.), 20).is_none());
    }

    #[test]
    fn geo_uri() {
        assert_eq!(
            Location::new(52.5436437, -13.3835221).geo_uri(),
            "geo:52.543644,-13.383522"
        );
    }
}
