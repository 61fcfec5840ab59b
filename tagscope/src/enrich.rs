//! Place names and maps for GPS positions
//!
//! The actual lookups are done by implementations of [`Geocoder`] and
//! [`MapTiles`]. Failing lookups leave the respective part of the
//! [`Enrichment`] empty.

use tagscope_common::geography::{Location, Tile};

use crate::error::EnrichmentError;
use crate::gps::GpsFix;

/// Reverse geocoding
pub trait Geocoder {
    /// Name of the place at `location`
    ///
    /// The `detail` follows the zoom levels of the OpenStreetMap Nominatim
    /// service, 3 for countries up to 18 for buildings.
    fn place_name(&self, location: Location, detail: u8) -> Result<String, EnrichmentError>;
}

/// Source for maps around a location
pub trait MapTiles {
    fn map(&self, location: Location, zoom: u8) -> Result<MapView, EnrichmentError>;
}

/// Map tile with the position of the location on it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapView {
    pub tile: Tile,
    pub url: String,
    /// Upper left corner of the tile
    pub north_west: Location,
    /// Pixel position of the location on the tile
    pub marker: (f64, f64),
    /// Image data if the tile was fetched
    #[cfg_attr(feature = "serde", serde(skip))]
    pub image: Option<Vec<u8>>,
}

/// Addresses tiles on the OpenStreetMap tile server without fetching them
#[derive(Debug, Clone, Copy, Default)]
pub struct OsmTileIndex;

impl MapTiles for OsmTileIndex {
    fn map(&self, location: Location, zoom: u8) -> Result<MapView, EnrichmentError> {
        let tile = Tile::for_location(location, zoom).ok_or(EnrichmentError::OutsideProjection)?;
        let marker = tile
            .pixel_position(location)
            .ok_or(EnrichmentError::OutsideProjection)?;

        Ok(MapView {
            tile,
            url: tile.url(),
            north_west: tile.north_west(),
            marker,
            image: None,
        })
    }
}

/// Geocoder for setups without a place name service
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeocoder;

impl Geocoder for NoGeocoder {
    fn place_name(&self, _location: Location, _detail: u8) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Unavailable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    pub zoom_levels: Vec<u8>,
    pub place_detail: u8,
}

impl Default for EnrichmentRequest {
    fn default() -> Self {
        Self {
            zoom_levels: vec![7, 10, 13],
            place_detail: 14,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enrichment {
    pub place: Option<String>,
    /// Maps for the zoom levels that could be provided
    pub maps: Vec<MapView>,
}

impl Enrichment {
    pub fn is_empty(&self) -> bool {
        self.place.is_none() && self.maps.is_empty()
    }
}

/// Look up place name and maps for the fix
///
/// Nothing is looked up unless latitude and longitude are both known.
pub fn enrich(
    fix: &GpsFix,
    geocoder: &dyn Geocoder,
    tiles: &dyn MapTiles,
    request: &EnrichmentRequest,
) -> Enrichment {
    let Some(location) = fix.location() else {
        return Enrichment::default();
    };

    let place = geocoder
        .place_name(location, request.place_detail)
        .map_err(|err| tracing::info!("No place name for {}: {err}", location.geo_uri()))
        .ok();

    let maps = request
        .zoom_levels
        .iter()
        .filter_map(|zoom| {
            tiles
                .map(location, *zoom)
                .map_err(|err| tracing::info!("No map at zoom level {zoom}: {err}"))
                .ok()
        })
        .collect();

    Enrichment { place, maps }
}
