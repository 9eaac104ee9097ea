#[cfg(feature = "kml-io")]
mod kml;

#[cfg(feature = "geojson-io")]
mod geojson;

mod report;

#[cfg(any(feature = "kml-io", feature = "geojson-io"))]
use crate::plan::Plan;

/// Generic I/O and format‑conversion errors.
///
/// Many I/O features are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    ParseFloat(std::num::ParseFloatError),

    MalformedInput(String),
    UnsupportedFormat(String),
    Unimplemented(String),

    /// The plan holds no pivots, so there is nothing to write out.
    NothingToExport,

    #[cfg(feature = "geojson-io")]
    /// Error bubbled up from the `serde_json` crate during parsing.
    Json(::serde_json::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
            UnsupportedFormat(msg) => write!(f, "Unsupported boundary format: {msg}"),
            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),

            NothingToExport => write!(f, "The plan has no pivots to export"),

            #[cfg(feature = "geojson-io")]
            Json(error) => write!(f, "GeoJSON parsing error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::num::ParseFloatError> for IoError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

#[cfg(feature = "geojson-io")]
impl From<::serde_json::Error> for IoError {
    fn from(value: ::serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(any(feature = "kml-io", feature = "geojson-io"))]
impl Plan {
    /// Import a land parcel outline, choosing the parser from the file
    /// name's extension. `.kml` goes through the KML reader, `.geojson`
    /// and `.json` through the GeoJSON reader; anything else is
    /// unsupported.
    pub fn import_land_boundary(
        &mut self,
        file_name: &str,
        contents: &str,
    ) -> Result<(), IoError> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".kml") {
            #[cfg(feature = "kml-io")]
            {
                let ring = kml::parse_land_ring(contents)?;
                self.set_land_boundary(ring);
                return Ok(());
            }
            #[cfg(not(feature = "kml-io"))]
            return Err(IoError::Unimplemented(
                "KML import requires the kml-io feature".into(),
            ));
        }
        if lower.ends_with(".geojson") || lower.ends_with(".json") {
            #[cfg(feature = "geojson-io")]
            {
                let ring = geojson::parse_land_ring(contents)?;
                self.set_land_boundary(ring);
                return Ok(());
            }
            #[cfg(not(feature = "geojson-io"))]
            return Err(IoError::Unimplemented(
                "GeoJSON import requires the geojson-io feature".into(),
            ));
        }
        Err(IoError::UnsupportedFormat(file_name.to_string()))
    }
}
