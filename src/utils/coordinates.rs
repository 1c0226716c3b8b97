use crate::error::{AtlasError, Result};
use crate::models::Position;

/// Parse a "degrees + hemisphere" coordinate pair into signed decimal degrees
///
/// # Examples
/// ```
/// use mudvolcano_atlas::utils::parse_coordinate_pair;
///
/// let position = parse_coordinate_pair("22.983° N, 121.209° E").unwrap();
/// assert!((position.latitude - 22.983).abs() < 0.000001);
/// assert!((position.longitude - 121.209).abs() < 0.000001);
/// ```
pub fn parse_coordinate_pair(text: &str) -> Result<Position> {
    let parts: Vec<&str> = text.split(',').collect();

    if parts.len() != 2 {
        return Err(AtlasError::InvalidCoordinate(format!(
            "Invalid coordinate pair: '{}'. Expected format: 'DD.DDD° N|S, DD.DDD° E|W'",
            text
        )));
    }

    let latitude = parse_component(parts[0], Axis::Latitude)?;
    let longitude = parse_component(parts[1], Axis::Longitude)?;

    Ok(Position::new(latitude, longitude))
}

/// Format a position back into the canonical coordinate text encoding.
///
/// Round-trips through [`parse_coordinate_pair`] within float tolerance.
pub fn format_coordinate_pair(latitude: f64, longitude: f64) -> String {
    let lat_dir = if latitude < 0.0 { "S" } else { "N" };
    let lon_dir = if longitude < 0.0 { "W" } else { "E" };

    format!(
        "{:.3}° {}, {:.3}° {}",
        latitude.abs(),
        lat_dir,
        longitude.abs(),
        lon_dir
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn label(&self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }
}

/// Parse one "magnitude° DIRECTION" component into signed decimal degrees.
///
/// Sign follows the standard geographic convention: N and E positive, S and
/// W negative. The sign is applied to the absolute magnitude, so pre-negated
/// inputs like "-121.209° W" still resolve to the western hemisphere instead
/// of double-negating.
fn parse_component(component: &str, axis: Axis) -> Result<f64> {
    let pieces: Vec<&str> = component.split('°').collect();

    if pieces.len() != 2 {
        return Err(AtlasError::InvalidCoordinate(format!(
            "Missing degree symbol in {} component: '{}'",
            axis.label(),
            component.trim()
        )));
    }

    // The source data mixes en-dash and hyphen for negative magnitudes.
    let magnitude_text = pieces[0].trim().replace('\u{2013}', "-");

    let magnitude = magnitude_text.parse::<f64>().map_err(|_| {
        AtlasError::InvalidCoordinate(format!(
            "Invalid {} value: '{}'",
            axis.label(),
            pieces[0].trim()
        ))
    })?;

    let direction = pieces[1].trim();
    let sign = match (axis, direction) {
        (Axis::Latitude, "N") => 1.0,
        (Axis::Latitude, "S") => -1.0,
        (Axis::Longitude, "E") => 1.0,
        (Axis::Longitude, "W") => -1.0,
        _ => {
            return Err(AtlasError::InvalidCoordinate(format!(
                "Invalid hemisphere letter for {}: '{}'",
                axis.label(),
                direction
            )));
        }
    };

    Ok(sign * magnitude.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.000001,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_north_east_positive() {
        let position = parse_coordinate_pair("42.417° N, 142.183° E").unwrap();
        assert_close(position.latitude, 42.417);
        assert_close(position.longitude, 142.183);
    }

    #[test]
    fn test_south_west_negative() {
        let position = parse_coordinate_pair("10.180° S, 61.358° W").unwrap();
        assert_close(position.latitude, -10.180);
        assert_close(position.longitude, -61.358);
    }

    #[test]
    fn test_whitespace_around_hemisphere_letter() {
        let position = parse_coordinate_pair("33.204°   N , 115.579°  W").unwrap();
        assert_close(position.latitude, 33.204);
        assert_close(position.longitude, -115.579);
    }

    #[test]
    fn test_pre_negated_longitude_keeps_hemisphere_sign() {
        let hyphen = parse_coordinate_pair("39.450° N, -123.800° W").unwrap();
        let en_dash = parse_coordinate_pair("39.450° N, \u{2013}123.800° W").unwrap();
        let plain = parse_coordinate_pair("39.450° N, 123.800° W").unwrap();

        assert_close(hyphen.longitude, -123.800);
        assert_close(en_dash.longitude, hyphen.longitude);
        assert_close(plain.longitude, hyphen.longitude);
    }

    #[test]
    fn test_missing_comma() {
        assert!(parse_coordinate_pair("42.417° N 142.183° E").is_err());
        assert!(parse_coordinate_pair("42.417° N, 142.183° E, 0.0° N").is_err());
    }

    #[test]
    fn test_missing_degree_symbol() {
        assert!(parse_coordinate_pair("42.417 N, 142.183° E").is_err());
        assert!(parse_coordinate_pair("42.417° N, 142.183 E").is_err());
    }

    #[test]
    fn test_non_numeric_magnitude() {
        assert!(parse_coordinate_pair("forty-two° N, 142.183° E").is_err());
    }

    #[test]
    fn test_invalid_hemisphere_letter() {
        assert!(parse_coordinate_pair("42.417° X, 142.183° E").is_err());
        // Hemisphere letters in the wrong slot are rejected too
        assert!(parse_coordinate_pair("42.417° E, 142.183° N").is_err());
    }

    #[test]
    fn test_format_parse_round_trip() {
        for &(lat, lon) in &[
            (42.417, 142.183),
            (10.180, -61.358),
            (-33.204, 115.579),
            (-62.113, -145.975),
            (0.0, 0.0),
        ] {
            let text = format_coordinate_pair(lat, lon);
            let position = parse_coordinate_pair(&text).unwrap();
            assert!((position.latitude - lat).abs() < 0.001);
            assert!((position.longitude - lon).abs() < 0.001);
        }
    }
}
