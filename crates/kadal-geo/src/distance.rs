use crate::position::Position;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance in kilometres.
pub fn distance_km(from: Position, to: Position) -> f64 {
    let lat_from = from.latitude.to_radians();
    let lat_to = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();
    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat_from.cos() * lat_to.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * half_chord.sqrt().asin()
}

/// Total length of an ordered waypoint track.
pub fn track_length_km(track: &[Position]) -> f64 {
    track
        .windows(2)
        .map(|leg| distance_km(leg[0], leg[1]))
        .sum()
}
