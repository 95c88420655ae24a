//! Reine Geometrie-Hilfen auf Lat/Lng-Koordinaten.

use super::LatLng;

/// Arithmetisches Mittel aller Punkte. Leere Eingabe → `(0, 0)`.
pub fn centroid(coords: &[LatLng]) -> LatLng {
    if coords.is_empty() {
        return LatLng::ZERO;
    }
    let sum: LatLng = coords.iter().copied().sum();
    sum / coords.len() as f64
}

/// Mittelpunkt der Bounding-Box (Label-Position). Leere Eingabe → `None`.
pub fn bounds_center(coords: &[LatLng]) -> Option<LatLng> {
    let first = *coords.first()?;
    let (min, max) = coords
        .iter()
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
    Some((min + max) * 0.5)
}

/// Mittelpunkte aller Kanten des geschlossenen Rings.
///
/// Eintrag `i` liegt zwischen Punkt `i` und `(i + 1) % n`, passt also direkt zu
/// `insert_vertex(i, mid)`. Weniger als zwei Punkte → keine Kanten.
pub fn edge_midpoints(coords: &[LatLng]) -> Vec<LatLng> {
    let n = coords.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| (coords[i] + coords[(i + 1) % n]) * 0.5)
        .collect()
}
