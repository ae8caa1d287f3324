// Map scene assembly for the home page
use serde::Serialize;

const MARKER_BOUNDS_PAD: f64 = 0.2;
const INITIAL_ZOOM: u8 = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: [f64; 2],
    pub popup: &'static str,
}

/// Rectangle the map widget should fit, already padded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

impl Bounds {
    fn around(points: &[[f64; 2]], pad_ratio: f64) -> Self {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for p in points {
            for axis in 0..2 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        let pad = [
            (max[0] - min[0]) * pad_ratio,
            (max[1] - min[1]) * pad_ratio,
        ];
        Self {
            south_west: [min[0] - pad[0], min[1] - pad[1]],
            north_east: [max[0] + pad[0], max[1] + pad[1]],
        }
    }
}

/// Everything the mapping widget needs for one route: endpoint markers, the
/// route polyline, and fitted bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub polyline: Vec<[f64; 2]>,
    pub bounds: Bounds,
}

impl MapScene {
    /// Markers at the endpoints, bounds padded the way the map widget pads a
    /// feature group. `polyline` is the route geometry or the straight
    /// start-end fallback.
    pub fn for_route(start: [f64; 2], end: [f64; 2], polyline: Vec<[f64; 2]>) -> Self {
        let center = [(start[0] + end[0]) / 2.0, (start[1] + end[1]) / 2.0];
        let markers = vec![
            Marker {
                position: start,
                popup: "Start",
            },
            Marker {
                position: end,
                popup: "End",
            },
        ];
        let bounds = Bounds::around(&[start, end], MARKER_BOUNDS_PAD);
        Self {
            center,
            zoom: INITIAL_ZOOM,
            markers,
            polyline,
            bounds,
        }
    }
}
