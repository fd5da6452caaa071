use log::info;

use crate::map::{MapSurface, MarkerIcon};
use crate::models::coordinate::Coordinate;

/// Renders map operations as log lines, the headless stand-in for a real
/// tile renderer.
pub struct ConsoleMapSurface {
    markers: usize,
}

impl ConsoleMapSurface {
    pub fn new() -> ConsoleMapSurface {
        ConsoleMapSurface { markers: 0 }
    }
}

impl MapSurface for ConsoleMapSurface {
    fn clear_markers(&mut self) {
        if self.markers > 0 {
            info!("Map cleared, {} marker(s) removed", self.markers);
        }
        self.markers = 0;
    }

    fn add_marker(&mut self, position: Coordinate, title: &str, icon: MarkerIcon) {
        self.markers += 1;
        info!(
            "Marker '{}' ({:?}) placed at lat {}, lon {}",
            title, icon, position.latitude, position.longitude
        );
    }

    fn animate_to(&mut self, position: Coordinate, zoom: f32) {
        info!(
            "Camera moving to lat {}, lon {} at zoom {}",
            position.latitude, position.longitude, zoom
        );
    }
}
