pub mod console;

use crate::models::coordinate::Coordinate;

/// Camera zoom applied when recentering on a notification position.
pub const NOTIFICATION_ZOOM: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerIcon {
    Red,
    Green,
    Blue,
}

/// Rendering capability the presenter drives. Tile loading, camera physics
/// and marker drawing live on the other side of this seam.
pub trait MapSurface {
    fn clear_markers(&mut self);

    fn add_marker(&mut self, position: Coordinate, title: &str, icon: MarkerIcon);

    fn animate_to(&mut self, position: Coordinate, zoom: f32);
}
