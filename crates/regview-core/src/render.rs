use crate::display::STRIP_WIDTH;
use crate::protocol::DisplayUpdate;
use crate::surface::{BLACK, RasterTarget, Rgba, TRANSPARENT};

/// Colors for one strip: opaque black where set, alpha 0 elsewhere.
pub fn strip_colors(update: &DisplayUpdate) -> [Rgba; STRIP_WIDTH] {
    update
        .pixels()
        .map(|set| if set { BLACK } else { TRANSPARENT })
}

/// Paints `update` onto `target` as a 16x1 overwrite at `(x, y)`.
pub fn render_strip<T: RasterTarget + ?Sized>(update: &DisplayUpdate, target: &mut T) {
    let colors = strip_colors(update);
    target.put_region(update.x, update.y, STRIP_WIDTH, &colors);
}
