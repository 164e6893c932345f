use crate::body::{Aabb, KinematicBody};

/// Strict AABB intersection. Edge-touching boxes do not overlap.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}

/// Separate `body` from a static `tile` along the minimum-penetration axis.
///
/// Exactly one axis is corrected per overlapping pair per tick; simultaneous
/// corner overlaps resolve by whichever side has least penetration. The
/// correction only applies when the velocity component opposes the chosen
/// side, so a body already moving away from the contact is left alone.
/// Landing (top-side) resolution also grounds the body. Non-overlapping
/// pairs are a no-op.
pub fn resolve(body: &mut KinematicBody, tile: &Aabb) {
    let bounds = body.bounds();
    if !overlaps(&bounds, tile) {
        return;
    }

    let overlap_left = bounds.right - tile.left;
    let overlap_right = tile.right - bounds.left;
    let overlap_top = bounds.bottom - tile.top;
    let overlap_bottom = tile.bottom - bounds.top;

    let min_overlap = overlap_left
        .min(overlap_right)
        .min(overlap_top)
        .min(overlap_bottom);

    if min_overlap == overlap_top && body.vy > 0.0 {
        // Falling onto the tile.
        body.y = tile.top - body.height;
        body.vy = 0.0;
        body.on_ground = true;
    } else if min_overlap == overlap_bottom && body.vy < 0.0 {
        // Rising into the tile's underside.
        body.y = tile.bottom;
        body.vy = 0.0;
    } else if min_overlap == overlap_left && body.vx > 0.0 {
        body.x = tile.left - body.width;
        body.vx = 0.0;
    } else if min_overlap == overlap_right && body.vx < 0.0 {
        body.x = tile.right;
        body.vx = 0.0;
    }
}
