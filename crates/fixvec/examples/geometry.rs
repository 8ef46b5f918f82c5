//! Builds a triangle from raw coordinates and logs its normal, area and edge lengths.
//!
//! Run with `RUST_LOG=trace` to see more output.

use fixvec::{cross, dot, length, normalize, ShapeError, Tuple, Vec3f};
use log::LevelFilter;

fn main() -> Result<(), ShapeError> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("fixvec"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let coords = [0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 3.0, 0.0];
    let mut corners = Vec::new();
    for chunk in coords.chunks(3) {
        corners.push(Vec3f::try_from_slice(chunk)?);
    }
    let [a, b, c] = <[Vec3f; 3]>::try_from(corners).map_err(|v| ShapeError::LengthMismatch {
        expected: 3,
        found: v.len(),
    })?;
    log::debug!("corners: {a}, {b}, {c}");

    let ab = b - a;
    let ac = c - a;
    let n = cross(ab, ac);
    log::info!("normal: {}", normalize(n));
    log::info!("area: {}", length(n) / 2.0);
    log::info!("edges: {} {} {}", length(ab), length(ac), length(c - b));
    log::info!("angle at a is right: {}", dot(ab, ac) == 0.0);

    // Degenerate triangles have no normal.
    let flat = cross(ab, ab * 2.0);
    log::info!("collinear edges give {flat}, normalized to {}", normalize(flat));

    Ok(())
}
