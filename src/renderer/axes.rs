//! Reference axes drawn around the attractor.

use crate::renderer::lines::LineVertex;

/// Extent of the X axis.
pub const X_RANGE: (f32, f32) = (-30.0, 20.0);
/// Extent of the Y axis.
pub const Y_RANGE: (f32, f32) = (-20.0, 20.0);
/// Extent of the Z axis.
pub const Z_RANGE: (f32, f32) = (-10.0, 40.0);

/// Three segments along X, Y and Z in a single color.
#[must_use]
pub fn axis_vertices(color: [f32; 3]) -> [LineVertex; 6] {
    let v = |position| LineVertex { position, color };
    [
        v([X_RANGE.0, 0.0, 0.0]),
        v([X_RANGE.1, 0.0, 0.0]),
        v([0.0, Y_RANGE.0, 0.0]),
        v([0.0, Y_RANGE.1, 0.0]),
        v([0.0, 0.0, Z_RANGE.0]),
        v([0.0, 0.0, Z_RANGE.1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_span_the_attractor_box() {
        let verts = axis_vertices([0.8, 0.8, 0.8]);
        assert_eq!(verts[0].position[0], -30.0);
        assert_eq!(verts[3].position[1], 20.0);
        assert_eq!(verts[5].position[2], 40.0);
        assert!(verts.iter().all(|v| v.color == [0.8, 0.8, 0.8]));
    }
}
