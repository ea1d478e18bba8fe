//! # Primitive Shape Generation
//!
//! All shapes are centered at the origin and generated with outward normals.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a box with the given extents centered at the origin
///
/// Each face gets its own four vertices so normals stay flat.
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let half = [width * 0.5, height * 0.5, depth * 0.5];

    // (normal, u, v) with u x v == normal so corners wind counter-clockwise
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];

    for (normal, u, v) in faces {
        let corner = |su: f32, sv: f32| -> [f32; 3] {
            let mut p = [0.0; 3];
            for axis in 0..3 {
                p[axis] = (normal[axis] + su * u[axis] + sv * v[axis]) * half[axis];
            }
            p
        };

        let base = data.push_vertex(corner(-1.0, -1.0), normal);
        data.push_vertex(corner(1.0, -1.0), normal);
        data.push_vertex(corner(1.0, 1.0), normal);
        data.push_vertex(corner(-1.0, 1.0), normal);

        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `segments` - Number of horizontal segments (longitude)
/// * `rings` - Number of vertical rings (latitude)
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segments = segments.max(3);
    let rings = rings.max(2);

    for ring in 0..=rings {
        let theta = ring as f32 * PI / rings as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for segment in 0..=segments {
            let phi = segment as f32 * 2.0 * PI / segments as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            let position = [normal[0] * radius, normal[1] * radius, normal[2] * radius];
            data.push_vertex(position, normal);
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * stride + segment;
            let next = current + stride;

            data.indices
                .extend_from_slice(&[current, current + 1, next, next, current + 1, next + 1]);
        }
    }

    data
}

/// Generate a capped cylinder along the Y axis, centered at the origin
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segments = segments.max(3);
    let half_height = height * 0.5;

    // Side wall
    for segment in 0..=segments {
        let angle = segment as f32 * 2.0 * PI / segments as f32;
        let (sin, cos) = angle.sin_cos();
        let normal = [cos, 0.0, sin];

        data.push_vertex([radius * cos, -half_height, radius * sin], normal);
        data.push_vertex([radius * cos, half_height, radius * sin], normal);
    }

    for segment in 0..segments {
        let bottom = segment * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;

        data.indices
            .extend_from_slice(&[bottom, top, next_bottom, next_bottom, top, next_top]);
    }

    // Caps
    for (y, normal_y) in [(half_height, 1.0f32), (-half_height, -1.0f32)] {
        let normal = [0.0, normal_y, 0.0];
        let center = data.push_vertex([0.0, y, 0.0], normal);

        for segment in 0..=segments {
            let angle = segment as f32 * 2.0 * PI / segments as f32;
            let (sin, cos) = angle.sin_cos();
            data.push_vertex([radius * cos, y, radius * sin], normal);
        }

        for segment in 0..segments {
            let current = center + 1 + segment;
            if normal_y > 0.0 {
                data.indices
                    .extend_from_slice(&[center, current + 1, current]);
            } else {
                data.indices
                    .extend_from_slice(&[center, current, current + 1]);
            }
        }
    }

    data
}

/// Generate a flat plane in the XZ plane, facing +Y
pub fn generate_plane(width: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let hw = width * 0.5;
    let hd = depth * 0.5;
    let normal = [0.0, 1.0, 0.0];

    data.push_vertex([-hw, 0.0, hd], normal);
    data.push_vertex([hw, 0.0, hd], normal);
    data.push_vertex([hw, 0.0, -hd], normal);
    data.push_vertex([-hw, 0.0, -hd], normal);
    data.indices.extend_from_slice(&[0, 1, 2, 2, 3, 0]);

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents(data: &GeometryData) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in &data.vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        (min, max)
    }

    #[test]
    fn test_box_extents_and_faces() {
        let data = generate_box(1.0, 1.5, 0.8);
        assert_eq!(data.vertex_count(), 24);
        assert_eq!(data.triangle_count(), 12);

        let (min, max) = extents(&data);
        assert_eq!(min, [-0.5, -0.75, -0.4]);
        assert_eq!(max, [0.5, 0.75, 0.4]);
    }

    #[test]
    fn test_cylinder_height_along_y() {
        let data = generate_cylinder(0.1, 1.0, 16);
        let (min, max) = extents(&data);
        assert!((min[1] + 0.5).abs() < 1e-6);
        assert!((max[1] - 0.5).abs() < 1e-6);
        assert!(max[0] <= 0.1 + 1e-6);
        assert!(data.indices.iter().all(|&i| (i as usize) < data.vertex_count()));
    }

    #[test]
    fn test_sphere_indices_in_range() {
        let data = generate_sphere(0.05, 16, 16);
        assert_eq!(data.triangle_count(), 16 * 16 * 2);
        assert!(data.indices.iter().all(|&i| (i as usize) < data.vertex_count()));
    }
}
