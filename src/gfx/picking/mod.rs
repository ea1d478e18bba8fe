//! # Object Picking System
//!
//! Converts a pointer position into a world-space ray and finds the nearest
//! pickable object it hits.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: normalize the pointer to device coordinates (-1 to 1,
//!    Y up) and unproject the near and far planes through the camera
//! 2. **Ray-Object Intersection**: move the ray into each object's local space
//!    and test it against the mesh's bounding box (an oriented box in world space)
//! 3. **Selection**: keep the hit with the smallest ray distance; on an exact
//!    tie the object that comes first in the scene wins
//!
//! Picking has no side effects and never fails: an empty scene, a zero-sized
//! viewport or a ray that misses everything all produce `None`.
//!
//! ## Usage
//!
//! ```rust
//! use robot_viewer::gfx::{camera::OrbitCamera, picking::pick};
//! use robot_viewer::robot::robot_scene;
//!
//! let scene = robot_scene();
//! let camera = OrbitCamera::new(5.0, 0.0, 0.0, cgmath::Vector3::new(0.0, 1.75, 0.0), 1.0);
//! let hit = pick((400.0, 400.0), (800.0, 800.0), &camera, &scene);
//! assert_eq!(hit.map(|h| scene.object(h.node).unwrap().name.clone()), Some("Head".to_string()));
//! ```

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::{
    camera::OrbitCamera,
    scene::{NodeHandle, Object, Scene},
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        let Some(first) = vertices.first() else {
            return Self::new(Vector3::zero(), Vector3::zero());
        };

        let mut min = Vector3::new(first[0], first[1], first[2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    /// Slab test. Returns the ray parameter of the entry point, or of the exit
    /// point when the origin is inside the box.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            if direction.abs() < 1e-8 {
                // Parallel to this slab: must already be inside it
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let mut t1 = (min - origin) * inv;
            let mut t2 = (max - origin) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            t_near = t_near.max(t1);
            t_far = t_far.min(t2);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }
        Some(if t_near >= 0.0 { t_near } else { t_far })
    }
}

/// Result of an object picking operation
#[derive(Debug, Clone, Copy)]
pub struct PickResult {
    /// Handle of the picked object
    pub node: NodeHandle,
    /// Distance along the pick ray to the intersection point
    pub distance: f32,
    /// World space intersection point
    pub intersection_point: Vector3<f32>,
}

/// Convert screen coordinates to a world-space ray
///
/// Returns `None` for a zero-sized viewport or a camera whose view-projection
/// cannot be inverted.
pub fn screen_to_ray(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    camera: &OrbitCamera,
) -> Option<Ray> {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = screen_size;
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return None;
    }

    // Normalized device coordinates (-1 to 1)
    let ndc_x = (2.0 * mouse_x) / screen_width - 1.0;
    let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height; // Flip Y axis

    let view_proj = camera.picking_projection_matrix() * camera.view_matrix();
    let inv_view_proj = view_proj.invert();
    debug_assert!(inv_view_proj.is_some(), "camera has no invertible projection");
    let inv_view_proj = inv_view_proj?;

    let near_3d = unproject(&inv_view_proj, Vector4::new(ndc_x, ndc_y, -1.0, 1.0));
    let far_3d = unproject(&inv_view_proj, Vector4::new(ndc_x, ndc_y, 1.0, 1.0));

    Some(Ray::new(near_3d, far_3d - near_3d))
}

fn unproject(inverse: &Matrix4<f32>, ndc: Vector4<f32>) -> Vector3<f32> {
    let world = *inverse * ndc;
    world.truncate() / world.w
}

/// Distance along `ray` at which it enters `object`'s oriented bounding box
pub fn intersect_object(ray: &Ray, object: &Object) -> Option<f32> {
    let world = object.world_matrix();
    let inverse = world.invert()?;

    let local_origin = (inverse * ray.origin.extend(1.0)).truncate();
    let local_direction = (inverse * ray.direction.extend(0.0)).truncate();
    if local_direction.magnitude2() <= f32::EPSILON {
        return None;
    }

    let local_ray = Ray::new(local_origin, local_direction);
    let t_local = object.mesh.bounds().intersect_ray(&local_ray)?;

    let local_hit = local_ray.point_at(t_local);
    let world_hit = (world * local_hit.extend(1.0)).truncate();
    Some((world_hit - ray.origin).dot(ray.direction))
}

/// Nearest hit among `nodes` along `ray`
///
/// Ties on distance keep the earlier node, so the result depends only on the
/// inputs and is stable across calls.
pub fn pick_nodes<'a, I>(ray: &Ray, nodes: I) -> Option<PickResult>
where
    I: IntoIterator<Item = (NodeHandle, &'a Object)>,
{
    let mut closest: Option<PickResult> = None;

    for (node, object) in nodes {
        let Some(distance) = intersect_object(ray, object) else {
            continue;
        };

        if closest
            .as_ref()
            .map_or(true, |result| distance < result.distance)
        {
            closest = Some(PickResult {
                node,
                distance,
                intersection_point: ray.point_at(distance),
            });
        }
    }

    closest
}

/// Pick the nearest pickable object under the pointer
pub fn pick(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    camera: &OrbitCamera,
    scene: &Scene,
) -> Option<PickResult> {
    let ray = screen_to_ray(screen_pos, screen_size, camera)?;
    pick_nodes(&ray, scene.pickable_objects())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::generate_box,
        resources::material::{Color, Material},
        scene::Mesh,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn cube(name: &str, z: f32) -> Object {
        Object::new(
            name,
            Mesh::from_geometry(&generate_box(1.0, 1.0, 1.0)),
            Material::new(name, Color::WHITE, 0.0, 0.5),
        )
        .with_position(0.0, 0.0, z)
    }

    fn front_camera() -> OrbitCamera {
        // Eye on +Z looking at the origin
        OrbitCamera::new(10.0, 0.0, 0.0, Vector3::zero(), 1.0)
    }

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = AABB::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let t = aabb.intersect_ray(&ray).expect("ray should hit");
        assert!((t - 4.0).abs() < 1e-5);

        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_miss).is_none());

        let ray_behind = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_behind).is_none());
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = front_camera();
        let ray = screen_to_ray((400.0, 300.0), (800.0, 600.0), &camera).unwrap();

        assert!((ray.direction - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-4);
    }

    #[test]
    fn test_nearest_object_wins() {
        let mut scene = Scene::new();
        // Far box inserted first so insertion order cannot explain the result
        scene.add_object(cube("Far", -3.0));
        let near = scene.add_object(cube("Near", 2.0));

        let hit = pick((400.0, 400.0), (800.0, 800.0), &front_camera(), &scene).unwrap();
        assert_eq!(hit.node, near);
        assert!((hit.intersection_point.z - 2.5).abs() < 1e-3);
    }

    #[test]
    fn test_exact_tie_keeps_first_object() {
        let mut scene = Scene::new();
        let first = scene.add_object(cube("First", 0.0));
        scene.add_object(cube("Second", 0.0));

        let hit = pick((400.0, 400.0), (800.0, 800.0), &front_camera(), &scene).unwrap();
        assert_eq!(hit.node, first);
    }

    #[test]
    fn test_miss_and_empty_scene_yield_none() {
        let mut scene = Scene::new();
        let camera = front_camera();
        assert!(pick((400.0, 400.0), (800.0, 800.0), &camera, &scene).is_none());

        scene.add_object(cube("Box", 0.0));
        assert!(pick((0.0, 0.0), (800.0, 800.0), &camera, &scene).is_none());
        assert!(pick((400.0, 400.0), (0.0, 0.0), &camera, &scene).is_none());
    }

    #[test]
    fn test_non_pickable_objects_are_ignored() {
        let mut scene = Scene::new();
        scene.add_object(cube("Ghost", 2.0).with_pickable(false));
        let solid = scene.add_object(cube("Solid", 0.0));

        let hit = pick((400.0, 400.0), (800.0, 800.0), &front_camera(), &scene).unwrap();
        assert_eq!(hit.node, solid);
    }

    #[test]
    fn test_rotated_object_uses_oriented_bounds() {
        let mut scene = Scene::new();
        // A thin bar rotated 90 degrees about Z becomes tall and narrow
        let bar = Object::new(
            "Bar",
            Mesh::from_geometry(&generate_box(4.0, 0.2, 0.2)),
            Material::default(),
        )
        .with_rotation(0.0, 0.0, std::f32::consts::FRAC_PI_2);
        scene.add_object(bar);

        let camera = front_camera();
        // Straight at the center: hit
        assert!(pick((400.0, 400.0), (800.0, 800.0), &camera, &scene).is_some());
        // Right of center where the unrotated bar would have been: miss
        assert!(pick((520.0, 400.0), (800.0, 800.0), &camera, &scene).is_none());
    }

    #[test]
    fn test_repeated_picks_are_deterministic() {
        let scene = crate::robot::robot_scene();
        let camera = OrbitCamera::new(5.0, 0.04, 0.0, Vector3::new(0.0, 0.8, 0.0), 1.5);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let pos = (rng.random_range(0.0..1200.0), rng.random_range(0.0..800.0));
            let first = pick(pos, (1200.0, 800.0), &camera, &scene).map(|h| h.node);
            let second = pick(pos, (1200.0, 800.0), &camera, &scene).map(|h| h.node);
            assert_eq!(first, second);
        }
    }
}
