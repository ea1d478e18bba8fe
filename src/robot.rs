//! The toy robot scene
//!
//! Builds the named parts, ground and lights the viewer shows. Every part gets
//! its own [`Material`] instance so highlighting one part never bleeds into
//! another.

use std::f32::consts::FRAC_PI_4;

use cgmath::Vector3;

use crate::gfx::{
    geometry::{generate_box, generate_cylinder, generate_plane, generate_sphere},
    resources::material::{Color, Material},
    scene::{Light, Mesh, Object, Scene},
};

pub const TORSO: &str = "Torso";
pub const HEAD: &str = "Head";
pub const LEFT_EYE: &str = "Left Eye";
pub const RIGHT_EYE: &str = "Right Eye";
pub const LEFT_ARM: &str = "Left Arm";
pub const RIGHT_ARM: &str = "Right Arm";
pub const LEFT_LEG: &str = "Left Leg";
pub const RIGHT_LEG: &str = "Right Leg";
pub const CONTROL_PANEL: &str = "Control Panel";
pub const POWER_BUTTON: &str = "Power Button";
pub const GROUND: &str = "Ground";

pub const PANEL_LIGHT: &str = "Panel Light";

const SPHERE_SEGMENTS: u32 = 16;
const CYLINDER_SEGMENTS: u32 = 16;

fn body_material(name: &str) -> Material {
    Material::new(name, Color::from_hex(0x3498db), 0.3, 0.7)
}

fn detail_material(name: &str) -> Material {
    Material::new(name, Color::from_hex(0xe74c3c), 0.0, 1.0)
        .with_emissive(Color::from_hex(0x220000))
}

fn ground_material() -> Material {
    Material::new("Ground", Color::from_hex(0xdddddd), 0.0, 0.8).without_emissive()
}

/// Adds the robot parts, ground and lights to `scene`
pub fn build_robot(scene: &mut Scene) {
    let box_part = |name: &str, size: [f32; 3], material: Material| {
        Object::new(
            name,
            Mesh::from_geometry(&generate_box(size[0], size[1], size[2])),
            material,
        )
    };
    let sphere_part = |name: &str, radius: f32, material: Material| {
        Object::new(
            name,
            Mesh::from_geometry(&generate_sphere(radius, SPHERE_SEGMENTS, SPHERE_SEGMENTS)),
            material,
        )
    };
    let cylinder_part = |name: &str, radius: f32, height: f32| {
        Object::new(
            name,
            Mesh::from_geometry(&generate_cylinder(radius, height, CYLINDER_SEGMENTS)),
            body_material(name),
        )
    };

    scene.add_object(
        box_part(TORSO, [1.0, 1.5, 0.8], body_material(TORSO)).with_position(0.0, 0.75, 0.0),
    );
    scene.add_object(
        box_part(HEAD, [0.8, 0.8, 0.8], body_material(HEAD)).with_position(0.0, 1.75, 0.0),
    );

    scene.add_object(
        sphere_part(LEFT_EYE, 0.1, detail_material(LEFT_EYE)).with_position(-0.2, 1.85, 0.5),
    );
    scene.add_object(
        sphere_part(RIGHT_EYE, 0.1, detail_material(RIGHT_EYE)).with_position(0.2, 1.85, 0.5),
    );

    scene.add_object(
        cylinder_part(LEFT_ARM, 0.1, 1.0)
            .with_position(-0.6, 1.0, 0.0)
            .with_rotation(0.0, 0.0, FRAC_PI_4),
    );
    scene.add_object(
        cylinder_part(RIGHT_ARM, 0.1, 1.0)
            .with_position(0.6, 1.0, 0.0)
            .with_rotation(0.0, 0.0, -FRAC_PI_4),
    );

    scene.add_object(cylinder_part(LEFT_LEG, 0.1, 0.8).with_position(-0.3, 0.1, 0.0));
    scene.add_object(cylinder_part(RIGHT_LEG, 0.1, 0.8).with_position(0.3, 0.1, 0.0));

    scene.add_object(
        box_part(CONTROL_PANEL, [0.4, 0.2, 0.1], detail_material(CONTROL_PANEL))
            .with_position(0.0, 1.0, 0.6),
    );
    scene.add_object(
        sphere_part(POWER_BUTTON, 0.05, detail_material(POWER_BUTTON))
            .with_position(-0.1, 1.0, 0.65),
    );

    scene.add_object(
        Object::new(
            GROUND,
            Mesh::from_geometry(&generate_plane(10.0, 10.0)),
            ground_material(),
        )
        .with_pickable(false),
    );

    scene.add_light(Light::ambient("Ambient Light", Color::from_hex(0x404040), 0.5));
    scene.add_light(Light::directional(
        "Directional Light",
        Color::WHITE,
        0.8,
        Vector3::new(3.0, 5.0, 2.0),
    ));
    scene.add_light(Light::point(
        PANEL_LIGHT,
        Color::from_hex(0xff0000),
        1.0,
        Vector3::new(0.0, 1.0, 0.6),
        0.5,
    ));

    log::debug!(
        "Robot built: {} objects, {} lights",
        scene.objects().len(),
        scene.lights().len()
    );
}

/// A fresh scene containing only the robot
pub fn robot_scene() -> Scene {
    let mut scene = Scene::new();
    build_robot(&mut scene);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_parts_are_addressable_by_name() {
        let scene = robot_scene();
        for name in [
            TORSO,
            HEAD,
            LEFT_EYE,
            RIGHT_EYE,
            LEFT_ARM,
            RIGHT_ARM,
            LEFT_LEG,
            RIGHT_LEG,
            CONTROL_PANEL,
            POWER_BUTTON,
        ] {
            let handle = scene.find_object(name).unwrap();
            let object = scene.object(handle).unwrap();
            assert!(object.pickable, "{name} should be pickable");
            assert!(object.material.emissive().is_some(), "{name} should be highlightable");
        }
        assert!(scene.find_light(PANEL_LIGHT).is_some());
    }

    #[test]
    fn test_ground_is_not_pickable_or_highlightable() {
        let scene = robot_scene();
        let ground = scene.object(scene.find_object(GROUND).unwrap()).unwrap();
        assert!(!ground.pickable);
        assert!(ground.material.emissive().is_none());
        assert_eq!(scene.pickable_objects().count(), 10);
    }

    #[test]
    fn test_parts_do_not_share_materials() {
        let mut scene = robot_scene();
        let left = scene.find_object(LEFT_EYE).unwrap();
        let right = scene.find_object(RIGHT_EYE).unwrap();

        scene
            .object_mut(left)
            .unwrap()
            .material
            .set_emissive(Color::WHITE);

        assert_eq!(
            scene.object(right).unwrap().material.emissive(),
            Some(Color::from_hex(0x220000))
        );
    }
}
