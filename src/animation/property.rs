//! Addressable scalar properties of scene nodes and lights
//!
//! Tweens only ever see a `(target, property)` pair and a float. Resolution
//! goes through [`Animatable`] every frame, so a target that disappeared
//! between frames reads as `None` and writes are dropped.

use crate::gfx::scene::{LightHandle, NodeHandle, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    Position(Axis),
    /// Euler angle in radians
    Rotation(Axis),
    Scale(Axis),
    LightIntensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    Node(NodeHandle),
    Light(LightHandle),
}

/// Read/write access to animatable values
pub trait Animatable {
    fn read(&self, target: AnimationTarget, property: AnimatedProperty) -> Option<f32>;

    /// Returns false if the target is gone or lacks the property
    fn write(&mut self, target: AnimationTarget, property: AnimatedProperty, value: f32) -> bool;
}

impl Animatable for Scene {
    fn read(&self, target: AnimationTarget, property: AnimatedProperty) -> Option<f32> {
        match (target, property) {
            (AnimationTarget::Node(node), AnimatedProperty::Position(axis)) => {
                self.object(node).map(|o| o.transform.position[axis.index()])
            }
            (AnimationTarget::Node(node), AnimatedProperty::Rotation(axis)) => {
                self.object(node).map(|o| o.transform.rotation[axis.index()])
            }
            (AnimationTarget::Node(node), AnimatedProperty::Scale(axis)) => {
                self.object(node).map(|o| o.transform.scale[axis.index()])
            }
            (AnimationTarget::Light(light), AnimatedProperty::LightIntensity) => {
                self.light(light).map(|l| l.intensity)
            }
            _ => None,
        }
    }

    fn write(&mut self, target: AnimationTarget, property: AnimatedProperty, value: f32) -> bool {
        match (target, property) {
            (AnimationTarget::Node(node), AnimatedProperty::Position(axis)) => self
                .object_mut(node)
                .map(|o| o.transform.position[axis.index()] = value)
                .is_some(),
            (AnimationTarget::Node(node), AnimatedProperty::Rotation(axis)) => self
                .object_mut(node)
                .map(|o| o.transform.rotation[axis.index()] = value)
                .is_some(),
            (AnimationTarget::Node(node), AnimatedProperty::Scale(axis)) => self
                .object_mut(node)
                .map(|o| o.transform.scale[axis.index()] = value)
                .is_some(),
            (AnimationTarget::Light(light), AnimatedProperty::LightIntensity) => self
                .light_mut(light)
                .map(|l| l.intensity = value)
                .is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{self, robot_scene};

    #[test]
    fn test_scene_reads_and_writes_node_and_light_values() {
        let mut scene = robot_scene();
        let head = AnimationTarget::Node(scene.find_object(robot::HEAD).unwrap());
        let light = AnimationTarget::Light(scene.find_light(robot::PANEL_LIGHT).unwrap());

        assert_eq!(scene.read(head, AnimatedProperty::Position(Axis::Y)), Some(1.75));
        assert!(scene.write(head, AnimatedProperty::Rotation(Axis::Y), 0.5));
        assert_eq!(scene.read(head, AnimatedProperty::Rotation(Axis::Y)), Some(0.5));

        assert!(scene.write(light, AnimatedProperty::LightIntensity, 2.0));
        assert_eq!(scene.read(light, AnimatedProperty::LightIntensity), Some(2.0));
    }

    #[test]
    fn test_mismatched_property_is_rejected() {
        let mut scene = robot_scene();
        let head = AnimationTarget::Node(scene.find_object(robot::HEAD).unwrap());
        let light = AnimationTarget::Light(scene.find_light(robot::PANEL_LIGHT).unwrap());

        assert_eq!(scene.read(head, AnimatedProperty::LightIntensity), None);
        assert!(!scene.write(light, AnimatedProperty::Scale(Axis::Z), 1.0));
    }

    #[test]
    fn test_stale_target_is_ignored() {
        let mut scene = robot_scene();
        let head = AnimationTarget::Node(scene.find_object(robot::HEAD).unwrap());
        scene.clear();
        robot::build_robot(&mut scene);

        assert_eq!(scene.read(head, AnimatedProperty::Rotation(Axis::Y)), None);
        assert!(!scene.write(head, AnimatedProperty::Rotation(Axis::Y), 1.0));
    }
}
