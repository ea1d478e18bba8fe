//! Hover highlight
//!
//! At most one node is highlighted. Its emissive color before highlighting is
//! kept so it can be restored exactly.

use crate::gfx::{
    resources::material::Color,
    scene::{NodeHandle, Scene},
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Highlighted {
    node: NodeHandle,
    saved: Color,
}

#[derive(Debug)]
pub struct HighlightState {
    highlight_color: Color,
    current: Option<Highlighted>,
}

impl HighlightState {
    /// Creates an empty highlight slot
    ///
    /// # Arguments
    /// * `highlight_color` - Emissive color written onto the hovered part
    pub fn new(highlight_color: Color) -> Self {
        Self {
            highlight_color,
            current: None,
        }
    }

    pub fn highlighted(&self) -> Option<NodeHandle> {
        self.current.map(|entry| entry.node)
    }

    /// Emissive value the highlighted node had before it was highlighted
    pub fn saved_color(&self) -> Option<Color> {
        self.current.map(|entry| entry.saved)
    }

    /// Moves the highlight to `hit`, or clears it when `hit` is `None`
    ///
    /// Returns true if anything changed.
    pub fn on_hover(&mut self, hit: Option<NodeHandle>, scene: &mut Scene) -> bool {
        if hit.is_some() && hit == self.highlighted() {
            return false;
        }

        let mut changed = self.restore(scene);

        if let Some(node) = hit {
            changed |= self.apply(node, scene);
        }
        changed
    }

    /// Restores the highlighted node, if any, and forgets it
    pub fn clear(&mut self, scene: &mut Scene) -> bool {
        self.restore(scene)
    }

    fn restore(&mut self, scene: &mut Scene) -> bool {
        let Some(entry) = self.current.take() else {
            return false;
        };
        match scene.object_mut(entry.node) {
            Some(object) => {
                object.material.set_emissive(entry.saved);
                log::debug!("Unhighlighted '{}'", object.name);
            }
            None => log::debug!("Highlighted node no longer in scene"),
        }
        true
    }

    fn apply(&mut self, node: NodeHandle, scene: &mut Scene) -> bool {
        let Some(object) = scene.object_mut(node) else {
            return false;
        };
        let Some(saved) = object.material.emissive() else {
            log::debug!("'{}' has no emissive slot, not highlighting", object.name);
            return false;
        };

        object.material.set_emissive(self.highlight_color);
        self.current = Some(Highlighted { node, saved });
        log::debug!("Highlighted '{}'", object.name);
        true
    }
}
