//! Click dispatch
//!
//! Clicked part names map to tween recipes through an [`ActionTable`]. A
//! recipe describes the change relative to the live value, so the actual
//! `from`/`to` pair is only known at click time.

use std::{collections::HashMap, f32::consts::PI, time::Duration};

use super::notification::Notification;
use crate::{
    animation::{
        AnimatedProperty, Animatable, AnimationRequest, AnimationTarget, Animator, Axis, Easing,
        RepeatMode,
    },
    gfx::scene::{NodeHandle, Scene},
    robot,
};

/// Which scene element a recipe animates
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeTarget {
    /// The node that was clicked
    Clicked,
    /// A light looked up by name at click time
    Light(String),
}

/// How the end value is derived from the live value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueChange {
    Offset(f32),
    Factor(f32),
    Absolute(f32),
}

impl ValueChange {
    pub fn apply(self, from: f32) -> f32 {
        match self {
            ValueChange::Offset(delta) => from + delta,
            ValueChange::Factor(factor) => from * factor,
            ValueChange::Absolute(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TweenRecipe {
    pub target: RecipeTarget,
    pub property: AnimatedProperty,
    pub change: ValueChange,
    pub duration: Duration,
    pub repeat: RepeatMode,
    pub easing: Easing,
}

impl TweenRecipe {
    /// Creates a recipe with the default quadratic ease-out
    ///
    /// # Arguments
    /// * `target` - The clicked node or a light looked up by name
    /// * `property` - Scalar to animate
    /// * `change` - How the end value follows from the live value
    /// * `duration` - Whole run, including every yoyo leg
    /// * `repeat` - One-way or round trip
    pub fn new(
        target: RecipeTarget,
        property: AnimatedProperty,
        change: ValueChange,
        duration: Duration,
        repeat: RepeatMode,
    ) -> Self {
        Self {
            target,
            property,
            change,
            duration,
            repeat,
            easing: Easing::default(),
        }
    }
}

/// Part name to recipes
#[derive(Debug, Clone, Default)]
pub struct ActionTable {
    recipes: HashMap<String, Vec<TweenRecipe>>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipes for the toy robot's head, power button and arms
    pub fn robot_defaults() -> Self {
        let yoyo = RepeatMode::Yoyo { repeats: 1 };
        let mut table = Self::new();

        table.insert(
            robot::HEAD,
            vec![TweenRecipe::new(
                RecipeTarget::Clicked,
                AnimatedProperty::Rotation(Axis::Y),
                ValueChange::Offset(PI / 4.0),
                Duration::from_millis(500),
                RepeatMode::Once,
            )],
        );
        table.insert(
            robot::POWER_BUTTON,
            vec![
                TweenRecipe::new(
                    RecipeTarget::Clicked,
                    AnimatedProperty::Scale(Axis::Z),
                    ValueChange::Factor(0.5),
                    Duration::from_millis(100),
                    yoyo,
                ),
                TweenRecipe::new(
                    RecipeTarget::Light(robot::PANEL_LIGHT.to_string()),
                    AnimatedProperty::LightIntensity,
                    ValueChange::Factor(2.0),
                    Duration::from_millis(300),
                    yoyo,
                ),
            ],
        );
        table.insert(
            robot::LEFT_ARM,
            vec![TweenRecipe::new(
                RecipeTarget::Clicked,
                AnimatedProperty::Rotation(Axis::Z),
                ValueChange::Offset(-PI / 3.0),
                Duration::from_millis(300),
                yoyo,
            )],
        );
        table.insert(
            robot::RIGHT_ARM,
            vec![TweenRecipe::new(
                RecipeTarget::Clicked,
                AnimatedProperty::Rotation(Axis::Z),
                ValueChange::Offset(PI / 3.0),
                Duration::from_millis(300),
                yoyo,
            )],
        );

        table
    }

    pub fn insert(&mut self, name: &str, recipes: Vec<TweenRecipe>) {
        self.recipes.insert(name.to_string(), recipes);
    }

    /// Recipes for `name`; empty for unmapped parts
    pub fn get(&self, name: &str) -> &[TweenRecipe] {
        self.recipes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// What a click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Deselected,
    Selected { name: String, animations: usize },
}

#[derive(Debug, Default)]
pub struct ActionDispatcher {
    table: ActionTable,
}

impl ActionDispatcher {
    /// Creates a dispatcher that plays the recipes in `table`
    ///
    /// # Arguments
    /// * `table` - Part name to recipes; see [`ActionTable::robot_defaults`]
    pub fn new(table: ActionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ActionTable {
        &self.table
    }

    /// Handles a click on `hit`
    ///
    /// An empty or stale hit hides the notification. Otherwise the part name is
    /// announced and its recipes start. A tween already running on the same
    /// property is cancelled and the new one leaves from the live value. When
    /// both are round trips, the new one still returns to the old `from`, so
    /// repeated clicks never drift the rest value.
    pub fn on_click<A: Animator + ?Sized>(
        &self,
        hit: Option<NodeHandle>,
        now: Duration,
        scene: &mut Scene,
        animator: &mut A,
        notification: &mut Notification,
    ) -> ClickOutcome {
        let Some((node, name)) = hit.and_then(|node| {
            scene
                .object(node)
                .map(|object| (node, object.name.clone()))
        }) else {
            notification.hide();
            return ClickOutcome::Deselected;
        };

        notification.show(format!("Selected: {name}"), now);

        let mut animations = 0;
        for recipe in self.table.get(&name) {
            let target = match &recipe.target {
                RecipeTarget::Clicked => AnimationTarget::Node(node),
                RecipeTarget::Light(light_name) => match scene.find_light(light_name) {
                    Some(light) => AnimationTarget::Light(light),
                    None => {
                        log::warn!("Action for '{name}' refers to unknown light '{light_name}'");
                        continue;
                    }
                },
            };

            let Some(live) = scene.read(target, recipe.property) else {
                log::debug!("'{name}' has no {:?} to animate", recipe.property);
                continue;
            };
            let from = match animator.cancel(target, recipe.property) {
                Some(previous)
                    if previous.repeat.returns_to_start() && recipe.repeat.returns_to_start() =>
                {
                    previous.from
                }
                _ => live,
            };

            animator.animate(
                AnimationRequest {
                    target,
                    property: recipe.property,
                    start: live,
                    from,
                    to: recipe.change.apply(from),
                    duration: recipe.duration,
                    repeat: recipe.repeat,
                    easing: recipe.easing,
                },
                now,
            );
            animations += 1;
        }

        log::debug!("Clicked '{name}', started {animations} animation(s)");
        ClickOutcome::Selected { name, animations }
    }
}
