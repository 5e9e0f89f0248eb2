//! Core state types for the N-body simulation
//!
//! - `Body`: one celestial object (name, mass, position, velocity, color)
//! - `System`: owns the bodies and the current simulation time `t`
//!
//! Forces live in [`super::forces`], the time step in [`super::integrator`].

use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::symplectic_euler;

pub use crate::simulation::constants::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String, // label, assumed unique within a system
    mass: f64, // kg, always finite and > 0
    pub position: NVec2, // m
    pub velocity: NVec2, // m/s
    pub color: String, // presentation tag, ignored by the physics
}

impl Body {
    /// Build a body, rejecting masses that are not finite and strictly positive
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: NVec2,
        velocity: NVec2,
        color: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidMass { name, mass });
        }

        Ok(Self {
            name,
            mass,
            position,
            velocity,
            color: color.into(),
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Drift: x <- x + v * dt
    /// Non-finite values propagate silently.
    pub fn update_position(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>, // ordered collection, order fixes the force summation order
    pub(crate) t: f64, // elapsed simulated time (s)
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body. No duplicate check is made.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Advance one tick with the default engine (direct accumulation,
    /// finiteness check on). On error the system is left untouched.
    pub fn advance(&mut self, dt: f64) -> Result<()> {
        self.advance_with(dt, &Engine::default())
    }

    pub fn advance_with(&mut self, dt: f64, engine: &Engine) -> Result<()> {
        symplectic_euler(self, dt, engine)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// First body with the given name
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    /// Name and position of every body, in insertion order
    pub fn positions(&self) -> impl Iterator<Item = (&str, NVec2)> + '_ {
        self.bodies.iter().map(|b| (b.name.as_str(), b.position))
    }
}
