//! Cell, Particle and Material types for the simulation grid.

use std::fmt;

/// Wire ids used across the WASM boundary. 0 is reserved for Empty, do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Material {
    Sand = 1,
    Cobble = 2,
}

/// How a material moves during a tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Behavior {
    /// Falls straight down, otherwise slides to a random free diagonal.
    Powder,
    /// Immovable once placed.
    Solid,
}

impl Behavior {
    /// Whether the tick traversal needs to visit particles with this behavior.
    #[must_use]
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Powder)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Static per-material behavior table entry.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MaterialProps {
    pub name: &'static str,
    pub color: Color,
    /// Probability in [0, 1] that a single spawn attempt succeeds.
    pub spawn_density: f64,
    pub behavior: Behavior,
}

const SAND: MaterialProps = MaterialProps {
    name: "Sand",
    color: Color::rgb(0xDA, 0xA5, 0x20),
    spawn_density: 0.1,
    behavior: Behavior::Powder,
};

const COBBLE: MaterialProps = MaterialProps {
    name: "Cobble",
    color: Color::rgb(0x80, 0x80, 0x80),
    spawn_density: 0.6,
    behavior: Behavior::Solid,
};

impl Material {
    pub const ALL: [Material; 2] = [Material::Sand, Material::Cobble];

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Sand),
            2 => Some(Self::Cobble),
            _ => None,
        }
    }

    #[must_use]
    pub fn properties(self) -> &'static MaterialProps {
        match self {
            Self::Sand => &SAND,
            Self::Cobble => &COBBLE,
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        self.properties().color
    }

    #[must_use]
    pub fn spawn_density(self) -> f64 {
        self.properties().spawn_density
    }

    #[must_use]
    pub fn behavior(self) -> Behavior {
        self.properties().behavior
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.properties().name)
    }
}

/// A particle lives only inside a grid cell; `x`/`y` always mirror that cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Particle {
    pub material: Material,
    pub x: i32,
    pub y: i32,
}

impl Particle {
    #[must_use]
    pub fn new(material: Material, x: i32, y: i32) -> Self {
        Self { material, x, y }
    }

    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.material.color()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Particle),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Occupied(p) => write!(f, "{}", p.material),
        }
    }
}

impl Cell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn particle(&self) -> Option<&Particle> {
        match self {
            Self::Empty => None,
            Self::Occupied(p) => Some(p),
        }
    }

    #[must_use]
    pub fn material(&self) -> Option<Material> {
        self.particle().map(|p| p.material)
    }

    /// Wire id: 0 for Empty, the material discriminant otherwise.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.material().map_or(0, |m| m as u8)
    }
}
