//! Hex board geometry with axial coordinates

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::pieces::Occupant;

/// Default board radius in display units (the standard 85-point board)
pub const BOARD_RADIUS: f32 = 4.6;

/// Largest radius whose coordinates stay well inside `i8`
pub const MAX_RADIUS: f32 = 60.0;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// Step `distance` cells along the direction vector `(dq, dr)`;
    /// `None` when the result leaves the `i8` range
    pub fn offset(&self, (dq, dr): (i8, i8), distance: i8) -> Option<Hex> {
        let q = self.q.checked_add(dq.checked_mul(distance)?)?;
        let r = self.r.checked_add(dr.checked_mul(distance)?)?;
        Some(Hex::new(q, r))
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: u8) -> Option<Hex> {
        self.offset(DIRECTIONS[direction as usize % 6], 1)
    }

    /// Squared Euclidean distance from (0,0) at unit scale
    fn norm_squared(&self) -> i32 {
        let (q, r) = (self.q as i32, self.r as i32);
        q * q + q * r + r * r
    }

    /// Pointy-top axial to Cartesian conversion
    pub fn to_cartesian(&self, scale: f64) -> (f64, f64) {
        let (q, r) = (self.q as f64, self.r as f64);
        (scale * (q + r / 2.0), scale * (r * SQRT_3 / 2.0))
    }

    /// Display form: one string per axis
    pub fn format(&self) -> (String, String) {
        (self.q.to_string(), self.r.to_string())
    }

    /// Direction index and distance from `self` to `other`, if they share a line
    pub fn direction_to(&self, other: Hex) -> Option<(usize, i8)> {
        let dq = other.q as i16 - self.q as i16;
        let dr = other.r as i16 - self.r as i16;
        if dq == 0 && dr == 0 {
            return None;
        }
        let distance = dq.abs().max(dr.abs()).max((dq + dr).abs());
        let dir = DIRECTIONS.iter().position(|&(uq, ur)| {
            uq as i16 * distance == dq && ur as i16 * distance == dr
        })?;
        i8::try_from(distance).ok().map(|distance| (dir, distance))
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const DIRECTIONS: [(i8, i8); 6] = [
    (1, 0),   // E
    (1, -1),  // NE
    (0, -1),  // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, 1),   // SE
];

/// The three line axes, one per pair of opposite directions
pub const AXES: [(i8, i8); 3] = [DIRECTIONS[0], DIRECTIONS[1], DIRECTIONS[2]];

/// Board: hex -> occupant over a fixed region (clone to mutate)
///
/// Cells outside the region are absent from the map, so a lookup on them
/// returns `None` rather than `Occupant::Empty`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    radius: f32,
    cells: FxHashMap<Hex, Occupant>,
}

impl Board {
    /// All-empty board over the region of the given radius
    pub fn empty(radius: f32) -> Self {
        Self::filled(radius, Occupant::Empty)
    }

    /// Board over the region of the given radius with every cell set to `occupant`
    pub fn filled(radius: f32, occupant: Occupant) -> Self {
        let radius = radius.clamp(0.0, MAX_RADIUS);
        let bound = radius.ceil() as i8;
        let limit = (radius as f64) * (radius as f64);
        let mut cells = FxHashMap::default();

        for q in -bound..=bound {
            for r in -bound..=bound {
                let hex = Hex::new(q, r);
                if hex.norm_squared() as f64 <= limit {
                    cells.insert(hex, occupant);
                }
            }
        }

        Self { radius, cells }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of playable cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Occupant at hex, `None` when off board
    pub fn get(&self, hex: Hex) -> Option<Occupant> {
        self.cells.get(&hex).copied()
    }

    /// New board with `hex` set to `occupant`; off-board writes are ignored
    pub fn set(&self, hex: Hex, occupant: Occupant) -> Board {
        let mut board = self.clone();
        board.put(hex, occupant);
        board
    }

    /// In-place write, for callers already holding their own copy
    pub(crate) fn put(&mut self, hex: Hex, occupant: Occupant) {
        if let Some(cell) = self.cells.get_mut(&hex) {
            *cell = occupant;
        }
    }

    /// Iterate cells in coordinate order
    pub fn positions(&self) -> impl Iterator<Item = (Hex, Occupant)> + '_ {
        let mut hexes: Vec<Hex> = self.cells.keys().copied().collect();
        hexes.sort_unstable();
        hexes.into_iter().map(move |hex| (hex, self.cells[&hex]))
    }

    /// Cells strictly between two collinear hexes, ordered from `from`
    pub fn line(&self, from: Hex, to: Hex) -> Vec<Hex> {
        match from.direction_to(to) {
            Some((dir, distance)) => (1..distance)
                .filter_map(|step| from.offset(DIRECTIONS[dir], step))
                .filter(|hex| self.contains(*hex))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Cells walked from `origin` along one direction, stopping at the edge;
    /// empty when `origin` is off board
    pub fn ray(&self, origin: Hex, direction: (i8, i8)) -> Vec<Hex> {
        let mut ray = Vec::new();
        if !self.contains(origin) {
            return ray;
        }
        let mut current = origin.offset(direction, 1);
        while let Some(hex) = current.filter(|h| self.contains(*h)) {
            ray.push(hex);
            current = hex.offset(direction, 1);
        }
        ray
    }

    /// One ray per direction, in `DIRECTIONS` order
    pub fn rays_from(&self, origin: Hex) -> [Vec<Hex>; 6] {
        DIRECTIONS.map(|dir| self.ray(origin, dir))
    }

    /// Maximal runs of cells matching `pred` through `hex`, one per axis
    pub fn contiguous_lines<F>(&self, hex: Hex, pred: F) -> Vec<Vec<Hex>>
    where
        F: Fn(Occupant) -> bool,
    {
        if !self.get(hex).is_some_and(&pred) {
            return Vec::new();
        }

        AXES.iter()
            .map(|&(dq, dr)| {
                let matches = |c: &Hex| self.get(*c).is_some_and(&pred);
                let backward: Vec<Hex> = self
                    .ray(hex, (-dq, -dr))
                    .into_iter()
                    .take_while(matches)
                    .collect();
                let forward = self.ray(hex, (dq, dr)).into_iter().take_while(matches);

                backward
                    .into_iter()
                    .rev()
                    .chain(std::iter::once(hex))
                    .chain(forward)
                    .collect()
            })
            .collect()
    }
}
