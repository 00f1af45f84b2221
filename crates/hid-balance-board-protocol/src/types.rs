//! Type definitions for the balance board protocol

use serde::{Deserialize, Serialize};

/// Sensor position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
}

impl Corner {
    /// All corners in wire order.
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::TopLeft,
        Corner::BottomLeft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Corner::TopRight => "top_right",
            Corner::BottomRight => "bottom_right",
            Corner::TopLeft => "top_left",
            Corner::BottomLeft => "bottom_left",
        }
    }
}

/// One value per corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Corners<T> {
    pub top_right: T,
    pub bottom_right: T,
    pub top_left: T,
    pub bottom_left: T,
}

impl<T> Corners<T> {
    pub fn get(&self, corner: Corner) -> &T {
        match corner {
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::TopLeft => &self.top_left,
            Corner::BottomLeft => &self.bottom_left,
        }
    }

    pub fn get_mut(&mut self, corner: Corner) -> &mut T {
        match corner {
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::TopLeft => &mut self.top_left,
            Corner::BottomLeft => &mut self.bottom_left,
        }
    }

    /// Iterates `(corner, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, &T)> {
        Corner::ALL
            .into_iter()
            .map(move |corner| (corner, self.get(corner)))
    }

    /// Applies `f` to every corner in wire order.
    pub fn map<U>(self, mut f: impl FnMut(Corner, T) -> U) -> Corners<U> {
        Corners {
            top_right: f(Corner::TopRight, self.top_right),
            bottom_right: f(Corner::BottomRight, self.bottom_right),
            top_left: f(Corner::TopLeft, self.top_left),
            bottom_left: f(Corner::BottomLeft, self.bottom_left),
        }
    }

    /// Applies `f` to every corner in wire order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// The first error returned by `f`. Later corners are not visited.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(Corner, T) -> Result<U, E>,
    ) -> Result<Corners<U>, E> {
        Ok(Corners {
            top_right: f(Corner::TopRight, self.top_right)?,
            bottom_right: f(Corner::BottomRight, self.bottom_right)?,
            top_left: f(Corner::TopLeft, self.top_left)?,
            bottom_left: f(Corner::BottomLeft, self.bottom_left)?,
        })
    }

    /// Combines two per-corner sets value by value.
    pub fn zip<U>(self, other: Corners<U>) -> Corners<(T, U)> {
        Corners {
            top_right: (self.top_right, other.top_right),
            bottom_right: (self.bottom_right, other.bottom_right),
            top_left: (self.top_left, other.top_left),
            bottom_left: (self.bottom_left, other.bottom_left),
        }
    }
}

impl<T: Copy> Corners<T> {
    pub fn splat(value: T) -> Self {
        Self {
            top_right: value,
            bottom_right: value,
            top_left: value,
            bottom_left: value,
        }
    }
}

/// Raw sensor readings at the 0 kg, 17 kg and 34 kg reference loads.
///
/// Well-formed triples are non-decreasing. The handshake decoder does not
/// enforce this; see [`is_monotonic`](Self::is_monotonic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalibrationTriple(pub [u16; 3]);

impl CalibrationTriple {
    pub const fn new(zero: u16, mid: u16, full: u16) -> Self {
        Self([zero, mid, full])
    }

    pub const fn zero(&self) -> u16 {
        self.0[0]
    }

    pub const fn mid(&self) -> u16 {
        self.0[1]
    }

    pub const fn full(&self) -> u16 {
        self.0[2]
    }

    pub fn points(&self) -> [u16; 3] {
        self.0
    }

    pub fn is_monotonic(&self) -> bool {
        self.zero() <= self.mid() && self.mid() <= self.full()
    }
}

impl From<(u16, u16, u16)> for CalibrationTriple {
    fn from((zero, mid, full): (u16, u16, u16)) -> Self {
        Self::new(zero, mid, full)
    }
}

/// Factory calibration constants for every corner.
pub type CalibrationTable = Corners<CalibrationTriple>;

impl Corners<CalibrationTriple> {
    /// `true` for the zero-valued table a board starts with.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Latest raw reading and interpolated weight for one corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerReading {
    pub raw: u16,
    pub weight_kg: f32,
}

/// Latest readings for every corner.
pub type BoardState = Corners<CornerReading>;

impl Corners<CornerReading> {
    pub fn total_weight_kg(&self) -> f32 {
        self.iter().map(|(_, reading)| reading.weight_kg).sum()
    }

    pub fn raw(&self) -> Corners<u16> {
        self.map(|_, reading| reading.raw)
    }
}

/// Whether the accessory has completed its handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

/// Accessory type occupying the controller's expansion port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpansionType {
    #[default]
    None,
    BalanceBoard,
}
