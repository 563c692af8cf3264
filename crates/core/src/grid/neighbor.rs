//! Neighbor offset tables and the integer halving used by offset/cube
//! conversion. These are kept as plain data so the six-direction symmetry of
//! each grid variant can be checked by eye.

use crate::grid::unit::{Orientation, Shift};

/// Offsets from a cell to its six neighbors, indexed by
/// `[parity of the shift axis][direction]`. Directions go counterclockwise
/// in pixel space (`+y` down).
pub(crate) type NeighborTable = [[(i32, i32); 6]; 2];

/// Vertical grid, even columns shifted. Direction 0 is the lower right
/// neighbor.
const VERTICAL_EVEN_SHIFTED: NeighborTable = [
    [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)],
    [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)],
];

/// Vertical grid, odd columns shifted. Mirror of [VERTICAL_EVEN_SHIFTED]: the
/// parity rows swap.
const VERTICAL_ODD_SHIFTED: NeighborTable = [
    [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)],
    [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)],
];

/// Horizontal grid, even rows shifted. Direction 0 is the right neighbor.
const HORIZONTAL_EVEN_SHIFTED: NeighborTable = [
    [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)],
    [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
];

/// Horizontal grid, odd rows shifted
const HORIZONTAL_ODD_SHIFTED: NeighborTable = [
    [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
    [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)],
];

/// Get the neighbor table for a grid variant
pub(crate) fn neighbor_table(
    orientation: Orientation,
    shift: Shift,
) -> &'static NeighborTable {
    match (orientation, shift) {
        (Orientation::Vertical, Shift::Even) => &VERTICAL_EVEN_SHIFTED,
        (Orientation::Vertical, Shift::Odd) => &VERTICAL_ODD_SHIFTED,
        (Orientation::Horizontal, Shift::Even) => &HORIZONTAL_EVEN_SHIFTED,
        (Orientation::Horizontal, Shift::Odd) => &HORIZONTAL_ODD_SHIFTED,
    }
}

/// `n / 2`, rounded towards positive infinity. Adding the parity bit first
/// makes the numerator even, so the division is exact for negative `n` too.
pub(crate) const fn half_up(n: i32) -> i32 {
    (n + (n & 1)) / 2
}

/// `n / 2`, rounded towards negative infinity
pub(crate) const fn half_down(n: i32) -> i32 {
    (n - (n & 1)) / 2
}

/// The halving that matches a shift parity. Even-shifted grids push cell 0
/// forward, so they round up. Odd-shifted grids round down.
pub(crate) fn half(shift: Shift, n: i32) -> i32 {
    match shift {
        Shift::Even => half_up(n),
        Shift::Odd => half_down(n),
    }
}
