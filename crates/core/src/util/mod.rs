pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, and evaluates to the value of the expression. The elapsed time
/// is logged at the given level (`Debug` by default).
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}

/// Calculate the number of cells that are at most `steps` steps away from a
/// given cell, including the cell itself. 0 steps means 1 cell, 1 is 7 cells,
/// 2 is 19, etc.
pub fn cells_within_len(steps: u32) -> usize {
    // We'll always have 3s^2+3s+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6s cells for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let s = steps as usize;
    3 * s * s + 3 * s + 1
}
