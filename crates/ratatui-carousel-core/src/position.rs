//! Pure slide-position math.
//!
//! These functions are total over valid inputs (`total >= 1`,
//! `1 <= visible <= total`, `step >= 1`) and free of side effects so the
//! store's transition logic can be verified independently of its
//! notification mechanics.
//!
//! Wrap policy in infinite mode: a move past an edge lands on the opposite
//! page start (`0` or `max_page`), never on an arbitrary modular offset. Away
//! from the edges infinite mode behaves exactly like clamped mode.

/// Target index for a backward move.
pub fn compute_back(
    current: usize,
    step: usize,
    total: usize,
    visible: usize,
    infinite: bool,
) -> usize {
    let max_page = total.saturating_sub(visible);
    if max_page == 0 {
        return 0;
    }
    if infinite && current == 0 {
        return max_page;
    }
    current.min(max_page).saturating_sub(step)
}

/// Target index for a forward move.
pub fn compute_next(
    current: usize,
    step: usize,
    total: usize,
    visible: usize,
    infinite: bool,
) -> usize {
    let max_page = total.saturating_sub(visible);
    if max_page == 0 {
        return 0;
    }
    if infinite && current >= max_page {
        return 0;
    }
    current.saturating_add(step).min(max_page)
}

/// Clamp a requested slide index into the valid page-start range.
pub fn clamp_slide(index: usize, total: usize, visible: usize) -> usize {
    index.min(total.saturating_sub(visible))
}

/// The page starts a repeated forward traversal visits, in order, starting
/// at `0` and ending at the last page start. With `step = 0` this would not
/// terminate, so zero is treated as a single-page cycle.
pub fn page_starts(total: usize, visible: usize, step: usize) -> Vec<usize> {
    let max_page = total.saturating_sub(visible);
    if max_page == 0 || step == 0 {
        return vec![0];
    }
    let mut starts = Vec::with_capacity(max_page / step + 2);
    let mut cur = 0;
    loop {
        starts.push(cur);
        if cur == max_page {
            break;
        }
        cur = cur.saturating_add(step).min(max_page);
    }
    starts
}
