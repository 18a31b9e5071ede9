/// Which way the enter animation should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Single source of truth for which slide is showing and which way it is
/// animating. Out-of-range targets are clamped, never rejected; a request
/// that resolves to the current index is a complete no-op.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    len: usize,
    direction: Direction,
    epoch: u64,
}

impl Navigator {
    /// `len` must be at least 1; decks are validated non-empty at load time.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1);
        Self {
            current: 0,
            len,
            direction: Direction::Next,
            epoch: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Monotonic counter bumped on every accepted navigation. Carries no
    /// meaning beyond uniqueness; the shell uses it to restart the enter
    /// animation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Jump to `target`, clamped into `[0, len - 1]`. Direction is taken
    /// from `explicit` when given, otherwise inferred from the sign of the
    /// move. Same-index requests leave direction and epoch untouched.
    pub fn go_to(&mut self, target: isize, explicit: Option<Direction>) {
        let clamped = target.clamp(0, self.len as isize - 1) as usize;
        if clamped == self.current {
            return;
        }
        self.direction = explicit.unwrap_or(if clamped > self.current {
            Direction::Next
        } else {
            Direction::Prev
        });
        self.current = clamped;
        self.epoch += 1;
    }

    pub fn next(&mut self) {
        self.go_to(self.current as isize + 1, Some(Direction::Next));
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as isize - 1, Some(Direction::Prev));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let nav = Navigator::new(5);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.epoch(), 0);
        assert!(nav.is_first());
        assert!(!nav.is_last());
    }

    #[test]
    fn go_to_clamps_out_of_range_requests() {
        let mut nav = Navigator::new(5);
        nav.go_to(-5, None);
        assert_eq!(nav.current(), 0);
        nav.go_to(99, None);
        assert_eq!(nav.current(), 4);
        nav.go_to(-3, None);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn go_to_clamps_for_all_indices() {
        for len in 1..=6usize {
            let mut nav = Navigator::new(len);
            for target in -4..(len as isize + 4) {
                nav.go_to(target, None);
                let expect = target.clamp(0, len as isize - 1) as usize;
                assert_eq!(nav.current(), expect, "len {len} target {target}");
            }
        }
    }

    #[test]
    fn next_at_last_is_a_no_op() {
        let mut nav = Navigator::new(3);
        nav.go_to(2, None);
        let epoch = nav.epoch();
        nav.next();
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.epoch(), epoch);
    }

    #[test]
    fn prev_at_first_is_a_no_op() {
        let mut nav = Navigator::new(3);
        let epoch = nav.epoch();
        nav.prev();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.epoch(), epoch);
    }

    #[test]
    fn same_index_request_changes_nothing() {
        let mut nav = Navigator::new(4);
        nav.next();
        let (epoch, dir) = (nav.epoch(), nav.direction());
        nav.go_to(nav.current() as isize, None);
        assert_eq!(nav.epoch(), epoch);
        assert_eq!(nav.direction(), dir);
    }

    #[test]
    fn direction_is_inferred_from_the_move() {
        let mut nav = Navigator::new(5);
        nav.go_to(3, None);
        assert_eq!(nav.direction(), Direction::Next);
        nav.go_to(1, None);
        assert_eq!(nav.direction(), Direction::Prev);
    }

    #[test]
    fn explicit_direction_wins_over_inference() {
        let mut nav = Navigator::new(5);
        nav.go_to(3, Some(Direction::Prev));
        assert_eq!(nav.current(), 3);
        assert_eq!(nav.direction(), Direction::Prev);
    }

    #[test]
    fn epoch_bumps_once_per_accepted_navigation() {
        let mut nav = Navigator::new(3);
        nav.next();
        nav.next();
        assert_eq!(nav.epoch(), 2);
        nav.next(); // clamped no-op
        assert_eq!(nav.epoch(), 2);
        nav.prev();
        assert_eq!(nav.epoch(), 3);
    }

    #[test]
    fn repeated_identical_calls_converge() {
        let mut nav = Navigator::new(5);
        nav.go_to(2, None);
        let snapshot = (nav.current(), nav.direction(), nav.epoch());
        for _ in 0..10 {
            nav.go_to(2, None);
        }
        assert_eq!((nav.current(), nav.direction(), nav.epoch()), snapshot);
    }

    #[test]
    fn walkthrough_three_slide_deck() {
        let mut nav = Navigator::new(3);
        nav.next();
        assert_eq!((nav.current(), nav.direction()), (1, Direction::Next));
        nav.next();
        assert_eq!((nav.current(), nav.direction()), (2, Direction::Next));
        nav.next();
        assert_eq!(nav.current(), 2);
        assert!(nav.is_last());
        nav.prev();
        assert_eq!((nav.current(), nav.direction()), (1, Direction::Prev));
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let mut nav = Navigator::new(1);
        nav.next();
        nav.prev();
        nav.go_to(10, None);
        nav.go_to(-10, None);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.epoch(), 0);
        assert!(nav.is_first() && nav.is_last());
    }
}
