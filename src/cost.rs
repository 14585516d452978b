use crate::space::Line;

/// Travel time, in minutes.
pub type Minutes = u32;

/// Cost of reaching a child from its parent.
///
/// The line-change penalty applies only when the parent was reached through a
/// line and the child is reached through a different one. Saturates rather
/// than overflowing.
#[inline(always)]
#[must_use]
pub fn step_cost(
    parent_g: Minutes,
    parent_line: Option<&Line>,
    step: Minutes,
    line: Option<&Line>,
    line_change_cost: Minutes,
) -> Minutes {
    let g = parent_g.saturating_add(step);
    match (parent_line, line) {
        (Some(from), Some(to)) if from != to => g.saturating_add(line_change_cost),
        _ => g,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_line_has_no_penalty() {
        let l = Line::new("Central");
        assert_eq!(step_cost(10, Some(&l), 3, Some(&l), 5), 13);
    }

    #[test]
    fn line_change_adds_penalty() {
        let a = Line::new("Central");
        let b = Line::new("Victoria");
        assert_eq!(step_cost(10, Some(&a), 3, Some(&b), 5), 18);
    }

    #[test]
    fn leaving_the_start_is_not_a_change() {
        let b = Line::new("Victoria");
        assert_eq!(step_cost(0, None, 3, Some(&b), 5), 3);
    }

    #[test]
    fn saturates() {
        assert_eq!(step_cost(Minutes::MAX, None, 3, None, 0), Minutes::MAX);
    }
}
