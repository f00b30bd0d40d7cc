//! Skill bar fill planning.

use std::time::Duration;

/// Widths read from one skill bar, as inline CSS values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressBar {
    /// Current inline width of the fill element
    pub fill_width: Option<String>,
    /// Inline width of the enclosing bar, i.e. where the fill should end up
    pub target_width: Option<String>,
}

impl ProgressBar {
    pub fn new(fill_width: Option<&str>, target_width: Option<&str>) -> Self {
        Self {
            fill_width: fill_width.map(str::to_string),
            target_width: target_width.map(str::to_string),
        }
    }

    /// A fill that already carries a non-zero width has been animated.
    pub fn is_filled(&self) -> bool {
        !is_zero_width(self.fill_width.as_deref())
    }
}

fn is_zero_width(width: Option<&str>) -> bool {
    match width.map(str::trim) {
        None | Some("") | Some("0%") => true,
        Some(_) => false,
    }
}

/// A width to apply after `delay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillStep {
    pub index: usize,
    pub width: String,
    pub delay: Duration,
}

/// Plan the staggered fills for one batch of bars. Bar `i` fills after
/// `stagger * i`; filled bars and bars without a usable target are skipped
/// but still occupy their slot in the stagger.
pub fn plan_fills(bars: &[ProgressBar], stagger: Duration) -> Vec<FillStep> {
    bars.iter()
        .enumerate()
        .filter(|(_, bar)| !bar.is_filled())
        .filter_map(|(index, bar)| {
            let width = bar.target_width.as_deref()?.trim();
            if is_zero_width(Some(width)) {
                return None;
            }
            Some(FillStep {
                index,
                width: width.to_string(),
                delay: stagger * index as u32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGGER: Duration = Duration::from_millis(150);

    #[test]
    fn staggers_by_index() {
        let bars = vec![
            ProgressBar::new(None, Some("90%")),
            ProgressBar::new(Some("0%"), Some("75%")),
            ProgressBar::new(Some(""), Some("60%")),
        ];
        let plan = plan_fills(&bars, STAGGER);
        let delays: Vec<_> = plan.iter().map(|s| s.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 150, 300]);
        assert_eq!(plan[1].width, "75%");
    }

    #[test]
    fn skips_filled_and_empty_targets() {
        let bars = vec![
            ProgressBar::new(Some("80%"), Some("80%")),
            ProgressBar::new(None, Some("0%")),
            ProgressBar::new(None, None),
            ProgressBar::new(None, Some("45%")),
        ];
        let plan = plan_fills(&bars, STAGGER);
        assert_eq!(
            plan,
            vec![FillStep {
                index: 3,
                width: "45%".to_string(),
                delay: Duration::from_millis(450),
            }]
        );
    }

    #[test]
    fn empty_batch_plans_nothing() {
        assert!(plan_fills(&[], STAGGER).is_empty());
    }
}
