//! Property-based tests for the page state machines
//!
//! Uses proptest to verify the invariants the page relies on: typewriter
//! offsets stay in bounds, nav highlighting is exclusive, counters land on
//! their target, theme cycling is circular.

use folio_core::config::{AnimationConfig, NavConfig};
use folio_core::{
    default_themes, CounterRamp, CounterTarget, MemoryStore, NavHighlighter, OneShotGroup,
    SectionEntry, ThemeSwitcher, Typewriter, TypewriterTimings, ViewportWatcher, VisibilityEntry,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Phrase lists, including empty phrases and multi-byte characters
fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zé✓ ]{0,12}").expect("valid regex"),
        1..6,
    )
}

const SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Observer batches over known and unknown section ids
fn batches_strategy() -> impl Strategy<Value = Vec<Vec<SectionEntry>>> {
    let entry = (0..7usize, any::<bool>(), -400.0..900.0f64).prop_map(|(i, hit, top)| {
        let id = SECTIONS.get(i).copied().unwrap_or("stats");
        SectionEntry::new(id, hit, top)
    });
    prop::collection::vec(prop::collection::vec(entry, 0..5), 0..20)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Offset stays within [0, len] and deleting only flips at the boundaries
    #[test]
    fn typewriter_offset_in_bounds(
        phrases in phrases_strategy(),
        seed in any::<u64>(),
        ticks in 1..400usize,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tw = Typewriter::new(phrases, TypewriterTimings::default()).unwrap();

        for _ in 0..ticks {
            let before_deleting = tw.is_deleting();
            let before_offset = tw.offset();
            let before_len = tw.current_len();

            tw.tick(&mut rng);

            prop_assert!(tw.offset() <= tw.current_len());
            if tw.is_deleting() != before_deleting {
                prop_assert!(before_offset == 0 || before_offset == before_len);
            }
        }
    }

    /// A full type + delete cycle advances the phrase index by exactly one
    #[test]
    fn typewriter_cycle_advances_index(phrases in phrases_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tw = Typewriter::new(phrases.clone(), TypewriterTimings::default()).unwrap();

        for round in 0..phrases.len() * 2 {
            let start = tw.index();
            let len = tw.current_len();
            // len typing ticks, one flip, len deleting ticks, one flip
            for _ in 0..(2 * len + 2) {
                tw.tick(&mut rng);
            }
            prop_assert_eq!(tw.index(), (start + 1) % phrases.len(), "round {}", round);
            prop_assert_eq!(tw.offset(), 0);
            prop_assert!(!tw.is_deleting());
        }
    }

    /// Zero or one link active at all times; exactly one once anything focused
    #[test]
    fn nav_highlight_is_exclusive(batches in batches_strategy(), header in 0.0..150.0f64) {
        let watcher = ViewportWatcher::new(Some(header), &NavConfig::default());
        let mut nav = NavHighlighter::new(SECTIONS);
        let mut ever_focused = false;

        for batch in &batches {
            nav.apply(&watcher, batch);
            ever_focused |= batch
                .iter()
                .any(|e| watcher.qualifies(e) && SECTIONS.contains(&e.id.as_str()));

            prop_assert!(nav.active_count() <= 1);
            if ever_focused {
                prop_assert_eq!(nav.active_count(), 1);
            }
        }
    }

    /// Re-delivering a batch never changes the outcome
    #[test]
    fn nav_apply_is_idempotent(batch in prop::collection::vec(
        (0..5usize, any::<bool>(), -200.0..400.0f64)
            .prop_map(|(i, hit, top)| SectionEntry::new(SECTIONS[i], hit, top)),
        0..6,
    )) {
        let watcher = ViewportWatcher::new(None, &NavConfig::default());
        let mut nav = NavHighlighter::new(SECTIONS);
        nav.apply(&watcher, &batch);
        let first = nav.active().map(str::to_string);
        nav.apply(&watcher, &batch);
        prop_assert_eq!(nav.active().map(str::to_string), first);
    }

    /// The last rendered counter value is the target, whatever the rounding
    #[test]
    fn counter_final_frame_exact(
        target in 0u32..1_000_000,
        duration in 0u64..5000,
        frame in 1u64..100,
    ) {
        let config = AnimationConfig {
            counter_duration_ms: duration,
            counter_frame_ms: frame,
            ..AnimationConfig::default()
        };
        let parsed = CounterTarget::parse(&target.to_string()).unwrap();
        let mut ramp = CounterRamp::from_config(parsed, &config);

        let mut last = None;
        let mut previous = 0u64;
        while let Some(f) = ramp.next_frame() {
            if !f.is_final() {
                let shown: u64 = f.text().parse().unwrap();
                prop_assert!(shown >= previous);
                prop_assert!(shown <= target as u64);
                previous = shown;
            }
            last = Some(f);
        }
        let last = last.unwrap();
        prop_assert!(last.is_final());
        prop_assert_eq!(last.text(), target.to_string());
    }

    /// Each element animates at most once however often it is reported
    #[test]
    fn one_shot_group_fires_once(
        len in 1..20usize,
        batches in prop::collection::vec(
            prop::collection::vec((0..25usize, any::<bool>()), 0..10),
            0..15,
        ),
    ) {
        let mut group = OneShotGroup::new(len);
        let mut fired = vec![0u32; len];

        for batch in batches {
            let entries: Vec<_> = batch
                .into_iter()
                .map(|(i, hit)| VisibilityEntry::new(i, hit))
                .collect();
            for index in group.take_ready(&entries) {
                fired[index] += 1;
            }
        }
        prop_assert!(fired.iter().all(|&n| n <= 1));
        prop_assert_eq!(group.remaining(), fired.iter().filter(|&&n| n == 0).count());
    }

    /// Cycling theme_count times returns to the start; storage tracks every change
    #[test]
    fn theme_cycle_is_circular(start in 0..5usize, extra in 0..12usize) {
        let mut store = MemoryStore::new();
        let mut switcher = ThemeSwitcher::new(default_themes(), "portfolioThemeIndex").unwrap();
        switcher.activate(start, &mut store).unwrap();
        let count = switcher.len();

        for _ in 0..count {
            switcher.cycle(&mut store).unwrap();
            let stored = store.get("portfolioThemeIndex").map(str::to_string);
            prop_assert_eq!(stored, Some(switcher.current().to_string()));
        }
        prop_assert_eq!(switcher.current(), start);

        for _ in 0..extra {
            switcher.cycle(&mut store).unwrap();
        }
        prop_assert_eq!(switcher.current(), (start + extra) % count);
    }
}
