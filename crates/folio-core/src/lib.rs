//! Folio Core Library
//!
//! The decision logic behind the portfolio page effects, free of any DOM.
//!
//! ## Overview
//!
//! Every page behavior is an explicit state object owned by its component:
//!
//! - [`ViewportWatcher`] + [`NavHighlighter`]: which nav link is current
//! - [`Typewriter`]: the self-rescheduling phrase typing machine
//! - [`OneShotGroup`], [`CounterRamp`], [`plan_fills`]: one-shot viewport
//!   animations
//! - [`ThemeSwitcher`]: palette cycling with a persisted index
//! - [`MobileMenu`], [`TabSet`], [`ChromeState`]: smaller page chrome
//! - [`Router`]: delegated event routing table
//! - [`TimerSlot`]: at most one pending timer per machine
//!
//! The browser binding reads the page into these types, calls their
//! operations, and projects the resulting fields back onto the DOM.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{PageConfig, Typewriter};
//! use rand::SeedableRng;
//!
//! let config = PageConfig::default();
//! let mut typewriter = Typewriter::from_config(&config.typewriter).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let tick = typewriter.tick(&mut rng);
//! assert_eq!(tick.text, "");
//! assert_eq!(typewriter.offset(), 1);
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod menu;
pub mod nav;
pub mod oneshot;
pub mod progress;
pub mod router;
pub mod scheduler;
pub mod scroll;
pub mod tabs;
pub mod theme;
pub mod typewriter;

// Re-exports
pub use config::PageConfig;
pub use counter::{CounterRamp, CounterTarget, Frame};
pub use error::{FolioError, FolioResult};
pub use menu::MobileMenu;
pub use nav::{NavHighlighter, NavLink, SectionEntry, ViewportWatcher};
pub use oneshot::{OneShot, OneShotGroup, VisibilityEntry};
pub use progress::{plan_fills, FillStep, ProgressBar};
pub use router::Router;
pub use scheduler::{Cancel, ManualScheduler, ManualTimer, TimerSlot};
pub use scroll::{scroll_offset, ChromeState, LinkTarget};
pub use tabs::{TabSelection, TabSet};
pub use theme::{default_themes, MemoryStore, PreferenceStore, Theme, ThemeSwitcher};
pub use typewriter::{Cursor, Phase, Tick, Typewriter, TypewriterTimings};
