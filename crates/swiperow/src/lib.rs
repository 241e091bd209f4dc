#![forbid(unsafe_code)]

//! Swipeable list rows: drag projection, release snapping, and spring settle.
//!
//! # Role
//! `swiperow` is the interaction engine behind a horizontally swipeable list
//! item with a panel revealed on either side. It is host-agnostic: a platform
//! adapter feeds it pan samples, layout measurements, and frame ticks, and
//! renders whatever offsets and progress values it reports back.
//!
//! # Primary responsibilities
//! - **DragProjector**: maps raw drag translation to a visual offset, with
//!   rubber-band resistance past each panel edge, and panel reveal progress.
//! - **ProjectionGraph**: memoizes the projection and rebuilds it only when a
//!   structural dependency (friction, overshoot, widths, trigger) changes.
//! - **Release resolution**: picks the snap target when a drag ends, with
//!   hysteresis and a one-shot left trigger.
//! - **SettleAnimator**: springs the row to its target and reports
//!   `Will*`/completion events.
//! - **SwipeableRow**: the per-row state machine and imperative handle
//!   (`open`, `close`, `reset`).
//! - **Focus placement**: where a long-pressed row and its options go.
//!
//! # How it fits in a host
//! The host owns rendering and touch recognition. Every mutating call on a
//! [`SwipeableRow`] returns the [`SwipeEvent`]s it produced, in order; the
//! host dispatches them to its callbacks. Nothing here blocks or spawns.

pub mod animation;
pub mod config;
pub mod event;
pub mod focus;
pub mod gesture;
pub mod graph;
pub mod interpolate;
pub mod metrics;
pub mod projector;
pub mod release;
pub mod row;
pub mod state;

pub use animation::{SettleAnimator, Spring};
pub use config::{ConfigError, SpringConfig, SwipeConfig};
pub use event::SwipeEvent;
pub use focus::{FocusGeometry, FocusLayout, MeasureError, RowBounds, RowMeasurer};
pub use gesture::{GesturePhase, GestureSample};
pub use metrics::PanelMetrics;
pub use projector::{DragProjector, Projection};
pub use row::{PanelFrame, SwipeableRow};
pub use state::{Direction, PointerPolicy, RowState};
