//! Autocomplete widgets.
//!
//! The widget system is split in two layers:
//!
//! - [`AutoComplete`]: the matcher/selector state machine. It owns the
//!   candidate pool, the query, the ranked matches and the selection cursor,
//!   and requests repaints through a [`Signal`](onevone_core::Signal).
//! - [`AutoCompleteBinder`]: wires one input field to one matcher, turning
//!   focus, input, key-down and click events into matcher transitions and
//!   painting render requests into the field's results container.
//!
//! # Events
//!
//! Handlers return an [`EventResponse`] describing whether the event was
//! consumed and whether the default action should be suppressed:
//!
//! | Event                   | Matcher transition       | Response          |
//! |-------------------------|--------------------------|-------------------|
//! | focus                   | `reset_to(value, target)`| handled           |
//! | input                   | `update(value)`          | handled           |
//! | ArrowDown / ArrowUp     | `select_next/previous`   | default prevented |
//! | Enter (with selection)  | commit, `reset()`        | handled           |
//! | Enter (no selection)    | none                     | ignored           |
//! | Escape                  | `reset()`                | handled           |
//! | click on a result row   | commit, `reset()`        | handled           |

pub mod autocomplete;
pub mod binder;
pub mod events;

pub use autocomplete::{AutoComplete, AutoCompleteOptions, RenderSnapshot};
pub use binder::{AutoCompleteBinder, RenderTarget};
pub use events::{EventResponse, Key, PageEvent};
