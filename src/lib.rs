//! Renumbers the sub-tasks of a task list's "File Analysis Tasks" section.
//!
//! ```
//! let input = "## File Analysis Tasks\n- [ ] 2. Analyze foo.rs\n  - [ ] Lines 1-10: Content analysis needed";
//! assert_eq!(
//! 	tasks_fmt::fix_all_formatting(input),
//! 	"## File Analysis Tasks\n- [ ] 2. Analyze foo.rs\n  - [ ] 2.1 Lines 1-10: Content analysis needed"
//! );
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod line;
pub mod renumber;

pub use config::Settings;
pub use document::Document;
pub use error::{Error, Result};
pub use line::{Depth, LineKind, SubTaskNumber};
pub use renumber::{DEFAULT_SECTION_MARKER, Renumberer, Report, fix_all_formatting};
