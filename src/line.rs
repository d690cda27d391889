//! Line classification for task list documents.
//!
//! Every line of a task list falls into one of a handful of shapes. Only three of them matter to
//! the renumbering pass: main tasks (`- [ ] 3. Analyze foo.rs`), the sub-task placeholders beneath
//! them, and anything else that starts like a main task and therefore closes the current block.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// `- [ ] 12. Analyze src/lib.rs`
static MAIN_TASK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- \[ \] ([0-9]+)\. Analyze (.+)$").expect("valid regex"));

/// Looser than [`MAIN_TASK`]: no name required after `Analyze`.
static MAIN_TASK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- \[ \] [0-9]+\. Analyze").expect("valid regex"));

static SUB_TASK: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^( {2}| {4}| {6}| {8})- \[ \] (?:[0-9]+\.[0-9]+ )?(Lines [0-9]+-[0-9]+: Content analysis needed)$").expect("valid regex")
});

/// Indentation of a sub-task line. Only these four depths are recognized.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Depth {
	Two,
	Four,
	Six,
	Eight,
}

impl Depth {
	pub fn from_spaces(n: usize) -> Option<Self> {
		match n {
			2 => Some(Self::Two),
			4 => Some(Self::Four),
			6 => Some(Self::Six),
			8 => Some(Self::Eight),
			_ => None,
		}
	}

	pub fn spaces(self) -> usize {
		match self {
			Self::Two => 2,
			Self::Four => 4,
			Self::Six => 6,
			Self::Eight => 8,
		}
	}

	pub fn indent(self) -> &'static str {
		&"        "[..self.spaces()]
	}
}

/// Main task number as written, minus leading zeros (`007` -> `7`, `000` -> `0`). Kept as text since
/// it is only ever printed back, so there is no upper bound.
pub fn canonical_digits(digits: &str) -> &str {
	let trimmed = digits.trim_start_matches('0');
	if trimmed.is_empty() && !digits.is_empty() { "0" } else { trimmed }
}

/// Numeric label of a sub-task: `<main>.<seq>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubTaskNumber<'a> {
	pub main: &'a str,
	pub seq: u64,
}

impl fmt::Display for SubTaskNumber<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.main, self.seq)
	}
}

/// What a single line is, as far as renumbering is concerned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineKind<'a> {
	/// `- [ ] N. Analyze <name>`, `number` in [`canonical_digits`] form.
	MainTask { number: &'a str, name: &'a str },
	/// Starts like a main task but isn't one (`- [ ] 3. Analyzer`). Still ends the block of the
	/// preceding main task.
	Boundary,
	/// A placeholder sub-task at one of the recognized depths. `payload` is everything after the
	/// (optional, discarded) numeric prefix.
	SubTask { depth: Depth, payload: &'a str },
	/// An indented checkbox that is not a recognized sub-task. Passed through untouched.
	StrayCheckbox,
	Other,
}

impl<'a> LineKind<'a> {
	pub fn classify(line: &'a str) -> Self {
		if let Some(caps) = MAIN_TASK.captures(line) {
			let number = caps.get(1).map_or("", |m| canonical_digits(m.as_str()));
			let name = caps.get(2).map_or("", |m| m.as_str());
			return Self::MainTask { number, name };
		}
		if MAIN_TASK_BOUNDARY.is_match(line) {
			return Self::Boundary;
		}

		if let Some(caps) = SUB_TASK.captures(line) {
			let indent = caps.get(1).map_or(0, |m| m.len());
			if let (Some(depth), Some(payload)) = (Depth::from_spaces(indent), caps.get(2)) {
				return Self::SubTask { depth, payload: payload.as_str() };
			}
		}

		let trimmed = line.trim_start();
		if trimmed.len() != line.len() && trimmed.starts_with("- [") {
			return Self::StrayCheckbox;
		}

		Self::Other
	}

	/// Whether this line closes the block of the current main task.
	pub fn is_boundary(&self) -> bool {
		matches!(self, Self::MainTask { .. } | Self::Boundary)
	}
}

/// Render a sub-task line with a fresh number.
pub fn render_sub_task(depth: Depth, number: SubTaskNumber<'_>, payload: &str) -> String {
	format!("{}- [ ] {number} {payload}", depth.indent())
}
