//! The renumbering pass.
//!
//! Walks a task list line by line. Nothing is touched until the section marker shows up; from then
//! on, every `- [ ] N. Analyze <name>` opens a block, and every placeholder sub-task inside that
//! block gets relabelled `N.1`, `N.2`, ... in order of appearance, whatever its depth. The section
//! never closes once entered.

use tracing::instrument;

use crate::line::{LineKind, SubTaskNumber, render_sub_task};

pub const DEFAULT_SECTION_MARKER: &str = "## File Analysis Tasks";

/// What a rewrite did. Purely informational: the rewritten text is the same whether or not anyone
/// looks at this.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
	/// Whether the section marker was found at all.
	pub section_found: bool,
	pub main_tasks: usize,
	/// Sub-task lines that received a number (including ones that already had the right one).
	pub sub_tasks: usize,
	/// Lines whose text differs from the input.
	pub changed: usize,
	/// 1-indexed line numbers of indented checkboxes inside a block that were left alone because they
	/// don't have the placeholder shape.
	pub skipped: Vec<usize>,
}

/// Sub-task counter of the main task currently being walked.
#[derive(Debug)]
struct Block<'a> {
	main: &'a str,
	seq: u64,
}

impl<'a> Block<'a> {
	fn next(&mut self) -> SubTaskNumber<'a> {
		self.seq += 1;
		SubTaskNumber { main: self.main, seq: self.seq }
	}
}

#[derive(Clone, Debug)]
pub struct Renumberer {
	section_marker: String,
}

impl Default for Renumberer {
	fn default() -> Self {
		Self::new(DEFAULT_SECTION_MARKER)
	}
}

impl Renumberer {
	pub fn new(section_marker: impl Into<String>) -> Self {
		Self {
			section_marker: section_marker.into(),
		}
	}

	/// Rewrite `content`, returning the new text and a summary of what happened.
	///
	/// Lines are split on `\n` and joined back the same way, so a trailing newline survives.
	#[instrument(skip_all, fields(marker = %self.section_marker))]
	pub fn rewrite(&self, content: &str) -> (String, Report) {
		let mut report = Report::default();
		let mut out: Vec<String> = Vec::new();
		let mut in_section = false;
		let mut block: Option<Block> = None;

		for (idx, line) in content.split('\n').enumerate() {
			let kind = LineKind::classify(line);

			if let Some(current) = block.as_mut() {
				if kind.is_boundary() {
					block = None;
				} else {
					match kind {
						LineKind::SubTask { depth, payload } => {
							let number = current.next();
							let rewritten = render_sub_task(depth, number, payload);
							tracing::trace!(line = idx + 1, %number, "renumbered sub-task");
							report.sub_tasks += 1;
							if rewritten != line {
								report.changed += 1;
							}
							out.push(rewritten);
						}
						LineKind::StrayCheckbox => {
							tracing::debug!(line = idx + 1, content = line, "checkbox inside task block does not match the sub-task shape, leaving as is");
							report.skipped.push(idx + 1);
							out.push(line.to_owned());
						}
						_ => out.push(line.to_owned()),
					}
					continue;
				}
			}

			if line.contains(self.section_marker.as_str()) {
				if !in_section {
					tracing::debug!(line = idx + 1, "entered file analysis section");
				}
				in_section = true;
				report.section_found = true;
				out.push(line.to_owned());
				continue;
			}

			if in_section && let LineKind::MainTask { number, name } = kind {
				tracing::trace!(line = idx + 1, number, name, "main task");
				report.main_tasks += 1;
				block = Some(Block { main: number, seq: 0 });
			}
			out.push(line.to_owned());
		}

		tracing::info!(
			section_found = report.section_found,
			main_tasks = report.main_tasks,
			sub_tasks = report.sub_tasks,
			changed = report.changed,
			skipped = report.skipped.len(),
			"rewrite complete"
		);
		(out.join("\n"), report)
	}
}

/// Renumber with the default `## File Analysis Tasks` marker.
pub fn fix_all_formatting(content: &str) -> String {
	Renumberer::default().rewrite(content).0
}
