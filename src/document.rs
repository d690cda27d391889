//! Reading and writing the task list.

use std::{fs, io::ErrorKind, path::Path};

use crate::{
	error::{Error, Result},
	renumber::{Renumberer, Report},
};

/// Full text of a task list, with line endings normalized to `\n`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
	content: String,
}

impl Document {
	/// `\r\n` and lone `\r` both become `\n`.
	pub fn from_text(text: &str) -> Self {
		let content = if text.contains('\r') { text.replace("\r\n", "\n").replace('\r', "\n") } else { text.to_owned() };
		Self { content }
	}

	pub fn load(path: &Path) -> Result<Self> {
		match fs::read_to_string(path) {
			Ok(text) => {
				tracing::debug!(path = %path.display(), bytes = text.len(), "loaded task list");
				Ok(Self::from_text(&text))
			}
			Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound { path: path.to_owned() }),
			Err(source) => Err(Error::Io {
				action: "read",
				path: path.to_owned(),
				source,
			}),
		}
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn renumber(&mut self, renumberer: &Renumberer) -> Report {
		let (content, report) = renumberer.rewrite(&self.content);
		self.content = content;
		report
	}

	/// Overwrite `path` with the document, in place. Symlinks are followed and the file keeps its
	/// inode, owner and mode.
	pub fn save(&self, path: &Path) -> Result<()> {
		fs::write(path, &self.content).map_err(|source| Error::Io {
			action: "write",
			path: path.to_owned(),
			source,
		})?;

		tracing::debug!(path = %path.display(), bytes = self.content.len(), "wrote task list");
		Ok(())
	}
}
