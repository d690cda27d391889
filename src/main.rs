use color_eyre::eyre::Result;
use tasks_fmt::{Document, Error, Renumberer, Settings};

mod logging;

fn main() -> Result<()> {
	color_eyre::install()?;
	logging::init()?;

	let settings = Settings::load()?;
	tracing::debug!(?settings, "loaded settings");

	let mut document = match Document::load(&settings.path) {
		Ok(document) => document,
		Err(Error::NotFound { path }) => {
			tracing::debug!(path = %path.display(), "task list not found, nothing to do");
			println!("Error: Could not find {}", path.display());
			println!("Make sure you're running this script from the correct directory.");
			return Ok(());
		}
		Err(e) => return Err(e.into()),
	};

	let report = document.renumber(&Renumberer::new(settings.section_marker.as_str()));
	if !report.section_found {
		tracing::info!(marker = %settings.section_marker, "section marker not found, file left as is");
	}
	document.save(&settings.path)?;

	println!("All task formatting fixed successfully!");
	println!("✅ Main tasks: - [ ] X. Analyze filename");
	println!("✅ Sub-tasks: - [ ] X.Y Lines A-B: Content analysis needed");
	println!("✅ Nested sub-tasks: - [ ] X.Y Lines A-B: Content analysis needed");
	Ok(())
}
