//! Name-based lookup for the built-in themes.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::builtins;
use super::types::Theme;

struct Registry {
	names: Vec<String>,
	by_key: HashMap<String, Theme>,
}

fn registry() -> &'static Registry {
	static REGISTRY: OnceLock<Registry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		let mut names = Vec::new();
		let mut by_key = HashMap::new();

		for registration in builtins::registrations() {
			names.push(registration.name.clone());
			by_key.insert(registration.name.to_ascii_lowercase(), registration.theme);
			for alias in &registration.aliases {
				by_key
					.entry(alias.to_ascii_lowercase())
					.or_insert(registration.theme);
			}
		}

		Registry { names, by_key }
	})
}

/// Canonical names of the available themes, in bundle order.
#[must_use]
pub fn theme_names() -> Vec<String> {
	registry().names.clone()
}

/// Resolve a theme by name or alias, case-insensitively.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().by_key.get(&name.trim().to_ascii_lowercase()).copied()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_names_and_aliases() {
		assert!(by_name("slate").is_some());
		assert!(by_name("SLATE").is_some());
		assert!(by_name("dark").is_some());
		assert!(by_name("paper").is_some());
		assert!(by_name("light").is_some());
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn lists_canonical_names_only() {
		let names = theme_names();
		assert!(names.contains(&"slate".to_string()));
		assert!(names.contains(&"paper".to_string()));
		assert!(!names.contains(&"dark".to_string()));
	}
}
