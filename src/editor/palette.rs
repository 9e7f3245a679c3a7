//! Draggable item templates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Key the palette type travels under in the drag-transfer channel.
pub const TRANSFER_KEY: &str = "application/concerto";

/// One of the fixed declaration kinds offered in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteItem {
	/// A concept declaration.
	Concept,
	/// An asset declaration.
	Asset,
	/// An enumeration.
	Enum,
}

impl PaletteItem {
	/// Sidebar order.
	pub const ALL: [PaletteItem; 3] = [Self::Concept, Self::Asset, Self::Enum];

	/// Name carried through the transfer channel.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Concept => "Concept",
			Self::Asset => "Asset",
			Self::Enum => "Enum",
		}
	}

	/// Label given to a freshly dropped node.
	pub fn default_label(self) -> String {
		format!("New {}", self.as_str())
	}
}

impl fmt::Display for PaletteItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Transfer payload that names no palette item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown palette item: {0:?}")]
pub struct UnknownPaletteItem(pub String);

impl FromStr for PaletteItem {
	type Err = UnknownPaletteItem;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|item| item.as_str() == s)
			.ok_or_else(|| UnknownPaletteItem(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_names() {
		for item in PaletteItem::ALL {
			assert_eq!(item.as_str().parse::<PaletteItem>(), Ok(item));
		}
	}

	#[test]
	fn rejects_empty_and_foreign_payloads() {
		assert!("".parse::<PaletteItem>().is_err());
		assert!("concept".parse::<PaletteItem>().is_err());
		let err = "https://example.com".parse::<PaletteItem>().unwrap_err();
		assert_eq!(err.to_string(), "unknown palette item: \"https://example.com\"");
	}

	#[test]
	fn default_label_names_the_kind() {
		assert_eq!(PaletteItem::Asset.default_label(), "New Asset");
		assert_eq!(PaletteItem::Enum.to_string(), "Enum");
	}
}
