//! HTML5 drag-and-drop glue.

use web_sys::DataTransfer;

use crate::editor::TransferChannel;

impl TransferChannel for DataTransfer {
	fn set_payload(&self, key: &str, value: &str) {
		if let Err(err) = self.set_data(key, value) {
			log::warn!("drag payload rejected: {err:?}");
		}
	}

	fn payload(&self, key: &str) -> Option<String> {
		self.get_data(key).ok().filter(|v| !v.is_empty())
	}

	fn set_effect_allowed(&self, effect: &str) {
		DataTransfer::set_effect_allowed(self, effect);
	}

	fn set_drop_effect(&self, effect: &str) {
		DataTransfer::set_drop_effect(self, effect);
	}
}
