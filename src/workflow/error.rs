use thiserror::Error;

/// Failure taxonomy for workflow editing and persistence. Display
/// strings are shown verbatim as user notices.
#[derive(Debug, Error)]
pub enum WorkflowError {
	/// Attempted edge has neither endpoint on the root node; rejected
	/// with no state change.
	#[error("Edges can only connect to the Payment Initialize node!")]
	ConnectivityViolation,

	/// The store or an imported file held unparsable content.
	#[error("Saved workflow is malformed: {0}")]
	MalformedPersistedData(#[from] serde_json::Error),

	/// Load requested before anything was saved.
	#[error("No saved workflow found.")]
	EmptyPersistedData,

	/// The browser denied access to localStorage.
	#[error("Browser storage is unavailable.")]
	StorageUnavailable,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connectivity_message_matches_notice_text() {
		assert_eq!(
			WorkflowError::ConnectivityViolation.to_string(),
			"Edges can only connect to the Payment Initialize node!"
		);
	}

	#[test]
	fn malformed_wraps_serde_detail() {
		let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let wrapped = WorkflowError::from(err);
		assert!(wrapped.to_string().starts_with("Saved workflow is malformed:"));
	}
}
