/// How long a posted notice stays visible, in milliseconds.
pub const NOTICE_TTL_MS: f64 = 3_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
	Info,
	Error,
}

/// A transient status message with an explicit expiry instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub text: String,
	pub expires_at: f64,
}

/// Holds at most one notice. Posting replaces whatever is showing and
/// restarts the clock; expiry is decided against timestamps passed in
/// by the caller, so the board itself never reads a clock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
	current: Option<Notice>,
}

impl NoticeBoard {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn current(&self) -> Option<&Notice> {
		self.current.as_ref()
	}

	pub fn post(&mut self, kind: NoticeKind, text: impl Into<String>, now_ms: f64) {
		self.current = Some(Notice {
			kind,
			text: text.into(),
			expires_at: now_ms + NOTICE_TTL_MS,
		});
	}

	/// Dismisses the notice once its expiry has passed. Returns whether
	/// anything was cleared.
	pub fn sweep(&mut self, now_ms: f64) -> bool {
		match &self.current {
			Some(notice) if now_ms >= notice.expires_at => {
				self.current = None;
				true
			}
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_blank() {
		let board = NoticeBoard::new();
		assert!(board.current().is_none());
	}

	#[test]
	fn posted_notice_carries_its_expiry() {
		let mut board = NoticeBoard::new();
		board.post(NoticeKind::Info, "Workflow saved!", 1_000.0);
		let notice = board.current().unwrap();
		assert_eq!(notice.kind, NoticeKind::Info);
		assert_eq!(notice.text, "Workflow saved!");
		assert_eq!(notice.expires_at, 1_000.0 + NOTICE_TTL_MS);
	}

	#[test]
	fn sweep_keeps_a_live_notice() {
		let mut board = NoticeBoard::new();
		board.post(NoticeKind::Error, "nope", 0.0);
		assert!(!board.sweep(NOTICE_TTL_MS - 1.0));
		assert!(board.current().is_some());
	}

	#[test]
	fn sweep_clears_exactly_at_expiry() {
		let mut board = NoticeBoard::new();
		board.post(NoticeKind::Info, "done", 0.0);
		assert!(board.sweep(NOTICE_TTL_MS));
		assert!(board.current().is_none());
	}

	#[test]
	fn sweep_on_a_blank_board_is_a_no_op() {
		let mut board = NoticeBoard::new();
		assert!(!board.sweep(10_000.0));
	}

	#[test]
	fn posting_again_supersedes_and_pushes_the_expiry_out() {
		let mut board = NoticeBoard::new();
		board.post(NoticeKind::Info, "first", 0.0);
		board.post(NoticeKind::Error, "second", 2_000.0);
		let notice = board.current().unwrap();
		assert_eq!(notice.text, "second");
		assert_eq!(notice.expires_at, 2_000.0 + NOTICE_TTL_MS);
		// a sweep scheduled for the first notice must not clear the second
		assert!(!board.sweep(NOTICE_TTL_MS));
		assert!(board.current().is_some());
	}
}
