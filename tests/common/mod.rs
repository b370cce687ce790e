use std::ops::Range;
use std::sync::Arc;

use jumptag::prelude::*;

/// A scriptable stand-in for the host editor.
pub struct TestView {
    pub text: Arc<str>,
    pub version: u64,
    pub caret: usize,
    pub visible: Range<usize>,
}

impl TestView {
    pub fn new(text: &str) -> Self {
        TestView {
            text: text.into(),
            version: 0,
            caret: 0,
            visible: 0..text.len(),
        }
    }

    pub fn with_caret(mut self, caret: usize) -> Self {
        self.caret = caret;
        self
    }
}

impl EditorView for TestView {
    fn text(&self) -> Arc<str> {
        self.text.clone()
    }

    fn content_version(&self) -> u64 {
        self.version
    }

    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn visible_range(&self) -> Range<usize> {
        self.visible.clone()
    }
}

/// Routes engine logs into the test harness output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A controller over a small fixed alphabet, defaults otherwise.
pub fn controller(alphabet: &str) -> SessionController {
    let options = JumpOptionsBuilder::default()
        .alphabet(Alphabet::new(alphabet))
        .build()
        .unwrap();
    SessionController::new(options)
}

/// The labeled offsets currently on screen, keyed by full label.
pub fn shown(controller: &SessionController) -> Vec<(String, usize)> {
    controller
        .session()
        .map(|session| {
            session
                .visible_tags()
                .iter()
                .map(|(label, _, occ)| (label.to_string(), occ.offset))
                .collect()
        })
        .unwrap_or_default()
}
