//! Session lifecycle: the aggregate session state and its controller.
//!
//! A [`SessionController`] owns at most one [`Session`] at a time plus the
//! sticky post-jump mode flags. Keystrokes go in through [`feed_key`]; what
//! comes back is a render instruction — show the (narrowed) tag map, apply a
//! jump, or clear the overlays. All caret effects are returned as data for
//! the host to apply.
//!
//! [`feed_key`]: SessionController::feed_key

use std::ops::Range;
use std::sync::Arc;

use crate::engine::engine_for;
use crate::query::Popped;
use crate::{
    Boundary, JumpError, JumpOptions, Occurrence, QueryState, QueryStatus, Scope, SearchMode,
    TagMap, scope_boundary,
};

//------------------------------------------------------------------------------
/// Read access to the host editor's document and viewport.
///
/// The engine never queries the editor behind the host's back: everything it
/// needs is snapshotted through this trait when a session starts, and the
/// content version is re-checked on every keystroke so stale offsets are
/// never applied.
pub trait EditorView {
    /// Full document text snapshot.
    fn text(&self) -> Arc<str>;
    /// Monotonic counter the host bumps on every edit.
    fn content_version(&self) -> u64;
    /// Current caret offset in bytes.
    fn caret_offset(&self) -> usize;
    /// On-screen byte range.
    fn visible_range(&self) -> Range<usize>;
}

/// A keystroke delivered to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Cancels the session.
    Escape,
    /// Undoes the last character.
    Backspace,
}

/// What happens at the target once a jump resolves.
///
/// A single field instead of the pair of toggles it replaces: target and
/// definition mode can never both be active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JumpMode {
    /// Move the caret.
    #[default]
    Normal,
    /// Move the caret and select the word under it.
    Target,
    /// Move the caret and trigger go-to-declaration.
    Definition,
}

/// The caret effect the host applies for a resolved jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpEffect {
    /// Move the caret to the target offset.
    MoveCaret,
    /// Select from `anchor` (the caret at session start) to the target.
    SelectFromCaret {
        /// Selection anchor offset.
        anchor: usize,
    },
    /// Move the caret and select the word at the target.
    SelectWord,
    /// Move the caret and invoke go-to-declaration.
    GoToDeclaration,
}

/// A resolved jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jump {
    /// Byte offset of the resolved occurrence.
    pub offset: usize,
    /// Effect the host applies at the offset.
    pub effect: JumpEffect,
}

/// Render instruction returned for each call into the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedOutcome {
    /// The tag map changed; re-render [`Session::visible_tags`].
    ShowTags,
    /// The session resolved; apply the jump and clear overlays.
    Jump(Jump),
    /// Input matches nothing; the session ended, clear overlays.
    NoMatch,
    /// The session was torn down (escape, document change, staleness).
    Cancelled,
    /// No session is active; the key is not for the engine.
    Ignored,
}

//------------------------------------------------------------------------------
/// One search-and-jump interaction, from trigger to resolution or teardown.
#[derive(Clone, Debug)]
pub struct Session {
    text: Arc<str>,
    version: u64,
    caret: usize,
    boundary: Boundary,
    query: QueryState,
    tags: TagMap,
    shift_pending: bool,
}

impl Session {
    fn start(view: &dyn EditorView, mode: SearchMode, boundary: Boundary) -> Session {
        let text = view.text();
        let boundary = boundary.clip(text.len());
        Session {
            version: view.content_version(),
            caret: view.caret_offset().min(text.len()),
            boundary,
            query: QueryState::new(mode),
            tags: TagMap::default(),
            shift_pending: false,
            text,
        }
    }

    fn rescan(&mut self, options: &JumpOptions) {
        let engine = engine_for(self.query.mode(), self.query.search_text(), options.case);
        let occurrences = engine.scan(&self.text, &self.boundary);
        debug!("engine {engine} found {} occurrence(s)", occurrences.len());
        self.tags = TagMap::assign(
            &occurrences,
            &self.text,
            &options.alphabet,
            self.caret,
            self.query.mode().query_len(),
            options.avoid_lookahead,
        );
    }

    /// The current tag map, in document order.
    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    /// The query input state.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The machine state against the current tag map.
    pub fn status(&self) -> QueryStatus {
        self.query.status(&self.tags)
    }

    /// Caret offset captured at session start.
    pub fn anchor(&self) -> usize {
        self.caret
    }

    /// The tags still live under the typed label prefix, as
    /// `(label, suffix still to type, occurrence)` in document order. This
    /// is what the host renders after a `ShowTags` outcome.
    pub fn visible_tags(&self) -> Vec<(&str, &str, Occurrence)> {
        let typed = self.query.label_input();
        self.tags
            .candidates(typed)
            .map(|(label, occurrence)| (label, &label[typed.len()..], occurrence))
            .collect()
    }
}

//------------------------------------------------------------------------------
/// Top-level orchestrator: owns the single active session and the jump-mode
/// flags, and routes keystrokes through the query state machine.
#[derive(Debug)]
pub struct SessionController {
    options: JumpOptions,
    jump_mode: JumpMode,
    session: Option<Session>,
}

impl SessionController {
    /// Creates a controller with the given options.
    pub fn new(options: JumpOptions) -> Self {
        SessionController {
            options,
            jump_mode: JumpMode::default(),
            session: None,
        }
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// True while a session is running.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The current post-jump mode. Consumed by the next jump, then reset.
    pub fn jump_mode(&self) -> JumpMode {
        self.jump_mode
    }

    /// Toggles target mode; `explicit` forces a state instead of flipping.
    /// Enabling target mode disables definition mode. Returns the new state.
    pub fn toggle_target_mode(&mut self, explicit: Option<bool>) -> bool {
        let enable = explicit.unwrap_or(self.jump_mode != JumpMode::Target);
        debug!("setting target mode to {enable}");
        self.jump_mode = if enable { JumpMode::Target } else { JumpMode::Normal };
        enable
    }

    /// Toggles definition mode; `explicit` forces a state instead of
    /// flipping. Enabling definition mode disables target mode. Returns the
    /// new state.
    pub fn toggle_definition_mode(&mut self, explicit: Option<bool>) -> bool {
        let enable = explicit.unwrap_or(self.jump_mode != JumpMode::Definition);
        debug!("setting definition mode to {enable}");
        self.jump_mode = if enable { JumpMode::Definition } else { JumpMode::Normal };
        enable
    }

    /// Starts a session, tearing down any prior one.
    ///
    /// For modes that label upfront (`Word`, `Line`, `Pattern`) the initial
    /// tag map is computed immediately and an empty scan ends the session
    /// with `NoMatch`; for `Char`/`Bigram` the map stays empty until the
    /// first query character arrives.
    pub fn start_session(
        &mut self,
        view: &dyn EditorView,
        mode: SearchMode,
        boundary: Boundary,
    ) -> FeedOutcome {
        let mut session = Session::start(view, mode, boundary);
        debug!(
            "session start: {:?} over {} region(s), {} byte(s)",
            session.query.mode(),
            session.boundary.ranges().len(),
            session.text.len()
        );
        if session.query.query_complete() {
            session.rescan(&self.options);
            if session.tags.is_empty() {
                debug!("{}", JumpError::NoOccurrencesFound);
                self.session = None;
                return FeedOutcome::NoMatch;
            }
        }
        self.session = Some(session);
        FeedOutcome::ShowTags
    }

    /// Starts a session over a caret-relative scope of the viewport.
    pub fn start_scoped(
        &mut self,
        view: &dyn EditorView,
        mode: SearchMode,
        scope: Scope,
    ) -> FeedOutcome {
        let len = view.text().len();
        let boundary = scope_boundary(scope, view.visible_range(), view.caret_offset(), len);
        self.start_session(view, mode, boundary)
    }

    /// Feeds one keystroke to the active session.
    ///
    /// Keys arriving with no active session, or after a terminal outcome,
    /// come back `Ignored`. A content version that moved under the session
    /// is an implicit cancel; the stale key is never applied.
    pub fn feed_key(&mut self, view: &dyn EditorView, key: Key) -> FeedOutcome {
        let Some(mut session) = self.session.take() else {
            return FeedOutcome::Ignored;
        };

        let actual = view.content_version();
        if actual != session.version {
            debug!(
                "{}",
                JumpError::StaleSession {
                    expected: session.version,
                    actual,
                }
            );
            return FeedOutcome::Cancelled;
        }

        match key {
            Key::Escape => FeedOutcome::Cancelled,
            Key::Backspace => {
                let outcome = match session.query.pop_char() {
                    Popped::Query => {
                        session.rescan(&self.options);
                        FeedOutcome::ShowTags
                    }
                    Popped::Label => FeedOutcome::ShowTags,
                    Popped::Nothing => FeedOutcome::Ignored,
                };
                self.session = Some(session);
                outcome
            }
            Key::Char(ch) => {
                let selecting = session.query.query_complete();
                if selecting {
                    session.shift_pending = ch.is_uppercase();
                }
                session.query.push_char(ch);
                if !selecting {
                    session.rescan(&self.options);
                    // A partial query with no occurrences is already dead:
                    // further characters can only narrow the match set.
                    if session.tags.is_empty() {
                        debug!("{}", JumpError::NoOccurrencesFound);
                        return FeedOutcome::NoMatch;
                    }
                }
                match session.status() {
                    QueryStatus::Resolved(occurrence) => {
                        FeedOutcome::Jump(self.resolve(&session, occurrence))
                    }
                    QueryStatus::NoMatch => FeedOutcome::NoMatch,
                    QueryStatus::Searching | QueryStatus::AwaitingLabel => {
                        self.session = Some(session);
                        FeedOutcome::ShowTags
                    }
                }
            }
        }
    }

    /// Cancels the active session unconditionally, discarding all state.
    pub fn cancel_session(&mut self) -> FeedOutcome {
        match self.session.take() {
            Some(_) => FeedOutcome::Cancelled,
            None => FeedOutcome::Ignored,
        }
    }

    /// The host document changed; any active session is torn down.
    pub fn on_document_changed(&mut self) {
        if self.session.take().is_some() {
            debug!("document changed, session cancelled");
        }
    }

    fn resolve(&mut self, session: &Session, occurrence: Occurrence) -> Jump {
        let effect = if session.shift_pending {
            JumpEffect::SelectFromCaret {
                anchor: session.caret,
            }
        } else {
            match self.jump_mode {
                JumpMode::Target => JumpEffect::SelectWord,
                JumpMode::Definition => JumpEffect::GoToDeclaration,
                JumpMode::Normal => JumpEffect::MoveCaret,
            }
        };
        debug!("jumping to offset {} ({effect:?})", occurrence.offset);
        self.jump_mode = JumpMode::default();
        Jump {
            offset: occurrence.offset,
            effect,
        }
    }
}
