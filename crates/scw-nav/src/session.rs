//! The navigation session: the current topic list, the selection, and the
//! history stack behind it.

use thiserror::Error;

use crate::topic::Topic;

/// Error returned when a selection does not refer to a listed topic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The selection index is outside the currently offered list.
    #[error("no topic at position {index}; {available} topics are on offer")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// How many topics were on offer at the time.
        available: usize,
    },
}

/// What [`NavigationSession::go_back`] did, and what the caller still owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a NeedsRootReload outcome requires the caller to reload the root topics"]
pub enum BackOutcome {
    /// One history entry was popped and the view moved up a level.
    SteppedBack,
    /// The history stack was empty. The session was left untouched; the
    /// caller should fetch the root topic list again and `reset` with it.
    NeedsRootReload,
}

/// In-memory state of one topic-browsing session.
///
/// The session owns the fetched tree and walks it: selecting a topic narrows
/// the offered list to that topic's suggestions, going back pops the nearest
/// ancestor. Backing out of the last stacked level does not replay cached
/// root data; it asks the caller for a fresh root load instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSession {
    /// The list currently offered for selection.
    current_topics: Vec<Topic>,
    /// The most recently chosen node, `None` at the root.
    selected_topic: Option<Topic>,
    /// Ancestors chosen before `selected_topic`, popped nearest-first.
    history: Vec<Topic>,
    /// True until the first selection after a load or reset.
    at_first_level: bool,
    /// True once a leaf topic has been selected.
    depth_reached: bool,
}

impl Default for NavigationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSession {
    /// A session with nothing loaded yet.
    pub fn new() -> Self {
        Self {
            current_topics: Vec::new(),
            selected_topic: None,
            history: Vec::new(),
            at_first_level: true,
            depth_reached: false,
        }
    }

    /// Seed the session with a freshly fetched root topic list.
    ///
    /// Any selection and history from a previous walk is discarded.
    pub fn reset(&mut self, topics: Vec<Topic>) {
        self.current_topics = topics;
        self.selected_topic = None;
        self.history.clear();
        self.at_first_level = true;
        self.depth_reached = false;
    }

    /// Choose the topic at `index` in the currently offered list.
    ///
    /// The previous selection is pushed onto the history stack, except for
    /// the very first selection after a load: the root list is not a topic
    /// and must not leave a phantom entry behind. Selecting a leaf empties
    /// the offered list and marks the depth as reached.
    ///
    /// On an out-of-range index the session is left untouched.
    pub fn select_topic(&mut self, index: usize) -> Result<&Topic, NavError> {
        let available = self.current_topics.len();
        let Some(topic) = self.current_topics.get(index).cloned() else {
            return Err(NavError::OutOfRange { index, available });
        };

        if !self.at_first_level {
            if let Some(previous) = self.selected_topic.take() {
                self.history.push(previous);
            }
        }

        self.current_topics = topic.suggestions.clone();
        self.depth_reached = self.current_topics.is_empty();
        self.at_first_level = false;
        Ok(self.selected_topic.insert(topic))
    }

    /// Step back up one level.
    ///
    /// Pops the nearest ancestor, re-selects it and offers its suggestions
    /// again. History entries are only ever pushed below the first level, so
    /// landing on one keeps the session below the first level too. With no
    /// history to pop the session is left untouched and the caller is asked
    /// to reload the root list.
    pub fn go_back(&mut self) -> BackOutcome {
        let Some(previous) = self.history.pop() else {
            return BackOutcome::NeedsRootReload;
        };

        self.current_topics = previous.suggestions.clone();
        self.depth_reached = self.current_topics.is_empty();
        self.at_first_level = false;
        self.selected_topic = Some(previous);
        BackOutcome::SteppedBack
    }

    /// Whether a "go back" affordance should be offered right now: hidden at
    /// the first level and hidden once a leaf has been reached.
    pub fn show_back_button(&self) -> bool {
        !self.depth_reached && !self.at_first_level
    }

    /// The list currently offered for selection.
    pub fn current_topics(&self) -> &[Topic] {
        &self.current_topics
    }

    /// The most recently chosen topic, `None` at the root.
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected_topic.as_ref()
    }

    /// Ancestors of the current selection, oldest first.
    pub fn history(&self) -> &[Topic] {
        &self.history
    }

    /// True until the first selection after a load or reset.
    pub fn at_first_level(&self) -> bool {
        self.at_first_level
    }

    /// True once a leaf topic has been selected.
    pub fn depth_reached(&self) -> bool {
        self.depth_reached
    }
}
