//! The widget itself: representative identity plus topic navigation,
//! fed by the HTTP gateway.

use scw_client::SupportClient;
use scw_nav::{BackOutcome, NavigationSession, Topic};

use crate::error::WidgetError;

/// Front-end state of the support chat widget.
///
/// Owns the gateway and the navigation session, and mirrors the
/// representative identity shown in the widget header. All mutation goes
/// through `&mut self`, so a fetch can never race an earlier one into the
/// session.
#[derive(Debug)]
pub struct ChatWidget {
    client: SupportClient,
    session: NavigationSession,
    representative_name: Option<String>,
    representative_id: Option<i64>,
    representative_image: Option<String>,
}

impl ChatWidget {
    /// A widget with nothing fetched yet.
    pub fn new(client: SupportClient) -> Self {
        Self {
            client,
            session: NavigationSession::new(),
            representative_name: None,
            representative_id: None,
            representative_image: None,
        }
    }

    /// Fetches the available representative, then the root topics.
    ///
    /// When the representative fetch fails the widget stays anonymous and
    /// the topics request is not attempted at all.
    pub async fn initialize(&mut self) -> Result<(), WidgetError> {
        let representative = match self.client.representative().await {
            Ok(representative) => representative,
            Err(err) => {
                tracing::error!(error = %err, "Error fetching representative");
                return Err(err.into());
            }
        };

        self.representative_image = Some(representative.profile_image_path());
        self.representative_id = Some(representative.id);
        self.representative_name = Some(representative.name);

        self.load_topics().await
    }

    /// Fetches the root topic list and rebuilds the session around it.
    ///
    /// On failure the session keeps whatever tree it already had.
    pub async fn load_topics(&mut self) -> Result<(), WidgetError> {
        match self.client.topics().await {
            Ok(topics) => {
                self.session.reset(topics);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching topics");
                Err(err.into())
            }
        }
    }

    /// Drills into the topic at `index` of the currently offered list.
    pub fn select_topic(&mut self, index: usize) -> Result<&Topic, WidgetError> {
        Ok(self.session.select_topic(index)?)
    }

    /// Steps one level back up the tree.
    ///
    /// With the history exhausted this refetches the root list instead,
    /// so stale root data is never replayed from memory.
    pub async fn go_back(&mut self) -> Result<(), WidgetError> {
        match self.session.go_back() {
            BackOutcome::SteppedBack => Ok(()),
            BackOutcome::NeedsRootReload => self.load_topics().await,
        }
    }

    /// Forgets the representative and starts the conversation over with a
    /// freshly fetched root list.
    pub async fn start_again(&mut self) -> Result<(), WidgetError> {
        self.representative_name = None;
        self.representative_id = None;
        self.representative_image = None;
        self.load_topics().await
    }

    /// Whether the back control should be offered right now.
    pub fn show_back_button(&self) -> bool {
        self.session.show_back_button()
    }

    /// Name shown in the widget header, once a representative is known.
    pub fn representative_name(&self) -> Option<&str> {
        self.representative_name.as_deref()
    }

    /// Avatar path derived from the representative's id.
    pub fn representative_image(&self) -> Option<&str> {
        self.representative_image.as_deref()
    }

    /// Backend id of the representative, once known.
    pub const fn representative_id(&self) -> Option<i64> {
        self.representative_id
    }

    /// Read access to the navigation state.
    pub const fn session(&self) -> &NavigationSession {
        &self.session
    }
}
