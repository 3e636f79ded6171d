//! Creator entity model.

use serde::Serialize;
use sqlx::FromRow;
use swipedeck_core::platform::Platform;
use swipedeck_core::slug::CreatorPlatformRef;
use swipedeck_core::types::Timestamp;

/// A row from the `creators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Creator {
    pub creator_id: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub x_handle: Option<String>,
    pub linkedin_handle: Option<String>,
    pub substack_handle: Option<String>,
    pub updated_at: Timestamp,
}

impl Creator {
    /// The creator's handle on `platform`, ignoring blank values.
    pub fn handle(&self, platform: Platform) -> Option<&str> {
        let handle = match platform {
            Platform::X => &self.x_handle,
            Platform::LinkedIn => &self.linkedin_handle,
            Platform::Substack => &self.substack_handle,
        };
        handle.as_deref().filter(|h| !h.trim().is_empty())
    }

    /// Platforms this creator has a handle on, in display order.
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|&p| self.handle(p).is_some())
            .collect()
    }

    /// One page reference per platform the creator is on.
    pub fn pages(&self) -> Vec<CreatorPlatformRef> {
        self.platforms()
            .into_iter()
            .map(|p| CreatorPlatformRef::new(self.creator_id.as_str(), p))
            .collect()
    }
}
