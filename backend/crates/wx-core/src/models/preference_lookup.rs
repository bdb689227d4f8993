use crate::PreferenceView;

/// Outcome of reading preferences for a user.
///
/// Reading is create-on-read: the first lookup for an unknown user inserts a
/// default record and reports `Created`. Every later lookup reports `Existing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceLookup {
    Existing(PreferenceView),
    Created(PreferenceView),
}

impl PreferenceLookup {
    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn view(&self) -> &PreferenceView {
        match self {
            Self::Existing(view) | Self::Created(view) => view,
        }
    }

    pub fn into_view(self) -> PreferenceView {
        match self {
            Self::Existing(view) | Self::Created(view) => view,
        }
    }
}
