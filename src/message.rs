use crate::state::TagFilter;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    NavigateTo(String),
    NextSection,
    PrevSection,
    OpenProject(String),
    BackToProjects,
    HistoryBack,
    HistoryForward,

    // Gallery
    SelectTag(TagFilter),
    SearchChanged(String),
    ClearFilter,

    // Contact
    SubmitContact,

    // UI
    ToggleTheme,
    ToggleLang,
    OpenUrl(String),
}
