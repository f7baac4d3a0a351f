/// Problems with the page content. None of these reach the visitor: each is
/// logged and recovered where it is found.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// An icon name or reference that the icon table cannot resolve.
    #[error("unknown icon reference `{0}`")]
    UnknownIcon(String),

    /// A program card with nothing to list.
    #[error("program `{title}` has no bullet items")]
    EmptyProgram { title: String },

    /// Negative or not a number.
    #[error("stat `{label}` has invalid reveal delay {delay}s")]
    NegativeDelay { label: String, delay: f32 },

    /// Stagger delays must grow along the sequence.
    #[error("stat `{label}` reveal delay {delay}s does not follow previous delay {previous}s")]
    DelayOutOfOrder {
        label: String,
        delay: f32,
        previous: f32,
    },
}
