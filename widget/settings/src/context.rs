/// Page environment, probed once at init by the host and fed to the pure
/// settings logic so it never touches a wall clock or the DOM.
#[derive(Debug, Clone, Default)]
pub struct ApplyContext {
    /// Local hour, 0-23.
    pub local_hour: u32,
    /// `location.pathname` of the embedding page.
    pub page_path: String,
    /// The `prefers-reduced-motion` media query matched.
    pub prefers_reduced_motion: bool,
    /// The viewport is phone-sized.
    pub is_mobile: bool,
}
