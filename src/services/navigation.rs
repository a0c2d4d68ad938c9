/// Performs a hard, full-page navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
