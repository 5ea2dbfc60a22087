//! Navigation between the list and detail views.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    PostList,
    PostDetail,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::PostList => "Posts",
            View::PostDetail => "Post Detail",
        }
    }
}
