//! Application state and list view state definitions.

use crate::api_client::ApiClient;
use crate::config::TuiConfig;
use crate::nav::View;
use crate::notifications::{Notification, NotificationAction, NotificationLevel};
use crate::rowkey::{RowKey, RowKeyAssigner};
use crate::theme::Theme;
use crate::types::PostRecord;
use std::ops::Range;

/// Lifecycle of the one-shot list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(String),
}

/// Page sizes the grid offers. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub fn all() -> &'static [PageSize] {
        &[PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty]
    }

    pub fn as_usize(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }

    pub fn from_u64(value: u64) -> Option<PageSize> {
        match value {
            10 => Some(PageSize::Ten),
            25 => Some(PageSize::TwentyFive),
            50 => Some(PageSize::Fifty),
            _ => None,
        }
    }

    pub fn next(&self) -> PageSize {
        match self {
            PageSize::Ten => PageSize::TwentyFive,
            PageSize::TwentyFive => PageSize::Fifty,
            PageSize::Fifty => PageSize::Ten,
        }
    }
}

/// Client-side pagination over the already-loaded list. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub size: PageSize,
    pub page: usize,
}

impl PageState {
    pub fn new(size: PageSize) -> Self {
        Self { size, page: 0 }
    }

    pub fn page_count(&self, len: usize) -> usize {
        let size = self.size.as_usize();
        len.div_ceil(size).max(1)
    }

    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let size = self.size.as_usize();
        let start = (self.page * size).min(len);
        let end = (start + size).min(len);
        start..end
    }

    pub fn clamp(&mut self, len: usize) {
        let last = self.page_count(len) - 1;
        if self.page > last {
            self.page = last;
        }
    }

    pub fn next_page(&mut self, len: usize) {
        if self.page + 1 < self.page_count(len) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Switch the page size, keeping the first visible row visible.
    pub fn set_size(&mut self, size: PageSize, len: usize) {
        let first = self.page * self.size.as_usize();
        self.size = size;
        self.page = first / size.as_usize();
        self.clamp(len);
    }
}

/// One of the per-row menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    View,
    Edit,
    Delete,
}

impl MenuEntry {
    pub fn all() -> &'static [MenuEntry] {
        &[MenuEntry::View, MenuEntry::Edit, MenuEntry::Delete]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::View => "View",
            MenuEntry::Edit => "Edit",
            MenuEntry::Delete => "Delete",
        }
    }

    pub fn next(&self) -> MenuEntry {
        match self {
            MenuEntry::View => MenuEntry::Edit,
            MenuEntry::Edit => MenuEntry::Delete,
            MenuEntry::Delete => MenuEntry::View,
        }
    }

    pub fn prev(&self) -> MenuEntry {
        match self {
            MenuEntry::View => MenuEntry::Delete,
            MenuEntry::Edit => MenuEntry::View,
            MenuEntry::Delete => MenuEntry::Edit,
        }
    }
}

/// Row action menu. At most one menu is open at a time; opening a menu for
/// another row replaces the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open { row: RowKey, cursor: MenuEntry },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }
}

pub struct ListViewState {
    pub posts: Vec<PostRecord>,
    pub keys: Vec<RowKey>,
    pub assigner: RowKeyAssigner,
    pub phase: LoadPhase,
    pub selected: Option<RowKey>,
    pub page: PageState,
    pub menu: MenuState,
}

impl ListViewState {
    pub fn new(size: PageSize) -> Self {
        Self::with_assigner(size, RowKeyAssigner::default())
    }

    pub fn with_assigner(size: PageSize, assigner: RowKeyAssigner) -> Self {
        Self {
            posts: Vec::new(),
            keys: Vec::new(),
            assigner,
            phase: LoadPhase::Loading,
            selected: None,
            page: PageState::new(size),
            menu: MenuState::Closed,
        }
    }

    /// Replace the list wholesale with a freshly fetched one.
    pub fn apply_loaded(&mut self, posts: Vec<PostRecord>) {
        self.posts = posts;
        self.assigner.reset();
        self.keys = self.assigner.keys_for(&self.posts);
        self.phase = LoadPhase::Loaded;
        self.menu = MenuState::Closed;
        self.page.clamp(self.posts.len());
        self.select_first_visible();
    }

    pub fn apply_failed(&mut self, message: String) {
        self.phase = LoadPhase::Failed(message);
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.page.visible_range(self.posts.len())
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = (&RowKey, &PostRecord)> {
        let range = self.visible_range();
        self.keys[range.clone()].iter().zip(&self.posts[range])
    }

    pub fn row_by_key(&self, key: &RowKey) -> Option<&PostRecord> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|index| &self.posts[index])
    }

    fn select_first_visible(&mut self) {
        let range = self.visible_range();
        self.selected = self.keys.get(range.start).cloned();
    }

    fn selected_position_in_page(&self) -> Option<usize> {
        let range = self.visible_range();
        let selected = self.selected.as_ref()?;
        self.keys[range].iter().position(|k| k == selected)
    }

    pub fn select_next(&mut self) {
        let range = self.visible_range();
        let len = range.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        let next = match self.selected_position_in_page() {
            Some(pos) => (pos + 1) % len,
            None => 0,
        };
        self.selected = Some(self.keys[range.start + next].clone());
    }

    pub fn select_previous(&mut self) {
        let range = self.visible_range();
        let len = range.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        let prev = match self.selected_position_in_page() {
            Some(0) | None => len - 1,
            Some(pos) => pos - 1,
        };
        self.selected = Some(self.keys[range.start + prev].clone());
    }

    pub fn next_page(&mut self) {
        self.page.next_page(self.posts.len());
        self.select_first_visible();
    }

    pub fn prev_page(&mut self) {
        self.page.prev_page();
        self.select_first_visible();
    }

    pub fn cycle_page_size(&mut self) {
        self.page.set_size(self.page.size.next(), self.posts.len());
        if self.selected_position_in_page().is_none() {
            self.select_first_visible();
        }
    }

    /// Open the action menu for the currently selected row.
    pub fn open_menu(&mut self) {
        if let Some(row) = self.selected.clone() {
            self.open_menu_for(row);
        }
    }

    /// Open the action menu for a specific row, replacing any open menu.
    pub fn open_menu_for(&mut self, row: RowKey) {
        self.menu = MenuState::Open {
            row,
            cursor: MenuEntry::View,
        };
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn menu_cursor_next(&mut self) {
        if let MenuState::Open { cursor, .. } = &mut self.menu {
            *cursor = cursor.next();
        }
    }

    pub fn menu_cursor_prev(&mut self) {
        if let MenuState::Open { cursor, .. } = &mut self.menu {
            *cursor = cursor.prev();
        }
    }

    /// Consume the open menu as a view action; returns the row to show.
    pub fn view_request(&mut self) -> Option<RowKey> {
        match std::mem::replace(&mut self.menu, MenuState::Closed) {
            MenuState::Open { row, .. } => Some(row),
            MenuState::Closed => None,
        }
    }

    /// Consume the open menu as an edit action. Placeholder: closes the menu.
    pub fn edit_request(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// Consume the open menu as a delete action; returns the natural
    /// identifier to delete, if the row has one. The menu closes either way.
    pub fn delete_request(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.menu, MenuState::Closed) {
            MenuState::Open { row, .. } => self
                .row_by_key(&row)
                .and_then(|post| post.natural_id())
                .map(str::to_string),
            MenuState::Closed => None,
        }
    }

    /// Drop a row after its deletion was confirmed by the server.
    pub fn remove_by_id(&mut self, id: &str) {
        let Some(index) = self.posts.iter().position(|p| p.natural_id() == Some(id)) else {
            return;
        };
        self.posts.remove(index);
        self.assigner.reset();
        self.keys = self.assigner.keys_for(&self.posts);
        self.page.clamp(self.posts.len());
        if self.selected_position_in_page().is_none() {
            self.select_first_visible();
        }
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub api: ApiClient,
    pub active_view: View,
    pub detail_row: Option<RowKey>,
    pub list_view: ListViewState,
    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(config: TuiConfig, api: ApiClient) -> Self {
        let size = PageSize::from_u64(config.default_page_size).unwrap_or(PageSize::Ten);
        Self {
            config,
            theme: Theme::default(),
            api,
            active_view: View::PostList,
            detail_row: None,
            list_view: ListViewState::new(size),
            notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn notify_with_action(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
        action: NotificationAction,
    ) {
        self.notifications
            .push(Notification::new(level, message).with_action(action));
    }

    pub fn open_detail(&mut self, row: RowKey) {
        self.detail_row = Some(row);
        self.active_view = View::PostDetail;
    }

    pub fn close_detail(&mut self) {
        self.detail_row = None;
        self.active_view = View::PostList;
    }
}

// ============================================================================
// TESTS
// ============================================================================
