use storefront_types::domain::menu::MenuItem;

/// Menu items of the restaurant currently being browsed.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    menu_items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn set_menu_items(&mut self, menu_items: Vec<MenuItem>) {
        self.menu_items = menu_items;
    }

    pub fn push(&mut self, item: MenuItem) {
        self.menu_items.push(item);
    }

    /// Drops a deleted item from the cached list. No-op when absent.
    pub fn delete_menu_item(&mut self, menu_item_id: &str) {
        self.menu_items.retain(|item| item.id != menu_item_id);
    }
}
